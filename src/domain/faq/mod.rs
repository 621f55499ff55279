pub mod repositories;
pub mod value_objects;

pub use repositories::*;
pub use value_objects::*;
