pub mod config;
pub mod services;
pub mod value_objects;

pub use config::*;
pub use services::*;
pub use value_objects::*;
