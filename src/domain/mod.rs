pub mod errors;
pub mod faq;
pub mod income;
pub mod logging;
pub mod scroll;
