pub mod dom;
pub mod gemini;
pub mod http;
pub mod rendering;
pub mod services;
