use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Entry point: wire logging, then install the page features once the DOM is ready
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::for_build());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Recruit page script loaded");

    presentation::install_when_ready(presentation::PageSettings::default());
}
