pub mod ask_ai_widget;
pub mod income_simulator;
pub mod scroll_effects;

use gloo::events::EventListener;

use crate::domain::{
    errors::{AppError, AppResult},
    income::SimulatorConfig,
    logging::{LogComponent, get_logger},
    scroll::ScrollConfig,
};
use crate::infrastructure::{dom, gemini::GeminiConfig};
use crate::{log_error, log_info};

/// DOM ids of the income simulator
#[derive(Debug, Clone)]
pub struct IncomeSimulatorIds {
    pub slider: &'static str,
    pub delivery_count: &'static str,
    pub per_piece_income: &'static str,
    pub guarantee_income: &'static str,
    pub chart_canvas: &'static str,
}

/// DOM ids of the FAQ widget
#[derive(Debug, Clone)]
pub struct AskAiIds {
    pub button: &'static str,
    pub question: &'static str,
    pub answer_box: &'static str,
}

/// Selectors of the scroll cosmetics
#[derive(Debug, Clone)]
pub struct ScrollIds {
    pub scroll_top_button: &'static str,
    pub reveal_selector: &'static str,
}

/// Everything the page script needs to find in the markup
#[derive(Debug, Clone)]
pub struct PageIds {
    pub income: IncomeSimulatorIds,
    pub ask_ai: AskAiIds,
    pub scroll: ScrollIds,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            income: IncomeSimulatorIds {
                slider: "delivery-slider",
                delivery_count: "delivery-count",
                per_piece_income: "per-piece-income",
                guarantee_income: "daily-guarantee-income",
                chart_canvas: "incomeChart",
            },
            ask_ai: AskAiIds {
                button: "ask-ai-button",
                question: "ai-question",
                answer_box: "ai-answer-box",
            },
            scroll: ScrollIds {
                scroll_top_button: "scrollTopBtn",
                reveal_selector: ".reveal",
            },
        }
    }
}

/// Page-wide settings handed to each feature
#[derive(Debug, Clone, Default)]
pub struct PageSettings {
    pub ids: PageIds,
    pub simulator: SimulatorConfig,
    pub gemini: GeminiConfig,
    pub scroll: ScrollConfig,
}

/// Install every feature present in the markup. Features are independent:
/// one failing is logged and never blocks the others.
pub fn install_page(settings: &PageSettings) {
    let outcomes: [(&'static str, AppResult<bool>); 3] = [
        ("income simulator", income_simulator::mount(&settings.ids.income, settings.simulator.clone())),
        ("ask-ai widget", ask_ai_widget::mount(&settings.ids.ask_ai, settings.gemini.clone())),
        ("scroll effects", scroll_effects::mount(&settings.ids.scroll, settings.scroll)),
    ];

    for (feature, outcome) in outcomes {
        match outcome {
            Ok(true) => {
                log_info!(LogComponent::Presentation("Page"), "✅ {} ready", feature);
            }
            Ok(false) => get_logger().debug(
                LogComponent::Presentation("Page"),
                &format!("{} not on this page, skipped", feature),
            ),
            Err(e) => report(feature, &e),
        }
    }
}

fn report(feature: &str, error: &AppError) {
    log_error!(LogComponent::Presentation("Page"), "❌ {} failed to start: {}", feature, error);
}

/// Run `install_page` now, or on `DOMContentLoaded` while the document is still parsing
pub fn install_when_ready(settings: PageSettings) {
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => return report("page", &e.into()),
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| install_page(&settings)).forget();
    } else {
        install_page(&settings);
    }
}
