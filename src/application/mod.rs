pub mod ask_ai;
pub mod income_binding;

pub use ask_ai::{AskAiState, AskAiUseCase};
pub use income_binding::{BarChart, IncomeBinding, IncomeDisplay, IncomeLabels, SliderControl};
