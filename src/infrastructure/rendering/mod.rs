pub mod canvas_renderer;
pub mod chart_js;

pub use canvas_renderer::CanvasBarChart;
pub use chart_js::{ChartJsBarChart, chart_js_available};

use strum::EnumIter;

/// Bars of the income chart, in dataset order
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum IncomeBar {
    PieceRate,
    Guarantee,
}

impl IncomeBar {
    pub fn label(&self) -> &'static str {
        match self {
            IncomeBar::PieceRate => "あなたの月収(個単価)",
            IncomeBar::Guarantee => "日給保証",
        }
    }

    pub fn fill_color(&self) -> &'static str {
        match self {
            IncomeBar::PieceRate => "rgba(56, 189, 248, 0.6)",
            IncomeBar::Guarantee => "rgba(168, 85, 247, 0.6)",
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            IncomeBar::PieceRate => "#38bdf8",
            IncomeBar::Guarantee => "#a855f7",
        }
    }
}
