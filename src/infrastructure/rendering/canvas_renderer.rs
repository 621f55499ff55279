use strum::IntoEnumIterator;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::IncomeBar;
use crate::application::BarChart;
use crate::domain::{
    errors::{InfrastructureError, InfrastructureResult},
    income::Yen,
    logging::LogComponent,
};
use crate::log_trace;

const PADDING: f64 = 24.0;
const LABEL_SPACE: f64 = 28.0;
const BAR_SHARE: f64 = 0.6;

/// Screen rectangle of one bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Parameters shared by every bar of one frame
#[derive(Debug, Clone, Copy)]
struct ScaleParams {
    chart_width: f64,
    chart_height: f64,
    max_value: f64,
}

impl ScaleParams {
    fn new(values: &[f64], width: f64, height: f64) -> Self {
        let max_value = values.iter().copied().fold(0.0_f64, f64::max);
        Self {
            chart_width: (width - PADDING * 2.0).max(0.0),
            chart_height: (height - PADDING * 2.0 - LABEL_SPACE).max(0.0),
            // bars start at zero; an all-zero frame keeps a unit scale
            max_value: if max_value > 0.0 { max_value } else { 1.0 },
        }
    }
}

/// Lay bars out side by side, zero-based, tallest bar filling the plot
pub fn layout_bars(values: &[f64], width: f64, height: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let scale = ScaleParams::new(values, width, height);
    let slot = scale.chart_width / values.len() as f64;
    let bar_width = slot * BAR_SHARE;
    let baseline = PADDING + scale.chart_height;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let bar_height = value.max(0.0) / scale.max_value * scale.chart_height;
            BarRect {
                x: PADDING + slot * i as f64 + (slot - bar_width) / 2.0,
                y: baseline - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// Plain 2D-canvas bar chart used when Chart.js is not on the page
pub struct CanvasBarChart {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    values: Vec<f64>,
}

impl CanvasBarChart {
    pub fn new(canvas: HtmlCanvasElement, context: CanvasRenderingContext2d) -> Self {
        Self { canvas, context, values: vec![0.0; IncomeBar::iter().count()] }
    }

    fn draw(&self) -> Result<(), JsValue> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let ctx = &self.context;

        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_font("12px 'Noto Sans JP', sans-serif");
        ctx.set_text_align("center");

        let rects = layout_bars(&self.values, width, height);
        for ((bar, rect), value) in IncomeBar::iter().zip(&rects).zip(&self.values) {
            ctx.set_fill_style_str(bar.fill_color());
            ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
            ctx.set_stroke_style_str(bar.border_color());
            ctx.set_line_width(2.0);
            ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);

            let center = rect.x + rect.width / 2.0;
            ctx.set_fill_style_str(super::chart_js::TEXT_COLOR);
            ctx.fill_text(&format!("¥{}", Yen::new(value.max(0.0) as u64)), center, rect.y - 6.0)?;
            ctx.fill_text(bar.label(), center, height - PADDING / 2.0)?;
        }
        Ok(())
    }
}

impl BarChart for CanvasBarChart {
    fn set_dataset_values(&mut self, values: &[f64]) -> InfrastructureResult<()> {
        self.values = values.to_vec();
        Ok(())
    }

    fn redraw(&mut self) -> InfrastructureResult<()> {
        self.draw()
            .map_err(|e| InfrastructureError::Chart(format!("canvas draw failed: {:?}", e)))?;
        log_trace!(LogComponent::Infrastructure("CanvasBarChart"), "Redrew {} bars", self.values.len());
        Ok(())
    }
}
