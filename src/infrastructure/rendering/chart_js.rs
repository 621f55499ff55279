use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Array, Function, Reflect};
use serde_json::{Value, json};
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use super::IncomeBar;
use crate::application::BarChart;
use crate::domain::{
    errors::{InfrastructureError, InfrastructureResult},
    logging::{LogComponent, get_logger},
};

#[wasm_bindgen]
extern "C" {
    /// Chart.js `Chart` class, loaded by the page
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(context: &CanvasRenderingContext2d, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn update(this: &ChartJs);

    #[wasm_bindgen(method, getter, js_class = "Chart")]
    fn data(this: &ChartJs) -> JsValue;
}

pub const FONT_FAMILY: &str = "'Noto Sans JP', sans-serif";
pub const TEXT_COLOR: &str = "rgba(255, 255, 255, 0.7)";
pub const GRID_COLOR: &str = "rgba(255, 255, 255, 0.1)";
pub const DATASET_LABEL: &str = "月間売上";

/// Y axis ticks in units of 10,000 yen
const TICK_CALLBACK_BODY: &str = "return value / 10000 + '万円';";
const TOOLTIP_CALLBACK_BODY: &str = "return (context.dataset.label || '') + ': ' + \
     new Intl.NumberFormat('ja-JP', { style: 'currency', currency: 'JPY' }).format(context.parsed.y);";

/// Chart.js configuration without the JS callbacks
pub fn income_chart_config() -> Value {
    let bars: Vec<IncomeBar> = IncomeBar::iter().collect();
    json!({
        "type": "bar",
        "data": {
            "labels": bars.iter().map(|b| b.label()).collect::<Vec<_>>(),
            "datasets": [{
                "label": DATASET_LABEL,
                "data": vec![0; bars.len()],
                "backgroundColor": bars.iter().map(|b| b.fill_color()).collect::<Vec<_>>(),
                "borderColor": bars.iter().map(|b| b.border_color()).collect::<Vec<_>>(),
                "borderWidth": 2,
                "borderRadius": 8,
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "ticks": { "color": TEXT_COLOR },
                    "grid": { "color": GRID_COLOR }
                },
                "x": {
                    "grid": { "display": false },
                    "ticks": { "color": TEXT_COLOR }
                }
            },
            "plugins": {
                "legend": { "display": false },
                "tooltip": { "callbacks": {} }
            }
        }
    })
}

/// Whether the page loaded Chart.js
pub fn chart_js_available() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

fn js_err(context: &str, err: JsValue) -> InfrastructureError {
    InfrastructureError::Chart(format!("{}: {:?}", context, err))
}

fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> InfrastructureResult<()> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| InfrastructureError::Chart("empty property path".to_string()))?;
    let mut target = root.clone();
    for key in parents {
        target = Reflect::get(&target, &JsValue::from_str(key)).map_err(|e| js_err(key, e))?;
    }
    Reflect::set(&target, &JsValue::from_str(last), value).map_err(|e| js_err(last, e))?;
    Ok(())
}

/// `BarChart` over a Chart.js instance owned by the page
pub struct ChartJsBarChart {
    chart: ChartJs,
}

impl ChartJsBarChart {
    pub fn new(context: &CanvasRenderingContext2d) -> InfrastructureResult<Self> {
        let class = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
            .map_err(|e| js_err("Chart global", e))?;
        let defaults = Reflect::get(&class, &JsValue::from_str("defaults")).map_err(|e| js_err("defaults", e))?;
        set_path(&defaults, &["font", "family"], &JsValue::from_str(FONT_FAMILY))?;
        set_path(&defaults, &["color"], &JsValue::from_str(TEXT_COLOR))?;

        let config = JsValue::from_serde(&income_chart_config())?;
        set_path(
            &config,
            &["options", "scales", "y", "ticks", "callback"],
            &Function::new_with_args("value", TICK_CALLBACK_BODY),
        )?;
        set_path(
            &config,
            &["options", "plugins", "tooltip", "callbacks", "label"],
            &Function::new_with_args("context", TOOLTIP_CALLBACK_BODY),
        )?;

        let chart = ChartJs::new(context, &config).map_err(|e| js_err("new Chart", e))?;
        get_logger().debug(LogComponent::Infrastructure("ChartJs"), "Income bar chart created");
        Ok(Self { chart })
    }
}

impl BarChart for ChartJsBarChart {
    fn set_dataset_values(&mut self, values: &[f64]) -> InfrastructureResult<()> {
        let datasets = Reflect::get(&self.chart.data(), &JsValue::from_str("datasets"))
            .map_err(|e| js_err("datasets", e))?;
        let dataset = Reflect::get_u32(&datasets, 0).map_err(|e| js_err("datasets[0]", e))?;
        if dataset.is_undefined() {
            return Err(InfrastructureError::Chart("chart has no dataset".to_string()));
        }
        let data: Array = values.iter().map(|v| JsValue::from_f64(*v)).collect();
        Reflect::set(&dataset, &JsValue::from_str("data"), &data).map_err(|e| js_err("data", e))?;
        Ok(())
    }

    fn redraw(&mut self) -> InfrastructureResult<()> {
        self.chart.update();
        Ok(())
    }
}
