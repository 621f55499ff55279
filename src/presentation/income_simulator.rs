use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlInputElement};

use super::IncomeSimulatorIds;
use crate::application::{BarChart, IncomeBinding};
use crate::domain::{
    errors::{AppError, AppResult, DomainError, PresentationError},
    income::{IncomeProjectionService, SimulatorConfig},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::{
    dom::{self, DomIncomeLabels, DomSlider},
    rendering::{CanvasBarChart, ChartJsBarChart, chart_js_available},
};

pub type PageIncomeBinding = IncomeBinding<DomSlider, DomIncomeLabels, Box<dyn BarChart>>;

struct SimulatorElements {
    slider: HtmlInputElement,
    canvas: HtmlCanvasElement,
    delivery_count: Element,
    per_piece_income: Element,
    guarantee_income: Element,
}

fn find_elements(ids: &IncomeSimulatorIds) -> AppResult<Option<SimulatorElements>> {
    let document = dom::document()?;
    let slider = dom::optional_element_by_id::<HtmlInputElement>(&document, ids.slider)?;
    let canvas = dom::optional_element_by_id::<HtmlCanvasElement>(&document, ids.chart_canvas)?;
    let delivery_count = dom::optional_element_by_id::<Element>(&document, ids.delivery_count)?;
    let per_piece_income = dom::optional_element_by_id::<Element>(&document, ids.per_piece_income)?;
    let guarantee_income = dom::optional_element_by_id::<Element>(&document, ids.guarantee_income)?;

    match (slider, canvas, delivery_count, per_piece_income, guarantee_income) {
        (Some(slider), Some(canvas), Some(delivery_count), Some(per_piece_income), Some(guarantee_income)) => {
            Ok(Some(SimulatorElements { slider, canvas, delivery_count, per_piece_income, guarantee_income }))
        }
        _ => Ok(None),
    }
}

fn create_chart(canvas: HtmlCanvasElement) -> AppResult<Box<dyn BarChart>> {
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(PresentationError::ElementType("2d canvas context"))?;

    if chart_js_available() {
        Ok(Box::new(ChartJsBarChart::new(&context)?))
    } else {
        get_logger().warn(
            LogComponent::Presentation("IncomeSimulator"),
            "Chart.js not loaded, drawing the income chart on a plain canvas",
        );
        Ok(Box::new(CanvasBarChart::new(canvas, context)))
    }
}

fn report_refresh_error(error: &AppError) {
    let component = LogComponent::Presentation("IncomeSimulator");
    match error {
        AppError::Domain(DomainError::UnparsableSliderValue(_)) => {
            get_logger().warn(component, &format!("Ignoring slider input: {}", error))
        }
        _ => get_logger().error(component, &format!("Income refresh failed: {}", error)),
    }
}

/// Wire the slider to the labels and chart. Returns `Ok(false)` when the
/// page lacks any of the simulator's elements.
pub fn mount(ids: &IncomeSimulatorIds, config: SimulatorConfig) -> AppResult<bool> {
    let Some(elements) = find_elements(ids)? else {
        return Ok(false);
    };
    let service = IncomeProjectionService::new(config)?;
    let chart = create_chart(elements.canvas)?;
    let slider = DomSlider::new(elements.slider);
    let labels = DomIncomeLabels::new(elements.delivery_count, elements.per_piece_income, elements.guarantee_income);

    let binding: Rc<RefCell<PageIncomeBinding>> =
        Rc::new(RefCell::new(IncomeBinding::new(service, slider.clone(), labels, chart)));

    if let Err(e) = binding.borrow_mut().refresh() {
        report_refresh_error(&e);
    }

    let on_input = Rc::clone(&binding);
    EventListener::new(slider.element(), "input", move |_| {
        // skip re-entrant input events
        let Ok(mut binding) = on_input.try_borrow_mut() else {
            return;
        };
        if let Err(e) = binding.refresh() {
            report_refresh_error(&e);
        }
    })
    .forget();

    Ok(true)
}
