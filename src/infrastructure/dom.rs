use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::application::{IncomeDisplay, IncomeLabels, SliderControl};
use crate::domain::{
    errors::PresentationError,
    logging::{LogComponent, get_logger},
};

/// HTML range inputs default to `[0, 100]` when `min`/`max` are unset
const RANGE_DEFAULT_MIN: f64 = 0.0;
const RANGE_DEFAULT_MAX: f64 = 100.0;

pub fn document() -> Result<Document, PresentationError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(PresentationError::ElementNotFound("document"))
}

/// Look up an element and cast it to the expected type
pub fn element_by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, PresentationError> {
    document
        .get_element_by_id(id)
        .ok_or(PresentationError::ElementNotFound(id))?
        .dyn_into::<T>()
        .map_err(|_| PresentationError::ElementType(id))
}

/// Like `element_by_id`, but an absent element is `None` rather than an error
pub fn optional_element_by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<Option<T>, PresentationError> {
    match element_by_id(document, id) {
        Ok(element) => Ok(Some(element)),
        Err(PresentationError::ElementNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

fn parse_bound(raw: &str, default: f64) -> f64 {
    raw.trim().parse().unwrap_or(default)
}

/// `SliderControl` over an `<input type="range">`
#[derive(Clone)]
pub struct DomSlider {
    input: HtmlInputElement,
}

impl DomSlider {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }

    pub fn element(&self) -> &HtmlInputElement {
        &self.input
    }
}

impl SliderControl for DomSlider {
    fn value(&self) -> String {
        self.input.value()
    }

    fn value_as_number(&self) -> f64 {
        self.input.value_as_number()
    }

    fn min(&self) -> f64 {
        parse_bound(&self.input.min(), RANGE_DEFAULT_MIN)
    }

    fn max(&self) -> f64 {
        parse_bound(&self.input.max(), RANGE_DEFAULT_MAX)
    }

    fn set_track_background(&mut self, css: &str) {
        if let Err(e) = self.input.style().set_property("background", css) {
            get_logger().warn(
                LogComponent::Infrastructure("DomSlider"),
                &format!("Failed to set slider background: {:?}", e),
            );
        }
    }
}

/// `IncomeDisplay` writing into three text nodes
pub struct DomIncomeLabels {
    delivery_count: Element,
    per_piece_income: Element,
    guarantee_income: Element,
}

impl DomIncomeLabels {
    pub fn new(delivery_count: Element, per_piece_income: Element, guarantee_income: Element) -> Self {
        Self { delivery_count, per_piece_income, guarantee_income }
    }
}

impl IncomeDisplay for DomIncomeLabels {
    fn show(&mut self, labels: &IncomeLabels) {
        self.delivery_count.set_text_content(Some(&labels.deliveries));
        self.per_piece_income.set_text_content(Some(&labels.per_piece_income));
        self.guarantee_income.set_text_content(Some(&labels.guarantee_income));
    }
}
