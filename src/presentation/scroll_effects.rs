use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::Array;
use strum::IntoEnumIterator;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use super::ScrollIds;
use crate::domain::{
    errors::{AppResult, InfrastructureError, PresentationError},
    logging::{LogComponent, get_logger},
    scroll::{REVEAL_ACTIVE_CLASS, ScrollConfig, ScrollTopAction, ScrollTopClass, fade_out_classes},
};
use crate::event_utils::{ListenerFlags, listen_on_window};
use crate::infrastructure::dom;
use crate::log_debug;

fn browser_err(context: &str, err: JsValue) -> InfrastructureError {
    InfrastructureError::Browser(format!("{}: {:?}", context, err))
}

/// Current vertical scroll offset of the page
pub fn scroll_offset(document: &Document) -> f64 {
    let body = document.body().map(|body| body.scroll_top()).unwrap_or(0);
    let root = document.document_element().map(|root| root.scroll_top()).unwrap_or(0);
    f64::from(body.max(root))
}

/// Observe every element matching `selector` and mark it once it scrolls into view.
/// Returns the number of observed elements.
pub fn install_reveal(document: &Document, selector: &str, threshold: f64) -> AppResult<u32> {
    let targets = document.query_selector_all(selector).map_err(|e| browser_err(selector, e))?;
    if targets.length() == 0 {
        return Ok(0);
    }

    let on_intersect = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter().map(|e| e.unchecked_into::<IntersectionObserverEntry>()) {
            if entry.is_intersecting() {
                if let Err(e) = entry.target().class_list().add_1(REVEAL_ACTIVE_CLASS) {
                    get_logger().warn(
                        LogComponent::Presentation("Reveal"),
                        &format!("Failed to activate element: {:?}", e),
                    );
                }
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
        .map_err(|e| browser_err("IntersectionObserver", e))?;
    on_intersect.forget();

    for i in 0..targets.length() {
        if let Some(element) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    Ok(targets.length())
}

fn apply_scroll_top(button: &Element, document: &Document, config: ScrollConfig) {
    let classes = button.class_list();
    let result = match config.action_for(scroll_offset(document)) {
        ScrollTopAction::Show => {
            let all: Array = ScrollTopClass::iter().map(|c| JsValue::from_str(c.as_ref())).collect();
            classes.remove(&all)
        }
        ScrollTopAction::FadeOut => {
            let fading: Array = fade_out_classes().iter().map(|c| JsValue::from_str(c.as_ref())).collect();
            let added = classes.add(&fading);

            let button = button.clone();
            let document = document.clone();
            Timeout::new(config.hide_delay_ms, move || {
                if !config.should_hide_after_fade(scroll_offset(&document)) {
                    return;
                }
                if let Err(e) = button.class_list().add_1(ScrollTopClass::Hidden.as_ref()) {
                    get_logger().warn(
                        LogComponent::Presentation("ScrollTop"),
                        &format!("Failed to hide button: {:?}", e),
                    );
                }
            })
            .forget();
            added
        }
    };
    if let Err(e) = result {
        get_logger().warn(
            LogComponent::Presentation("ScrollTop"),
            &format!("Failed to toggle button classes: {:?}", e),
        );
    }
}

/// Show the button past the threshold and scroll smoothly to the top on click
pub fn install_scroll_top(document: &Document, button: HtmlElement, config: ScrollConfig) -> AppResult<()> {
    let on_scroll_button = button.clone();
    let on_scroll_document = document.clone();
    listen_on_window(leptos::ev::scroll, ListenerFlags::passive(), move |_| {
        apply_scroll_top(&on_scroll_button, &on_scroll_document, config)
    })
    .ok_or_else(|| PresentationError::EventBinding("window scroll".to_string()))?
    .forget();

    EventListener::new(&button, "click", |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    })
    .forget();
    Ok(())
}

/// Install reveal-on-scroll and the scroll-to-top button. The two parts
/// are independent; `Ok(false)` means neither was on the page.
pub fn mount(ids: &ScrollIds, config: ScrollConfig) -> AppResult<bool> {
    let document = dom::document()?;

    let revealed = match install_reveal(&document, ids.reveal_selector, config.reveal_threshold) {
        Ok(count) => count,
        Err(e) => {
            get_logger().error(
                LogComponent::Presentation("Reveal"),
                &format!("Reveal-on-scroll not installed: {}", e),
            );
            0
        }
    };
    if revealed > 0 {
        log_debug!(LogComponent::Presentation("Reveal"), "Observing {} elements", revealed);
    }

    let Some(button) = dom::optional_element_by_id::<HtmlElement>(&document, ids.scroll_top_button)? else {
        return Ok(revealed > 0);
    };
    install_scroll_top(&document, button, config)?;
    Ok(true)
}
