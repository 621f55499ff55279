use std::rc::Rc;

use gloo::events::EventListener;
use leptos::{SignalSet, SignalWith, SignalWithUntracked, create_effect, create_rw_signal};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use super::AskAiIds;
use crate::application::{AskAiState, AskAiUseCase};
use crate::domain::{
    errors::{AppResult, PresentationError},
    logging::LogComponent,
};
use crate::log_warn;
use crate::infrastructure::{
    dom,
    gemini::{GeminiClient, GeminiConfig},
};

const SPINNER_CLASSES: &str = "animate-spin rounded-full h-8 w-8 border-b-2 border-cyan-400";

/// Question field: a single-line input or a textarea
#[derive(Clone)]
enum QuestionField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl QuestionField {
    fn from_element(element: Element, id: &'static str) -> Result<Self, PresentationError> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Ok(Self::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .map(Self::TextArea)
                .map_err(|_| PresentationError::ElementType(id)),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }
}

fn spinner_markup(message: &str) -> String {
    format!(
        r#"<div class="flex justify-center items-center"><div class="{}"></div><p class="ml-3">{}</p></div>"#,
        SPINNER_CLASSES, message
    )
}

/// Project one widget state onto the answer box and the button
fn render(state: &AskAiState, answer_box: &HtmlElement, button: &HtmlButtonElement) {
    button.set_disabled(state.is_busy());

    if !state.answer_box_visible() {
        return;
    }
    if let Err(e) = answer_box.style().set_property("display", "block") {
        log_warn!(LogComponent::Presentation("AskAi"), "Failed to show answer box: {:?}", e);
    }
    match (state, state.message()) {
        (AskAiState::Thinking, Some(message)) => answer_box.set_inner_html(&spinner_markup(&message)),
        (_, message) => answer_box.set_text_content(message.as_deref()),
    }
}

/// Wire the ask button to the generative client. Returns `Ok(false)`
/// when the page has no ask button.
pub fn mount(ids: &AskAiIds, config: GeminiConfig) -> AppResult<bool> {
    let document = dom::document()?;
    let Some(button) = dom::optional_element_by_id::<HtmlButtonElement>(&document, ids.button)? else {
        return Ok(false);
    };
    let question_element: Element = dom::element_by_id(&document, ids.question)?;
    let question = QuestionField::from_element(question_element, ids.question)?;
    let answer_box: HtmlElement = dom::element_by_id(&document, ids.answer_box)?;

    let use_case = Rc::new(AskAiUseCase::new(GeminiClient::new(config)));
    let state = create_rw_signal(AskAiState::Idle);

    let render_button = button.clone();
    create_effect(move |_| state.with(|current| render(current, &answer_box, &render_button)));

    EventListener::new(&button, "click", move |_| {
        if state.with_untracked(AskAiState::is_busy) {
            return;
        }
        let question = match use_case.prepare(&question.value()) {
            Ok(question) => question,
            Err(missing) => return state.set(missing),
        };

        state.set(AskAiState::Thinking);
        let use_case = Rc::clone(&use_case);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = use_case.answer(&question).await;
            state.set(outcome);
        });
    })
    .forget();

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::faq::THINKING_MESSAGE;

    #[test]
    fn spinner_wraps_the_thinking_message() {
        let markup = spinner_markup(THINKING_MESSAGE);
        assert!(markup.contains(SPINNER_CLASSES));
        assert!(markup.ends_with(r#"<p class="ml-3">AIが回答を考えています...</p></div>"#));
    }
}
