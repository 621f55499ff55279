#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use recruit_page_wasm::domain::faq::{COMMUNICATION_ERROR_MESSAGE, EMPTY_QUESTION_MESSAGE, THINKING_MESSAGE};
use recruit_page_wasm::infrastructure::gemini::GeminiConfig;
use recruit_page_wasm::presentation::{AskAiIds, ask_ai_widget};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn blank_question_shows_prompt_without_request() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let body = doc.body().unwrap();

    let question: HtmlTextAreaElement = doc.create_element("textarea").unwrap().dyn_into().unwrap();
    question.set_id("ask-question-under-test");
    question.set_value("   ");
    let button: HtmlButtonElement = doc.create_element("button").unwrap().dyn_into().unwrap();
    button.set_id("ask-button-under-test");
    let answer: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    answer.set_id("ask-answer-under-test");
    answer.style().set_property("display", "none").unwrap();
    body.append_child(&question).unwrap();
    body.append_child(&button).unwrap();
    body.append_child(&answer).unwrap();

    let ids = AskAiIds {
        button: "ask-button-under-test",
        question: "ask-question-under-test",
        answer_box: "ask-answer-under-test",
    };
    // an unreachable base makes any accidental request fail loudly
    let config = GeminiConfig { api_base: "http://127.0.0.1:9".to_string(), ..GeminiConfig::default() };
    assert!(ask_ai_widget::mount(&ids, config).unwrap());

    button.click();
    assert_eq!(answer.style().get_property_value("display").unwrap(), "block");
    assert_eq!(answer.text_content().as_deref(), Some(EMPTY_QUESTION_MESSAGE));
    assert!(!button.disabled());
}

#[wasm_bindgen_test]
fn missing_button_skips_the_widget() {
    let ids = AskAiIds { button: "no-ask-button", question: "no-question", answer_box: "no-answer" };
    assert!(!ask_ai_widget::mount(&ids, GeminiConfig::default()).unwrap());
}

#[wasm_bindgen_test(async)]
async fn clicks_while_thinking_are_ignored_until_the_request_fails() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let body = doc.body().unwrap();

    let question: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
    question.set_id("busy-question-under-test");
    question.set_value("未経験でも大丈夫ですか？");
    let button: HtmlButtonElement = doc.create_element("button").unwrap().dyn_into().unwrap();
    button.set_id("busy-button-under-test");
    let answer: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    answer.set_id("busy-answer-under-test");
    body.append_child(&question).unwrap();
    body.append_child(&button).unwrap();
    body.append_child(&answer).unwrap();

    let ids = AskAiIds {
        button: "busy-button-under-test",
        question: "busy-question-under-test",
        answer_box: "busy-answer-under-test",
    };
    // nothing listens on the discard port, so the request fails at transport level
    let config = GeminiConfig { api_base: "http://127.0.0.1:9".to_string(), ..GeminiConfig::default() };
    assert!(ask_ai_widget::mount(&ids, config).unwrap());

    button.click();
    assert!(button.disabled());
    let thinking = answer.inner_html();
    assert!(thinking.contains("animate-spin"));
    assert!(thinking.contains(THINKING_MESSAGE));

    button.dispatch_event(&Event::new("click").unwrap()).unwrap();
    assert!(button.disabled());
    assert_eq!(answer.inner_html(), thinking);

    for _ in 0..100 {
        if !button.disabled() {
            break;
        }
        sleep(Duration::from_millis(50)).await;
    }
    assert!(!button.disabled());
    assert_eq!(answer.text_content().as_deref(), Some(COMMUNICATION_ERROR_MESSAGE));
}
