#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use recruit_page_wasm::domain::scroll::ScrollConfig;
use recruit_page_wasm::presentation::{ScrollIds, scroll_effects};
use std::time::Duration;
use wasm_bindgen_test::*;
use web_sys::{Document, Event};
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test(async)]
async fn visible_reveal_element_becomes_active() {
    let doc = document();
    let section = doc.create_element("section").unwrap();
    section.set_class_name("reveal-under-test");
    section.set_text_content(Some("DC"));
    doc.body().unwrap().prepend_with_node_1(&section).unwrap();

    let ids = ScrollIds { scroll_top_button: "no-such-button", reveal_selector: ".reveal-under-test" };
    assert!(scroll_effects::mount(&ids, ScrollConfig::default()).unwrap());

    sleep(Duration::from_millis(200)).await;
    assert!(section.class_list().contains("active"));
}

#[wasm_bindgen_test(async)]
async fn button_hides_near_the_top() {
    let doc = document();
    let button = doc.create_element("button").unwrap();
    button.set_id("scroll-top-under-test");
    doc.body().unwrap().append_child(&button).unwrap();

    let ids = ScrollIds { scroll_top_button: "scroll-top-under-test", reveal_selector: ".nothing-to-reveal" };
    assert!(scroll_effects::mount(&ids, ScrollConfig::default()).unwrap());

    web_sys::window().unwrap().dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    let classes = button.class_list();
    assert!(classes.contains("opacity-0"));
    assert!(classes.contains("translate-y-4"));
    assert!(!classes.contains("hidden"));

    sleep(Duration::from_millis(400)).await;
    assert!(classes.contains("hidden"));
}

#[wasm_bindgen_test]
fn nothing_to_install_reports_false() {
    let ids = ScrollIds { scroll_top_button: "missing-button", reveal_selector: ".missing-reveal" };
    assert!(!scroll_effects::mount(&ids, ScrollConfig::default()).unwrap());
}
