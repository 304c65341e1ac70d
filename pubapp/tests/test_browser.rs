#![cfg(all(target_arch = "wasm32", feature = "browser"))]

use pubapp::{
    browser::{
        DocumentPage,
        init_with_config,
    },
    config::Config,
    page::Page,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn document_containers() {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let list = document.create_element("ul").expect("element created");
    list.set_id("journal-publications-list");
    list.set_inner_html("<li>placeholder</li>");
    document.body()
        .expect("body available")
        .append_child(&list)
        .expect("list attached");

    let mut page = DocumentPage::new(document);
    assert!(page.has_container("journal-publications-list"));
    assert!(!page.has_container("working-papers-list"));

    page.set_content("working-papers-list", "<li>ignored</li>".to_string());
    page.set_content("journal-publications-list", "<li>rendered</li>".to_string());
    assert_eq!(list.inner_html(), "<li>rendered</li>");
}

#[wasm_bindgen_test]
fn config_with_absent_containers() {
    let config = Config::default()
        .data_url("missing/research.json")
        .journal_container("absent-journal-list")
        .working_container("absent-working-list");
    let value = serde_wasm_bindgen::to_value(&config)
        .expect("config serialized");
    // the failed fetch is logged in the background rather than thrown
    init_with_config(value);
    init_with_config(JsValue::UNDEFINED);
}

#[wasm_bindgen_test]
fn malformed_config_not_thrown() {
    init_with_config(JsValue::from_str("not a config object"));
    init_with_config(JsValue::from(42));
}
