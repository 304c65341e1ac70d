//! Entry points for the page script, built with the `browser` feature.
//!
//! The host page calls `initResearch` (or `initWithConfig`) once;
//! nothing is kept across calls.  Failures are reported to the console,
//! never thrown back to the page.

use wasm_bindgen::{
    closure::Closure,
    prelude::wasm_bindgen,
    JsCast,
    JsValue,
};
use web_sys::Document;
use crate::{
    config::Config,
    error::LoadError,
    loader::{
        init_with,
        should_defer,
    },
    page::Page,
    source::HttpSource,
};

/// The live document, looked up by element id.
pub struct DocumentPage {
    document: Document,
}

impl DocumentPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Page for DocumentPage {
    fn has_container(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_content(&mut self, id: &str, html: String) {
        if let Some(element) = self.document.get_element_by_id(id) {
            element.set_inner_html(&html);
        }
    }
}

fn document() -> Result<Document, LoadError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| LoadError::Dom("no document available".to_string()))
}

/// Renders with the default configuration.
#[wasm_bindgen(js_name = initResearch)]
pub fn init() {
    install_hooks();
    start(Config::default());
}

/// Renders with a configuration object from the host page; fields left
/// out keep their defaults.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(config: JsValue) {
    install_hooks();
    let config = if config.is_undefined() || config.is_null() {
        Config::default()
    } else {
        match serde_wasm_bindgen::from_value(config) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Error loading research data: invalid configuration: {e}");
                return;
            }
        }
    };
    start(config);
}

fn install_hooks() {
    console_error_panic_hook::set_once();
    // a logger may already be installed by an earlier call
    console_log::init_with_level(log::Level::Info).ok();
}

fn start(config: Config) {
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("Error loading research data: {e}");
            return;
        }
    };
    if should_defer(&document.ready_state()) {
        let callback = Closure::once_into_js(move || spawn(config));
        if let Err(e) = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            callback.unchecked_ref(),
        ) {
            log::error!("Error loading research data: {e:?}");
        }
    } else {
        spawn(config);
    }
}

fn spawn(config: Config) {
    wasm_bindgen_futures::spawn_local(async move {
        let document = match document() {
            Ok(document) => document,
            Err(e) => {
                log::error!("Error loading research data: {e}");
                return;
            }
        };
        let base = document.base_uri()
            .ok()
            .flatten()
            .or_else(|| document.url().ok());
        let source = HttpSource::new(config.data_url.clone(), base);
        let mut page = DocumentPage::new(document);
        init_with(&source, &mut page, &config).await;
    });
}
