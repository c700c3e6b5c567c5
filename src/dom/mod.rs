//! Browser wiring over `web-sys`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the wasm module is instantiated. It waits for the
//! document to finish parsing, reads the optional JSON config block, and
//! attaches the three page behaviors. Each behavior is independent: a
//! missing element logs a warning and skips only that behavior.
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `Closure::forget`. The one exception is the modal's keydown interceptor,
//! which is added and removed on every open/close.

mod modal;
mod phone;
mod storage;
mod theme;

pub use storage::LocalStorage;

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlElement, Window};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::error::{PageError, Result};

/// Wasm entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();

    let Some(window) = web_sys::window() else {
        log::error!("no window; page behaviors not attached");
        return;
    };
    let Some(document) = window.document() else {
        log::error!("no document; page behaviors not attached");
        return;
    };

    if document.ready_state() == "loading" {
        let ready_doc = document.clone();
        let on_ready = Closure::once_into_js(move || {
            log::debug!("DOM fully loaded");
            init_page(&window, &ready_doc);
        });
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("could not wait for DOMContentLoaded: {e:?}");
        }
    } else {
        init_page(&window, &document);
    }
}

fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
}

/// Attach every page behavior. Failures are logged per behavior.
pub fn init_page(window: &Window, document: &Document) {
    let config = load_config(document);

    let results = [
        ("dark mode", theme::attach(window, document, &config)),
        ("modal", modal::attach(window, document, &config)),
        ("phone mask", phone::attach(document, &config)),
    ];

    let mut attached = 0;
    for (feature, result) in results {
        match result {
            Ok(()) => attached += 1,
            Err(e) => log::warn!("{feature} disabled: {e}"),
        }
    }
    log::info!("page behaviors attached: {attached}/3");
}

/// Read the JSON override block, falling back to defaults.
fn load_config(document: &Document) -> PageConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        PageConfig::default()
    })
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<()>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn element_by_id<T: JsCast>(document: &Document, feature: &'static str, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::missing(feature, format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| PageError::Dom(format!("#{id} has an unexpected element type")))
}

fn same_node(a: &impl AsRef<JsValue>, b: &impl AsRef<JsValue>) -> bool {
    a.as_ref() == b.as_ref()
}

fn focus(el: &HtmlElement) {
    if let Err(e) = el.focus() {
        log::debug!("focus failed: {e:?}");
    }
}
