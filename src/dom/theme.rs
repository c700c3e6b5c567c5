//! Dark-mode checkbox wiring.

use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, Window};

use super::{LocalStorage, element_by_id, listen};
use crate::config::PageConfig;
use crate::error::{PageError, Result};
use crate::preference::{MemoryStore, PreferenceStore, ThemeToggle};

const FEATURE: &str = "dark mode";

pub(super) fn attach(window: &Window, document: &Document, config: &PageConfig) -> Result<()> {
    let checkbox: HtmlInputElement = element_by_id(document, FEATURE, &config.toggle_id)?;
    // The label is not used beyond confirming the control is fully rendered.
    let _label: Element = element_by_id(document, FEATURE, &config.toggle_label_id)?;
    let body = document.body().ok_or_else(|| PageError::missing(FEATURE, "body"))?;

    let store: Box<dyn PreferenceStore> = match LocalStorage::from_window(window) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{e}; dark mode preference will not persist");
            Box::new(MemoryStore::new())
        }
    };
    let mut toggle = ThemeToggle::load(store, &config.storage_key);

    checkbox.set_checked(toggle.enabled());
    apply(&body, &config.dark_class, toggle.enabled())?;

    let class = config.dark_class.clone();
    let source = checkbox.clone();
    listen(&checkbox, "change", move |_: Event| {
        let enabled = source.checked();
        if let Err(e) = toggle.set(enabled) {
            log::warn!("dark mode: {e}");
        }
        if let Err(e) = apply(&body, &class, enabled) {
            log::warn!("dark mode: {e}");
        }
        log::debug!("dark mode {}", if enabled { "enabled" } else { "disabled" });
    })?;

    log::debug!("dark mode listener attached");
    Ok(())
}

/// Add or remove the dark class on `<body>`.
fn apply(body: &HtmlElement, class: &str, enabled: bool) -> Result<()> {
    body.class_list().toggle_with_force(class, enabled)?;
    Ok(())
}
