//! Page wiring configuration.
//!
//! Defaults match the contact page markup. A page can override any field by
//! embedding a JSON object in `<script type="application/json" id="page-config">`;
//! missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::{PageError, Result};

/// Id of the optional `<script>` element holding a JSON override.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

pub const DEFAULT_STORAGE_KEY: &str = "dark-mode";
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";

/// Element ids, class names, and keys the runtime binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key for the dark-mode flag.
    pub storage_key: String,
    /// Class toggled on `<body>` while dark mode is enabled.
    pub dark_class: String,
    pub toggle_id: String,
    pub toggle_label_id: String,
    pub modal_id: String,
    /// Class carried by every element that opens the modal.
    pub open_class: String,
    pub close_id: String,
    pub phone_id: String,
    /// `window` property exposing the modal open routine. Empty disables it.
    pub open_hook: String,
    /// `window` property exposing the modal close routine. Empty disables it.
    pub close_hook: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            toggle_id: "darkmode-toggle".to_owned(),
            toggle_label_id: "darkmode-label".to_owned(),
            modal_id: "ContactModal".to_owned(),
            open_class: "Link-Form-Open".to_owned(),
            close_id: "ContactModalClose".to_owned(),
            phone_id: "contact-phone".to_owned(),
            open_hook: "abrir".to_owned(),
            close_hook: "fechar".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] when `raw` is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| PageError::Config(e.to_string()))
    }

    /// CSS selector matching every open trigger.
    #[must_use]
    pub fn open_selector(&self) -> String {
        format!(".{}", self.open_class)
    }
}
