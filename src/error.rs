//! Page runtime errors.
//!
//! Nothing here is fatal to the page: the init routine logs every error and
//! skips the feature that produced it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while wiring or running page behaviors.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// An element the feature depends on is not present in the markup.
    #[error("{feature}: element {selector} not found")]
    MissingElement { feature: &'static str, selector: String },

    /// `localStorage` is unavailable or rejected a read/write.
    #[error("storage access failed: {0}")]
    Storage(String),

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The page's JSON config block could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}

impl PageError {
    /// Shorthand for [`PageError::MissingElement`].
    pub fn missing(feature: &'static str, selector: impl Into<String>) -> Self {
        Self::MissingElement { feature, selector: selector.into() }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
