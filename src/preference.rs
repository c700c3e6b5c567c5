//! Dark-mode preference persistence.
//!
//! The preference is one boolean stored as the literal text `"true"` or
//! `"false"` under a fixed key. Anything else, including an absent key,
//! reads as disabled. No versioning.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A failed read falls back to light mode and a
//! failed write still updates the page, so the toggle keeps working for the
//! current visit in privacy modes that block `localStorage`.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::collections::HashMap;

use crate::error::Result;

/// String key/value storage with `localStorage` semantics.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PageError::Storage`] when the backend rejects the read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PageError::Storage`] when the backend rejects the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// In-memory store. Fallback when the browser exposes no `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Parse a stored value. Only the exact text `"true"` enables dark mode.
#[must_use]
pub fn parse(stored: Option<&str>) -> bool {
    stored == Some("true")
}

/// Stored representation of `enabled`.
#[must_use]
pub fn as_stored(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Dark-mode toggle bound to a storage backend.
///
/// Owns the current value so the page layer only has to mirror it onto the
/// checkbox and the body class.
pub struct ThemeToggle<S> {
    store: S,
    key: String,
    enabled: bool,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    /// Read the persisted preference under `key`.
    #[must_use]
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let enabled = match store.get_item(&key) {
            Ok(stored) => {
                log::debug!("stored dark mode status: {stored:?}");
                parse(stored.as_deref())
            }
            Err(e) => {
                log::warn!("dark mode: {e}; defaulting to light");
                false
            }
        };
        Self { store, key, enabled }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Record a checkbox change and persist it.
    ///
    /// The in-memory value is updated even when the write fails so the page
    /// stays consistent with the checkbox.
    ///
    /// # Errors
    ///
    /// Returns the storage error from the write.
    pub fn set(&mut self, enabled: bool) -> Result<()> {
        self.enabled = enabled;
        self.store.set_item(&self.key, as_stored(enabled))
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
