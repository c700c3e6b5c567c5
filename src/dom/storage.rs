//! `localStorage` backend for [`PreferenceStore`].

use web_sys::{Storage, Window};

use crate::error::{PageError, Result};
use crate::preference::PreferenceStore;

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Storage`] when storage is disabled or access
    /// throws (sandboxed iframes, some privacy modes).
    pub fn from_window(window: &Window) -> Result<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(PageError::Storage("localStorage unavailable".into())),
            Err(e) => Err(PageError::Storage(format!("{e:?}"))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| PageError::Storage(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PageError::Storage(format!("{e:?}")))
    }
}
