//! `window.localStorage` persistence.
//!
//! Values are stored raw (the comma-joined history), not JSON, so pages
//! written before this crate existed keep working.

use pager_core::{CursorStore, PagerError, StoreError};
use wasm_bindgen::{JsCast, JsValue};

/// Cursor history backed by the browser's local storage.
#[derive(Clone)]
pub struct LocalCursorStore {
    storage: web_sys::Storage,
}

impl LocalCursorStore {
    /// Open local storage, or `StorageUnavailable` if the browser has none.
    ///
    /// Some privacy modes throw on access rather than returning null; both
    /// count as unavailable.
    pub fn open() -> Result<Self, PagerError> {
        let window = web_sys::window().ok_or(PagerError::StorageUnavailable)?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(PagerError::StorageUnavailable)?;
        Ok(Self { storage })
    }

    /// Remove the value under `key`.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            tracing::warn!(key, "localStorage remove failed: {}", js_message(&e));
        }
    }
}

impl CursorStore for LocalCursorStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_owned(),
            message: js_message(&e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_owned(),
            message: js_message(&e),
        })
    }
}

/// Best-effort message from a thrown JS value (usually a DOMException).
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
