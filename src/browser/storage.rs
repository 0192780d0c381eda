//! Web Storage
//!
//! `localStorage` / `sessionStorage` behind the core `KeyValueStorage` trait.

use asset_core::{KeyValueStorage, StorageError, StorageResult};
use wasm_bindgen::JsValue;

pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Persistent storage for the asset store and counter
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        Self::from_result(window.local_storage(), "localStorage")
    }

    /// Short-lived storage holding the role flag
    pub fn session() -> StorageResult<Self> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        Self::from_result(window.session_storage(), "sessionStorage")
    }

    fn from_result(result: Result<Option<web_sys::Storage>, JsValue>, name: &str) -> StorageResult<Self> {
        match result {
            Ok(Some(inner)) => Ok(Self { inner }),
            Ok(None) => Err(StorageError::Unavailable(format!("{} missing", name))),
            Err(e) => Err(StorageError::Unavailable(format!("{}: {}", name, js_error(&e)))),
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_error(&e),
        })
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
