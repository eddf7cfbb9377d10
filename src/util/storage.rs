//! Key-value storage capability backing the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! State logic never touches `localStorage` directly. It receives a
//! [`KeyValueStore`] so the session flow can run against [`MemoryStore`] in
//! tests and [`LocalStorage`] in the browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// Error returned by a [`KeyValueStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage medium is reachable (no window, storage disabled).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, security policy).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// A value could not be serialized before writing.
    #[error("failed to encode stored value: {0}")]
    Encode(#[source] serde_json::Error),
    /// A stored value could not be deserialized after reading.
    #[error("failed to decode stored value: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Minimal string key-value capability: `get`, `set`, `delete`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> Result<R, StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Backend(format!("memory store poisoned: {e}")))?;
        Ok(f(&mut entries))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.with_entries(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }
}

/// Browser `window.localStorage`.
///
/// The handle is resolved on every call so the type stays `Send + Sync` and
/// can be created freely inside event handlers. Outside the `csr` build
/// reads are empty and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn js_error(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
