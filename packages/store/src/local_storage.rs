//! # Browser `localStorage` key-value store
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**.
//! It is a zero-size handle: each call looks up `window.localStorage`
//! afresh, so the handle can be cloned freely and never goes stale.
//!
//! Reads and removals swallow errors (private browsing modes may deny
//! storage access); a denied write is reported as
//! [`StoreError::Unavailable`] so the session layer can log it.

use crate::error::StoreError;
use crate::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
