use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::KeyValueStore;

/// In-memory key-value store for testing and as a fallback when no
/// persistent storage is available. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get_item("token").is_none());

        store.set_item("token", "abc").unwrap();
        assert_eq!(store.get_item("token").as_deref(), Some("abc"));

        store.set_item("token", "def").unwrap();
        assert_eq!(store.get_item("token").as_deref(), Some("def"));
        assert_eq!(store.len(), 1);

        store.remove_item("token");
        assert!(store.get_item("token").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_items() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("user", "{}").unwrap();
        assert_eq!(other.get_item("user").as_deref(), Some("{}"));

        other.remove_item("user");
        assert!(store.get_item("user").is_none());
    }

    #[test]
    fn test_removing_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove_item("nope");
        assert!(store.is_empty());
    }
}
