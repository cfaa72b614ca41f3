//! In-memory store
//!
//! Keeps values in a shared map. Clones share the same map, so a test can
//! hand one clone to the list manager and inspect the other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Store;
use crate::error::StoreResult;

/// Store backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.values().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("theme", "dark").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("a", "1").unwrap();

        assert_eq!(other.get("a").unwrap(), Some("1".to_string()));
        other.clear().unwrap();
        assert!(store.is_empty());
    }
}
