//! In-memory store

use std::collections::HashMap;
use std::sync::RwLock;

use super::{SessionStore, StoreError, StoreResult};

/// Process-local store backed by a map
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error<T>(_: T) -> StoreError {
    StoreError::Unavailable("store lock poisoned".to_string())
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .map_err(lock_error)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.write().map_err(lock_error)?.remove(key);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.entries.write().map_err(lock_error)?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("theme").is_none());

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        store.remove("theme").unwrap();
        store.remove("theme").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
