//! File-backed store
//!
//! Keeps the whole map in memory and rewrites a JSON object on every
//! mutation. Writes go to a sibling temp file first and are renamed into
//! place.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::{SessionStore, StoreError, StoreResult};

/// JSON file store, one object of string values
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store, starting empty when the file does not exist yet
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = ?path, keys = entries.len(), "Opened session store");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn mutate(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        let mut next = entries.clone();
        f(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.mutate(|e| {
            e.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.mutate(|e| {
            e.remove(key);
        })
    }

    fn clear(&self) -> StoreResult<()> {
        self.mutate(|e| e.clear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("userEmail", "ada@example.com").unwrap();
            store.set("isLoggedIn", "true").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("userEmail").as_deref(), Some("ada@example.com"));
        assert_eq!(store.get("isLoggedIn").as_deref(), Some("true"));
    }

    #[test]
    fn test_remove_and_clear_persist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.get("a").is_none());
        assert_eq!(reopened.get("b").as_deref(), Some("2"));

        reopened.clear().unwrap();
        assert!(FileStore::open(&path).unwrap().get("b").is_none());
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let store = FileStore::open(blocker.join("session.json")).unwrap();
        assert!(store.set("isLoggedIn", "true").is_err());
        assert!(store.get("isLoggedIn").is_none());
        assert!(store.clear().is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(StoreError::Serialization(_))
        ));
    }
}
