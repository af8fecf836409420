//! Browser Local Storage
//!
//! [`SessionStore`] over `window.localStorage`.

use vista::store::{SessionStore, StoreError, StoreResult};
use web_sys::Storage;

/// Handle to the page's local storage. Looked up on every call so a
/// storage-less context (private mode, tests) degrades to "nothing stored".
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn unavailable() -> StoreError {
    StoreError::Unavailable("localStorage is not available".to_string())
}

fn js_error(op: &str, key: &str) -> StoreError {
    StoreError::Unavailable(format!("localStorage {} failed for {}", op, key))
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        storage()
            .ok_or_else(unavailable)?
            .set_item(key, value)
            .map_err(|_| js_error("set", key))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        storage()
            .ok_or_else(unavailable)?
            .remove_item(key)
            .map_err(|_| js_error("remove", key))
    }

    fn clear(&self) -> StoreResult<()> {
        storage()
            .ok_or_else(unavailable)?
            .clear()
            .map_err(|_| js_error("clear", "all keys"))
    }
}
