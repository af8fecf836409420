//! Session Store
//!
//! Key-value persistence standing in for browser local storage. Every
//! component takes a store explicitly instead of reaching for ambient
//! global state.
//!
//! - [`MemoryStore`]: in-process map (dev server, tests)
//! - [`FileStore`]: JSON file on disk (CLI)
//! - [`Session`]: typed accessors over any store

mod file;
mod memory;
mod session;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use session::{Profile, Session};

use std::sync::Arc;
use thiserror::Error;

/// Persisted keys
pub mod keys {
    /// `"true"` while signed in, absent otherwise
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    /// Email captured at login or registration
    pub const USER_EMAIL: &str = "userEmail";
    /// JSON-encoded [`Profile`](super::Profile)
    pub const USER_DATA: &str = "userData";
    /// `"light"` or `"dark"`
    pub const THEME: &str = "theme";
}

/// Errors that can occur while reading or writing a store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// String key-value store with local-storage semantics
pub trait SessionStore {
    /// Read a value, `None` when absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a key; deleting an absent key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Delete every key
    fn clear(&self) -> StoreResult<()>;
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}
