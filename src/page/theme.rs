//! Light/dark theme

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::{keys, SessionStore, StoreResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme applied on page load: light only when explicitly stored,
    /// anything else keeps the dark default.
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Self {
        match store.get(keys::THEME).as_deref() {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn save<S: SessionStore + ?Sized>(self, store: &S) -> StoreResult<()> {
        store.set(keys::THEME, self.as_str())
    }

    /// Flip the stored theme and return the new one
    pub fn toggle<S: SessionStore + ?Sized>(store: &S) -> StoreResult<Self> {
        let next = Self::load(store).toggled();
        next.save(store)?;
        tracing::debug!(theme = %next, "Theme toggled");
        Ok(next)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_load_defaults_to_dark() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Dark);

        store.set(keys::THEME, "solarized").unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);

        store.set(keys::THEME, "light").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        assert_eq!(Theme::toggle(&store).unwrap(), Theme::Light);
        assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));

        assert_eq!(Theme::toggle(&store).unwrap(), Theme::Dark);
        assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));
    }
}
