//! Typed session accessors

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{keys, SessionStore, StoreResult};

/// Profile cached at registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// RFC 3339 UTC timestamp, millisecond precision
    #[serde(rename = "registeredAt", default)]
    pub registered_at: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, email: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            registered_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Session view over a store
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get(keys::IS_LOGGED_IN).as_deref() == Some("true")
    }

    pub fn email(&self) -> Option<String> {
        self.store.get(keys::USER_EMAIL)
    }

    /// Cached profile. A value that does not parse is logged and treated
    /// as absent.
    pub fn profile(&self) -> Option<Profile> {
        let raw = self.store.get(keys::USER_DATA)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed cached profile");
                None
            }
        }
    }

    /// Mark the session signed in for `email`
    pub fn record_login(&self, email: &str) -> StoreResult<()> {
        self.store.set(keys::USER_EMAIL, email)?;
        self.store.set(keys::IS_LOGGED_IN, "true")
    }

    /// Cache the profile and mark the session signed in
    pub fn record_registration(&self, profile: &Profile) -> StoreResult<()> {
        self.store
            .set(keys::USER_DATA, &serde_json::to_string(profile)?)?;
        self.record_login(&profile.email)
    }

    /// Forget the signed-in user. The theme preference is kept.
    pub fn logout(&self) -> StoreResult<()> {
        self.store.remove(keys::IS_LOGGED_IN)?;
        self.store.remove(keys::USER_EMAIL)?;
        self.store.remove(keys::USER_DATA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn profile() -> Profile {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Profile::new("Ada", "ada@example.com", at)
    }

    #[test]
    fn test_profile_timestamp_format() {
        assert_eq!(profile().registered_at, "2024-03-01T12:00:00.000Z");
    }

    #[test]
    fn test_profile_wire_format() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["registeredAt"], "2024-03-01T12:00:00.000Z");
    }

    #[test]
    fn test_registration_then_logout() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_logged_in());

        session.record_registration(&profile()).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.email().as_deref(), Some("ada@example.com"));
        assert_eq!(session.profile(), Some(profile()));

        session.store().set(keys::THEME, "light").unwrap();
        session.logout().unwrap();
        assert!(!session.is_logged_in());
        assert!(session.email().is_none());
        assert!(session.profile().is_none());
        assert_eq!(session.store().get(keys::THEME).as_deref(), Some("light"));
    }

    #[test]
    fn test_only_exact_true_counts_as_logged_in() {
        let session = Session::new(MemoryStore::new());
        session.store().set(keys::IS_LOGGED_IN, "yes").unwrap();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_malformed_profile_is_absent() {
        let session = Session::new(MemoryStore::new());
        session.store().set(keys::USER_DATA, "{not json").unwrap();
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_partial_profile_parses() {
        let session = Session::new(MemoryStore::new());
        session.store().set(keys::USER_DATA, r#"{"email":"x@y.z"}"#).unwrap();
        let profile = session.profile().unwrap();
        assert_eq!(profile.name, "");
        assert_eq!(profile.email, "x@y.z");
    }
}
