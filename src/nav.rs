//! Page Navigation
//!
//! Pages of the site, delayed redirects, the dashboard auth gate and logout.

use serde::Serialize;
use std::time::Duration;

use crate::store::{Session, SessionStore, StoreResult};

/// Site pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Landing,
    Login,
    Register,
    Dashboard,
}

impl Page {
    /// Static page path
    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "index.html",
            Self::Login => "login.html",
            Self::Register => "register.html",
            Self::Dashboard => "dashboard.html",
        }
    }

    /// Client-side route used by the frontend router
    pub fn route(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Navigation to `to` after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub to: Page,
    #[serde(rename = "delay_ms", serialize_with = "serialize_millis")]
    pub delay: Duration,
}

impl Redirect {
    pub fn now(to: Page) -> Self {
        Self {
            to,
            delay: Duration::ZERO,
        }
    }

    pub fn after(to: Page, delay: Duration) -> Self {
        Self { to, delay }
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

/// Dashboard entry check: signed-out visitors go to the login page
pub fn guard_dashboard<S: SessionStore>(session: &Session<S>) -> Result<(), Redirect> {
    if session.is_logged_in() {
        Ok(())
    } else {
        tracing::info!("Dashboard visited without a session, redirecting to login");
        Err(Redirect::now(Page::Login))
    }
}

/// Question asked before signing out from the dashboard
pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

/// Sign out only when the user accepted [`LOGOUT_PROMPT`]
pub fn confirm_logout<S: SessionStore>(
    session: &Session<S>,
    confirmed: bool,
) -> StoreResult<Option<Redirect>> {
    if !confirmed {
        return Ok(None);
    }
    logout(session).map(Some)
}

/// Clear the signed-in user and head back to the landing page
pub fn logout<S: SessionStore>(session: &Session<S>) -> StoreResult<Redirect> {
    session.logout()?;
    tracing::info!("Signed out");
    Ok(Redirect::now(Page::Landing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{keys, MemoryStore};

    #[test]
    fn test_gate_redirects_to_login() {
        let session = Session::new(MemoryStore::new());
        assert_eq!(guard_dashboard(&session), Err(Redirect::now(Page::Login)));

        session.record_login("ada@example.com").unwrap();
        assert_eq!(guard_dashboard(&session), Ok(()));
    }

    #[test]
    fn test_logout_clears_session_and_lands() {
        let session = Session::new(MemoryStore::new());
        session.record_login("ada@example.com").unwrap();
        session.store().set(keys::USER_DATA, "{}").unwrap();

        let redirect = logout(&session).unwrap();
        assert_eq!(redirect.to, Page::Landing);
        assert!(session.store().get(keys::IS_LOGGED_IN).is_none());
        assert!(session.store().get(keys::USER_EMAIL).is_none());
        assert!(session.store().get(keys::USER_DATA).is_none());
    }

    #[test]
    fn test_declined_logout_keeps_session() {
        let session = Session::new(MemoryStore::new());
        session.record_login("ada@example.com").unwrap();

        assert_eq!(confirm_logout(&session, false).unwrap(), None);
        assert!(session.is_logged_in());

        let redirect = confirm_logout(&session, true).unwrap();
        assert_eq!(redirect, Some(Redirect::now(Page::Landing)));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_redirect_serializes_delay_in_millis() {
        let json = serde_json::to_value(Redirect::after(Page::Dashboard, Duration::from_millis(1500))).unwrap();
        assert_eq!(json["to"], "dashboard");
        assert_eq!(json["delay_ms"], 1500);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Page::Landing.path(), "index.html");
        assert_eq!(Page::Dashboard.route(), "/dashboard");
    }
}
