//! Signed-in user greeting

use serde::Serialize;

use crate::store::{Session, SessionStore};

const FALLBACK_NAME: &str = "User";
const FALLBACK_EMAIL: &str = "user@example.com";

/// Name and email shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub name: String,
    pub email: String,
}

impl Greeting {
    /// Derive the greeting from the cached profile, or from the cached email
    /// when no profile was stored. `None` leaves the page placeholders alone.
    pub fn from_session<S: SessionStore>(session: &Session<S>) -> Option<Self> {
        let email = session.email();

        if let Some(profile) = session.profile() {
            let name = non_empty(profile.name).unwrap_or_else(|| FALLBACK_NAME.to_string());
            let email = non_empty(profile.email)
                .or(email.and_then(non_empty))
                .unwrap_or_else(|| FALLBACK_EMAIL.to_string());
            return Some(Self { name, email });
        }

        let email = email.and_then(non_empty)?;
        let name = email.split('@').next().unwrap_or_default().to_string();
        Some(Self { name, email })
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
