//! Completing a validated submission

use chrono::{DateTime, Utc};
use std::time::Duration;

use super::form::Credentials;
use super::AuthError;
use crate::dashboard::FixtureError;
use crate::nav::{Page, Redirect};
use crate::notify::Notice;
use crate::store::{Profile, Session, SessionStore};

/// Timing and failure policy for credential capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthPolicy {
    /// Treat a failed probe as success
    pub demo_mode: bool,
    /// Simulated latency before recording a successful probe
    pub latency: Duration,
    pub login_redirect: Duration,
    pub register_redirect: Duration,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            demo_mode: true,
            latency: Duration::from_millis(500),
            login_redirect: Duration::from_millis(1000),
            register_redirect: Duration::from_millis(1500),
        }
    }
}

/// Which form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Login,
    Registration,
}

impl FlowKind {
    pub fn of(credentials: &Credentials) -> Self {
        match credentials {
            Credentials::Login(_) => Self::Login,
            Credentials::Register(_) => Self::Registration,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Login => "Login successful! Redirecting...",
            Self::Registration => "Registration successful! Redirecting to dashboard...",
        }
    }

    pub fn redirect_delay(&self, policy: &AuthPolicy) -> Duration {
        match self {
            Self::Login => policy.login_redirect,
            Self::Registration => policy.register_redirect,
        }
    }
}

/// Result of a completed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    pub notice: Notice,
    pub redirect: Redirect,
}

/// Record the session for already-validated `credentials` given the probe
/// outcome, and produce the success alert and redirect.
///
/// In demo mode the probe outcome is ignored. Otherwise a failed probe
/// returns [`AuthError::Unavailable`] and nothing is written.
pub fn complete<S: SessionStore>(
    credentials: &Credentials,
    probe: Result<(), FixtureError>,
    policy: &AuthPolicy,
    session: &Session<S>,
    now: DateTime<Utc>,
) -> Result<Completed, AuthError> {
    if let Err(e) = probe {
        if !policy.demo_mode {
            return Err(AuthError::Unavailable(e.to_string()));
        }
        tracing::debug!(error = %e, "Probe failed, continuing in demo mode");
    }

    match credentials {
        Credentials::Login(form) => session.record_login(&form.email)?,
        Credentials::Register(form) => {
            session.record_registration(&Profile::new(&form.name, &form.email, now))?
        }
    }

    let kind = FlowKind::of(credentials);
    tracing::info!(flow = ?kind, email = %credentials.email(), "Session recorded");

    Ok(Completed {
        notice: Notice::success(kind.success_message()),
        redirect: Redirect::after(Page::Dashboard, kind.redirect_delay(policy)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{LoginForm, RegistrationForm};
    use crate::store::{keys, MemoryStore};

    fn register() -> Credentials {
        Credentials::Register(RegistrationForm::new(
            "Ada",
            "ada@example.com",
            "Abcdefg1!",
            "Abcdefg1!",
        ))
    }

    #[test]
    fn test_both_probe_outcomes_match_in_demo_mode() {
        let policy = AuthPolicy::default();
        let now = Utc::now();

        let ok_session = Session::new(MemoryStore::new());
        let ok = complete(&register(), Ok(()), &policy, &ok_session, now).unwrap();

        let failed_session = Session::new(MemoryStore::new());
        let failed = complete(
            &register(),
            Err(FixtureError::Timeout),
            &policy,
            &failed_session,
            now,
        )
        .unwrap();

        assert_eq!(ok, failed);
        for key in [keys::IS_LOGGED_IN, keys::USER_EMAIL, keys::USER_DATA] {
            assert_eq!(ok_session.store().get(key), failed_session.store().get(key));
        }
    }

    #[test]
    fn test_login_redirect_and_writes() {
        let session = Session::new(MemoryStore::new());
        let done = complete(
            &Credentials::Login(LoginForm::new("ada@example.com", "x")),
            Ok(()),
            &AuthPolicy::default(),
            &session,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(done.notice.message, "Login successful! Redirecting...");
        assert_eq!(done.redirect, Redirect::after(Page::Dashboard, Duration::from_millis(1000)));
        assert!(session.is_logged_in());
        assert!(session.store().get(keys::USER_DATA).is_none());
    }

    #[test]
    fn test_registration_redirect_delay() {
        let session = Session::new(MemoryStore::new());
        let done = complete(&register(), Ok(()), &AuthPolicy::default(), &session, Utc::now()).unwrap();
        assert_eq!(done.redirect.delay, Duration::from_millis(1500));
        assert_eq!(session.profile().unwrap().name, "Ada");
    }

    #[test]
    fn test_probe_failure_surfaces_outside_demo_mode() {
        let policy = AuthPolicy {
            demo_mode: false,
            ..AuthPolicy::default()
        };
        let session = Session::new(MemoryStore::new());

        let err = complete(&register(), Err(FixtureError::Status(503)), &policy, &session, Utc::now())
            .unwrap_err();
        assert!(matches!(err, AuthError::Unavailable(_)));
        assert!(session.store().get(keys::IS_LOGGED_IN).is_none());
    }
}
