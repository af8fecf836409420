//! Async credential flow for the native runtime

use chrono::Utc;

use super::form::Credentials;
use super::outcome::{complete, AuthPolicy, Completed};
use super::AuthError;
use crate::dashboard::FixtureSource;
use crate::nav::Redirect;
use crate::notify::Notifier;
use crate::store::{Session, SessionStore};

/// Validates a submission, probes the fixture, records the session and
/// posts the resulting alert.
pub struct CredentialFlow<'a, S, F, N> {
    session: &'a Session<S>,
    probe: &'a F,
    notifier: &'a N,
    policy: AuthPolicy,
}

impl<'a, S, F, N> CredentialFlow<'a, S, F, N>
where
    S: SessionStore,
    F: FixtureSource,
    N: Notifier,
{
    pub fn new(session: &'a Session<S>, probe: &'a F, notifier: &'a N, policy: AuthPolicy) -> Self {
        Self {
            session,
            probe,
            notifier,
            policy,
        }
    }

    /// Submit a form. On success the session is written before the
    /// returned redirect is due; following it is up to the caller.
    pub async fn submit(&self, credentials: &Credentials) -> Result<Redirect, AuthError> {
        match self.run(credentials).await {
            Ok(done) => {
                self.notifier.notify(done.notice);
                Ok(done.redirect)
            }
            Err(e) => {
                tracing::info!(error = %e, "Credential submission rejected");
                self.notifier.notify(e.notice());
                Err(e)
            }
        }
    }

    async fn run(&self, credentials: &Credentials) -> Result<Completed, AuthError> {
        credentials.validate()?;

        // The payload is never inspected; only success or failure matters.
        let probe = self.probe.fetch().await.map(|_| ());
        if probe.is_ok() && !self.policy.latency.is_zero() {
            tokio::time::sleep(self.policy.latency).await;
        }

        complete(credentials, probe, &self.policy, self.session, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{LoginForm, RegistrationForm};
    use crate::dashboard::{Fixture, FixtureError};
    use crate::nav::Page;
    use crate::notify::NoticeBoard;
    use crate::store::{keys, MemoryStore};
    use async_trait::async_trait;
    use std::time::Duration;

    struct Probe(bool);

    #[async_trait]
    impl FixtureSource for Probe {
        async fn fetch(&self) -> Result<Fixture, FixtureError> {
            if self.0 {
                Ok(Fixture::default())
            } else {
                Err(FixtureError::Request("offline".to_string()))
            }
        }

        fn describe(&self) -> String {
            "probe".to_string()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_mismatched_passwords_write_nothing() {
        let session = Session::new(MemoryStore::new());
        let board = NoticeBoard::new();
        let flow = CredentialFlow::new(&session, &Probe(true), &board, AuthPolicy::default());

        let form = RegistrationForm::new("Ada", "ada@example.com", "Abcdefg1!", "Abcdefg1?");
        let result = flow.submit(&Credentials::Register(form)).await;

        assert!(matches!(result, Err(AuthError::PasswordMismatch)));
        assert!(session.store().get(keys::IS_LOGGED_IN).is_none());
        assert!(session.store().get(keys::USER_EMAIL).is_none());
        assert!(session.store().get(keys::USER_DATA).is_none());

        let notice = board.latest().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message, "Passwords do not match.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_registration_writes_before_redirect() {
        let session = Session::new(MemoryStore::new());
        let board = NoticeBoard::new();
        let flow = CredentialFlow::new(&session, &Probe(true), &board, AuthPolicy::default());

        let form = RegistrationForm::new("Ada", "ada@example.com", "Abcdefg1!", "Abcdefg1!");
        let redirect = flow.submit(&Credentials::Register(form)).await.unwrap();

        assert_eq!(redirect.to, Page::Dashboard);
        assert_eq!(redirect.delay, Duration::from_millis(1500));
        assert_eq!(session.store().get(keys::IS_LOGGED_IN).as_deref(), Some("true"));
        assert_eq!(session.store().get(keys::USER_EMAIL).as_deref(), Some("ada@example.com"));
        assert!(session.store().get(keys::USER_DATA).is_some());
        assert_eq!(
            board.latest().unwrap().message,
            "Registration successful! Redirecting to dashboard..."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_succeeds_offline_in_demo_mode() {
        let session = Session::new(MemoryStore::new());
        let board = NoticeBoard::new();
        let flow = CredentialFlow::new(&session, &Probe(false), &board, AuthPolicy::default());

        let start = tokio::time::Instant::now();
        let redirect = flow
            .submit(&Credentials::Login(LoginForm::new("ada@example.com", "pw")))
            .await
            .unwrap();

        assert!(start.elapsed() < Duration::from_millis(500));
        assert_eq!(redirect.delay, Duration::from_millis(1000));
        assert!(session.is_logged_in());
        assert_eq!(board.latest().unwrap().message, "Login successful! Redirecting...");
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_success_waits_for_latency() {
        let session = Session::new(MemoryStore::new());
        let board = NoticeBoard::new();
        let flow = CredentialFlow::new(&session, &Probe(true), &board, AuthPolicy::default());

        let start = tokio::time::Instant::now();
        flow.submit(&Credentials::Login(LoginForm::new("a@b.c", "pw")))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_weak_password_rejected() {
        let session = Session::new(MemoryStore::new());
        let board = NoticeBoard::new();
        let flow = CredentialFlow::new(&session, &Probe(true), &board, AuthPolicy::default());

        let form = RegistrationForm::new("Ada", "ada@example.com", "abcdefgh", "abcdefgh");
        assert!(flow.submit(&Credentials::Register(form)).await.is_err());
        assert!(!session.is_logged_in());
    }

    #[tokio::test(start_paused = true)]
    async fn test_offline_login_rejected_outside_demo_mode() {
        let session = Session::new(MemoryStore::new());
        let board = NoticeBoard::new();
        let policy = AuthPolicy {
            demo_mode: false,
            ..AuthPolicy::default()
        };
        let flow = CredentialFlow::new(&session, &Probe(false), &board, policy);

        let result = flow
            .submit(&Credentials::Login(LoginForm::new("a@b.c", "pw")))
            .await;
        assert!(matches!(result, Err(AuthError::Unavailable(_))));
        assert!(!session.is_logged_in());
        assert!(board.latest().unwrap().is_error());
    }
}
