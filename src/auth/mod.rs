//! Credential Capture
//!
//! Sign-in and sign-up handling for the demo site. Forms are checked on the
//! client, then a single outbound probe is issued. In demo mode the probe's
//! outcome never changes the result: both paths record the session and
//! redirect to the dashboard. With demo mode off a failed probe is reported
//! instead, which is where real authentication would plug in.

mod form;
mod outcome;

#[cfg(feature = "runtime")]
mod flow;

pub use form::{Credentials, LoginForm, RegistrationForm};
pub use outcome::{complete, AuthPolicy, Completed, FlowKind};

#[cfg(feature = "runtime")]
pub use flow::CredentialFlow;

use thiserror::Error;

use crate::notify::Notice;
use crate::store::StoreError;

/// Credential capture failures. Display strings are the user-facing alerts.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Password is too weak. Please use a stronger password.")]
    WeakPassword { score: u8 },

    #[error("Sign-in service unavailable: {0}")]
    Unavailable(String),

    #[error("Could not save session: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Alert shown for this failure
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}
