//! Credential forms and their pre-submission checks

use serde::Deserialize;

use super::AuthError;
use crate::strength::Strength;

/// Sign-in form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Either form, as submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Login(LoginForm),
    Register(RegistrationForm),
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty. Values are not trimmed.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(())
    }
}

impl RegistrationForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Checks in order, stopping at the first failure: every field
    /// non-empty, passwords match, password strength acceptable.
    pub fn validate(&self) -> Result<(), AuthError> {
        let fields = [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(AuthError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let strength = Strength::of(&self.password);
        if !strength.is_acceptable() {
            return Err(AuthError::WeakPassword {
                score: strength.score,
            });
        }

        Ok(())
    }
}

impl Credentials {
    pub fn validate(&self) -> Result<(), AuthError> {
        match self {
            Self::Login(form) => form.validate(),
            Self::Register(form) => form.validate(),
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Login(form) => &form.email,
            Self::Register(form) => &form.email,
        }
    }
}
