//! Generic form validation

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Loose address shape: something, `@`, something, `.`, something
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// One form control as submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInput {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub required: bool,
    /// `type="email"` control
    #[serde(default)]
    pub email: bool,
}

impl FieldInput {
    pub fn text(name: impl Into<String>, value: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required,
            email: false,
        }
    }

    pub fn email(name: impl Into<String>, value: impl Into<String>, required: bool) -> Self {
        Self {
            email: true,
            ..Self::text(name, value, required)
        }
    }

    fn is_valid(&self) -> bool {
        if self.required && self.value.trim().is_empty() {
            return false;
        }
        if self.email && !self.value.is_empty() {
            return is_email(&self.value);
        }
        true
    }
}

/// Fields that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Please fill in all required fields correctly.")]
pub struct FormErrors {
    pub invalid: Vec<String>,
}

impl FormErrors {
    pub fn contains(&self, name: &str) -> bool {
        self.invalid.iter().any(|f| f == name)
    }
}

pub fn is_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
        .is_match(value)
}

/// Check every field, collecting all failures rather than stopping at the first
pub fn validate_fields(fields: &[FieldInput]) -> Result<(), FormErrors> {
    let invalid: Vec<String> = fields
        .iter()
        .filter(|f| !f.is_valid())
        .map(|f| f.name.clone())
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(FormErrors { invalid })
    }
}
