//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::page::FieldInput;
use crate::strength::StrengthLabel;

// ============================================
// PASSWORD DTOs
// ============================================

/// Strength check request
#[derive(Debug, Deserialize)]
pub struct StrengthRequest {
    pub password: String,
}

/// Strength check response
#[derive(Debug, Serialize)]
pub struct StrengthResponse {
    /// 0-4
    pub score: u8,
    /// Absent for an empty password
    pub label: Option<StrengthLabel>,
    /// Meter caption, e.g. "Medium Password"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Whether registration would accept it
    pub acceptable: bool,
}

// ============================================
// FORM DTOs
// ============================================

/// Form validation request
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub fields: Vec<FieldInput>,
}

/// Form validation response
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    /// Names of the fields that failed
    pub invalid: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// "ok" or "missing"
    pub fixture: String,
    pub demo_mode: bool,
    pub uptime_seconds: u64,
    pub version: String,
}
