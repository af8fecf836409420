//! Password Routes
//!
//! - POST /api/v1/password/strength - Score a password

use axum::Json;

use crate::api::dto::{StrengthRequest, StrengthResponse};
use crate::strength::Strength;

/// POST /api/v1/password/strength
pub async fn strength(Json(req): Json<StrengthRequest>) -> Json<StrengthResponse> {
    let strength = Strength::of(&req.password);

    Json(StrengthResponse {
        score: strength.score,
        label: strength.label,
        text: strength.label.map(|l| l.text().to_string()),
        acceptable: strength.is_acceptable(),
    })
}
