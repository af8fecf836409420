//! Form Routes
//!
//! - POST /api/v1/forms/validate - Check required and email fields

use axum::Json;

use crate::api::dto::{ValidateRequest, ValidateResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::page::validate_fields;

/// POST /api/v1/forms/validate
///
/// Always 200 for a well-formed request; the body says which fields failed.
pub async fn validate(Json(req): Json<ValidateRequest>) -> ApiResult<Json<ValidateResponse>> {
    if req.fields.iter().any(|f| f.name.is_empty()) {
        return Err(ApiError::Validation("Every field needs a name".to_string()));
    }

    let response = match validate_fields(&req.fields) {
        Ok(()) => ValidateResponse {
            valid: true,
            invalid: Vec::new(),
            message: None,
        },
        Err(errors) => ValidateResponse {
            valid: false,
            message: Some(errors.to_string()),
            invalid: errors.invalid,
        },
    };

    Ok(Json(response))
}
