//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (fixture is readable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Outside demo mode the dashboard needs the fixture, so a missing file
/// means not ready.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.config.demo_mode || fixture_present(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let fixture_ok = fixture_present(&state).await;

    let status = if fixture_ok { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        fixture: if fixture_ok { "ok" } else { "missing" }.to_string(),
        demo_mode: state.config.demo_mode,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn fixture_present(state: &AppState) -> bool {
    tokio::fs::metadata(&state.config.fixture_path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
