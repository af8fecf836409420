//! Dashboard Routes
//!
//! - GET /data/mock-data.json - Raw fixture
//! - GET /api/v1/dashboard - Rendered dashboard view

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{DashboardLoader, DashboardView};

/// GET /data/mock-data.json
///
/// Passes the fixture file through unparsed, as a static server would.
pub async fn fixture(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let bytes = match tokio::fs::read(&state.config.fixture_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::NotFound(format!(
                "Fixture {} not found",
                state.config.fixture_path.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(([(header::CONTENT_TYPE, "application/json")], bytes))
}

/// GET /api/v1/dashboard
///
/// Runs one dashboard load against the fixture. In demo mode an unusable
/// fixture yields the fallback view.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<DashboardView>> {
    let mut loader = DashboardLoader::new(
        state.fixture_source(),
        state.config.demo_mode,
        state.config.chart_options,
    );

    let view = loader.load().await?;
    Ok(Json(view.clone()))
}
