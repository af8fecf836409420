//! Vista Dev Server
//!
//! Serves the static site plus a small JSON API over the shared logic,
//! built with Axum.
//!
//! # Endpoints
//!
//! ## Site
//! - `GET /data/mock-data.json` - Dashboard fixture
//! - `GET /*` - Static files from the site directory
//!
//! ## API
//! - `GET /api/v1/dashboard` - Rendered dashboard (stats, charts, activity)
//! - `POST /api/v1/password/strength` - Password strength score
//! - `POST /api/v1/forms/validate` - Generic form validation
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use vista::api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::new("127.0.0.1", 8080);
//!     serve(AppState::new(config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route("/password/strength", post(routes::password::strength))
        .route("/forms/validate", post(routes::forms::validate));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);
    let static_files = ServeDir::new(&state.config.static_dir);

    let shared_state = Arc::new(state);

    Router::new()
        .route("/data/mock-data.json", get(routes::dashboard::fixture))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}

/// Start the server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Vista listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Vista shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const FIXTURE: &[u8] = include_bytes!("../../data/mock-data.json");

    fn create_test_app(fixture: Option<&[u8]>, demo_mode: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let fixture_path = dir.path().join("mock-data.json");
        if let Some(bytes) = fixture {
            std::fs::write(&fixture_path, bytes).unwrap();
        }
        std::fs::write(dir.path().join("index.html"), "<h1>Vista</h1>").unwrap();

        let config = ApiConfig {
            fixture_path,
            static_dir: dir.path().to_path_buf(),
            demo_mode,
            cors_origins: Vec::new(),
            ..ApiConfig::default()
        };

        (build_router(AppState::new(config)), dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(None, true);
        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_reports_missing_fixture() {
        let (app, _dir) = create_test_app(None, true);
        let (status, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["fixture"], "missing");
    }

    #[tokio::test]
    async fn test_ready_requires_fixture_outside_demo_mode() {
        let (app, _dir) = create_test_app(None, false);
        let (status, _) = get(app, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_fixture_passthrough() {
        let (app, _dir) = create_test_app(Some(FIXTURE), true);
        let (status, body) = get(app, "/data/mock-data.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, FIXTURE);
    }

    #[tokio::test]
    async fn test_fixture_missing_is_404() {
        let (app, _dir) = create_test_app(None, true);
        let (status, body) = get(app, "/data/mock-data.json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_dashboard_from_fixture() {
        let (app, _dir) = create_test_app(Some(FIXTURE), true);
        let (status, body) = get(app, "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["source"], "fixture");
        assert_eq!(json["stats"].as_array().unwrap().len(), 4);
        assert_eq!(json["charts"].as_array().unwrap().len(), 3);
        assert!(json["activity"]["rows"].is_array());
    }

    #[tokio::test]
    async fn test_dashboard_falls_back_in_demo_mode() {
        let (app, _dir) = create_test_app(Some(b"not json"), true);
        let (status, body) = get(app, "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["stats"][0]["display"], "1,250");
    }

    #[tokio::test]
    async fn test_dashboard_errors_outside_demo_mode() {
        let (app, _dir) = create_test_app(None, false);
        let (status, body) = get(app, "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "FIXTURE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_password_strength() {
        let (app, _dir) = create_test_app(None, true);
        let (status, json) =
            post_json(app, "/api/v1/password/strength", r#"{"password":"Abcdefg1!"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["score"], 4);
        assert_eq!(json["label"], "strong");
        assert_eq!(json["text"], "Strong Password");
    }

    #[tokio::test]
    async fn test_password_strength_invalid_json() {
        let (app, _dir) = create_test_app(None, true);
        let (status, _) = post_json(app, "/api/v1/password/strength", "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_form_validation() {
        let (app, _dir) = create_test_app(None, true);
        let body = r#"{"fields":[
            {"name":"name","value":"  ","required":true},
            {"name":"email","value":"ada@example","required":true,"email":true},
            {"name":"company","value":""}
        ]}"#;
        let (status, json) = post_json(app, "/api/v1/forms/validate", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["valid"], false);
        assert_eq!(json["invalid"], serde_json::json!(["name", "email"]));
        assert_eq!(json["message"], "Please fill in all required fields correctly.");
    }

    #[tokio::test]
    async fn test_form_validation_passes() {
        let (app, _dir) = create_test_app(None, true);
        let body = r#"{"fields":[{"name":"email","value":"ada@example.com","required":true,"email":true}]}"#;
        let (status, json) = post_json(app, "/api/v1/forms/validate", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["valid"], true);
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn test_static_fallback() {
        let (app, _dir) = create_test_app(None, true);
        let (status, body) = get(app, "/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<h1>Vista</h1>");
    }
}
