//! Vista Dev Server
//!
//! Run with: cargo run --bin vista [-- path/to/config.toml]
//!
//! Serves the static site and the JSON API. Configuration is read from the
//! given file, or the default locations, with `VISTA_*` environment
//! overrides on top. `RUST_LOG` overrides the configured log level.

use std::path::PathBuf;
use vista::api::{serve, ApiConfig, AppState};
use vista::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::resolve(config_path.as_deref())?;

    vista::logging::init(
        &config.logging,
        &vista::logging::default_filter(&config.logging, true),
    )?;

    tracing::info!("Starting Vista dev server v{}", env!("CARGO_PKG_VERSION"));

    let api_config = ApiConfig::from(&config);
    tracing::info!("Static site: {:?}", api_config.static_dir);
    tracing::info!("Fixture: {:?}", api_config.fixture_path);
    tracing::info!("Demo mode: {}", api_config.demo_mode);

    if !api_config.fixture_path.exists() {
        if api_config.demo_mode {
            tracing::warn!(
                "Fixture {:?} not found; the dashboard will use built-in data",
                api_config.fixture_path
            );
        } else {
            tracing::warn!("Fixture {:?} not found", api_config.fixture_path);
        }
    }

    let state = AppState::new(api_config.clone());
    serve(state, &api_config).await?;

    Ok(())
}
