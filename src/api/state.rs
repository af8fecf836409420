//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::dashboard::{ChartOptions, FileFixtureSource};

/// Shared application state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// API configuration
    pub config: ApiConfig,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Source the dashboard endpoint loads from
    pub fn fixture_source(&self) -> FileFixtureSource {
        FileFixtureSource::new(&self.config.fixture_path)
    }
}

/// Dev server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins; empty means permissive
    pub cors_origins: Vec<String>,
    /// Fixture served at `/data/mock-data.json`
    pub fixture_path: PathBuf,
    /// Static site root
    pub static_dir: PathBuf,
    /// Render the fallback dataset when the fixture is unusable
    pub demo_mode: bool,
    pub chart_options: ChartOptions,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ApiConfig {
    fn from(config: &Config) -> Self {
        Self {
            host: config.api.host.clone(),
            port: config.api.port,
            cors_origins: config.api.cors_origins.clone(),
            fixture_path: PathBuf::from(&config.site.fixture_path),
            static_dir: PathBuf::from(&config.site.static_dir),
            demo_mode: config.site.demo_mode,
            chart_options: config.dashboard.chart_options(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
