//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::auth::AuthPolicy;
use crate::dashboard::ChartOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Site content and session storage
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_fixture_path")]
    pub fixture_path: String,

    /// Fetch the fixture over HTTP instead of reading `fixture_path`
    pub fixture_url: Option<String>,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Fall through to success/fallback when the fixture cannot be fetched
    #[serde(default = "default_demo_mode")]
    pub demo_mode: bool,
}

fn default_fixture_path() -> String {
    "data/mock-data.json".to_string()
}

fn default_static_dir() -> String {
    ".".to_string()
}

fn default_store_path() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("vista").join("session.json").to_string_lossy().to_string())
        .unwrap_or_else(|| "./vista_session.json".to_string())
}

fn default_demo_mode() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fixture_path: default_fixture_path(),
            fixture_url: None,
            static_dir: default_static_dir(),
            store_path: default_store_path(),
            demo_mode: default_demo_mode(),
        }
    }
}

impl SiteConfig {
    /// Store path with a leading `~/` expanded to the home directory
    pub fn store_path(&self) -> PathBuf {
        expand_home(&self.store_path)
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Dashboard rendering
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_chart_height")]
    pub chart_height: f64,

    #[serde(default = "default_chart_width")]
    pub chart_width: f64,

    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,

    #[serde(default = "default_counter_tick")]
    pub counter_tick_ms: u64,
}

fn default_chart_height() -> f64 {
    200.0
}

fn default_chart_width() -> f64 {
    600.0
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_counter_tick() -> u64 {
    16 // ~60 fps
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            chart_height: default_chart_height(),
            chart_width: default_chart_width(),
            counter_duration_ms: default_counter_duration(),
            counter_tick_ms: default_counter_tick(),
        }
    }
}

impl DashboardConfig {
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            height: self.chart_height,
            width: self.chart_width,
        }
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn counter_tick(&self) -> Duration {
        Duration::from_millis(self.counter_tick_ms)
    }
}

/// Simulated credential capture timing
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_latency")]
    pub latency_ms: u64,

    #[serde(default = "default_login_redirect")]
    pub login_redirect_ms: u64,

    #[serde(default = "default_register_redirect")]
    pub register_redirect_ms: u64,
}

fn default_latency() -> u64 {
    500
}

fn default_login_redirect() -> u64 {
    1000
}

fn default_register_redirect() -> u64 {
    1500
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency(),
            login_redirect_ms: default_login_redirect(),
            register_redirect_ms: default_register_redirect(),
        }
    }
}

/// Dev server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8081".to_string(),
                "http://127.0.0.1:8081".to_string(),
            ],
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("vista").join("config.toml")),
            Some(PathBuf::from("/etc/vista/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Load `path` if given, otherwise search the default locations
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Timing and failure policy for login and registration
    pub fn auth_policy(&self) -> AuthPolicy {
        AuthPolicy {
            demo_mode: self.site.demo_mode,
            latency: Duration::from_millis(self.auth.latency_ms),
            login_redirect: Duration::from_millis(self.auth.login_redirect_ms),
            register_redirect: Duration::from_millis(self.auth.register_redirect_ms),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Site overrides
        if let Ok(path) = std::env::var("VISTA_FIXTURE_PATH") {
            self.site.fixture_path = path;
        }
        if let Ok(url) = std::env::var("VISTA_FIXTURE_URL") {
            self.site.fixture_url = Some(url);
        }
        if let Ok(dir) = std::env::var("VISTA_STATIC_DIR") {
            self.site.static_dir = dir;
        }
        if let Ok(path) = std::env::var("VISTA_STORE_PATH") {
            self.site.store_path = path;
        }
        if let Ok(demo) = std::env::var("VISTA_DEMO_MODE") {
            if let Ok(d) = demo.parse() {
                self.site.demo_mode = d;
            }
        }

        // API overrides
        if let Ok(host) = std::env::var("VISTA_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("VISTA_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("VISTA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("VISTA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Vista Configuration
#
# Environment variables override these settings:
# - VISTA_FIXTURE_PATH
# - VISTA_FIXTURE_URL
# - VISTA_STATIC_DIR
# - VISTA_STORE_PATH
# - VISTA_DEMO_MODE
# - VISTA_API_HOST
# - VISTA_API_PORT
# - VISTA_LOG_LEVEL
# - VISTA_LOG_FORMAT

[site]
# Dashboard fixture on disk
fixture_path = "data/mock-data.json"

# Fetch the fixture over HTTP instead
# fixture_url = "http://127.0.0.1:8080/data/mock-data.json"

# Directory served as the static site
static_dir = "."

# JSON file holding the CLI session
store_path = "~/.local/share/vista/session.json"

# Succeed (or fall back to built-in data) when the fixture is unreachable
demo_mode = true

[dashboard]
# Chart size (px)
chart_height = 200.0
chart_width = 600.0

# Counter animation length and frame interval (ms)
counter_duration_ms = 2000
counter_tick_ms = 16

[auth]
# Simulated request latency (ms)
latency_ms = 500

# Delay before following the post-login/registration redirect (ms)
login_redirect_ms = 1000
register_redirect_ms = 1500

[api]
# Dev server host
host = "127.0.0.1"

# Dev server port
port = 8080

# Allowed CORS origins
cors_origins = ["http://localhost:8081", "http://127.0.0.1:8081"]

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/vista/vista.log"
"#
    .to_string()
}
