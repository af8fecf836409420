//! Tracing setup shared by the binaries

use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Output goes to `config.file` when
/// set, otherwise to stderr, as JSON when `config.format` is `"json"`.
pub fn init(config: &LoggingConfig, default_filter: &str) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let writer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Arc::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let json = config.format.eq_ignore_ascii_case("json");
    let (json_layer, pretty_layer) = if json {
        (Some(fmt::layer().json().with_writer(writer)), None)
    } else {
        (None, Some(fmt::layer().with_writer(writer)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    Ok(())
}

/// `"{crate}={level}"` plus request tracing for the server
pub fn default_filter(config: &LoggingConfig, with_http: bool) -> String {
    if with_http {
        format!("vista={},tower_http=debug", config.level)
    } else {
        format!("vista={}", config.level)
    }
}
