//! Logging configuration and subscriber setup

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `dialog_runtime=debug`
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Calling this
/// again after a subscriber is installed leaves the first one in place.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ValidationError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))?,
    };

    #[cfg(not(test))]
    let builder = fmt::Subscriber::builder().with_env_filter(filter);
    // Unit tests route output through libtest capture.
    #[cfg(test)]
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_test_writer();

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
