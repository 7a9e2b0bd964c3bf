//! Logging configuration

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Merge with another logging config
    pub fn merge(&mut self, other: LoggingConfig) {
        if !other.level.is_empty() {
            self.level = other.level;
        }

        if !other.format.is_empty() {
            self.format = other.format;
        }
    }

    /// Filter honoring `RUST_LOG` before the configured level
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Install the global tracing subscriber.
///
/// Returns an error when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(config.env_filter());

    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
