//! Logging setup
//!
//! `RUST_LOG` wins over the configured level; an unparseable level falls back to `info`.

use crate::config::LoggingConfig;
use crate::utils::error::{GatewayError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, then `config.level`, then `info`
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        config.level.parse::<EnvFilter>().unwrap_or_else(|e| {
            eprintln!(
                "WARN: log level '{}' is not a valid filter ({}); falling back to 'info'",
                config.level, e
            );
            EnvFilter::new("info")
        })
    })
}

/// Install the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };

    installed.map_err(|e| GatewayError::internal(format!("Failed to initialize logging: {}", e)))
}
