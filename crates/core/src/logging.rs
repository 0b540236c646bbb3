use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::CoreError;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ..Self::default()
        }
    }
}

/// Install a console `tracing` subscriber. A second call fails with
/// `CoreError::Config` because a global subscriber is already set.
pub fn init_logging(config: LoggingConfig) -> Result<(), CoreError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| CoreError::Config(format!("Invalid log filter '{}': {e}", config.log_level)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
        .try_init()
        .map_err(|e| CoreError::Config(format!("Logging already initialized: {e}")))?;

    tracing::debug!("Console logging initialized at '{}'", config.log_level);
    Ok(())
}
