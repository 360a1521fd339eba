//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG`, when set, takes
//! precedence over the configured level so a single run can be made more
//! verbose without touching config files.

use salesdesk_domain::{LoggingConfig, Result, SalesDeskError};
use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter for the given configuration.
///
/// # Errors
/// Returns `SalesDeskError::Config` if the configured level is not a valid
/// filter directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            SalesDeskError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Returns `SalesDeskError::Config` if the level is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let installed = if config.json {
        fmt().with_env_filter(filter).with_target(true).json().try_init()
    } else {
        fmt().with_env_filter(filter).with_target(true).try_init()
    };

    installed.map_err(|e| SalesDeskError::Config(format!("Failed to install subscriber: {}", e)))
}
