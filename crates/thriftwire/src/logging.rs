//! Process-wide log output
//!
//! Transports emit `trace` events for buffer refills and drains; protocols
//! emit `debug` events when they reject malformed input. Nothing is printed
//! until a subscriber is installed.

use thriftwire_core::{ConfigError, LogLevel, WireConfig};
use tracing_subscriber::EnvFilter;

/// Filter that passes events at `level` and above
pub fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_filter())
}

/// Filter from `RUST_LOG` when set and valid, otherwise from `level`
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level))
}

/// Install a formatting subscriber as the global default
///
/// Returns `false` without changing anything if a global subscriber is
/// already installed.
pub fn init_logging(level: LogLevel) -> bool {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}

/// Install the global subscriber at the level named in `config`
pub fn init_logging_from_config(config: &WireConfig) -> Result<bool, ConfigError> {
    let level = config.log_level()?;
    Ok(init_logging(level))
}
