//! Wire stack configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a configuration document cannot be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Configuration shared by transport factories and logging setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireConfig {
    /// Capacity in bytes of each buffer in a buffered transport
    ///
    /// A value of 0 makes the buffered transport pass reads and writes
    /// straight through to the wrapped transport.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default buffer capacity, matching the usual socket buffer granularity
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            log_level: default_log_level(),
        }
    }
}

impl WireConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Set the buffer capacity
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Parse the configured log level
    pub fn log_level(&self) -> Result<crate::LogLevel, ConfigError> {
        self.log_level.parse()
    }
}
