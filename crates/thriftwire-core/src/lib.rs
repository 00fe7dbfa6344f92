//! thriftwire-core - Core types shared by the transport and protocol layers
//!
//! This crate provides:
//! - [`TType`] and [`MessageType`] wire tags
//! - [`TransportError`] and [`ProtocolError`] for error handling
//! - [`TransportState`] for the open/closed state machine
//! - [`WireConfig`] for buffer and logging configuration

mod config;
mod error;
mod state;
mod ttype;

pub use config::{ConfigError, DEFAULT_BUFFER_SIZE, WireConfig};
pub use error::{ProtocolError, ProtocolResult, TransportError, TransportResult};
pub use state::TransportState;
pub use ttype::{MessageType, TType};

/// Log levels accepted by the logging setup
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        LogLevel, MessageType, ProtocolError, ProtocolResult, TType, TransportError,
        TransportResult, TransportState, WireConfig,
    };
}

#[cfg(test)]
mod lib_tests;
