//! Error types for the transport and protocol layers

use thiserror::Error;

/// Result type alias for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Result type alias for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Error type for transport operations
///
/// Transport errors are propagated unchanged through buffering layers and
/// protocols. They are never retried by this crate.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Operation attempted on a closed transport
    #[error("transport not open")]
    NotOpen,

    /// Open attempted on a transport that is already open
    #[error("transport already open")]
    AlreadyOpen,

    /// The underlying channel timed out
    #[error("transport timed out")]
    TimedOut,

    /// The stream ended before the requested bytes were available
    #[error("end of file: {0}")]
    EndOfFile(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure
    #[error("transport error: {0}")]
    Unknown(String),
}

impl TransportError {
    /// Returns the cross-language transport exception code
    pub fn error_code(&self) -> u32 {
        match self {
            TransportError::Unknown(_) | TransportError::Io(_) => 0,
            TransportError::NotOpen => 1,
            TransportError::AlreadyOpen => 2,
            TransportError::TimedOut => 3,
            TransportError::EndOfFile(_) => 4,
        }
    }

    /// Check whether this error signals end of stream
    pub fn is_eof(&self) -> bool {
        match self {
            TransportError::EndOfFile(_) => true,
            TransportError::Io(err) => err.kind() == std::io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}

/// Error type for protocol operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The underlying transport failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A token did not match the grammar expected by the operation
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A numeric literal parsed but does not fit the requested width
    #[error("value out of range: {0}")]
    OutOfRange(String),

    /// The stream ended in the middle of a token or bracket
    #[error("unexpected end of stream: {0}")]
    Truncated(String),

    /// A container or string length was negative
    #[error("negative size: {0}")]
    NegativeSize(i64),

    /// The operation is not supported by this protocol
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl ProtocolError {
    /// Returns the cross-language protocol exception code
    ///
    /// Range and truncation errors have no dedicated code on the wire and are
    /// reported as invalid data.
    pub fn error_code(&self) -> u32 {
        match self {
            ProtocolError::Transport(_) => 0,
            ProtocolError::InvalidData(_)
            | ProtocolError::OutOfRange(_)
            | ProtocolError::Truncated(_) => 1,
            ProtocolError::NegativeSize(_) => 2,
            ProtocolError::NotImplemented(_) => 5,
        }
    }

    /// Convert a transport failure, mapping end of stream to truncation
    pub fn from_transport(err: TransportError, context: &str) -> Self {
        if err.is_eof() {
            ProtocolError::Truncated(context.to_string())
        } else {
            ProtocolError::Transport(err)
        }
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_eof() {
            ProtocolError::Truncated(err.to_string())
        } else {
            ProtocolError::InvalidData(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
