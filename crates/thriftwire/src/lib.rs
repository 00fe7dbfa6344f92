//! # thriftwire
//!
//! Thrift-style byte transports and a human-readable JSON protocol.
//!
//! - [`Transport`] is a duplex byte channel; [`BufferedTransport`] batches
//!   small reads and writes over any other transport
//! - [`Protocol`] encodes typed values with matched begin/end calls;
//!   [`SimpleJsonProtocol`] renders them as plain JSON
//! - [`logging`] installs a `tracing` subscriber for the debug output of both
//!   layers
//!
//! ## Quick Start
//!
//! ```
//! use thriftwire::prelude::*;
//!
//! # fn main() -> Result<(), ProtocolError> {
//! let transport = BufferedTransport::new(MemoryBuffer::new(), 4096);
//! let mut protocol = SimpleJsonProtocol::new(transport);
//!
//! protocol.write_map_begin(TType::I32, TType::Double, 1)?;
//! protocol.write_i32(1)?;
//! protocol.write_double(f64::NAN)?;
//! protocol.write_map_end()?;
//! protocol.flush()?;
//!
//! assert_eq!(
//!     protocol.transport().get_ref().to_string_lossy(),
//!     r#"{"1":"NaN"}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`thriftwire_core`] - Type tags, errors, configuration
//! - [`thriftwire_transport`] - Transports and the buffered decorator
//! - [`thriftwire_protocol`] - Protocol trait and Simple JSON

pub mod logging;

// Re-export core types
pub use thriftwire_core::{
    ConfigError, DEFAULT_BUFFER_SIZE, LogLevel, MessageType, ProtocolError, ProtocolResult, TType,
    TransportError, TransportResult, TransportState, WireConfig,
};

// Re-export transports
pub use thriftwire_transport::{
    BufferedTransport, BufferedTransportFactory, MemoryBuffer, Transport, TransportFactory,
};

// Re-export protocols
pub use thriftwire_protocol::{
    FieldIdentifier, ListIdentifier, MapIdentifier, MessageIdentifier, Numeric, Protocol,
    ProtocolFactory, SetIdentifier, SimpleJsonProtocol, SimpleJsonProtocolFactory, numeric,
};

pub use logging::{init_logging, init_logging_from_config};

/// Prelude module for convenient imports.
///
/// Use `use thriftwire::prelude::*;` to import the traits and the concrete
/// transport and protocol types.
pub mod prelude {
    pub use crate::{
        BufferedTransport, BufferedTransportFactory, MemoryBuffer, MessageType, Protocol,
        ProtocolError, ProtocolFactory, ProtocolResult, SimpleJsonProtocol,
        SimpleJsonProtocolFactory, TType, Transport, TransportError, TransportFactory,
        TransportResult, WireConfig,
    };
}
