//! thriftwire-transport - Byte transports
//!
//! This crate provides:
//! - [`Transport`] trait for duplex byte channels
//! - [`BufferedTransport`] decorator with read-ahead and write-coalescing buffers
//! - [`MemoryBuffer`] in-memory transport
//! - [`TransportFactory`] for wrapping transports uniformly

mod buffered;
mod memory;
mod transport;

pub use buffered::{BufferedTransport, BufferedTransportFactory};
pub use memory::MemoryBuffer;
pub use thriftwire_core::{TransportError, TransportResult};
pub use transport::{Transport, TransportFactory};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BufferedTransport, BufferedTransportFactory, MemoryBuffer, Transport, TransportError,
        TransportFactory, TransportResult,
    };
}
