//! thriftwire-protocol - Structured encoding over byte transports
//!
//! This crate provides:
//! - [`Protocol`] trait with matched begin/end operations for every container
//! - [`SimpleJsonProtocol`], a human-readable JSON rendering
//! - [`numeric`] canonical text for doubles, including non-finite sentinels
//! - [`ProtocolFactory`] for binding protocols to transports uniformly

mod context;
pub mod numeric;
mod protocol;
mod simple_json;

pub use context::{Context, ContextKind, ContextStack, Separator};
pub use numeric::Numeric;
pub use protocol::{
    FieldIdentifier, ListIdentifier, MapIdentifier, MessageIdentifier, Protocol, ProtocolFactory,
    SetIdentifier,
};
pub use simple_json::{SimpleJsonProtocol, SimpleJsonProtocolFactory};
pub use thriftwire_core::{MessageType, ProtocolError, ProtocolResult, TType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FieldIdentifier, ListIdentifier, MapIdentifier, MessageIdentifier, MessageType, Protocol,
        ProtocolError, ProtocolFactory, ProtocolResult, SetIdentifier, SimpleJsonProtocol,
        SimpleJsonProtocolFactory, TType,
    };
}
