//! Protocol trait and read identifiers

use thriftwire_core::{MessageType, ProtocolResult, TType};
use thriftwire_transport::Transport;

/// Header of an RPC message envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageIdentifier {
    pub name: String,
    pub message_type: MessageType,
    pub sequence_number: i32,
}

impl MessageIdentifier {
    pub fn new(name: impl Into<String>, message_type: MessageType, sequence_number: i32) -> Self {
        Self {
            name: name.into(),
            message_type,
            sequence_number,
        }
    }
}

/// Header of a struct field as read from the wire
///
/// Text protocols carry the field name but neither its type nor its id;
/// they report [`TType::Void`] and `None`. A field type of [`TType::Stop`]
/// marks the end of the struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdentifier {
    pub name: Option<String>,
    pub field_type: TType,
    pub id: Option<i16>,
}

impl FieldIdentifier {
    pub fn new(name: impl Into<String>, field_type: TType, id: i16) -> Self {
        Self {
            name: Some(name.into()),
            field_type,
            id: Some(id),
        }
    }

    /// The end-of-struct marker
    pub fn stop() -> Self {
        Self {
            name: None,
            field_type: TType::Stop,
            id: None,
        }
    }

    pub fn is_stop(&self) -> bool {
        self.field_type == TType::Stop
    }
}

/// Header of a list as read from the wire
///
/// `size` is `None` when the encoding is self-delimiting; iterate with
/// [`Protocol::read_has_more`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListIdentifier {
    pub element_type: TType,
    pub size: Option<usize>,
}

impl ListIdentifier {
    pub fn new(element_type: TType, size: Option<usize>) -> Self {
        Self { element_type, size }
    }
}

/// Header of a set as read from the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetIdentifier {
    pub element_type: TType,
    pub size: Option<usize>,
}

impl SetIdentifier {
    pub fn new(element_type: TType, size: Option<usize>) -> Self {
        Self { element_type, size }
    }
}

/// Header of a map as read from the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapIdentifier {
    pub key_type: TType,
    pub value_type: TType,
    pub size: Option<usize>,
}

impl MapIdentifier {
    pub fn new(key_type: TType, value_type: TType, size: Option<usize>) -> Self {
        Self {
            key_type,
            value_type,
            size,
        }
    }
}

/// Structured encoder/decoder bound to a transport
///
/// Calls follow a strict order: every `*_begin` is matched by exactly one
/// `*_end` at the same nesting depth before any enclosing `*_end`, and a
/// reader issues the same sequence of calls the writer did. Writers call
/// [`Protocol::flush`] after a logically complete message.
pub trait Protocol {
    fn write_message_begin(
        &mut self,
        name: &str,
        message_type: MessageType,
        sequence_number: i32,
    ) -> ProtocolResult<()>;
    fn write_message_end(&mut self) -> ProtocolResult<()>;
    fn write_struct_begin(&mut self, name: &str) -> ProtocolResult<()>;
    fn write_struct_end(&mut self) -> ProtocolResult<()>;
    fn write_field_begin(&mut self, name: &str, field_type: TType, id: i16) -> ProtocolResult<()>;
    fn write_field_end(&mut self) -> ProtocolResult<()>;
    fn write_field_stop(&mut self) -> ProtocolResult<()>;
    fn write_map_begin(
        &mut self,
        key_type: TType,
        value_type: TType,
        size: usize,
    ) -> ProtocolResult<()>;
    fn write_map_end(&mut self) -> ProtocolResult<()>;
    fn write_list_begin(&mut self, element_type: TType, size: usize) -> ProtocolResult<()>;
    fn write_list_end(&mut self) -> ProtocolResult<()>;
    fn write_set_begin(&mut self, element_type: TType, size: usize) -> ProtocolResult<()>;
    fn write_set_end(&mut self) -> ProtocolResult<()>;
    fn write_bool(&mut self, value: bool) -> ProtocolResult<()>;
    fn write_byte(&mut self, value: i8) -> ProtocolResult<()>;
    fn write_i16(&mut self, value: i16) -> ProtocolResult<()>;
    fn write_i32(&mut self, value: i32) -> ProtocolResult<()>;
    fn write_i64(&mut self, value: i64) -> ProtocolResult<()>;
    fn write_double(&mut self, value: f64) -> ProtocolResult<()>;
    fn write_string(&mut self, value: &str) -> ProtocolResult<()>;
    fn write_binary(&mut self, value: &[u8]) -> ProtocolResult<()>;

    /// Push everything written so far through the transport
    fn flush(&mut self) -> ProtocolResult<()>;

    fn read_message_begin(&mut self) -> ProtocolResult<MessageIdentifier>;
    fn read_message_end(&mut self) -> ProtocolResult<()>;
    /// Returns the struct name when the encoding carries it
    fn read_struct_begin(&mut self) -> ProtocolResult<Option<String>>;
    fn read_struct_end(&mut self) -> ProtocolResult<()>;
    fn read_field_begin(&mut self) -> ProtocolResult<FieldIdentifier>;
    fn read_field_end(&mut self) -> ProtocolResult<()>;
    fn read_map_begin(&mut self) -> ProtocolResult<MapIdentifier>;
    fn read_map_end(&mut self) -> ProtocolResult<()>;
    fn read_list_begin(&mut self) -> ProtocolResult<ListIdentifier>;
    fn read_list_end(&mut self) -> ProtocolResult<()>;
    fn read_set_begin(&mut self) -> ProtocolResult<SetIdentifier>;
    fn read_set_end(&mut self) -> ProtocolResult<()>;
    fn read_bool(&mut self) -> ProtocolResult<bool>;
    fn read_byte(&mut self) -> ProtocolResult<i8>;
    fn read_i16(&mut self) -> ProtocolResult<i16>;
    fn read_i32(&mut self) -> ProtocolResult<i32>;
    fn read_i64(&mut self) -> ProtocolResult<i64>;
    fn read_double(&mut self) -> ProtocolResult<f64>;
    fn read_string(&mut self) -> ProtocolResult<String>;
    fn read_binary(&mut self) -> ProtocolResult<Vec<u8>>;

    /// Check whether the innermost open container has another element
    ///
    /// At the top level this reports whether the stream holds another value.
    fn read_has_more(&mut self) -> ProtocolResult<bool>;
}

/// Builds protocols over transports of type `T`
pub trait ProtocolFactory<T: Transport> {
    /// The protocol produced by this factory
    type Output: Protocol;

    fn get_protocol(&self, transport: T) -> Self::Output;
}
