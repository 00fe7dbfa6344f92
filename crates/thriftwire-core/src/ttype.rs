//! Wire type tags and message types

use crate::error::ProtocolError;
use serde::{Deserialize, Serialize};

/// Wire type of a value being read or written
///
/// The numeric assignment is shared by every implementation of the protocol
/// family and must not change:
/// ```text
/// STOP=0 VOID=1 BOOL=2 BYTE=3 DOUBLE=4 I16=6 I32=8 I64=10
/// STRING=11 STRUCT=12 MAP=13 SET=14 LIST=15
/// ```
/// Text protocols that do not carry type information report [`TType::Void`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TType {
    /// Terminates the field list of a struct
    Stop = 0,
    /// No type / type not carried on the wire
    Void = 1,
    Bool = 2,
    Byte = 3,
    Double = 4,
    I16 = 6,
    I32 = 8,
    I64 = 10,
    String = 11,
    Struct = 12,
    Map = 13,
    Set = 14,
    List = 15,
}

impl TType {
    /// Check whether values of this type are containers or aggregates
    pub fn is_container(&self) -> bool {
        matches!(self, TType::Struct | TType::Map | TType::Set | TType::List)
    }

    /// Get the lowercase name used in textual encodings
    pub fn name(&self) -> &'static str {
        match self {
            TType::Stop => "stop",
            TType::Void => "void",
            TType::Bool => "bool",
            TType::Byte => "byte",
            TType::Double => "double",
            TType::I16 => "i16",
            TType::I32 => "i32",
            TType::I64 => "i64",
            TType::String => "string",
            TType::Struct => "struct",
            TType::Map => "map",
            TType::Set => "set",
            TType::List => "list",
        }
    }
}

impl TryFrom<u8> for TType {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TType::Stop),
            1 => Ok(TType::Void),
            2 => Ok(TType::Bool),
            3 => Ok(TType::Byte),
            4 => Ok(TType::Double),
            6 => Ok(TType::I16),
            8 => Ok(TType::I32),
            10 => Ok(TType::I64),
            11 => Ok(TType::String),
            12 => Ok(TType::Struct),
            13 => Ok(TType::Map),
            14 => Ok(TType::Set),
            15 => Ok(TType::List),
            other => Err(ProtocolError::InvalidData(format!(
                "unknown type tag {other}"
            ))),
        }
    }
}

impl From<TType> for u8 {
    fn from(value: TType) -> Self {
        value as u8
    }
}

impl std::fmt::Display for TType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of an RPC message envelope
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Call = 1,
    Reply = 2,
    Exception = 3,
    Oneway = 4,
}

impl TryFrom<u8> for MessageType {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MessageType::Call),
            2 => Ok(MessageType::Reply),
            3 => Ok(MessageType::Exception),
            4 => Ok(MessageType::Oneway),
            other => Err(ProtocolError::InvalidData(format!(
                "unknown message type {other}"
            ))),
        }
    }
}

impl From<MessageType> for u8 {
    fn from(value: MessageType) -> Self {
        value as u8
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Call => write!(f, "Call"),
            MessageType::Reply => write!(f, "Reply"),
            MessageType::Exception => write!(f, "Exception"),
            MessageType::Oneway => write!(f, "Oneway"),
        }
    }
}

#[cfg(test)]
#[path = "ttype/ttype_tests.rs"]
mod ttype_tests;
