#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(TType::Stop, 0)]
#[test_case(TType::Void, 1)]
#[test_case(TType::Bool, 2)]
#[test_case(TType::Byte, 3)]
#[test_case(TType::Double, 4)]
#[test_case(TType::I16, 6)]
#[test_case(TType::I32, 8)]
#[test_case(TType::I64, 10)]
#[test_case(TType::String, 11)]
#[test_case(TType::Struct, 12)]
#[test_case(TType::Map, 13)]
#[test_case(TType::Set, 14)]
#[test_case(TType::List, 15)]
fn TType___numeric_assignment___matches_wire_value(ttype: TType, expected: u8) {
    assert_eq!(u8::from(ttype), expected);
    assert_eq!(TType::try_from(expected).unwrap(), ttype);
}

#[test_case(5)]
#[test_case(7)]
#[test_case(9)]
#[test_case(16)]
#[test_case(255)]
fn TType___try_from___unassigned_value_is_invalid_data(value: u8) {
    let result = TType::try_from(value);

    assert!(matches!(result, Err(ProtocolError::InvalidData(_))));
}

#[test]
fn TType___is_container___true_for_aggregates() {
    assert!(TType::Struct.is_container());
    assert!(TType::Map.is_container());
    assert!(TType::Set.is_container());
    assert!(TType::List.is_container());
}

#[test]
fn TType___is_container___false_for_scalars() {
    assert!(!TType::Bool.is_container());
    assert!(!TType::Double.is_container());
    assert!(!TType::String.is_container());
    assert!(!TType::Stop.is_container());
}

#[test]
fn TType___display___uses_lowercase_name() {
    assert_eq!(TType::I64.to_string(), "i64");
    assert_eq!(TType::String.to_string(), "string");
}

#[test]
fn TType___serde___uses_snake_case() {
    let json = serde_json::to_string(&TType::Double).unwrap();

    assert_eq!(json, "\"double\"");
}

#[test_case(MessageType::Call, 1)]
#[test_case(MessageType::Reply, 2)]
#[test_case(MessageType::Exception, 3)]
#[test_case(MessageType::Oneway, 4)]
fn MessageType___numeric_assignment___roundtrips(message_type: MessageType, expected: u8) {
    assert_eq!(u8::from(message_type), expected);
    assert_eq!(MessageType::try_from(expected).unwrap(), message_type);
}

#[test]
fn MessageType___try_from___zero_is_invalid() {
    assert!(MessageType::try_from(0).is_err());
}
