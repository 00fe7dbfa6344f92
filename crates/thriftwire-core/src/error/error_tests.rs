#![allow(non_snake_case)]

use super::*;

// TransportError tests

#[test]
fn TransportError___display___not_open_message() {
    let err = TransportError::NotOpen;

    assert_eq!(err.to_string(), "transport not open");
}

#[test]
fn TransportError___display___end_of_file_includes_detail() {
    let err = TransportError::EndOfFile("no more data".into());

    assert!(err.to_string().contains("no more data"));
}

#[test]
fn TransportError___from_io_error___wraps_io() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");

    let err: TransportError = io.into();

    assert!(matches!(err, TransportError::Io(_)));
    assert!(err.to_string().contains("pipe closed"));
}

#[test]
fn TransportError___is_eof___true_for_end_of_file() {
    assert!(TransportError::EndOfFile(String::new()).is_eof());
}

#[test]
fn TransportError___is_eof___true_for_unexpected_eof_io() {
    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");

    assert!(TransportError::Io(io).is_eof());
}

#[test]
fn TransportError___is_eof___false_for_not_open() {
    assert!(!TransportError::NotOpen.is_eof());
}

// ProtocolError tests

#[test]
fn ProtocolError___from_transport_error___wraps_transparently() {
    let err: ProtocolError = TransportError::NotOpen.into();

    assert!(matches!(err, ProtocolError::Transport(TransportError::NotOpen)));
    assert_eq!(err.to_string(), "transport not open");
}

#[test]
fn ProtocolError___from_transport___eof_becomes_truncated() {
    let err = ProtocolError::from_transport(
        TransportError::EndOfFile("drained".into()),
        "reading string",
    );

    assert!(matches!(err, ProtocolError::Truncated(ref ctx) if ctx == "reading string"));
}

#[test]
fn ProtocolError___from_transport___other_errors_pass_through() {
    let err = ProtocolError::from_transport(TransportError::TimedOut, "reading string");

    assert!(matches!(err, ProtocolError::Transport(TransportError::TimedOut)));
}

#[test]
fn ProtocolError___from_serde_error___syntax_error_becomes_invalid_data() {
    let err = serde_json::from_str::<String>("\"\\q\"").unwrap_err();

    let protocol_err: ProtocolError = err.into();

    assert!(matches!(protocol_err, ProtocolError::InvalidData(_)));
}

#[test]
fn ProtocolError___from_serde_error___eof_becomes_truncated() {
    let err = serde_json::from_str::<String>("\"abc").unwrap_err();

    let protocol_err: ProtocolError = err.into();

    assert!(matches!(protocol_err, ProtocolError::Truncated(_)));
}

#[test]
fn ProtocolError___display___out_of_range_shows_value() {
    let err = ProtocolError::OutOfRange("70000 does not fit i16".into());

    assert!(err.to_string().contains("70000"));
}
