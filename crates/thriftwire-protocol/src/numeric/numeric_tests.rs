#![allow(non_snake_case)]

use super::*;

#[test]
fn Numeric___from_f64___classifies_non_finite_values() {
    assert_eq!(Numeric::from_f64(f64::INFINITY), Numeric::Infinity);
    assert_eq!(Numeric::from_f64(f64::NEG_INFINITY), Numeric::NegativeInfinity);
    assert!(matches!(Numeric::from_f64(f64::NAN), Numeric::NaN));
    assert_eq!(Numeric::from_f64(1.5), Numeric::Finite(1.5));
}

#[test]
fn Numeric___to_json___quotes_sentinels_only() {
    assert_eq!(Numeric::Infinity.to_json(), "\"Infinity\"");
    assert_eq!(Numeric::NegativeInfinity.to_json(), "\"-Infinity\"");
    assert_eq!(Numeric::NaN.to_json(), "\"NaN\"");
    assert_eq!(Numeric::Finite(2.5).to_json(), "2.5");
}

#[test]
fn Numeric___canonical_text___sentinels_are_bare() {
    assert_eq!(Numeric::NaN.canonical_text(), "NaN");
    assert_eq!(Numeric::Infinity.canonical_text(), "Infinity");
}

#[test]
fn Numeric___display___matches_json_form() {
    assert_eq!(Numeric::NaN.to_string(), "\"NaN\"");
    assert_eq!(Numeric::Finite(-3.0).to_string(), "-3");
}

#[test]
fn Numeric___parse___quoted_sentinels_decode_to_class() {
    assert_eq!(parse_double("Infinity", true).unwrap(), f64::INFINITY);
    assert_eq!(parse_double("-Infinity", true).unwrap(), f64::NEG_INFINITY);
    assert!(parse_double("NaN", true).unwrap().is_nan());
}

#[test]
fn Numeric___parse___quoted_non_sentinel_is_invalid() {
    let result = parse_double("1.5", true);

    assert!(matches!(result, Err(ProtocolError::InvalidData(_))));
}

#[test]
fn Numeric___parse___bare_sentinel_word_is_invalid() {
    assert!(matches!(
        parse_double("NaN", false),
        Err(ProtocolError::InvalidData(_))
    ));
    assert!(matches!(
        parse_double("Infinity", false),
        Err(ProtocolError::InvalidData(_))
    ));
}

#[test]
fn Numeric___parse___rejects_rust_only_spellings() {
    assert!(parse_double("inf", false).is_err());
    assert!(parse_double("+1", false).is_err());
    assert!(parse_double("1.", false).is_err());
    assert!(parse_double(".5", false).is_err());
}

#[test]
fn Numeric___parse___overflowing_literal_is_out_of_range() {
    assert!(matches!(
        parse_double("1e400", false),
        Err(ProtocolError::OutOfRange(_))
    ));
    assert!(matches!(
        parse_double("-1e999", false),
        Err(ProtocolError::OutOfRange(_))
    ));
}

#[test]
fn Numeric___parse___underflowing_literal_rounds_to_zero() {
    assert_eq!(parse_double("1e-400", false).unwrap(), 0.0);
}

#[test]
fn Numeric___parse___negative_zero_keeps_sign() {
    let value = parse_double("-0", false).unwrap();

    assert_eq!(value, 0.0);
    assert!(value.is_sign_negative());
}

#[test]
fn format_double___extremes___roundtrip_bit_for_bit() {
    for value in [
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        5e-324,
        -5e-324,
        0.1 + 0.2,
        1.0 / 3.0,
    ] {
        let text = format_double(value);
        let parsed = parse_double(&text, false).unwrap();
        assert_eq!(parsed.to_bits(), value.to_bits(), "{value} rendered as {text}");
    }
}

#[test]
fn format_double___output_is_valid_json_number() {
    for value in [1e-7, 123456.789, 1e21, -2.5e-300, 0.0001] {
        let text = format_double(value);
        let decoded = serde_json::from_str::<f64>(&text);
        assert!(decoded.is_ok(), "{text} rejected by a JSON parser");
    }
}

#[test]
fn parse_integer___widens_and_narrows() {
    assert_eq!(parse_integer::<i8>("-128").unwrap(), i8::MIN);
    assert_eq!(parse_integer::<i64>("9223372036854775807").unwrap(), i64::MAX);
}

#[test]
fn parse_integer___beyond_64_bits_is_out_of_range() {
    let result = parse_integer::<i64>("9223372036854775808");

    assert!(matches!(result, Err(ProtocolError::OutOfRange(_))));
}

#[test]
fn parse_integer___too_wide_for_target_is_out_of_range() {
    let result = parse_integer::<i16>("32768");

    assert!(matches!(result, Err(ProtocolError::OutOfRange(ref msg)) if msg.contains("i16")));
}
