//! Canonical text form of numbers on the wire
//!
//! Finite doubles render as the shortest decimal that parses back to the same
//! bits. Non-finite doubles have no JSON literal and render as one of three
//! sentinel words, which the JSON protocols wrap in quotes.

use std::borrow::Cow;
use thriftwire_core::{ProtocolError, ProtocolResult};

/// Sentinel for positive infinity
pub const JSON_INFINITY: &str = "Infinity";

/// Sentinel for negative infinity
pub const JSON_NEGATIVE_INFINITY: &str = "-Infinity";

/// Sentinel for not-a-number
pub const JSON_NAN: &str = "NaN";

// Magnitudes in [PLAIN_MIN, PLAIN_MAX) render without an exponent
const PLAIN_MIN: f64 = 1e-4;
const PLAIN_MAX: f64 = 1e21;

/// A double staged for the wire
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Finite(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Numeric {
    /// Classify a double
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Numeric::NaN
        } else if value == f64::INFINITY {
            Numeric::Infinity
        } else if value == f64::NEG_INFINITY {
            Numeric::NegativeInfinity
        } else {
            Numeric::Finite(value)
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Numeric::Finite(value) => value,
            Numeric::Infinity => f64::INFINITY,
            Numeric::NegativeInfinity => f64::NEG_INFINITY,
            Numeric::NaN => f64::NAN,
        }
    }

    /// The sentinel word for non-finite values
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Numeric::Finite(_) => None,
            Numeric::Infinity => Some(JSON_INFINITY),
            Numeric::NegativeInfinity => Some(JSON_NEGATIVE_INFINITY),
            Numeric::NaN => Some(JSON_NAN),
        }
    }

    /// Look up a sentinel word
    pub fn from_sentinel(text: &str) -> Option<Self> {
        match text {
            JSON_INFINITY => Some(Numeric::Infinity),
            JSON_NEGATIVE_INFINITY => Some(Numeric::NegativeInfinity),
            JSON_NAN => Some(Numeric::NaN),
            _ => None,
        }
    }

    /// Canonical text without any quoting
    pub fn canonical_text(&self) -> Cow<'static, str> {
        match self {
            Numeric::Finite(value) => Cow::Owned(format_finite(*value)),
            other => Cow::Borrowed(other.sentinel().unwrap_or(JSON_NAN)),
        }
    }

    /// Text as embedded in JSON: sentinels quoted, finite values bare
    pub fn to_json(&self) -> String {
        match self.sentinel() {
            Some(word) => format!("\"{word}\""),
            None => self.canonical_text().into_owned(),
        }
    }

    /// Decode a token
    ///
    /// `quoted` tells whether the token appeared inside quotation marks on the
    /// wire (with the quotes already removed). Quoted tokens must be
    /// sentinels; bare tokens must be JSON number literals.
    pub fn parse(token: &str, quoted: bool) -> ProtocolResult<Self> {
        if quoted {
            return Self::from_sentinel(token).ok_or_else(|| {
                ProtocolError::InvalidData(format!(
                    "quoted double must be {JSON_INFINITY}, {JSON_NEGATIVE_INFINITY} or {JSON_NAN}, found {token:?}"
                ))
            });
        }
        if !is_json_number(token) {
            return Err(ProtocolError::InvalidData(format!(
                "expected a number, found {token:?}"
            )));
        }
        let value = token
            .parse::<f64>()
            .map_err(|e| ProtocolError::InvalidData(format!("bad number {token:?}: {e}")))?;
        if !value.is_finite() {
            return Err(ProtocolError::OutOfRange(format!(
                "{token:?} does not fit in a double"
            )));
        }
        Ok(Numeric::Finite(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::from_f64(value)
    }
}

impl From<Numeric> for f64 {
    fn from(value: Numeric) -> Self {
        value.to_f64()
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json())
    }
}

/// Render a double as it appears in JSON
pub fn format_double(value: f64) -> String {
    Numeric::from_f64(value).to_json()
}

/// Decode a double token; see [`Numeric::parse`]
pub fn parse_double(token: &str, quoted: bool) -> ProtocolResult<f64> {
    Numeric::parse(token, quoted).map(f64::from)
}

fn format_finite(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return value.to_string();
    }
    // `{:e}` yields the shortest mantissa but a bare exponent ("1e21", "1e-5")
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Check a token against the JSON number grammar
///
/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
pub fn is_json_number(token: &str) -> bool {
    let bytes = token.as_bytes();
    let mut i = 0;
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = digits_from(i + 1),
        _ => return false,
    }
    if bytes.get(i) == Some(&b'.') {
        let end = digits_from(i + 1);
        if end == i + 1 {
            return false;
        }
        i = end;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let end = digits_from(i);
        if end == i {
            return false;
        }
        i = end;
    }
    i == bytes.len()
}

/// Check a token against the JSON integer grammar `-? (0 | [1-9][0-9]*)`
pub fn is_json_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    match digits.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

/// Decode an integer token into the requested width
///
/// Tokens outside the integer grammar are invalid data; well-formed tokens
/// that do not fit `T` are range errors.
pub fn parse_integer<T>(token: &str) -> ProtocolResult<T>
where
    T: TryFrom<i64>,
{
    if !is_json_integer(token) {
        return Err(ProtocolError::InvalidData(format!(
            "expected an integer, found {token:?}"
        )));
    }
    let wide = token.parse::<i64>().map_err(|_| {
        ProtocolError::OutOfRange(format!("{token} does not fit in 64 bits"))
    })?;
    T::try_from(wide).map_err(|_| {
        ProtocolError::OutOfRange(format!(
            "{token} does not fit in {}",
            std::any::type_name::<T>()
        ))
    })
}

#[cfg(test)]
#[path = "numeric/numeric_tests.rs"]
mod numeric_tests;
