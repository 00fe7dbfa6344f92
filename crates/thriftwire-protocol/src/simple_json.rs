//! Simple JSON protocol
//!
//! A human-readable rendering meant for logs, debugging and interop with
//! plain JSON tooling:
//!
//! - lists and sets are arrays, maps and structs are objects
//! - struct fields are keyed by name; field ids and type tags are not written
//! - scalar map keys are quoted (`{"1":2.5}`)
//! - non-finite doubles are the quoted sentinels `"Infinity"`, `"-Infinity"`
//!   and `"NaN"`
//! - binary is quoted standard base64
//! - a message is `["name",type,seq,...body]`
//!
//! Because sizes and type tags are not carried, readers iterate containers
//! with [`Protocol::read_has_more`] and receive [`TType::Void`] for types.

use crate::context::{ContextKind, ContextStack, Separator};
use crate::numeric::{self, Numeric};
use crate::protocol::{
    FieldIdentifier, ListIdentifier, MapIdentifier, MessageIdentifier, Protocol, ProtocolFactory,
    SetIdentifier,
};
use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::{self, GeneralPurpose, STANDARD};
use base64::engine::DecodePaddingMode;
use thriftwire_core::{MessageType, ProtocolError, ProtocolResult, TType};
use thriftwire_transport::Transport;
use tracing::debug;

/// Accepts base64 with or without trailing padding
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

fn opener(kind: ContextKind) -> u8 {
    match kind {
        ContextKind::List => b'[',
        ContextKind::Object => b'{',
    }
}

fn closer(kind: ContextKind) -> u8 {
    match kind {
        ContextKind::List => b']',
        ContextKind::Object => b'}',
    }
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes that end a bare literal
fn is_delimiter(byte: u8) -> bool {
    is_whitespace(byte) || matches!(byte, b',' | b':' | b'[' | b']' | b'{' | b'}' | b'"')
}

/// Simple JSON encoder/decoder over a transport
///
/// Writing and reading keep separate context stacks, so one instance can
/// serve both directions of a duplex transport.
#[derive(Debug)]
pub struct SimpleJsonProtocol<T: Transport> {
    transport: T,
    write_ctx: ContextStack,
    read_ctx: ContextStack,
    /// One byte of read lookahead
    lookahead: Option<u8>,
    /// `read_has_more` already consumed the comma before the next element
    separator_consumed: bool,
    scratch: Vec<u8>,
}

impl<T: Transport> SimpleJsonProtocol<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            write_ctx: ContextStack::new(),
            read_ctx: ContextStack::new(),
            lookahead: None,
            separator_consumed: false,
            scratch: Vec::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the transport
    ///
    /// Reading through it while a lookahead byte is held skips that byte.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Containers currently open on the write side
    pub fn write_depth(&self) -> usize {
        self.write_ctx.depth()
    }

    /// Containers currently open on the read side
    pub fn read_depth(&self) -> usize {
        self.read_ctx.depth()
    }

    /// Skip over one complete value, however deeply nested
    ///
    /// Used to step past struct fields the reader does not recognize.
    pub fn skip_value(&mut self) -> ProtocolResult<()> {
        if self.read_separator()? {
            return self.read_quoted_literal("skipped key");
        }
        let mut closers: Vec<u8> = Vec::new();
        loop {
            match self.peek_token("skipped value")? {
                b'"' => self.read_quoted_literal("skipped string")?,
                open @ (b'[' | b'{') => {
                    self.lookahead = None;
                    closers.push(if open == b'[' { b']' } else { b'}' });
                }
                close @ (b']' | b'}') => {
                    if closers.pop() != Some(close) {
                        return Err(self.format_error(format!(
                            "unbalanced '{}' in skipped value",
                            char::from(close)
                        )));
                    }
                    self.lookahead = None;
                }
                b',' | b':' if !closers.is_empty() => self.lookahead = None,
                _ => {
                    self.read_bare_token("skipped literal")?;
                }
            }
            if closers.is_empty() {
                return Ok(());
            }
        }
    }

    // Writing

    fn write_raw(&mut self, bytes: &[u8]) -> ProtocolResult<()> {
        self.transport.write_all(bytes)?;
        Ok(())
    }

    /// Emit the separator owed before the next token; returns whether that
    /// token is a key
    fn write_separator(&mut self) -> ProtocolResult<bool> {
        let is_key = self.write_ctx.is_key_position();
        match self.write_ctx.advance() {
            Separator::None => {}
            Separator::Comma => self.write_raw(b",")?,
            Separator::Colon => self.write_raw(b":")?,
        }
        Ok(is_key)
    }

    /// Write a bare literal, quoting it in key position
    fn write_literal(&mut self, text: &str) -> ProtocolResult<()> {
        if self.write_separator()? {
            self.write_raw(b"\"")?;
            self.write_raw(text.as_bytes())?;
            self.write_raw(b"\"")
        } else {
            self.write_raw(text.as_bytes())
        }
    }

    /// Write text that is always quoted and needs no escaping
    fn write_quoted(&mut self, text: &str) -> ProtocolResult<()> {
        self.write_separator()?;
        self.write_raw(b"\"")?;
        self.write_raw(text.as_bytes())?;
        self.write_raw(b"\"")
    }

    fn write_container_begin(&mut self, kind: ContextKind) -> ProtocolResult<()> {
        if self.write_ctx.is_key_position() {
            let err = ProtocolError::InvalidData(format!(
                "{kind:?} cannot be written in key position"
            ));
            debug!(error = %err, "rejected simple json write");
            return Err(err);
        }
        self.write_separator()?;
        self.write_raw(&[opener(kind)])?;
        self.write_ctx.push(kind);
        Ok(())
    }

    fn write_container_end(&mut self, kind: ContextKind) -> ProtocolResult<()> {
        self.write_ctx.pop(kind)?;
        self.write_raw(&[closer(kind)])
    }

    // Reading

    fn note(&self, err: ProtocolError) -> ProtocolError {
        debug!(depth = self.read_ctx.depth(), error = %err, "malformed simple json");
        err
    }

    fn format_error(&self, message: String) -> ProtocolError {
        self.note(ProtocolError::InvalidData(message))
    }

    fn truncated(&self, context: &str) -> ProtocolError {
        self.note(ProtocolError::Truncated(format!(
            "stream ended while reading {context}"
        )))
    }

    /// Make sure a lookahead byte is loaded; `None` at end of stream
    fn fill_lookahead(&mut self) -> ProtocolResult<Option<u8>> {
        if self.lookahead.is_none() {
            let mut byte = [0u8; 1];
            match self.transport.read_all(&mut byte) {
                Ok(_) => self.lookahead = Some(byte[0]),
                Err(err) if err.is_eof() => return Ok(None),
                Err(err) => return Err(err.into()),
            }
        }
        Ok(self.lookahead)
    }

    fn next_byte(&mut self, context: &str) -> ProtocolResult<u8> {
        if let Some(byte) = self.lookahead.take() {
            return Ok(byte);
        }
        let mut byte = [0u8; 1];
        match self.transport.read_all(&mut byte) {
            Ok(_) => Ok(byte[0]),
            Err(err) => {
                let context = format!("stream ended while reading {context}");
                Err(self.note(ProtocolError::from_transport(err, &context)))
            }
        }
    }

    /// Skip whitespace and return the next byte without consuming it
    fn skip_whitespace(&mut self) -> ProtocolResult<Option<u8>> {
        loop {
            match self.fill_lookahead()? {
                Some(byte) if is_whitespace(byte) => self.lookahead = None,
                other => return Ok(other),
            }
        }
    }

    fn peek_token(&mut self, context: &str) -> ProtocolResult<u8> {
        match self.skip_whitespace()? {
            Some(byte) => Ok(byte),
            None => Err(self.truncated(context)),
        }
    }

    fn expect_byte(&mut self, expected: u8, context: &str) -> ProtocolResult<()> {
        let found = self.peek_token(context)?;
        if found != expected {
            return Err(self.format_error(format!(
                "expected '{}' in {context}, found '{}'",
                char::from(expected),
                found.escape_ascii()
            )));
        }
        self.lookahead = None;
        Ok(())
    }

    /// Consume the separator owed before the next token; returns whether
    /// that token is a key
    fn read_separator(&mut self) -> ProtocolResult<bool> {
        let is_key = self.read_ctx.is_key_position();
        let consumed = std::mem::take(&mut self.separator_consumed);
        match self.read_ctx.advance() {
            Separator::None => {}
            Separator::Comma if consumed => {}
            Separator::Comma => self.expect_byte(b',', "element separator")?,
            Separator::Colon => self.expect_byte(b':', "key separator")?,
        }
        Ok(is_key)
    }

    /// Read a quoted literal, quotes and escapes included, into `scratch`
    fn read_quoted_literal(&mut self, context: &str) -> ProtocolResult<()> {
        self.expect_byte(b'"', context)?;
        self.scratch.clear();
        self.scratch.push(b'"');
        let mut escaped = false;
        loop {
            let byte = self.next_byte(context)?;
            self.scratch.push(byte);
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                return Ok(());
            }
        }
    }

    fn read_quoted_string(&mut self, context: &str) -> ProtocolResult<String> {
        self.read_quoted_literal(context)?;
        serde_json::from_slice::<String>(&self.scratch).map_err(|e| self.note(e.into()))
    }

    /// Read an unquoted literal such as a number or `true`
    fn read_bare_token(&mut self, context: &str) -> ProtocolResult<String> {
        let first = self.peek_token(context)?;
        let mut token = String::new();
        while let Some(byte) = self.fill_lookahead()? {
            if is_delimiter(byte) {
                break;
            }
            token.push(char::from(byte));
            self.lookahead = None;
        }
        if token.is_empty() {
            return Err(self.format_error(format!(
                "expected {context}, found '{}'",
                first.escape_ascii()
            )));
        }
        Ok(token)
    }

    /// Read a scalar literal, unwrapping the quotes in key position
    fn read_scalar_token(&mut self, context: &str) -> ProtocolResult<String> {
        if self.read_separator()? {
            self.read_quoted_string(context)
        } else {
            self.read_bare_token(context)
        }
    }

    fn read_integer<N: TryFrom<i64>>(&mut self, context: &str) -> ProtocolResult<N> {
        let token = self.read_scalar_token(context)?;
        numeric::parse_integer::<N>(&token).map_err(|e| self.note(e))
    }

    fn read_container_begin(&mut self, kind: ContextKind) -> ProtocolResult<()> {
        if self.read_ctx.is_key_position() {
            return Err(self.format_error(format!("{kind:?} found in key position")));
        }
        self.read_separator()?;
        self.expect_byte(opener(kind), "container start")?;
        self.read_ctx.push(kind);
        Ok(())
    }

    fn read_container_end(&mut self, kind: ContextKind) -> ProtocolResult<()> {
        if !self.read_ctx.is_first() && self.peek_token("container end")? == b',' {
            self.lookahead = None;
        }
        self.expect_byte(closer(kind), "container end")?;
        self.read_ctx.pop(kind).map_err(|e| self.note(e))?;
        self.separator_consumed = false;
        Ok(())
    }
}

impl<T: Transport> Protocol for SimpleJsonProtocol<T> {
    fn write_message_begin(
        &mut self,
        name: &str,
        message_type: MessageType,
        sequence_number: i32,
    ) -> ProtocolResult<()> {
        self.write_container_begin(ContextKind::List)?;
        self.write_string(name)?;
        self.write_i32(i32::from(u8::from(message_type)))?;
        self.write_i32(sequence_number)
    }

    fn write_message_end(&mut self) -> ProtocolResult<()> {
        self.write_container_end(ContextKind::List)
    }

    fn write_struct_begin(&mut self, _name: &str) -> ProtocolResult<()> {
        self.write_container_begin(ContextKind::Object)
    }

    fn write_struct_end(&mut self) -> ProtocolResult<()> {
        self.write_container_end(ContextKind::Object)
    }

    fn write_field_begin(
        &mut self,
        name: &str,
        _field_type: TType,
        _id: i16,
    ) -> ProtocolResult<()> {
        if !self.write_ctx.is_key_position() {
            let err = ProtocolError::InvalidData(format!(
                "field {name:?} written outside a struct key position"
            ));
            debug!(error = %err, "rejected simple json write");
            return Err(err);
        }
        self.write_string(name)
    }

    fn write_field_end(&mut self) -> ProtocolResult<()> {
        Ok(())
    }

    fn write_field_stop(&mut self) -> ProtocolResult<()> {
        Ok(())
    }

    fn write_map_begin(
        &mut self,
        _key_type: TType,
        _value_type: TType,
        _size: usize,
    ) -> ProtocolResult<()> {
        self.write_container_begin(ContextKind::Object)
    }

    fn write_map_end(&mut self) -> ProtocolResult<()> {
        self.write_container_end(ContextKind::Object)
    }

    fn write_list_begin(&mut self, _element_type: TType, _size: usize) -> ProtocolResult<()> {
        self.write_container_begin(ContextKind::List)
    }

    fn write_list_end(&mut self) -> ProtocolResult<()> {
        self.write_container_end(ContextKind::List)
    }

    fn write_set_begin(&mut self, _element_type: TType, _size: usize) -> ProtocolResult<()> {
        self.write_container_begin(ContextKind::List)
    }

    fn write_set_end(&mut self) -> ProtocolResult<()> {
        self.write_container_end(ContextKind::List)
    }

    fn write_bool(&mut self, value: bool) -> ProtocolResult<()> {
        self.write_literal(if value { "true" } else { "false" })
    }

    fn write_byte(&mut self, value: i8) -> ProtocolResult<()> {
        self.write_literal(&value.to_string())
    }

    fn write_i16(&mut self, value: i16) -> ProtocolResult<()> {
        self.write_literal(&value.to_string())
    }

    fn write_i32(&mut self, value: i32) -> ProtocolResult<()> {
        self.write_literal(&value.to_string())
    }

    fn write_i64(&mut self, value: i64) -> ProtocolResult<()> {
        self.write_literal(&value.to_string())
    }

    fn write_double(&mut self, value: f64) -> ProtocolResult<()> {
        let value = Numeric::from_f64(value);
        match value.sentinel() {
            Some(word) => self.write_quoted(word),
            None => self.write_literal(&value.canonical_text()),
        }
    }

    fn write_string(&mut self, value: &str) -> ProtocolResult<()> {
        self.write_separator()?;
        self.scratch.clear();
        serde_json::to_writer(&mut self.scratch, value)?;
        self.transport.write_all(&self.scratch)?;
        Ok(())
    }

    fn write_binary(&mut self, value: &[u8]) -> ProtocolResult<()> {
        let encoded = STANDARD.encode(value);
        self.write_quoted(&encoded)
    }

    fn flush(&mut self) -> ProtocolResult<()> {
        self.transport.flush()?;
        Ok(())
    }

    fn read_message_begin(&mut self) -> ProtocolResult<MessageIdentifier> {
        self.read_container_begin(ContextKind::List)?;
        let name = self.read_string()?;
        let code: u8 = self.read_integer("message type")?;
        let message_type = MessageType::try_from(code).map_err(|e| self.note(e))?;
        let sequence_number = self.read_i32()?;
        Ok(MessageIdentifier {
            name,
            message_type,
            sequence_number,
        })
    }

    fn read_message_end(&mut self) -> ProtocolResult<()> {
        self.read_container_end(ContextKind::List)
    }

    fn read_struct_begin(&mut self) -> ProtocolResult<Option<String>> {
        self.read_container_begin(ContextKind::Object)?;
        Ok(None)
    }

    fn read_struct_end(&mut self) -> ProtocolResult<()> {
        self.read_container_end(ContextKind::Object)
    }

    fn read_field_begin(&mut self) -> ProtocolResult<FieldIdentifier> {
        if !self.read_ctx.is_key_position() {
            return Err(self.format_error("field read outside a struct key position".into()));
        }
        if !self.read_has_more()? {
            return Ok(FieldIdentifier::stop());
        }
        let name = self.read_string()?;
        Ok(FieldIdentifier {
            name: Some(name),
            field_type: TType::Void,
            id: None,
        })
    }

    fn read_field_end(&mut self) -> ProtocolResult<()> {
        Ok(())
    }

    fn read_map_begin(&mut self) -> ProtocolResult<MapIdentifier> {
        self.read_container_begin(ContextKind::Object)?;
        Ok(MapIdentifier::new(TType::Void, TType::Void, None))
    }

    fn read_map_end(&mut self) -> ProtocolResult<()> {
        self.read_container_end(ContextKind::Object)
    }

    fn read_list_begin(&mut self) -> ProtocolResult<ListIdentifier> {
        self.read_container_begin(ContextKind::List)?;
        Ok(ListIdentifier::new(TType::Void, None))
    }

    fn read_list_end(&mut self) -> ProtocolResult<()> {
        self.read_container_end(ContextKind::List)
    }

    fn read_set_begin(&mut self) -> ProtocolResult<SetIdentifier> {
        self.read_container_begin(ContextKind::List)?;
        Ok(SetIdentifier::new(TType::Void, None))
    }

    fn read_set_end(&mut self) -> ProtocolResult<()> {
        self.read_container_end(ContextKind::List)
    }

    fn read_bool(&mut self) -> ProtocolResult<bool> {
        match self.read_scalar_token("bool")?.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(self.format_error(format!("expected true or false, found {other:?}"))),
        }
    }

    fn read_byte(&mut self) -> ProtocolResult<i8> {
        self.read_integer("byte")
    }

    fn read_i16(&mut self) -> ProtocolResult<i16> {
        self.read_integer("i16")
    }

    fn read_i32(&mut self) -> ProtocolResult<i32> {
        self.read_integer("i32")
    }

    fn read_i64(&mut self) -> ProtocolResult<i64> {
        self.read_integer("i64")
    }

    fn read_double(&mut self) -> ProtocolResult<f64> {
        let parsed = if self.read_separator()? {
            // Keys are quoted whether or not the double is finite
            let text = self.read_quoted_string("double key")?;
            match Numeric::from_sentinel(&text) {
                Some(sentinel) => Ok(sentinel),
                None => Numeric::parse(&text, false),
            }
        } else if self.peek_token("double")? == b'"' {
            let text = self.read_quoted_string("double")?;
            Numeric::parse(&text, true)
        } else {
            let token = self.read_bare_token("double")?;
            Numeric::parse(&token, false)
        };
        parsed.map(f64::from).map_err(|e| self.note(e))
    }

    fn read_string(&mut self) -> ProtocolResult<String> {
        self.read_separator()?;
        self.read_quoted_string("string")
    }

    fn read_binary(&mut self) -> ProtocolResult<Vec<u8>> {
        self.read_separator()?;
        let encoded = self.read_quoted_string("binary")?;
        LENIENT_BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| self.format_error(format!("bad base64: {e}")))
    }

    fn read_has_more(&mut self) -> ProtocolResult<bool> {
        let Some(ctx) = self.read_ctx.current().copied() else {
            return Ok(self.skip_whitespace()?.is_some());
        };
        if ctx.kind == ContextKind::Object && !ctx.expecting_key {
            return Ok(true);
        }
        let close = closer(ctx.kind);
        let next = self.peek_token("container")?;
        if next == close {
            return Ok(false);
        }
        if ctx.first || self.separator_consumed {
            return Ok(true);
        }
        if next != b',' {
            return Err(self.format_error(format!(
                "expected ',' or '{}', found '{}'",
                char::from(close),
                next.escape_ascii()
            )));
        }
        self.lookahead = None;
        // A trailing comma before the closer ends the container
        if self.peek_token("container")? == close {
            return Ok(false);
        }
        self.separator_consumed = true;
        Ok(true)
    }
}

/// Factory producing [`SimpleJsonProtocol`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleJsonProtocolFactory;

impl SimpleJsonProtocolFactory {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Transport> ProtocolFactory<T> for SimpleJsonProtocolFactory {
    type Output = SimpleJsonProtocol<T>;

    fn get_protocol(&self, transport: T) -> Self::Output {
        SimpleJsonProtocol::new(transport)
    }
}
