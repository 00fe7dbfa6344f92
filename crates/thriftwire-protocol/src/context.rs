//! Container nesting state for text protocols

use thriftwire_core::{ProtocolError, ProtocolResult};

/// Kind of bracket a context was opened with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// `[` ... `]`: lists, sets and message envelopes
    List,
    /// `{` ... `}`: maps and structs
    Object,
}

/// Punctuation that precedes the next token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    None,
    Comma,
    Colon,
}

/// State of one open container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub kind: ContextKind,
    /// No element (or key) has been produced yet
    pub first: bool,
    /// For objects: the next token is a key
    pub expecting_key: bool,
}

impl Context {
    fn new(kind: ContextKind) -> Self {
        Self {
            kind,
            first: true,
            expecting_key: kind == ContextKind::Object,
        }
    }
}

/// Stack of open containers
///
/// An empty stack is the top level, where values follow each other without
/// separators.
#[derive(Debug, Clone, Default)]
pub struct ContextStack {
    stack: Vec<Context>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open containers
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Innermost open container
    pub fn current(&self) -> Option<&Context> {
        self.stack.last()
    }

    /// Check whether the next token sits in a map or struct key position
    pub fn is_key_position(&self) -> bool {
        matches!(
            self.current(),
            Some(Context {
                kind: ContextKind::Object,
                expecting_key: true,
                ..
            })
        )
    }

    /// Check whether the innermost container has produced no element yet
    pub fn is_first(&self) -> bool {
        self.current().is_none_or(|ctx| ctx.first)
    }

    /// Account for the next token and return the punctuation preceding it
    pub fn advance(&mut self) -> Separator {
        let Some(ctx) = self.stack.last_mut() else {
            return Separator::None;
        };
        match ctx.kind {
            ContextKind::List => {
                if ctx.first {
                    ctx.first = false;
                    Separator::None
                } else {
                    Separator::Comma
                }
            }
            ContextKind::Object if ctx.expecting_key => {
                ctx.expecting_key = false;
                if ctx.first {
                    ctx.first = false;
                    Separator::None
                } else {
                    Separator::Comma
                }
            }
            ContextKind::Object => {
                ctx.expecting_key = true;
                Separator::Colon
            }
        }
    }

    /// Open a container
    pub fn push(&mut self, kind: ContextKind) {
        self.stack.push(Context::new(kind));
    }

    /// Close the innermost container, which must be of `kind`
    pub fn pop(&mut self, kind: ContextKind) -> ProtocolResult<Context> {
        let Some(ctx) = self.stack.last() else {
            return Err(ProtocolError::InvalidData(format!(
                "{kind:?} end without matching begin"
            )));
        };
        if ctx.kind != kind {
            return Err(ProtocolError::InvalidData(format!(
                "{kind:?} end does not match open {:?}",
                ctx.kind
            )));
        }
        if ctx.kind == ContextKind::Object && !ctx.expecting_key {
            return Err(ProtocolError::InvalidData(
                "object closed after a key without a value".into(),
            ));
        }
        self.stack
            .pop()
            .ok_or_else(|| ProtocolError::InvalidData("context stack underflow".into()))
    }
}
