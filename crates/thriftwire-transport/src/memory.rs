//! In-memory transport

use crate::transport::Transport;
use thriftwire_core::{TransportError, TransportResult, TransportState};
use tracing::trace;

/// Transport backed by a growable byte vector
///
/// Writes append to the end, reads consume from the front. A new buffer is
/// already open; `open` on an open buffer is a no-op.
#[derive(Debug, Clone)]
pub struct MemoryBuffer {
    data: Vec<u8>,
    read_pos: usize,
    state: TransportState,
}

impl MemoryBuffer {
    /// Create an empty, open buffer
    pub fn new() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// Create an open buffer whose readable content is `data`
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            read_pos: 0,
            state: TransportState::Open,
        }
    }

    /// Unread bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[self.read_pos..]
    }

    /// Unread bytes as text, replacing invalid UTF-8
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// Number of unread bytes
    pub fn len(&self) -> usize {
        self.data.len() - self.read_pos
    }

    /// Check whether all written bytes have been read
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard all content, read or unread
    pub fn reset(&mut self) {
        self.data.clear();
        self.read_pos = 0;
    }

    /// Current connection state
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Consume the buffer, returning the unread bytes
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.data.drain(..self.read_pos);
        self.data
    }

    /// Move to `target`; staying in the current state is a no-op
    fn transition(&mut self, target: TransportState) {
        if self.state.can_transition_to(target) {
            trace!(from = %self.state, to = %target, "memory buffer state change");
            self.state = target;
        }
    }

    fn ensure_open(&self) -> TransportResult<()> {
        if self.state.is_open() {
            Ok(())
        } else {
            Err(TransportError::NotOpen)
        }
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MemoryBuffer {
    fn open(&mut self) -> TransportResult<()> {
        self.transition(TransportState::Open);
        Ok(())
    }

    fn close(&mut self) -> TransportResult<()> {
        self.transition(TransportState::Closed);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.state.is_open()
    }

    fn read(&mut self, buf: &mut [u8]) -> TransportResult<usize> {
        self.ensure_open()?;
        if buf.is_empty() {
            return Ok(0);
        }
        let available = self.as_bytes();
        if available.is_empty() {
            return Err(TransportError::EndOfFile("memory buffer drained".into()));
        }
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.read_pos += n;

        // Reclaim space once everything written has been consumed
        if self.read_pos == self.data.len() {
            self.reset();
        }
        Ok(n)
    }

    fn write(&mut self, buf: &[u8]) -> TransportResult<usize> {
        self.ensure_open()?;
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> TransportResult<()> {
        self.ensure_open()
    }

    fn peek(&self) -> bool {
        self.state.is_open() && !self.is_empty()
    }
}
