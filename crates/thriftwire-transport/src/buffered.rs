//! Buffered transport decorator

use crate::transport::{Transport, TransportFactory};
use thriftwire_core::{DEFAULT_BUFFER_SIZE, TransportError, TransportResult, WireConfig};
use tracing::trace;

/// Fixed-capacity byte arena with two cursors
///
/// Invariant: `pos <= limit <= data.len()`.
///
/// As a read buffer, `pos..limit` holds the bytes not yet handed to the
/// caller. As a write buffer, `limit` stays at capacity and `0..pos` holds
/// the bytes not yet drained to the wrapped transport.
#[derive(Debug)]
struct Buffer {
    data: Box<[u8]>,
    pos: usize,
    limit: usize,
}

impl Buffer {
    fn for_reading(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            pos: 0,
            limit: 0,
        }
    }

    fn for_writing(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            pos: 0,
            limit: capacity,
        }
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn is_exhausted(&self) -> bool {
        self.pos == self.limit
    }

    fn remaining(&self) -> usize {
        self.limit - self.pos
    }
}

/// Decorates a transport with a read-ahead buffer and a write-coalescing
/// buffer, both of the same fixed capacity
///
/// Short reads are passed through: a `read` served from the buffer returns at
/// most what is left in it, and a `read` on an exhausted buffer issues exactly
/// one read on the wrapped transport.
///
/// A `write` larger than the free space drains the pending bytes first and
/// then copies as much as fits, so a single call accepts at most one
/// buffer-sized chunk. Use [`Transport::write_all`] to push a larger payload.
///
/// A capacity of 0 passes reads and writes straight through.
#[derive(Debug)]
pub struct BufferedTransport<T: Transport> {
    inner: T,
    rbuf: Buffer,
    wbuf: Buffer,
}

impl<T: Transport> BufferedTransport<T> {
    /// Wrap `inner` with buffers of `buffer_size` bytes each
    pub fn new(inner: T, buffer_size: usize) -> Self {
        Self {
            inner,
            rbuf: Buffer::for_reading(buffer_size),
            wbuf: Buffer::for_writing(buffer_size),
        }
    }

    /// Wrap `inner` using the buffer size from `config`
    pub fn with_config(inner: T, config: &WireConfig) -> Self {
        Self::new(inner, config.buffer_size)
    }

    /// Capacity of each buffer in bytes
    pub fn capacity(&self) -> usize {
        self.rbuf.capacity()
    }

    /// Bytes read ahead but not yet returned to the caller
    pub fn buffered_read_len(&self) -> usize {
        self.rbuf.remaining()
    }

    /// Bytes written but not yet drained to the wrapped transport
    pub fn pending_write_len(&self) -> usize {
        self.wbuf.pos
    }

    /// Shared access to the wrapped transport
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutable access to the wrapped transport
    ///
    /// Reading or writing through it bypasses the buffers.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwrap the transport, discarding any buffered bytes
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Write every pending byte to the wrapped transport without flushing it
    ///
    /// On failure the bytes that did reach the wrapped transport are dropped
    /// from the buffer, so `pending_write_len` tells how much is still owed.
    fn drain_write_buffer(&mut self) -> TransportResult<()> {
        let mut start = 0;
        while start < self.wbuf.pos {
            let result = match self.inner.write(&self.wbuf.data[start..self.wbuf.pos]) {
                Ok(0) => Err(TransportError::Unknown(format!(
                    "wrapped transport accepted no bytes with {} pending",
                    self.wbuf.pos - start
                ))),
                other => other,
            };
            match result {
                Ok(n) => start += n,
                Err(err) => {
                    self.wbuf.data.copy_within(start..self.wbuf.pos, 0);
                    self.wbuf.pos -= start;
                    return Err(err);
                }
            }
        }
        trace!(bytes = start, "drained write buffer");
        self.wbuf.pos = 0;
        Ok(())
    }
}

impl<T: Transport> Transport for BufferedTransport<T> {
    fn open(&mut self) -> TransportResult<()> {
        self.inner.open()
    }

    fn close(&mut self) -> TransportResult<()> {
        self.inner.close()
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn read(&mut self, buf: &mut [u8]) -> TransportResult<usize> {
        if self.rbuf.capacity() == 0 {
            return self.inner.read(buf);
        }
        if buf.is_empty() {
            return Ok(0);
        }
        if self.rbuf.is_exhausted() {
            let n = self.inner.read(&mut self.rbuf.data)?;
            self.rbuf.pos = 0;
            self.rbuf.limit = n;
            trace!(bytes = n, "refilled read buffer");
        }
        let n = self.rbuf.remaining().min(buf.len());
        buf[..n].copy_from_slice(&self.rbuf.data[self.rbuf.pos..self.rbuf.pos + n]);
        self.rbuf.pos += n;
        Ok(n)
    }

    fn write(&mut self, buf: &[u8]) -> TransportResult<usize> {
        if self.wbuf.capacity() == 0 {
            return self.inner.write(buf);
        }
        if self.wbuf.pos + buf.len() > self.wbuf.limit {
            self.drain_write_buffer()?;
        }
        let n = (self.wbuf.limit - self.wbuf.pos).min(buf.len());
        self.wbuf.data[self.wbuf.pos..self.wbuf.pos + n].copy_from_slice(&buf[..n]);
        self.wbuf.pos += n;
        Ok(n)
    }

    fn flush(&mut self) -> TransportResult<()> {
        self.drain_write_buffer()?;
        self.inner.flush()
    }

    fn peek(&self) -> bool {
        !self.rbuf.is_exhausted() || self.inner.peek()
    }
}

/// Factory producing [`BufferedTransport`]s of a fixed buffer size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferedTransportFactory {
    buffer_size: usize,
}

impl BufferedTransportFactory {
    /// Create a factory for buffers of `buffer_size` bytes
    pub fn new(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    /// Create a factory using the buffer size from `config`
    pub fn from_config(config: &WireConfig) -> Self {
        Self::new(config.buffer_size)
    }

    /// Buffer size given to each transport
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl Default for BufferedTransportFactory {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

impl<T: Transport> TransportFactory<T> for BufferedTransportFactory {
    type Output = BufferedTransport<T>;

    fn get_transport(&self, inner: T) -> Self::Output {
        BufferedTransport::new(inner, self.buffer_size)
    }
}
