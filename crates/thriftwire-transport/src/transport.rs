//! Transport trait and factory

use thriftwire_core::{TransportError, TransportResult};

/// A duplex byte channel
///
/// Implementations may short-read and short-write: `read` and `write` report
/// how many bytes were actually moved and callers that need an exact count use
/// [`Transport::read_all`] / [`Transport::write_all`].
///
/// A transport is driven by one caller at a time. Operations other than
/// [`Transport::open`] and [`Transport::is_open`] are undefined on a closed
/// transport.
pub trait Transport {
    /// Establish the channel
    fn open(&mut self) -> TransportResult<()>;

    /// Release the channel and any underlying resource
    fn close(&mut self) -> TransportResult<()>;

    /// Check whether the channel is open
    fn is_open(&self) -> bool;

    /// Read at most `buf.len()` bytes
    ///
    /// Returns `Ok(0)` only when `buf` is empty. The end of the stream is
    /// reported as [`TransportError::EndOfFile`].
    fn read(&mut self, buf: &mut [u8]) -> TransportResult<usize>;

    /// Write bytes, returning how many were accepted
    fn write(&mut self, buf: &[u8]) -> TransportResult<usize>;

    /// Push any buffered bytes to the underlying sink
    fn flush(&mut self) -> TransportResult<()>;

    /// Check whether at least one byte can be read without blocking
    fn peek(&self) -> bool;

    /// Read exactly `buf.len()` bytes, looping over short reads
    fn read_all(&mut self, buf: &mut [u8]) -> TransportResult<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.read(&mut buf[filled..])?;
            if n == 0 {
                return Err(TransportError::EndOfFile(format!(
                    "read {} of {} bytes",
                    filled,
                    buf.len()
                )));
            }
            filled += n;
        }
        Ok(filled)
    }

    /// Write all of `buf`, looping over short writes
    fn write_all(&mut self, buf: &[u8]) -> TransportResult<()> {
        let mut written = 0;
        while written < buf.len() {
            let n = self.write(&buf[written..])?;
            if n == 0 {
                return Err(TransportError::Unknown(format!(
                    "write stalled after {} of {} bytes",
                    written,
                    buf.len()
                )));
            }
            written += n;
        }
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn open(&mut self) -> TransportResult<()> {
        (**self).open()
    }

    fn close(&mut self) -> TransportResult<()> {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn read(&mut self, buf: &mut [u8]) -> TransportResult<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> TransportResult<usize> {
        (**self).write(buf)
    }

    fn flush(&mut self) -> TransportResult<()> {
        (**self).flush()
    }

    fn peek(&self) -> bool {
        (**self).peek()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn open(&mut self) -> TransportResult<()> {
        (**self).open()
    }

    fn close(&mut self) -> TransportResult<()> {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn read(&mut self, buf: &mut [u8]) -> TransportResult<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> TransportResult<usize> {
        (**self).write(buf)
    }

    fn flush(&mut self) -> TransportResult<()> {
        (**self).flush()
    }

    fn peek(&self) -> bool {
        (**self).peek()
    }
}

/// Wraps transports of type `T` into another transport
pub trait TransportFactory<T: Transport> {
    /// The transport produced by this factory
    type Output: Transport;

    /// Wrap `inner`
    fn get_transport(&self, inner: T) -> Self::Output;
}
