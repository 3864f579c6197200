//! Fixed-capacity output buffer.

use crate::error::{Error, Result};
use std::io::Write;

/// Default buffer capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 256 * 1024;

/// Collects small writes and passes them to the inner writer in large blocks.
///
/// Unlike [`std::io::BufWriter`], a write that would not fit in an empty
/// buffer is refused with [`Error::WriteExceedsCapacity`] rather than being
/// passed through silently; callers that expect large payloads use
/// [`write_direct`](Self::write_direct).
#[derive(Debug)]
pub struct BufferedWriter<W: Write> {
    inner: W,
    buffer: Vec<u8>,
    capacity: usize,
}

impl<W: Write> BufferedWriter<W> {
    /// Wraps `inner` with the default capacity.
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, inner)
    }

    /// Wraps `inner` with room for `capacity` bytes.
    ///
    /// # Arguments
    ///
    /// * `capacity` - largest write [`write`](Self::write) will accept
    /// * `inner` - destination of flushed bytes
    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        Self {
            inner,
            buffer: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes accepted but not yet handed to the inner writer.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Buffers `bytes`, flushing first if they would fill the buffer.
    ///
    /// # Errors
    ///
    /// [`Error::WriteExceedsCapacity`] when `bytes` is at least as large as
    /// the buffer; nothing is written in that case.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() >= self.capacity {
            return Err(Error::WriteExceedsCapacity {
                len: bytes.len(),
                capacity: self.capacity,
            });
        }
        if self.buffer.len() + bytes.len() >= self.capacity {
            self.flush()?;
        }
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Flushes pending bytes, then writes `bytes` straight to the inner writer.
    pub fn write_direct(&mut self, bytes: &[u8]) -> Result<()> {
        self.flush()?;
        log::trace!("direct write of {} bytes", bytes.len());
        self.inner.write_all(bytes)?;
        Ok(())
    }

    /// Writes out everything buffered and flushes `inner`.
    pub fn flush(&mut self) -> Result<()> {
        if !self.buffer.is_empty() {
            log::trace!("flushing {} buffered bytes", self.buffer.len());
            self.inner.write_all(&self.buffer)?;
            self.buffer.clear();
        }
        self.inner.flush()?;
        Ok(())
    }

    /// The inner writer. Bytes still pending in the buffer are not visible through it.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Flushes and returns the inner writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.inner)
    }
}
