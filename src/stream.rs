//! The growable byte buffer with a read cursor.

use alloc::vec::Vec;
use core::fmt;

use zerocopy::IntoBytes;

use crate::{Decode, Encode, FixedWidth, Result, StreamError};

/// Longest string or prefixed byte run a one-byte length can describe.
pub const MAX_PREFIXED_LEN: usize = u8::MAX as usize;

/// Whether every read so far has been satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// No read or extraction has underflowed.
    Ok,
    /// Some read or extraction underflowed. This state is permanent.
    Failed,
}

/// A byte buffer that is appended to by writes and consumed by reads.
///
/// Writes always append at the end of the buffer. Reads and extractions
/// consume from the cursor, which only moves forward. Consumed bytes stay in
/// the buffer, so the [`Display`](fmt::Display) hex dump always covers
/// everything ever written.
///
/// A read that asks for more bytes than remain takes what is there and
/// moves the stream to [`Status::Failed`]. Once failed, every further read
/// and extraction is a no-op, so a whole chain of reads can be checked once
/// at the end.
///
/// # Example
///
/// ```
/// use bytestream::ByteStream;
///
/// let mut st = ByteStream::new();
/// st.write(&42u32).write("foo");
/// assert_eq!(st.to_string(), "2a00000003666f6f");
///
/// let mut id = 0u32;
/// let mut name = String::new();
/// st.read_into(&mut id).read_into(&mut name);
/// assert!(st.is_ok());
/// assert_eq!((id, name.as_str()), (42, "foo"));
///
/// let mut extra = 0u8;
/// st.read_into(&mut extra);
/// assert!(st.is_failed());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteStream {
    buf: Vec<u8>,
    cursor: usize,
    error: Option<StreamError>,
}

impl ByteStream {
    /// Create an empty stream.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream that can take `capacity` bytes before growing.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    // --- status ---

    /// `true` while no read or extraction has underflowed.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// `true` once any read or extraction has underflowed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Current status.
    #[inline]
    pub fn status(&self) -> Status {
        match self.error {
            None => Status::Ok,
            Some(_) => Status::Failed,
        }
    }

    /// The failure that moved the stream out of the ok state, if any.
    #[inline]
    pub fn error(&self) -> Option<StreamError> {
        self.error
    }

    /// Turn the status into a `Result`, for ending a read chain with `?`.
    ///
    /// ```
    /// use bytestream::{ByteStream, StreamError};
    ///
    /// fn parse(st: &mut ByteStream) -> Result<(u8, u16), StreamError> {
    ///     let mut kind = 0u8;
    ///     let mut id = 0u16;
    ///     st.read_into(&mut kind).read_into(&mut id).check()?;
    ///     Ok((kind, id))
    /// }
    ///
    /// let mut st = ByteStream::from(vec![1, 0x2a]);
    /// assert_eq!(
    ///     parse(&mut st),
    ///     Err(StreamError::Underflow { needed: 2, available: 1 })
    /// );
    /// ```
    #[inline]
    pub fn check(&self) -> Result<()> {
        match self.error {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    /// Record a failure. The first one sticks.
    pub(crate) fn fail(&mut self, error: StreamError) {
        if self.error.is_none() {
            log::debug!("byte stream failed at position {}: {}", self.cursor, error);
            self.error = Some(error);
        }
    }

    // --- buffer and cursor ---

    /// Total bytes in the buffer, consumed or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// `true` if nothing was ever written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Index of the next byte a read will consume.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bytes left after the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.cursor
    }

    /// The whole buffer, including bytes already consumed.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The bytes after the cursor.
    #[inline]
    pub fn unread(&self) -> &[u8] {
        &self.buf[self.cursor..]
    }

    /// Consume the stream and return its whole buffer.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Advance the cursor by up to `n` bytes and return the bytes passed.
    ///
    /// Returns nothing once failed. Asking for more than remains takes the
    /// rest and fails the stream.
    fn consume(&mut self, n: usize) -> &[u8] {
        if self.is_failed() {
            return &[];
        }

        let available = self.remaining();
        if n > available {
            self.fail(StreamError::Underflow {
                needed: n,
                available,
            });
        }

        let start = self.cursor;
        self.cursor += n.min(available);
        &self.buf[start..self.cursor]
    }

    // --- writing ---

    /// Append a value in wire format.
    ///
    /// Integers and floats are written little-endian, strings with a
    /// one-byte length prefix. Writes never fail and ignore the status.
    #[inline]
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.encode(self);
        self
    }

    /// Append raw bytes verbatim, with no length prefix.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append a string as a one-byte length followed by its bytes.
    ///
    /// The length byte is the string's length truncated to 8 bits, so a
    /// string longer than [`MAX_PREFIXED_LEN`] writes a prefix that does
    /// not match its body. Use [`try_write_str`](Self::try_write_str) to
    /// reject such strings instead.
    #[inline]
    pub fn write_str(&mut self, s: &str) -> &mut Self {
        self.write_prefixed(s.as_bytes())
    }

    /// Append bytes with a one-byte length prefix, wrapping like
    /// [`write_str`](Self::write_str).
    pub fn write_prefixed(&mut self, bytes: &[u8]) -> &mut Self {
        if bytes.len() > MAX_PREFIXED_LEN {
            log::warn!(
                "length prefix wraps: {} bytes written with prefix {}",
                bytes.len(),
                bytes.len() as u8
            );
        }
        self.buf.push(bytes.len() as u8);
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Like [`write_str`](Self::write_str), but refuses strings whose
    /// length does not fit the prefix. Nothing is written on error.
    #[inline]
    pub fn try_write_str(&mut self, s: &str) -> Result<&mut Self> {
        self.try_write_prefixed(s.as_bytes())
    }

    /// Like [`write_prefixed`](Self::write_prefixed), but refuses inputs
    /// whose length does not fit the prefix. Nothing is written on error.
    pub fn try_write_prefixed(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        if bytes.len() > MAX_PREFIXED_LEN {
            return Err(StreamError::TooLong { len: bytes.len() });
        }
        Ok(self.write_prefixed(bytes))
    }

    #[inline]
    pub(crate) fn write_fixed<T: FixedWidth>(&mut self, value: T) {
        self.buf.extend_from_slice(value.to_wire().as_bytes());
    }

    // --- reading ---

    /// Decode the next value into `out`.
    ///
    /// Does nothing if the stream has failed. On underflow the bytes that
    /// were there are consumed, the stream fails, and `out` holds a partial
    /// value (zero-filled integers, truncated strings). Check the status
    /// after the chain rather than trusting `out`.
    #[inline]
    pub fn read_into<T: Decode + ?Sized>(&mut self, out: &mut T) -> &mut Self {
        T::decode(self, out);
        self
    }

    /// Decode the next value into a fresh `T::default()`.
    #[inline]
    pub fn read<T: Decode + Default>(&mut self) -> T {
        let mut value = T::default();
        self.read_into(&mut value);
        value
    }

    /// Read a one-byte length and then that many bytes, appending them to
    /// `out`.
    ///
    /// If the buffer runs out partway the bytes that were read stay in
    /// `out` and the stream fails.
    pub fn read_prefixed_into(&mut self, out: &mut Vec<u8>) -> &mut Self {
        let mut len = 0u8;
        self.read_into(&mut len);
        let bytes = self.consume(usize::from(len));
        out.extend_from_slice(bytes);
        self
    }

    #[inline]
    pub(crate) fn read_fixed<T: FixedWidth>(&mut self) -> T {
        T::from_partial(self.consume(T::SIZE))
    }

    // --- extraction ---

    /// Copy out up to `n` bytes from the cursor and advance past them.
    ///
    /// Fewer than `n` bytes remaining returns what there is and fails the
    /// stream. A failed stream returns an empty vector.
    pub fn extract(&mut self, n: usize) -> Vec<u8> {
        let bytes = self.consume(n);
        log::trace!("extracted {} of {} requested bytes", bytes.len(), n);
        bytes.to_vec()
    }

    /// Copy out every remaining byte. Never fails the stream.
    #[inline]
    pub fn extract_all(&mut self) -> Vec<u8> {
        self.extract(self.remaining())
    }

    /// Like [`extract`](Self::extract), but appends to `out`, keeping what
    /// it already holds.
    pub fn extract_into(&mut self, out: &mut Vec<u8>, n: usize) -> &mut Self {
        let bytes = self.consume(n);
        log::trace!("extracted {} of {} requested bytes", bytes.len(), n);
        out.extend_from_slice(bytes);
        self
    }

    /// Append every remaining byte to `out`. Never fails the stream.
    #[inline]
    pub fn extract_all_into(&mut self, out: &mut Vec<u8>) -> &mut Self {
        self.extract_into(out, self.remaining())
    }

    /// Advance the cursor past up to `n` bytes without copying them.
    ///
    /// Same underflow rule as [`extract`](Self::extract).
    #[inline]
    pub fn skip(&mut self, n: usize) -> &mut Self {
        self.consume(n);
        self
    }

    /// Exchange buffers, cursors and statuses with `other` without copying.
    #[inline]
    pub fn swap(&mut self, other: &mut ByteStream) {
        core::mem::swap(self, other);
    }

    /// Move the whole state out, leaving an empty ok stream behind.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> ByteStream {
        core::mem::take(self)
    }
}

impl From<Vec<u8>> for ByteStream {
    /// Wrap received bytes for reading, cursor at the start.
    #[inline]
    fn from(buf: Vec<u8>) -> Self {
        Self {
            buf,
            ..Self::default()
        }
    }
}

impl From<&[u8]> for ByteStream {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl From<ByteStream> for Vec<u8> {
    #[inline]
    fn from(stream: ByteStream) -> Self {
        stream.into_inner()
    }
}

impl Extend<u8> for ByteStream {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl<'a> Extend<&'a u8> for ByteStream {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

/// Lowercase hex of the entire buffer, two digits per byte, no separators.
impl fmt::LowerHex for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.buf {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Same as [`LowerHex`](fmt::LowerHex): the full-buffer hex dump.
impl fmt::Display for ByteStream {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStream")
            .field("len", &self.buf.len())
            .field("position", &self.cursor)
            .field("status", &self.status())
            .finish()
    }
}
