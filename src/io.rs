//! `std::io` adapters.

use std::io;

use crate::ByteStream;

/// Appends raw bytes, the same as [`ByteStream::write_bytes`].
impl io::Write for ByteStream {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Drains up to `buf.len()` bytes from the cursor.
///
/// Short reads are normal for `io::Read`, so this never fails the stream.
/// A stream that has already failed reads as end of input.
impl io::Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.is_failed() {
            return Ok(0);
        }
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.unread()[..n]);
        self.skip(n);
        Ok(n)
    }
}
