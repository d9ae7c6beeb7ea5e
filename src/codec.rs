//! Typed write and read through a [`ByteStream`].

use alloc::{string::String, vec::Vec};

use crate::{ByteStream, FixedWidth};

/// Append a value to a stream in wire format.
///
/// Composite types implement this by encoding their fields in order, or
/// derive it with the `derive` feature.
///
/// # Example
///
/// ```
/// use bytestream::{ByteStream, Encode};
///
/// struct Foo {
///     id: i32,
///     name: String,
/// }
///
/// impl Encode for Foo {
///     fn encode(&self, stream: &mut ByteStream) {
///         stream.write(&self.id).write(&self.name);
///     }
/// }
///
/// let mut st = ByteStream::new();
/// st.write(&Foo { id: 13, name: "me too".into() });
/// assert_eq!(st.to_string(), "0d000000066d6520746f6f");
/// ```
pub trait Encode {
    /// Write `self` to the end of the stream.
    fn encode(&self, stream: &mut ByteStream);
}

/// Read a value from a stream into an existing place.
///
/// Decoding is in place so that a failed read can leave `out` as it was.
/// Implementations must not touch `out` when the stream has already failed.
pub trait Decode {
    /// Decode the next value at the stream's cursor into `out`.
    fn decode(stream: &mut ByteStream, out: &mut Self);
}

impl<T: FixedWidth> Encode for T {
    #[inline]
    fn encode(&self, stream: &mut ByteStream) {
        stream.write_fixed(*self);
    }
}

impl<T: FixedWidth> Decode for T {
    #[inline]
    fn decode(stream: &mut ByteStream, out: &mut Self) {
        if stream.is_ok() {
            *out = stream.read_fixed();
        }
    }
}

// bool travels as one byte, 0 or 1
impl Encode for bool {
    #[inline]
    fn encode(&self, stream: &mut ByteStream) {
        stream.write_fixed(*self as u8);
    }
}

impl Decode for bool {
    #[inline]
    fn decode(stream: &mut ByteStream, out: &mut Self) {
        if stream.is_ok() {
            *out = stream.read_fixed::<u8>() != 0;
        }
    }
}

impl Encode for str {
    #[inline]
    fn encode(&self, stream: &mut ByteStream) {
        stream.write_str(self);
    }
}

impl Encode for String {
    #[inline]
    fn encode(&self, stream: &mut ByteStream) {
        stream.write_str(self);
    }
}

/// Appends to `out`, like every string read.
///
/// The field is read as opaque bytes, so only an underflow can fail the
/// stream. Bytes that are not valid UTF-8, including a sequence cut short
/// by an underflow, are appended as U+FFFD. Use
/// [`ByteStream::read_prefixed_into`] to get the bytes unchanged.
impl Decode for String {
    fn decode(stream: &mut ByteStream, out: &mut Self) {
        if stream.is_failed() {
            return;
        }

        let mut raw = Vec::new();
        stream.read_prefixed_into(&mut raw);
        out.push_str(&String::from_utf8_lossy(&raw));
    }
}
