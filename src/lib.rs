//! A growable byte buffer that writes typed values in a portable wire
//! format and reads them back through a cursor.
//!
//! # Wire format
//!
//! - Integers: little-endian, two's complement, 1/2/4/8/16 bytes wide.
//! - Floats: their IEEE-754 bits, little-endian.
//! - Strings: one length byte, then that many raw bytes.
//! - Raw bytes: copied verbatim.
//!
//! Composite types are whatever sequence of writes their [`Encode`] impl
//! performs; the stream itself has no schema.
//!
//! # Example
//!
//! ```
//! use bytestream::ByteStream;
//!
//! let mut st = ByteStream::new();
//! st.write(&42u64).write(&-42i16).write("abcABC");
//! assert_eq!(st.to_string(), "2a00000000000000d6ff06616263414243");
//!
//! let id: u64 = st.read();
//! let delta: i16 = st.read();
//! let name: String = st.read();
//! assert!(st.is_ok());
//! assert_eq!((id, delta, name.as_str()), (42, -42, "abcABC"));
//! ```
//!
//! # Failure
//!
//! Reads never panic or return errors one by one. A read past the end
//! fails the stream permanently and every later read becomes a no-op, so a
//! parser checks [`ByteStream::is_ok`] (or [`ByteStream::check`]) once after
//! the whole sequence.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod codec;
mod error;
mod stream;
mod wire;

#[cfg(feature = "std")]
mod io;

#[cfg(feature = "serde")]
mod serde_bridge;

#[cfg(test)]
mod tests;

pub use codec::{Decode, Encode};
pub use error::{Result, StreamError};
pub use stream::{ByteStream, MAX_PREFIXED_LEN, Status};
pub use wire::FixedWidth;

#[cfg(feature = "derive")]
pub use bytestream_macros::{Decode, Encode};
