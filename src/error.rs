//! Error types for stream operations.

/// The reason a [`ByteStream`](crate::ByteStream) left the ok state.
///
/// Only the first failure is kept; later failures on an already failed
/// stream do not overwrite it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// A read or extraction requested more bytes than remained.
    Underflow {
        /// Bytes requested.
        needed: usize,
        /// Bytes left after the cursor.
        available: usize,
    },

    /// A length-prefixed field is longer than a one-byte prefix can describe.
    TooLong {
        /// Length of the rejected input.
        len: usize,
    },
}

impl core::fmt::Display for StreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StreamError::Underflow { needed, available } => {
                write!(
                    f,
                    "stream underflow: needed {} bytes, only {} available",
                    needed, available
                )
            }
            StreamError::TooLong { len } => {
                write!(
                    f,
                    "length {} does not fit a one-byte prefix (max {})",
                    len,
                    u8::MAX
                )
            }
        }
    }
}

// Rust 1.81+
impl core::error::Error for StreamError {}

/// Result type for stream operations.
pub type Result<T> = core::result::Result<T, StreamError>;
