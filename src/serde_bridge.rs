//! Serde support: a stream serializes as its whole buffer.
//!
//! Human-readable formats get a base64 string, binary formats get raw
//! bytes. Deserializing gives a fresh stream with the cursor at the start,
//! so position and status are not carried across.

use alloc::{string::String, vec::Vec};
use core::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ByteStream;

impl Serialize for ByteStream {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let encoded: String = STANDARD.encode(self.as_bytes());
            serializer.serialize_str(&encoded)
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

struct StreamVisitor;

impl<'de> Visitor<'de> for StreamVisitor {
    type Value = ByteStream;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base64 string or a byte sequence")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ByteStream, E> {
        STANDARD
            .decode(v)
            .map(ByteStream::from)
            .map_err(|e| E::custom(format_args!("invalid base64: {e}")))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<ByteStream, E> {
        Ok(ByteStream::from(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<ByteStream, E> {
        Ok(ByteStream::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ByteStream, A::Error> {
        let mut buf = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            buf.push(byte);
        }
        Ok(ByteStream::from(buf))
    }
}

impl<'de> Deserialize<'de> for ByteStream {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(StreamVisitor)
        } else {
            deserializer.deserialize_byte_buf(StreamVisitor)
        }
    }
}
