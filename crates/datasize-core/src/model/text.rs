//! Text codec entry points used by configuration and serialisation layers.
//!
//! `ByteSize` serialises as its canonical string (`"512MB"`) and deserialises
//! from either a size string or a bare unsigned integer byte count, so it can
//! be used directly as a field in config structs.

use super::size::ByteSize;
use crate::parser::{self, ParseError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl ByteSize {
    /// Canonical text as UTF-8 bytes. Never fails.
    pub fn marshal_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Parse `text` into `self`.
    ///
    /// `self` is always overwritten: with the parsed value on success, or
    /// with the error's fallback (zero for bad syntax, `ByteSize::MAX` on
    /// overflow) on failure.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), ParseError> {
        match parser::parse(text) {
            Ok(size) => {
                *self = size;
                Ok(())
            }
            Err(err) => {
                *self = err.fallback();
                Err(err)
            }
        }
    }
}

impl Serialize for ByteSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Shapes accepted on the wire: a raw byte count or a size string.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Bytes(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SizeRepr::deserialize(deserializer)? {
            SizeRepr::Bytes(bytes) => Ok(ByteSize::new(bytes)),
            SizeRepr::Text(text) => parser::parse_str(&text).map_err(de::Error::custom),
        }
    }
}
