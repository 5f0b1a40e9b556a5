//! Parse failures for byte-size text.

use crate::model::ByteSize;
use std::fmt;
use thiserror::Error;

/// Why a parse was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The numeric prefix is missing or the unit token is not recognised.
    Syntax,
    /// The value does not fit in 64 bits, before or after applying the unit.
    Overflow,
}

impl ParseErrorKind {
    /// Value a failed parse leaves behind: zero for syntax errors, the
    /// saturated maximum for overflow.
    pub const fn fallback(self) -> ByteSize {
        match self {
            Self::Syntax => ByteSize::ZERO,
            Self::Overflow => ByteSize::MAX,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => f.write_str("invalid syntax"),
            Self::Overflow => f.write_str("value out of range"),
        }
    }
}

/// A rejected parse, carrying the offending input for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid byte size {input:?}: {kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    input: String,
}

impl ParseError {
    /// Build an error for `input`. Non-UTF-8 bytes are replaced for display.
    pub fn new(kind: ParseErrorKind, input: &[u8]) -> Self {
        Self {
            kind,
            input: String::from_utf8_lossy(input).into_owned(),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The original text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// See [`ParseErrorKind::fallback`].
    pub fn fallback(&self) -> ByteSize {
        self.kind.fallback()
    }
}
