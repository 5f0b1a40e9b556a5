//! Parser for byte-size text such as `"10MB"`, `"5 GB"` or `"1024"`.
//!
//! Grammar: an ASCII digit run, then an optional unit token. The token is
//! everything after the digits with surrounding whitespace trimmed, and must
//! be one of the spellings listed in [`Unit::aliases`].
//!
//! Every failure resolves to a defined value (see
//! [`ParseErrorKind::fallback`]): zero on a syntax error, `ByteSize::MAX` on
//! overflow. The `must_*` variants panic instead and are meant for literals
//! that are known to be valid.

pub mod error;

pub use error::{ParseError, ParseErrorKind};

use crate::model::{ByteSize, Unit};
use std::str::FromStr;
use tracing::{debug, trace};

/// Parse a size with an optional unit suffix.
pub fn parse(text: &[u8]) -> Result<ByteSize, ParseError> {
    let result = parse_digits(text).and_then(|(value, rest)| {
        let unit = unit_token(rest)
            .and_then(Unit::from_token)
            .ok_or(ParseErrorKind::Syntax)?;
        value
            .checked_mul(unit.multiplier())
            .ok_or(ParseErrorKind::Overflow)
    });
    finish(text, result)
}

/// String form of [`parse`].
pub fn parse_str(s: &str) -> Result<ByteSize, ParseError> {
    parse(s.as_bytes())
}

/// Parse a bare integer (no unit suffix) and scale it by `unit`.
///
/// Trailing whitespace after the digits is tolerated; any other trailing
/// text is a syntax error.
pub fn parse_as(text: &[u8], unit: ByteSize) -> Result<ByteSize, ParseError> {
    let result = parse_digits(text).and_then(|(value, rest)| {
        if unit_token(rest) != Some("") {
            return Err(ParseErrorKind::Syntax);
        }
        value
            .checked_mul(unit.bytes())
            .ok_or(ParseErrorKind::Overflow)
    });
    finish(text, result)
}

/// String form of [`parse_as`].
pub fn parse_str_as(s: &str, unit: ByteSize) -> Result<ByteSize, ParseError> {
    parse_as(s.as_bytes(), unit)
}

/// Like [`parse`], but panics on malformed input.
#[track_caller]
pub fn must_parse(text: &[u8]) -> ByteSize {
    parse(text).unwrap_or_else(|err| panic!("{err}"))
}

/// Like [`parse_str`], but panics on malformed input.
#[track_caller]
pub fn must_parse_str(s: &str) -> ByteSize {
    must_parse(s.as_bytes())
}

/// Like [`parse_as`], but panics on malformed input.
#[track_caller]
pub fn must_parse_as(text: &[u8], unit: ByteSize) -> ByteSize {
    parse_as(text, unit).unwrap_or_else(|err| panic!("{err}"))
}

/// Like [`parse_str_as`], but panics on malformed input.
#[track_caller]
pub fn must_parse_str_as(s: &str, unit: ByteSize) -> ByteSize {
    must_parse_as(s.as_bytes(), unit)
}

impl FromStr for ByteSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}

/// Accumulate the leading digit run into a `u64`.
///
/// Returns the value and the unconsumed tail. A leading non-digit (or empty
/// input) is a syntax error; overflow is reported as soon as the next digit
/// would not fit, regardless of what follows.
fn parse_digits(text: &[u8]) -> Result<(u64, &[u8]), ParseErrorKind> {
    let len = text.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return Err(ParseErrorKind::Syntax);
    }

    let (digits, rest) = text.split_at(len);
    let mut value: u64 = 0;
    for &digit in digits {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
            .ok_or(ParseErrorKind::Overflow)?;
    }
    Ok((value, rest))
}

/// The whitespace-trimmed unit token, or `None` if the tail is not UTF-8.
fn unit_token(rest: &[u8]) -> Option<&str> {
    std::str::from_utf8(rest).ok().map(str::trim)
}

fn finish(text: &[u8], result: Result<u64, ParseErrorKind>) -> Result<ByteSize, ParseError> {
    match result {
        Ok(bytes) => {
            trace!(bytes, "parsed byte size");
            Ok(ByteSize::new(bytes))
        }
        Err(kind) => {
            let err = ParseError::new(kind, text);
            debug!(input = err.input(), ?kind, "rejected byte size");
            Err(err)
        }
    }
}
