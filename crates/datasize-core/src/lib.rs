//! datasize core: a byte-count value type with text parsing and formatting.
//!
//! This crate contains all conversion logic with no I/O of its own beyond the
//! report writers. It is designed to be embedded in configuration structs
//! (via serde) as well as driven by the `datasize` command-line frontend.
//!
//! # Modules
//!
//! - [`model`]: `ByteSize`, the unit table, canonical and human-readable formatting.
//! - [`parser`]: Overflow-checked parsing of `"10MB"`-style text.
//! - [`report`]: Serialisable conversion records for JSON and CSV export.

pub mod model;
pub mod parser;
pub mod report;

pub use model::{ByteSize, Unit, UNITS};
pub use parser::{
    must_parse, must_parse_as, must_parse_str, must_parse_str_as, parse, parse_as, parse_str,
    parse_str_as, ParseError, ParseErrorKind,
};
pub use report::SizeReport;
