//! Conversion reports: one parsed input rendered in every output form.
//!
//! A `SizeReport` is what frontends print or export. Reports serialise with
//! serde, so the same record drives JSON and CSV output.

use crate::model::ByteSize;
use crate::parser::{self, ParseError};
use serde::{Deserialize, Serialize};
use std::io;

/// A single converted size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeReport {
    /// Text exactly as supplied by the user.
    pub input: String,
    /// Exact byte count.
    pub bytes: u64,
    /// Canonical form, parses back to `bytes`.
    pub canonical: String,
    /// Approximate one-decimal display form.
    pub human: String,
}

impl SizeReport {
    pub fn new(input: impl Into<String>, size: ByteSize) -> Self {
        Self {
            input: input.into(),
            bytes: size.bytes(),
            canonical: size.to_string(),
            human: size.human_readable(),
        }
    }

    /// Parse `input` (with optional unit suffix) into a report.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse_str(input).map(|size| Self::new(input, size))
    }

    /// Parse `input` as a bare integer count of `unit`.
    pub fn parse_as(input: &str, unit: ByteSize) -> Result<Self, ParseError> {
        parser::parse_str_as(input, unit).map(|size| Self::new(input, size))
    }

    /// The reported size.
    pub fn size(&self) -> ByteSize {
        ByteSize::new(self.bytes)
    }
}

/// Write reports as a pretty-printed JSON array followed by a newline.
pub fn write_json<W: io::Write>(mut writer: W, reports: &[SizeReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writeln!(writer)
}

/// Write reports as CSV with a header row.
pub fn write_csv<W: io::Write>(writer: W, reports: &[SizeReport]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for report in reports {
        wtr.serialize(report)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_fields() {
        let report = SizeReport::parse("1536").unwrap();
        assert_eq!(report.input, "1536");
        assert_eq!(report.bytes, 1536);
        assert_eq!(report.canonical, "1536B");
        assert_eq!(report.human, "1.5 KB");
        assert_eq!(report.size(), ByteSize::new(1536));
    }

    #[test]
    fn test_report_keeps_original_input() {
        let report = SizeReport::parse("20480 G").unwrap();
        assert_eq!(report.input, "20480 G");
        assert_eq!(report.canonical, "20TB");
    }

    #[test]
    fn test_report_parse_as() {
        let report = SizeReport::parse_as("3", ByteSize::MB).unwrap();
        assert_eq!(report.bytes, 3 * 1024 * 1024);
        assert_eq!(report.canonical, "3MB");
        assert!(SizeReport::parse_as("3MB", ByteSize::MB).is_err());
    }

    #[test]
    fn test_report_parse_error() {
        let err = SizeReport::parse("10 Mb").unwrap_err();
        assert_eq!(err.input(), "10 Mb");
    }

    #[test]
    fn test_write_csv() {
        let reports = vec![
            SizeReport::parse("2MB").unwrap(),
            SizeReport::parse("5 GB").unwrap(),
        ];
        let mut buf = Vec::new();
        write_csv(&mut buf, &reports).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "input,bytes,canonical,human\n\
             2MB,2097152,2MB,2.0 MB\n\
             5 GB,5368709120,5GB,5.0 GB\n"
        );
    }

    #[test]
    fn test_write_json() {
        let reports = vec![SizeReport::parse("1K").unwrap()];
        let mut buf = Vec::new();
        write_json(&mut buf, &reports).unwrap();
        let parsed: Vec<SizeReport> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, reports);
        assert!(buf.ends_with(b"\n"));
    }
}
