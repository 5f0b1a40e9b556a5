//! datasize: convert human-friendly byte sizes from the command line.
//!
//! Thin binary entry point. All parsing and formatting lives in the
//! `datasize-core` crate; this file only handles arguments, input lines,
//! and output rendering.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use datasize_core::report::{self, SizeReport};
use datasize_core::{ByteSize, ParseError, Unit};

#[derive(Debug, Parser)]
#[command(
    name = "datasize",
    version,
    about = "Parse and format human-friendly byte sizes such as \"10MB\" or \"5 GB\""
)]
struct Cli {
    /// Sizes to convert. Read from stdin, one per line, when omitted.
    sizes: Vec<String>,

    /// Treat each input as a bare integer count of this unit (e.g. `--as MB`).
    #[arg(long = "as", value_name = "UNIT", value_parser = parse_unit)]
    unit: Option<Unit>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "DATASIZE_FORMAT")]
    format: OutputFormat,

    /// Log rejected inputs and parse details at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One tab-separated line per size: input, bytes, canonical, human.
    Text,
    Json,
    Csv,
}

fn parse_unit(token: &str) -> Result<Unit, String> {
    Unit::from_token(token.trim())
        .ok_or_else(|| format!("unknown unit {token:?}, expected one of B, KB, MB, GB, TB, PB, EB"))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let inputs = if cli.sizes.is_empty() {
        read_inputs(io::stdin().lock()).context("failed to read sizes from stdin")?
    } else {
        cli.sizes.clone()
    };

    let (reports, failures) = convert(&inputs, cli.unit);
    for err in &failures {
        tracing::error!("{err}");
    }

    let stdout = io::stdout();
    write_reports(stdout.lock(), cli.format, &reports).context("failed to write output")?;

    Ok(if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Collect non-blank lines as inputs, preserving their exact text.
fn read_inputs<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}

/// Parse every input, keeping going past failures.
fn convert(inputs: &[String], unit: Option<Unit>) -> (Vec<SizeReport>, Vec<ParseError>) {
    let mut reports = Vec::with_capacity(inputs.len());
    let mut failures = Vec::new();
    for input in inputs {
        let result = match unit {
            Some(unit) => SizeReport::parse_as(input, ByteSize::from(unit)),
            None => SizeReport::parse(input),
        };
        match result {
            Ok(report) => reports.push(report),
            Err(err) => failures.push(err),
        }
    }
    tracing::debug!(
        converted = reports.len(),
        rejected = failures.len(),
        "conversion finished"
    );
    (reports, failures)
}

fn render_text(report: &SizeReport) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        report.input, report.bytes, report.canonical, report.human
    )
}

fn write_reports<W: Write>(
    mut out: W,
    format: OutputFormat,
    reports: &[SizeReport],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{}", render_text(report))?;
            }
        }
        OutputFormat::Json => report::write_json(&mut out, reports)?,
        OutputFormat::Csv => report::write_csv(&mut out, reports)?,
    }
    out.flush()?;
    Ok(())
}
