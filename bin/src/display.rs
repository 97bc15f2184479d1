//! Display utilities and output formatting for the ratecard CLI.

use anyhow::{Context, Result};
use ratecard_lib::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write estimates to `writer` in the given format.
pub(crate) fn write_estimates<W: Write>(
    estimates: &[Estimate],
    format: OutputFormat,
    breakdown: bool,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new()
            .with_breakdown(breakdown)
            .write_estimates(estimates, writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_estimates(estimates, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_estimates(estimates, writer)?,
        OutputFormat::Csv => CsvFormatter::new().write_estimates(estimates, writer)?,
    }
    Ok(())
}

/// Write estimates to a file, or to stdout when no path is given.
pub(crate) fn emit(
    estimates: &[Estimate],
    format: OutputFormat,
    breakdown: bool,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_estimates(estimates, format, breakdown, &mut writer)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), %format, "estimate written");
        }
        None => {
            let stdout = io::stdout();
            write_estimates(estimates, format, breakdown, stdout.lock())?;
        }
    }
    Ok(())
}

/// Parse a complexity tier, falling back to `default` when absent.
pub(crate) fn parse_complexity(s: Option<&str>, default: Complexity) -> Result<Complexity> {
    s.map_or(Ok(default), |s| {
        s.parse().with_context(|| format!("Bad complexity '{s}'"))
    })
}

/// Parse a currency code, falling back to `default` when absent.
pub(crate) fn parse_currency(s: Option<&str>, default: Currency) -> Result<Currency> {
    s.map_or(Ok(default), |s| {
        s.parse().with_context(|| format!("Bad currency '{s}'"))
    })
}
