//! Estimate command implementation.

use anyhow::{Context, Result};
use ratecard_lib::prelude::*;
use std::path::Path;

use crate::app::App;
use crate::display;

/// Price one request and print (or write) the result.
#[allow(clippy::too_many_arguments)]
pub(crate) fn estimate(
    app: &App<'_>,
    category: &str,
    sub_service: &str,
    complexity: Option<&str>,
    duration: u32,
    team_size: u32,
    currency: Option<&str>,
    format: OutputFormat,
    output: Option<&Path>,
    breakdown: bool,
    save: bool,
    label: Option<String>,
) -> Result<()> {
    let complexity = display::parse_complexity(complexity, app.config.default_complexity)?;
    let currency = display::parse_currency(currency, app.config.default_currency)?;

    let request = EstimateRequest::from_raw(
        category,
        sub_service,
        complexity,
        duration,
        team_size,
        currency,
    )?;

    let estimate = app
        .estimator()
        .estimate(&request)
        .with_context(|| format!("Cannot estimate {request}"))?;

    display::emit(
        std::slice::from_ref(&estimate),
        format,
        breakdown,
        output,
    )?;

    if save {
        save_quote(app, estimate, label)?;
    }

    Ok(())
}

/// Store an estimate in the quote book and report where it went.
pub(crate) fn save_quote(app: &App<'_>, estimate: Estimate, label: Option<String>) -> Result<()> {
    let store = app.quotes()?;
    let quote = Quote::new(estimate, label);
    let path = store.save(&quote).context("Failed to save quote")?;

    tracing::info!(id = %quote.id, path = %path.display(), "quote saved");
    if !app.quiet {
        eprintln!("Saved quote {}", quote.short_id());
    }
    Ok(())
}
