//! Quote book commands (list, show, delete, clean).

use anyhow::{Context, Result, bail};
use inquire::{Confirm, Select};
use ratecard_lib::prelude::*;

use crate::app::App;
use crate::display;

/// List saved quotes, newest first.
pub(crate) fn list_quotes(app: &App<'_>) -> Result<()> {
    let store = app.quotes()?;
    let quotes = store.list()?;

    if quotes.is_empty() {
        println!("No saved quotes.");
        return Ok(());
    }

    println!(
        "{:<10} {:<17} {:<36} {:>16}  {}",
        "ID", "SAVED", "SERVICE", "TOTAL", "LABEL"
    );
    println!("{}", "-".repeat(90));

    for quote in &quotes {
        let e = &quote.estimate;
        println!(
            "{:<10} {:<17} {:<36} {:>16}  {}",
            quote.short_id(),
            quote.created_at.format("%Y-%m-%d %H:%M"),
            format!("{}/{}", e.category, e.sub_service),
            format_amount(e.total_cost, e.currency),
            quote.label.as_deref().unwrap_or("-"),
        );
    }

    println!("\nTotal: {} quotes", quotes.len());
    Ok(())
}

/// Show one saved quote, prompting for it when no ID is given.
pub(crate) fn show_quote(
    app: &App<'_>,
    quote_id: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let store = app.quotes()?;
    let id = match quote_id {
        Some(id) => id.to_string(),
        None => prompt_quote_selection(&store, "show")?,
    };
    let quote = store.find(&id)?;

    if format == OutputFormat::Text {
        println!("Quote:   {}", quote.id);
        println!("Saved:   {}", quote.created_at.format("%Y-%m-%d %H:%M:%S"));
        if let Some(label) = &quote.label {
            println!("Label:   {label}");
        }
        println!();
    }

    display::emit(std::slice::from_ref(&quote.estimate), format, true, None)
}

/// Delete one saved quote, prompting for it when no ID is given.
pub(crate) fn delete_quote(app: &App<'_>, quote_id: Option<&str>) -> Result<()> {
    let store = app.quotes()?;
    let id = match quote_id {
        Some(id) => id.to_string(),
        None => prompt_quote_selection(&store, "delete")?,
    };
    let quote = store.find(&id)?;
    store.delete(quote.id)?;

    println!("Quote {} deleted.", quote.short_id());
    Ok(())
}

/// Delete every saved quote.
pub(crate) fn clean_quotes(app: &App<'_>, yes: bool) -> Result<()> {
    let store = app.quotes()?;

    if !yes {
        let confirmed = Confirm::new(&format!(
            "Delete all quotes in {}?",
            store.path().display()
        ))
        .with_default(false)
        .prompt()
        .context("Confirmation cancelled")?;
        if !confirmed {
            println!("Nothing deleted.");
            return Ok(());
        }
    }

    let removed = store.clear()?;
    println!("Deleted {removed} quotes.");
    Ok(())
}

/// Prompt the user to pick a quote and return its ID.
fn prompt_quote_selection(store: &QuoteStore, action_name: &str) -> Result<String> {
    let quotes = store.list()?;
    if quotes.is_empty() {
        bail!("No saved quotes to {action_name}");
    }

    let options: Vec<String> = quotes.iter().map(Quote::summary).collect();

    let selection = Select::new(&format!("Select a quote to {action_name}:"), options)
        .prompt()
        .context("Quote selection cancelled")?;

    // The short ID comes before the first " | "
    let id = selection
        .split(" | ")
        .next()
        .context("Failed to parse quote selection")?
        .to_string();

    Ok(id)
}
