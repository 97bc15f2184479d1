//! Interactive estimate command.
//!
//! Walks through the catalog with prompts, prints the estimate and offers to
//! save it as a quote.

use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Select, Text};
use ratecard_lib::prelude::*;

use crate::app::App;
use crate::commands::estimate::save_quote;
use crate::display;

/// Run the interactive estimate flow.
pub(crate) fn interactive(app: &App<'_>) -> Result<()> {
    let catalog = app.catalog;

    let options: Vec<String> = catalog
        .categories()
        .map(|c| format!("{} | {}", c.id(), c.name()))
        .collect();
    let category_id = pick_id(
        Select::new("Service category:", options).prompt(),
        "Category selection cancelled",
    )?;
    let category = catalog.category(&category_id)?;

    let options: Vec<String> = category
        .sub_services()
        .map(|s| format!("{} | {}", s.id(), s.name()))
        .collect();
    let sub_id = pick_id(
        Select::new("Sub-service:", options).prompt(),
        "Sub-service selection cancelled",
    )?;

    let tiers = Complexity::all().to_vec();
    let cursor = tiers
        .iter()
        .position(|&c| c == app.config.default_complexity)
        .unwrap_or_default();
    let complexity = Select::new("Complexity:", tiers)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Complexity selection cancelled")?;

    let duration = CustomType::<u32>::new("Duration in months:")
        .with_default(3)
        .with_help_message("1-12 months")
        .with_validator(|v: &u32| {
            Ok(in_range(*v, DurationMonths::MIN, DurationMonths::MAX, "months"))
        })
        .prompt()
        .context("Duration input cancelled")?;

    let team_size = CustomType::<u32>::new("Team size:")
        .with_default(3)
        .with_help_message("1-10 people")
        .with_validator(|v: &u32| Ok(in_range(*v, TeamSize::MIN, TeamSize::MAX, "people")))
        .prompt()
        .context("Team size input cancelled")?;

    let currencies: Vec<Currency> = category.currencies().collect();
    let cursor = currencies
        .iter()
        .position(|&c| c == app.config.default_currency)
        .unwrap_or_default();
    let currency = Select::new("Currency:", currencies)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Currency selection cancelled")?;

    let request =
        EstimateRequest::from_raw(category.id(), sub_id, complexity, duration, team_size, currency)?;
    let estimate = app.estimator().estimate(&request)?;

    println!();
    display::emit(std::slice::from_ref(&estimate), OutputFormat::Text, false, None)?;
    println!();

    let save = Confirm::new("Save this estimate as a quote?")
        .with_default(false)
        .prompt()
        .context("Confirmation cancelled")?;
    if save {
        let label = Text::new("Label (optional):")
            .prompt_skippable()
            .context("Label input cancelled")?;
        save_quote(app, estimate, label)?;
    }

    Ok(())
}

/// Take the id from a "id | name" selection.
fn pick_id(
    selection: inquire::error::InquireResult<String>,
    cancelled: &'static str,
) -> Result<String> {
    let selection = selection.context(cancelled)?;
    let id = selection
        .split(" | ")
        .next()
        .context("Failed to parse selection")?;
    Ok(id.to_string())
}

fn in_range(value: u32, min: u32, max: u32, unit: &str) -> Validation {
    if (min..=max).contains(&value) {
        Validation::Valid
    } else {
        Validation::Invalid(format!("Enter {min}-{max} {unit}").into())
    }
}
