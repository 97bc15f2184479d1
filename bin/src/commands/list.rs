//! List command implementation.
//!
//! This module handles listing the catalog with optional filtering.

use anyhow::Result;
use ratecard_lib::prelude::*;

use crate::app::App;

/// List sub-services, optionally limited to one category or a search pattern.
pub(crate) fn list_services(
    app: &App<'_>,
    category: Option<&str>,
    search: Option<&str>,
) -> Result<()> {
    let catalog = app.catalog;

    let rows: Vec<(&ServiceCategory, &SubService)> = match (category, search) {
        (Some(id), pattern) => {
            let category = catalog.category(id)?;
            category
                .sub_services()
                .filter(|s| pattern.is_none_or(|p| s.matches(p)))
                .map(|s| (category, s))
                .collect()
        }
        (None, Some(pattern)) => catalog.search(pattern),
        (None, None) => catalog
            .categories()
            .flat_map(|c| c.sub_services().map(move |s| (c, s)))
            .collect(),
    };

    if rows.is_empty() {
        println!("No services found.");
        return Ok(());
    }

    let currency = app.config.default_currency;
    println!(
        "{:<14} {:<24} {:<28} {:>14}",
        "CATEGORY",
        "SUB-SERVICE",
        "NAME",
        format!("BASE ({})", currency.code())
    );
    println!("{}", "-".repeat(83));

    for (category, sub) in &rows {
        let base = category
            .base_price(currency)
            .map_or_else(|| "n/a".to_string(), |p| format!("{p:.0}"));
        println!(
            "{:<14} {:<24} {:<28} {:>14}",
            category.id(),
            sub.id(),
            sub.name(),
            base
        );
    }

    println!("\nTotal: {} services", rows.len());
    Ok(())
}
