//! Info command implementation.
//!
//! This module handles displaying detailed information about a sub-service,
//! including estimates across every duration and complexity tier.

use anyhow::{Context, Result};
use ratecard_lib::pricing;
use ratecard_lib::prelude::*;

use crate::app::App;
use crate::display;

/// Show details for a sub-service with duration and tier tables.
pub(crate) fn show_info(
    app: &App<'_>,
    category_id: &str,
    sub_service_id: &str,
    currency: Option<&str>,
    team_size: u32,
) -> Result<()> {
    let currency = display::parse_currency(currency, app.config.default_currency)?;
    let (category, sub) = app.catalog.resolve(category_id, sub_service_id)?;

    println!("Service:    {}", sub.name());
    println!("ID:         {}/{}", category.id(), sub.id());
    println!("Category:   {}", category.name());

    let prices: Vec<String> = category
        .currencies()
        .filter_map(|c| {
            category
                .base_price(c)
                .and_then(pricing::round_amount)
                .map(|p| format_amount(p, c))
        })
        .collect();
    println!("Base price: {} per month", prices.join(" / "));

    let m = sub.price_multiplier();
    println!(
        "Multiplier: low x{}, medium x{}, high x{}",
        m.low, m.medium, m.high
    );

    if !sub.features().is_empty() {
        println!("Features:   {}", sub.features().join(", "));
    }

    let request = EstimateRequest::from_raw(
        category.id(),
        sub.id(),
        app.config.default_complexity,
        DurationMonths::MIN,
        team_size,
        currency,
    )?;
    let estimator = app.estimator();

    println!(
        "\nBy duration ({} complexity, team of {team_size}, {}):",
        request.complexity,
        currency.code()
    );
    println!("{:<10} {:>16} {:>18}", "MONTHS", "MONTHLY RATE", "TOTAL COST");
    println!("{}", "-".repeat(46));
    let by_duration = estimator
        .estimate_durations(&request)
        .with_context(|| format!("Cannot estimate {request}"))?;
    for e in &by_duration {
        println!(
            "{:<10} {:>16} {:>18}",
            e.duration,
            format_amount(e.monthly_rate, currency),
            format_amount(e.total_cost, currency),
        );
    }

    let request = request.with_duration(DurationMonths::new(3)?);
    println!(
        "\nBy complexity (3 months, team of {team_size}, {}):",
        currency.code()
    );
    println!("{:<10} {:>16} {:>18}", "TIER", "MONTHLY RATE", "TOTAL COST");
    println!("{}", "-".repeat(46));
    for e in &estimator.estimate_tiers(&request)? {
        println!(
            "{:<10} {:>16} {:>18}",
            e.complexity.label(),
            format_amount(e.monthly_rate, currency),
            format_amount(e.total_cost, currency),
        );
    }

    println!("\nNote: Totals include maintenance and infrastructure costs.");
    Ok(())
}
