//! Human-readable cost breakdown.

use ratecard_estimate::Estimate;
use ratecard_estimate::pricing::{
    INFRASTRUCTURE_RATE, LARGE_TEAM_FACTOR, LONG_PROJECT_FACTOR, MAINTENANCE_RATE,
    STANDARD_DURATION_MAX, STANDARD_TEAM_MAX,
};
use std::io::Write;

use crate::{FormatError, Formatter, format_amount};

/// Plain-text formatter.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// Whether to print the unrounded calculation steps.
    show_breakdown: bool,
}

impl TextFormatter {
    /// Creates a text formatter without the calculation steps.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_breakdown: false,
        }
    }

    /// Sets whether to print the calculation steps.
    #[must_use]
    pub const fn with_breakdown(mut self, show: bool) -> Self {
        self.show_breakdown = show;
        self
    }

    fn write_one<W: Write>(&self, estimate: &Estimate, w: &mut W) -> Result<(), FormatError> {
        let money = |amount: u64| format_amount(amount, estimate.currency);
        let months = estimate.duration.get();

        writeln!(
            w,
            "{} / {}",
            estimate.category_name, estimate.sub_service_name
        )?;
        writeln!(w, "{}", "-".repeat(50))?;
        writeln!(w, "{:<16} {}", "Complexity:", estimate.complexity.label())?;
        writeln!(
            w,
            "{:<16} {} month{}",
            "Duration:",
            months,
            if months == 1 { "" } else { "s" }
        )?;
        writeln!(w, "{:<16} {}", "Team size:", estimate.team_size)?;
        writeln!(w, "{:<16} {}", "Monthly rate:", money(estimate.monthly_rate))?;
        writeln!(w, "{:<16} {}", "Total cost:", money(estimate.total_cost))?;

        if self.show_breakdown {
            let b = &estimate.breakdown;
            writeln!(w, "\nCalculation:")?;
            writeln!(w, "  {:<22} {:.2}", "Base price", b.base_price)?;
            writeln!(w, "  {:<22} x{}", "Complexity multiplier", b.complexity_multiplier)?;
            writeln!(w, "  {:<22} x{}", "Team scale factor", b.scale_factor)?;
            writeln!(w, "  {:<22} x{}", "Duration factor", b.duration_factor)?;
            writeln!(w, "  {:<22} {:.2}", "Monthly rate", b.monthly_rate)?;
            writeln!(w, "  {:<22} {:.2}", "Before extras", b.total_before_extras)?;
            writeln!(w, "  {:<22} {:.2}", "Maintenance", b.maintenance_cost)?;
            writeln!(w, "  {:<22} {:.2}", "Infrastructure", b.infrastructure_cost)?;
            writeln!(w, "  {:<22} {:.2}", "Total", b.total_cost)?;
        }

        if !estimate.features.is_empty() {
            writeln!(w, "\nIncluded features:")?;
            for feature in &estimate.features {
                writeln!(w, "  - {feature}")?;
            }
        }

        writeln!(w, "\nNotes:")?;
        for note in notes(estimate) {
            writeln!(w, "  * {note}")?;
        }
        Ok(())
    }
}

impl Formatter for TextFormatter {
    fn write_estimates<W: Write>(
        &self,
        estimates: &[Estimate],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for (i, estimate) in estimates.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            self.write_one(estimate, &mut writer)?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

/// Returns the pricing notes shown under an estimate.
#[must_use]
pub fn notes(estimate: &Estimate) -> Vec<String> {
    let pct = |rate: f64| (rate * 100.0).round() as u32;

    let mut notes = vec![format!(
        "Total includes {}% maintenance and {}% infrastructure costs.",
        pct(MAINTENANCE_RATE),
        pct(INFRASTRUCTURE_RATE)
    )];

    let discount = pct(1.0 - LONG_PROJECT_FACTOR);
    notes.push(if estimate.discount_applied() {
        format!("{discount}% long-project discount applied (over {STANDARD_DURATION_MAX} months).")
    } else {
        format!("Projects over {STANDARD_DURATION_MAX} months receive a {discount}% discount.")
    });

    let surcharge = pct(LARGE_TEAM_FACTOR - 1.0);
    notes.push(if estimate.surcharge_applied() {
        format!("{surcharge}% large-team surcharge applied (over {STANDARD_TEAM_MAX} people).")
    } else {
        format!("Teams over {STANDARD_TEAM_MAX} people carry a {surcharge}% surcharge.")
    });

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratecard_estimate::Estimator;

    fn estimate(duration: u32, team: u32) -> Estimate {
        Estimator::global()
            .estimate_raw("development", "web-development", "medium", duration, team, "inr")
            .unwrap()
    }

    #[test]
    fn test_text_breakdown() {
        let output = TextFormatter::new().render(&[estimate(3, 3)]).unwrap();

        assert!(output.starts_with("Development / Web Development\n"));
        assert!(output.contains("Monthly rate:    ₹1,00,000"));
        assert!(output.contains("Total cost:      ₹3,75,000"));
        assert!(output.contains("Duration:        3 months"));
        assert!(output.contains("  - Responsive design"));
        assert!(output.contains("15% maintenance and 10% infrastructure"));
        assert!(!output.contains("Calculation:"));
    }

    #[test]
    fn test_with_breakdown() {
        let output = TextFormatter::new()
            .with_breakdown(true)
            .render(&[estimate(6, 3)])
            .unwrap();
        assert!(output.contains("Calculation:"));
        assert!(output.contains("x0.85"));
    }

    #[test]
    fn test_notes_reflect_adjustments() {
        let plain = notes(&estimate(3, 5));
        assert_eq!(plain.len(), 3);
        assert!(plain[1].starts_with("Projects over 3 months"));
        assert!(plain[2].starts_with("Teams over 5 people carry a 50%"));

        let adjusted = notes(&estimate(4, 6));
        assert!(adjusted[1].starts_with("15% long-project discount applied"));
        assert!(adjusted[2].starts_with("50% large-team surcharge applied"));
    }

    #[test]
    fn test_singular_month() {
        let output = TextFormatter::new().render(&[estimate(1, 1)]).unwrap();
        assert!(output.contains("Duration:        1 month\n"));
    }
}
