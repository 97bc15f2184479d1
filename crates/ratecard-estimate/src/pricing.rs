//! Fixed factors of the pricing formula.
//!
//! Both adjustments are step functions: a team of 6 pays the same surcharge
//! as a team of 10, and a 4-month project gets the same discount as a
//! 12-month one.

use ratecard_types::{DurationMonths, TeamSize};

/// Largest team priced without the surcharge.
pub const STANDARD_TEAM_MAX: u32 = 5;

/// Scale factor applied to teams larger than [`STANDARD_TEAM_MAX`].
pub const LARGE_TEAM_FACTOR: f64 = 1.5;

/// Longest project priced without the discount.
pub const STANDARD_DURATION_MAX: u32 = 3;

/// Duration factor applied to projects longer than [`STANDARD_DURATION_MAX`].
pub const LONG_PROJECT_FACTOR: f64 = 0.85;

/// Maintenance share added on top of the pre-extras total.
pub const MAINTENANCE_RATE: f64 = 0.15;

/// Infrastructure share added on top of the pre-extras total.
pub const INFRASTRUCTURE_RATE: f64 = 0.10;

/// Pre-extras total to final total (1 + maintenance + infrastructure).
pub const EXTRAS_MULTIPLIER: f64 = 1.25;

/// Returns the team scale factor.
#[must_use]
pub const fn scale_factor(team_size: TeamSize) -> f64 {
    if team_size.get() <= STANDARD_TEAM_MAX {
        1.0
    } else {
        LARGE_TEAM_FACTOR
    }
}

/// Returns the duration discount factor.
#[must_use]
pub const fn duration_factor(duration: DurationMonths) -> f64 {
    if duration.get() <= STANDARD_DURATION_MAX {
        1.0
    } else {
        LONG_PROJECT_FACTOR
    }
}

/// Rounds a non-negative amount to the nearest whole unit, halves up.
///
/// Returns `None` for negative or non-finite amounts and for amounts that do
/// not fit in a `u64`.
#[must_use]
pub fn round_amount(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    let rounded = amount.round();
    // u64::MAX as f64 is 2^64, the first value that no longer fits.
    (rounded < u64::MAX as f64).then_some(rounded as u64)
}
