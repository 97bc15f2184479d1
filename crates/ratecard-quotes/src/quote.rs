//! Saved quote records.

use chrono::{DateTime, Utc};
use ratecard_estimate::Estimate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a saved quote.
pub type QuoteId = Uuid;

/// An estimate saved for later reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier for this quote.
    pub id: QuoteId,
    /// Timestamp when the quote was saved.
    pub created_at: DateTime<Utc>,
    /// Free-form label (client name, project code, ...).
    pub label: Option<String>,
    /// The saved estimate.
    pub estimate: Estimate,
}

impl Quote {
    /// Creates a new quote with a fresh identifier.
    #[must_use]
    pub fn new(estimate: Estimate, label: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            label: label.filter(|l| !l.trim().is_empty()),
            estimate,
        }
    }

    /// Returns the first eight characters of the identifier.
    #[must_use]
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    /// Returns a one-line description for listings and pickers.
    #[must_use]
    pub fn summary(&self) -> String {
        let e = &self.estimate;
        format!(
            "{} | {} | {}/{} {} {}mo x{} | {} {}",
            self.short_id(),
            self.created_at.format("%Y-%m-%d %H:%M"),
            e.category,
            e.sub_service,
            e.complexity,
            e.duration,
            e.team_size,
            e.total_cost,
            e.currency,
        )
    }
}
