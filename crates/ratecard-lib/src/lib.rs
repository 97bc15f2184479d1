//! Project price estimation for technology services.
//!
//! This is a facade crate that re-exports functionality from the ratecard
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use ratecard_lib::prelude::*;
//!
//! let request = EstimateRequest::from_raw(
//!     "development",
//!     "web-development",
//!     Complexity::Medium,
//!     3,
//!     3,
//!     Currency::Inr,
//! )?;
//! let estimate = Estimator::global().estimate(&request)?;
//!
//! assert_eq!(estimate.monthly_rate, 100_000);
//! assert_eq!(estimate.total_cost, 375_000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratecard/ratecard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use ratecard_types::*;

// Re-export the catalog
pub use ratecard_catalog::{Catalog, CatalogError, PriceMultiplier, ServiceCategory, SubService};

// Re-export estimation
pub use ratecard_estimate::{CostBreakdown, Estimate, Estimator, pricing};

// Re-export formatters
#[cfg(feature = "format")]
pub use ratecard_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TextFormatter,
    format_amount, group_digits, notes,
};

// Re-export the quote book
#[cfg(feature = "quotes")]
pub use ratecard_quotes::{Quote, QuoteError, QuoteId, QuoteStore};

/// Prelude module for convenient imports.
///
/// ```
/// use ratecard_lib::prelude::*;
/// ```
pub mod prelude {
    pub use ratecard_types::{
        Complexity, Currency, DurationMonths, EstimateRequest, RangeError, RatecardError, Result,
        TeamSize,
    };

    pub use ratecard_catalog::{Catalog, ServiceCategory, SubService};

    pub use ratecard_estimate::{CostBreakdown, Estimate, Estimator};

    #[cfg(feature = "format")]
    pub use ratecard_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, TextFormatter, format_amount,
    };

    #[cfg(feature = "quotes")]
    pub use ratecard_quotes::{Quote, QuoteStore};
}
