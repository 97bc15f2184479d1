//! Error types for ratecard.

use thiserror::Error;

use crate::{ComplexityParseError, Currency, CurrencyParseError};

/// Result type alias for ratecard operations.
pub type Result<T> = std::result::Result<T, RatecardError>;

/// Caller errors raised while resolving or validating an estimate request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatecardError {
    /// Category not present in the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Sub-service not present in the category.
    #[error("Unknown sub-service '{sub_service}' in category '{category}'")]
    UnknownSubService {
        /// The category that was searched.
        category: String,
        /// The sub-service that could not be found.
        sub_service: String,
    },

    /// The category defines no base price for the currency.
    #[error("Currency {currency} is not priced for category '{category}'")]
    UnsupportedCurrency {
        /// The category that was searched.
        category: String,
        /// The requested currency.
        currency: Currency,
    },

    /// A computed amount is not finite or does not fit in whole currency units.
    #[error("Estimate for '{category}/{sub_service}' overflows the {what}")]
    AmountOverflow {
        /// The priced category.
        category: String,
        /// The priced sub-service.
        sub_service: String,
        /// Which amount overflowed ("monthly rate" or "total cost").
        what: &'static str,
    },

    /// Duration or team size outside its valid range.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Complexity string outside the closed set.
    #[error(transparent)]
    Complexity(#[from] ComplexityParseError),

    /// Currency string outside the closed set.
    #[error(transparent)]
    Currency(#[from] CurrencyParseError),
}

/// Error for numeric inputs outside their valid range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Duration outside 1-12 months.
    #[error("Invalid duration: {value} months (expected {min}-{max})")]
    Duration {
        /// The rejected value.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// Team size outside 1-10 people.
    #[error("Invalid team size: {value} (expected {min}-{max})")]
    TeamSize {
        /// The rejected value.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = RatecardError::UnknownSubService {
            category: "development".to_string(),
            sub_service: "blockchain".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown sub-service 'blockchain' in category 'development'"
        );

        let err = RatecardError::from(RangeError::TeamSize {
            value: 11,
            min: 1,
            max: 10,
        });
        assert_eq!(err.to_string(), "Invalid team size: 11 (expected 1-10)");
    }

    #[test]
    fn test_overflow_message() {
        let err = RatecardError::AmountOverflow {
            category: "ai-ml".to_string(),
            sub_service: "chatbots".to_string(),
            what: "total cost",
        };
        assert_eq!(
            err.to_string(),
            "Estimate for 'ai-ml/chatbots' overflows the total cost"
        );
    }

    #[test]
    fn test_unsupported_currency_message() {
        let err = RatecardError::UnsupportedCurrency {
            category: "design".to_string(),
            currency: Currency::Gbp,
        };
        assert_eq!(
            err.to_string(),
            "Currency GBP is not priced for category 'design'"
        );
    }
}
