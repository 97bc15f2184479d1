//! Catalog loading errors.

use ratecard_types::Complexity;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog file.
    #[error("Failed to read catalog '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or does not match the catalog schema.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A base price is keyed by an unsupported currency code.
    #[error("Category '{category}' prices unsupported currency '{code}'")]
    UnknownCurrency {
        /// The category holding the price.
        category: String,
        /// The unrecognized currency code.
        code: String,
    },

    /// A base price is zero, negative or not finite.
    #[error("Category '{category}' has invalid {currency} base price {value}")]
    InvalidBasePrice {
        /// The category holding the price.
        category: String,
        /// The currency code.
        currency: String,
        /// The rejected value.
        value: f64,
    },

    /// A complexity multiplier is zero, negative or not finite.
    #[error("Sub-service '{category}/{sub_service}' has invalid {complexity} multiplier {value}")]
    InvalidMultiplier {
        /// The category holding the sub-service.
        category: String,
        /// The sub-service holding the multiplier.
        sub_service: String,
        /// The tier of the rejected multiplier.
        complexity: Complexity,
        /// The rejected value.
        value: f64,
    },

    /// A category defines no base prices.
    #[error("Category '{0}' defines no base prices")]
    NoBasePrice(String),

    /// A category defines no sub-services.
    #[error("Category '{0}' defines no sub-services")]
    NoSubServices(String),

    /// An identifier or display name is blank.
    #[error("Blank {what} in category '{category}'")]
    BlankField {
        /// The category where the blank field was found.
        category: String,
        /// Which field was blank.
        what: &'static str,
    },

    /// An identifier appears twice, verbatim or after lowercasing.
    #[error("Duplicate identifier '{0}'")]
    Duplicate(String),
}
