//! Typed catalog entries.

use std::collections::BTreeMap;

use ratecard_types::{Complexity, Currency, RatecardError};
use serde::{Deserialize, Serialize};

/// Price multipliers for the three complexity tiers.
///
/// The tiers are fixed fields, so a catalog entry with a missing or extra
/// tier fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceMultiplier {
    /// Multiplier for [`Complexity::Low`].
    pub low: f64,
    /// Multiplier for [`Complexity::Medium`].
    pub medium: f64,
    /// Multiplier for [`Complexity::High`].
    pub high: f64,
}

impl PriceMultiplier {
    /// Creates a multiplier set.
    #[must_use]
    pub const fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    /// Returns the multiplier for a tier.
    #[must_use]
    pub const fn get(&self, complexity: Complexity) -> f64 {
        match complexity {
            Complexity::Low => self.low,
            Complexity::Medium => self.medium,
            Complexity::High => self.high,
        }
    }

    /// Returns the first tier whose multiplier is not a positive finite number.
    pub(crate) fn first_invalid(&self) -> Option<(Complexity, f64)> {
        Complexity::all()
            .iter()
            .map(|&c| (c, self.get(c)))
            .find(|&(_, value)| !(value.is_finite() && value > 0.0))
    }
}

/// A priced offering within a service category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubService {
    id: String,
    name: String,
    price_multiplier: PriceMultiplier,
    features: Vec<String>,
}

impl SubService {
    pub(crate) const fn new(
        id: String,
        name: String,
        price_multiplier: PriceMultiplier,
        features: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            price_multiplier,
            features,
        }
    }

    /// Returns the sub-service identifier (e.g. "web-development").
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display label (e.g. "Web Development").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all three tier multipliers.
    #[must_use]
    pub const fn price_multiplier(&self) -> &PriceMultiplier {
        &self.price_multiplier
    }

    /// Returns the multiplier for one tier.
    #[must_use]
    pub const fn multiplier(&self, complexity: Complexity) -> f64 {
        self.price_multiplier.get(complexity)
    }

    /// Returns the feature labels in catalog order.
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Returns true if the ID or name contains `pattern`, ignoring case.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        let pattern = pattern.to_lowercase();
        self.id.contains(&pattern) || self.name.to_lowercase().contains(&pattern)
    }
}

impl std::fmt::Display for SubService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A service category with per-currency base prices and its sub-services.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCategory {
    id: String,
    name: String,
    base_price: BTreeMap<Currency, f64>,
    sub_services: BTreeMap<String, SubService>,
}

impl ServiceCategory {
    pub(crate) const fn new(
        id: String,
        name: String,
        base_price: BTreeMap<Currency, f64>,
        sub_services: BTreeMap<String, SubService>,
    ) -> Self {
        Self {
            id,
            name,
            base_price,
            sub_services,
        }
    }

    /// Returns the category identifier (e.g. "development").
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base monthly rate for a currency, if priced.
    #[must_use]
    pub fn base_price(&self, currency: Currency) -> Option<f64> {
        self.base_price.get(&currency).copied()
    }

    /// Returns the base monthly rate for a currency.
    ///
    /// # Errors
    ///
    /// Returns [`RatecardError::UnsupportedCurrency`] if the category has no
    /// price in that currency.
    pub fn price_in(&self, currency: Currency) -> Result<f64, RatecardError> {
        self.base_price(currency)
            .ok_or_else(|| RatecardError::UnsupportedCurrency {
                category: self.id.clone(),
                currency,
            })
    }

    /// Returns the currencies this category is priced in.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.base_price.keys().copied()
    }

    /// Looks up a sub-service by ID (case-insensitive).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SubService> {
        self.sub_services.get(&id.to_lowercase())
    }

    /// Looks up a sub-service by ID (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`RatecardError::UnknownSubService`] if there is no such entry.
    pub fn sub_service(&self, id: &str) -> Result<&SubService, RatecardError> {
        self.get(id).ok_or_else(|| RatecardError::UnknownSubService {
            category: self.id.clone(),
            sub_service: id.to_string(),
        })
    }

    /// Returns the sub-services sorted by ID.
    pub fn sub_services(&self) -> impl Iterator<Item = &SubService> {
        self.sub_services.values()
    }

    /// Returns the number of sub-services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sub_services.len()
    }

    /// Returns true if the category has no sub-services.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sub_services.is_empty()
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
