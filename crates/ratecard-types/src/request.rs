//! Estimate request and its range-checked inputs.

use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::{Complexity, Currency, RangeError};

/// Project duration in whole months, between 1 and 12 inclusive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, Into,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct DurationMonths(u32);

impl DurationMonths {
    /// Shortest accepted duration.
    pub const MIN: u32 = 1;
    /// Longest accepted duration.
    pub const MAX: u32 = 12;

    /// Creates a duration, validating the range.
    ///
    /// # Errors
    ///
    /// Returns an error if `months` is outside 1-12.
    pub const fn new(months: u32) -> Result<Self, RangeError> {
        if months < Self::MIN || months > Self::MAX {
            return Err(RangeError::Duration {
                value: months,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(months))
    }

    /// Returns the number of months.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns every valid duration, shortest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u32> for DurationMonths {
    type Error = RangeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Number of people on the project team, between 1 and 10 inclusive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, Into,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct TeamSize(u32);

impl TeamSize {
    /// Smallest accepted team.
    pub const MIN: u32 = 1;
    /// Largest accepted team.
    pub const MAX: u32 = 10;

    /// Creates a team size, validating the range.
    ///
    /// # Errors
    ///
    /// Returns an error if `people` is outside 1-10.
    pub const fn new(people: u32) -> Result<Self, RangeError> {
        if people < Self::MIN || people > Self::MAX {
            return Err(RangeError::TeamSize {
                value: people,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(people))
    }

    /// Returns the number of people.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for TeamSize {
    type Error = RangeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The inputs of a single price estimate.
///
/// Numeric inputs are range-checked on construction; the category,
/// sub-service and currency are resolved against the catalog when the
/// estimate is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Service category identifier (e.g. "development").
    pub category: String,
    /// Sub-service identifier within the category (e.g. "web-development").
    pub sub_service: String,
    /// Complexity tier.
    pub complexity: Complexity,
    /// Project duration.
    pub duration: DurationMonths,
    /// Team size.
    pub team_size: TeamSize,
    /// Currency to price in.
    pub currency: Currency,
}

impl EstimateRequest {
    /// Creates a request from already validated inputs.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        sub_service: impl Into<String>,
        complexity: Complexity,
        duration: DurationMonths,
        team_size: TeamSize,
        currency: Currency,
    ) -> Self {
        Self {
            category: category.into(),
            sub_service: sub_service.into(),
            complexity,
            duration,
            team_size,
            currency,
        }
    }

    /// Creates a request from raw numeric inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration or team size is out of range.
    pub fn from_raw(
        category: impl Into<String>,
        sub_service: impl Into<String>,
        complexity: Complexity,
        duration_months: u32,
        team_size: u32,
        currency: Currency,
    ) -> Result<Self, RangeError> {
        Ok(Self::new(
            category,
            sub_service,
            complexity,
            DurationMonths::new(duration_months)?,
            TeamSize::new(team_size)?,
            currency,
        ))
    }

    /// Returns a copy of the request with a different duration.
    #[must_use]
    pub fn with_duration(&self, duration: DurationMonths) -> Self {
        Self {
            duration,
            ..self.clone()
        }
    }

    /// Returns a copy of the request with a different complexity tier.
    #[must_use]
    pub fn with_complexity(&self, complexity: Complexity) -> Self {
        Self {
            complexity,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for EstimateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({}, {} months, team of {}, {})",
            self.category,
            self.sub_service,
            self.complexity,
            self.duration,
            self.team_size,
            self.currency
        )
    }
}
