//! Complexity tier definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Project complexity tier.
///
/// Each sub-service carries one price multiplier per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Simple scope, standard components.
    Low,
    /// Typical custom project.
    #[default]
    Medium,
    /// Large or highly bespoke project.
    High,
}

impl Complexity {
    /// Returns the tier as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the display label for the tier.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Returns all tiers, cheapest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = ComplexityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ComplexityParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid complexity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityParseError(String);

impl std::fmt::Display for ComplexityParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid complexity '{}', expected one of: low, medium, high",
            self.0
        )
    }
}

impl std::error::Error for ComplexityParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_parse() {
        assert_eq!("low".parse::<Complexity>().unwrap(), Complexity::Low);
        assert_eq!("MEDIUM".parse::<Complexity>().unwrap(), Complexity::Medium);
        assert_eq!(" High ".parse::<Complexity>().unwrap(), Complexity::High);
        assert!("extreme".parse::<Complexity>().is_err());
        assert!("".parse::<Complexity>().is_err());
    }

    #[test]
    fn test_complexity_serde() {
        let json = serde_json::to_string(&Complexity::High).unwrap();
        assert_eq!(json, "\"high\"");
        assert!(serde_json::from_str::<Complexity>("\"ultra\"").is_err());
    }
}
