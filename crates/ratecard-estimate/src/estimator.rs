//! Price estimation logic.

use ratecard_catalog::Catalog;
use ratecard_types::{
    Complexity, Currency, DurationMonths, EstimateRequest, RatecardError, Result, TeamSize,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pricing::{
    EXTRAS_MULTIPLIER, INFRASTRUCTURE_RATE, MAINTENANCE_RATE, duration_factor, round_amount,
    scale_factor,
};

/// Every intermediate quantity of one estimate, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Category base price in the requested currency.
    pub base_price: f64,
    /// Sub-service multiplier for the requested tier.
    pub complexity_multiplier: f64,
    /// 1.0, or 1.5 for large teams.
    pub scale_factor: f64,
    /// 1.0, or 0.85 for long projects.
    pub duration_factor: f64,
    /// Monthly rate before rounding.
    pub monthly_rate: f64,
    /// Monthly rate times duration.
    pub total_before_extras: f64,
    /// Maintenance share of the pre-extras total.
    pub maintenance_cost: f64,
    /// Infrastructure share of the pre-extras total.
    pub infrastructure_cost: f64,
    /// Total cost before rounding.
    pub total_cost: f64,
}

/// A computed price estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Category identifier.
    pub category: String,
    /// Category display label.
    pub category_name: String,
    /// Sub-service identifier.
    pub sub_service: String,
    /// Sub-service display label.
    pub sub_service_name: String,
    /// Complexity tier.
    pub complexity: Complexity,
    /// Project duration.
    pub duration: DurationMonths,
    /// Team size.
    pub team_size: TeamSize,
    /// Currency of all amounts.
    pub currency: Currency,
    /// Monthly rate rounded to whole currency units.
    pub monthly_rate: u64,
    /// Total project cost rounded to whole currency units.
    pub total_cost: u64,
    /// Sub-service features in catalog order.
    pub features: Vec<String>,
    /// Unrounded calculation steps.
    pub breakdown: CostBreakdown,
}

impl Estimate {
    /// Returns true if the long-project discount was applied.
    #[must_use]
    pub fn discount_applied(&self) -> bool {
        self.breakdown.duration_factor < 1.0
    }

    /// Returns true if the large-team surcharge was applied.
    #[must_use]
    pub fn surcharge_applied(&self) -> bool {
        self.breakdown.scale_factor > 1.0
    }

    /// Rebuilds the request this estimate answers.
    #[must_use]
    pub fn request(&self) -> EstimateRequest {
        EstimateRequest::new(
            self.category.clone(),
            self.sub_service.clone(),
            self.complexity,
            self.duration,
            self.team_size,
            self.currency,
        )
    }
}

/// Project price estimator over a catalog.
///
/// The estimator only reads the catalog, so one instance can serve any
/// number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Estimator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Estimator<'a> {
    /// Creates an estimator over the given catalog.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this estimator prices against.
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Computes an estimate.
    ///
    /// # Errors
    ///
    /// Returns an error if the category, sub-service or currency does not
    /// resolve in the catalog. Nothing is computed in that case.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<Estimate> {
        let (category, sub_service) = self
            .catalog
            .resolve(&request.category, &request.sub_service)?;
        let base_price = category.price_in(request.currency)?;
        let complexity_multiplier = sub_service.multiplier(request.complexity);

        let scale_factor = scale_factor(request.team_size);
        let duration_factor = duration_factor(request.duration);

        let monthly_rate = base_price * complexity_multiplier * scale_factor * duration_factor;
        let total_before_extras = monthly_rate * f64::from(request.duration.get());
        let maintenance_cost = total_before_extras * MAINTENANCE_RATE;
        let infrastructure_cost = total_before_extras * INFRASTRUCTURE_RATE;
        let total_cost = total_before_extras * EXTRAS_MULTIPLIER;

        let rounded = |amount: f64, what: &'static str| {
            round_amount(amount).ok_or_else(|| RatecardError::AmountOverflow {
                category: category.id().to_string(),
                sub_service: sub_service.id().to_string(),
                what,
            })
        };
        let rounded_monthly_rate = rounded(monthly_rate, "monthly rate")?;
        let rounded_total_cost = rounded(total_cost, "total cost")?;

        let estimate = Estimate {
            category: category.id().to_string(),
            category_name: category.name().to_string(),
            sub_service: sub_service.id().to_string(),
            sub_service_name: sub_service.name().to_string(),
            complexity: request.complexity,
            duration: request.duration,
            team_size: request.team_size,
            currency: request.currency,
            monthly_rate: rounded_monthly_rate,
            total_cost: rounded_total_cost,
            features: sub_service.features().to_vec(),
            breakdown: CostBreakdown {
                base_price,
                complexity_multiplier,
                scale_factor,
                duration_factor,
                monthly_rate,
                total_before_extras,
                maintenance_cost,
                infrastructure_cost,
                total_cost,
            },
        };

        debug!(
            request = %request,
            monthly_rate = estimate.monthly_rate,
            total_cost = estimate.total_cost,
            "estimate computed"
        );

        Ok(estimate)
    }

    /// Computes an estimate from unvalidated inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if any input is out of range or does not resolve.
    pub fn estimate_raw(
        &self,
        category: &str,
        sub_service: &str,
        complexity: &str,
        duration_months: u32,
        team_size: u32,
        currency: &str,
    ) -> Result<Estimate> {
        let complexity: Complexity = complexity.parse()?;
        let currency: Currency = currency.parse()?;
        let request = EstimateRequest::from_raw(
            category,
            sub_service,
            complexity,
            duration_months,
            team_size,
            currency,
        )
        .map_err(RatecardError::from)?;
        self.estimate(&request)
    }

    /// Estimates the request for every valid duration, shortest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request does not resolve.
    pub fn estimate_durations(&self, request: &EstimateRequest) -> Result<Vec<Estimate>> {
        DurationMonths::all()
            .map(|duration| self.estimate(&request.with_duration(duration)))
            .collect()
    }

    /// Estimates the request for every complexity tier, cheapest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request does not resolve.
    pub fn estimate_tiers(&self, request: &EstimateRequest) -> Result<Vec<Estimate>> {
        Complexity::all()
            .iter()
            .map(|&complexity| self.estimate(&request.with_complexity(complexity)))
            .collect()
    }
}

impl Estimator<'static> {
    /// Returns an estimator over the global embedded catalog.
    #[must_use]
    pub fn global() -> Self {
        Self::new(Catalog::global())
    }
}

impl Default for Estimator<'static> {
    fn default() -> Self {
        Self::global()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn web_request(duration: u32, team: u32) -> EstimateRequest {
        EstimateRequest::from_raw(
            "development",
            "web-development",
            Complexity::Medium,
            duration,
            team,
            Currency::Inr,
        )
        .unwrap()
    }

    #[test]
    fn test_baseline_scenario() {
        let estimate = Estimator::global().estimate(&web_request(3, 3)).unwrap();

        assert_eq!(estimate.breakdown.base_price, 25000.0);
        assert_eq!(estimate.breakdown.complexity_multiplier, 4.0);
        assert_eq!(estimate.breakdown.scale_factor, 1.0);
        assert_eq!(estimate.breakdown.duration_factor, 1.0);
        assert_eq!(estimate.monthly_rate, 100_000);
        assert_relative_eq!(estimate.breakdown.total_before_extras, 300_000.0);
        assert_relative_eq!(
            estimate.breakdown.maintenance_cost,
            45_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            estimate.breakdown.infrastructure_cost,
            30_000.0,
            max_relative = 1e-12
        );
        assert_eq!(estimate.total_cost, 375_000);
        assert!(!estimate.discount_applied());
        assert!(!estimate.surcharge_applied());
    }

    #[test]
    fn test_long_project_scenario() {
        let estimate = Estimator::global().estimate(&web_request(6, 3)).unwrap();

        assert_eq!(estimate.breakdown.duration_factor, 0.85);
        assert_eq!(estimate.monthly_rate, 85_000);
        assert_relative_eq!(
            estimate.breakdown.total_before_extras,
            510_000.0,
            max_relative = 1e-12
        );
        assert_eq!(estimate.total_cost, 637_500);
        assert!(estimate.discount_applied());
    }

    #[test]
    fn test_large_team_scenario() {
        let estimate = Estimator::global().estimate(&web_request(3, 8)).unwrap();

        assert_eq!(estimate.breakdown.scale_factor, 1.5);
        assert_eq!(estimate.monthly_rate, 150_000);
        assert_relative_eq!(estimate.breakdown.total_before_extras, 450_000.0);
        assert_eq!(estimate.total_cost, 562_500);
        assert!(estimate.surcharge_applied());
    }

    #[test]
    fn test_echoes_inputs_and_features() {
        let catalog = Catalog::global();
        let estimate = Estimator::new(catalog).estimate(&web_request(2, 4)).unwrap();
        let (_, sub_service) = catalog.resolve("development", "web-development").unwrap();

        assert_eq!(estimate.complexity, Complexity::Medium);
        assert_eq!(estimate.duration.get(), 2);
        assert_eq!(estimate.team_size.get(), 4);
        assert_eq!(estimate.features, sub_service.features());
        assert_eq!(estimate.sub_service_name, "Web Development");
        assert_eq!(estimate.request(), web_request(2, 4));
    }

    #[test]
    fn test_duration_boundary() {
        let estimator = Estimator::global();
        let rates: Vec<f64> = (1..=4)
            .map(|d| {
                estimator
                    .estimate(&web_request(d, 3))
                    .unwrap()
                    .breakdown
                    .monthly_rate
            })
            .collect();

        assert_eq!(rates[0], rates[1]);
        assert_eq!(rates[1], rates[2]);
        assert_relative_eq!(rates[3] / rates[2], 0.85, max_relative = 1e-12);
    }

    #[test]
    fn test_team_size_boundary() {
        let estimator = Estimator::global();
        let rates: Vec<f64> = (1..=6)
            .map(|t| {
                estimator
                    .estimate(&web_request(2, t))
                    .unwrap()
                    .breakdown
                    .monthly_rate
            })
            .collect();

        assert!(rates[..5].iter().all(|&r| r == rates[0]));
        assert_relative_eq!(rates[5] / rates[4], 1.5, max_relative = 1e-12);

        let ten = estimator.estimate(&web_request(2, 10)).unwrap();
        assert_eq!(ten.breakdown.monthly_rate, rates[5]);
    }

    #[test]
    fn test_total_matches_rate_for_whole_catalog() {
        let catalog = Catalog::global();
        let estimator = Estimator::new(catalog);

        for category in catalog.categories() {
            for sub_service in category.sub_services() {
                for currency in category.currencies() {
                    for &complexity in Complexity::all() {
                        for duration in DurationMonths::all() {
                            for team in [1, 5, 6, 10] {
                                let request = EstimateRequest::new(
                                    category.id(),
                                    sub_service.id(),
                                    complexity,
                                    duration,
                                    TeamSize::new(team).unwrap(),
                                    currency,
                                );
                                let estimate = estimator.estimate(&request).unwrap();
                                let expected = round_amount(
                                    estimate.breakdown.monthly_rate
                                        * f64::from(duration.get())
                                        * 1.25,
                                );
                                assert_eq!(Some(estimate.total_cost), expected, "{request}");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_monthly_rate_proportional_to_base_price() {
        let catalog_json = |base: u32| {
            format!(
                r#"{{"categories": {{"development": {{
                    "basePrice": {{"inr": {base}}},
                    "subServices": {{"web-development": {{
                        "name": "Web Development",
                        "priceMultiplier": {{"low": 2.0, "medium": 4.0, "high": 6.0}}
                    }}}}
                }}}}}}"#
            )
        };
        let single = Catalog::from_json(&catalog_json(25_000)).unwrap();
        let double = Catalog::from_json(&catalog_json(50_000)).unwrap();

        for (duration, team) in [(3, 3), (6, 3), (3, 8), (12, 10)] {
            let request = web_request(duration, team);
            let a = Estimator::new(&single).estimate(&request).unwrap();
            let b = Estimator::new(&double).estimate(&request).unwrap();
            assert_relative_eq!(b.breakdown.monthly_rate, 2.0 * a.breakdown.monthly_rate);
            assert!(b.monthly_rate.abs_diff(2 * a.monthly_rate) <= 1);
        }
    }

    #[test]
    fn test_unknown_references_reject() {
        let estimator = Estimator::global();

        let mut request = web_request(3, 3);
        request.category = "gardening".to_string();
        assert_eq!(
            estimator.estimate(&request).unwrap_err(),
            RatecardError::UnknownCategory("gardening".to_string())
        );

        let mut request = web_request(3, 3);
        request.sub_service = "blockchain".to_string();
        assert!(matches!(
            estimator.estimate(&request),
            Err(RatecardError::UnknownSubService { .. })
        ));

        let request = EstimateRequest::from_raw(
            "marketing",
            "seo",
            Complexity::Low,
            3,
            3,
            Currency::Gbp,
        )
        .unwrap();
        assert!(matches!(
            estimator.estimate(&request),
            Err(RatecardError::UnsupportedCurrency { .. })
        ));
    }

    #[test]
    fn test_oversized_amounts_reject() {
        let catalog = Catalog::from_json(
            r#"{"categories": {"development": {
                "basePrice": {"inr": 1e300},
                "subServices": {"web-development": {
                    "name": "Web Development",
                    "priceMultiplier": {"low": 1.0, "medium": 1e10, "high": 2e10}
                }}
            }}}"#,
        )
        .unwrap();
        let estimator = Estimator::new(&catalog);

        assert_eq!(
            estimator.estimate(&web_request(3, 3)).unwrap_err(),
            RatecardError::AmountOverflow {
                category: "development".to_string(),
                sub_service: "web-development".to_string(),
                what: "monthly rate",
            }
        );

        // Monthly rate fits, total does not.
        let catalog = Catalog::from_json(
            r#"{"categories": {"development": {
                "basePrice": {"inr": 6e18},
                "subServices": {"web-development": {
                    "name": "Web Development",
                    "priceMultiplier": {"low": 1.0, "medium": 1.0, "high": 1.0}
                }}
            }}}"#,
        )
        .unwrap();
        assert!(matches!(
            Estimator::new(&catalog).estimate(&web_request(3, 3)),
            Err(RatecardError::AmountOverflow { what: "total cost", .. })
        ));
    }

    #[test]
    fn test_estimate_raw_validates_everything() {
        let estimator = Estimator::global();

        let ok = estimator
            .estimate_raw("development", "web-development", "medium", 3, 3, "inr")
            .unwrap();
        assert_eq!(ok.total_cost, 375_000);

        assert!(matches!(
            estimator.estimate_raw("development", "web-development", "extreme", 3, 3, "inr"),
            Err(RatecardError::Complexity(_))
        ));
        assert!(matches!(
            estimator.estimate_raw("development", "web-development", "low", 3, 3, "jpy"),
            Err(RatecardError::Currency(_))
        ));
        assert!(matches!(
            estimator.estimate_raw("development", "web-development", "low", 0, 3, "inr"),
            Err(RatecardError::Range(_))
        ));
        assert!(matches!(
            estimator.estimate_raw("development", "web-development", "low", 3, 11, "inr"),
            Err(RatecardError::Range(_))
        ));
    }

    #[test]
    fn test_estimate_tables() {
        let estimator = Estimator::global();
        let request = web_request(3, 3);

        let by_duration = estimator.estimate_durations(&request).unwrap();
        assert_eq!(by_duration.len(), 12);
        assert_eq!(by_duration[2].total_cost, 375_000);
        assert_eq!(by_duration[5].total_cost, 637_500);

        let by_tier = estimator.estimate_tiers(&request).unwrap();
        assert_eq!(by_tier.len(), 3);
        assert!(by_tier[0].total_cost < by_tier[1].total_cost);
        assert!(by_tier[1].total_cost < by_tier[2].total_cost);
    }

    #[test]
    fn test_repeatable() {
        let estimator = Estimator::global();
        let request = web_request(7, 6);
        assert_eq!(
            estimator.estimate(&request).unwrap(),
            estimator.estimate(&request).unwrap()
        );
    }

    #[test]
    fn test_estimate_serializes_lowercase_enums() {
        let estimate = Estimator::global().estimate(&web_request(3, 3)).unwrap();
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json["complexity"], "medium");
        assert_eq!(json["currency"], "inr");
        assert_eq!(json["total_cost"], 375_000);
        assert_eq!(json["duration"], 3);
    }
}
