//! Benchmark fixtures for ratecard.

use ratecard_lib::prelude::*;

/// The embedded catalog source, for parse benchmarks.
pub const CATALOG_JSON: &str = include_str!("../../crates/ratecard-catalog/data/catalog.json");

/// Builds a request for every sub-service, tier and duration the catalog can price.
///
/// Every request uses a team of three and the first currency each category is
/// priced in.
pub fn request_grid(catalog: &Catalog) -> Vec<EstimateRequest> {
    let team = TeamSize::new(3).expect("3 is a valid team size");
    let mut requests = Vec::new();

    for category in catalog.categories() {
        let Some(currency) = category.currencies().next() else {
            continue;
        };
        for sub in category.sub_services() {
            for &complexity in Complexity::all() {
                for duration in DurationMonths::all() {
                    requests.push(EstimateRequest::new(
                        category.id(),
                        sub.id(),
                        complexity,
                        duration,
                        team,
                        currency,
                    ));
                }
            }
        }
    }

    requests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_catalog() {
        let catalog = Catalog::global();
        let grid = request_grid(catalog);
        assert_eq!(grid.len(), catalog.sub_service_count() * 3 * 12);

        let estimator = Estimator::new(catalog);
        assert!(grid.iter().all(|r| estimator.estimate(r).is_ok()));
    }

    #[test]
    fn test_embedded_source_parses() {
        assert_eq!(&Catalog::from_json(CATALOG_JSON).unwrap(), Catalog::global());
    }
}
