//! Catalog loading, validation and lookup.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::OnceLock;

use ratecard_types::{Currency, RatecardError};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::CatalogError;
use crate::model::{PriceMultiplier, ServiceCategory, SubService};

/// The default catalog embedded at compile time.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Global catalog instance.
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Raw JSON structure for deserialization.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(deserialize_with = "map_entries")]
    categories: Vec<(String, RawCategory)>,
}

/// Raw category from JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawCategory {
    #[serde(default)]
    name: Option<String>,
    #[serde(deserialize_with = "map_entries")]
    base_price: Vec<(String, f64)>,
    #[serde(deserialize_with = "map_entries")]
    sub_services: Vec<(String, RawSubService)>,
}

/// Raw sub-service from JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawSubService {
    name: String,
    price_multiplier: PriceMultiplier,
    #[serde(default)]
    features: Vec<String>,
}

/// Reads a JSON object as its entries in document order.
///
/// Repeated keys are kept so validation can reject them instead of letting
/// the last one win.
fn map_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

/// Immutable table of service categories, validated on load.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: BTreeMap<String, ServiceCategory>,
}

impl Catalog {
    /// Returns the global catalog built from the embedded data.
    ///
    /// The catalog is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(|| {
            Self::from_json(CATALOG_JSON).expect("embedded catalog.json should be valid")
        })
    }

    /// Parses and validates a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the catalog schema or any
    /// entry fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let mut categories = BTreeMap::new();
        for (id, raw_category) in raw.categories {
            let category = validate_category(&id, raw_category)?;
            let key = category.id().to_string();
            if categories.insert(key.clone(), category).is_some() {
                return Err(CatalogError::Duplicate(key));
            }
        }

        let catalog = Self { categories };
        debug!(
            categories = catalog.len(),
            sub_services = catalog.sub_service_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Reads, parses and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the catalog is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "reading catalog file");
        Self::from_json(&json)
    }

    /// Looks up a category by ID (case-insensitive).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ServiceCategory> {
        self.categories.get(&id.to_lowercase())
    }

    /// Looks up a category by ID (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`RatecardError::UnknownCategory`] if there is no such entry.
    pub fn category(&self, id: &str) -> Result<&ServiceCategory, RatecardError> {
        self.get(id)
            .ok_or_else(|| RatecardError::UnknownCategory(id.to_string()))
    }

    /// Resolves a category and one of its sub-services.
    ///
    /// # Errors
    ///
    /// Returns an error naming whichever reference does not resolve.
    pub fn resolve(
        &self,
        category: &str,
        sub_service: &str,
    ) -> Result<(&ServiceCategory, &SubService), RatecardError> {
        let category = self.category(category)?;
        let sub_service = category.sub_service(sub_service)?;
        Ok((category, sub_service))
    }

    /// Returns all categories sorted by ID.
    pub fn categories(&self) -> impl Iterator<Item = &ServiceCategory> {
        self.categories.values()
    }

    /// Returns all category IDs sorted alphabetically.
    pub fn ids(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns the number of sub-services across all categories.
    #[must_use]
    pub fn sub_service_count(&self) -> usize {
        self.categories.values().map(ServiceCategory::len).sum()
    }

    /// Searches sub-services by ID or name (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<(&ServiceCategory, &SubService)> {
        self.categories
            .values()
            .flat_map(|c| c.sub_services().map(move |s| (c, s)))
            .filter(|(_, s)| s.matches(pattern))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::global().clone()
    }
}

/// Converts a raw category, rejecting malformed entries.
fn validate_category(id: &str, raw: RawCategory) -> Result<ServiceCategory, CatalogError> {
    let id = normalize_id(id, id, "category id")?;

    let mut base_price = BTreeMap::new();
    for (code, value) in raw.base_price {
        let currency: Currency = code.parse().map_err(|_| CatalogError::UnknownCurrency {
            category: id.clone(),
            code: code.clone(),
        })?;
        if !(value.is_finite() && value > 0.0) {
            return Err(CatalogError::InvalidBasePrice {
                category: id,
                currency: code,
                value,
            });
        }
        if base_price.insert(currency, value).is_some() {
            return Err(CatalogError::Duplicate(format!("{id}/{code}")));
        }
    }
    if base_price.is_empty() {
        return Err(CatalogError::NoBasePrice(id));
    }

    let mut sub_services = BTreeMap::new();
    for (sub_id, raw_sub) in raw.sub_services {
        let sub_id = normalize_id(&sub_id, &id, "sub-service id")?;
        if raw_sub.name.trim().is_empty() {
            return Err(CatalogError::BlankField {
                category: id,
                what: "sub-service name",
            });
        }
        if let Some((complexity, value)) = raw_sub.price_multiplier.first_invalid() {
            return Err(CatalogError::InvalidMultiplier {
                category: id,
                sub_service: sub_id,
                complexity,
                value,
            });
        }
        let sub_service = SubService::new(
            sub_id.clone(),
            raw_sub.name,
            raw_sub.price_multiplier,
            raw_sub.features,
        );
        if sub_services.insert(sub_id.clone(), sub_service).is_some() {
            return Err(CatalogError::Duplicate(format!("{id}/{sub_id}")));
        }
    }
    if sub_services.is_empty() {
        return Err(CatalogError::NoSubServices(id));
    }

    let name = raw
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| id.clone());

    Ok(ServiceCategory::new(id, name, base_price, sub_services))
}

/// Lowercases an identifier, rejecting blank ones.
fn normalize_id(id: &str, category: &str, what: &'static str) -> Result<String, CatalogError> {
    let id = id.trim().to_lowercase();
    if id.is_empty() {
        return Err(CatalogError::BlankField {
            category: category.to_string(),
            what,
        });
    }
    Ok(id)
}
