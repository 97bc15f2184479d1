//! Service catalog for the ratecard price estimator.
//!
//! This crate provides the static pricing table that estimates are computed
//! against, validated eagerly when it is loaded.
//!
//! # Example
//!
//! ```
//! use ratecard_catalog::Catalog;
//! use ratecard_types::{Complexity, Currency};
//!
//! let catalog = Catalog::global();
//!
//! let (category, sub_service) = catalog.resolve("development", "web-development").unwrap();
//! assert_eq!(category.base_price(Currency::Inr), Some(25000.0));
//! assert_eq!(sub_service.multiplier(Complexity::Medium), 4.0);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratecard/ratecard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod error;
mod model;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use model::{PriceMultiplier, ServiceCategory, SubService};
