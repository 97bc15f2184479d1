//! Project cost estimation for ratecard.
//!
//! - [`Estimator`] - Computes estimates against a [`Catalog`](ratecard_catalog::Catalog)
//! - [`Estimate`] - Rounded totals, echoed inputs and feature list
//! - [`CostBreakdown`] - Every intermediate quantity of the calculation
//! - [`pricing`] - The fixed factors and thresholds of the pricing formula

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratecard/ratecard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
pub mod pricing;

pub use estimator::{CostBreakdown, Estimate, Estimator};
