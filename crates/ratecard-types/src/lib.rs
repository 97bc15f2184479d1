//! Core types for the ratecard price estimator.
//!
//! This crate provides the fundamental data structures used throughout ratecard:
//!
//! - [`Complexity`] - Complexity tier selecting a price multiplier
//! - [`Currency`] - Supported currency codes
//! - [`DurationMonths`] - Project duration, range-checked to 1-12 months
//! - [`TeamSize`] - Team size, range-checked to 1-10 people
//! - [`EstimateRequest`] - The five inputs of a single estimate

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratecard/ratecard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod complexity;
mod currency;
mod error;
mod request;

pub use complexity::{Complexity, ComplexityParseError};
pub use currency::{Currency, CurrencyParseError};
pub use error::{RangeError, RatecardError, Result};
pub use request::{DurationMonths, EstimateRequest, TeamSize};
