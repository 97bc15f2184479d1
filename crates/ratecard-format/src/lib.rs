//! Output formatters for ratecard estimates.
//!
//! - [`TextFormatter`] - Cost breakdown with features and pricing notes
//! - [`JsonFormatter`] - JSON array or newline-delimited JSON
//! - [`CsvFormatter`] - One row per estimate
//! - [`format_amount`] - Currency-formatted whole amounts

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratecard/ratecard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod money;
mod text;

pub use csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use money::{format_amount, group_digits};
pub use text::{TextFormatter, notes};
