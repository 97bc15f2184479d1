//! Saved quote storage for ratecard.
//!
//! - [`QuoteId`] - Unique identifier for a saved quote
//! - [`Quote`] - An estimate with a timestamp and optional label
//! - [`QuoteStore`] - Persistent quote storage and retrieval

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratecard/ratecard/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod quote;
mod store;

pub use quote::{Quote, QuoteId};
pub use store::{QuoteError, QuoteStore, Result};
