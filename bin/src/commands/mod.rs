//! CLI command implementations.

pub(crate) mod config;
pub(crate) mod estimate;
pub(crate) mod info;
pub(crate) mod interactive;
pub(crate) mod list;
pub(crate) mod quotes;
