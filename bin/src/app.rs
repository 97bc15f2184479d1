//! Shared state for command handlers.

use anyhow::{Context, Result};
use ratecard_lib::prelude::*;

use crate::config::Config;

/// Everything a command needs: the catalog to price against and the settings.
#[derive(Debug)]
pub(crate) struct App<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) config: Config,
    pub(crate) quiet: bool,
}

impl<'a> App<'a> {
    pub(crate) const fn new(catalog: &'a Catalog, config: Config, quiet: bool) -> Self {
        Self {
            catalog,
            config,
            quiet,
        }
    }

    pub(crate) const fn estimator(&self) -> Estimator<'a> {
        Estimator::new(self.catalog)
    }

    /// Open the quote book, creating its directory if needed.
    pub(crate) fn quotes(&self) -> Result<QuoteStore> {
        let dir = self.config.quotes_dir();
        QuoteStore::new(dir.clone())
            .with_context(|| format!("Failed to open quote book at {}", dir.display()))
    }
}
