//! CLI configuration file.
//!
//! Stored as JSON at the platform config directory (`~/.config/ratecard/config.json`
//! on Linux). Every field is optional; missing fields take their defaults.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use ratecard_lib::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Currency used when a command doesn't name one.
    pub(crate) default_currency: Currency,

    /// Complexity used when a command doesn't name one.
    pub(crate) default_complexity: Complexity,

    /// Catalog file to price against instead of the built-in one.
    pub(crate) catalog_path: Option<PathBuf>,

    /// Quote book directory override.
    pub(crate) quotes_dir: Option<PathBuf>,

    /// Log filter used when neither `RUST_LOG` nor `-v`/`-q` is given.
    pub(crate) log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: Currency::Inr,
            default_complexity: Complexity::Medium,
            catalog_path: None,
            quotes_dir: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Returns the default config file path, if the platform has a config directory.
    pub(crate) fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ratecard").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load the config from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the defaults. A missing
    /// file that was named explicitly is an error.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !explicit && !path.exists() {
            return Ok(Self::default());
        }

        Self::from_path(&path)
    }

    /// Read and parse a config file.
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub(crate) fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Quote book directory, configured or default.
    pub(crate) fn quotes_dir(&self) -> PathBuf {
        self.quotes_dir.clone().unwrap_or_else(QuoteStore::default_path)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let or_default = |p: &Option<PathBuf>, default: &str| {
            p.as_ref()
                .map_or_else(|| default.to_string(), |p| p.display().to_string())
        };

        writeln!(f, "Currency:    {}", self.default_currency)?;
        writeln!(f, "Complexity:  {}", self.default_complexity)?;
        writeln!(f, "Catalog:     {}", or_default(&self.catalog_path, "(built-in)"))?;
        writeln!(f, "Quotes dir:  {}", self.quotes_dir().display())?;
        write!(
            f,
            "Log level:   {}",
            self.log_level.as_deref().unwrap_or("(default)")
        )
    }
}
