//! Config file commands.

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::app::App;
use crate::config::Config;

/// Print the effective configuration.
pub(crate) fn show(app: &App<'_>) -> Result<()> {
    println!("{}", app.config);
    Ok(())
}

/// Print the config file location.
pub(crate) fn path(path: Option<&Path>) -> Result<()> {
    let path = path.context("No config directory on this platform; pass --config")?;
    println!("{}", path.display());
    Ok(())
}

/// Write a config file with the default values.
pub(crate) fn init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.context("No config directory on this platform; pass --config")?;
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
