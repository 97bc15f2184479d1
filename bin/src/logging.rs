//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Pick the log filter directive for the given flags.
///
/// `-q` wins over `-v`. Without either flag the configured level applies,
/// falling back to `warn`.
pub(crate) fn level(verbose: u8, quiet: bool, configured: Option<&str>) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => configured.unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the flags when set.
pub(crate) fn init(verbose: u8, quiet: bool, configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level(verbose, quiet, configured)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
