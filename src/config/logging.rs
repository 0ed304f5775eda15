//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so table and chart output on
//! stdout stays clean for piping.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `city_budgeter=debug`
pub const LOG_ENV_VAR: &str = "CITY_BUDGETER_LOG";

/// Base log level for the given verbosity
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    // Environment variable wins over the flag
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Install the global stderr subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), "debug");
        assert_eq!(default_level(false), "warn");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
        tracing::debug!("still fine");
    }
}
