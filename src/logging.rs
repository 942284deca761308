//! Tracing subscriber setup for the binary.
//!
//! Diagnostics go to stderr so stdout stays reserved for converter output.

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `RUST_LOG` wins, then `--verbose`, then the
/// configured level.
pub fn filter_directive(verbose: bool, configured: &str) -> String {
    if let Ok(directive) = env::var("RUST_LOG") {
        if !directive.trim().is_empty() {
            return directive;
        }
    }
    if verbose {
        "debug".to_string()
    } else {
        configured.trim().to_lowercase()
    }
}

/// Installs the global subscriber. Safe to call once per process; a second
/// call reports the error instead of panicking.
pub fn init(verbose: bool, configured: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter_directive(verbose, configured))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
