//! Logging init: diagnostics go to stderr, stdout carries the document.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "warn";

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` overrides the default `warn` filter (e.g. `abpsum_core=debug`).
/// It only filters these stderr diagnostics; the transform and stdout never
/// depend on it.
/// Returns Err if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!("abpsum logging initialized");
    Ok(())
}
