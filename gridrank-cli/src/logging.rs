//! stderr diagnostics.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `--verbose` wins over `RUST_LOG`, which wins over the configured filter.
pub fn init(verbose: bool, configured: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
