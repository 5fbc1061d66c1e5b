//! Tracing initialization for hosts and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from `RUST_LOG`, defaulting to
/// `info`. Safe to call repeatedly; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
