//! Logging setup
//!
//! Installs the global tracing subscriber for binaries embedding the core.

use tracing_subscriber::EnvFilter;

/// Initialize the global fmt subscriber.
///
/// Honors `RUST_LOG`; falls back to `info`. Call once per process.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}
