//! Tracing setup for hosts that do not install their own subscriber.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber with an env-driven filter.
///
/// Respects `RUST_LOG`, defaulting to `info`. Calling this when the host has
/// already installed a subscriber is a no-op, so embedding code can call it
/// unconditionally.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
