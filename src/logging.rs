//! Logging setup for embedding shells.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber, honoring `RUST_LOG` and
/// defaulting to `info` for this crate. Safe to call once per process;
/// repeated calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("flowboard=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
