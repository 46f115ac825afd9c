//! Subscriber construction and installation.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

/// Install the process-wide subscriber: JSON lines, level taken from
/// `RUST_LOG` with `info` as the fallback.
///
/// Later calls find a subscriber already installed and do nothing, so any
/// test or entry point may call this without coordination.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(SystemTime);

    let _ = subscriber.try_init();
}
