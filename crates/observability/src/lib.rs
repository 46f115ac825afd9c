//! Shared tracing/logging setup.
//!
//! Domain crates emit nothing themselves; whoever drives them (tests, a
//! future binary) calls [`init`] once and gets structured logs.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    setup::init();
}

/// Subscriber configuration (filters, format).
pub mod setup;
