//! Tracing/logging (shared setup).
//!
//! This workspace ships no binary; test suites own process setup and call
//! [`init`] before exercising the domain crates.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
