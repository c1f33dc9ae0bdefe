//! Testing utilities for blazefs
//!
//! This crate provides the test doubles and fixtures used to exercise the
//! adapter without a real Backblaze account: a deterministic in-memory
//! [`B2Client`](blazefs::B2Client) implementation, a fault-injecting
//! wrapper for partial-failure scenarios, and seeding helpers.

pub mod faulty;
pub mod fixtures;
pub mod memory;

pub use faulty::FaultyClient;
pub use memory::InMemoryClient;

/// Initialize tracing for a test run, honoring `RUST_LOG`.
///
/// Safe to call from multiple tests; only the first call installs a
/// subscriber.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
