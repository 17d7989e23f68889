//! Halo Testkit - fakes and fixtures for resolver tests
//!
//! Provides [`FakeEnvironment`], a programmable in-memory implementation of
//! every oracle the resolver consults, plus fixture helpers shared by unit
//! and integration tests.

#![forbid(unsafe_code)]

/// Programmable fake oracle environment
pub mod env;

/// Common sensor and request fixtures
pub mod fixtures;

pub use env::FakeEnvironment;

/// Install a compact tracing subscriber for tests.
///
/// Honors `RUST_LOG`; safe to call from every test, only the first call
/// installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
