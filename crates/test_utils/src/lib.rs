//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! self-dispatch portal test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data and sample vendor payloads
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators
//! - `mock_server`: Wiremock harness for the vendor HTTP endpoints

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod mock_server;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use mock_server::VendorMockServer;

use once_cell::sync::OnceCell;

static TRACING: OnceCell<()> = OnceCell::new();

/// Initializes a tracing subscriber for tests, once per process
///
/// Honors `RUST_LOG` when set; output goes through the test writer so it only
/// shows for failing tests.
pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
