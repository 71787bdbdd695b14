pub mod mock_backend;

pub use mock_backend::{spawn_mock_backend, MockBackend, VALID_TOKEN};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
