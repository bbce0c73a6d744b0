//! Common test utilities and helpers

pub mod fixtures;

/// Logging utilities for tests
pub mod logging {
    use tracing::{debug, info};

    /// Log test step
    pub fn log_test_step(step: &str) {
        info!("🧪 Test Step: {}", step);
    }

    /// Log test data
    pub fn log_test_data<T: std::fmt::Debug>(label: &str, data: &T) {
        debug!("📊 {}: {:?}", label, data);
    }
}
