//! Shared test utilities and fixtures for logtune integration tests.

pub use logtune_core::domain::{Component, ComponentSetting, LogLevel, LogProfile, SeverityMap};

pub use mocks::ScriptedProfileStore;

/// Gauge polling utilities
pub mod gauge {
    use std::time::Duration;

    use logtune_core::VerbosityGauge;

    /// Poll a gauge until it reads `expected` or the timeout elapses.
    /// Returns whether the value was observed.
    pub async fn wait_for_threshold(
        gauge: &VerbosityGauge,
        expected: u32,
        timeout: Duration,
    ) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if gauge.get() == expected {
                return true;
            }
            if tokio::time::Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Assert that the gauge keeps its current value for `window`.
    pub async fn assert_stays_at(gauge: &VerbosityGauge, expected: u32, window: Duration) {
        let deadline = tokio::time::Instant::now() + window;
        while tokio::time::Instant::now() < deadline {
            assert_eq!(gauge.get(), expected, "gauge moved away from {}", expected);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

/// Test fixture utilities
pub mod fixtures {
    use logtune_core::{Component, LogLevel, LogProfile};

    /// Build a profile record from (namespace, identifier, level) triples,
    /// preserving the given order.
    pub fn profile(entries: &[(&str, &str, LogLevel)]) -> LogProfile {
        let mut profile = LogProfile::default();
        for (namespace, identifier, level) in entries {
            profile
                .settings
                .push(logtune_core::ComponentSetting {
                    component: Component::new(*namespace, *identifier),
                    level: *level,
                });
        }
        profile
    }

    /// Encode a profile the way stores put it on the wire.
    pub fn payload(profile: &LogProfile) -> Vec<u8> {
        serde_json::to_vec(profile).expect("profile encodes")
    }
}

/// Async test helpers
pub mod async_helpers {
    use std::time::Duration;

    use tokio::time::timeout;

    /// Run an async operation with a timeout
    pub async fn with_timeout<F, T>(duration: Duration, f: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        timeout(duration, f).await.expect("Operation timed out")
    }

    /// Default test timeout (5 seconds)
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
}
