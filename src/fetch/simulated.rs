//! Simulated user backend.

use std::time::Duration;

use rand::Rng;

use crate::config::FetchConfig;
use crate::fetch::types::{FetchError, User};

/// Stand-in for a network call: waits `delay`, then succeeds with
/// probability `success_ratio`.
#[derive(Debug, Clone)]
pub struct SimulatedFetch {
    delay: Duration,
    success_ratio: f64,
}

impl SimulatedFetch {
    pub fn new(delay: Duration, success_ratio: f64) -> Self {
        let success_ratio = if success_ratio.is_nan() {
            0.0
        } else {
            success_ratio.clamp(0.0, 1.0)
        };
        Self {
            delay,
            success_ratio,
        }
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms), config.success_ratio)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn success_ratio(&self) -> f64 {
        self.success_ratio
    }

    /// Resolve exactly once, after the configured delay.
    pub async fn fetch_user(&self) -> Result<User, FetchError> {
        tokio::time::sleep(self.delay).await;

        let succeeded = rand::thread_rng().gen_bool(self.success_ratio);
        if succeeded {
            tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Simulated fetch succeeded");
            Ok(User {
                id: 1,
                name: "John Doe".to_string(),
            })
        } else {
            tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Simulated fetch failed");
            Err(FetchError::new("Failed to fetch user data"))
        }
    }
}
