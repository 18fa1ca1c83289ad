//! Configuration validation.
//!
//! Pure function: `&DemoConfig → Result<(), Vec<ValidationError>>`.
//! Runs before the config is handed to the fetch.

use thiserror::Error;

use crate::config::schema::DemoConfig;

/// Upper bound on the simulated delay.
pub const MAX_DELAY_MS: u64 = 60_000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("fetch.success_ratio must be within [0.0, 1.0], got {0}")]
    SuccessRatioOutOfRange(f64),

    #[error("fetch.delay_ms must be at most {max}, got {actual}")]
    DelayTooLong { actual: u64, max: u64 },

    #[error("observability.log_level must be one of trace, debug, info, warn, error, got {0:?}")]
    UnknownLogLevel(String),
}

/// Check every semantic rule and return all violations.
pub fn validate_config(config: &DemoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let ratio = config.fetch.success_ratio;
    if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
        errors.push(ValidationError::SuccessRatioOutOfRange(ratio));
    }

    if config.fetch.delay_ms > MAX_DELAY_MS {
        errors.push(ValidationError::DelayTooLong {
            actual: config.fetch.delay_ms,
            max: MAX_DELAY_MS,
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
