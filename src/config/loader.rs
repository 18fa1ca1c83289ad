//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::DemoConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a TOML configuration string.
pub fn parse_config(content: &str) -> Result<DemoConfig, ConfigError> {
    let config: DemoConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DemoConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Apply command-line overrides on top of a loaded config, then re-validate.
pub fn apply_overrides(
    mut config: DemoConfig,
    delay_ms: Option<u64>,
    success_ratio: Option<f64>,
) -> Result<DemoConfig, ConfigError> {
    if let Some(delay_ms) = delay_ms {
        config.fetch.delay_ms = delay_ms;
    }
    if let Some(ratio) = success_ratio {
        config.fetch.success_ratio = ratio;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
