//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs apply_overrides (CLI flags win over file values)
//!     → validation.rs (semantic checks)
//!     → DemoConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so a missing file means a default config
//! - Validation separates syntactic (serde) from semantic checks
//! - All validation errors are reported, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_overrides, load_config, parse_config, ConfigError};
pub use schema::{DemoConfig, FetchConfig, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
