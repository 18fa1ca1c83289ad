//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! fetch tracker produces:
//!     → logging.rs (structured log events inside a `fetch` span)
//!     → metrics.rs (outcome counter, duration histogram)
//!
//! Consumers:
//!     → stdout via tracing-subscriber
//!     → whatever recorder the embedding program installs
//! ```
//!
//! # Design Decisions
//! - Every fetch carries its `fetch_id` as a span field
//! - Metrics go through the `metrics` facade; no exporter is bundled

pub mod logging;
pub mod metrics;
