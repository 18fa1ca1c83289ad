//! Remote data state subsystem.
//!
//! # Data Flow
//! ```text
//! Caller starts a fetch:
//!     NotAsked → Pending (new value, old one dropped)
//!
//! Fetch completes:
//!     Result<A, E> → from_result → Failure(E) | Success(A)
//!     Option<A>    → from_nullable → Failure(E) | Success(A)
//!
//! Consumers:
//!     match / fold → exhaustive branch per variant
//!     combinators  → derived RemoteData values (map, and_then, zip)
//! ```
//!
//! # Design Decisions
//! - A plain enum: exactly one variant, payload only reachable through a match
//! - Values are immutable; nothing on the type takes `&mut self`
//! - No transition rules; the caller decides what comes next
//! - Absence is `Option::None` only, never "falsy" payloads

pub mod combinators;
pub mod types;

pub use types::{RemoteData, Variant};
