//! Remote data: the lifecycle of an asynchronously fetched value.

pub mod config;
pub mod fetch;
pub mod observability;
pub mod state;

pub use config::DemoConfig;
pub use fetch::Tracker;
pub use state::{RemoteData, Variant};
