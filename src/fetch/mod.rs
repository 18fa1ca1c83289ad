//! Asynchronous fetch subsystem.
//!
//! # Data Flow
//! ```text
//! Tracker::new()            → publishes NotAsked
//! Tracker::start(future)    → spawns one task
//!     → publishes Pending
//!     → future resolves to Result<A, E>
//!     → from_result → publishes Failure | Success
//!
//! Consumers:
//!     → current() / subscribe() / wait()
//!     → view.rs renders each observed state
//! ```
//!
//! # Design Decisions
//! - One task per tracker, started at most once
//! - No retry, no cancellation, no timeout
//! - State changes replace the published value; published values are never mutated

pub mod simulated;
pub mod tracker;
pub mod types;
pub mod view;

use std::future::Future;

use crate::state::RemoteData;

pub use simulated::SimulatedFetch;
pub use tracker::{TrackError, Tracker};
pub use types::{FetchError, User};

/// Await a single operation and lift its outcome into `RemoteData`.
pub async fn resolve<E, A, Fut>(fut: Fut) -> RemoteData<E, A>
where
    Fut: Future<Output = Result<A, E>>,
{
    RemoteData::from_result(fut.await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_ok() {
        let rd = resolve(async { Ok::<_, String>(7) }).await;
        assert_eq!(rd, RemoteData::success(7));
    }

    #[tokio::test]
    async fn test_resolve_err() {
        let rd = resolve(async { Err::<i32, _>("bad") }).await;
        assert_eq!(rd, RemoteData::failure("bad"));
    }
}
