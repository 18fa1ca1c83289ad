//! Shared utilities for integration tests.

use std::future::Future;
use tokio::sync::oneshot;

use remote_data::fetch::{FetchError, User};

pub fn john() -> User {
    User {
        id: 1,
        name: "John Doe".to_string(),
    }
}

/// A fetch that resolves to `outcome` only once the returned sender fires.
pub fn gated_fetch(
    outcome: Result<User, FetchError>,
) -> (oneshot::Sender<()>, impl Future<Output = Result<User, FetchError>> + Send + 'static) {
    let (release, gate) = oneshot::channel();
    let fut = async move {
        let _ = gate.await;
        outcome
    };
    (release, fut)
}
