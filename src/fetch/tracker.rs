//! Single-shot fetch tracking over a watch channel.

use std::future::Future;
use std::sync::Mutex;
use std::time::Instant;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::fetch::resolve;
use crate::observability::metrics;
use crate::state::{RemoteData, Variant};

/// Misuse of a [`Tracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackError {
    /// `start` was already called on this tracker.
    #[error("fetch already started")]
    AlreadyStarted,

    /// `wait` was called before `start`.
    #[error("fetch not started")]
    NotStarted,

    /// The fetch task ended without publishing a terminal state.
    #[error("fetch task ended before resolving")]
    Closed,
}

/// Publishes the lifecycle of one asynchronous operation.
///
/// Starts at `NotAsked`, moves to `Pending` when started, and finally to
/// `Failure` or `Success` once the operation resolves. Each step replaces
/// the published value.
pub struct Tracker<E, A> {
    fetch_id: Uuid,
    /// Taken by the fetch task on `start`.
    tx: Mutex<Option<watch::Sender<RemoteData<E, A>>>>,
    rx: watch::Receiver<RemoteData<E, A>>,
}

impl<E, A> Tracker<E, A>
where
    E: Clone + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(RemoteData::not_asked());
        Self {
            fetch_id: Uuid::new_v4(),
            tx: Mutex::new(Some(tx)),
            rx,
        }
    }

    /// Identifier attached to this fetch's log span.
    pub fn fetch_id(&self) -> Uuid {
        self.fetch_id
    }

    /// Snapshot of the latest published state.
    pub fn current(&self) -> RemoteData<E, A> {
        self.rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RemoteData<E, A>> {
        self.rx.clone()
    }

    pub fn is_started(&self) -> bool {
        self.tx
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_none()
    }

    /// Spawn the operation. `Pending` is published before this returns.
    pub fn start<Fut>(&self, fut: Fut) -> Result<JoinHandle<()>, TrackError>
    where
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        let tx = self
            .tx
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
            .ok_or(TrackError::AlreadyStarted)?;

        let span = tracing::info_span!("fetch", fetch_id = %self.fetch_id);
        let started = Instant::now();

        tx.send_replace(RemoteData::pending());
        span.in_scope(|| tracing::info!(variant = %Variant::Pending, "Fetch started"));

        let handle = tokio::spawn(
            async move {
                let outcome = resolve(fut).await;
                let variant = outcome.variant();

                metrics::record_fetch_outcome(variant, started);
                tx.send_replace(outcome);

                tracing::info!(
                    variant = %variant,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Fetch resolved"
                );
            }
            .instrument(span),
        );

        Ok(handle)
    }

    /// Wait for the terminal state.
    pub async fn wait(&self) -> Result<RemoteData<E, A>, TrackError> {
        if !self.is_started() {
            return Err(TrackError::NotStarted);
        }

        let mut rx = self.rx.clone();
        let state = rx
            .wait_for(|state| state.is_resolved())
            .await
            .map_err(|_| TrackError::Closed)?;
        Ok((*state).clone())
    }
}

impl<E, A> Default for Tracker<E, A>
where
    E: Clone + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
