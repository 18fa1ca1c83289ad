//! Rendering of a user fetch state.

use std::future::Future;

use crate::fetch::tracker::{TrackError, Tracker};
use crate::fetch::types::{FetchError, User};
use crate::state::RemoteData;

/// One line describing what a user-facing component would show.
pub fn render(state: &RemoteData<FetchError, User>) -> String {
    match state {
        RemoteData::NotAsked => "User not requested yet".to_string(),
        RemoteData::Pending => "Loading user...".to_string(),
        RemoteData::Failure(error) => format!("Error: {}", error.message),
        RemoteData::Success(user) => format!("User #{}: {}", user.id, user.name),
    }
}

/// Success payload as pretty JSON, `None` for every other variant.
pub fn render_json(state: &RemoteData<FetchError, User>) -> Result<Option<String>, serde_json::Error> {
    state.data().map(serde_json::to_string_pretty).transpose()
}

/// Process exit status for a finished fetch: 1 for `Failure`, 0 otherwise.
pub fn exit_status(state: &RemoteData<FetchError, User>) -> u8 {
    if state.is_failure() {
        1
    } else {
        0
    }
}

/// Run `fut` on `tracker`, handing every lifecycle step to `emit`.
///
/// The watch channel only keeps the latest value, so a fast fetch can
/// overwrite `Pending` before a subscriber reads it. `emit` instead sees the
/// initial state, `Pending` once `start` has published it, then the
/// terminal state.
pub async fn follow<Fut>(
    tracker: &Tracker<FetchError, User>,
    fut: Fut,
    mut emit: impl FnMut(&RemoteData<FetchError, User>),
) -> Result<RemoteData<FetchError, User>, TrackError>
where
    Fut: Future<Output = Result<User, FetchError>> + Send + 'static,
{
    emit(&tracker.current());
    tracker.start(fut)?;
    emit(&RemoteData::pending());

    let outcome = tracker.wait().await?;
    emit(&outcome);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::SimulatedFetch;
    use crate::state::Variant;
    use std::time::Duration;

    fn john() -> User {
        User {
            id: 1,
            name: "John Doe".to_string(),
        }
    }

    #[test]
    fn test_render_every_variant() {
        assert_eq!(render(&RemoteData::not_asked()), "User not requested yet");
        assert_eq!(render(&RemoteData::pending()), "Loading user...");
        assert_eq!(
            render(&RemoteData::failure(FetchError::new("Failed to fetch user data"))),
            "Error: Failed to fetch user data"
        );
        assert_eq!(render(&RemoteData::success(john())), "User #1: John Doe");
    }

    #[test]
    fn test_render_json_only_for_success() {
        assert_eq!(render_json(&RemoteData::pending()).unwrap(), None);
        let json = render_json(&RemoteData::success(john())).unwrap().unwrap();
        assert!(json.contains("\"name\": \"John Doe\""));
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&RemoteData::success(john())), 0);
        assert_eq!(exit_status(&RemoteData::failure(FetchError::new("down"))), 1);
        assert_eq!(exit_status(&RemoteData::pending()), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_follow_shows_pending_for_instant_fetch() {
        for _ in 0..20 {
            let tracker: Tracker<FetchError, User> = Tracker::new();
            let source = SimulatedFetch::new(Duration::ZERO, 1.0);
            let mut seen = Vec::new();

            let outcome = follow(&tracker, async move { source.fetch_user().await }, |state| {
                seen.push(state.variant())
            })
            .await
            .unwrap();

            assert_eq!(seen, vec![Variant::NotAsked, Variant::Pending, Variant::Success]);
            assert_eq!(outcome, RemoteData::success(john()));
        }
    }

    #[tokio::test]
    async fn test_follow_on_started_tracker() {
        let tracker: Tracker<FetchError, User> = Tracker::new();
        tracker.start(async { Ok(john()) }).unwrap();

        let mut seen = Vec::new();
        let err = follow(&tracker, async { Ok(john()) }, |state| seen.push(state.variant()))
            .await
            .unwrap_err();
        assert_eq!(err, TrackError::AlreadyStarted);
        assert_eq!(seen.len(), 1);
    }
}
