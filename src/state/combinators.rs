//! Combinators over `RemoteData`.
//!
//! Every combinator consumes or borrows its input and returns a new value.

use crate::state::types::RemoteData;

impl<E, A> RemoteData<E, A> {
    /// Borrow the payload of whichever variant is active.
    pub fn as_ref(&self) -> RemoteData<&E, &A> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => RemoteData::Success(a),
        }
    }

    /// Exhaustive inspection: exactly one of the four closures runs.
    pub fn fold<T>(
        self,
        not_asked: impl FnOnce() -> T,
        pending: impl FnOnce() -> T,
        failure: impl FnOnce(E) -> T,
        success: impl FnOnce(A) -> T,
    ) -> T {
        match self {
            RemoteData::NotAsked => not_asked(),
            RemoteData::Pending => pending(),
            RemoteData::Failure(e) => failure(e),
            RemoteData::Success(a) => success(a),
        }
    }

    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> RemoteData<E, B> {
        self.map_both(|e| e, f)
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> RemoteData<F, A> {
        self.map_both(f, |a| a)
    }

    pub fn map_both<F, B>(
        self,
        on_failure: impl FnOnce(E) -> F,
        on_success: impl FnOnce(A) -> B,
    ) -> RemoteData<F, B> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Failure(e) => RemoteData::Failure(on_failure(e)),
            RemoteData::Success(a) => RemoteData::Success(on_success(a)),
        }
    }

    /// Chain a dependent step onto a success. Other variants pass through.
    pub fn and_then<B>(self, f: impl FnOnce(A) -> RemoteData<E, B>) -> RemoteData<E, B> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => f(a),
        }
    }

    /// The success payload, or `default` for every other variant.
    pub fn with_default(self, default: A) -> A {
        self.unwrap_or_else(|| default)
    }

    pub fn unwrap_or_else(self, f: impl FnOnce() -> A) -> A {
        match self {
            RemoteData::Success(a) => a,
            _ => f(),
        }
    }

    /// Combine two independent requests.
    ///
    /// A failure on either side wins (left first), then `Pending`, then
    /// `NotAsked`; the pair is only produced when both sides succeeded.
    pub fn zip<B>(self, other: RemoteData<E, B>) -> RemoteData<E, (A, B)> {
        match (self, other) {
            (RemoteData::Success(a), RemoteData::Success(b)) => RemoteData::Success((a, b)),
            (RemoteData::Failure(e), _) | (_, RemoteData::Failure(e)) => RemoteData::Failure(e),
            (RemoteData::Pending, _) | (_, RemoteData::Pending) => RemoteData::Pending,
            _ => RemoteData::NotAsked,
        }
    }

    /// The finished outcome, or `None` while unresolved.
    pub fn into_result(self) -> Option<Result<A, E>> {
        match self {
            RemoteData::NotAsked | RemoteData::Pending => None,
            RemoteData::Failure(e) => Some(Err(e)),
            RemoteData::Success(a) => Some(Ok(a)),
        }
    }
}
