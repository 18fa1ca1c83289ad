//! The `RemoteData` value type and its constructors.

use std::fmt;

/// Progress of a value obtained through an asynchronous, possibly failing
/// operation.
///
/// Exactly one variant is active. The error and data payloads are only
/// reachable by matching on the variant (or through the `Option`-returning
/// projections), so reading the wrong one is a compile-time impossibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteData<E, A> {
    /// The operation has not been initiated.
    NotAsked,
    /// The operation is in flight.
    Pending,
    /// The operation completed unsuccessfully.
    Failure(E),
    /// The operation completed successfully.
    Success(A),
}

/// Payload-free discriminant of a [`RemoteData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    NotAsked,
    Pending,
    Failure,
    Success,
}

impl Variant {
    /// Stable label, used for log fields and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::NotAsked => "NotAsked",
            Variant::Pending => "Pending",
            Variant::Failure => "Failure",
            Variant::Success => "Success",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<E, A> RemoteData<E, A> {
    /// A value that has not been requested yet.
    pub fn not_asked() -> Self {
        RemoteData::NotAsked
    }

    /// A value whose request is in flight.
    pub fn pending() -> Self {
        RemoteData::Pending
    }

    /// A request that failed with `error`.
    pub fn failure(error: E) -> Self {
        RemoteData::Failure(error)
    }

    /// A request that succeeded with `data`.
    pub fn success(data: A) -> Self {
        RemoteData::Success(data)
    }

    /// `Success(value)` when a value is present, `Failure(error)` otherwise.
    ///
    /// Presence is decided by `Option` alone: `Some(0)`, `Some("")` and
    /// `Some(false)` are all successes.
    pub fn from_nullable(error: E, value: Option<A>) -> Self {
        match value {
            Some(data) => RemoteData::Success(data),
            None => RemoteData::Failure(error),
        }
    }

    /// Lift a finished operation. Never produces `NotAsked` or `Pending`.
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(data) => RemoteData::Success(data),
            Err(error) => RemoteData::Failure(error),
        }
    }

    /// The active variant, without its payload.
    pub fn variant(&self) -> Variant {
        match self {
            RemoteData::NotAsked => Variant::NotAsked,
            RemoteData::Pending => Variant::Pending,
            RemoteData::Failure(_) => Variant::Failure,
            RemoteData::Success(_) => Variant::Success,
        }
    }

    pub fn is_not_asked(&self) -> bool {
        matches!(self, RemoteData::NotAsked)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RemoteData::Pending)
    }

    /// Alias of [`RemoteData::is_pending`].
    pub fn is_loading(&self) -> bool {
        self.is_pending()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteData::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success(_))
    }

    /// True once the operation has finished, either way.
    pub fn is_resolved(&self) -> bool {
        self.is_failure() || self.is_success()
    }

    /// The success payload, if that is the active variant.
    pub fn data(&self) -> Option<&A> {
        match self {
            RemoteData::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The failure payload, if that is the active variant.
    pub fn error(&self) -> Option<&E> {
        match self {
            RemoteData::Failure(error) => Some(error),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<A> {
        match self {
            RemoteData::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            RemoteData::Failure(error) => Some(error),
            _ => None,
        }
    }
}

impl<E, A> Default for RemoteData<E, A> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}

impl<E, A> From<Result<A, E>> for RemoteData<E, A> {
    fn from(result: Result<A, E>) -> Self {
        RemoteData::from_result(result)
    }
}
