//! Results reported by sync engine operations

use crate::remote::RemoteError;

/// How an operation's effect reached the store
///
/// Neither variant is an error: a fallback is a recovered transport failure.
/// Callers that care whether the server has the change must check
/// [`SyncOutcome::is_fallback`].
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome<T> {
    /// The server accepted the call and its canonical result was applied
    Synced(T),

    /// The server call failed and a locally synthesized result was applied
    LocalFallback { value: T, cause: RemoteError },
}

impl<T> SyncOutcome<T> {
    pub fn fallback(value: T, cause: RemoteError) -> Self {
        Self::LocalFallback { value, cause }
    }

    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::LocalFallback { .. })
    }

    /// The value that was written to the store
    pub fn value(&self) -> &T {
        match self {
            Self::Synced(value) | Self::LocalFallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Synced(value) | Self::LocalFallback { value, .. } => value,
        }
    }

    /// The remote failure behind a fallback
    pub fn cause(&self) -> Option<&RemoteError> {
        match self {
            Self::Synced(_) => None,
            Self::LocalFallback { cause, .. } => Some(cause),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SyncOutcome<U> {
        match self {
            Self::Synced(value) => SyncOutcome::Synced(f(value)),
            Self::LocalFallback { value, cause } => SyncOutcome::LocalFallback {
                value: f(value),
                cause,
            },
        }
    }
}

/// Collection sizes after a bulk fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSummary {
    pub expenses: usize,
    pub budgets: usize,
}

/// Lifecycle of the engine's data, for loading/error indicators
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncStatus {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// A bulk fetch is in flight
    Loading,
    /// The last bulk fetch returned server data
    Ready,
    /// The last bulk fetch failed and default data is shown
    Degraded(String),
}

impl SyncStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
