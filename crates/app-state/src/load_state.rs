//! Fetch lifecycle state
//!
//! A screen that depends on remote data starts out [`LoadState::Pending`]
//! and moves to exactly one terminal state when its fetch settles. There is
//! no way back to `Pending` and no retry transition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected state transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The state already settled
    #[error("Load already settled as {0}")]
    AlreadySettled(LoadPhase),

    /// `Pending` is only valid as the initial state
    #[error("Cannot transition back to pending")]
    BackToPending,
}

/// Lifecycle of one asynchronous fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Fetch in flight, no data yet
    Pending,

    /// Fetch succeeded
    Loaded(T),

    /// Fetch failed; the cause is only logged
    Failed,
}

/// Data-free tag of a [`LoadState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPhase {
    /// See [`LoadState::Pending`]
    Pending,
    /// See [`LoadState::Loaded`]
    Loaded,
    /// See [`LoadState::Failed`]
    Failed,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Pending
    }
}

impl std::fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LoadPhase::Pending => "pending",
            LoadPhase::Loaded => "loaded",
            LoadPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

impl<T> LoadState<T> {
    /// Get the phase tag
    pub fn phase(&self) -> LoadPhase {
        match self {
            LoadState::Pending => LoadPhase::Pending,
            LoadState::Loaded(_) => LoadPhase::Loaded,
            LoadState::Failed => LoadPhase::Failed,
        }
    }

    /// Check if the fetch is still in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    /// Check if the state is `Loaded` or `Failed`
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Get the loaded data, if any
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Convert a fetch result into a terminal state
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(_) => LoadState::Failed,
        }
    }

    /// Move from `Pending` to `next`
    ///
    /// Fails if this state already settled or if `next` is `Pending`.
    pub fn settle(&mut self, next: LoadState<T>) -> Result<(), TransitionError> {
        if self.is_terminal() {
            return Err(TransitionError::AlreadySettled(self.phase()));
        }
        if next.is_pending() {
            return Err(TransitionError::BackToPending);
        }
        *self = next;
        Ok(())
    }
}
