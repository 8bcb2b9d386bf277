//! Mount-scoped fetch task
//!
//! A [`MountedFetch`] is created when a screen mounts. It spawns the screen's
//! load exactly once and publishes the resulting [`LoadState`] on a watch
//! channel. The task only holds a weak reference to the state cell and a
//! cancellation token, so once the owner is torn down the outcome of an
//! in-flight fetch is discarded instead of being written.

use crate::load_state::{LoadPhase, LoadState, TransitionError};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A single fetch bound to the lifetime of its owner
pub struct MountedFetch<T> {
    label: String,
    state: Arc<watch::Sender<LoadState<T>>>,
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<T> MountedFetch<T>
where
    T: Send + Sync + 'static,
{
    /// Start `fetch` in the background, beginning in `Pending`
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn<F>(label: impl Into<String>, fetch: F) -> Self
    where
        F: Future<Output = LoadState<T>> + Send + 'static,
    {
        let label = label.into();
        let (tx, _) = watch::channel(LoadState::Pending);
        let state = Arc::new(tx);
        let token = CancellationToken::new();

        let weak = Arc::downgrade(&state);
        let task_token = token.clone();
        let task_label = label.clone();

        let task = tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = task_token.cancelled() => None,
                outcome = fetch => Some(outcome),
            };

            let Some(outcome) = outcome.filter(|_| !task_token.is_cancelled()) else {
                tracing::debug!(label = %task_label, "fetch cancelled before settling");
                return;
            };

            let Some(state) = weak.upgrade() else {
                tracing::debug!(label = %task_label, "owner gone, discarding fetch result");
                return;
            };

            let phase = outcome.phase();
            match apply(&state, &task_token, outcome) {
                Ok(true) => tracing::debug!(label = %task_label, %phase, "load settled"),
                Ok(false) => tracing::debug!(label = %task_label, "cancelled while settling"),
                Err(e) => tracing::warn!(label = %task_label, "Rejected load transition: {}", e),
            }
        });

        tracing::debug!(label = %label, "fetch spawned");

        Self {
            label,
            state,
            token,
            task: Some(task),
        }
    }

    /// Get the label this fetch was spawned with
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the current phase
    pub fn phase(&self) -> LoadPhase {
        self.state.borrow().phase()
    }

    /// Run `f` against the current state without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&LoadState<T>) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.state.subscribe()
    }

    /// Check if the fetch was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel the fetch; its outcome will never be written
    pub fn cancel(&mut self) {
        if !self.token.is_cancelled() {
            tracing::debug!(label = %self.label, "cancelling fetch");
        }
        self.teardown();
    }
}

impl<T> MountedFetch<T> {
    /// Cancel under the state lock, so a concurrent `apply` either
    /// finishes first or observes the cancellation
    fn teardown(&mut self) {
        let token = &self.token;
        self.state.send_if_modified(|_| {
            token.cancel();
            false
        });
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T> MountedFetch<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Get a snapshot of the current state
    pub fn state(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    /// Wait until the state is terminal and return it
    ///
    /// Returns the current state as soon as the fetch is cancelled. Never
    /// returns while the fetch hangs; there is no timeout.
    pub async fn settled(&self) -> LoadState<T> {
        let mut rx = self.state.subscribe();
        tokio::select! {
            result = rx.wait_for(|s| s.is_terminal()) => match result {
                Ok(state) => state.clone(),
                Err(_) => self.state.borrow().clone(),
            },
            _ = self.token.cancelled() => self.state.borrow().clone(),
        }
    }
}

impl<T> Drop for MountedFetch<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T> std::fmt::Debug for MountedFetch<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedFetch")
            .field("label", &self.label)
            .field("phase", &self.state.borrow().phase())
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}

/// Settle the published state, notifying subscribers only on success
///
/// Returns `Ok(false)` without writing when `token` is already cancelled.
/// The check runs under the state lock, the same lock teardown cancels under.
fn apply<T>(
    state: &watch::Sender<LoadState<T>>,
    token: &CancellationToken,
    next: LoadState<T>,
) -> Result<bool, TransitionError> {
    let mut result = Ok(false);
    state.send_if_modified(|current| {
        if token.is_cancelled() {
            return false;
        }
        match current.settle(next) {
            Ok(()) => {
                result = Ok(true);
                true
            }
            Err(e) => {
                result = Err(e);
                false
            }
        }
    });
    result
}
