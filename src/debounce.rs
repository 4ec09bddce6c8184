//! Trailing-edge debounce over tokio timers.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

type BoxedAction<T> =
    Arc<dyn Fn(T) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Schedules an action to run `wait` after the most recent call.
///
/// Each [`schedule`](Self::schedule) aborts any still-pending timer and
/// restarts it with the new value, so at most one execution is pending at a
/// time and the action always sees the latest value. Skipped invocations are
/// dropped silently. Once the timer fires, the action is detached and runs to
/// completion: a later `schedule` cancels pending timers only, never an
/// in-flight action.
///
/// The pending-timer handle is the only piece of mutable state.
pub struct Debouncer<T> {
    wait: Duration,
    action: BoxedAction<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer that runs `action` with the latest scheduled
    /// value, `wait` after scheduling goes quiet.
    pub fn new<F>(wait: Duration, action: F) -> Self
    where
        F: Fn(T) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync + 'static,
    {
        Self {
            wait,
            action: Arc::new(action),
            pending: None,
        }
    }

    /// Schedules the action with `value`, replacing any pending execution.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let wait = self.wait;
        let action = Arc::clone(&self.action);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            // Detach: once fired, the action is no longer cancellable.
            tokio::spawn(action(value));
        }));
    }

    /// Drops any pending execution without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
