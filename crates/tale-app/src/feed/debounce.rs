use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;

use tale_core::feed::FilterPatch;

use super::controller::FeedController;

/// Time a search input must sit idle before it becomes a filter change.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Debounces search keystrokes into filter updates.
///
/// The visible input is the host's concern and updates immediately; only
/// the propagation into [`FeedController::set_filter`] (and therefore the
/// query epoch) is delayed. Each keystroke cancels the pending propagation
/// and rearms the timer, so rapid typing produces exactly one query for the
/// final value.
pub struct SearchDebouncer {
    controller: Arc<FeedController>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchDebouncer {
    pub fn new(controller: Arc<FeedController>) -> Self {
        Self::with_delay(controller, SEARCH_DEBOUNCE)
    }

    pub fn with_delay(controller: Arc<FeedController>, delay: Duration) -> Self {
        Self {
            controller,
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Records a keystroke. Must be called from within a tokio runtime.
    pub fn input(&self, text: impl Into<String>) {
        let text = text.into();
        let controller = Arc::clone(&self.controller);
        let delay = self.delay;

        // cancel-and-rearm must be atomic per keystroke
        let mut pending = self.pending.lock().expect("debounce timer lock poisoned");
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = controller
                .set_filter(FilterPatch {
                    search: Some(text),
                    ..Default::default()
                })
                .await
            {
                warn!(error = %e, "debounced search update failed");
            }
        }));
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(task) = pending.take() {
                task.abort();
            }
        }
    }
}
