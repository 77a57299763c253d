use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use tale_core::ports::EntryChangeFeedPort;

use crate::feed::FeedController;

/// Subscribes the feed to store change notifications.
///
/// Any insert/update/delete triggers a full refresh, which is how external
/// edits (other screens, other sessions) become visible. Abort the returned
/// handle to end the subscription when the feed session closes.
pub fn spawn_change_listener(
    controller: Arc<FeedController>,
    change_feed: &dyn EntryChangeFeedPort,
) -> JoinHandle<()> {
    let mut receiver = change_feed.subscribe();
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(change) => {
                    debug!(?change, "entry change notification, refreshing feed");
                    if let Err(e) = controller.refresh().await {
                        warn!(error = %e, "refresh after change notification failed");
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    // missed notifications all collapse into one refresh
                    warn!(skipped, "change feed lagged, refreshing feed");
                    if let Err(e) = controller.refresh().await {
                        warn!(error = %e, "refresh after change-feed lag failed");
                    }
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
