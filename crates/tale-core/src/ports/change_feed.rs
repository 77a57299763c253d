use tokio::sync::broadcast;

use crate::ids::EntryId;

/// A change observed on the entry table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryChange {
    Inserted(EntryId),
    Updated(EntryId),
    Deleted(EntryId),
}

/// Change-notification subscription on the entry store.
///
/// The consumer reacts to any event by refreshing its view; dropping the
/// receiver ends the subscription.
pub trait EntryChangeFeedPort: Send + Sync {
    fn subscribe(&self) -> broadcast::Receiver<EntryChange>;
}
