use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use tale_core::entry::{Entry, EntryPatch, NewEntry};
use tale_core::feed::{EntryQuery, PageRange, SortOrder};
use tale_core::ids::EntryId;
use tale_core::ports::{ClockPort, EntryChange, EntryChangeFeedPort, EntryStorePort};

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// In-process entry store implementing the store and change-feed ports.
///
/// Reference adapter for tests and local development; it mirrors the remote
/// store's contract, including returning each queried page pre-sorted and
/// keeping insertion order as the natural order for `created_at` ties.
pub struct InMemoryEntryStore {
    clock: Arc<dyn ClockPort>,
    entries: RwLock<Vec<Entry>>,
    changes: broadcast::Sender<EntryChange>,
}

impl InMemoryEntryStore {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            clock,
            entries: RwLock::new(Vec::new()),
            changes,
        }
    }

    /// Inserts a fully-formed entry, bypassing draft normalization and the
    /// clock. Intended for seeding test fixtures at chosen timestamps.
    pub async fn seed(&self, entry: Entry) {
        self.entries.write().await.push(entry);
    }

    fn notify(&self, change: EntryChange) {
        // nobody listening is fine
        let _ = self.changes.send(change);
    }
}

#[async_trait]
impl EntryStorePort for InMemoryEntryStore {
    async fn query(&self, query: &EntryQuery, range: Option<PageRange>) -> Result<Vec<Entry>> {
        let entries = self.entries.read().await;
        let mut rows: Vec<Entry> = entries
            .iter()
            .filter(|e| query.matches(e))
            .cloned()
            .collect();

        // stable sort keeps insertion order for created_at ties
        match query.sort {
            SortOrder::Ascending => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Descending => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        debug!(total = rows.len(), ?range, "in-memory query");
        Ok(match range {
            Some(range) => rows
                .into_iter()
                .skip(range.start)
                .take(range.len())
                .collect(),
            None => rows,
        })
    }

    async fn list_distinct_activities(&self, limit: usize) -> Result<Vec<String>> {
        let entries = self.entries.read().await;
        let distinct: BTreeSet<String> = entries
            .iter()
            .filter_map(|e| e.activity.clone())
            .collect();
        Ok(distinct.into_iter().take(limit).collect())
    }

    async fn insert(&self, entry: NewEntry) -> Result<EntryId> {
        let id = EntryId::new();
        let stored = Entry {
            id: id.clone(),
            created_at: self.clock.now_local(),
            title: Some(entry.title),
            content: entry.content,
            mood: entry.mood,
            activity: entry.activity,
        };
        self.entries.write().await.push(stored);
        self.notify(EntryChange::Inserted(id.clone()));
        Ok(id)
    }

    async fn update(&self, id: &EntryId, patch: EntryPatch) -> Result<()> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| anyhow::anyhow!("entry not found: {}", id))?;

        if let Some(title) = patch.title {
            entry.title = Some(title);
        }
        if let Some(content) = patch.content {
            entry.content = content;
        }
        if let Some(mood) = patch.mood {
            entry.mood = mood;
        }
        if let Some(activity) = patch.activity {
            entry.activity = activity;
        }
        drop(entries);

        self.notify(EntryChange::Updated(id.clone()));
        Ok(())
    }

    async fn delete(&self, id: &EntryId) -> Result<()> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| &e.id != id);
        if entries.len() == before {
            return Err(anyhow::anyhow!("entry not found: {}", id));
        }
        drop(entries);

        self.notify(EntryChange::Deleted(id.clone()));
        Ok(())
    }
}

impl EntryChangeFeedPort for InMemoryEntryStore {
    fn subscribe(&self) -> broadcast::Receiver<EntryChange> {
        self.changes.subscribe()
    }
}
