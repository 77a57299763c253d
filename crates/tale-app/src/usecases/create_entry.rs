use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use tale_core::entry::EntryDraft;
use tale_core::ids::EntryId;
use tale_core::ports::EntryStorePort;

/// Use case for authoring a new journal entry.
pub struct CreateEntry {
    store: Arc<dyn EntryStorePort>,
}

impl CreateEntry {
    pub fn from_arc(store: Arc<dyn EntryStorePort>) -> Self {
        Self { store }
    }

    /// Validates the draft and inserts it.
    ///
    /// Returns the new entry's id, or an error when the content is blank or
    /// the store rejects the insert. Nothing is persisted on failure.
    #[tracing::instrument(name = "usecase.create_entry.execute", skip(self, draft))]
    pub async fn execute(&self, draft: EntryDraft) -> Result<EntryId> {
        let entry = draft.validate()?;

        let id = self
            .store
            .insert(entry)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to save entry: {}", e))?;

        info!(entry_id = %id, "Journal entry saved");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use tale_core::entry::{Entry, EntryPatch, Mood, NewEntry, UNTITLED_TITLE};
    use tale_core::feed::{EntryQuery, PageRange};

    #[derive(Default)]
    struct RecordingStore {
        inserted: Mutex<Vec<NewEntry>>,
        should_fail: bool,
    }

    #[async_trait]
    impl EntryStorePort for RecordingStore {
        async fn query(
            &self,
            _query: &EntryQuery,
            _range: Option<PageRange>,
        ) -> Result<Vec<Entry>> {
            unimplemented!("not used in tests")
        }

        async fn list_distinct_activities(&self, _limit: usize) -> Result<Vec<String>> {
            unimplemented!("not used in tests")
        }

        async fn insert(&self, entry: NewEntry) -> Result<EntryId> {
            if self.should_fail {
                return Err(anyhow::anyhow!("mock insert error"));
            }
            self.inserted.lock().unwrap().push(entry);
            Ok(EntryId::new())
        }

        async fn update(&self, _id: &EntryId, _patch: EntryPatch) -> Result<()> {
            unimplemented!("not used in tests")
        }

        async fn delete(&self, _id: &EntryId) -> Result<()> {
            unimplemented!("not used in tests")
        }
    }

    #[tokio::test]
    async fn create_normalizes_and_inserts() {
        let store = Arc::new(RecordingStore::default());
        let use_case = CreateEntry::from_arc(Arc::clone(&store) as Arc<dyn EntryStorePort>);

        use_case
            .execute(EntryDraft {
                title: "  ".to_string(),
                content: " first entry ".to_string(),
                mood: Some(Mood::Great),
                activity: " writing ".to_string(),
            })
            .await
            .unwrap();

        let inserted = store.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].title, UNTITLED_TITLE);
        assert_eq!(inserted[0].content, "first entry");
        assert_eq!(inserted[0].activity, Some("writing".to_string()));
    }

    #[tokio::test]
    async fn create_rejects_blank_content_without_touching_store() {
        let store = Arc::new(RecordingStore::default());
        let use_case = CreateEntry::from_arc(Arc::clone(&store) as Arc<dyn EntryStorePort>);

        let result = use_case
            .execute(EntryDraft {
                content: "   ".to_string(),
                ..Default::default()
            })
            .await;

        assert!(result.is_err());
        assert!(store.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_propagates_store_errors() {
        let store = Arc::new(RecordingStore {
            should_fail: true,
            ..Default::default()
        });
        let use_case = CreateEntry::from_arc(store as Arc<dyn EntryStorePort>);

        let result = use_case
            .execute(EntryDraft {
                content: "a valid entry".to_string(),
                ..Default::default()
            })
            .await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to save"));
    }
}
