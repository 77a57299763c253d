use anyhow::Result;
use std::sync::Arc;

use tale_core::ports::EntryStorePort;

/// How many activity rows are considered when building the facet list.
const ACTIVITY_SCAN_LIMIT: usize = 500;

/// Use case for the activity filter facet: distinct observed activity
/// labels, fetched once per feed session rather than per filter change.
pub struct ListActivityFacets {
    store: Arc<dyn EntryStorePort>,
    limit: usize,
}

impl ListActivityFacets {
    pub fn from_arc(store: Arc<dyn EntryStorePort>) -> Self {
        Self {
            store,
            limit: ACTIVITY_SCAN_LIMIT,
        }
    }

    /// Returns the sorted, de-duplicated facet list. Blank labels are
    /// dropped even if a store hands them back.
    #[tracing::instrument(name = "usecase.list_activity_facets.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<String>> {
        let mut activities = self
            .store
            .list_distinct_activities(self.limit)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch activities: {}", e))?;

        activities.retain(|a| !a.trim().is_empty());
        activities.sort();
        activities.dedup();
        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use tale_core::entry::{Entry, EntryPatch, NewEntry};
    use tale_core::feed::{EntryQuery, PageRange};
    use tale_core::ids::EntryId;

    struct FixedStore {
        activities: Vec<String>,
    }

    #[async_trait]
    impl EntryStorePort for FixedStore {
        async fn query(
            &self,
            _query: &EntryQuery,
            _range: Option<PageRange>,
        ) -> Result<Vec<Entry>> {
            unimplemented!("not used in tests")
        }

        async fn list_distinct_activities(&self, limit: usize) -> Result<Vec<String>> {
            assert_eq!(limit, ACTIVITY_SCAN_LIMIT);
            Ok(self.activities.clone())
        }

        async fn insert(&self, _entry: NewEntry) -> Result<EntryId> {
            unimplemented!("not used in tests")
        }

        async fn update(&self, _id: &EntryId, _patch: EntryPatch) -> Result<()> {
            unimplemented!("not used in tests")
        }

        async fn delete(&self, _id: &EntryId) -> Result<()> {
            unimplemented!("not used in tests")
        }
    }

    #[tokio::test]
    async fn facets_are_sorted_deduped_and_nonblank() {
        let store = Arc::new(FixedStore {
            activities: vec![
                "walking".to_string(),
                "cooking".to_string(),
                "walking".to_string(),
                "  ".to_string(),
                "reading".to_string(),
            ],
        });
        let use_case = ListActivityFacets::from_arc(store as Arc<dyn EntryStorePort>);
        let facets = use_case.execute().await.unwrap();
        assert_eq!(facets, vec!["cooking", "reading", "walking"]);
    }
}
