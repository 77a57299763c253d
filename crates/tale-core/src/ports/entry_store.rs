use anyhow::Result;
use async_trait::async_trait;

use crate::entry::{Entry, EntryPatch, NewEntry};
use crate::feed::{EntryQuery, PageRange};
use crate::ids::EntryId;

/// Remote entry store contract.
///
/// `query` returns rows pre-sorted per `query.sort`; callers never re-sort.
/// Relative order of entries sharing a `created_at` is the store's natural
/// order and carries no guarantee.
#[async_trait]
pub trait EntryStorePort: Send + Sync {
    /// Fetches entries matching `query`. `range` selects one slice of the
    /// sorted result set (inclusive zero-based row offsets); `None` returns
    /// the whole set, used for stats over the unfiltered journal.
    async fn query(&self, query: &EntryQuery, range: Option<PageRange>) -> Result<Vec<Entry>>;

    /// Distinct non-null activity labels observed across entries, at most
    /// `limit` of them.
    async fn list_distinct_activities(&self, limit: usize) -> Result<Vec<String>>;

    async fn insert(&self, entry: NewEntry) -> Result<EntryId>;

    async fn update(&self, id: &EntryId, patch: EntryPatch) -> Result<()>;

    async fn delete(&self, id: &EntryId) -> Result<()>;
}
