use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, trace};

use tale_core::entry::Entry;
use tale_core::feed::{FilterPatch, FilterState, PageRange};
use tale_core::ids::EntryId;
use tale_core::ports::{ClockPort, EntryStorePort};

use super::error::FeedError;

/// Rows fetched per page.
pub const PAGE_SIZE: usize = 10;

/// Read-only view of the feed for the presentation host.
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot {
    pub entries: Vec<Entry>,
    pub filter: FilterState,
    pub has_more: bool,
    pub resetting: bool,
    pub loading_more: bool,
}

/// Mutable feed state. One epoch corresponds to one generation of filter
/// state; responses are applied only when their epoch is still current.
#[derive(Debug)]
struct FeedState {
    filter: FilterState,
    epoch: u64,
    page_index: usize,
    has_more: bool,
    accumulated: Vec<Entry>,
    resetting: bool,
    loading_more: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            epoch: 0,
            page_index: 0,
            has_more: true,
            accumulated: Vec::new(),
            resetting: false,
            loading_more: false,
        }
    }
}

/// Owns the filter state, the pagination cursor, and the accumulated entry
/// list, and funnels every mutation through its public operations.
///
/// All store calls are issued without holding the state lock; a response is
/// merged only if the epoch it was tagged with is still current, so a slow
/// fetch for superseded filters can never clobber newer state.
pub struct FeedController {
    store: Arc<dyn EntryStorePort>,
    clock: Arc<dyn ClockPort>,
    state: Mutex<FeedState>,
}

impl FeedController {
    pub fn from_ports(store: Arc<dyn EntryStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            store,
            clock,
            state: Mutex::new(FeedState::default()),
        }
    }

    /// Merges a partial filter update, starts a new epoch, and fetches
    /// page 0 for the resulting filters.
    ///
    /// A `set_filter` issued while another reset is in flight supersedes
    /// it: the stale response is discarded when it arrives. On a failed
    /// fetch the accumulated list is left untouched and the feed remains
    /// retryable via [`refresh`](Self::refresh).
    pub async fn set_filter(&self, patch: FilterPatch) -> Result<(), FeedError> {
        let (epoch, query) = {
            let mut state = self.state.lock().await;
            state.filter.apply(patch);
            state.epoch += 1;
            state.page_index = 0;
            state.has_more = true;
            state.resetting = true;
            // any in-flight load-more now belongs to a dead epoch
            state.loading_more = false;
            (state.epoch, state.filter.to_query(self.clock.now_local()))
        };
        debug!(epoch, "feed reset: fetching page 0");

        let fetched = self
            .store
            .query(&query, Some(PageRange::page(0, PAGE_SIZE)))
            .await;

        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            trace!(epoch, current = state.epoch, "discarding stale reset response");
            return Ok(());
        }
        state.resetting = false;

        match fetched {
            Ok(rows) => {
                state.has_more = rows.len() == PAGE_SIZE;
                state.page_index = usize::from(!rows.is_empty());
                state.accumulated = rows;
                Ok(())
            }
            Err(e) => Err(FeedError::QueryFailed(e.to_string())),
        }
    }

    /// Re-issues page 0 for the current filters.
    pub async fn refresh(&self) -> Result<(), FeedError> {
        self.set_filter(FilterPatch::default()).await
    }

    /// Fetches the next page and appends entries not already accumulated.
    ///
    /// No-op while a reset or another load is in flight, or once the store
    /// has signalled the end of the result set.
    pub async fn load_more(&self) -> Result<(), FeedError> {
        let (epoch, query, start) = {
            let mut state = self.state.lock().await;
            if state.resetting || state.loading_more || !state.has_more {
                trace!(
                    resetting = state.resetting,
                    loading_more = state.loading_more,
                    has_more = state.has_more,
                    "load_more skipped"
                );
                return Ok(());
            }
            state.loading_more = true;
            (
                state.epoch,
                state.filter.to_query(self.clock.now_local()),
                state.page_index * PAGE_SIZE,
            )
        };
        debug!(epoch, start, "feed load-more");

        let fetched = self
            .store
            .query(&query, Some(PageRange::new(start, start + PAGE_SIZE - 1)))
            .await;

        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            trace!(epoch, current = state.epoch, "discarding stale load-more response");
            return Ok(());
        }
        state.loading_more = false;

        match fetched {
            Ok(rows) => {
                state.has_more = rows.len() == PAGE_SIZE;
                if !rows.is_empty() {
                    state.page_index += 1;
                }
                // overlapping pages can re-deliver rows; keep first-seen only
                let seen: HashSet<EntryId> =
                    state.accumulated.iter().map(|e| e.id.clone()).collect();
                state
                    .accumulated
                    .extend(rows.into_iter().filter(|e| !seen.contains(&e.id)));
                Ok(())
            }
            Err(e) => Err(FeedError::QueryFailed(e.to_string())),
        }
    }

    /// Deletes an entry from the store, then refreshes the whole epoch.
    ///
    /// A full refresh rather than a local splice: removing a row shifts
    /// every subsequent page boundary. A rejected delete mutates nothing.
    #[tracing::instrument(name = "feed.delete_entry", skip(self), fields(entry_id = %id))]
    pub async fn delete_entry(&self, id: &EntryId) -> Result<(), FeedError> {
        self.store
            .delete(id)
            .await
            .map_err(|e| FeedError::DeleteFailed(e.to_string()))?;
        info!(entry_id = %id, "entry deleted, refreshing feed");
        self.refresh().await
    }

    pub async fn snapshot(&self) -> FeedSnapshot {
        let state = self.state.lock().await;
        FeedSnapshot {
            entries: state.accumulated.clone(),
            filter: state.filter.clone(),
            has_more: state.has_more,
            resetting: state.resetting,
            loading_more: state.loading_more,
        }
    }
}
