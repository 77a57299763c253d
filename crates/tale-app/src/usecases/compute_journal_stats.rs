use anyhow::Result;
use std::sync::Arc;

use tale_core::feed::FilterState;
use tale_core::ports::{ClockPort, EntryStorePort};
use tale_core::stats::{compute_streak, JournalStats};

/// Use case for the profile dashboard stats: entry count, write streak and
/// last-entry date, over the full unfiltered journal.
pub struct ComputeJournalStats {
    store: Arc<dyn EntryStorePort>,
    clock: Arc<dyn ClockPort>,
}

impl ComputeJournalStats {
    pub fn from_ports(store: Arc<dyn EntryStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    #[tracing::instrument(name = "usecase.compute_journal_stats.execute", skip(self))]
    pub async fn execute(&self) -> Result<JournalStats> {
        let now = self.clock.now_local();
        // default filters = the whole journal, newest first; no page range
        let query = FilterState::default().to_query(now);

        let entries = self
            .store
            .query(&query, None)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch entries for stats: {}", e))?;

        Ok(JournalStats {
            entry_count: entries.len(),
            streak: compute_streak(&entries, now.date()),
        })
    }
}
