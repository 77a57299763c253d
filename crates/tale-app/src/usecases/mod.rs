//! Business-logic use cases over the domain ports.

mod change_listener;
mod compute_journal_stats;
mod create_entry;
mod list_activity_facets;
mod update_entry;

pub use change_listener::spawn_change_listener;
pub use compute_journal_stats::ComputeJournalStats;
pub use create_entry::CreateEntry;
pub use list_activity_facets::ListActivityFacets;
pub use update_entry::UpdateEntry;
