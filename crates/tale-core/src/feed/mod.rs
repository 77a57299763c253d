//! Filter model for the entry feed.
//!
//! Pure translation of user filter intent into store query parameters.
//! The paging state machine that consumes these lives in `tale-app`.

mod filter;
mod query;

pub use filter::{DateRange, FilterPatch, FilterState, SortOrder};
pub use query::{normalize_search, EntryQuery, PageRange};
