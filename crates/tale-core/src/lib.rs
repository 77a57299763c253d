//! # tale-core
//!
//! Core domain models and business logic for Today's Tale.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod entry;
pub mod feed;
pub mod ids;
pub mod ports;
pub mod stats;

// Re-export commonly used types at the crate root
pub use entry::{DraftError, Entry, EntryDraft, EntryPatch, Mood, NewEntry};
pub use feed::{DateRange, EntryQuery, FilterPatch, FilterState, PageRange, SortOrder};
pub use ids::EntryId;
pub use stats::{compute_streak, JournalStats, StreakResult};
