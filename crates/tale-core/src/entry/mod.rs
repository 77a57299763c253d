//! Journal entry domain model.

mod draft;
mod mood;

pub use draft::{DraftError, EntryDraft, EntryPatch, NewEntry, UNTITLED_TITLE};
pub use mood::Mood;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// Immutable snapshot of a stored journal entry.
///
/// Owned by the store; the feed only reads it. `created_at` is wall-clock
/// local time with at least day resolution and drives ordering and streaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub created_at: NaiveDateTime,
    pub title: Option<String>,
    pub content: String,
    pub mood: Option<Mood>,
    pub activity: Option<String>,
}
