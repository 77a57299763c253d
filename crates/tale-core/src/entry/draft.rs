//! Authoring input and its normalization rules.
//!
//! The editor collaborator is responsible for enforcing these rules before
//! anything reaches the store: content must not be blank, a missing title
//! falls back to a fixed placeholder, and a blank activity is stored as
//! absent rather than as an empty label.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Mood;

/// Title used when the author leaves the title field blank.
pub const UNTITLED_TITLE: &str = "Untitled Entry";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("the journal entry content cannot be empty")]
    EmptyContent,
}

/// Raw editor input for a new entry, prior to validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub mood: Option<Mood>,
    pub activity: String,
}

impl EntryDraft {
    /// Validates and normalizes the draft into an insertable entry.
    ///
    /// Leading/trailing whitespace is trimmed everywhere. A blank title
    /// becomes [`UNTITLED_TITLE`]; a blank activity becomes `None`.
    pub fn validate(self) -> Result<NewEntry, DraftError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(DraftError::EmptyContent);
        }

        let title = self.title.trim();
        let activity = self.activity.trim();

        Ok(NewEntry {
            title: if title.is_empty() {
                UNTITLED_TITLE.to_string()
            } else {
                title.to_string()
            },
            content: content.to_string(),
            mood: self.mood,
            activity: (!activity.is_empty()).then(|| activity.to_string()),
        })
    }
}

/// A validated, normalized entry ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub mood: Option<Mood>,
    pub activity: Option<String>,
}

/// Partial update for an existing entry. `None` leaves a field unchanged;
/// the nested options clear the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<Option<Mood>>,
    pub activity: Option<Option<String>>,
}

impl EntryPatch {
    /// Applies the same normalization as [`EntryDraft::validate`] to the
    /// fields that are present. Content may not be updated to blank.
    pub fn validate(mut self) -> Result<Self, DraftError> {
        if let Some(content) = &self.content {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                return Err(DraftError::EmptyContent);
            }
            self.content = Some(trimmed.to_string());
        }

        if let Some(title) = &self.title {
            let trimmed = title.trim();
            self.title = Some(if trimmed.is_empty() {
                UNTITLED_TITLE.to_string()
            } else {
                trimmed.to_string()
            });
        }

        if let Some(Some(activity)) = &self.activity {
            let trimmed = activity.trim();
            self.activity = Some((!trimmed.is_empty()).then(|| trimmed.to_string()));
        }

        Ok(self)
    }
}
