use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::filter::SortOrder;
use crate::entry::{Entry, Mood};

/// Normalizes raw search input into a query needle.
///
/// Blank (after trimming) input means "match all" and yields `None`.
/// Otherwise the trimmed text is lowercased once so stores can run a
/// case-insensitive substring match; internal whitespace is preserved as a
/// literal part of the needle.
pub fn normalize_search(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Query parameters the store understands, assembled by
/// [`FilterState::to_query`](super::FilterState::to_query).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryQuery {
    pub mood: Option<Mood>,
    pub activity: Option<String>,
    /// Inclusive lower bound on `created_at`; no upper bound exists.
    pub created_from: Option<NaiveDateTime>,
    /// Lowercased substring needle matched against title OR content.
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl EntryQuery {
    /// Row predicate equivalent of this query, for stores that filter
    /// in memory. Remote stores translate the fields into their own
    /// filter clauses instead.
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(mood) = self.mood {
            if entry.mood != Some(mood) {
                return false;
            }
        }
        if let Some(activity) = &self.activity {
            if entry.activity.as_deref() != Some(activity.as_str()) {
                return false;
            }
        }
        if let Some(from) = self.created_from {
            if entry.created_at < from {
                return false;
            }
        }
        if let Some(needle) = &self.search {
            let title_hit = entry
                .title
                .as_deref()
                .map(|t| t.to_lowercase().contains(needle))
                .unwrap_or(false);
            let content_hit = entry.content.to_lowercase().contains(needle);
            if !title_hit && !content_hit {
                return false;
            }
        }
        true
    }
}

/// One slice of the sorted result set, as inclusive zero-based row offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The `index`-th fixed-size page.
    pub fn page(index: usize, size: usize) -> Self {
        let start = index * size;
        Self {
            start,
            end: start + size - 1,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EntryId;
    use chrono::NaiveDate;

    fn entry(title: Option<&str>, content: &str) -> Entry {
        Entry {
            id: EntryId::new(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            title: title.map(|t| t.to_string()),
            content: content.to_string(),
            mood: Some(Mood::Neutral),
            activity: Some("reading".to_string()),
        }
    }

    #[test]
    fn normalize_search_trims_outer_whitespace_only() {
        assert_eq!(normalize_search("   "), None);
        assert_eq!(normalize_search(""), None);
        assert_eq!(
            normalize_search("  Long Day  "),
            Some("long day".to_string())
        );
    }

    #[test]
    fn search_matches_title_or_content_case_insensitively() {
        let query = EntryQuery {
            mood: None,
            activity: None,
            created_from: None,
            search: normalize_search("RAIN"),
            sort: SortOrder::Descending,
        };
        assert!(query.matches(&entry(Some("Rainy walk"), "stayed inside")));
        assert!(query.matches(&entry(None, "watched the rain fall")));
        assert!(!query.matches(&entry(Some("Sunny"), "clear skies")));
    }

    #[test]
    fn mood_and_activity_are_exact_matches() {
        let query = EntryQuery {
            mood: Some(Mood::Neutral),
            activity: Some("reading".to_string()),
            created_from: None,
            search: None,
            sort: SortOrder::Descending,
        };
        assert!(query.matches(&entry(None, "a page or two")));

        let query = EntryQuery {
            activity: Some("running".to_string()),
            ..query
        };
        assert!(!query.matches(&entry(None, "a page or two")));
    }

    #[test]
    fn created_from_is_inclusive() {
        let midnight = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let query = EntryQuery {
            mood: None,
            activity: None,
            created_from: Some(midnight),
            search: None,
            sort: SortOrder::Descending,
        };
        assert!(query.matches(&entry(None, "on the boundary day")));
    }

    #[test]
    fn page_range_offsets() {
        let range = PageRange::page(0, 10);
        assert_eq!((range.start, range.end), (0, 9));
        let range = PageRange::page(3, 10);
        assert_eq!((range.start, range.end), (30, 39));
        assert_eq!(range.len(), 10);
    }
}
