use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::query::{normalize_search, EntryQuery};
use crate::entry::Mood;

/// Lower-bound presets for the feed's date filter.
///
/// Ranges are always "from X to present"; no upper bound is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    /// Inclusive lower bound for `created_at`, relative to local wall-clock
    /// `now`. `All` has no bound. Weeks start on Sunday.
    pub fn lower_bound(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let today = now.date();
        match self {
            DateRange::All => None,
            DateRange::Today => Some(midnight(today)),
            DateRange::Week => {
                let back = today.weekday().num_days_from_sunday() as u64;
                Some(midnight(today - Days::new(back)))
            }
            DateRange::Month => {
                // day 1 always exists for a valid date
                let first = today.with_day(1).expect("first day of month");
                Some(midnight(first))
            }
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Feed ordering by `created_at`. Ties are left to the store's natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// The five filter dimensions of the feed.
///
/// The default state yields the unfiltered, newest-first feed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// `None` means "any mood".
    pub mood: Option<Mood>,
    /// Exact-match activity label; `None` means "any activity".
    pub activity: Option<String>,
    pub date_range: DateRange,
    pub sort: SortOrder,
    /// Raw search input; blank means no search filter.
    pub search: String,
}

impl FilterState {
    /// Merges a partial update into the state.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(mood) = patch.mood {
            self.mood = mood;
        }
        if let Some(activity) = patch.activity {
            self.activity = activity;
        }
        if let Some(date_range) = patch.date_range {
            self.date_range = date_range;
        }
        if let Some(sort) = patch.sort {
            self.sort = sort;
        }
        if let Some(search) = patch.search {
            self.search = search;
        }
    }

    /// Translates the state into store query parameters, resolving the date
    /// range against `now`.
    pub fn to_query(&self, now: NaiveDateTime) -> EntryQuery {
        EntryQuery {
            mood: self.mood,
            activity: self.activity.clone(),
            created_from: self.date_range.lower_bound(now),
            search: normalize_search(&self.search),
            sort: self.sort,
        }
    }
}

/// Partial update of [`FilterState`].
///
/// Outer `None` leaves the dimension unchanged; for clearable dimensions the
/// inner option resets back to "any". The empty patch re-issues the current
/// filters unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterPatch {
    pub mood: Option<Option<Mood>>,
    pub activity: Option<Option<String>>,
    pub date_range: Option<DateRange>,
    pub sort: Option<SortOrder>,
    pub search: Option<String>,
}
