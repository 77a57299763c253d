//! Derived journal statistics.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Current consecutive-day write streak plus the most recent entry day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub current_streak: u32,
    /// `None` when the journal is empty.
    pub last_entry_date: Option<NaiveDate>,
}

/// Profile dashboard stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalStats {
    pub entry_count: usize,
    pub streak: StreakResult,
}

/// Computes the current write streak over the full entry set.
///
/// Entries are reduced to distinct local calendar days; multiple entries on
/// one day count once. The walk starts at `today` and moves back one day at
/// a time, so a journal without an entry for today has a streak of 0 — an
/// entry from yesterday alone does not keep a streak alive.
pub fn compute_streak(entries: &[Entry], today: NaiveDate) -> StreakResult {
    let last_entry_date = entries
        .iter()
        .map(|e| e.created_at.date())
        .max();

    let days: BTreeSet<NaiveDate> = entries.iter().map(|e| e.created_at.date()).collect();

    let mut current_streak = 0;
    let mut cursor = today;
    for day in days.iter().rev() {
        if *day != cursor {
            break;
        }
        current_streak += 1;
        cursor = cursor - Days::new(1);
    }

    StreakResult {
        current_streak,
        last_entry_date,
    }
}
