//! Filter and sort pipeline over the activity snapshot.
//!
//! Category filter, then case-insensitive text filter over name and
//! description, then a stable sort. Filters are conjunctive and the result
//! borrows from the snapshot.

#[cfg(test)]
#[path = "activity_query_test.rs"]
mod activity_query_test;

use std::cmp::Ordering;

use crate::net::types::Activity;
use crate::state::activities::{ActivityEntry, ActivitySnapshot};
use crate::state::filters::{FilterState, SortKey};

/// Filtered and ordered view of `snapshot` for the current controls.
#[must_use]
pub fn filter_and_sort<'a>(snapshot: &'a ActivitySnapshot, filters: &FilterState) -> Vec<&'a ActivityEntry> {
    let search = filters.search.trim().to_lowercase();
    let mut entries: Vec<&ActivityEntry> = snapshot
        .entries()
        .iter()
        .filter(|entry| matches_category(&entry.activity, &filters.category))
        .filter(|entry| matches_search(entry, &search))
        .collect();

    match filters.sort {
        SortKey::Name => entries.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::Time => entries.sort_by(|a, b| locale_cmp(time_key(&a.activity), time_key(&b.activity))),
        SortKey::Unsorted => {}
    }
    entries
}

fn matches_category(activity: &Activity, category: &str) -> bool {
    category.is_empty() || activity.category.as_deref() == Some(category)
}

// `needle` is already trimmed and lowercased.
fn matches_search(entry: &ActivityEntry, needle: &str) -> bool {
    needle.is_empty()
        || entry.name.to_lowercase().contains(needle)
        || entry.activity.description.to_lowercase().contains(needle)
}

/// Sort key for [`SortKey::Time`]: the schedule, else `time`, else empty.
#[must_use]
pub fn time_key(activity: &Activity) -> &str {
    if !activity.schedule.is_empty() {
        return &activity.schedule;
    }
    activity.time.as_deref().unwrap_or("")
}

/// Case-insensitive ordering with lowercase before uppercase on ties.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}
