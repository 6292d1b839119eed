//! View models for the activity list, its cards, and the select controls.
//!
//! DESIGN
//! ======
//! The board renders from these plain values rather than from signals so the
//! whole list is a pure function of (snapshot, filters, load error). Components
//! only turn them into markup and bind the removal controls.

#[cfg(test)]
#[path = "activity_view_test.rs"]
mod activity_view_test;

use crate::net::types::Activity;
use crate::state::activities::{ActivitiesState, ActivityEntry, ActivitySnapshot};
use crate::state::filters::FilterState;
use crate::util::activity_query::filter_and_sort;

pub const LOADING_MESSAGE: &str = "Loading activities...";
pub const NO_ACTIVITIES_MESSAGE: &str = "No activities found.";
pub const NO_PARTICIPANTS_MESSAGE: &str = "No participants yet";
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";
pub const SELECT_ACTIVITY_LABEL: &str = "-- Select an activity --";

/// What the activity list region shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivityListView {
    /// No fetch has completed yet.
    Loading,
    /// The latest fetch failed; only the message is shown.
    Failed(String),
    /// Nothing matched; a single placeholder is shown.
    Empty,
    Cards(Vec<ActivityCardView>),
}

/// One rendered activity card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCardView {
    #[must_use]
    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// A participant line and the removal control it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

/// An `<option>` in one of the select controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn sentinel(label: &str) -> Self {
        Self { value: String::new(), label: label.to_owned() }
    }

    fn named(name: &str) -> Self {
        Self { value: name.to_owned(), label: name.to_owned() }
    }
}

/// Capacity minus enrollment. Negative when the server over-admits.
#[must_use]
pub fn spots_left(activity: &Activity) -> i64 {
    let enrolled = i64::try_from(activity.participants.len()).unwrap_or(i64::MAX);
    activity.max_participants.saturating_sub(enrolled)
}

#[must_use]
pub fn card_view(entry: &ActivityEntry) -> ActivityCardView {
    let participants = entry
        .activity
        .participants
        .iter()
        .map(|email| ParticipantRow { activity: entry.name.clone(), email: email.clone() })
        .collect();
    ActivityCardView {
        name: entry.name.clone(),
        description: entry.activity.description.clone(),
        schedule: entry.activity.schedule.clone(),
        spots_left: spots_left(&entry.activity),
        participants,
    }
}

/// Build the list region for the current store and controls.
#[must_use]
pub fn list_view(state: &ActivitiesState, filters: &FilterState) -> ActivityListView {
    if let Some(message) = &state.load_error {
        return ActivityListView::Failed(message.clone());
    }
    if !state.loaded() {
        return ActivityListView::Loading;
    }
    let entries = filter_and_sort(&state.snapshot, filters);
    if entries.is_empty() {
        return ActivityListView::Empty;
    }
    ActivityListView::Cards(entries.into_iter().map(card_view).collect())
}

/// Category filter options: the all-categories sentinel, then each category.
#[must_use]
pub fn category_options(snapshot: &ActivitySnapshot) -> Vec<SelectOption> {
    std::iter::once(SelectOption::sentinel(ALL_CATEGORIES_LABEL))
        .chain(snapshot.categories().iter().map(|c| SelectOption::named(c)))
        .collect()
}

/// Signup select options: the placeholder, then every activity name.
#[must_use]
pub fn activity_options(snapshot: &ActivitySnapshot) -> Vec<SelectOption> {
    std::iter::once(SelectOption::sentinel(SELECT_ACTIVITY_LABEL))
        .chain(snapshot.names().map(SelectOption::named))
        .collect()
}
