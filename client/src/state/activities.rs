//! Activity snapshot store with fenced fetch application.
//!
//! DESIGN
//! ======
//! A fetch never patches the current snapshot: a successful response builds
//! a new immutable `ActivitySnapshot` that replaces the old one wholesale.
//! Every fetch takes a monotonically increasing `FetchToken` when issued,
//! and a completed fetch is applied only if its token is newer than the last
//! applied one, so overlapping refreshes cannot roll the view back.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use std::sync::Arc;

use crate::net::api::ApiError;
use crate::net::types::{Activity, ActivityMap};

/// Shown in place of the list when the latest fetch failed.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";

/// A named activity inside a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub name: String,
    pub activity: Activity,
}

/// Every activity as of one successful fetch, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitySnapshot {
    entries: Vec<ActivityEntry>,
}

impl ActivitySnapshot {
    #[must_use]
    pub fn from_map(map: ActivityMap) -> Self {
        let entries = map
            .0
            .into_iter()
            .map(|(name, activity)| ActivityEntry { name, activity })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for category in self.entries.iter().filter_map(|e| e.activity.category.as_deref()) {
            if !categories.iter().any(|seen| seen == category) {
                categories.push(category.to_owned());
            }
        }
        categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Issue order of a fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchToken(u64);

/// What `ActivitiesState::apply_fetch` did with a completed fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The snapshot was replaced.
    Replaced,
    /// The fetch failed; the previous snapshot is kept.
    Failed,
    /// A newer fetch already landed; the result was dropped.
    Stale,
}

/// The activity data store.
#[derive(Clone, Debug, Default)]
pub struct ActivitiesState {
    pub snapshot: Arc<ActivitySnapshot>,
    /// Set when the latest applied fetch failed.
    pub load_error: Option<String>,
    issued: u64,
    applied: u64,
}

impl ActivitiesState {
    /// Reserve a token for a fetch about to be issued.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.issued += 1;
        FetchToken(self.issued)
    }

    /// Apply a completed fetch unless a newer one has already been applied.
    pub fn apply_fetch(&mut self, token: FetchToken, result: Result<ActivityMap, ApiError>) -> FetchOutcome {
        if token.0 <= self.applied {
            return FetchOutcome::Stale;
        }
        self.applied = token.0;
        match result {
            Ok(map) => {
                self.snapshot = Arc::new(ActivitySnapshot::from_map(map));
                self.load_error = None;
                FetchOutcome::Replaced
            }
            Err(_) => {
                self.load_error = Some(FETCH_FAILED_MESSAGE.to_owned());
                FetchOutcome::Failed
            }
        }
    }

    /// Whether any fetch, successful or not, has completed.
    #[must_use]
    pub fn loaded(&self) -> bool {
        self.applied > 0
    }

    /// Drop the failure banner so the next render shows the kept snapshot.
    ///
    /// Returns whether anything changed.
    pub fn clear_load_error(&mut self) -> bool {
        self.load_error.take().is_some()
    }
}
