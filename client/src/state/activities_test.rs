use super::*;

// =============================================================
// Helpers
// =============================================================

fn activity(category: Option<&str>) -> Activity {
    Activity { category: category.map(str::to_owned), ..Activity::default() }
}

fn map_of(entries: &[(&str, Option<&str>)]) -> ActivityMap {
    ActivityMap(
        entries
            .iter()
            .map(|(name, category)| ((*name).to_owned(), activity(*category)))
            .collect(),
    )
}

// =============================================================
// ActivitySnapshot
// =============================================================

#[test]
fn snapshot_keeps_server_order() {
    let snapshot = ActivitySnapshot::from_map(map_of(&[("Zumba", None), ("Art", None)]));
    assert_eq!(snapshot.names().collect::<Vec<_>>(), vec!["Zumba", "Art"]);
    assert_eq!(snapshot.len(), 2);
}

#[test]
fn snapshot_categories_are_distinct_in_first_seen_order() {
    let snapshot = ActivitySnapshot::from_map(map_of(&[
        ("Chess", Some("Games")),
        ("Choir", Some("Music")),
        ("Go", Some("Games")),
        ("Study Hall", None),
        ("Band", Some("Music")),
    ]));
    assert_eq!(snapshot.categories(), vec!["Games", "Music"]);
}

#[test]
fn default_snapshot_is_empty() {
    let state = ActivitiesState::default();
    assert!(state.snapshot.is_empty());
    assert!(state.load_error.is_none());
}

// =============================================================
// Fetch application
// =============================================================

#[test]
fn apply_fetch_replaces_snapshot_wholesale() {
    let mut state = ActivitiesState::default();
    let first = state.begin_fetch();
    state.apply_fetch(first, Ok(map_of(&[("Chess", None), ("Art", None)])));

    let second = state.begin_fetch();
    let outcome = state.apply_fetch(second, Ok(map_of(&[("Drama", None)])));
    assert_eq!(outcome, FetchOutcome::Replaced);
    assert_eq!(state.snapshot.names().collect::<Vec<_>>(), vec!["Drama"]);
}

#[test]
fn failed_fetch_keeps_previous_snapshot_and_sets_message() {
    let mut state = ActivitiesState::default();
    let first = state.begin_fetch();
    state.apply_fetch(first, Ok(map_of(&[("Chess", None)])));

    let second = state.begin_fetch();
    let outcome = state.apply_fetch(second, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome, FetchOutcome::Failed);
    assert_eq!(state.snapshot.names().collect::<Vec<_>>(), vec!["Chess"]);
    assert_eq!(state.load_error.as_deref(), Some(FETCH_FAILED_MESSAGE));
}

#[test]
fn successful_fetch_clears_load_error() {
    let mut state = ActivitiesState::default();
    let first = state.begin_fetch();
    state.apply_fetch(first, Err(ApiError::Status(500)));
    let second = state.begin_fetch();
    state.apply_fetch(second, Ok(map_of(&[("Chess", None)])));
    assert!(state.load_error.is_none());
}

#[test]
fn stale_response_does_not_overwrite_newer_snapshot() {
    let mut state = ActivitiesState::default();
    let older = state.begin_fetch();
    let newer = state.begin_fetch();

    assert_eq!(state.apply_fetch(newer, Ok(map_of(&[("New", None)]))), FetchOutcome::Replaced);
    assert_eq!(state.apply_fetch(older, Ok(map_of(&[("Old", None)]))), FetchOutcome::Stale);
    assert_eq!(state.snapshot.names().collect::<Vec<_>>(), vec!["New"]);
}

#[test]
fn stale_failure_does_not_raise_banner() {
    let mut state = ActivitiesState::default();
    let older = state.begin_fetch();
    let newer = state.begin_fetch();
    state.apply_fetch(newer, Ok(map_of(&[("New", None)])));
    assert_eq!(state.apply_fetch(older, Err(ApiError::Status(502))), FetchOutcome::Stale);
    assert!(state.load_error.is_none());
}

#[test]
fn tokens_increase_monotonically() {
    let mut state = ActivitiesState::default();
    let a = state.begin_fetch();
    let b = state.begin_fetch();
    assert!(b > a);
}

#[test]
fn clear_load_error_reports_change() {
    let mut state = ActivitiesState::default();
    assert!(!state.clear_load_error());
    let token = state.begin_fetch();
    state.apply_fetch(token, Err(ApiError::Unavailable));
    assert!(state.clear_load_error());
    assert!(state.load_error.is_none());
}

#[test]
fn loaded_flips_once_a_fetch_is_applied() {
    let mut state = ActivitiesState::default();
    let token = state.begin_fetch();
    assert!(!state.loaded());

    state.apply_fetch(token, Ok(map_of(&[])));
    assert!(state.loaded());
}
