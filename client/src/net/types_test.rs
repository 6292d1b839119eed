use super::*;

// =============================================================
// Activity
// =============================================================

#[test]
fn activity_parses_full_payload() {
    let activity: Activity = serde_json::from_value(serde_json::json!({
        "description": "Weekly chess",
        "schedule": "Fri 3pm",
        "category": "Games",
        "max_participants": 10,
        "participants": ["a@x.com", "b@x.com"]
    }))
    .unwrap();
    assert_eq!(activity.description, "Weekly chess");
    assert_eq!(activity.schedule, "Fri 3pm");
    assert_eq!(activity.category.as_deref(), Some("Games"));
    assert_eq!(activity.max_participants, 10);
    assert_eq!(activity.participants, vec!["a@x.com", "b@x.com"]);
    assert!(activity.time.is_none());
}

#[test]
fn activity_missing_fields_fall_back_to_defaults() {
    let activity: Activity = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(activity, Activity::default());
}

#[test]
fn activity_mistyped_fields_fall_back_to_defaults() {
    let activity: Activity = serde_json::from_value(serde_json::json!({
        "description": null,
        "schedule": 7,
        "category": "",
        "max_participants": "twelve",
        "participants": "a@x.com"
    }))
    .unwrap();
    assert_eq!(activity.description, "");
    assert_eq!(activity.schedule, "7");
    assert!(activity.category.is_none());
    assert_eq!(activity.max_participants, 0);
    assert!(activity.participants.is_empty());
}

#[test]
fn activity_participants_skip_non_string_entries() {
    let activity: Activity =
        serde_json::from_value(serde_json::json!({ "participants": ["a@x.com", 5, null, "b@x.com"] })).unwrap();
    assert_eq!(activity.participants, vec!["a@x.com", "b@x.com"]);
}

#[test]
fn activity_float_capacity_truncates() {
    let activity: Activity = serde_json::from_value(serde_json::json!({ "max_participants": 12.0 })).unwrap();
    assert_eq!(activity.max_participants, 12);
}

// =============================================================
// ActivityMap
// =============================================================

#[test]
fn activity_map_preserves_server_order() {
    let raw = r#"{"Zumba": {"schedule": "Mon"}, "Art": {"schedule": "Tue"}, "Chess": {"schedule": "Wed"}}"#;
    let map: ActivityMap = serde_json::from_str(raw).unwrap();
    let names: Vec<&str> = map.0.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Zumba", "Art", "Chess"]);
}

#[test]
fn activity_map_tolerates_non_object_values() {
    let map: ActivityMap = serde_json::from_str(r#"{"Broken": "nope", "Fine": {"schedule": "Mon"}}"#).unwrap();
    assert_eq!(map.0.len(), 2);
    assert_eq!(map.0[0].1, Activity::default());
    assert_eq!(map.0[1].1.schedule, "Mon");
}

#[test]
fn activity_map_rejects_non_object_body() {
    assert!(serde_json::from_str::<ActivityMap>("[1, 2, 3]").is_err());
    assert!(serde_json::from_str::<ActivityMap>("not json").is_err());
}

// =============================================================
// MutationResponse
// =============================================================

#[test]
fn mutation_response_reads_message_and_detail() {
    let ok: MutationResponse = serde_json::from_str(r#"{"message": "Signed up!"}"#).unwrap();
    assert_eq!(ok.message.as_deref(), Some("Signed up!"));
    assert!(ok.detail.is_none());

    let err: MutationResponse = serde_json::from_str(r#"{"detail": "Not found"}"#).unwrap();
    assert_eq!(err.detail.as_deref(), Some("Not found"));
}

#[test]
fn mutation_response_structured_detail_counts_as_absent() {
    let err: MutationResponse = serde_json::from_str(r#"{"detail": [{"loc": ["query", "email"]}]}"#).unwrap();
    assert!(err.detail.is_none());
}
