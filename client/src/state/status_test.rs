use super::*;

// =============================================================
// StatusState transitions
// =============================================================

#[test]
fn status_state_starts_hidden() {
    let state = StatusState::default();
    assert!(state.current.is_none());
    assert_eq!(state.visible_seq(), None);
    assert_eq!(state.class(), "hidden");
    assert_eq!(state.text(), "");
}

#[test]
fn show_makes_message_visible_with_tone_class() {
    let mut state = StatusState::default();
    state.show(StatusMessage::success("Signed up!"));
    assert_eq!(state.text(), "Signed up!");
    assert_eq!(state.class(), "success");

    state.show(StatusMessage::error("Not found"));
    assert_eq!(state.text(), "Not found");
    assert_eq!(state.class(), "error");
}

#[test]
fn hide_for_current_sequence_hides_regardless_of_tone() {
    for message in [StatusMessage::success("ok"), StatusMessage::error("bad")] {
        let mut state = StatusState::default();
        let seq = state.show(message);
        assert!(state.hide(seq));
        assert_eq!(state.class(), "hidden");
    }
}

#[test]
fn hide_for_older_sequence_keeps_newer_message() {
    let mut state = StatusState::default();
    let first = state.show(StatusMessage::success("first"));
    let second = state.show(StatusMessage::error("second"));
    assert!(second > first);

    assert!(!state.hide(first));
    assert_eq!(state.text(), "second");
    assert_eq!(state.visible_seq(), Some(second));

    assert!(state.hide(second));
    assert!(state.current.is_none());
}

#[test]
fn hide_is_idempotent() {
    let mut state = StatusState::default();
    let seq = state.show(StatusMessage::success("ok"));
    assert!(state.hide(seq));
    assert!(!state.hide(seq));
}

#[test]
fn repeating_same_text_restarts_sequence() {
    let mut state = StatusState::default();
    let first = state.show(StatusMessage::success("Signed up!"));
    let second = state.show(StatusMessage::success("Signed up!"));
    assert_ne!(first, second);
}

#[test]
fn display_window_is_five_seconds() {
    assert_eq!(STATUS_DISPLAY_MS, 5_000);
}
