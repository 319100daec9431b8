use super::*;

#[test]
fn show_occupies_the_slot() {
    let mut state = NoticeState::default();
    let seq = state.show("Saved.", NoticeKind::Success);

    let notice = state.current.clone().unwrap();
    assert_eq!(notice.seq, seq);
    assert_eq!(notice.text, "Saved.");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert!(!notice.leaving);
}

#[test]
fn show_assigns_increasing_sequences() {
    let mut state = NoticeState::default();
    let first = state.show("one", NoticeKind::Info);
    let second = state.show("two", NoticeKind::Info);
    assert!(second > first);
}

#[test]
fn second_show_evicts_the_first() {
    let mut state = NoticeState::default();
    state.show("first", NoticeKind::Info);
    state.show("second", NoticeKind::Error);

    let notice = state.current.clone().unwrap();
    assert_eq!(notice.text, "second");
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[test]
fn begin_exit_marks_current_banner() {
    let mut state = NoticeState::default();
    let seq = state.show("bye", NoticeKind::Info);

    assert!(state.begin_exit(seq));
    assert!(state.current.clone().unwrap().leaving);
}

#[test]
fn begin_exit_is_ignored_for_stale_sequence() {
    let mut state = NoticeState::default();
    let first = state.show("first", NoticeKind::Info);
    state.show("second", NoticeKind::Info);

    assert!(!state.begin_exit(first));
    assert!(!state.current.clone().unwrap().leaving);
}

#[test]
fn begin_exit_only_fires_once() {
    let mut state = NoticeState::default();
    let seq = state.show("once", NoticeKind::Info);

    assert!(state.begin_exit(seq));
    assert!(!state.begin_exit(seq));
}

#[test]
fn dismiss_clears_matching_banner() {
    let mut state = NoticeState::default();
    let seq = state.show("done", NoticeKind::Success);

    assert!(state.dismiss(seq));
    assert!(state.current.is_none());
}

#[test]
fn dismiss_is_ignored_for_stale_sequence() {
    let mut state = NoticeState::default();
    let first = state.show("first", NoticeKind::Info);
    state.show("second", NoticeKind::Info);

    assert!(!state.dismiss(first));
    assert_eq!(state.current.clone().unwrap().text, "second");
}

#[test]
fn dismiss_on_empty_slot_is_ignored() {
    let mut state = NoticeState::default();
    assert!(!state.dismiss(0));
}
