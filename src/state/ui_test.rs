use super::*;

fn sample_image() -> GalleryImage {
    GalleryImage {
        src: "/images/gallery-01.jpg".to_owned(),
        alt: "Starter locs".to_owned(),
    }
}

#[test]
fn default_state_is_fully_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(!state.menu_instant);
    assert!(state.overlay.is_none());
    assert!(!state.header_scrolled);
    assert_eq!(state.booking_seq, 0);
    assert!(state.booking_service.is_none());
}

#[test]
fn open_menu_clears_transition_suppression() {
    let mut state = UiState::default();
    state.close_menu_without_transition();
    assert!(state.menu_instant);

    state.open_menu();
    assert!(state.menu_open);
    assert!(!state.menu_instant);
}

#[test]
fn close_menu_animates_by_default() {
    let mut state = UiState::default();
    state.open_menu();
    state.close_menu();
    assert!(!state.menu_open);
    assert!(!state.menu_instant);
}

#[test]
fn close_menu_without_transition_sets_both_flags() {
    let mut state = UiState::default();
    state.open_menu();
    state.close_menu_without_transition();
    assert!(!state.menu_open);
    assert!(state.menu_instant);
}

#[test]
fn overlay_slot_holds_one_image() {
    let mut state = UiState::default();
    state.open_overlay(sample_image());
    assert_eq!(state.overlay, Some(sample_image()));

    let replacement = GalleryImage {
        src: "/images/gallery-02.jpg".to_owned(),
        alt: "Silk press".to_owned(),
    };
    state.open_overlay(replacement.clone());
    assert_eq!(state.overlay, Some(replacement));

    state.close_overlay();
    assert!(state.overlay.is_none());
}

#[test]
fn scroll_locked_tracks_menu_and_overlay() {
    let mut state = UiState::default();
    assert!(!state.scroll_locked());

    state.open_menu();
    assert!(state.scroll_locked());

    state.close_menu();
    state.open_overlay(sample_image());
    assert!(state.scroll_locked());

    state.open_menu();
    assert!(state.scroll_locked());

    state.close_menu();
    state.close_overlay();
    assert!(!state.scroll_locked());
}

#[test]
fn request_booking_bumps_sequence_and_replaces_service() {
    let mut state = UiState::default();
    state.request_booking("Starter Locs");
    assert_eq!(state.booking_seq, 1);
    assert_eq!(state.booking_service.as_deref(), Some("Starter Locs"));

    state.request_booking("Silk Press");
    assert_eq!(state.booking_seq, 2);
    assert_eq!(state.booking_service.as_deref(), Some("Silk Press"));
}
