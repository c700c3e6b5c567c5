use super::*;

type El = &'static str;

fn open_with(focusables: &[El]) -> ModalController<El> {
    let mut modal = ModalController::new();
    modal.open(Some("contact-link"), focusables.to_vec());
    modal
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_from_browser_names() {
    assert_eq!(Key::from_name("Tab"), Key::Tab);
    assert_eq!(Key::from_name("Escape"), Key::Escape);
    assert_eq!(Key::from_name("Esc"), Key::Escape);
    assert_eq!(Key::from_name("Enter"), Key::Other);
    assert_eq!(Key::from_name("tab"), Key::Other);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn starts_closed() {
    let modal = ModalController::<El>::new();
    assert!(!modal.is_open());
    assert!(modal.session().is_none());
}

#[test]
fn open_focuses_first_focusable() {
    let mut modal = ModalController::new();
    let target = modal.open(Some("contact-link"), vec!["name", "email", "send"]);
    assert_eq!(target, Some(FocusTarget::Element("name")));
    assert!(modal.is_open());
}

#[test]
fn open_without_focusables_focuses_container() {
    let mut modal = ModalController::<El>::new();
    assert_eq!(modal.open(None, Vec::new()), Some(FocusTarget::Container));
}

#[test]
fn open_twice_keeps_first_session() {
    let mut modal = open_with(&["name", "send"]);
    assert_eq!(modal.open(Some("other"), vec!["x"]), None);
    let session = modal.session().unwrap();
    assert_eq!(session.previous_focus, Some("contact-link"));
    assert_eq!(session.focusables, vec!["name", "send"]);
}

#[test]
fn close_returns_previous_focus() {
    let mut modal = open_with(&["name", "send"]);
    let session = modal.close().unwrap();
    assert_eq!(session.previous_focus, Some("contact-link"));
    assert!(!modal.is_open());
}

#[test]
fn close_when_closed_is_noop() {
    let mut modal = ModalController::<El>::new();
    assert!(modal.close().is_none());
    let mut modal = open_with(&["name"]);
    assert!(modal.close().is_some());
    assert!(modal.close().is_none());
}

#[test]
fn reopen_after_close_records_fresh_session() {
    let mut modal = open_with(&["name"]);
    modal.close();
    modal.open(Some("footer-link"), vec!["email"]);
    let session = modal.session().unwrap();
    assert_eq!(session.previous_focus, Some("footer-link"));
    assert_eq!(session.first(), Some(&"email"));
}

// =============================================================
// Overlay click
// =============================================================

#[test]
fn overlay_click_closes_only_when_open() {
    let modal = open_with(&["name"]);
    assert!(modal.closes_on_click(true));
    assert!(!modal.closes_on_click(false));

    let closed = ModalController::<El>::new();
    assert!(!closed.closes_on_click(true));
}

// =============================================================
// Focus trap
// =============================================================

#[test]
fn tab_on_last_wraps_to_first() {
    let modal = open_with(&["name", "email", "send"]);
    let outcome = modal.on_key(Key::Tab, false, Focused::Element(&"send"));
    assert_eq!(outcome, KeyOutcome::MoveFocus("name"));
}

#[test]
fn tab_in_middle_passes_through() {
    let modal = open_with(&["name", "email", "send"]);
    assert_eq!(modal.on_key(Key::Tab, false, Focused::Element(&"name")), KeyOutcome::PassThrough);
    assert_eq!(modal.on_key(Key::Tab, false, Focused::Element(&"email")), KeyOutcome::PassThrough);
}

#[test]
fn shift_tab_on_first_wraps_to_last() {
    let modal = open_with(&["name", "email", "send"]);
    let outcome = modal.on_key(Key::Tab, true, Focused::Element(&"name"));
    assert_eq!(outcome, KeyOutcome::MoveFocus("send"));
}

#[test]
fn shift_tab_on_container_wraps_to_last() {
    let modal = open_with(&["name", "send"]);
    assert_eq!(modal.on_key(Key::Tab, true, Focused::Container), KeyOutcome::MoveFocus("send"));
}

#[test]
fn shift_tab_elsewhere_passes_through() {
    let modal = open_with(&["name", "email", "send"]);
    assert_eq!(modal.on_key(Key::Tab, true, Focused::Element(&"email")), KeyOutcome::PassThrough);
    assert_eq!(modal.on_key(Key::Tab, true, Focused::Nothing), KeyOutcome::PassThrough);
}

#[test]
fn single_focusable_wraps_both_directions() {
    let modal = open_with(&["send"]);
    assert_eq!(modal.on_key(Key::Tab, false, Focused::Element(&"send")), KeyOutcome::MoveFocus("send"));
    assert_eq!(modal.on_key(Key::Tab, true, Focused::Element(&"send")), KeyOutcome::MoveFocus("send"));
}

#[test]
fn tab_without_focusables_is_suppressed() {
    let modal = open_with(&[]);
    assert_eq!(modal.on_key(Key::Tab, false, Focused::Container), KeyOutcome::Suppress);
    assert_eq!(modal.on_key(Key::Tab, true, Focused::Container), KeyOutcome::Suppress);
}

#[test]
fn escape_closes_while_open() {
    let modal = open_with(&["name"]);
    assert_eq!(modal.on_key(Key::Escape, false, Focused::Element(&"name")), KeyOutcome::Close);
}

#[test]
fn escape_while_closed_has_no_effect() {
    let modal = ModalController::<El>::new();
    assert_eq!(modal.on_key(Key::Escape, false, Focused::Nothing), KeyOutcome::PassThrough);
}

#[test]
fn other_keys_pass_through() {
    let modal = open_with(&["name"]);
    assert_eq!(modal.on_key(Key::Other, false, Focused::Element(&"name")), KeyOutcome::PassThrough);
    assert_eq!(modal.on_key(Key::Other, true, Focused::Container), KeyOutcome::PassThrough);
}

#[test]
fn focusable_selector_excludes_negative_tabindex_and_hidden_inputs() {
    assert!(FOCUSABLE_SELECTOR.contains("[tabindex]:not([tabindex=\"-1\"])"));
    assert!(FOCUSABLE_SELECTOR.contains(":not([type=\"hidden\"])"));
}
