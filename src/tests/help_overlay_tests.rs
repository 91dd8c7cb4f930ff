//! Acceptance tests for the help overlay.

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

#[test]
fn question_mark_opens_help() {
    let mut harness = AcceptanceTestHarness::new();

    harness.send_key(KeyCode::Char('?'));

    assert!(harness.state().help_visible);
    let screen = harness.render_to_string();
    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Navigation"));
}

#[test]
fn esc_and_question_mark_close_help() {
    let mut harness = AcceptanceTestHarness::new();

    harness.send_key(KeyCode::Char('?'));
    harness.send_key(KeyCode::Esc);
    assert!(!harness.state().help_visible);
    assert!(!harness.render_to_string().contains("Keyboard Shortcuts"));

    harness.send_key(KeyCode::Char('?'));
    harness.send_key(KeyCode::Char('?'));
    assert!(!harness.state().help_visible);
}

#[test]
fn page_keys_are_ignored_while_help_is_open() {
    let mut harness = AcceptanceTestHarness::new();
    harness.send_key(KeyCode::Char('?'));

    harness.send_keys(&[KeyCode::Char('3'), KeyCode::Char('n'), KeyCode::Enter]);

    assert_eq!(harness.state().scroll_offset, 0);
    assert_eq!(harness.state().focused_project, None);
    assert!(harness.state().flipped.is_empty());
}

#[test]
fn q_quits_from_help() {
    let mut harness = AcceptanceTestHarness::new();
    harness.send_key(KeyCode::Char('?'));

    assert!(harness.send_key(KeyCode::Char('q')));
}
