//! Tests for screen layout rendering.

use super::*;
use crate::model::Profile;
use crate::state::{PageMetrics, TypingOptions};
use crate::typing::TimerScheduler;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Instant;

// ===== Test Helpers =====

fn settled_state() -> (AppState, TimerScheduler) {
    let scheduler = TimerScheduler::new();
    let typing = TypingOptions {
        animate: false,
        ..TypingOptions::default()
    };
    let state = AppState::new(Profile::sample(), typing, &scheduler, Instant::now());
    (state, scheduler)
}

fn numbered_lines(count: usize) -> Vec<Line<'static>> {
    (0..count).map(|i| Line::from(format!("row {}", i))).collect()
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

fn draw(terminal: &mut Terminal<TestBackend>, state: &AppState, lines: Vec<Line<'static>>) {
    let styles = PageStyles::default();
    terminal
        .draw(|frame| render_layout(frame, state, lines, &styles))
        .unwrap();
}

// ===== Tests =====

#[test]
fn split_screen_reserves_last_row_for_status() {
    let (page, status) = split_screen(Rect::new(0, 0, 80, 24));
    assert_eq!(page, Rect::new(0, 0, 80, 23));
    assert_eq!(status, Rect::new(0, 23, 80, 1));
}

#[test]
fn page_starts_at_scroll_offset() {
    let (mut state, _scheduler) = settled_state();
    state.set_metrics(PageMetrics {
        content_height: 50,
        viewport_height: 9,
        ..PageMetrics::default()
    });
    state.scroll_to(7);
    let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();

    draw(&mut terminal, &state, numbered_lines(50));

    assert!(row_text(&terminal, 0).starts_with("row 7"));
    assert!(row_text(&terminal, 8).starts_with("row 15"));
}

#[test]
fn status_bar_shows_home_in_hero_and_hints() {
    let (state, _scheduler) = settled_state();
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();

    draw(&mut terminal, &state, numbered_lines(5));

    let status = row_text(&terminal, 9);
    assert!(status.starts_with(" Home "), "got {:?}", status);
    assert!(status.trim_end().ends_with("?: help  q: quit"));
}

#[test]
fn status_bar_shows_current_section_and_message() {
    let (mut state, _scheduler) = settled_state();
    state.set_metrics(PageMetrics {
        content_height: 100,
        viewport_height: 9,
        section_rows: [10, 20, 30, 40, 50],
        project_rows: vec![],
    });
    state.scroll_to(21);
    state.status = Some("Profile reloaded".to_string());
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();

    draw(&mut terminal, &state, numbered_lines(100));

    let status = row_text(&terminal, 9);
    assert!(status.starts_with(" Skills  Profile reloaded"), "got {:?}", status);
}

#[test]
fn status_bar_marks_typing_in_progress() {
    let scheduler = TimerScheduler::new();
    let state = AppState::new(
        Profile::sample(),
        TypingOptions::default(),
        &scheduler,
        Instant::now(),
    );
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();

    draw(&mut terminal, &state, numbered_lines(5));

    assert!(row_text(&terminal, 9).contains("typing…"));
}

#[test]
fn help_overlay_drawn_when_visible() {
    let (mut state, _scheduler) = settled_state();
    state.help_visible = true;
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    draw(&mut terminal, &state, numbered_lines(40));

    let screen: String = (0..30).map(|y| row_text(&terminal, y)).collect();
    assert!(screen.contains("Keyboard Shortcuts"));
}
