//! Screen layout: scrolled page above a one-line status bar.

use super::constants::STATUS_BAR_HEIGHT;
use super::help::render_help_overlay;
use super::styles::PageStyles;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Key hints shown at the right edge of the status bar.
pub const KEY_HINTS: &str = " ?: help  q: quit ";

/// Split the screen into the page area and the status bar area.
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let [page_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)]).areas(area);
    (page_area, status_area)
}

/// Render the visible slice of `lines`, the status bar, and the help
/// overlay when it is open.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    lines: Vec<Line<'static>>,
    styles: &PageStyles,
) {
    let (page_area, status_area) = split_screen(frame.area());

    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(state.scroll_offset)
        .take(usize::from(page_area.height))
        .collect();
    frame.render_widget(Paragraph::new(visible), page_area);

    render_status_bar(frame, status_area, state, styles);

    if state.help_visible {
        render_help_overlay(frame, state.help_scroll, styles);
    }
}

/// Render the status bar: current section, status message, key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &PageStyles) {
    let hints_width = u16::try_from(KEY_HINTS.width()).unwrap_or(u16::MAX);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

    let section = state
        .current_section()
        .map(|s| s.title())
        .unwrap_or("Home");

    let mut spans = vec![Span::styled(format!(" {} ", section), styles.status_section)];
    if state.hero().is_active() {
        spans.push(Span::styled(" typing…", styles.status_bar));
    }
    if let Some(status) = &state.status {
        spans.push(Span::styled(format!(" {}", status), styles.status_bar));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(styles.status_bar),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::from(KEY_HINTS))
            .style(styles.status_bar)
            .alignment(Alignment::Right),
        right,
    );
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
