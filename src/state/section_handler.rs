//! Section navigation keyboard action handler.

use crate::model::{KeyAction, Section};
use crate::state::AppState;
use tracing::debug;

/// Jump between section headings.
///
/// - `NextSection`: first heading below the current offset
/// - `PrevSection`: last heading above the current offset, else the hero
/// - `JumpTo(s)`: heading of `s`
///
/// Targets past the end of the page clamp to the bottom.
pub fn handle_section_action(state: &mut AppState, action: KeyAction) {
    let offset = state.scroll_offset;
    let rows = state.metrics.section_rows;

    let target = match action {
        KeyAction::NextSection => match rows.iter().copied().find(|row| *row > offset) {
            Some(row) => row,
            None => return,
        },
        KeyAction::PrevSection => rows
            .iter()
            .copied()
            .filter(|row| *row < offset)
            .last()
            .unwrap_or(0),
        KeyAction::JumpTo(section) => state.metrics.section_row(section),
        _ => return,
    };

    state.scroll_to(target);
    debug!(
        offset = state.scroll_offset,
        section = ?state.current_section().map(Section::anchor),
        "section navigation"
    );
}
