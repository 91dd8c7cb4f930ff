//! Vertical scrolling keyboard action handler.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a scroll action against the last rendered page geometry.
///
/// Offsets are clamped to `[0, content_height - viewport_height]`.
/// Non-scroll actions are ignored.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) {
    let offset = state.scroll_offset;
    let page = state.metrics.viewport_height.max(1);

    let target = match action {
        KeyAction::ScrollDown => offset.saturating_add(1),
        KeyAction::ScrollUp => offset.saturating_sub(1),
        KeyAction::PageDown => offset.saturating_add(page),
        KeyAction::PageUp => offset.saturating_sub(page),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => usize::MAX,
        _ => return,
    };

    state.scroll_to(target);
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
