//! Project card focus and flip handler.

use crate::model::KeyAction;
use crate::state::AppState;

/// Move card focus or flip the focused card.
///
/// Focus wraps at both ends and scrolls the focused card into view using
/// the last rendered geometry. Flipping without a focused card does
/// nothing.
pub fn handle_project_action(state: &mut AppState, action: KeyAction) {
    let count = state.profile().projects.len();

    match action {
        KeyAction::NextProject | KeyAction::PrevProject => {
            if count == 0 {
                state.focused_project = None;
                return;
            }
            let next = match (action, state.focused_project) {
                (KeyAction::NextProject, None) => 0,
                (_, None) => count - 1,
                (KeyAction::NextProject, Some(i)) => (i + 1) % count,
                (_, Some(i)) => (i + count - 1) % count,
            };
            state.focused_project = Some(next);
            scroll_card_into_view(state, next);
        }
        KeyAction::FlipCard => {
            if let Some(index) = state.focused_project {
                if !state.flipped.remove(&index) {
                    state.flipped.insert(index);
                }
            }
        }
        _ => {}
    }
}

fn scroll_card_into_view(state: &mut AppState, index: usize) {
    let Some(rows) = state.metrics.project_rows.get(index).cloned() else {
        return;
    };
    let viewport = state.metrics.viewport_height;
    let offset = state.scroll_offset;

    if rows.start < offset {
        state.scroll_to(rows.start);
    } else if rows.end > offset + viewport {
        // Bottom-align, but never push the card's top off screen.
        state.scroll_to(rows.end.saturating_sub(viewport).min(rows.start));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Profile;
    use crate::state::{PageMetrics, TypingOptions};
    use crate::typing::TimerScheduler;
    use std::time::Instant;

    fn state() -> AppState {
        let mut state = AppState::new(
            Profile::sample(),
            TypingOptions::default(),
            &TimerScheduler::new(),
            Instant::now(),
        );
        state.set_metrics(PageMetrics {
            content_height: 200,
            viewport_height: 20,
            section_rows: [20, 35, 50, 150, 180],
            project_rows: vec![52..60, 60..68, 68..80, 80..90, 90..140],
        });
        state
    }

    #[test]
    fn first_next_focuses_first_card() {
        let mut state = state();
        handle_project_action(&mut state, KeyAction::NextProject);
        assert_eq!(state.focused_project, Some(0));
        assert_eq!(state.scroll_offset, 40);
    }

    #[test]
    fn first_prev_focuses_last_card() {
        let mut state = state();
        handle_project_action(&mut state, KeyAction::PrevProject);
        assert_eq!(state.focused_project, Some(4));
    }

    #[test]
    fn focus_wraps_around() {
        let mut state = state();
        state.focused_project = Some(4);
        handle_project_action(&mut state, KeyAction::NextProject);
        assert_eq!(state.focused_project, Some(0));

        handle_project_action(&mut state, KeyAction::PrevProject);
        assert_eq!(state.focused_project, Some(4));
    }

    #[test]
    fn card_above_viewport_scrolls_to_its_top() {
        let mut state = state();
        state.scroll_to(100);
        state.focused_project = Some(2);
        handle_project_action(&mut state, KeyAction::PrevProject);
        assert_eq!(state.focused_project, Some(1));
        assert_eq!(state.scroll_offset, 60);
    }

    #[test]
    fn card_taller_than_viewport_keeps_its_top_visible() {
        let mut state = state();
        state.focused_project = Some(3);
        handle_project_action(&mut state, KeyAction::NextProject);
        assert_eq!(state.scroll_offset, 90);
    }

    #[test]
    fn visible_card_does_not_scroll() {
        let mut state = state();
        state.scroll_to(50);
        handle_project_action(&mut state, KeyAction::NextProject);
        assert_eq!(state.scroll_offset, 50);
    }

    #[test]
    fn flip_toggles_focused_card() {
        let mut state = state();
        state.focused_project = Some(1);

        handle_project_action(&mut state, KeyAction::FlipCard);
        assert!(state.flipped.contains(&1));

        handle_project_action(&mut state, KeyAction::FlipCard);
        assert!(!state.flipped.contains(&1));
    }

    #[test]
    fn flip_without_focus_is_noop() {
        let mut state = state();
        handle_project_action(&mut state, KeyAction::FlipCard);
        assert!(state.flipped.is_empty());
    }

    #[test]
    fn no_projects_means_no_focus() {
        let mut state = AppState::new(
            Profile {
                projects: Vec::new(),
                ..Profile::sample()
            },
            TypingOptions::default(),
            &TimerScheduler::new(),
            Instant::now(),
        );
        handle_project_action(&mut state, KeyAction::NextProject);
        assert_eq!(state.focused_project, None);
    }
}
