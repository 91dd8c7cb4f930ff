//! Keyboard bindings configuration.

use crate::model::{KeyAction, Section};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides vim-style defaults.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup, so repeat or
    /// release events resolve to the same action as the press.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Every key bound to `action`, for help text.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|key| format!("{:?}", key.code));
        keys
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Vim-style scrolling
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::Char('G'), KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Arrow / navigation keys
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);

        // Sections
        keys.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextSection);
        keys.bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::NextSection);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevSection);
        keys.bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::PrevSection);
        for section in Section::ALL {
            let digit = char::from(b'1' + section.index() as u8);
            keys.bind(
                KeyCode::Char(digit),
                KeyModifiers::NONE,
                KeyAction::JumpTo(section),
            );
        }

        // Project cards
        keys.bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextProject);
        keys.bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::PrevProject);
        keys.bind(KeyCode::Char('j'), KeyModifiers::CONTROL, KeyAction::NextProject);
        keys.bind(KeyCode::Char('k'), KeyModifiers::CONTROL, KeyAction::PrevProject);
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::FlipCard);
        keys.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::FlipCard);

        // Hero
        keys.bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::ReplayTyping);
        keys.bind(KeyCode::Char('R'), KeyModifiers::SHIFT, KeyAction::Reload);
        keys.bind(KeyCode::Char('R'), KeyModifiers::NONE, KeyAction::Reload);

        // Application controls
        // Terminals disagree on whether shifted symbols carry SHIFT.
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::CloseHelp);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
