//! Domain-level keyboard actions independent of key bindings.

use crate::model::Section;

/// User intent, decoupled from the keys that trigger it.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the page up one line. Default: k/↑
    ScrollUp,
    /// Scroll the page down one line. Default: j/↓
    ScrollDown,
    /// Scroll up one viewport. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down one viewport. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the hero banner. Default: g/Home
    ScrollToTop,
    /// Jump to the footer. Default: G/End
    ScrollToBottom,

    // Section navigation
    /// Jump to the next section heading. Default: Tab/]
    NextSection,
    /// Jump to the previous section heading (or the hero). Default: Shift+Tab/[
    PrevSection,
    /// Jump to a specific section. Default: 1-5
    JumpTo(Section),

    // Project cards
    /// Focus the next project card. Default: n/Ctrl+j
    NextProject,
    /// Focus the previous project card. Default: p/Ctrl+k
    PrevProject,
    /// Flip the focused project card. Default: Enter/Space
    FlipCard,

    // Hero
    /// Restart the tagline typing animation. Default: r
    ReplayTyping,
    /// Reload the profile from its source. Default: R
    Reload,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Close the help overlay. Default: Esc
    CloseHelp,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
