//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user
//! interactions. Time is virtual: timers fire only when the test advances
//! the clock, each at its own deadline.

use crate::model::Profile;
use crate::source::ProfileSource;
use crate::state::{AppState, TypingOptions};
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Trailing whitespace is trimmed from every row.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Mirrors the production event loop: every key and every batch of fired
/// timers is followed by a redraw, so page geometry is always current.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    now: Instant,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Sample profile, animated typing, 80x24 terminal.
    pub fn new() -> Self {
        Self::with_profile(Profile::sample(), 80, 24)
    }

    /// Custom profile with animated typing.
    pub fn with_profile(profile: Profile, width: u16, height: u16) -> Self {
        Self::with_options(
            profile,
            ProfileSource::Sample,
            TypingOptions::default(),
            width,
            height,
        )
    }

    /// Full control over profile, its reload source, and typing options.
    pub fn with_options(
        profile: Profile,
        source: ProfileSource,
        typing: TypingOptions,
        width: u16,
        height: u16,
    ) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal never fails");
        let now = Instant::now();
        let mut app = TuiApp::new_for_test(terminal, profile, source, typing, now);
        app.render_test().expect("initial render");

        Self {
            app,
            now,
            running: true,
        }
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        if self.app.handle_key_test(KeyEvent::new(key, mods), self.now) {
            self.running = false;
            return true;
        }

        self.app.render_test().expect("render after key");
        false
    }

    /// Send several plain keys in order.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Advance the virtual clock, firing every timer that comes due.
    ///
    /// Timers fire one deadline at a time, in order, with the clock set to
    /// that deadline, so a tick scheduled by a firing tick is seen too.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;

        while let Some(deadline) = self
            .app
            .scheduler()
            .next_deadline()
            .filter(|deadline| *deadline <= target)
        {
            self.now = self.now.max(deadline);
            if self.app.fire_due_timers_test(self.now) {
                self.app.render_test().expect("render after tick");
            }
        }

        self.now = target;
    }

    /// Render and return the screen as text, one row per line.
    pub fn render_to_string(&mut self) -> String {
        self.app.render_test().expect("render");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Screen row `y` as text, trailing whitespace trimmed.
    pub fn row(&mut self, y: usize) -> String {
        self.render_to_string()
            .lines()
            .nth(y)
            .unwrap_or_default()
            .to_string()
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Timers still registered with the scheduler.
    pub fn pending_timers(&self) -> usize {
        self.app.scheduler().pending_count()
    }

    /// Whether the app is still running (not quit).
    pub fn is_running(&self) -> bool {
        self.running
    }
}
