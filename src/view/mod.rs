//! TUI rendering and terminal management (impure shell)

pub mod card;
pub mod constants;
mod help;
mod layout;
pub mod page;
pub mod section;
mod styles;
pub mod wrap;

pub use card::{render_card, CardFace};
pub use help::{help_line_count, render_help_overlay};
pub use layout::{render_layout, split_screen};
pub use page::{build_page, Page};
pub use styles::{ColorConfig, PageStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction, Profile, ProfileError};
use crate::source::ProfileSource;
use crate::state::{
    handle_project_action, handle_scroll_action, handle_section_action, AppState, TypingOptions,
};
use crate::typing::TimerScheduler;
use constants::IDLE_POLL_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The profile could not be loaded at startup
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(err) => AppError::Terminal(err),
            TuiError::Profile(err) => AppError::Profile(err),
        }
    }
}

/// Options that shape the TUI at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    /// How the hero tagline is revealed.
    pub typing: TypingOptions,
    /// Disable colors (`--no-color`); `NO_COLOR` is honored as well.
    pub no_color: bool,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    scheduler: TimerScheduler,
    key_bindings: KeyBindings,
    profile_source: ProfileSource,
    styles: PageStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen. The profile is
    /// loaded by the caller so load errors print on a normal terminal.
    pub fn new(
        profile: Profile,
        profile_source: ProfileSource,
        options: ViewOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let styles = PageStyles::with_color_config(ColorConfig::from_env_and_args(options.no_color));
        Ok(Self::assemble(
            terminal,
            profile,
            profile_source,
            options.typing,
            styles,
            Instant::now(),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Sleeps until the next typing
    /// tick is due or an input event arrives, so a settled page costs no
    /// CPU beyond an idle poll.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let idle = Duration::from_millis(IDLE_POLL_INTERVAL_MS);

        self.draw()?;

        loop {
            let now = Instant::now();
            let timeout = self
                .scheduler
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(now))
                .unwrap_or(idle);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.fire_due_timers(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn assemble(
        terminal: Terminal<B>,
        profile: Profile,
        profile_source: ProfileSource,
        typing: TypingOptions,
        styles: PageStyles,
        now: Instant,
    ) -> Self {
        let scheduler = TimerScheduler::new();
        let app_state = AppState::new(profile, typing, &scheduler, now);
        Self {
            terminal,
            app_state,
            scheduler,
            key_bindings: KeyBindings::default(),
            profile_source,
            styles,
        }
    }

    /// Deliver every timer due at `now`. Returns `true` if a redraw is needed.
    fn fire_due_timers(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for id in self.scheduler.take_expired(now) {
            changed |= self.app_state.on_timer(id, now);
        }
        changed
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if self.app_state.help_visible {
            return self.handle_help_key(action);
        }

        self.app_state.status = None;

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => {
                self.app_state.help_visible = true;
                self.app_state.help_scroll = 0;
            }
            KeyAction::CloseHelp => {}
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => handle_scroll_action(&mut self.app_state, action),
            KeyAction::NextSection | KeyAction::PrevSection | KeyAction::JumpTo(_) => {
                handle_section_action(&mut self.app_state, action)
            }
            KeyAction::NextProject | KeyAction::PrevProject | KeyAction::FlipCard => {
                handle_project_action(&mut self.app_state, action)
            }
            KeyAction::ReplayTyping => {
                debug!("replaying tagline");
                self.app_state.replay_typing(now);
            }
            KeyAction::Reload => {
                info!(source = %self.profile_source.describe(), "reloading profile");
                let result = self.profile_source.load();
                self.app_state.apply_reload(result, now);
            }
        }
        false
    }

    /// Keys while the help overlay is open: close, scroll, or quit.
    fn handle_help_key(&mut self, action: KeyAction) -> bool {
        let max_scroll = u16::try_from(help_line_count().saturating_sub(1)).unwrap_or(u16::MAX);
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help | KeyAction::CloseHelp => self.app_state.help_visible = false,
            KeyAction::ScrollDown => {
                self.app_state.help_scroll = (self.app_state.help_scroll + 1).min(max_scroll)
            }
            KeyAction::ScrollUp => {
                self.app_state.help_scroll = self.app_state.help_scroll.saturating_sub(1)
            }
            KeyAction::ScrollToTop => self.app_state.help_scroll = 0,
            _ => {}
        }
        false
    }

    /// Render the current frame
    ///
    /// Lays out the page for the current terminal size, records its geometry
    /// in the state (re-clamping the scroll offset), then renders.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width.max(1), size.height);
        let (page_area, _) = split_screen(frame_area);

        let page = build_page(
            &self.app_state,
            page_area.width,
            page_area.height,
            &self.styles,
        );
        self.app_state.set_metrics(page.metrics);

        let lines = page.lines;
        self.terminal.draw(|frame| {
            render_layout(frame, &self.app_state, lines, &self.styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        profile: Profile,
        profile_source: ProfileSource,
        typing: TypingOptions,
        now: Instant,
    ) -> Self {
        Self::assemble(
            terminal,
            profile,
            profile_source,
            typing,
            PageStyles::default(),
            now,
        )
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn scheduler(&self) -> &TimerScheduler {
        &self.scheduler
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    pub(crate) fn fire_due_timers_test(&mut self, now: Instant) -> bool {
        self.fire_due_timers(now)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application for a profile source.
///
/// Loads the profile first, so a bad profile is reported before the
/// terminal switches to raw mode. The terminal is restored whether the
/// event loop ends normally or with an error.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(profile_source: ProfileSource, options: ViewOptions) -> Result<(), TuiError> {
    let profile = profile_source.load()?;
    info!(
        source = %profile_source.describe(),
        name = %profile.name,
        "starting portfolio view"
    );

    let mut app = match TuiApp::new(profile, profile_source, options) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn create_test_app(typing: TypingOptions) -> (TuiApp<TestBackend>, Instant) {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let now = Instant::now();
        let app = TuiApp::new_for_test(
            terminal,
            Profile::sample(),
            ProfileSource::Sample,
            typing,
            now,
        );
        (app, now)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn tui_error_shows_profile_message() {
        let err: TuiError = ProfileError::NotFound {
            path: "/missing.toml".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Profile not found: /missing.toml");
    }

    #[test]
    fn tui_error_converts_to_app_error() {
        let err: AppError = TuiError::Io(io::Error::other("gone")).into();
        assert!(matches!(err, AppError::Terminal(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let (mut app, now) = create_test_app(TypingOptions::default());
        assert!(app.handle_key(key(KeyCode::Char('q')), now));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let (mut app, now) = create_test_app(TypingOptions::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c, now));
    }

    #[test]
    fn handle_key_other_returns_false() {
        let (mut app, now) = create_test_app(TypingOptions::default());
        assert!(!app.handle_key(key(KeyCode::Char('x')), now));
    }

    #[test]
    fn key_release_is_ignored() {
        let (mut app, now) = create_test_app(TypingOptions::default());
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert!(!app.handle_key(release, now));
    }

    #[test]
    fn draw_records_page_metrics() {
        let (mut app, _) = create_test_app(TypingOptions::default());
        app.draw().unwrap();

        let metrics = &app.app_state.metrics;
        assert_eq!(metrics.viewport_height, 23);
        assert!(metrics.content_height > metrics.viewport_height);
        assert_eq!(metrics.project_rows.len(), 5);
    }

    #[test]
    fn timers_drive_the_hero() {
        let (mut app, start) = create_test_app(TypingOptions::default());

        assert!(!app.fire_due_timers(start + Duration::from_millis(99)));
        assert!(app.fire_due_timers(start + Duration::from_millis(100)));
        assert_eq!(app.app_state.hero().displayed(), "I");
    }

    #[test]
    fn help_swallows_navigation_keys() {
        let (mut app, now) = create_test_app(TypingOptions::default());
        app.draw().unwrap();

        app.handle_key(key(KeyCode::Char('?')), now);
        assert!(app.app_state.help_visible);

        app.handle_key(key(KeyCode::Char('j')), now);
        assert_eq!(app.app_state.scroll_offset, 0);
        assert_eq!(app.app_state.help_scroll, 1);

        app.handle_key(key(KeyCode::Esc), now);
        assert!(!app.app_state.help_visible);
    }

    #[test]
    fn help_scroll_is_clamped() {
        let (mut app, now) = create_test_app(TypingOptions::default());
        app.handle_key(key(KeyCode::Char('?')), now);

        for _ in 0..200 {
            app.handle_key(key(KeyCode::Char('j')), now);
        }

        assert_eq!(
            usize::from(app.app_state.help_scroll),
            help_line_count() - 1
        );
    }

    #[test]
    fn next_key_clears_status_message() {
        let (mut app, now) = create_test_app(TypingOptions::default());
        app.app_state.status = Some("Profile reloaded".to_string());

        app.handle_key(key(KeyCode::Char('j')), now);

        assert_eq!(app.app_state.status, None);
    }

    #[test]
    fn reload_from_sample_keeps_typing_progress() {
        let (mut app, start) = create_test_app(TypingOptions::default());
        let now = start + Duration::from_millis(300);
        app.fire_due_timers(start + Duration::from_millis(100));
        app.fire_due_timers(start + Duration::from_millis(200));
        app.fire_due_timers(now);

        app.handle_key(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT), now);

        assert_eq!(app.app_state.hero().displayed(), "I b");
        assert_eq!(app.app_state.status.as_deref(), Some("Profile reloaded"));
    }
}
