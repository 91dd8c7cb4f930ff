//! Application state and transitions.
//!
//! AppState is the root state type: the profile being shown, the hero's
//! typing effect, and all UI state (scroll position, card focus, overlays).

use crate::model::{Profile, ProfileError, Section};
use crate::typing::{TimerId, TimerScheduler, TypingEffect};
use std::collections::HashSet;
use std::ops::Range;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How the hero tagline is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingOptions {
    /// Delay between typed characters.
    pub delay: Duration,
    /// `false` shows the tagline at once.
    pub animate: bool,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self {
            delay: crate::typing::DEFAULT_TICK_DELAY,
            animate: true,
        }
    }
}

/// Geometry of the last rendered page.
///
/// Written by the view after every layout and read by the navigation
/// handlers. All rows are in page coordinates (row 0 is the top of the
/// hero banner).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetrics {
    /// Total rendered rows.
    pub content_height: usize,
    /// Rows visible at once.
    pub viewport_height: usize,
    /// Row of each section heading, indexed by [`Section::index`].
    pub section_rows: [usize; 5],
    /// Rows covered by each project card, in profile order.
    pub project_rows: Vec<Range<usize>>,
}

impl PageMetrics {
    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Heading row of `section`.
    pub fn section_row(&self, section: Section) -> usize {
        self.section_rows[section.index()]
    }
}

/// Application state.
///
/// # State Machine
///
/// - **Hero**: typing (timer pending) → settled; restarted by replay or by a
///   reload that changes the tagline
/// - **Card focus**: none → project i, wrapping at both ends
/// - **Card face**: front ⇄ back per project (flip)
/// - **Help**: hidden ⇄ visible
#[derive(Debug)]
pub struct AppState {
    /// Data being shown. Replaced whole on reload, never edited.
    profile: Profile,

    /// Typing effect revealing the tagline.
    hero: TypingEffect,

    /// Registry the hero schedules its ticks in.
    scheduler: TimerScheduler,

    typing: TypingOptions,

    /// First visible page row.
    pub scroll_offset: usize,

    /// Project card with keyboard focus.
    pub focused_project: Option<usize>,

    /// Project cards currently showing their back face.
    pub flipped: HashSet<usize>,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Scroll offset inside the help overlay.
    pub help_scroll: u16,

    /// One-line message for the status bar (reload results).
    pub status: Option<String>,

    /// Geometry of the last rendered frame.
    pub metrics: PageMetrics,
}

impl AppState {
    /// Build the state for `profile` and mount the hero typing effect.
    pub fn new(
        profile: Profile,
        typing: TypingOptions,
        scheduler: &TimerScheduler,
        now: Instant,
    ) -> Self {
        let hero = mount_hero(&profile, typing, scheduler, now);
        Self {
            profile,
            hero,
            scheduler: scheduler.clone(),
            typing,
            scroll_offset: 0,
            focused_project: None,
            flipped: HashSet::new(),
            help_visible: false,
            help_scroll: 0,
            status: None,
            metrics: PageMetrics::default(),
        }
    }

    /// Profile being shown.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The hero typing effect.
    pub fn hero(&self) -> &TypingEffect {
        &self.hero
    }

    /// Typing configuration.
    pub fn typing(&self) -> TypingOptions {
        self.typing
    }

    /// Route an expired timer. Returns `true` if a redraw is needed.
    pub fn on_timer(&mut self, id: TimerId, now: Instant) -> bool {
        self.hero.on_tick(id, now)
    }

    /// Restart the tagline animation from the first character.
    ///
    /// The previous effect is dropped, which cancels its pending tick.
    pub fn replay_typing(&mut self, now: Instant) {
        self.hero = mount_hero(&self.profile, self.typing, &self.scheduler, now);
    }

    /// Apply the outcome of a profile reload.
    ///
    /// On success the profile is swapped in; a changed tagline restarts the
    /// typing effect and card state is reset. On failure the current
    /// profile stays and the error is shown in the status bar.
    pub fn apply_reload(&mut self, result: Result<Profile, ProfileError>, now: Instant) {
        match result {
            Ok(profile) => {
                self.hero.set_text(profile.tagline.clone(), now);
                if !self.typing.animate {
                    self.hero.finish();
                }
                self.profile = profile;
                self.flipped.clear();
                self.focused_project = self
                    .focused_project
                    .filter(|i| *i < self.profile.projects.len());
                info!(name = %self.profile.name, "profile reloaded");
                self.status = Some("Profile reloaded".to_string());
            }
            Err(err) => {
                warn!(error = %err, "profile reload failed; keeping current profile");
                self.status = Some(format!("Reload failed: {}", err));
            }
        }
    }

    /// Section containing the current scroll position, or `None` in the hero.
    ///
    /// When the page is scrolled to the bottom, the last heading on screen
    /// wins, so short trailing sections can still be current.
    pub fn current_section(&self) -> Option<Section> {
        let offset = self.scroll_offset;
        let max = self.metrics.max_scroll();
        let limit = if max > 0 && offset >= max {
            offset + self.metrics.viewport_height
        } else {
            offset + 1
        };

        Section::ALL
            .into_iter()
            .filter(|section| self.metrics.section_row(*section) < limit)
            .last()
            .filter(|_| self.metrics.content_height > 0)
    }

    /// Set the scroll offset, clamped to the page.
    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.metrics.max_scroll());
    }

    /// Record new page geometry and re-clamp the scroll offset.
    pub fn set_metrics(&mut self, metrics: PageMetrics) {
        self.metrics = metrics;
        self.scroll_offset = self.scroll_offset.min(self.metrics.max_scroll());
    }
}

fn mount_hero(
    profile: &Profile,
    typing: TypingOptions,
    scheduler: &TimerScheduler,
    now: Instant,
) -> TypingEffect {
    let mut hero = TypingEffect::mount(profile.tagline.clone(), typing.delay, scheduler, now);
    if !typing.animate {
        hero.finish();
    }
    hero
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
