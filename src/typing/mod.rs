//! Character-by-character text reveal driven by single-shot timers.
//!
//! A [`TypingEffect`] owns its [`RevealState`] and at most one pending
//! [`TimerGuard`]. Each expired timer advances the reveal by exactly one
//! character and, if more text remains, schedules the next tick from the
//! firing time. Ticks therefore arrive strictly in sequence and are never
//! coalesced, even when the event loop falls behind.
//!
//! Teardown is handled by ownership: dropping the effect drops its guard,
//! which unregisters the pending timer before any later tick could reach it.

pub mod reveal;
pub mod timer;

pub use reveal::{RevealState, TargetText};
pub use timer::{TimerGuard, TimerId, TimerScheduler};

use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Delay between two revealed characters.
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(100);

/// Incremental reveal of a [`TargetText`].
#[derive(Debug)]
pub struct TypingEffect {
    target: TargetText,
    state: RevealState,
    delay: Duration,
    scheduler: TimerScheduler,
    pending: Option<TimerGuard>,
}

impl TypingEffect {
    /// Mount a new effect and schedule its first tick.
    ///
    /// An empty (or missing) text settles immediately without scheduling
    /// anything.
    pub fn mount(
        text: impl Into<TargetText>,
        delay: Duration,
        scheduler: &TimerScheduler,
        now: Instant,
    ) -> Self {
        let target = text.into();
        let mut effect = Self {
            state: RevealState::start(target.len()),
            target,
            delay,
            scheduler: scheduler.clone(),
            pending: None,
        };
        effect.schedule_next(now);
        debug!(
            chars = effect.target.len(),
            active = effect.state.is_active(),
            "typing effect mounted"
        );
        effect
    }

    /// Text revealed so far.
    pub fn displayed(&self) -> &str {
        self.target.prefix(self.state.current_length())
    }

    /// The full text being revealed.
    pub fn target(&self) -> &TargetText {
        &self.target
    }

    /// Current reveal progress.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Whether more ticks are expected.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Delay between ticks.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Id of the tick this effect is waiting for, if any.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending.as_ref().map(TimerGuard::id)
    }

    /// Handle an expired timer.
    ///
    /// Returns `true` when the displayed text changed. Ids that do not
    /// belong to the current pending tick are ignored.
    pub fn on_tick(&mut self, id: TimerId, now: Instant) -> bool {
        if self.pending_timer() != Some(id) {
            trace!(?id, "ignoring tick for another timer");
            return false;
        }
        self.pending = None;

        let before = self.state;
        self.state = self.state.advance(self.target.len());
        self.schedule_next(now);

        if !self.state.is_active() {
            debug!(chars = self.target.len(), "typing effect settled");
        }
        self.state != before
    }

    /// Replace the target text.
    ///
    /// The same text is a no-op. A different text cancels the pending tick
    /// and restarts the reveal from zero against the new target.
    pub fn set_text(&mut self, text: impl Into<TargetText>, now: Instant) {
        let target = text.into();
        if target == self.target {
            return;
        }

        self.cancel_pending();
        debug!(
            old_chars = self.target.len(),
            new_chars = target.len(),
            "typing effect restarted with new text"
        );
        self.state = RevealState::start(target.len());
        self.target = target;
        self.schedule_next(now);
    }

    /// Reveal the whole text at once and stop ticking.
    pub fn finish(&mut self) {
        self.cancel_pending();
        self.state = RevealState::settled(self.target.len());
    }

    fn schedule_next(&mut self, now: Instant) {
        if self.state.is_active() {
            self.pending = Some(self.scheduler.schedule(now, self.delay));
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(guard) = self.pending.take() {
            guard.cancel();
        }
    }
}

#[cfg(test)]
#[path = "typing_tests.rs"]
mod tests;
