//! Single-shot timers for the cooperative event loop.
//!
//! The event loop owns no callbacks. Components acquire a [`TimerGuard`]
//! from the [`TimerScheduler`], the loop asks the scheduler which timers
//! have expired, and routes each [`TimerId`] back to its owner.
//!
//! Dropping a guard removes its timer from the registry immediately, so a
//! component that is torn down (or that restarts) can never receive a tick
//! scheduled by its previous incarnation.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};
use tracing::trace;

/// Identifier of one scheduled timer. Never reused within a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Default)]
struct TimerQueue {
    next_id: u64,
    pending: BTreeMap<TimerId, Instant>,
}

/// Registry of pending single-shot timers.
///
/// Cheap to clone: clones share the same registry. Single-threaded by
/// construction (`Rc`), matching the event loop that drives it.
#[derive(Debug, Clone, Default)]
pub struct TimerScheduler {
    queue: Rc<RefCell<TimerQueue>>,
}

impl TimerScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer that expires `delay` after `now`.
    ///
    /// The timer stays registered only as long as the returned guard lives.
    pub fn schedule(&self, now: Instant, delay: Duration) -> TimerGuard {
        let mut queue = self.queue.borrow_mut();
        let id = TimerId(queue.next_id);
        queue.next_id += 1;
        let deadline = now + delay;
        queue.pending.insert(id, deadline);
        trace!(?id, ?delay, "timer scheduled");

        TimerGuard {
            id,
            queue: Some(Rc::downgrade(&self.queue)),
        }
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.borrow().pending.values().min().copied()
    }

    /// Remove and return every timer whose deadline is at or before `now`.
    ///
    /// Ordered by deadline, then by scheduling order.
    pub fn take_expired(&self, now: Instant) -> Vec<TimerId> {
        let mut queue = self.queue.borrow_mut();
        let mut expired: Vec<(Instant, TimerId)> = queue
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        expired.sort();

        for (_, id) in &expired {
            queue.pending.remove(id);
        }

        expired.into_iter().map(|(_, id)| id).collect()
    }

    /// Whether `id` is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.borrow().pending.contains_key(&id)
    }

    /// Number of timers waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.queue.borrow().pending.len()
    }
}

/// Ownership of one scheduled timer.
///
/// Dropping the guard (or calling [`TimerGuard::cancel`]) unregisters the
/// timer synchronously. Dropping a guard whose timer already fired is a
/// no-op.
#[derive(Debug)]
#[must_use = "dropping a TimerGuard cancels its timer"]
pub struct TimerGuard {
    id: TimerId,
    queue: Option<Weak<RefCell<TimerQueue>>>,
}

impl TimerGuard {
    /// The id the scheduler will report when this timer expires.
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Cancel the timer. Returns whether it was still pending.
    pub fn cancel(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        let Some(queue) = self.queue.take().and_then(|weak| weak.upgrade()) else {
            return false;
        };
        let removed = queue.borrow_mut().pending.remove(&self.id).is_some();
        if removed {
            trace!(id = ?self.id, "timer cancelled");
        }
        removed
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.release();
    }
}
