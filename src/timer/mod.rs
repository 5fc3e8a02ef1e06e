//! One-shot deferred callbacks.
//!
//! The controller never talks to a concrete event loop. It schedules through
//! [`TimerDriver`] and holds the returned id inside a [`TimerGuard`], which
//! cancels the timer when dropped.

use std::rc::Rc;
use std::time::Duration;

mod manual;

pub use manual::ManualTimerDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

pub type TimerCallback = Box<dyn FnOnce()>;

/// Event-loop hook for deferred work on the UI thread.
///
/// Implementations must not run `callback` before `schedule_once` returns.
pub trait TimerDriver {
    fn schedule_once(&self, delay: Duration, callback: TimerCallback) -> TimerId;

    /// Returns `false` when the timer already fired or was cancelled.
    fn cancel(&self, id: TimerId) -> bool;
}

/// Owns a scheduled timer and cancels it on drop.
pub struct TimerGuard {
    driver: Rc<dyn TimerDriver>,
    id: TimerId,
    delay: Duration,
}

impl TimerGuard {
    pub fn schedule(
        driver: &Rc<dyn TimerDriver>,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Self {
        let id = driver.schedule_once(delay, Box::new(callback));
        Self {
            driver: Rc::clone(driver),
            id,
            delay,
        }
    }
}

#[cfg(test)]
impl TimerGuard {
    fn id(&self) -> TimerId {
        self.id
    }

    fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if self.driver.cancel(self.id) {
            tracing::trace!(timer = self.id.get(), "cancelled pending timer");
        }
    }
}

impl std::fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerGuard")
            .field("id", &self.id)
            .field("delay", &self.delay)
            .finish()
    }
}
