use std::cell::RefCell;
use std::time::Duration;

use super::{TimerCallback, TimerDriver, TimerId};

/// Virtual-clock driver. Time only moves when [`advance`] or
/// [`run_until_idle`] is called, which makes settle timing reproducible in
/// tests and scripted sessions.
///
/// [`advance`]: ManualTimerDriver::advance
/// [`run_until_idle`]: ManualTimerDriver::run_until_idle
#[derive(Default)]
pub struct ManualTimerDriver {
    clock: RefCell<ManualClock>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

struct PendingTimer {
    id: TimerId,
    due: Duration,
    callback: TimerCallback,
}

impl ManualTimerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the driver was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.clock
            .borrow()
            .pending
            .iter()
            .map(|timer| timer.due)
            .min()
    }

    /// Moves the clock forward and fires every timer that comes due, in
    /// deadline order. Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        let mut fired = 0;
        while let Some((id, callback)) = self.pop_due(target) {
            tracing::trace!(timer = id.get(), "firing timer");
            callback();
            fired += 1;
        }
        self.clock.borrow_mut().now = target;
        fired
    }

    /// Fires timers until none are pending, jumping the clock from deadline
    /// to deadline.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.next_due() {
            fired += self.advance(due.saturating_sub(self.now()));
        }
        fired
    }

    // The clock borrow is released before the callback runs so callbacks may
    // schedule or cancel timers.
    fn pop_due(&self, until: Duration) -> Option<(TimerId, TimerCallback)> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.id))
            .map(|(index, _)| index)?;
        let timer = clock.pending.remove(index);
        clock.now = timer.due;
        Some((timer.id, timer.callback))
    }
}

impl TimerDriver for ManualTimerDriver {
    fn schedule_once(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        let id = TimerId::new(clock.next_id);
        let due = clock.now.saturating_add(delay);
        clock.pending.push(PendingTimer { id, due, callback });
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        let mut clock = self.clock.borrow_mut();
        let before = clock.pending.len();
        clock.pending.retain(|timer| timer.id != id);
        clock.pending.len() != before
    }
}

impl std::fmt::Debug for ManualTimerDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualTimerDriver")
            .field("now", &clock.now)
            .field("pending", &clock.pending.len())
            .finish()
    }
}
