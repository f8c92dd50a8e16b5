//! Deterministic timer source driven by an external clock.
//!
//! The host tells the scheduler how much time passed (frame delta in the GUI,
//! arbitrary steps in tests) and gets back the handles whose deadlines were
//! crossed. Nothing runs on another thread.

use std::time::Duration;
use crate::traits::{Scheduler, TimerHandle};

#[derive(Debug, Clone)]
struct RepeatingTimer {
    handle: TimerHandle,
    period: Duration,
    next_due: Duration,
}

/// [`Scheduler`] backed by a virtual clock.
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<RepeatingTimer>,
    armed_total: u64,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers currently armed.
    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of timers armed over the scheduler's lifetime.
    pub fn armed_total(&self) -> u64 {
        self.armed_total
    }

    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Time left until the earliest deadline, if any timer is armed.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.next_due.saturating_sub(self.now))
            .min()
    }

    /// Moves the clock forward and returns every firing that happened, in
    /// deadline order. A repeating timer fires once per period crossed.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        let target = self.now + elapsed;
        let mut fired = Vec::new();

        loop {
            let due = self
                .timers
                .iter_mut()
                .filter(|t| t.next_due <= target)
                .min_by_key(|t| (t.next_due, t.handle));

            let Some(timer) = due else { break };
            self.now = timer.next_due;
            timer.next_due += timer.period;
            fired.push(timer.handle);
        }

        self.now = target;
        fired
    }
}

impl Scheduler for VirtualScheduler {
    fn arm_repeating(&mut self, period_ms: u64) -> TimerHandle {
        // A zero period would fire forever within a single advance
        let period = Duration::from_millis(period_ms.max(1));
        let handle = TimerHandle::new(self.next_id);
        self.next_id += 1;
        self.armed_total += 1;

        self.timers.push(RepeatingTimer {
            handle,
            period,
            next_due: self.now + period,
        });
        log::trace!("Armed timer {} with period {:?}", handle.raw(), period);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        if self.timers.len() != before {
            log::trace!("Cancelled timer {}", handle.raw());
        }
    }
}
