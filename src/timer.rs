//! Deterministic single-threaded timers.
//!
//! The engine needs two scheduled mechanisms — a per-session input-type
//! poll and the manager's deferred keyboard removal — and models both as
//! cancellable tasks driven by an explicit `now`, not as blocking waits or
//! background threads. Cancelling an already-fired or already-cancelled
//! timer is a no-op.

use std::time::{Duration, Instant};

/// Single cancellable deferred task carrying a payload.
#[derive(Debug, Default)]
pub struct OneShot<T> {
    armed: Option<(Instant, T)>,
}

impl<T> OneShot<T> {
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// Arm the task. If a task was already in flight, it is displaced and
    /// its payload returned so the owner can finalize it.
    pub fn arm(&mut self, deadline: Instant, payload: T) -> Option<T> {
        self.armed
            .replace((deadline, payload))
            .map(|(_, prev)| prev)
    }

    /// Cancel, returning the pending payload if one was in flight.
    pub fn cancel(&mut self) -> Option<T> {
        self.armed.take().map(|(_, payload)| payload)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Fire if due, disarming the task.
    pub fn fire_due(&mut self, now: Instant) -> Option<T> {
        match &self.armed {
            Some((deadline, _)) if now >= *deadline => self.cancel(),
            _ => None,
        }
    }
}

/// Fixed-period repeating timer.
#[derive(Debug)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// True when the interval elapsed; advances the next deadline.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if now >= deadline => {
                self.next = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}
