//! Fixed-interval tick scheduler for the run loop.
//!
//! The run loop owns the ticker; when the loop returns the ticker is dropped
//! with it, so no tick can be delivered after teardown. Time is passed in
//! explicitly so the schedule can be tested without sleeping.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
    /// Time left until the next tick at the moment of pausing.
    paused_remaining: Option<Duration>,
}

impl Ticker {
    /// Start ticking; the first tick is due one interval after `now`.
    pub fn start(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_due: now + interval,
            paused_remaining: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.paused_remaining.is_some()
    }

    /// How long the loop may block waiting for input before the next tick.
    ///
    /// While paused this is a full interval; input is the only thing to wait for.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.is_paused() {
            return self.interval;
        }
        self.next_due.saturating_duration_since(now)
    }

    /// Returns true (and re-arms) when a tick is due.
    ///
    /// Missed ticks are not replayed: after a stall the next tick is one
    /// interval after `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_paused() || now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    /// Suspend or resume. A resumed ticker keeps the time that was left.
    pub fn toggle_pause(&mut self, now: Instant) {
        match self.paused_remaining.take() {
            Some(remaining) => self.next_due = now + remaining,
            None => self.paused_remaining = Some(self.next_due.saturating_duration_since(now)),
        }
    }

    /// Restart the schedule from `now`, e.g. after a new round begins.
    pub fn rearm(&mut self, now: Instant) {
        self.next_due = now + self.interval;
        if self.paused_remaining.is_some() {
            self.paused_remaining = Some(self.interval);
        }
    }
}
