//! Leading/trailing rate limiter with latest-value-wins coalescing.
//!
//! The throttle never sleeps. Its owner asks for the next [`Throttle::deadline`]
//! and calls [`Throttle::take_due`] once it has passed.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug)]
pub struct Throttle<T> {
    interval: Duration,
    last_emit: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: None,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Offer a value observed at `now`.
    ///
    /// Returns it when a full interval has passed since the last emission.
    /// Otherwise it replaces any pending value and goes out at the deadline.
    pub fn offer(&mut self, value: T, now: Instant) -> Option<T> {
        match self.last_emit {
            Some(last) if now.saturating_duration_since(last) < self.interval => {
                self.pending = Some(value);
                None
            }
            _ => {
                self.pending = None;
                self.last_emit = Some(now);
                Some(value)
            }
        }
    }

    /// When the pending value may be emitted.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref()?;
        self.last_emit.map(|last| last + self.interval)
    }

    /// The pending value, if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.last_emit = Some(now);
        self.pending.take()
    }

    /// The pending value, regardless of the deadline.
    pub fn flush(&mut self, now: Instant) -> Option<T> {
        let value = self.pending.take()?;
        self.last_emit = Some(now);
        Some(value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
