use std::time::Duration;

use tokio::time::Instant;

/// Bounded probe schedule: a fixed interval and a capped number of attempts,
/// restarted on every page load.
#[derive(Debug, Clone)]
pub struct RescanBudget {
    interval: Duration,
    attempts: u32,
    remaining: u32,
    next: Option<Instant>,
}

impl RescanBudget {
    pub fn new(interval: Duration, attempts: u32) -> Self {
        Self {
            interval,
            attempts,
            remaining: 0,
            next: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.remaining = self.attempts;
        self.next = (self.attempts > 0).then(|| now + self.interval);
    }

    pub fn stop(&mut self) {
        self.remaining = 0;
        self.next = None;
    }

    pub fn is_active(&self) -> bool {
        self.next.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Consume one attempt if it is due. Returns whether to probe now.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next {
            Some(due) if now >= due => {
                self.remaining = self.remaining.saturating_sub(1);
                self.next = (self.remaining > 0).then(|| now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(500);

    #[test]
    fn budget_is_spent_after_attempts() {
        let mut budget = RescanBudget::new(INTERVAL, 3);
        let mut now = Instant::now();
        budget.start(now);

        let mut probes = 0;
        while let Some(due) = budget.deadline() {
            now = due;
            if budget.tick(now) {
                probes += 1;
            }
        }
        assert_eq!(probes, 3);
        assert!(!budget.is_active());
    }

    #[test]
    fn early_tick_is_ignored() {
        let mut budget = RescanBudget::new(INTERVAL, 2);
        let t0 = Instant::now();
        budget.start(t0);
        assert!(!budget.tick(t0 + Duration::from_millis(100)));
        assert!(budget.tick(t0 + INTERVAL));
    }

    #[test]
    fn zero_attempts_never_schedules() {
        let mut budget = RescanBudget::new(INTERVAL, 0);
        budget.start(Instant::now());
        assert!(!budget.is_active());
    }

    #[test]
    fn restart_refills() {
        let mut budget = RescanBudget::new(INTERVAL, 1);
        let t0 = Instant::now();
        budget.start(t0);
        assert!(budget.tick(t0 + INTERVAL));
        assert!(!budget.is_active());
        budget.start(t0 + INTERVAL * 2);
        assert!(budget.is_active());
        budget.stop();
        assert!(budget.deadline().is_none());
    }
}
