//! Repeating-schedule handle for gesture-scoped background activity.

use std::time::{Duration, Instant};

/// A fixed-period repeating schedule driven by an externally supplied
/// clock.
///
/// The widget core never samples wall-clock time itself; the host passes
/// `now` into [`Ticker::due_ticks`] when it pumps timers, which keeps
/// tick delivery deterministic under test. Cancellation is simply
/// dropping the ticker - the gesture tracker owns it inside the Active
/// state and disposes it on the Idle transition.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Creates a ticker whose first tick is due one period after `now`.
    ///
    /// Sub-millisecond periods are lifted to 1ms so a degenerate period
    /// cannot stall the pump loop.
    pub fn new(period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns how many ticks have become due up to (and including) `now`,
    /// advancing the schedule past them.
    ///
    /// A pump that arrives late observes every missed tick, matching the
    /// catch-up behavior of a repeating interval timer.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while self.next_due <= now {
            self.next_due += self.period;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tick_before_the_first_period_elapses() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(25), start);
        assert_eq!(ticker.due_ticks(start), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(24)), 0);
    }

    #[test]
    fn late_pump_observes_every_missed_tick() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(25), start);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(100)), 4);
        // Schedule advanced: nothing further due until the next period.
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(100)), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(125)), 1);
    }

    #[test]
    fn zero_period_is_lifted() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::ZERO, start);
        assert_eq!(ticker.period(), Duration::from_millis(1));
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(3)), 3);
    }
}
