//! Time management utilities

use std::time::Duration;

/// Fixed-interval timer driven by frame deltas
///
/// Accumulates elapsed time and reports how many whole intervals have passed,
/// so a periodic callback can run at a steady rate regardless of frame rate.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    accumulated: Duration,
    fired: u64,
}

impl IntervalTimer {
    /// Create a timer that fires every `interval`
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            fired: 0,
        }
    }

    /// Create a timer from a millisecond interval
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Advance the timer, returning the number of intervals that elapsed
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if self.interval.is_zero() {
            self.fired += 1;
            return 1;
        }

        self.accumulated += delta;
        let mut ticks = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            ticks += 1;
        }
        self.fired += u64::from(ticks);
        ticks
    }

    /// Timer interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total number of intervals fired since creation
    pub fn fired(&self) -> u64 {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_until_interval() {
        let mut timer = IntervalTimer::from_millis(100);
        assert_eq!(timer.advance(Duration::from_millis(60)), 0);
        assert_eq!(timer.advance(Duration::from_millis(60)), 1);
        assert_eq!(timer.fired(), 1);
    }

    #[test]
    fn test_multiple_ticks_in_one_frame() {
        let mut timer = IntervalTimer::from_millis(100);
        assert_eq!(timer.advance(Duration::from_millis(350)), 3);
        assert_eq!(timer.advance(Duration::from_millis(50)), 1);
        assert_eq!(timer.fired(), 4);
    }

    #[test]
    fn test_zero_interval_fires_every_frame() {
        let mut timer = IntervalTimer::from_millis(0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.advance(Duration::ZERO), 1);
    }
}
