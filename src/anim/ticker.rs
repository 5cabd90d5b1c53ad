//! Fixed-interval sampling of a clock

use crate::platform::Clock;

/// Turns a clock into a monotonic series of tick times
///
/// A sample is reported only when a new interval boundary has been crossed,
/// and never earlier than the previous one, so phases computed from the
/// samples never move backwards.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f64,
    origin: f64,
    last_tick: Option<i64>,
}

impl Ticker {
    /// Ticker whose time zero is `origin` on the clock
    pub fn new(origin: f64, interval: f64) -> Self {
        Self {
            interval: interval.max(f64::EPSILON),
            origin,
            last_tick: None,
        }
    }

    /// Ticker starting now on `clock`
    pub fn starting_now(clock: &impl Clock, interval: f64) -> Self {
        Self::new(clock.elapsed(), interval)
    }

    pub fn sample(&mut self, clock: &impl Clock) -> Option<f64> {
        self.sample_at(clock.elapsed())
    }

    /// Tick time for clock reading `now`, `None` if no new tick is due
    pub fn sample_at(&mut self, now: f64) -> Option<f64> {
        let tick = ((now - self.origin) / self.interval).floor() as i64;
        if self.last_tick.is_some_and(|last| tick <= last) {
            return None;
        }
        self.last_tick = Some(tick);
        Some(tick as f64 * self.interval)
    }

    /// Latest reported tick time
    pub fn current(&self) -> Option<f64> {
        self.last_tick.map(|tick| tick as f64 * self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_INTERVAL;
    use crate::platform::ManualClock;

    #[test]
    fn test_ticks_quantize_and_skip_repeats() {
        let clock = ManualClock::new(10.0);
        let mut ticker = Ticker::starting_now(&clock, 0.5);
        assert_eq!(ticker.sample(&clock), Some(0.0));
        clock.advance(0.2);
        assert_eq!(ticker.sample(&clock), None);
        clock.advance(0.4);
        assert_eq!(ticker.sample(&clock), Some(0.5));
        clock.advance(1.1);
        assert_eq!(ticker.sample(&clock), Some(1.5));
        assert_eq!(ticker.current(), Some(1.5));
    }

    #[test]
    fn test_clock_going_back_is_ignored() {
        let mut ticker = Ticker::new(0.0, TICK_INTERVAL);
        assert!(ticker.sample_at(3.05).is_some());
        assert_eq!(ticker.sample_at(1.0), None);
        let next = ticker.sample_at(3.15).unwrap();
        assert!((next - 3.1).abs() < 1e-9);
    }
}
