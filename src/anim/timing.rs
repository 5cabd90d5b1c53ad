//! Timings and phases
//!
//! A [`Timing`] places one tagged element on the timeline. Sampling it at a
//! time `t` yields a coarse [`Phase`] plus a continuous position in `[-1, 1]`
//! that animators turn into scale/opacity/offset.

use serde::{Deserialize, Serialize};

/// Coarse lifecycle of an animated element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    Before,
    During,
    After,
}

/// Transition lengths around an element's visible interval (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ramp {
    pub ramp_in: f64,
    pub ramp_out: f64,
    /// Delay between entering `During` and starting the ramp in
    #[serde(default)]
    pub ramp_in_delay: f64,
}

impl Ramp {
    /// Instant switches, no transition
    pub const NONE: Ramp = Ramp {
        ramp_in: 0.0,
        ramp_out: 0.0,
        ramp_in_delay: 0.0,
    };

    /// Same length in and out
    pub const fn symmetric(time: f64) -> Self {
        Self {
            ramp_in: time,
            ramp_out: time,
            ramp_in_delay: 0.0,
        }
    }

    pub const fn new(ramp_in: f64, ramp_out: f64) -> Self {
        Self {
            ramp_in,
            ramp_out,
            ramp_in_delay: 0.0,
        }
    }

    pub const fn delayed(mut self, delay: f64) -> Self {
        self.ramp_in_delay = delay;
        self
    }
}

/// Interval during which a tagged element is shown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub start: f64,
    /// May be `f64::INFINITY`: once started the element never leaves
    pub duration: f64,
    /// `None` falls back to the owning stack's default ramp
    pub ramp: Option<Ramp>,
}

impl Timing {
    pub const fn new(start: f64, duration: f64) -> Self {
        Self {
            start,
            duration,
            ramp: None,
        }
    }

    /// Starts at `start` and stays forever
    pub const fn forever(start: f64) -> Self {
        Self::new(start, f64::INFINITY)
    }

    pub const fn with_ramp(mut self, ramp: Ramp) -> Self {
        self.ramp = Some(ramp);
        self
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Ramp of this timing, or `fallback` when none was set
    pub fn ramp_or(&self, fallback: Ramp) -> Ramp {
        self.ramp.unwrap_or(fallback)
    }

    /// Phase at time `t` using this timing's own ramp (none if unset)
    pub fn phase(&self, t: f64) -> Phase {
        self.phase_with(t, self.ramp_or(Ramp::NONE))
    }

    /// Phase at time `t`, the ramp out tail already counts as `After`
    pub fn phase_with(&self, t: f64, ramp: Ramp) -> Phase {
        if t < self.start {
            Phase::Before
        } else if self.duration.is_infinite() {
            Phase::During
        } else if t >= self.end() - ramp.ramp_out {
            Phase::After
        } else {
            Phase::During
        }
    }

    /// Continuous position on the animator axis at time `t`
    ///
    /// `-1` until the ramp in begins, `0` once fully in, `1` once the ramp
    /// out has completed. Both ramps interpolate linearly.
    pub fn position(&self, t: f64) -> f64 {
        self.position_with(t, self.ramp_or(Ramp::NONE))
    }

    pub fn position_with(&self, t: f64, ramp: Ramp) -> f64 {
        match self.phase_with(t, ramp) {
            Phase::Before => -1.0,
            Phase::During => -1.0 + self.ramp_in_progress_with(t, ramp),
            Phase::After => self.ramp_out_progress_with(t, ramp),
        }
    }

    /// Fraction of the ramp in completed at `t`, in `[0, 1]`
    pub fn ramp_in_progress_with(&self, t: f64, ramp: Ramp) -> f64 {
        progress(t - self.start - ramp.ramp_in_delay, ramp.ramp_in)
    }

    /// Fraction of the ramp out completed at `t`, in `[0, 1]`
    pub fn ramp_out_progress_with(&self, t: f64, ramp: Ramp) -> f64 {
        if self.duration.is_infinite() {
            return 0.0;
        }
        progress(t - (self.end() - ramp.ramp_out), ramp.ramp_out)
    }
}

/// Fraction of a ramp of `length` seconds covered after `elapsed`
pub(super) fn progress(elapsed: f64, length: f64) -> f64 {
    if length <= 0.0 {
        if elapsed >= 0.0 { 1.0 } else { 0.0 }
    } else {
        (elapsed / length).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_phase_boundaries_without_ramp() {
        let timing = Timing::new(0.0, 2.0);
        assert_eq!(timing.phase(-1.0), Phase::Before);
        assert_eq!(timing.phase(0.0), Phase::During);
        assert_eq!(timing.phase(0.5), Phase::During);
        assert_eq!(timing.phase(2.0), Phase::After);
        assert_eq!(timing.phase(2.5), Phase::After);
    }

    #[test]
    fn test_ramp_out_tail_counts_as_after() {
        let timing = Timing::new(1.0, 2.0).with_ramp(Ramp::symmetric(0.5));
        assert_eq!(timing.phase(2.4), Phase::During);
        assert_eq!(timing.phase(2.5), Phase::After);
    }

    #[test]
    fn test_infinite_duration_never_ends() {
        let timing = Timing::forever(3.0).with_ramp(Ramp::symmetric(0.3));
        assert_eq!(timing.phase(2.9), Phase::Before);
        assert_eq!(timing.phase(3.0), Phase::During);
        assert_eq!(timing.phase(1.0e12), Phase::During);
        assert_eq!(timing.position(1.0e12), 0.0);
    }

    #[test]
    fn test_position_ramps() {
        let timing = Timing::new(1.0, 4.0).with_ramp(Ramp::new(1.0, 2.0).delayed(0.5));
        assert_eq!(timing.position(0.0), -1.0);
        // During, but the ramp in waits for its delay
        assert_eq!(timing.position(1.25), -1.0);
        assert!((timing.position(2.0) + 0.5).abs() < 1e-9);
        assert_eq!(timing.position(2.5), 0.0);
        // Ramp out covers [3, 5]
        assert!((timing.position(4.0) - 0.5).abs() < 1e-9);
        assert_eq!(timing.position(6.0), 1.0);
    }

    #[test]
    fn test_zero_ramp_positions_snap() {
        let timing = Timing::new(0.0, 1.0);
        assert_eq!(timing.position(0.0), 0.0);
        assert_eq!(timing.position(1.0), 1.0);
    }

    proptest! {
        #[test]
        fn test_phase_is_monotonic(
            start in 0.0f64..10.0,
            duration in 0.0f64..10.0,
            ramp_out in 0.0f64..1.0,
            a in -5.0f64..30.0,
            b in -5.0f64..30.0,
        ) {
            let timing = Timing::new(start, duration).with_ramp(Ramp::new(0.2, ramp_out));
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(timing.phase(early) <= timing.phase(late));
            prop_assert!(timing.position(early) <= timing.position(late));
        }
    }
}
