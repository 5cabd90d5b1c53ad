//! Evenly spaced sequences of timed items

use serde::{Deserialize, Serialize};

use super::stack::TimeStack;
use super::timing::{Ramp, Timing};

/// How consecutive items in a sequence meet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Join {
    /// Blank time between one item leaving and the next arriving
    Gap(f64),
    /// Next item starts ramping in as soon as the previous is fully out
    Juxtapose,
    /// Ramps overlap by `amount * ramp_time`, clamped to `[0, 2]`
    Mix(f64),
    /// Equivalent to `Mix(1.0)`
    CrossFade,
    /// Next item is fully in before the previous starts leaving, plus extra
    Overlap(f64),
}

impl Join {
    /// Signed offset subtracted from the naive back-to-back start
    pub fn overlap(self, ramp_time: f64) -> f64 {
        match self {
            Join::Gap(gap) => -gap,
            Join::Juxtapose => 0.0,
            Join::Mix(amount) => amount.clamp(0.0, 2.0) * ramp_time,
            Join::CrossFade => ramp_time,
            Join::Overlap(extra) => 2.0 * ramp_time + extra,
        }
    }
}

/// Layout parameters for [`sequenced`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Length of the lead-in item 0
    pub delay: f64,
    /// Length of each following item
    pub duration: f64,
    pub ramp_time: f64,
    pub join: Join,
    /// Keep the last item on screen forever
    pub stay: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            delay: 1.0,
            duration: 3.0,
            ramp_time: 0.3,
            join: Join::CrossFade,
            stay: false,
        }
    }
}

impl SequenceConfig {
    /// Timing of item `index` in a sequence of `count` items
    pub fn timing(&self, index: usize, count: usize) -> Timing {
        let ramp = Ramp::symmetric(self.ramp_time);
        if index == 0 {
            let duration = if self.stay && count == 1 { f64::INFINITY } else { self.delay };
            return Timing::new(0.0, duration).with_ramp(ramp);
        }
        let spacing = self.duration - self.join.overlap(self.ramp_time);
        let start = self.delay + (index - 1) as f64 * spacing;
        let duration = if self.stay && index + 1 == count {
            f64::INFINITY
        } else {
            self.duration
        };
        Timing::new(start, duration).with_ramp(ramp)
    }
}

/// Lay out `count` items: item 0 is a lead-in lasting `delay`, the rest are
/// spaced by `duration - join.overlap(ramp_time)`
pub fn sequenced(config: &SequenceConfig, count: usize) -> Vec<Timing> {
    (0..count).map(|i| config.timing(i, count)).collect()
}

/// [`sequenced`] keyed by `tags`, in order
pub fn sequenced_stack<T: Copy + PartialEq>(config: &SequenceConfig, tags: &[T]) -> TimeStack<T> {
    tags.iter()
        .zip(sequenced(config, tags.len()))
        .fold(TimeStack::new(Ramp::symmetric(config.ramp_time)), |stack, (tag, timing)| {
            stack.with(*tag, timing)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::Phase;
    use proptest::prelude::*;

    fn starts(timings: &[Timing]) -> Vec<f64> {
        timings.iter().map(|t| t.start).collect()
    }

    #[test]
    fn test_join_overlap_values() {
        assert_eq!(Join::Gap(0.5).overlap(0.3), -0.5);
        assert_eq!(Join::Juxtapose.overlap(0.3), 0.0);
        assert!((Join::Mix(0.5).overlap(0.4) - 0.2).abs() < 1e-12);
        assert!((Join::Mix(5.0).overlap(0.4) - 0.8).abs() < 1e-12);
        assert_eq!(Join::Mix(-1.0).overlap(0.4), 0.0);
        assert_eq!(Join::CrossFade.overlap(0.3), Join::Mix(1.0).overlap(0.3));
        assert!((Join::Overlap(0.1).overlap(0.3) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_juxtaposed_layout() {
        let config = SequenceConfig {
            delay: 5.0,
            duration: 5.0,
            ramp_time: 0.3,
            join: Join::Juxtapose,
            stay: false,
        };
        let timings = sequenced(&config, 3);
        assert_eq!(starts(&timings), vec![0.0, 5.0, 10.0]);
        assert!(timings.iter().all(|t| t.duration == 5.0));
    }

    #[test]
    fn test_gap_starts_later() {
        let config = SequenceConfig {
            delay: 1.0,
            duration: 2.0,
            ramp_time: 0.3,
            join: Join::Gap(0.5),
            stay: false,
        };
        assert_eq!(starts(&sequenced(&config, 4)), vec![0.0, 1.0, 3.5, 6.0]);
    }

    #[test]
    fn test_cross_fade_starts_with_previous_ramp_out() {
        let config = SequenceConfig {
            delay: 1.0,
            duration: 2.0,
            ramp_time: 0.5,
            join: Join::CrossFade,
            stay: false,
        };
        let timings = sequenced(&config, 3);
        let (first, second) = (timings[1], timings[2]);
        assert_eq!(second.start, 2.5);
        assert_eq!(first.phase(second.start), Phase::After);
        assert_eq!(first.phase(second.start - 0.01), Phase::During);
    }

    #[test]
    fn test_stay_keeps_last_item() {
        let config = SequenceConfig {
            stay: true,
            ..Default::default()
        };
        let timings = sequenced(&config, 3);
        assert!(timings[1].duration.is_finite());
        assert!(timings[2].duration.is_infinite());
        assert!(sequenced(&config, 1)[0].duration.is_infinite());
    }

    #[test]
    fn test_sequenced_stack_tags() {
        let stack = sequenced_stack(&SequenceConfig::default(), &["lead", "a", "b"]);
        assert_eq!(stack.tags().collect::<Vec<_>>(), vec!["lead", "a", "b"]);
        assert_eq!(stack.phase("a", 1.5), Phase::During);
    }

    proptest! {
        #[test]
        fn test_spacing_is_constant(
            delay in 0.0f64..5.0,
            duration in 1.0f64..5.0,
            ramp_time in 0.0f64..0.5,
            count in 2usize..8,
        ) {
            let config = SequenceConfig {
                delay,
                duration,
                ramp_time,
                join: Join::CrossFade,
                stay: false,
            };
            let timings = sequenced(&config, count);
            prop_assert_eq!(timings.len(), count);
            for pair in timings[1..].windows(2) {
                prop_assert!((pair[1].start - pair[0].start - (duration - ramp_time)).abs() < 1e-9);
            }
        }
    }
}
