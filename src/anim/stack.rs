//! Tag orchestration
//!
//! [`TimeStack`] derives every tag's phase from the current time, with no
//! state shared between tags. [`TapStack`] walks a fixed order of tags one
//! tap at a time.

use super::animator::{Animator, Appearance};
use super::timing::{Phase, Ramp, Timing, progress};

/// Time-driven set of tagged timings
#[derive(Debug, Clone)]
pub struct TimeStack<T> {
    timings: Vec<(T, Timing)>,
    default_ramp: Ramp,
}

impl<T: Copy + PartialEq> TimeStack<T> {
    pub fn new(default_ramp: Ramp) -> Self {
        Self {
            timings: Vec::new(),
            default_ramp,
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, tag: T, timing: Timing) -> Self {
        self.insert(tag, timing);
        self
    }

    /// Set the timing for `tag`, replacing any previous one
    pub fn insert(&mut self, tag: T, timing: Timing) {
        match self.timings.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, existing)) => *existing = timing,
            None => self.timings.push((tag, timing)),
        }
    }

    pub fn timing(&self, tag: T) -> Option<&Timing> {
        self.timings.iter().find(|(t, _)| *t == tag).map(|(_, timing)| timing)
    }

    /// Effective ramp for `tag`
    pub fn ramp(&self, tag: T) -> Option<Ramp> {
        self.timing(tag).map(|timing| timing.ramp_or(self.default_ramp))
    }

    pub fn tags(&self) -> impl Iterator<Item = T> + '_ {
        self.timings.iter().map(|(tag, _)| *tag)
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }

    /// Phase of `tag` at `t`; unknown tags never appear
    pub fn phase(&self, tag: T, t: f64) -> Phase {
        self.timing(tag)
            .map(|timing| timing.phase_with(t, timing.ramp_or(self.default_ramp)))
            .unwrap_or(Phase::Before)
    }

    /// Every tag with its phase at `t`, in insertion order
    pub fn phases(&self, t: f64) -> Vec<(T, Phase)> {
        self.timings
            .iter()
            .map(|(tag, timing)| (*tag, timing.phase_with(t, timing.ramp_or(self.default_ramp))))
            .collect()
    }

    /// Axis position of `tag` at `t`
    pub fn position(&self, tag: T, t: f64) -> f64 {
        self.timing(tag)
            .map(|timing| timing.position_with(t, timing.ramp_or(self.default_ramp)))
            .unwrap_or(-1.0)
    }

    pub fn appearance(&self, tag: T, t: f64, animator: &impl Animator) -> Appearance {
        animator.appearance(self.position(tag, t))
    }

    /// Time at which every finite tag has fully ramped out
    ///
    /// `None` when some tag stays forever.
    pub fn end(&self) -> Option<f64> {
        self.timings.iter().try_fold(0.0_f64, |end, (_, timing)| {
            timing.duration.is_finite().then(|| end.max(timing.end()))
        })
    }

    pub fn is_finished(&self, t: f64) -> bool {
        self.end().is_some_and(|end| t >= end)
    }
}

/// Tap-driven walk through a fixed order of tags
///
/// The first tag starts `During`. Each tap moves the current tag to `After`
/// and the next one to `During`. Tapping past the last tag schedules the
/// finish once its ramp out has played.
#[derive(Debug, Clone)]
pub struct TapStack<T> {
    order: Vec<T>,
    ramp: Ramp,
    current: usize,
    /// When each tag became current
    entered: Vec<Option<f64>>,
    /// When each tag was tapped away
    left: Vec<Option<f64>>,
    finish_at: Option<f64>,
    finish_reported: bool,
}

impl<T: Copy + PartialEq> TapStack<T> {
    pub fn new(order: Vec<T>, ramp: Ramp, now: f64) -> Self {
        let len = order.len();
        let mut entered = vec![None; len];
        if let Some(first) = entered.first_mut() {
            *first = Some(now);
        }
        Self {
            order,
            ramp,
            current: 0,
            entered,
            left: vec![None; len],
            finish_at: (len == 0).then_some(now),
            finish_reported: false,
        }
    }

    /// Tag currently shown, `None` once every tag has been tapped away
    pub fn current(&self) -> Option<T> {
        self.order.get(self.current).copied()
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.order.len()
    }

    /// Advance to the next tag; returns the new current tag
    ///
    /// Taps after the last tag has gone are ignored.
    pub fn tap(&mut self, now: f64) -> Option<T> {
        if self.is_done() {
            return None;
        }
        self.left[self.current] = Some(now);
        self.current += 1;
        match self.entered.get_mut(self.current) {
            Some(entered) => *entered = Some(now),
            None => {
                self.finish_at = Some(now + self.ramp.ramp_out);
                log::debug!("Tap stack finished, completing at {:.2}", now + self.ramp.ramp_out);
            }
        }
        self.current()
    }

    /// Reports the finish exactly once, after the last ramp out elapsed
    pub fn poll(&mut self, now: f64) -> bool {
        match self.finish_at {
            Some(at) if !self.finish_reported && now >= at => {
                self.finish_reported = true;
                true
            }
            _ => false,
        }
    }

    pub fn phase(&self, tag: T) -> Phase {
        match self.index_of(tag) {
            Some(i) if i < self.current => Phase::After,
            Some(i) if i == self.current => Phase::During,
            _ => Phase::Before,
        }
    }

    pub fn phases(&self) -> Vec<(T, Phase)> {
        self.order.iter().map(|tag| (*tag, self.phase(*tag))).collect()
    }

    /// Axis position of `tag` at `now`, ramping from the tap that moved it
    pub fn position(&self, tag: T, now: f64) -> f64 {
        let Some(i) = self.index_of(tag) else {
            return -1.0;
        };
        match (self.entered[i], self.left[i]) {
            (_, Some(left)) => progress(now - left, self.ramp.ramp_out),
            (Some(entered), None) => {
                -1.0 + progress(now - entered - self.ramp.ramp_in_delay, self.ramp.ramp_in)
            }
            (None, None) => -1.0,
        }
    }

    pub fn appearance(&self, tag: T, now: f64, animator: &impl Animator) -> Appearance {
        animator.appearance(self.position(tag, now))
    }

    fn index_of(&self, tag: T) -> Option<usize> {
        self.order.iter().position(|t| *t == tag)
    }
}
