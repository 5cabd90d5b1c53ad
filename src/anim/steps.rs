//! Current-step selection for ordered step enums

use std::collections::BTreeMap;

use super::timing::Timing;

/// Timings for an ordered set of steps (logo reveal stages and the like)
#[derive(Debug, Clone)]
pub struct StepTimeline<S> {
    steps: BTreeMap<S, Timing>,
}

impl<S: Copy + Ord> Default for StepTimeline<S> {
    fn default() -> Self {
        Self {
            steps: BTreeMap::new(),
        }
    }
}

impl<S: Copy + Ord> StepTimeline<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, step: S, timing: Timing) -> Self {
        self.steps.insert(step, timing);
        self
    }

    pub fn timing(&self, step: S) -> Option<&Timing> {
        self.steps.get(&step)
    }

    /// Step with the latest `start <= t`; the first step before any start
    ///
    /// Steps sharing a start resolve to the later one in step order.
    pub fn current(&self, t: f64) -> Option<S> {
        let mut current: Option<(S, f64)> = None;
        for (step, timing) in &self.steps {
            if timing.start <= t && current.is_none_or(|(_, start)| timing.start >= start) {
                current = Some((*step, timing.start));
            }
        }
        current
            .map(|(step, _)| step)
            .or_else(|| self.steps.keys().next().copied())
    }

    /// Time at which the last step starts
    pub fn last_start(&self) -> Option<f64> {
        self.steps.values().map(|timing| timing.start).reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Reveal {
        Dot,
        Outline,
        Filled,
        Title,
    }

    fn timeline() -> StepTimeline<Reveal> {
        StepTimeline::new()
            .with(Reveal::Dot, Timing::new(0.5, 1.0))
            .with(Reveal::Outline, Timing::new(1.0, 1.0))
            .with(Reveal::Filled, Timing::new(2.0, 1.0))
            .with(Reveal::Title, Timing::forever(3.0))
    }

    #[test]
    fn test_current_step_latest_start() {
        let timeline = timeline();
        assert_eq!(timeline.current(1.5), Some(Reveal::Outline));
        assert_eq!(timeline.current(2.99), Some(Reveal::Filled));
        assert_eq!(timeline.current(50.0), Some(Reveal::Title));
    }

    #[test]
    fn test_current_step_inclusive_boundary() {
        let timeline = timeline();
        assert_eq!(timeline.current(1.0), Some(Reveal::Outline));
        assert_eq!(timeline.current(3.0), Some(Reveal::Title));
    }

    #[test]
    fn test_current_step_falls_back_to_first() {
        assert_eq!(timeline().current(0.0), Some(Reveal::Dot));
        assert_eq!(StepTimeline::<Reveal>::new().current(1.0), None);
    }

    #[test]
    fn test_last_start() {
        assert_eq!(timeline().last_start(), Some(3.0));
    }
}
