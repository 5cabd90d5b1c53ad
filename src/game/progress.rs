//! Play history and adaptive difficulty
//!
//! All difficulty decisions are read off the history: the level-up streak,
//! the two "make it easier" tiers and the total score.

use std::collections::BTreeMap;

use super::result::PlayResult;
use super::screen::ScoreLine;
use crate::tuning::Tuning;

/// Strength of a "make it easier" adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easier {
    /// Three failures in a row at the same time limit
    Mild,
    /// Six failures in a row
    Strong,
}

/// Results history, best times and the current level/time limit
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    results: Vec<PlayResult>,
    best_times: BTreeMap<u32, f64>,
    pub level: u32,
    pub time: f64,
}

impl Progress {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            results: Vec::new(),
            best_times: BTreeMap::new(),
            level: tuning.default_level,
            time: tuning.default_time,
        }
    }

    /// Every recorded round, oldest first
    pub fn results(&self) -> &[PlayResult] {
        &self.results
    }

    pub fn best_times(&self) -> &BTreeMap<u32, f64> {
        &self.best_times
    }

    pub fn best_time(&self, level: u32) -> Option<f64> {
        self.best_times.get(&level).copied()
    }

    /// Append results in order and fold successes into the best times
    pub fn add_results(&mut self, results: impl IntoIterator<Item = PlayResult>) {
        for result in results {
            if result.is_success() {
                self.best_times
                    .entry(result.level)
                    .and_modify(|best| *best = best.min(result.time))
                    .or_insert(result.time);
            }
            self.results.push(result);
        }
    }

    /// Continue from the most recent round, or the defaults
    pub fn setup_level_and_time(&mut self, tuning: &Tuning) {
        match self.results.last() {
            Some(last) => {
                self.level = last.level;
                self.time = last.time;
            }
            None => {
                self.level = tuning.default_level;
                self.time = tuning.default_time;
            }
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Current level and time limit
    pub fn display(&self) -> ScoreLine {
        ScoreLine {
            level: self.level,
            time: self.time,
        }
    }

    /// Best time per level, lowest level first
    pub fn scoreboard(&self) -> Vec<ScoreLine> {
        self.best_times
            .iter()
            .map(|(level, time)| ScoreLine {
                level: *level,
                time: *time,
            })
            .collect()
    }

    /// Successes in a row needed at `level` before moving up
    pub fn level_up_tries(level: u32) -> usize {
        if level == 2 { 1 } else { 2 + level as usize }
    }

    /// Whether the latest result completes a level-up streak
    pub fn is_level_up(&self) -> bool {
        let Some(last) = self.results.last() else {
            return false;
        };
        if !last.is_success() || self.best_times.contains_key(&(last.level + 1)) {
            return false;
        }
        let tries = Self::level_up_tries(last.level);
        self.results.len() >= tries
            && self.results[self.results.len() - tries..]
                .iter()
                .all(|r| r.level == last.level && r.is_success())
    }

    /// Which "make it easier" tier, if any, the latest results call for
    pub fn easier(&self) -> Option<Easier> {
        let failed_run = |n: usize| {
            self.results.len() >= n
                && self.results[self.results.len() - n..]
                    .iter()
                    .all(|r| !r.is_success())
        };
        if failed_run(6) {
            return Some(Easier::Strong);
        }
        if failed_run(3) {
            let recent = &self.results[self.results.len() - 3..];
            if recent.iter().all(|r| r.time == recent[0].time) {
                return Some(Easier::Mild);
            }
        }
        None
    }

    /// Sum of `level² / best time` over levels with a best time, rounded up
    pub fn total_score(&self) -> u64 {
        let sum: f64 = self
            .best_times
            .iter()
            .filter(|(_, time)| **time > 0.0)
            .map(|(level, time)| f64::from(*level).powi(2) / time)
            .sum();
        sum.ceil() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn progress(results: &[PlayResult]) -> Progress {
        let mut progress = Progress::new(&Tuning::default());
        progress.add_results(results.iter().copied());
        progress
    }

    fn win(level: u32, time: f64) -> PlayResult {
        PlayResult::success(level, time, time)
    }

    fn miss(level: u32, time: f64) -> PlayResult {
        PlayResult::failure(level, time, 1, time / 2.0)
    }

    #[test]
    fn test_best_times_track_successes_only() {
        let progress = progress(&[
            miss(3, 0.5),
            win(3, 0.9),
            win(3, 0.7),
            win(3, 0.8),
            win(4, 1.0),
        ]);
        assert_eq!(progress.best_time(3), Some(0.7));
        assert_eq!(progress.best_time(4), Some(1.0));
        assert_eq!(progress.best_time(5), None);
        assert_eq!(progress.results().len(), 5);
    }

    #[test]
    fn test_setup_level_and_time() {
        let tuning = Tuning::default();
        let mut p = progress(&[win(3, 0.9), miss(4, 0.8)]);
        p.setup_level_and_time(&tuning);
        assert_eq!(p.display(), ScoreLine { level: 4, time: 0.8 });

        let mut empty = progress(&[]);
        empty.setup_level_and_time(&tuning);
        assert_eq!(empty.display(), ScoreLine { level: 2, time: 1.0 });
    }

    #[test]
    fn test_level_two_needs_one_success() {
        assert!(progress(&[win(2, 1.0)]).is_level_up());
        assert!(!progress(&[miss(2, 1.0)]).is_level_up());
    }

    #[test]
    fn test_level_up_streak_length() {
        // Level 3 needs 5 successes in a row at level 3
        let four = [win(3, 1.0), win(3, 0.95), win(3, 0.9), win(3, 0.85)];
        assert!(!progress(&four).is_level_up());

        let mut five = four.to_vec();
        five.push(win(3, 0.8));
        assert!(progress(&five).is_level_up());

        let mut broken = five.clone();
        broken[1] = miss(3, 0.95);
        assert!(!progress(&broken).is_level_up());
    }

    #[test]
    fn test_no_level_up_when_next_level_reached_before() {
        let mut results = vec![win(3, 1.0)];
        results.extend(std::iter::repeat_n(win(2, 1.0), 3));
        let p = progress(&results);
        assert!(!p.is_level_up());
        assert!(p.best_time(3).is_some());
    }

    #[test]
    fn test_easier_tiers() {
        assert_eq!(progress(&[miss(3, 1.0), miss(3, 1.0)]).easier(), None);
        assert_eq!(
            progress(&[miss(3, 1.0), miss(3, 1.0), miss(3, 1.0)]).easier(),
            Some(Easier::Mild)
        );
        assert_eq!(progress(&[miss(3, 1.1), miss(3, 1.0), miss(3, 1.0)]).easier(), None);
        assert_eq!(progress(&[win(3, 1.0), miss(3, 1.0), miss(3, 1.0)]).easier(), None);

        let six: Vec<_> = (0..6).map(|i| miss(3, 1.0 + i as f64 * 0.1)).collect();
        assert_eq!(progress(&six).easier(), Some(Easier::Strong));
    }

    #[test]
    fn test_total_score() {
        assert_eq!(progress(&[]).total_score(), 0);
        // 4 / 0.5 + 9 / 2.0 = 12.5
        assert_eq!(progress(&[win(2, 0.5), win(3, 2.0), miss(4, 0.1)]).total_score(), 13);
    }

    #[test]
    fn test_scoreboard_lines_by_level() {
        let p = progress(&[win(4, 0.9), win(2, 0.6)]);
        assert_eq!(
            p.scoreboard(),
            vec![ScoreLine { level: 2, time: 0.6 }, ScoreLine { level: 4, time: 0.9 }]
        );
    }

    #[test]
    fn test_reset() {
        let tuning = Tuning::default();
        let mut p = progress(&[win(5, 0.4)]);
        p.level = 5;
        p.reset(&tuning);
        assert!(p.results().is_empty());
        assert!(p.best_times().is_empty());
        assert_eq!(p.display(), ScoreLine { level: 2, time: 1.0 });
    }

    proptest! {
        #[test]
        fn test_best_time_is_minimum_success(
            times in prop::collection::vec(0.05f64..3.0, 1..30),
            batch in 1usize..5,
        ) {
            let mut p = Progress::new(&Tuning::default());
            for chunk in times.chunks(batch) {
                p.add_results(chunk.iter().map(|t| win(4, *t)));
            }
            let min = times.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(p.best_time(4), Some(min));
        }
    }
}
