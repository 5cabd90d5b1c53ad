//! Leaderboard submission
//!
//! The game reports finished times and its total score through
//! [`Leaderboard`]. [`LocalLeaderboard`] is the on-device board: top 10
//! total scores plus the best time per level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::persistence::PersistenceError;
use crate::platform::KeyValueStore;

/// Maximum number of total scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Fire-and-forget score submission
pub trait Leaderboard {
    fn report_time(&mut self, time: f64, level: u32);
    fn report_total_score(&mut self, score: u64);
}

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

/// Board contents, serialized as one JSON document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
    #[serde(default)]
    pub best_times: BTreeMap<u32, f64>,
}

impl HighScores {
    /// Check if a score qualifies for the board
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 || self.entries.iter().any(|e| e.score == score) {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score (if it qualifies); returns the 1-indexed rank
    pub fn add_score(&mut self, score: u64, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, timestamp };

        // Sorted descending by score
        let rank = match self.entries.iter().position(|e| score > e.score) {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Record `time` for `level`; true if it is a new best
    pub fn add_time(&mut self, level: u32, time: f64) -> bool {
        match self.best_times.get(&level) {
            Some(best) if *best <= time => false,
            _ => {
                self.best_times.insert(level, time);
                true
            }
        }
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

/// On-device leaderboard persisted through a [`KeyValueStore`]
pub struct LocalLeaderboard<S> {
    scores: HighScores,
    store: S,
}

impl<S: KeyValueStore> LocalLeaderboard<S> {
    const STORAGE_KEY: &'static str = "great_ape_highscores";

    /// Load the board, starting fresh when nothing usable is stored
    pub fn load(store: S) -> Self {
        let scores = match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => serde_json::from_str::<HighScores>(&json).unwrap_or_else(|e| {
                log::warn!("Discarding unreadable high scores: {e}");
                HighScores::default()
            }),
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                HighScores::default()
            }
            Err(e) => {
                log::warn!("Could not read high scores: {e}");
                HighScores::default()
            }
        };
        Self { scores, store }
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    fn save(&mut self) {
        let result = serde_json::to_string(&self.scores)
            .map_err(PersistenceError::from)
            .and_then(|json| self.store.set(Self::STORAGE_KEY, &json));
        if let Err(e) = result {
            log::warn!("High scores not saved: {e}");
        }
    }
}

impl<S: KeyValueStore> Leaderboard for LocalLeaderboard<S> {
    fn report_time(&mut self, time: f64, level: u32) {
        if self.scores.add_time(level, time) {
            log::info!("New best time {time:.2}s at level {level}");
            self.save();
        }
    }

    fn report_total_score(&mut self, score: u64) {
        if let Some(rank) = self.scores.add_score(score, unix_now()) {
            log::info!("Total score {score} ranked #{rank}");
            self.save();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn unix_now() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_scores_sorted_and_truncated() {
        let mut scores = HighScores::default();
        for score in 1..=12 {
            scores.add_score(score * 10, 0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(120));
        assert!(!scores.qualifies(5));
        assert_eq!(scores.add_score(55, 0), Some(8));
    }

    #[test]
    fn test_duplicate_and_zero_scores_rejected() {
        let mut scores = HighScores::default();
        assert_eq!(scores.add_score(0, 0), None);
        assert_eq!(scores.add_score(40, 0), Some(1));
        assert_eq!(scores.add_score(40, 1), None);
    }

    #[test]
    fn test_best_time_only_improves() {
        let mut scores = HighScores::default();
        assert!(scores.add_time(3, 0.9));
        assert!(!scores.add_time(3, 0.95));
        assert!(scores.add_time(3, 0.8));
        assert_eq!(scores.best_times[&3], 0.8);
    }

    #[test]
    fn test_local_leaderboard_persists() {
        let mut board = LocalLeaderboard::load(MemoryStore::new());
        board.report_time(0.7, 4);
        board.report_total_score(31);

        let reloaded = LocalLeaderboard::load(board.store);
        assert_eq!(reloaded.scores().top_score(), Some(31));
        assert_eq!(reloaded.scores().best_times.get(&4), Some(&0.7));
    }
}
