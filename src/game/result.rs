//! Outcome of a single round

use serde::{Deserialize, Serialize};

/// One finished round, never mutated once recorded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayResult {
    /// Number of boxes shown
    pub level: u32,
    /// Time limit the round was played with (seconds)
    pub time: f64,
    /// Box tapped out of order, `None` when the round succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_box: Option<u32>,
    /// Seconds actually taken
    pub elapsed: f64,
}

impl PlayResult {
    pub fn success(level: u32, time: f64, elapsed: f64) -> Self {
        Self {
            level,
            time,
            missed_box: None,
            elapsed,
        }
    }

    pub fn failure(level: u32, time: f64, missed_box: u32, elapsed: f64) -> Self {
        Self {
            level,
            time,
            missed_box: Some(missed_box),
            elapsed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.missed_box.is_none()
    }
}
