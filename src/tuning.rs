//! Data-driven game balance
//!
//! Difficulty constants and the bottom-message policy. Everything has a
//! default so a partial JSON file only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LEVEL, DEFAULT_TIME};

/// When to attach an ad below a round's message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AdPolicy {
    #[default]
    Always,
    Never,
    /// Only after every n-th recorded play
    EveryNthPlay(u32),
}

impl AdPolicy {
    /// Whether an ad goes with a history of `plays` results
    pub fn allows(&self, plays: usize) -> bool {
        match *self {
            AdPolicy::Always => true,
            AdPolicy::Never => false,
            AdPolicy::EveryNthPlay(0) => false,
            AdPolicy::EveryNthPlay(n) => plays > 0 && plays % n as usize == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Level (box count) for an empty history
    pub default_level: u32,
    /// Time limit for an empty history and after a level-up (seconds)
    pub default_time: f64,
    /// Smallest time limit ever offered
    pub min_time: f64,
    /// Fraction of the time limit removed after a success
    pub shrink_fraction: f64,
    /// Minimum absolute shrink after a success
    pub shrink_floor: f64,
    /// Time multiplier after three failures at the same time
    pub easier_mild_factor: f64,
    /// Time multiplier after six failures in a row
    pub easier_strong_factor: f64,
    /// Chance of a help tip while tips remain
    pub help_probability: f64,
    pub ad_policy: AdPolicy,
    pub ad_url: String,
    /// Link appended to shared scores
    pub share_url: String,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL,
            default_time: DEFAULT_TIME,
            min_time: 0.01,
            shrink_fraction: 0.05,
            shrink_floor: 0.01,
            easier_mild_factor: 1.1,
            easier_strong_factor: 1.25,
            help_probability: 0.25,
            ad_policy: AdPolicy::Always,
            ad_url: "https://greatapegame.com/more".to_string(),
            share_url: "https://greatapegame.com".to_string(),
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Time limit after a successful round at `time`
    pub fn shrunk(&self, time: f64) -> f64 {
        (time - (time * self.shrink_fraction).max(self.shrink_floor)).max(self.min_time)
    }
}
