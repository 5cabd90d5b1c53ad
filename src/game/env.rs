//! Collaborators injected into the reducer

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioManager, HapticEngine, Haptics, Sound};
use crate::leaderboard::{Leaderboard, LocalLeaderboard};
use crate::persistence::{Persistence, ResultStore};
use crate::platform::{LogPlatform, MemoryStore, Platform};
use crate::tuning::Tuning;

/// Services, balance and randomness the reducer works with
pub struct Environment {
    pub persistence: Box<dyn Persistence>,
    pub haptics: Box<dyn Haptics>,
    pub sound: Box<dyn Sound>,
    pub leaderboard: Box<dyn Leaderboard>,
    pub platform: Box<dyn Platform>,
    pub tuning: Tuning,
    /// Only source of randomness (help tip display)
    pub rng: Pcg32,
}

impl Environment {
    /// Self-contained environment: memory storage, silent feedback
    pub fn in_memory(seed: u64) -> Self {
        Self {
            persistence: Box::new(ResultStore::new(MemoryStore::new())),
            haptics: Box::new(HapticEngine::new(false)),
            sound: Box::new(AudioManager::new()),
            leaderboard: Box::new(LocalLeaderboard::load(MemoryStore::new())),
            platform: Box::new(LogPlatform),
            tuning: Tuning::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn with_persistence(mut self, persistence: impl Persistence + 'static) -> Self {
        self.persistence = Box::new(persistence);
        self
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn with_sound(mut self, sound: impl Sound + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }

    pub fn with_leaderboard(mut self, leaderboard: impl Leaderboard + 'static) -> Self {
        self.leaderboard = Box::new(leaderboard);
        self
    }

    pub fn with_platform(mut self, platform: impl Platform + 'static) -> Self {
        self.platform = Box::new(platform);
        self
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }
}
