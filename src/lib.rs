//! Great Ape Game - tap the numbered boxes in order
//!
//! Core modules:
//! - `game`: Progression, adaptive difficulty and the screen state machine
//! - `anim`: Animation timing engine (phases, ramps, sequencing)
//! - `audio`: Sound and haptic feedback services
//! - `leaderboard`: Score submission and the on-device board
//! - `persistence`: Play history storage
//! - `platform`: Browser/native platform abstraction
//! - `presets`: Animation timings for each screen
//! - `settings`: Player preferences
//! - `tuning`: Data-driven game balance

pub mod anim;
pub mod audio;
pub mod game;
pub mod leaderboard;
pub mod persistence;
pub mod platform;
pub mod presets;
pub mod settings;
pub mod tuning;

pub use game::{Action, Environment, GameState, PlayResult, Screen, reduce};
pub use settings::{MotionStyle, Settings};
pub use tuning::{AdPolicy, Tuning};

/// Game configuration constants
pub mod consts {
    /// Level (number of boxes) of a fresh game
    pub const DEFAULT_LEVEL: u32 = 2;
    /// Time limit of a fresh game (seconds)
    pub const DEFAULT_TIME: f64 = 1.0;
    /// Animation sampling interval (seconds)
    pub const TICK_INTERVAL: f64 = 0.1;
}
