//! Game progression and screen state machine
//!
//! This module is pure apart from the collaborators in [`Environment`]:
//! - Randomness only through the environment's seeded RNG
//! - Storage, sound, haptics, sharing and leaderboards are injected
//! - No timing or rendering

pub mod action;
pub mod env;
pub mod menu;
pub mod progress;
pub mod reducer;
pub mod result;
pub mod screen;
pub mod state;

pub use action::{AboutLink, Action};
pub use env::Environment;
pub use menu::{MenuItem, MenuLookup, MenuNode};
pub use progress::{Easier, Progress};
pub use reducer::reduce;
pub use result::PlayResult;
pub use screen::{BottomMessage, HelpTip, Message, Messages, ReadyState, ScoreLine, Screen};
pub use state::GameState;
