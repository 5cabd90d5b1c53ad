//! Game state owned by the app session

use super::progress::Progress;
use super::screen::{HelpTip, Screen};
use crate::tuning::Tuning;

/// Everything the reducer mutates
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub progress: Progress,
    pub screen: Screen,
    /// Hints not yet retired, in display priority order
    pub remaining_help: Vec<HelpTip>,
}

impl GameState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            progress: Progress::new(tuning),
            screen: Screen::Splash,
            remaining_help: HelpTip::ALL.to_vec(),
        }
    }

    /// Plain ready screen for the current level and time
    pub fn normal_screen(&self) -> Screen {
        Screen::normal(self.progress.display())
    }

    pub fn next_help(&self) -> Option<HelpTip> {
        self.remaining_help.first().copied()
    }

    pub fn retire_help(&mut self, tip: HelpTip) {
        self.remaining_help.retain(|t| *t != tip);
    }
}
