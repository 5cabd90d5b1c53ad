//! Screens of the app state machine

use super::menu::MenuItem;

/// Level and time limit pair shown on the ready screen and the scoreboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreLine {
    pub level: u32,
    pub time: f64,
}

/// Feedback after a round
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    LevelUp { level: u32 },
    /// Success, next round runs with `time`
    Success { time: f64 },
    /// Repeated failures, next round runs with the longer `time`
    Easier { time: f64 },
    TryAgain,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Messages {
    pub message: Message,
    /// Stays until the background is tapped instead of fading on its own
    pub staying: bool,
}

/// One-time hints, each retired by the action it describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HelpTip {
    TapRing,
    TapScoreLine,
    TapMenu,
}

impl HelpTip {
    pub const ALL: [HelpTip; 3] = [HelpTip::TapRing, HelpTip::TapScoreLine, HelpTip::TapMenu];
}

/// Line below a round's message
#[derive(Debug, Clone, PartialEq)]
pub enum BottomMessage {
    Help(HelpTip),
    Ad { url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadyState {
    Normal(ScoreLine, Option<Messages>, Option<BottomMessage>),
    /// Entries of the menu level currently shown
    Menu(Vec<MenuItem>),
    Scoreboard,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Splash,
    /// `text` shows the introduction text, not just the title
    Welcome { text: bool },
    Ready(ReadyState),
    About,
    Playing,
}

impl Screen {
    /// The plain ready screen for `line`
    pub fn normal(line: ScoreLine) -> Self {
        Screen::Ready(ReadyState::Normal(line, None, None))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Screen::Ready(_))
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Welcome { .. } => "welcome",
            Screen::Ready(ReadyState::Normal(..)) => "ready",
            Screen::Ready(ReadyState::Menu(_)) => "menu",
            Screen::Ready(ReadyState::Scoreboard) => "scoreboard",
            Screen::About => "about",
            Screen::Playing => "playing",
        }
    }
}
