//! User intents and lifecycle events fed to the reducer

use super::menu::MenuItem;
use super::result::PlayResult;
use super::screen::ScoreLine;

/// Links on the about screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutLink {
    Website,
    Source,
    Privacy,
}

impl AboutLink {
    pub fn url(&self) -> &'static str {
        match self {
            AboutLink::Website => "https://greatapegame.com",
            AboutLink::Source => "https://github.com/paulrobello/great-ape",
            AboutLink::Privacy => "https://greatapegame.com/privacy",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// App launched
    Startup,
    /// App about to go away
    Finish,
    TapRing,
    TapBox,
    TapMenuButton,
    TapScoreLine,
    TapShare,
    TapScoreboard(ScoreLine),
    TapMenu(MenuItem),
    FinishedSplash,
    FinishedIntro,
    TapNextAbout,
    FinishedAbout,
    TapAboutLink(AboutLink),
    TappedAd(String),
    TapBackground,
    Played(PlayResult),
}
