//! Screen state machine
//!
//! [`reduce`] applies one action to the game state. Actions that make no
//! sense on the current screen are ignored. Side effects go through the
//! environment and are never awaited; their failures never roll back state.

use rand::Rng;

use super::action::Action;
use super::env::Environment;
use super::menu::{self, MenuItem, MenuLookup};
use super::progress::Easier;
use super::result::PlayResult;
use super::screen::{BottomMessage, HelpTip, Message, Messages, ReadyState, Screen};
use super::state::GameState;
use crate::audio::{HapticEffect, SoundEffect};

/// Apply `action` to `state`
pub fn reduce(state: &mut GameState, action: Action, env: &mut Environment) {
    let before = state.screen.name();

    match action {
        Action::Startup => startup(state, env),
        Action::Finish => env.haptics.stop(),
        Action::FinishedSplash => {
            if state.screen == Screen::Splash {
                state.screen = Screen::Welcome {
                    text: state.progress.results().is_empty(),
                };
            }
        }
        Action::FinishedIntro => {
            if matches!(state.screen, Screen::Welcome { .. }) {
                state.screen = state.normal_screen();
            }
        }
        Action::TapRing => {
            if state.screen.is_ready() {
                state.retire_help(HelpTip::TapRing);
                env.haptics.play(HapticEffect::Tap);
                state.screen = Screen::Playing;
            }
        }
        Action::TapBox => {
            if state.screen == Screen::Playing {
                env.haptics.play(HapticEffect::Tap);
                env.sound.play(SoundEffect::BoxTap);
            }
        }
        Action::Played(result) => {
            if state.screen == Screen::Playing {
                played(state, result, env);
            }
        }
        Action::TapMenuButton => match &state.screen {
            Screen::Ready(ReadyState::Menu(_)) => state.screen = state.normal_screen(),
            Screen::Ready(_) => {
                state.retire_help(HelpTip::TapMenu);
                env.sound.play(SoundEffect::Click);
                state.screen = Screen::Ready(ReadyState::Menu(menu::root_entries()));
            }
            _ => {}
        },
        Action::TapScoreLine => match &state.screen {
            Screen::Ready(ReadyState::Scoreboard) => state.screen = state.normal_screen(),
            Screen::Ready(ReadyState::Normal(..)) if !state.progress.best_times().is_empty() => {
                state.retire_help(HelpTip::TapScoreLine);
                env.sound.play(SoundEffect::Click);
                state.screen = Screen::Ready(ReadyState::Scoreboard);
            }
            _ => {}
        },
        Action::TapScoreboard(line) => {
            if state.screen == Screen::Ready(ReadyState::Scoreboard) {
                state.progress.level = line.level;
                state.progress.time = line.time;
                state.screen = state.normal_screen();
            }
        }
        Action::TapShare => {
            if state.screen.is_ready() {
                share_score(state, env);
                state.screen = state.normal_screen();
            }
        }
        Action::TapMenu(item) => {
            if let Screen::Ready(ReadyState::Menu(entries)) = &state.screen {
                match menu::lookup(entries, item) {
                    MenuLookup::Submenu(children) => {
                        state.screen = Screen::Ready(ReadyState::Menu(children));
                    }
                    MenuLookup::Leaf(leaf) => menu_action(state, leaf, env),
                    MenuLookup::Missing => {
                        log::debug!("Menu item {item:?} not visible");
                        state.screen = state.normal_screen();
                    }
                }
            }
        }
        Action::TapNextAbout => {
            if state.screen == Screen::About {
                env.haptics.play(HapticEffect::Tap);
            }
        }
        Action::FinishedAbout => {
            if state.screen == Screen::About {
                state.screen = state.normal_screen();
            }
        }
        Action::TapAboutLink(link) => {
            if state.screen == Screen::About {
                env.platform.open_url(link.url());
            }
        }
        Action::TappedAd(url) => {
            if let Screen::Ready(ReadyState::Normal(
                line,
                messages,
                Some(BottomMessage::Ad { .. }),
            )) = &state.screen
            {
                let (line, messages) = (*line, *messages);
                env.platform.open_url(&url);
                state.screen = Screen::Ready(ReadyState::Normal(line, messages, None));
            }
        }
        Action::TapBackground => {
            let dismiss = match &state.screen {
                Screen::Ready(ReadyState::Menu(_) | ReadyState::Scoreboard) => true,
                Screen::Ready(ReadyState::Normal(_, Some(messages), _)) => messages.staying,
                _ => false,
            };
            if dismiss {
                state.screen = state.normal_screen();
            }
        }
    }

    if state.screen.name() != before {
        log::debug!("Screen {before} -> {}", state.screen.name());
    }
}

fn startup(state: &mut GameState, env: &mut Environment) {
    let results = env.persistence.load_results().unwrap_or_else(|e| {
        log::warn!("Could not load results, starting empty: {e}");
        Vec::new()
    });
    log::info!("Starting with {} recorded results", results.len());
    state.progress.reset(&env.tuning);
    state.progress.add_results(results);
    state.progress.setup_level_and_time(&env.tuning);
    env.haptics.start();
}

fn played(state: &mut GameState, result: PlayResult, env: &mut Environment) {
    state.progress.add_results([result]);
    if let Err(e) = env.persistence.save(&result) {
        log::warn!("Result not saved: {e}");
    }

    let tuning = &env.tuning;
    let progress = &mut state.progress;
    progress.level = result.level;
    progress.time = result.time;

    let messages = if progress.is_level_up() {
        progress.level = result.level + 1;
        progress.time = tuning.default_time;
        env.sound.play(SoundEffect::LevelUp);
        env.haptics.play(HapticEffect::LevelUp);
        Messages {
            message: Message::LevelUp {
                level: progress.level,
            },
            staying: true,
        }
    } else if result.is_success() {
        progress.time = tuning.shrunk(result.time);
        env.sound.play(SoundEffect::Success);
        env.haptics.play(HapticEffect::Success);
        transient(Message::Success { time: progress.time })
    } else {
        env.sound.play(SoundEffect::Miss);
        env.haptics.play(HapticEffect::Failure);
        match progress.easier() {
            Some(tier) => {
                let factor = match tier {
                    Easier::Strong => tuning.easier_strong_factor,
                    Easier::Mild => tuning.easier_mild_factor,
                };
                progress.time = result.time * factor;
                transient(Message::Easier { time: progress.time })
            }
            None => transient(Message::TryAgain),
        }
    };
    log::info!(
        "Played level {} in {:.2}s ({}), next {} at {:.3}s",
        result.level,
        result.elapsed,
        if result.is_success() { "ok" } else { "missed" },
        progress.level,
        progress.time
    );

    if result.is_success() {
        env.leaderboard.report_time(result.time, result.level);
    }
    env.leaderboard.report_total_score(progress.total_score());

    let bottom = bottom_message(state, env);
    let line = state.progress.display();
    state.screen = Screen::Ready(ReadyState::Normal(line, Some(messages), bottom));
}

fn transient(message: Message) -> Messages {
    Messages {
        message,
        staying: false,
    }
}

/// Help while tips remain (by chance), otherwise whatever the ad policy says
fn bottom_message(state: &GameState, env: &mut Environment) -> Option<BottomMessage> {
    if let Some(tip) = state.next_help() {
        if env.rng.random_bool(env.tuning.help_probability.clamp(0.0, 1.0)) {
            return Some(BottomMessage::Help(tip));
        }
    }
    env.tuning
        .ad_policy
        .allows(state.progress.results().len())
        .then(|| BottomMessage::Ad {
            url: env.tuning.ad_url.clone(),
        })
}

fn menu_action(state: &mut GameState, item: MenuItem, env: &mut Environment) {
    state.screen = match item {
        MenuItem::About => {
            env.haptics.play(HapticEffect::Tap);
            Screen::About
        }
        MenuItem::PlayIntro => Screen::Welcome { text: true },
        MenuItem::ShareScore => {
            share_score(state, env);
            state.normal_screen()
        }
        MenuItem::ReallyReset => {
            if let Err(e) = env.persistence.reset_results() {
                log::warn!("Stored results not reset: {e}");
            }
            state.progress.reset(&env.tuning);
            state.remaining_help = HelpTip::ALL.to_vec();
            env.sound.play(SoundEffect::Reset);
            log::info!("Progress reset");
            state.normal_screen()
        }
        // Reset only opens its confirmation sub-menu
        MenuItem::CancelReset | MenuItem::Reset => state.normal_screen(),
    };
}

fn share_score(state: &GameState, env: &mut Environment) {
    let text = format!(
        "My Great Ape score is {}! Reached level {}. {}",
        state.progress.total_score(),
        state.progress.level,
        env.tuning.share_url
    );
    env.platform.share(&text);
}
