//! Great Ape entry point
//!
//! Native builds run a headless session: a simulated player works through
//! rounds while the screen animations are sampled on a manual clock.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Great Ape (native) starting...");

    let mut args = std::env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| "great-ape-data".to_string());
    let rounds = args.next().and_then(|n| n.parse().ok()).unwrap_or(10);

    headless::run(&data_dir, rounds);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build drives `great_ape` from its own event loop
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use great_ape::anim::{Phase, Ticker};
    use great_ape::audio::{AudioManager, HapticEngine};
    use great_ape::consts::TICK_INTERVAL;
    use great_ape::game::{Action, Environment, GameState, PlayResult, ReadyState, Screen, reduce};
    use great_ape::leaderboard::LocalLeaderboard;
    use great_ape::persistence::ResultStore;
    use great_ape::platform::{Clock, FileStore, LogPlatform, ManualClock};
    use great_ape::presets::{self, Element, LogoStep};
    use great_ape::settings::Settings;

    pub fn run(data_dir: &str, rounds: u32) {
        let settings = Settings::load(&FileStore::new(data_dir));
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let mut env = Environment::in_memory(seed)
            .with_persistence(ResultStore::new(FileStore::new(data_dir)))
            .with_leaderboard(LocalLeaderboard::load(FileStore::new(data_dir)))
            .with_sound(AudioManager::from_settings(&settings))
            .with_haptics(HapticEngine::new(settings.haptics_enabled))
            .with_platform(LogPlatform);
        let mut state = GameState::new(&env.tuning);
        let clock = ManualClock::new(0.0);
        // Simulated player skill, independent of the game's own RNG
        let mut player = Pcg32::seed_from_u64(seed ^ 0x5eed);

        reduce(&mut state, Action::Startup, &mut env);
        play_splash(&clock);
        reduce(&mut state, Action::FinishedSplash, &mut env);
        watch(&state.screen, &clock, &settings, 5.0);
        reduce(&mut state, Action::FinishedIntro, &mut env);

        for _ in 0..rounds {
            reduce(&mut state, Action::TapRing, &mut env);
            let line = state.progress.display();
            watch(&state.screen, &clock, &settings, line.time);

            // Better odds with more time per box
            let odds = (line.time * 4.0 / f64::from(line.level)).clamp(0.1, 0.95);
            let result = if player.random_bool(odds) {
                for _ in 0..line.level {
                    reduce(&mut state, Action::TapBox, &mut env);
                }
                PlayResult::success(line.level, line.time, line.time + 0.3 * f64::from(line.level))
            } else {
                let missed = player.random_range(2..=line.level.max(2));
                PlayResult::failure(line.level, line.time, missed, 0.4 * f64::from(missed))
            };
            reduce(&mut state, Action::Played(result), &mut env);

            if let Screen::Ready(ReadyState::Normal(_, Some(messages), bottom)) = &state.screen {
                let bottom = bottom.as_ref().map(|b| format!("[{b:?}]"));
                println!("{:?} {}", messages.message, bottom.unwrap_or_default());
            }
            watch(&state.screen, &clock, &settings, 3.0);
            reduce(&mut state, Action::TapBackground, &mut env);
        }

        println!(
            "Level {} at {:.3}s, total score {}",
            state.progress.level,
            state.progress.time,
            state.progress.total_score()
        );
        for line in state.progress.scoreboard() {
            println!("  level {:>2}: {:.3}s", line.level, line.time);
        }
        reduce(&mut state, Action::Finish, &mut env);
    }

    fn play_splash(clock: &ManualClock) {
        let logo = presets::splash_logo();
        let mut ticker = Ticker::starting_now(clock, TICK_INTERVAL);
        let mut shown = None;
        while shown != Some(LogoStep::Name) {
            clock.advance(TICK_INTERVAL);
            if let Some(t) = ticker.sample(clock) {
                let step = logo.current(t);
                if step != shown {
                    log::debug!("Logo {step:?} at {t:.1}s");
                    shown = step;
                }
            }
        }
    }

    /// Sample `screen`'s timings for `seconds`, logging phase changes
    fn watch(screen: &Screen, clock: &ManualClock, settings: &Settings, seconds: f64) {
        let stack = match screen {
            Screen::Playing => presets::playing_timings(seconds),
            other => presets::screen_timings(other),
        };
        let mut ticker = Ticker::starting_now(clock, TICK_INTERVAL);
        let mut last: Vec<(Element, Phase)> = Vec::new();
        let end = clock.elapsed() + seconds;
        while clock.elapsed() < end {
            clock.advance(TICK_INTERVAL);
            let Some(t) = ticker.sample(clock) else { continue };
            let phases = stack.phases(t);
            if phases != last {
                for (tag, phase) in &phases {
                    let look = stack.appearance(*tag, t, &settings.motion);
                    log::debug!(
                        "{:.1}s {} {tag:?}: {phase:?} (scale {:.2}, opacity {:.2})",
                        t,
                        screen.name(),
                        look.scale,
                        look.opacity
                    );
                }
                last = phases;
            }
        }
    }
}
