//! Timing configurations for each screen
//!
//! The presentation layer picks the configuration matching the current
//! [`Screen`] and samples it every tick.

use crate::anim::{
    Join, Ramp, SequenceConfig, StepTimeline, TapStack, TimeStack, Timing, sequenced_stack,
};
use crate::game::{ReadyState, Screen};

/// Default ramp for screen elements (seconds)
pub const RAMP_TIME: f64 = 0.3;

/// Independently animated elements across all screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Title,
    IntroLine(u8),
    ScoreLine,
    Ring,
    Message,
    BottomMessage,
    Menu,
    Scoreboard,
    /// Numbers on the boxes, hidden once the time limit runs out
    Numbers,
    Boxes,
}

/// Stages of the splash logo reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogoStep {
    Blank,
    Dot,
    Ring,
    Face,
    Name,
}

/// Number of intro text lines on the welcome screen
pub const INTRO_LINES: u8 = 3;

pub fn splash_logo() -> StepTimeline<LogoStep> {
    StepTimeline::new()
        .with(LogoStep::Blank, Timing::new(0.0, 0.3))
        .with(LogoStep::Dot, Timing::new(0.3, 0.4))
        .with(LogoStep::Ring, Timing::new(0.7, 0.5))
        .with(LogoStep::Face, Timing::new(1.2, 0.8))
        .with(LogoStep::Name, Timing::forever(2.0))
}

/// Intro text walk: title lead-in, then each line cross-fading into the next
pub fn intro_sequence() -> SequenceConfig {
    SequenceConfig {
        delay: 1.5,
        duration: 3.5,
        ramp_time: 0.5,
        join: Join::CrossFade,
        stay: true,
    }
}

/// Timings for `screen`, measured from when it appeared
pub fn screen_timings(screen: &Screen) -> TimeStack<Element> {
    let ramp = Ramp::symmetric(RAMP_TIME);
    match screen {
        // The splash is driven by `splash_logo`
        Screen::Splash => TimeStack::new(ramp),
        Screen::Welcome { text: true } => {
            let mut tags = vec![Element::Title];
            tags.extend((0..INTRO_LINES).map(Element::IntroLine));
            sequenced_stack(&intro_sequence(), &tags)
        }
        Screen::Welcome { text: false } => {
            TimeStack::new(ramp).with(Element::Title, Timing::forever(0.0))
        }
        Screen::Ready(ready) => ready_timings(ready, ramp),
        // About pages advance on taps, see `about_pages`
        Screen::About => TimeStack::new(ramp),
        Screen::Playing => TimeStack::new(ramp).with(Element::Boxes, Timing::forever(0.0)),
    }
}

fn ready_timings(ready: &ReadyState, ramp: Ramp) -> TimeStack<Element> {
    let stack = TimeStack::new(ramp)
        .with(Element::ScoreLine, Timing::forever(0.0))
        .with(Element::Ring, Timing::forever(0.2));
    match ready {
        ReadyState::Normal(_, messages, bottom) => {
            let stack = match messages {
                Some(m) if m.staying => stack.with(Element::Message, Timing::forever(0.0)),
                Some(_) => stack.with(
                    Element::Message,
                    Timing::new(0.0, 2.5).with_ramp(Ramp::new(0.4, 0.6)),
                ),
                None => stack,
            };
            match bottom {
                Some(_) => stack.with(Element::BottomMessage, Timing::forever(1.0)),
                None => stack,
            }
        }
        ReadyState::Menu(_) => stack.with(Element::Menu, Timing::forever(0.0)),
        ReadyState::Scoreboard => stack.with(Element::Scoreboard, Timing::forever(0.0)),
    }
}

/// Numbers show for the round's time limit, then only the boxes remain
pub fn playing_timings(time_limit: f64) -> TimeStack<Element> {
    TimeStack::new(Ramp::NONE)
        .with(Element::Boxes, Timing::forever(0.0))
        .with(Element::Numbers, Timing::new(0.0, time_limit))
}

/// About pages, one per tap
pub fn about_pages(count: usize, now: f64) -> TapStack<usize> {
    TapStack::new((0..count).collect(), Ramp::new(RAMP_TIME, RAMP_TIME).delayed(0.1), now)
}
