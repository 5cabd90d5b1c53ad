//! Animation timing engine
//!
//! Pure functions of time:
//! - Phases (`Before`/`During`/`After`) and ramp positions per tag
//! - Time-driven and tap-driven tag stacks
//! - Sequencing arithmetic for evenly spaced items
//! - Current-step selection for stepped animations
//!
//! No game or rendering dependencies.

pub mod animator;
pub mod sequence;
pub mod stack;
pub mod steps;
pub mod ticker;
pub mod timing;

pub use animator::{Animator, Appearance, MessageFade, SimpleFade, SlideFade};
pub use sequence::{Join, SequenceConfig, sequenced, sequenced_stack};
pub use stack::{TapStack, TimeStack};
pub use steps::StepTimeline;
pub use ticker::Ticker;
pub use timing::{Phase, Ramp, Timing};
