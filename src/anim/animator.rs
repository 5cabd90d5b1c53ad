//! Animator curves
//!
//! Animators map a position on the `[-1, 1]` axis (see
//! [`Timing::position`](super::Timing::position)) to visual properties.

use std::f64::consts::PI;

use glam::DVec2;

use super::timing::{Ramp, Timing};

/// Visual properties consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub scale: f64,
    pub opacity: f64,
    /// Displacement from the element's resting position (points)
    pub offset: DVec2,
}

impl Appearance {
    pub const VISIBLE: Appearance = Appearance {
        scale: 1.0,
        opacity: 1.0,
        offset: DVec2::ZERO,
    };
}

impl Default for Appearance {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Maps an axis position to an [`Appearance`]
pub trait Animator {
    fn appearance(&self, x: f64) -> Appearance;

    /// Sample `timing` at `t` and apply the curve
    fn animate(&self, timing: &Timing, t: f64, default_ramp: Ramp) -> Appearance {
        let ramp = timing.ramp_or(default_ramp);
        self.appearance(timing.position_with(t, ramp))
    }
}

/// Grows from 60% while fading in, fades out at full size
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFade;

impl Animator for MessageFade {
    fn appearance(&self, x: f64) -> Appearance {
        let x = x.clamp(-1.0, 1.0);
        let (scale, opacity) = if x < 0.0 {
            let eased = (PI * (x + 1.0) / 2.0).sin();
            (0.6 + 0.4 * eased, eased)
        } else {
            (1.0, 1.0 - (PI * x / 2.0).sin())
        };
        Appearance {
            scale,
            opacity,
            offset: DVec2::ZERO,
        }
    }
}

/// Linear opacity, no scaling
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFade;

impl Animator for SimpleFade {
    fn appearance(&self, x: f64) -> Appearance {
        Appearance {
            scale: 1.0,
            opacity: 1.0 - x.clamp(-1.0, 1.0).abs(),
            offset: DVec2::ZERO,
        }
    }
}

/// Linear fade while travelling in from `-travel` and out towards `travel`
#[derive(Debug, Clone, Copy)]
pub struct SlideFade {
    pub travel: DVec2,
}

impl SlideFade {
    pub fn new(travel: DVec2) -> Self {
        Self { travel }
    }
}

impl Animator for SlideFade {
    fn appearance(&self, x: f64) -> Appearance {
        let x = x.clamp(-1.0, 1.0);
        Appearance {
            scale: 1.0,
            opacity: 1.0 - x.abs(),
            offset: self.travel * x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_message_fade_endpoints() {
        let shown = MessageFade.appearance(0.0);
        assert!(close(shown.scale, 1.0));
        assert!(close(shown.opacity, 1.0));

        let before = MessageFade.appearance(-1.0);
        assert!(close(before.scale, 0.6));
        assert!(close(before.opacity, 0.0));

        let after = MessageFade.appearance(1.0);
        assert!(close(after.scale, 1.0));
        assert!(close(after.opacity, 0.0));
    }

    #[test]
    fn test_message_fade_is_asymmetric() {
        let coming = MessageFade.appearance(-0.5);
        let going = MessageFade.appearance(0.5);
        let eased = (PI / 4.0).sin();
        assert!(close(coming.scale, 0.6 + 0.4 * eased));
        assert!(close(coming.opacity, eased));
        assert!(close(going.scale, 1.0));
        assert!(close(going.opacity, 1.0 - eased));
    }

    #[test]
    fn test_simple_fade() {
        assert!(close(SimpleFade.appearance(-1.0).opacity, 0.0));
        assert!(close(SimpleFade.appearance(-0.25).opacity, 0.75));
        assert!(close(SimpleFade.appearance(0.0).opacity, 1.0));
        assert!(close(SimpleFade.appearance(0.6).opacity, 0.4));
        assert!(close(SimpleFade.appearance(0.6).scale, 1.0));
    }

    #[test]
    fn test_slide_fade_offsets() {
        let slide = SlideFade::new(DVec2::new(0.0, 40.0));
        assert_eq!(slide.appearance(-1.0).offset, DVec2::new(0.0, -40.0));
        assert_eq!(slide.appearance(0.0).offset, DVec2::ZERO);
        assert_eq!(slide.appearance(0.5).offset, DVec2::new(0.0, 20.0));
    }

    #[test]
    fn test_animate_uses_default_ramp() {
        let timing = Timing::new(0.0, 2.0);
        let half_in = SimpleFade.animate(&timing, 0.1, Ramp::symmetric(0.2));
        assert!(close(half_in.opacity, 0.5));
        let own = Timing::new(0.0, 2.0).with_ramp(Ramp::NONE);
        assert!(close(SimpleFade.animate(&own, 0.1, Ramp::symmetric(0.2)).opacity, 1.0));
    }
}
