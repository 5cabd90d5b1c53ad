//! Sound and haptic feedback
//!
//! The game only names effects; playback belongs to the platform. Both
//! services are fire-and-forget and injected through the game environment.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Box tapped in order
    BoxTap,
    /// Box tapped out of order
    Miss,
    /// Round completed
    Success,
    /// Moved up a level
    LevelUp,
    /// Menu or overlay opened/closed
    Click,
    /// History wiped
    Reset,
}

/// Haptic pattern types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticEffect {
    Tap,
    Success,
    Failure,
    LevelUp,
}

pub trait Sound {
    fn play(&mut self, effect: SoundEffect);
}

pub trait Haptics {
    fn start(&mut self);
    fn stop(&mut self);
    fn play(&mut self, effect: HapticEffect);
}

/// Sound output gated by the user's volume settings
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(!settings.sound_enabled);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl Sound for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("Sound {effect:?} at volume {vol:.2}");
    }
}

/// Haptic engine that only plays between `start` and `stop`
#[derive(Debug, Default)]
pub struct HapticEngine {
    enabled: bool,
    running: bool,
}

impl HapticEngine {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Haptics for HapticEngine {
    fn start(&mut self) {
        if self.enabled && !self.running {
            self.running = true;
            log::info!("Haptic engine started");
        }
    }

    fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Haptic engine stopped");
        }
    }

    fn play(&mut self, effect: HapticEffect) {
        if self.running {
            log::debug!("Haptic {effect:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volume() {
        let mut audio = AudioManager::new();
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(2.0);
        assert_eq!(audio.effective_volume(), 0.5);
        audio.set_muted(true);
        assert_eq!(audio.effective_volume(), 0.0);
    }

    #[test]
    fn test_sound_disabled_in_settings_mutes() {
        let settings = Settings {
            sound_enabled: false,
            ..Default::default()
        };
        assert_eq!(AudioManager::from_settings(&settings).effective_volume(), 0.0);
    }

    #[test]
    fn test_haptic_engine_start_stop() {
        let mut engine = HapticEngine::new(true);
        engine.play(HapticEffect::Tap);
        engine.start();
        assert!(engine.is_running());
        engine.stop();
        assert!(!engine.is_running());

        let mut disabled = HapticEngine::new(false);
        disabled.start();
        assert!(!disabled.is_running());
    }
}
