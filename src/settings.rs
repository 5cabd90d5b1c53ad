//! Player preferences
//!
//! Persisted separately from the play history.

use serde::{Deserialize, Serialize};

use crate::anim::{Animator, Appearance, MessageFade, SimpleFade};
use crate::persistence::PersistenceError;
use crate::platform::KeyValueStore;

/// How much movement message animations use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotionStyle {
    /// Scale and fade
    #[default]
    Full,
    /// Fade only
    Reduced,
}

impl MotionStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionStyle::Full => "Full",
            MotionStyle::Reduced => "Reduced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" => Some(MotionStyle::Full),
            "reduced" | "reduce" => Some(MotionStyle::Reduced),
            _ => None,
        }
    }
}

impl Animator for MotionStyle {
    fn appearance(&self, x: f64) -> Appearance {
        match self {
            MotionStyle::Full => MessageFade.appearance(x),
            MotionStyle::Reduced => SimpleFade.appearance(x),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Haptics ===
    pub haptics_enabled: bool,

    // === Accessibility ===
    pub motion: MotionStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            haptics_enabled: true,
            motion: MotionStyle::Full,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "great_ape_settings";

    /// Load settings, falling back to defaults on a miss or bad data
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {e}"),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(self)?;
        store.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_motion_style_from_str() {
        assert_eq!(MotionStyle::from_str("REDUCED"), Some(MotionStyle::Reduced));
        assert_eq!(MotionStyle::from_str(MotionStyle::Full.as_str()), Some(MotionStyle::Full));
        assert_eq!(MotionStyle::from_str("wobbly"), None);
    }

    #[test]
    fn test_reduced_motion_never_scales() {
        assert_eq!(MotionStyle::Reduced.appearance(-0.5).scale, 1.0);
        assert!(MotionStyle::Full.appearance(-0.5).scale < 1.0);
    }

    #[test]
    fn test_load_save() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());

        let settings = Settings {
            haptics_enabled: false,
            motion: MotionStyle::Reduced,
            ..Default::default()
        };
        settings.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_partial_and_corrupt_settings() {
        let mut store = MemoryStore::new();
        store.set(Settings::STORAGE_KEY, r#"{"sound_enabled":false}"#).unwrap();
        let settings = Settings::load(&store);
        assert!(!settings.sound_enabled);
        assert!(settings.haptics_enabled);

        store.set(Settings::STORAGE_KEY, "{").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }
}
