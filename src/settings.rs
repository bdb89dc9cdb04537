//! Game settings
//!
//! Playfield size, session seed and audio preferences, stored as JSON.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::AudioManager;
use crate::consts::{DEFAULT_ASTEROID_COUNT, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Errors raised while reading or writing settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,

    // === Session ===
    /// RNG seed for asteroid placement and velocities
    pub seed: u64,
    /// Large asteroids spawned at the start of a round
    pub asteroid_count: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            seed: 0,
            asteroid_count: DEFAULT_ASTEROID_COUNT,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Playfield bounds as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Both playfield dimensions are finite and positive
    pub fn has_valid_playfield(&self) -> bool {
        self.bounds().is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Push the audio preferences into a manager
    pub fn apply_audio(&self, audio: &mut AudioManager) {
        audio.set_master_volume(self.master_volume);
        audio.set_sfx_volume(self.sfx_volume);
        audio.set_muted(self.muted);
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json)?;
        Ok(settings.sanitized())
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Replace an unusable playfield with the default size
    fn sanitized(mut self) -> Self {
        if !self.has_valid_playfield() {
            log::warn!(
                "Invalid playfield {}x{}, using {}x{}",
                self.width,
                self.height,
                PLAYFIELD_WIDTH,
                PLAYFIELD_HEIGHT
            );
            self.width = PLAYFIELD_WIDTH;
            self.height = PLAYFIELD_HEIGHT;
        }
        self
    }
}
