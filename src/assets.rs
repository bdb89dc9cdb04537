//! Asset lookup
//!
//! Maps sprite names to their pixel dimensions and sound names to effects.
//! Loading actual image/audio data is the platform's job.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::SoundEffect;
use crate::renderer::Sprite;

/// Errors raised while resolving assets
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unknown sprite `{0}`")]
    UnknownSprite(String),
    #[error("unknown sound `{0}`")]
    UnknownSound(String),
    #[error("failed to read asset manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid asset manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source dimensions of a sprite image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteInfo {
    pub width: f32,
    pub height: f32,
}

/// Catalog of known sprites and sounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    pub sprites: BTreeMap<String, SpriteInfo>,
    pub sounds: Vec<SoundEffect>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        let sprites = [
            ("spaceship", 48.0, 48.0),
            ("bullet", 6.0, 6.0),
            ("asteroid", 96.0, 96.0),
        ]
        .into_iter()
        .map(|(name, width, height)| (name.to_string(), SpriteInfo { width, height }))
        .collect();

        Self {
            sprites,
            sounds: vec![
                SoundEffect::Laser,
                SoundEffect::AsteroidBreak,
                SoundEffect::ShipDestroyed,
            ],
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from JSON
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a manifest from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let json = std::fs::read_to_string(path)?;
        let manifest = Self::from_json(&json)?;
        log::info!(
            "Loaded asset manifest ({} sprites, {} sounds)",
            manifest.sprites.len(),
            manifest.sounds.len()
        );
        Ok(manifest)
    }

    pub fn load_sprite(&self, name: &str) -> Result<Sprite, AssetError> {
        self.sprites
            .get(name)
            .map(|info| Sprite::new(name, info.width, info.height))
            .ok_or_else(|| AssetError::UnknownSprite(name.to_string()))
    }

    pub fn load_sound(&self, name: &str) -> Result<SoundEffect, AssetError> {
        SoundEffect::from_name(name)
            .filter(|effect| self.sounds.contains(effect))
            .ok_or_else(|| AssetError::UnknownSound(name.to_string()))
    }
}
