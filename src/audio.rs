//! Audio playback interface
//!
//! Entities ask for sounds through `AudioSink`; the platform layer drains the
//! `AudioManager` queue and feeds its own backend.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Ship fires a bullet
    Laser,
    /// Bullet breaks an asteroid
    AsteroidBreak,
    /// Ship hit by an asteroid
    ShipDestroyed,
}

impl SoundEffect {
    /// Asset name used in manifests
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Laser => "laser",
            SoundEffect::AsteroidBreak => "asteroid_break",
            SoundEffect::ShipDestroyed => "ship_destroyed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "laser" => Some(SoundEffect::Laser),
            "asteroid_break" => Some(SoundEffect::AsteroidBreak),
            "ship_destroyed" => Some(SoundEffect::ShipDestroyed),
            _ => None,
        }
    }
}

/// Anything that can play a sound effect
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Records effects in order (headless runs and tests)
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Effects waiting for the backend, with their effective volume
    pending: Vec<(SoundEffect, f32)>,
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
            pending: Vec::new(),
        }
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
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Take every queued effect, oldest first
    pub fn drain(&mut self) -> Vec<(SoundEffect, f32)> {
        std::mem::take(&mut self.pending)
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("Queue sound {} at volume {:.2}", effect.as_str(), vol);
        self.pending.push((effect, vol));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_queues_with_effective_volume() {
        let mut audio = AudioManager::new();
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(0.5);
        audio.play(SoundEffect::Laser);

        let played = audio.drain();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].0, SoundEffect::Laser);
        assert!((played[0].1 - 0.25).abs() < 1e-6);
        assert!(audio.drain().is_empty());
    }

    #[test]
    fn test_muted_drops_sounds() {
        let mut audio = AudioManager::new();
        audio.set_muted(true);
        audio.play(SoundEffect::Laser);
        assert!(audio.drain().is_empty());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = AudioManager::new();
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        audio.play(SoundEffect::AsteroidBreak);
        assert!(audio.drain().is_empty());
    }

    #[test]
    fn test_names_round_trip() {
        for effect in [
            SoundEffect::Laser,
            SoundEffect::AsteroidBreak,
            SoundEffect::ShipDestroyed,
        ] {
            assert_eq!(SoundEffect::from_name(effect.as_str()), Some(effect));
        }
        assert_eq!(SoundEffect::from_name("boom"), None);
    }
}
