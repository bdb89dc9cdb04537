//! Space Rocks - object model for a wrap-around Asteroids clone
//!
//! Core modules:
//! - `sim`: Entities (ship, bullets, asteroids) and the deterministic frame tick
//! - `renderer`: Sprite handles and the drawing surface interface
//! - `assets`: Sprite/sound lookup by name
//! - `audio`: Sound effect playback interface
//! - `settings`: Playfield and session configuration

pub mod assets;
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetError, AssetManifest};
pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use renderer::{FrameRecorder, Sprite, Surface, rotozoom};
pub use settings::{Settings, SettingsError};

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Degrees the ship turns per rotate call
    pub const SHIP_MANEUVERABILITY: f32 = 3.0;
    /// Speed added per accelerate call (no top speed)
    pub const SHIP_ACCELERATION: f32 = 0.25;
    /// Bullet speed relative to the ship
    pub const BULLET_SPEED: f32 = 3.0;

    /// Asteroid spawn speed range [min, max)
    pub const ASTEROID_MIN_SPEED: f32 = 1.0;
    pub const ASTEROID_MAX_SPEED: f32 = 3.0;

    /// Closest an initial asteroid may spawn to the ship
    pub const MIN_ASTEROID_DISTANCE: f32 = 250.0;

    /// Playfield defaults
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    pub const DEFAULT_ASTEROID_COUNT: u32 = 6;
}

/// Screen-space "up" (y grows downward)
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Wrap a position onto the toroidal playfield.
///
/// Each axis wraps independently into `[0, bounds)`. Bounds must be positive.
#[inline]
pub fn wrap_position(pos: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, bounds.x), wrap_axis(pos.y, bounds.y))
}

#[inline]
fn wrap_axis(value: f32, dim: f32) -> f32 {
    let wrapped = value.rem_euclid(dim);
    // rem_euclid rounds tiny negative inputs up to exactly `dim`
    if wrapped >= dim { 0.0 } else { wrapped }
}

/// Rotate a vector by `degrees` (positive is clockwise on a y-down screen)
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Random velocity with uniform direction and speed in `[min_speed, max_speed)`
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, min_speed: f32, max_speed: f32) -> Vec2 {
    let speed = rng.random_range(min_speed..max_speed);
    let angle: f32 = rng.random_range(0.0..360.0);
    rotate_degrees(Vec2::X * speed, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_wrap_position_inside_is_unchanged() {
        let bounds = Vec2::new(800.0, 600.0);
        assert_eq!(wrap_position(Vec2::new(10.0, 20.0), bounds), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_wrap_position_each_axis() {
        let bounds = Vec2::new(800.0, 600.0);
        let wrapped = wrap_position(Vec2::new(805.0, -5.0), bounds);
        assert!((wrapped.x - 5.0).abs() < 1e-4);
        assert!((wrapped.y - 595.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_below_bound() {
        let bounds = Vec2::new(800.0, 600.0);
        let wrapped = wrap_position(Vec2::new(-1e-9, -1e-9), bounds);
        assert!(wrapped.x < bounds.x);
        assert!(wrapped.y < bounds.y);
    }

    #[test]
    fn test_rotate_degrees_clockwise_on_screen() {
        // Rotating "up" by +90 on a y-down screen points right
        let right = rotate_degrees(UP, 90.0);
        assert!((right - Vec2::X).length() < 1e-5);
    }

    #[test]
    fn test_random_velocity_speed_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let v = random_velocity(&mut rng, 1.0, 3.0);
            let speed = v.length();
            assert!(speed >= 1.0 - 1e-4 && speed < 3.0 + 1e-4, "speed {speed}");
        }
    }
}
