//! The player's spaceship

use glam::Vec2;

use super::body::{Body, GameObject};
use super::bullet::Bullet;
use crate::assets::{AssetError, AssetManifest};
use crate::audio::{AudioSink, SoundEffect};
use crate::consts::*;
use crate::renderer::{Sprite, Surface, rotozoom};
use crate::{UP, rotate_degrees};

/// Player ship: turns in fixed steps, thrusts along its facing, fires bullets
#[derive(Debug, Clone)]
pub struct Spaceship {
    pub body: Body,
    sprite: Sprite,
    /// Unit-length facing, starts pointing up
    pub direction: Vec2,
    bullet_sprite: Sprite,
    laser_sound: SoundEffect,
}

impl Spaceship {
    pub fn new(pos: Vec2, sprite: Sprite, bullet_sprite: Sprite, laser_sound: SoundEffect) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, &sprite),
            sprite,
            direction: UP,
            bullet_sprite,
            laser_sound,
        }
    }

    /// Build a ship from the `spaceship`/`bullet` sprites and `laser` sound
    pub fn from_assets(pos: Vec2, assets: &AssetManifest) -> Result<Self, AssetError> {
        Ok(Self::new(
            pos,
            assets.load_sprite("spaceship")?,
            assets.load_sprite("bullet")?,
            assets.load_sound("laser")?,
        ))
    }

    /// Turn by one maneuverability step
    pub fn rotate(&mut self, clockwise: bool) {
        let sign = if clockwise { 1.0 } else { -1.0 };
        self.direction = rotate_degrees(self.direction, SHIP_MANEUVERABILITY * sign).normalize();
    }

    /// Thrust along the current facing. Speed is uncapped.
    pub fn accelerate(&mut self) {
        self.body.vel += self.direction * SHIP_ACCELERATION;
    }

    /// Fire a bullet from the ship's position, carrying the ship's momentum
    pub fn shoot(&self, audio: &mut dyn AudioSink) -> Bullet {
        let bullet_vel = self.direction * BULLET_SPEED + self.body.vel;
        audio.play(self.laser_sound);
        Bullet::new(self.body.pos, bullet_vel, self.bullet_sprite.clone())
    }

    /// Sprite rotation (degrees) matching the current facing
    pub fn sprite_angle(&self) -> f32 {
        self.direction.angle_to(UP).to_degrees()
    }
}

impl GameObject for Spaceship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Rotation changes the bounding box, so center on the rotated size
    fn draw(&self, surface: &mut dyn Surface) {
        let rotated = rotozoom(&self.sprite, self.sprite_angle(), 1.0);
        let top_left = self.body.pos - rotated.size() * 0.5;
        surface.blit(&rotated, top_left);
    }
}
