//! Asteroids and the splitting rule

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use super::body::{Body, GameObject};
use crate::consts::{ASTEROID_MAX_SPEED, ASTEROID_MIN_SPEED};
use crate::random_velocity;
use crate::renderer::{Sprite, rotozoom};

/// Raised for a size tier outside 1..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("asteroid size must be 1, 2 or 3 (got {0})")]
pub struct AsteroidSizeError(pub u8);

/// Discrete asteroid size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AsteroidSize {
    Small = 1,
    Medium = 2,
    #[default]
    Large = 3,
}

impl AsteroidSize {
    /// Sprite scale for this tier
    pub fn scale(self) -> f32 {
        match self {
            AsteroidSize::Large => 1.0,
            AsteroidSize::Medium => 0.5,
            AsteroidSize::Small => 0.25,
        }
    }

    /// Tier the children of a split get, `None` for the smallest
    pub fn smaller(self) -> Option<Self> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    #[inline]
    pub fn tier(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AsteroidSize {
    type Error = AsteroidSizeError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(AsteroidSize::Small),
            2 => Ok(AsteroidSize::Medium),
            3 => Ok(AsteroidSize::Large),
            other => Err(AsteroidSizeError(other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
    sprite: Sprite,
    size: AsteroidSize,
}

impl Asteroid {
    /// New asteroid drifting in a random direction at a random speed.
    ///
    /// `base_sprite` is the full-size image; it is scaled for `size`.
    pub fn new<R: Rng + ?Sized>(
        pos: Vec2,
        base_sprite: &Sprite,
        size: AsteroidSize,
        rng: &mut R,
    ) -> Self {
        let sprite = rotozoom(base_sprite, 0.0, size.scale());
        let vel = random_velocity(rng, ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED);
        Self {
            body: Body::new(pos, vel, &sprite),
            sprite,
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    /// Two children one tier smaller at this position, or none for the
    /// smallest tier. The caller removes `self` from play either way.
    pub fn split<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Asteroid> {
        let Some(child_size) = self.size.smaller() else {
            return Vec::new();
        };
        let base = self.sprite.source();
        log::debug!(
            "Split size {} asteroid at ({:.1}, {:.1})",
            self.size.tier(),
            self.body.pos.x,
            self.body.pos.y
        );
        (0..2)
            .map(|_| Asteroid::new(self.body.pos, &base, child_size, rng))
            .collect()
    }
}

impl GameObject for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}
