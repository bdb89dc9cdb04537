//! Bullets fired by the ship

use glam::Vec2;

use super::body::{Body, GameObject};
use crate::renderer::Sprite;

/// A projectile. Moves in a straight line and never wraps; the frame loop
/// culls it once it leaves the playfield.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    sprite: Sprite,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2, sprite: Sprite) -> Self {
        Self {
            body: Body::new(pos, vel, &sprite),
            sprite,
        }
    }

    /// True once the bullet's center is outside `[0, w) x [0, h)`
    pub fn is_off_screen(&self, bounds: Vec2) -> bool {
        let pos = self.body.pos;
        pos.x < 0.0 || pos.y < 0.0 || pos.x >= bounds.x || pos.y >= bounds.y
    }
}

impl GameObject for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn step(&mut self, _bounds: Vec2) {
        self.body.pos += self.body.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet(pos: Vec2, vel: Vec2) -> Bullet {
        Bullet::new(pos, vel, Sprite::new("bullet", 6.0, 6.0))
    }

    #[test]
    fn test_bullet_radius() {
        assert_eq!(bullet(Vec2::ZERO, Vec2::ZERO).body.radius(), 3.0);
    }

    #[test]
    fn test_bullet_does_not_wrap() {
        let bounds = Vec2::new(100.0, 100.0);
        let mut b = bullet(Vec2::new(99.0, 50.0), Vec2::new(3.0, 0.0));
        b.step(bounds);
        assert_eq!(b.body.pos, Vec2::new(102.0, 50.0));
        assert!(b.is_off_screen(bounds));

        // Keeps going once off-screen
        b.step(bounds);
        assert_eq!(b.body.pos, Vec2::new(105.0, 50.0));
    }

    #[test]
    fn test_off_screen_edges() {
        let bounds = Vec2::new(100.0, 100.0);
        assert!(!bullet(Vec2::new(0.0, 0.0), Vec2::ZERO).is_off_screen(bounds));
        assert!(!bullet(Vec2::new(99.9, 99.9), Vec2::ZERO).is_off_screen(bounds));
        assert!(bullet(Vec2::new(100.0, 50.0), Vec2::ZERO).is_off_screen(bounds));
        assert!(bullet(Vec2::new(50.0, -0.1), Vec2::ZERO).is_off_screen(bounds));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_step_is_exact_translation(
                x in -2000.0f32..2000.0,
                y in -2000.0f32..2000.0,
                vx in -50.0f32..50.0,
                vy in -50.0f32..50.0,
            ) {
                let start = Vec2::new(x, y);
                let vel = Vec2::new(vx, vy);
                let mut b = bullet(start, vel);
                b.step(Vec2::new(800.0, 600.0));
                prop_assert_eq!(b.body.pos, start + vel);
            }
        }
    }
}
