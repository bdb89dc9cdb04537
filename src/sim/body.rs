//! Shared physics body and the `GameObject` trait
//!
//! Every entity is a circle moving at constant velocity. The trait supplies
//! wrap-around movement, centered drawing and circle overlap; entities
//! override only what differs.

use glam::Vec2;

use crate::renderer::{Sprite, Surface};
use crate::wrap_position;

/// Position, velocity and collision radius of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at construction
    radius: f32,
}

impl Body {
    /// Body whose radius is half the sprite's width
    pub fn new(pos: Vec2, vel: Vec2, sprite: &Sprite) -> Self {
        Self {
            pos,
            vel,
            radius: sprite.width() / 2.0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Circle overlap, strict: touching circles do not collide
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }
}

/// Common behavior of ships, bullets and asteroids
pub trait GameObject {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
    fn sprite(&self) -> &Sprite;

    /// Advance one frame, wrapping around the playfield
    fn step(&mut self, bounds: Vec2) {
        let body = self.body_mut();
        body.pos = wrap_position(body.pos + body.vel, bounds);
    }

    /// Blit the sprite centered on the body
    fn draw(&self, surface: &mut dyn Surface) {
        let body = self.body();
        surface.blit(self.sprite(), body.pos - Vec2::splat(body.radius()));
    }

    fn collides_with(&self, other: &dyn GameObject) -> bool {
        self.body().overlaps(other.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameRecorder;

    /// Minimal object using every default
    struct Rock {
        body: Body,
        sprite: Sprite,
    }

    impl Rock {
        fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
            let sprite = Sprite::new("rock", size, size);
            Self {
                body: Body::new(pos, vel, &sprite),
                sprite,
            }
        }
    }

    impl GameObject for Rock {
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

    #[test]
    fn test_radius_from_sprite_width() {
        let rock = Rock::new(Vec2::ZERO, Vec2::ZERO, 40.0);
        assert_eq!(rock.body.radius(), 20.0);
    }

    #[test]
    fn test_step_wraps() {
        let bounds = Vec2::new(100.0, 100.0);
        let mut rock = Rock::new(Vec2::new(98.0, 1.0), Vec2::new(5.0, -3.0), 10.0);
        rock.step(bounds);
        assert!((rock.body.pos.x - 3.0).abs() < 1e-4);
        assert!((rock.body.pos.y - 98.0).abs() < 1e-4);
    }

    #[test]
    fn test_draw_centers_sprite() {
        let rock = Rock::new(Vec2::new(50.0, 60.0), Vec2::ZERO, 20.0);
        let mut frame = FrameRecorder::new(100.0, 100.0);
        rock.draw(&mut frame);
        assert_eq!(frame.blits.len(), 1);
        assert_eq!(frame.blits[0].top_left, Vec2::new(40.0, 50.0));
        // Drawing leaves the body alone
        assert_eq!(rock.body.pos, Vec2::new(50.0, 60.0));
    }

    #[test]
    fn test_collision_boundary_is_strict() {
        let a = Rock::new(Vec2::ZERO, Vec2::ZERO, 20.0);
        let touching = Rock::new(Vec2::new(20.0, 0.0), Vec2::ZERO, 20.0);
        let overlapping = Rock::new(Vec2::new(19.99, 0.0), Vec2::ZERO, 20.0);
        assert!(!a.collides_with(&touching));
        assert!(a.collides_with(&overlapping));
        assert!(overlapping.collides_with(&a));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_step_stays_on_playfield(
                x in -5000.0f32..5000.0,
                y in -5000.0f32..5000.0,
                vx in -500.0f32..500.0,
                vy in -500.0f32..500.0,
                w in 1.0f32..2000.0,
                h in 1.0f32..2000.0,
            ) {
                let mut rock = Rock::new(Vec2::new(x, y), Vec2::new(vx, vy), 10.0);
                rock.step(Vec2::new(w, h));
                prop_assert!(rock.body.pos.x >= 0.0 && rock.body.pos.x < w);
                prop_assert!(rock.body.pos.y >= 0.0 && rock.body.pos.y < h);
            }

            #[test]
            fn test_collision_is_symmetric(
                ax in -500.0f32..500.0,
                ay in -500.0f32..500.0,
                bx in -500.0f32..500.0,
                by in -500.0f32..500.0,
                ra in 1.0f32..200.0,
                rb in 1.0f32..200.0,
            ) {
                let a = Rock::new(Vec2::new(ax, ay), Vec2::ZERO, ra);
                let b = Rock::new(Vec2::new(bx, by), Vec2::ZERO, rb);
                prop_assert_eq!(a.collides_with(&b), b.collides_with(&a));
            }
        }
    }
}
