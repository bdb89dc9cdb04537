//! Sprite handles and the rotate/scale transform

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque handle to a renderable image.
///
/// The simulation never touches pixels: a sprite is a named source image plus
/// the rotation and scale applied to it. The platform layer resolves `name`
/// to real texture data when blitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub name: String,
    /// Unrotated, unscaled source dimensions in pixels
    source_size: Vec2,
    /// Counter-clockwise rotation on screen, degrees
    angle: f32,
    scale: f32,
}

impl Sprite {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            source_size: Vec2::new(width, height),
            angle: 0.0,
            scale: 1.0,
        }
    }

    #[inline]
    pub fn source_size(&self) -> Vec2 {
        self.source_size
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Pixel size of the transformed image (bounding box of the rotated rect)
    pub fn size(&self) -> Vec2 {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let w = self.source_size.x * cos + self.source_size.y * sin;
        let h = self.source_size.x * sin + self.source_size.y * cos;
        Vec2::new(w, h) * self.scale
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size().x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size().y
    }

    /// The untransformed source image
    pub fn source(&self) -> Sprite {
        Sprite::new(self.name.clone(), self.source_size.x, self.source_size.y)
    }
}

/// Rotate and scale a sprite, producing a new handle.
///
/// Transforms compose: angles add, scales multiply.
pub fn rotozoom(sprite: &Sprite, angle_deg: f32, scale: f32) -> Sprite {
    Sprite {
        name: sprite.name.clone(),
        source_size: sprite.source_size,
        angle: sprite.angle + angle_deg,
        scale: sprite.scale * scale,
    }
}
