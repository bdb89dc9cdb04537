//! Drawing surface interface

use glam::Vec2;

use super::sprite::Sprite;

/// Something sprites can be blitted onto.
///
/// Its pixel size doubles as the playfield bounds for wrap-around movement.
pub trait Surface {
    /// Pixel dimensions (width, height)
    fn size(&self) -> Vec2;

    /// Draw `sprite` with its top-left corner at `top_left`
    fn blit(&mut self, sprite: &Sprite, top_left: Vec2);
}

/// A single recorded blit
#[derive(Debug, Clone, PartialEq)]
pub struct Blit {
    pub sprite: Sprite,
    pub top_left: Vec2,
}

/// In-memory surface that records every blit for a frame.
///
/// Platform backends replay the list against real textures; headless runs and
/// tests inspect it directly.
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    size: Vec2,
    pub blits: Vec<Blit>,
}

impl FrameRecorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            blits: Vec::new(),
        }
    }

    /// Drop recorded blits (call at the start of each frame)
    pub fn clear(&mut self) {
        self.blits.clear();
    }

    /// Number of blits using the named sprite
    pub fn count_of(&self, name: &str) -> usize {
        self.blits.iter().filter(|b| b.sprite.name == name).count()
    }
}

impl Surface for FrameRecorder {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn blit(&mut self, sprite: &Sprite, top_left: Vec2) {
        self.blits.push(Blit {
            sprite: sprite.clone(),
            top_left,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_records_and_clears() {
        let mut frame = FrameRecorder::new(800.0, 600.0);
        assert_eq!(frame.size(), Vec2::new(800.0, 600.0));

        let sprite = Sprite::new("bullet", 4.0, 4.0);
        frame.blit(&sprite, Vec2::new(1.0, 2.0));
        frame.blit(&sprite, Vec2::new(3.0, 4.0));
        assert_eq!(frame.count_of("bullet"), 2);
        assert_eq!(frame.blits[1].top_left, Vec2::new(3.0, 4.0));

        frame.clear();
        assert!(frame.blits.is_empty());
    }
}
