//! Rendering interface
//!
//! The simulation draws through the `Surface` trait using `Sprite` handles;
//! actual rasterization belongs to the platform layer.

pub mod sprite;
pub mod surface;

pub use sprite::{Sprite, rotozoom};
pub use surface::{Blit, FrameRecorder, Surface};
