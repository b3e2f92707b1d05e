//! Rendering backend seam
//!
//! The runtime never assumes a concrete rendering technology. Anything
//! implementing [`Backend`] can host a scene: the trait is the full
//! capability set the engine consumes, so a type that compiles against it
//! is a complete backend; there is no partial implementation to detect at
//! runtime.
//!
//! [`HeadlessBackend`] is the bundled software implementation used by the
//! demo and the tests.

pub mod headless;

pub use headless::HeadlessBackend;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::capture::CaptureError;
use crate::sim::geometry::Bounds2D;

/// An RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Fill style for rectangle draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStyle {
    pub color: Color,
}

impl DrawStyle {
    pub const fn solid(color: Color) -> Self {
        Self { color }
    }
}

/// Style for text draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    /// Glyph height in pixels
    pub px: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            px: 16.0,
        }
    }
}

/// Backend-opaque sprite identifier
///
/// Handles are allocated by the backend when image data is registered with
/// it; the engine only carries them between scene and draw dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// A captured frame: tightly packed RGBA8 rows, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCapture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl FrameCapture {
    /// Expected byte length of the pixel buffer
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// The capability set the engine consumes
///
/// One frame is: `clear` once, `draw_*` in scene order, optionally
/// `capture_frame`. Implementations decide everything about how pixels are
/// produced; the engine never looks behind this trait.
pub trait Backend {
    /// Remember `color` as the default background for subsequent frames
    fn set_clear_color(&mut self, color: Color);

    /// Erase the frame to `color`
    fn clear(&mut self, color: Color);

    /// Fill an axis-aligned rectangle
    fn draw_rect(&mut self, bounds: Bounds2D, style: DrawStyle);

    /// Draw a text run with its top-left corner at `position`
    fn draw_text(&mut self, position: Vec2, text: &str, style: TextStyle);

    /// Blit a registered sprite with its top-left corner at `position`
    fn draw_sprite(&mut self, handle: SpriteHandle, position: Vec2);

    /// Hand back the current frame as raw pixels
    fn capture_frame(&mut self) -> Result<FrameCapture, CaptureError>;
}
