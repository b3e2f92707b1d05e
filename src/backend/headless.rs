//! Software framebuffer backend
//!
//! A windowless [`Backend`] that rasterizes into an RGBA8 buffer: rect
//! fills and sprite blits with clipping, capture by copying the buffer.
//! Text is not rasterized (glyph rendering belongs to real backends), so
//! `draw_text` only logs at trace level.

use glam::Vec2;

use super::{Backend, Color, DrawStyle, FrameCapture, SpriteHandle, TextStyle};
use crate::capture::CaptureError;
use crate::sim::geometry::Bounds2D;

struct SpriteImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Backend drawing into memory instead of a window
pub struct HeadlessBackend {
    width: u32,
    height: u32,
    clear_color: Color,
    pixels: Vec<u8>,
    sprites: Vec<SpriteImage>,
}

impl HeadlessBackend {
    pub fn new(width: u32, height: u32) -> Self {
        let mut backend = Self {
            width,
            height,
            clear_color: Color::BLACK,
            pixels: vec![0; width as usize * height as usize * 4],
            sprites: Vec::new(),
        };
        backend.clear(Color::BLACK);
        backend
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The framebuffer as tightly packed RGBA8 rows
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The stored default background color
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Color of the pixel at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Color::rgba(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }

    /// Register RGBA8 image data, returning the handle entities can carry.
    /// `pixels` must hold `width * height * 4` bytes.
    pub fn load_sprite(&mut self, width: u32, height: u32, pixels: Vec<u8>) -> SpriteHandle {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        let handle = SpriteHandle(self.sprites.len() as u32);
        self.sprites.push(SpriteImage {
            width,
            height,
            pixels,
        });
        handle
    }

    fn put(&mut self, x: u32, y: u32, color: Color) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i] = color.r;
        self.pixels[i + 1] = color.g;
        self.pixels[i + 2] = color.b;
        self.pixels[i + 3] = color.a;
    }

    /// Clip a float span to the framebuffer's `[0, limit)` pixel range
    fn clip(start: f32, end: f32, limit: u32) -> (u32, u32) {
        // Negative floats saturate to 0 when cast to u32.
        let lo = start.floor().max(0.0) as u32;
        let hi = (end.ceil().min(limit as f32).max(0.0)) as u32;
        (lo.min(hi), hi)
    }
}

impl Backend for HeadlessBackend {
    fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
            chunk[3] = color.a;
        }
    }

    fn draw_rect(&mut self, bounds: Bounds2D, style: DrawStyle) {
        let (x0, x1) = Self::clip(bounds.left(), bounds.right(), self.width);
        let (y0, y1) = Self::clip(bounds.top(), bounds.bottom(), self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, style.color);
            }
        }
    }

    fn draw_text(&mut self, position: Vec2, text: &str, _style: TextStyle) {
        log::trace!("headless text at ({}, {}): {text}", position.x, position.y);
    }

    fn draw_sprite(&mut self, handle: SpriteHandle, position: Vec2) {
        let Some(sprite) = self.sprites.get(handle.0 as usize) else {
            log::warn!("draw_sprite with unregistered handle {}", handle.0);
            return;
        };

        for sy in 0..sprite.height {
            for sx in 0..sprite.width {
                let dx = position.x.floor() as i64 + sx as i64;
                let dy = position.y.floor() as i64 + sy as i64;
                if dx < 0 || dy < 0 || dx >= self.width as i64 || dy >= self.height as i64 {
                    continue;
                }
                let si = (sy as usize * sprite.width as usize + sx as usize) * 4;
                // Fully transparent source pixels leave the destination alone.
                if sprite.pixels[si + 3] == 0 {
                    continue;
                }
                let di = (dy as usize * self.width as usize + dx as usize) * 4;
                self.pixels[di..di + 4].copy_from_slice(&sprite.pixels[si..si + 4]);
            }
        }
    }

    fn capture_frame(&mut self) -> Result<FrameCapture, CaptureError> {
        Ok(FrameCapture {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Size2D;

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut backend = HeadlessBackend::new(4, 4);
        backend.clear(Color::rgb(9, 8, 7));
        assert_eq!(backend.pixel(0, 0), Color::rgb(9, 8, 7));
        assert_eq!(backend.pixel(3, 3), Color::rgb(9, 8, 7));
    }

    #[test]
    fn test_set_clear_color_is_remembered() {
        let mut backend = HeadlessBackend::new(2, 2);
        backend.set_clear_color(Color::rgb(40, 50, 60));
        assert_eq!(backend.clear_color(), Color::rgb(40, 50, 60));
    }

    #[test]
    fn test_draw_rect_fills_and_clips() {
        let mut backend = HeadlessBackend::new(8, 8);
        let bounds = Bounds2D::new(
            Vec2::new(6.0, -2.0),
            Size2D::new(10.0, 4.0).unwrap(),
        );
        backend.draw_rect(bounds, DrawStyle::solid(Color::WHITE));

        // Inside the clipped region.
        assert_eq!(backend.pixel(6, 0), Color::WHITE);
        assert_eq!(backend.pixel(7, 1), Color::WHITE);
        // Outside it.
        assert_eq!(backend.pixel(5, 0), Color::BLACK);
        assert_eq!(backend.pixel(6, 2), Color::BLACK);
    }

    #[test]
    fn test_sprite_blit_skips_transparent_pixels() {
        let mut backend = HeadlessBackend::new(4, 4);
        backend.clear(Color::rgb(1, 1, 1));
        // 2x1 sprite: opaque red, then transparent.
        let handle = backend.load_sprite(2, 1, vec![255, 0, 0, 255, 0, 0, 0, 0]);
        backend.draw_sprite(handle, Vec2::new(1.0, 1.0));

        assert_eq!(backend.pixel(1, 1), Color::rgb(255, 0, 0));
        assert_eq!(backend.pixel(2, 1), Color::rgb(1, 1, 1));
    }

    #[test]
    fn test_capture_matches_framebuffer() {
        let mut backend = HeadlessBackend::new(3, 2);
        backend.clear(Color::rgb(5, 6, 7));
        let frame = backend.capture_frame().unwrap();
        assert_eq!(frame.width, 3);
        assert_eq!(frame.height, 2);
        assert_eq!(frame.pixels.len(), frame.expected_len());
        assert_eq!(&frame.pixels[..4], &[5, 6, 7, 255]);
    }
}
