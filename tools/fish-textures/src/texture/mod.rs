//! Software drawing surface for sprite textures
//!
//! A small 2D vector rasterizer over an RGBA8 buffer: paths built from lines,
//! quadratic/cubic curves, arcs and ellipses, filled or stroked with a solid
//! colour or a linear/radial gradient, plus a bitmap font for labels.
//!
//! # Example
//! ```no_run
//! use fish_textures::texture::*;
//!
//! let mut canvas = Canvas::new(256, 128);
//! canvas.set_fill(Paint::linear(
//!     glam::vec2(0.0, 0.0),
//!     glam::vec2(256.0, 0.0),
//!     &[(0.0, hex(0x1a3a5c)), (1.0, hex(0x0d2235))],
//! ));
//! canvas.fill_rect(0.0, 0.0, 256.0, 128.0);
//!
//! canvas.begin_path();
//! canvas.ellipse(115.0, 64.0, 70.0, 25.0, 0.0, 0.0, std::f32::consts::TAU);
//! canvas.set_fill(Paint::solid(hex(0x5dade2)));
//! canvas.fill();
//!
//! write_png(canvas.buffer(), std::path::Path::new("fish.png")).unwrap();
//! ```

mod canvas;
mod color;
mod export;
mod font;
mod paint;
mod path;

// Core type
pub use self::buffer::TextureBuffer;

// Drawing
pub use canvas::Canvas;
pub use paint::{GradientStop, Paint};
pub use path::Path;

// Colours
pub use color::{hex, lerp_color, parse_css_color, rgba};

// Text
pub use font::{glyph, text_width, GLYPH_COLUMNS, GLYPH_ROWS};

// Export
pub use export::{encode_png, write_png};

mod buffer {
    /// RGBA texture buffer (straight alpha)
    #[derive(Clone, PartialEq, Eq)]
    pub struct TextureBuffer {
        /// Width in pixels
        pub width: u32,
        /// Height in pixels
        pub height: u32,
        /// RGBA pixel data (4 bytes per pixel, row-major order)
        pub pixels: Vec<u8>,
    }

    impl std::fmt::Debug for TextureBuffer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("TextureBuffer")
                .field("width", &self.width)
                .field("height", &self.height)
                .finish_non_exhaustive()
        }
    }

    impl TextureBuffer {
        /// Create a new texture buffer initialized to transparent black
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![0u8; (width * height * 4) as usize],
            }
        }

        /// Create a texture buffer filled with a solid color
        pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
            let mut buffer = Self::new(width, height);
            for chunk in buffer.pixels.chunks_exact_mut(4) {
                chunk.copy_from_slice(&color);
            }
            buffer
        }

        /// Get pixel at (x, y)
        #[inline]
        pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
            let idx = ((y * self.width + x) * 4) as usize;
            [
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ]
        }

        /// Composite `color` over the pixel at (x, y) with extra `opacity`
        ///
        /// Source-over on straight alpha. Out-of-bounds coordinates are ignored.
        pub fn blend_pixel(&mut self, x: i32, y: i32, color: [u8; 4], opacity: f32) {
            if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
                return;
            }
            let sa = color[3] as f32 / 255.0 * opacity.clamp(0.0, 1.0);
            if sa <= 0.0 {
                return;
            }

            let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
            let dst = &mut self.pixels[idx..idx + 4];
            let da = dst[3] as f32 / 255.0;
            let out_a = sa + da * (1.0 - sa);

            for c in 0..3 {
                let s = color[c] as f32;
                let d = dst[c] as f32;
                let v = (s * sa + d * da * (1.0 - sa)) / out_a;
                dst[c] = v.round().clamp(0.0, 255.0) as u8;
            }
            dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_buffer_new() {
        let buf = TextureBuffer::new(64, 32);
        assert_eq!(buf.width, 64);
        assert_eq!(buf.height, 32);
        assert_eq!(buf.pixels.len(), 64 * 32 * 4);
        assert!(buf.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_texture_buffer_filled() {
        let color = [255, 128, 64, 255];
        let buf = TextureBuffer::filled(8, 8, color);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(buf.get_pixel(x, y), color);
            }
        }
    }

    #[test]
    fn test_blend_opaque_replaces() {
        let mut buf = TextureBuffer::filled(2, 2, [0, 0, 255, 255]);
        buf.blend_pixel(1, 1, [255, 0, 0, 255], 1.0);
        assert_eq!(buf.get_pixel(1, 1), [255, 0, 0, 255]);
        assert_eq!(buf.get_pixel(0, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn test_blend_half_alpha_mixes() {
        let mut buf = TextureBuffer::filled(1, 1, [0, 0, 0, 255]);
        buf.blend_pixel(0, 0, [255, 255, 255, 255], 0.5);
        let px = buf.get_pixel(0, 0);
        assert!((126..=129).contains(&px[0]));
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_blend_onto_transparent_keeps_color() {
        let mut buf = TextureBuffer::new(1, 1);
        buf.blend_pixel(0, 0, [200, 100, 50, 255], 0.5);
        let px = buf.get_pixel(0, 0);
        assert_eq!(&px[..3], &[200, 100, 50]);
        assert!((127..=128).contains(&px[3]));
    }

    #[test]
    fn test_blend_out_of_bounds_ignored() {
        let mut buf = TextureBuffer::new(2, 2);
        buf.blend_pixel(-1, 0, [255, 255, 255, 255], 1.0);
        buf.blend_pixel(2, 1, [255, 255, 255, 255], 1.0);
        assert!(buf.pixels.iter().all(|&p| p == 0));
    }
}
