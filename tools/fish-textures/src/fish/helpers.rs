//! Shared drawing helpers used by several fish routines

use glam::vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::texture::{hex, rgba, Canvas, Paint};

/// Direction of a two-stop background gradient
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientAxis {
    /// Left to right
    #[default]
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// Colours for [`fish_body`]
#[derive(Clone, Copy, Debug)]
pub(crate) struct BodyColors {
    pub body: [u8; 4],
    pub fin: [u8; 4],
    pub eye: [u8; 4],
}

impl BodyColors {
    /// Body and fin colours with the default black pupil
    pub const fn new(body: [u8; 4], fin: [u8; 4]) -> Self {
        Self {
            body,
            fin,
            eye: hex(0x000000),
        }
    }

    pub const fn eye(mut self, eye: [u8; 4]) -> Self {
        self.eye = eye;
        self
    }
}

/// Generic fish silhouette centred on (cx, cy) with half-extents (bw, bh)
///
/// Elliptical body, triangular tail, curved dorsal fin, triangular belly fin,
/// two-layer eye and a mouth arc.
pub(crate) fn fish_body(canvas: &mut Canvas, cx: f32, cy: f32, bw: f32, bh: f32, colors: BodyColors) {
    canvas.save();

    canvas.begin_path();
    canvas.ellipse(cx, cy, bw, bh, 0.0, 0.0, TAU);
    canvas.set_fill(Paint::solid(colors.body));
    canvas.fill();

    // Tail
    canvas.begin_path();
    canvas.move_to(cx - bw * 0.85, cy);
    canvas.line_to(cx - bw * 1.45, cy - bh * 1.1);
    canvas.line_to(cx - bw * 1.45, cy + bh * 1.1);
    canvas.close_path();
    canvas.set_fill(Paint::solid(colors.fin));
    canvas.fill();

    // Dorsal fin
    canvas.begin_path();
    canvas.move_to(cx - bw * 0.2, cy - bh);
    canvas.quad_to(cx + bw * 0.1, cy - bh * 1.9, cx + bw * 0.45, cy - bh);
    canvas.close_path();
    canvas.fill();

    // Belly fin
    canvas.begin_path();
    canvas.move_to(cx, cy + bh * 0.8);
    canvas.line_to(cx + bw * 0.2, cy + bh * 1.5);
    canvas.line_to(cx + bw * 0.45, cy + bh * 0.85);
    canvas.close_path();
    canvas.fill();

    canvas.begin_path();
    canvas.arc(cx + bw * 0.55, cy - bh * 0.2, bh * 0.22, 0.0, TAU);
    canvas.set_fill(Paint::solid(hex(0xffffff)));
    canvas.fill();
    canvas.begin_path();
    canvas.arc(cx + bw * 0.58, cy - bh * 0.2, bh * 0.13, 0.0, TAU);
    canvas.set_fill(Paint::solid(colors.eye));
    canvas.fill();

    // Mouth
    canvas.begin_path();
    canvas.arc(cx + bw * 0.9, cy + bh * 0.1, bh * 0.1, 0.2, PI - 0.2);
    canvas.set_stroke(Paint::solid(rgba(0, 0, 0, 0.5)));
    canvas.set_line_width(2.0);
    canvas.stroke();

    canvas.restore();
}

/// Fill the whole surface with a two-stop gradient
pub(crate) fn background(canvas: &mut Canvas, from: [u8; 4], to: [u8; 4], axis: GradientAxis) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let end = match axis {
        GradientAxis::Horizontal => vec2(w, 0.0),
        GradientAxis::Vertical => vec2(0.0, h),
    };
    canvas.set_fill(Paint::linear(vec2(0.0, 0.0), end, &[(0.0, from), (1.0, to)]));
    canvas.fill_rect(0.0, 0.0, w, h);
}

/// Grid of translucent half-circle arcs over a body
#[allow(clippy::too_many_arguments)]
pub(crate) fn scales(
    canvas: &mut Canvas,
    cx: f32,
    cy: f32,
    bw: f32,
    bh: f32,
    color: [u8; 4],
    rows: u32,
    cols: u32,
) {
    canvas.save();
    canvas.set_global_alpha(0.25);
    canvas.set_stroke(Paint::solid(color));
    canvas.set_line_width(1.5);
    for r in 0..rows {
        for c in 0..cols {
            let sx = cx - bw * 0.5 + (c as f32 / cols as f32) * bw * 1.1;
            let sy = cy - bh * 0.4 + (r as f32 / rows as f32) * bh * 0.85;
            canvas.begin_path();
            canvas.arc(sx, sy, bh * 0.22, PI, TAU);
            canvas.stroke();
        }
    }
    canvas.restore();
}

/// Default 3x5 scale grid
pub(crate) fn scales_default(canvas: &mut Canvas, cx: f32, cy: f32, bw: f32, bh: f32, color: [u8; 4]) {
    scales(canvas, cx, cy, bw, bh, color, 3, 5);
}

/// Randomly placed translucent dots across the whole surface
pub(crate) fn sparkles<R: Rng>(
    canvas: &mut Canvas,
    rng: &mut R,
    count: u32,
    color: [u8; 4],
    min_radius: f32,
    max_radius: f32,
) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    canvas.save();
    canvas.set_fill(Paint::solid(color));
    for _ in 0..count {
        let x = rng.random::<f32>() * w;
        let y = rng.random::<f32>() * h;
        let r = min_radius + rng.random::<f32>() * (max_radius - min_radius);
        canvas.begin_path();
        canvas.arc(x, y, r, 0.0, TAU);
        canvas.set_global_alpha(0.4 + rng.random::<f32>() * 0.5);
        canvas.fill();
    }
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_background_horizontal_and_vertical() {
        let (a, b) = (hex(0xff0000), hex(0x0000ff));

        let mut canvas = Canvas::new(64, 32);
        background(&mut canvas, a, b, GradientAxis::Horizontal);
        let buf = canvas.buffer();
        assert!(buf.get_pixel(0, 16)[0] > 240);
        assert!(buf.get_pixel(63, 16)[2] > 240);
        assert_eq!(buf.get_pixel(10, 0), buf.get_pixel(10, 31));

        let mut canvas = Canvas::new(64, 32);
        background(&mut canvas, a, b, GradientAxis::Vertical);
        let buf = canvas.buffer();
        assert!(buf.get_pixel(32, 0)[0] > 240);
        assert!(buf.get_pixel(32, 31)[2] > 240);
        assert_eq!(buf.get_pixel(0, 10), buf.get_pixel(63, 10));
    }

    #[test]
    fn test_fish_body_paints_body_and_eye() {
        let mut canvas = Canvas::new(256, 128);
        let body = hex(0x2e6ea6);
        fish_body(&mut canvas, 115.0, 64.0, 80.0, 28.0, BodyColors::new(body, hex(0x1a4a7a)));
        let buf = canvas.buffer();
        // Body centre
        assert_eq!(buf.get_pixel(100, 64), body);
        // Eye white left of the pupil
        assert_eq!(buf.get_pixel(154, 58), [255, 255, 255, 255]);
        // Tail fin extends past the left end of the body
        assert_eq!(buf.get_pixel(10, 64), hex(0x1a4a7a));
        assert_eq!(buf.get_pixel(0, 0)[3], 0);
        // Restored state leaves default alpha
        assert_eq!(canvas.global_alpha(), 1.0);
    }

    #[test]
    fn test_scales_are_translucent() {
        let mut canvas = Canvas::new(256, 128);
        scales_default(&mut canvas, 128.0, 64.0, 70.0, 25.0, hex(0xffffff));
        let max_alpha = canvas.buffer().pixels.chunks_exact(4).map(|p| p[3]).max().unwrap();
        assert!(max_alpha > 0);
        assert!(max_alpha <= 65);
    }

    #[test]
    fn test_sparkles_deterministic_with_seed() {
        let draw = |seed| {
            let mut canvas = Canvas::new(64, 64);
            let mut rng = Pcg32::seed_from_u64(seed);
            sparkles(&mut canvas, &mut rng, 10, hex(0xffe066), 2.0, 4.0);
            canvas.into_buffer()
        };
        assert_eq!(draw(7), draw(7));
        assert_ne!(draw(7), draw(8));
    }

    #[test]
    fn test_sparkles_zero_count_draws_nothing() {
        let mut canvas = Canvas::new(16, 16);
        let mut rng = Pcg32::seed_from_u64(1);
        sparkles(&mut canvas, &mut rng, 0, hex(0xffffff), 1.0, 3.0);
        assert!(canvas.buffer().pixels.iter().all(|&p| p == 0));
    }
}
