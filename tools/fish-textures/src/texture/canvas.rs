//! Immediate-mode drawing surface
//!
//! `Canvas` mirrors the familiar 2D-context model: build a path, then fill or
//! stroke it with the current paint. Coverage is anti-aliased with a 4x4
//! sample grid per pixel and composited source-over.

use glam::{vec2, Vec2};

use super::font;
use super::paint::Paint;
use super::path::Path;
use super::TextureBuffer;

/// Samples per pixel along each axis
const SUBSAMPLES: u32 = 4;
const SAMPLE_COUNT: f32 = (SUBSAMPLES * SUBSAMPLES) as f32;

/// Graphics state captured by `save` and restored by `restore`
#[derive(Clone, Debug)]
struct DrawState {
    fill: Paint,
    stroke: Paint,
    line_width: f32,
    global_alpha: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Paint::default(),
            stroke: Paint::default(),
            line_width: 1.0,
            global_alpha: 1.0,
        }
    }
}

/// Per-pixel sample masks over a clipped pixel rectangle
struct Coverage {
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
    /// One bit per sample, `SUBSAMPLES * SUBSAMPLES` bits used
    masks: Vec<u16>,
}

impl Coverage {
    fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        let (width, height) = (x1 - x0, y1 - y0);
        Self {
            x0,
            y0,
            width,
            height,
            masks: vec![0; (width * height) as usize],
        }
    }

    #[inline]
    fn mark(&mut self, px: u32, py: u32, sx: u32, sy: u32) {
        let idx = ((py - self.y0) * self.width + (px - self.x0)) as usize;
        self.masks[idx] |= 1u16 << (sy * SUBSAMPLES + sx);
    }
}

/// A fixed-size RGBA drawing surface
pub struct Canvas {
    buffer: TextureBuffer,
    path: Path,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: TextureBuffer::new(width, height),
            path: Path::new(),
            state: DrawState::default(),
            stack: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width
    }

    pub fn height(&self) -> u32 {
        self.buffer.height
    }

    pub fn buffer(&self) -> &TextureBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> TextureBuffer {
        self.buffer
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// Pop the last saved state; unbalanced calls are ignored
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    pub fn set_fill(&mut self, paint: Paint) {
        self.state.fill = paint;
    }

    pub fn set_stroke(&mut self, paint: Paint) {
        self.state.stroke = paint;
    }

    pub fn set_line_width(&mut self, width: f32) {
        if width > 0.0 && width.is_finite() {
            self.state.line_width = width;
        }
    }

    pub fn set_global_alpha(&mut self, alpha: f32) {
        if (0.0..=1.0).contains(&alpha) {
            self.state.global_alpha = alpha;
        }
    }

    pub fn global_alpha(&self) -> f32 {
        self.state.global_alpha
    }

    // ------------------------------------------------------------------
    // Path building
    // ------------------------------------------------------------------

    pub fn begin_path(&mut self) {
        self.path = Path::new();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(x, y);
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(x, y);
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.path.quad_to(cx, cy, x, y);
    }

    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.path.cubic_to(c1x, c1y, c2x, c2y, x, y);
    }

    pub fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        self.path.arc(x, y, radius, start, end);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        x: f32,
        y: f32,
        rx: f32,
        ry: f32,
        rotation: f32,
        start: f32,
        end: f32,
    ) {
        self.path.ellipse(x, y, rx, ry, rotation, start, end);
    }

    pub fn round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radii: [f32; 4]) {
        self.path.round_rect(x, y, w, h, radii);
    }

    pub fn close_path(&mut self) {
        self.path.close();
    }

    // ------------------------------------------------------------------
    // Painting
    // ------------------------------------------------------------------

    /// Fill the current path (nonzero winding, open subpaths closed implicitly)
    pub fn fill(&mut self) {
        if let Some(coverage) = self.fill_coverage(&self.path) {
            let paint = self.state.fill.clone();
            self.composite(&coverage, &paint);
        }
    }

    /// Stroke the current path with the current line width
    pub fn stroke(&mut self) {
        if let Some(coverage) = self.stroke_coverage(&self.path, self.state.line_width) {
            let paint = self.state.stroke.clone();
            self.composite(&coverage, &paint);
        }
    }

    /// Fill a rectangle without touching the current path
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let mut rect = Path::new();
        rect.rect(x, y, w, h);
        if let Some(coverage) = self.fill_coverage(&rect) {
            let paint = self.state.fill.clone();
            self.composite(&coverage, &paint);
        }
    }

    /// Draw `text` centred on `x` with its baseline at `y`
    ///
    /// `size` is the nominal pixel height; glyphs are scaled by the nearest
    /// whole multiple of the 7-row font.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        let scale = ((size / font::GLYPH_ROWS as f32).round() as u32).max(1);
        let width = font::text_width(text, scale) as f32;
        let left = (x - width / 2.0).round() as i32;
        let top = (y - (font::GLYPH_ROWS * scale) as f32).round() as i32;

        let paint = self.state.fill.clone();
        let alpha = self.state.global_alpha;
        let buffer = &mut self.buffer;
        let scale_i = scale as i32;

        font::for_each_lit(text, |gx, gy| {
            let ox = left + gx as i32 * scale_i;
            let oy = top + gy as i32 * scale_i;
            for dy in 0..scale_i {
                for dx in 0..scale_i {
                    let (px, py) = (ox + dx, oy + dy);
                    let color = paint.color_at(vec2(px as f32 + 0.5, py as f32 + 0.5));
                    buffer.blend_pixel(px, py, color, alpha);
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Rasterization
    // ------------------------------------------------------------------

    /// Clip float bounds to the pixel grid; `None` when nothing is visible
    fn clip_bounds(&self, lo: Vec2, hi: Vec2) -> Option<(u32, u32, u32, u32)> {
        let x0 = lo.x.floor().max(0.0);
        let y0 = lo.y.floor().max(0.0);
        let x1 = hi.x.ceil().min(self.buffer.width as f32);
        let y1 = hi.y.ceil().min(self.buffer.height as f32);
        if !(x0 < x1 && y0 < y1) {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn fill_coverage(&self, path: &Path) -> Option<Coverage> {
        let mut edges: Vec<(Vec2, Vec2)> = Vec::new();
        for (points, _closed) in path.polylines() {
            for pair in points.windows(2) {
                edges.push((pair[0], pair[1]));
            }
            let (first, last) = (points[0], points[points.len() - 1]);
            if first != last {
                edges.push((last, first));
            }
        }
        if edges.is_empty() {
            return None;
        }

        let (lo, hi) = path.bounds()?;
        let (x0, y0, x1, y1) = self.clip_bounds(lo, hi)?;
        let mut coverage = Coverage::new(x0, y0, x1, y1);
        let step = 1.0 / SUBSAMPLES as f32;
        let mut crossings: Vec<(f32, i32)> = Vec::with_capacity(16);

        for py in y0..y1 {
            for sy in 0..SUBSAMPLES {
                let sample_y = py as f32 + (sy as f32 + 0.5) * step;

                crossings.clear();
                for &(a, b) in &edges {
                    let dir = if a.y <= sample_y && b.y > sample_y {
                        1
                    } else if b.y <= sample_y && a.y > sample_y {
                        -1
                    } else {
                        continue;
                    };
                    let x = a.x + (sample_y - a.y) * (b.x - a.x) / (b.y - a.y);
                    crossings.push((x, dir));
                }
                if crossings.is_empty() {
                    continue;
                }
                crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

                let mut next = 0;
                let mut winding = 0;
                for px in x0..x1 {
                    for sx in 0..SUBSAMPLES {
                        let sample_x = px as f32 + (sx as f32 + 0.5) * step;
                        while next < crossings.len() && crossings[next].0 < sample_x {
                            winding += crossings[next].1;
                            next += 1;
                        }
                        if winding != 0 {
                            coverage.mark(px, py, sx, sy);
                        }
                    }
                }
            }
        }
        Some(coverage)
    }

    fn stroke_coverage(&self, path: &Path, width: f32) -> Option<Coverage> {
        let half = width / 2.0;
        let mut segments: Vec<(Vec2, Vec2)> = Vec::new();
        for (points, closed) in path.polylines() {
            for pair in points.windows(2) {
                segments.push((pair[0], pair[1]));
            }
            if closed {
                segments.push((points[points.len() - 1], points[0]));
            }
        }
        if segments.is_empty() {
            return None;
        }

        let (lo, hi) = path.bounds()?;
        let pad = Vec2::splat(half);
        let (x0, y0, x1, y1) = self.clip_bounds(lo - pad, hi + pad)?;
        let mut coverage = Coverage::new(x0, y0, x1, y1);
        let step = 1.0 / SUBSAMPLES as f32;
        let half_sq = half * half;

        for (a, b) in segments {
            let Some((sx0, sy0, sx1, sy1)) = self.clip_bounds(a.min(b) - pad, a.max(b) + pad)
            else {
                continue;
            };
            for py in sy0.max(y0)..sy1.min(y1) {
                for px in sx0.max(x0)..sx1.min(x1) {
                    for sy in 0..SUBSAMPLES {
                        for sx in 0..SUBSAMPLES {
                            let p = vec2(
                                px as f32 + (sx as f32 + 0.5) * step,
                                py as f32 + (sy as f32 + 0.5) * step,
                            );
                            if distance_sq_to_segment(p, a, b) <= half_sq {
                                coverage.mark(px, py, sx, sy);
                            }
                        }
                    }
                }
            }
        }
        Some(coverage)
    }

    fn composite(&mut self, coverage: &Coverage, paint: &Paint) {
        let alpha = self.state.global_alpha;
        for row in 0..coverage.height {
            for col in 0..coverage.width {
                let mask = coverage.masks[(row * coverage.width + col) as usize];
                if mask == 0 {
                    continue;
                }
                let (px, py) = (coverage.x0 + col, coverage.y0 + row);
                let color = paint.color_at(vec2(px as f32 + 0.5, py as f32 + 0.5));
                let amount = mask.count_ones() as f32 / SAMPLE_COUNT;
                self.buffer
                    .blend_pixel(px as i32, py as i32, color, amount * alpha);
            }
        }
    }
}

fn distance_sq_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance_squared(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_squared(a + ab * t)
}
