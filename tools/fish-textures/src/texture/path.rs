//! Path construction and flattening
//!
//! Curves are flattened into polylines as they are added, so the rasterizer
//! only ever sees straight edges.

use glam::{vec2, Vec2};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[derive(Clone, Debug, Default)]
struct SubPath {
    points: Vec<Vec2>,
    closed: bool,
}

/// A sequence of flattened subpaths
#[derive(Clone, Debug, Default)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no subpath has at least two points
    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|sp| sp.points.len() < 2)
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.subpaths.push(SubPath {
            points: vec![vec2(x, y)],
            closed: false,
        });
    }

    /// Line to (x, y); starts a subpath if none is open
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.push_point(vec2(x, y));
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        let p0 = self.ensure_current(vec2(cx, cy));
        let (p1, p2) = (vec2(cx, cy), vec2(x, y));
        let steps = curve_steps(p0.distance(p1) + p1.distance(p2));
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let mt = 1.0 - t;
            self.push_point(p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t));
        }
    }

    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        let p0 = self.ensure_current(vec2(c1x, c1y));
        let (p1, p2, p3) = (vec2(c1x, c1y), vec2(c2x, c2y), vec2(x, y));
        let steps = curve_steps(p0.distance(p1) + p1.distance(p2) + p2.distance(p3));
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let mt = 1.0 - t;
            self.push_point(
                p0 * (mt * mt * mt)
                    + p1 * (3.0 * mt * mt * t)
                    + p2 * (3.0 * mt * t * t)
                    + p3 * (t * t * t),
            );
        }
    }

    /// Clockwise circular arc, connected to the current point by a line
    pub fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        self.ellipse(x, y, radius, radius, 0.0, start, end);
    }

    /// Clockwise elliptical arc rotated by `rotation` radians
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
        let center = vec2(x, y);
        let rot = Vec2::from_angle(rotation);
        let sweep = clockwise_sweep(start, end);
        let steps = ((sweep * rx.max(ry).max(0.0) / 1.5).ceil() as usize).clamp(8, 256);

        for i in 0..=steps {
            let theta = start + sweep * i as f32 / steps as f32;
            let local = vec2(rx * theta.cos(), ry * theta.sin());
            self.push_point(center + rot.rotate(local));
        }
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.move_to(x, y);
        self.line_to(x + w, y);
        self.line_to(x + w, y + h);
        self.line_to(x, y + h);
        self.close();
    }

    /// Rectangle with corner radii in order top-left, top-right,
    /// bottom-right, bottom-left
    pub fn round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radii: [f32; 4]) {
        let limit = (w.abs().min(h.abs())) / 2.0;
        let [tl, tr, br, bl] = radii.map(|r| r.clamp(0.0, limit));

        self.move_to(x + tl, y);
        self.line_to(x + w - tr, y);
        self.corner(x + w - tr, y + tr, tr, -FRAC_PI_2);
        self.line_to(x + w, y + h - br);
        self.corner(x + w - br, y + h - br, br, 0.0);
        self.line_to(x + bl, y + h);
        self.corner(x + bl, y + h - bl, bl, FRAC_PI_2);
        self.line_to(x, y + tl);
        self.corner(x + tl, y + tl, tl, PI);
        self.close();
    }

    /// Close the current subpath; the next segment starts at its first point
    pub fn close(&mut self) {
        let Some(current) = self.subpaths.last_mut() else {
            return;
        };
        if current.closed {
            return;
        }
        current.closed = true;
        let first = current.points[0];
        self.subpaths.push(SubPath {
            points: vec![first],
            closed: false,
        });
    }

    /// Axis-aligned bounds of every point in the path
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.subpaths.iter().flat_map(|sp| sp.points.iter().copied());
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Flattened subpaths with their closed flag
    pub(crate) fn polylines(&self) -> impl Iterator<Item = (&[Vec2], bool)> {
        self.subpaths
            .iter()
            .filter(|sp| sp.points.len() >= 2)
            .map(|sp| (sp.points.as_slice(), sp.closed))
    }

    fn corner(&mut self, cx: f32, cy: f32, r: f32, start: f32) {
        if r > 0.0 {
            self.arc(cx, cy, r, start, start + FRAC_PI_2);
        }
    }

    fn push_point(&mut self, p: Vec2) {
        if let Some(current) = self.subpaths.last_mut().filter(|sp| !sp.closed) {
            current.points.push(p);
            return;
        }
        self.subpaths.push(SubPath {
            points: vec![p],
            closed: false,
        });
    }

    /// Current point, starting a subpath at `fallback` if none is open
    fn ensure_current(&mut self, fallback: Vec2) -> Vec2 {
        if let Some(current) = self.subpaths.last().filter(|sp| !sp.closed) {
            return current.points[current.points.len() - 1];
        }
        self.move_to(fallback.x, fallback.y);
        fallback
    }
}

fn clockwise_sweep(start: f32, end: f32) -> f32 {
    let delta = end - start;
    if delta >= TAU {
        TAU
    } else {
        delta.rem_euclid(TAU)
    }
}

fn curve_steps(control_length: f32) -> usize {
    ((control_length / 3.0).ceil() as usize).clamp(4, 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let mut path = Path::new();
        assert!(path.is_empty());
        path.move_to(1.0, 1.0);
        assert!(path.is_empty());
        path.line_to(2.0, 2.0);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_full_circle_bounds() {
        let mut path = Path::new();
        path.arc(50.0, 40.0, 10.0, 0.0, TAU);
        let (lo, hi) = path.bounds().unwrap();
        assert!((lo.x - 40.0).abs() < 0.1 && (hi.x - 60.0).abs() < 0.1);
        assert!((lo.y - 30.0).abs() < 0.1 && (hi.y - 50.0).abs() < 0.1);
    }

    #[test]
    fn test_half_arc_stays_above_center() {
        // PI..2PI sweeps across the top half in y-down coordinates
        let mut path = Path::new();
        path.arc(0.0, 0.0, 10.0, PI, TAU);
        let (lo, hi) = path.bounds().unwrap();
        assert!(hi.y <= 0.01);
        assert!(lo.y < -9.9);
    }

    #[test]
    fn test_close_starts_new_subpath_at_origin() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(10.0, 0.0);
        path.line_to(10.0, 10.0);
        path.close();
        path.line_to(0.0, 10.0);
        let polys: Vec<_> = path.polylines().collect();
        assert_eq!(polys.len(), 2);
        assert!(polys[0].1);
        assert_eq!(polys[1].0[0], vec2(0.0, 0.0));
    }

    #[test]
    fn test_quad_ends_at_target() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.quad_to(5.0, -10.0, 10.0, 0.0);
        let (points, closed) = path.polylines().next().unwrap();
        assert!(!closed);
        assert!(points.last().unwrap().distance(vec2(10.0, 0.0)) < 1e-4);
    }

    #[test]
    fn test_round_rect_bounds() {
        let mut path = Path::new();
        path.round_rect(10.0, 20.0, 30.0, 40.0, [8.0; 4]);
        let (lo, hi) = path.bounds().unwrap();
        assert!((lo.x - 10.0).abs() < 0.01 && (hi.x - 40.0).abs() < 0.01);
        assert!((lo.y - 20.0).abs() < 0.01 && (hi.y - 60.0).abs() < 0.01);
    }
}
