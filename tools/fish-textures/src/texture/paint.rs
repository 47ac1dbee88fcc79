//! Fill and stroke paints
//!
//! Gradients follow canvas semantics: colours are padded beyond the first and
//! last stop, and radial gradients interpolate between two circles.

use glam::Vec2;

use super::color::lerp_color;

/// A colour stop along a gradient (offset in 0.0-1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: [u8; 4],
}

/// Source of colour for fills and strokes
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Single colour
    Solid([u8; 4]),
    /// Gradient along the line from `start` to `end`
    Linear {
        start: Vec2,
        end: Vec2,
        stops: Vec<GradientStop>,
    },
    /// Two-circle gradient from (`c0`, `r0`) to (`c1`, `r1`)
    Radial {
        c0: Vec2,
        r0: f32,
        c1: Vec2,
        r1: f32,
        stops: Vec<GradientStop>,
    },
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid([0, 0, 0, 255])
    }
}

impl Paint {
    pub fn solid(color: [u8; 4]) -> Self {
        Paint::Solid(color)
    }

    pub fn linear(start: Vec2, end: Vec2, stops: &[(f32, [u8; 4])]) -> Self {
        Paint::Linear {
            start,
            end,
            stops: collect_stops(stops),
        }
    }

    pub fn radial(c0: Vec2, r0: f32, c1: Vec2, r1: f32, stops: &[(f32, [u8; 4])]) -> Self {
        Paint::Radial {
            c0,
            r0,
            c1,
            r1,
            stops: collect_stops(stops),
        }
    }

    /// Colour at point `p` (pixel centre in surface coordinates)
    pub fn color_at(&self, p: Vec2) -> [u8; 4] {
        match self {
            Paint::Solid(color) => *color,
            Paint::Linear { start, end, stops } => {
                let axis = *end - *start;
                let len_sq = axis.length_squared();
                if len_sq <= f32::EPSILON {
                    return [0, 0, 0, 0];
                }
                let t = (p - *start).dot(axis) / len_sq;
                sample_stops(stops, t)
            }
            Paint::Radial {
                c0,
                r0,
                c1,
                r1,
                stops,
            } => match radial_t(p, *c0, *r0, *c1, *r1) {
                Some(t) => sample_stops(stops, t),
                None => [0, 0, 0, 0],
            },
        }
    }
}

fn collect_stops(stops: &[(f32, [u8; 4])]) -> Vec<GradientStop> {
    let mut out: Vec<GradientStop> = stops
        .iter()
        .map(|&(offset, color)| GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        })
        .collect();
    // Stable sort keeps insertion order for equal offsets
    out.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    out
}

fn sample_stops(stops: &[GradientStop], t: f32) -> [u8; 4] {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0, 0, 0, 0];
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.offset && t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.color;
            }
            return lerp_color(a.color, b.color, (t - a.offset) / span);
        }
    }
    last.color
}

/// Largest `t` such that `p` lies on the circle interpolated at `t` with a
/// non-negative radius.
fn radial_t(p: Vec2, c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> Option<f32> {
    let cd = c1 - c0;
    let dr = r1 - r0;
    let pd = p - c0;

    let a = cd.length_squared() - dr * dr;
    let b = pd.dot(cd) + r0 * dr;
    let c = pd.length_squared() - r0 * r0;
    let radius_ok = |t: f32| r0 + t * dr >= 0.0;

    if a.abs() < 1e-6 {
        if b.abs() < 1e-6 {
            return None;
        }
        let t = c / (2.0 * b);
        return radius_ok(t).then_some(t);
    }

    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let t1 = (b + root) / a;
    let t2 = (b - root) / a;
    let (hi, lo) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };
    if radius_ok(hi) {
        Some(hi)
    } else if radius_ok(lo) {
        Some(lo)
    } else {
        None
    }
}
