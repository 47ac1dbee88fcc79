//! Colour helpers
//!
//! Colours are plain `[u8; 4]` RGBA values with straight alpha. Fish
//! descriptors carry CSS-style strings, which [`parse_css_color`] understands.

use crate::error::FishTextureError;

/// Opaque colour from a `0xRRGGBB` literal
#[inline]
pub const fn hex(rgb: u32) -> [u8; 4] {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255]
}

/// Colour from 8-bit channels and a 0.0-1.0 alpha
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> [u8; 4] {
    [r, g, b, (a * 255.0 + 0.5) as u8]
}

/// Linear interpolation between two colors
pub fn lerp_color(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    [
        lerp_u8(a[0], b[0], t),
        lerp_u8(a[1], b[1], t),
        lerp_u8(a[2], b[2], t),
        lerp_u8(a[3], b[3], t),
    ]
}

/// Linear interpolation for u8 values
#[inline]
fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Parse a CSS colour string
///
/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)` where `a` is 0.0-1.0.
pub fn parse_css_color(input: &str) -> Result<[u8; 4], FishTextureError> {
    let s = input.trim();
    let invalid = |reason: &'static str| FishTextureError::InvalidColor {
        input: input.to_string(),
        reason,
    };

    if let Some(digits) = s.strip_prefix('#') {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("non-hex digit"));
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let parsed = match digits.len() {
            3 => [nibble(0), nibble(1), nibble(2), Ok(255)],
            6 => [byte(0), byte(2), byte(4), Ok(255)],
            8 => [byte(0), byte(2), byte(4), byte(6)],
            _ => return Err(invalid("expected 3, 6 or 8 hex digits")),
        };
        let mut out = [0u8; 4];
        for (slot, value) in out.iter_mut().zip(parsed) {
            *slot = value.map_err(|_| invalid("non-hex digit"))?;
        }
        return Ok(out);
    }

    let (body, has_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = s.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return Err(invalid("unknown colour syntax"));
    };
    let body = body.strip_suffix(')').ok_or_else(|| invalid("missing ')'"))?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(invalid("wrong number of components"));
    }

    let mut out = [0u8, 0, 0, 255];
    for (slot, part) in out.iter_mut().zip(&parts[..3]) {
        let v: f32 = part.parse().map_err(|_| invalid("bad channel value"))?;
        *slot = v.round().clamp(0.0, 255.0) as u8;
    }
    if has_alpha {
        let a: f32 = parts[3].parse().map_err(|_| invalid("bad alpha value"))?;
        out[3] = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    Ok(out)
}
