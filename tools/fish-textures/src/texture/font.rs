//! 5x7 bitmap font for sprite labels
//!
//! Glyph rows are 5 bits wide with the most significant bit on the left.
//! Only the characters labels use are present: space, `!`, `-`, `.`, digits
//! and A-Z (lowercase maps to uppercase).

/// Lit columns per glyph row
pub const GLYPH_COLUMNS: u32 = 5;
/// Rows per glyph
pub const GLYPH_ROWS: u32 = 7;
/// Horizontal advance in font pixels (glyph plus one column of spacing)
const ADVANCE: u32 = GLYPH_COLUMNS + 1;

#[rustfmt::skip]
const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111], // 2
    [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

#[rustfmt::skip]
const LETTERS: [[u8; 7]; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

/// Bitmap rows for `ch`, or `None` when the font has no glyph for it
pub fn glyph(ch: char) -> Option<[u8; 7]> {
    match ch {
        ' ' => Some([0; 7]),
        '!' => Some([0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
        '-' => Some([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
        '.' => Some([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100]),
        '0'..='9' => Some(DIGITS[(ch as u8 - b'0') as usize]),
        'A'..='Z' => Some(LETTERS[(ch as u8 - b'A') as usize]),
        'a'..='z' => Some(LETTERS[(ch as u8 - b'a') as usize]),
        _ => None,
    }
}

/// Characters of `text` the font can draw, with surrounding whitespace trimmed
///
/// Emoji and other symbols without a glyph are dropped before layout so that
/// centred labels stay centred on the visible text.
pub(crate) fn printable(text: &str) -> String {
    let kept: String = text.chars().filter(|&c| glyph(c).is_some()).collect();
    kept.trim().to_string()
}

/// Rendered width in pixels of `text` at integer `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = printable(text).chars().count() as u32;
    if count == 0 {
        return 0;
    }
    (count * ADVANCE - 1) * scale
}

/// Visit every lit font pixel of `text`, laid out left to right from the
/// origin, as `(column, row)` in font pixels
pub(crate) fn for_each_lit(text: &str, mut visit: impl FnMut(u32, u32)) {
    for (index, ch) in printable(text).chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let base_x = index as u32 * ADVANCE;
        for (py, &row_bits) in rows.iter().enumerate() {
            for px in 0..GLYPH_COLUMNS {
                if (row_bits >> (GLYPH_COLUMNS - 1 - px)) & 1 == 1 {
                    visit(base_x + px, py as u32);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(glyph(' '), Some([0; 7]));
        assert_eq!(glyph('a'), glyph('A'));
        assert!(glyph('Z').is_some());
        assert!(glyph('7').is_some());
        assert!(glyph('🐟').is_none());
    }

    #[test]
    fn test_printable_drops_emoji() {
        assert_eq!(printable("✨ GOLDEN"), "GOLDEN");
        assert_eq!(printable("🌟 MYTHIC KOI"), "MYTHIC KOI");
        assert_eq!(printable("🐉"), "");
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("KOI", 2), (3 * 6 - 1) * 2);
        assert_eq!(text_width("✨ KOI", 2), text_width("KOI", 2));
    }

    #[test]
    fn test_letter_l_shape() {
        let mut lit = Vec::new();
        for_each_lit("L", |x, y| lit.push((x, y)));
        // Left column is fully lit, bottom row spans all five columns
        for row in 0..GLYPH_ROWS {
            assert!(lit.contains(&(0, row)));
        }
        for col in 0..GLYPH_COLUMNS {
            assert!(lit.contains(&(col, GLYPH_ROWS - 1)));
        }
        assert_eq!(lit.len(), 11);
    }
}
