//! Glyph advance widths of the two standard PDF fonts the document uses.
//!
//! Widths are in thousandths of the font size, as published in the Adobe
//! core font metrics for Helvetica and Helvetica-Bold.

use super::document::FontStyle;

/// Printable ASCII `' '..='~'`.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

const BULLET_WIDTH: u16 = 350;
/// Upper bound for every other glyph the WinAnsi fonts can draw
const WIDEST_GLYPH: u16 = 1000;

/// Advance width of one character in thousandths of the font size.
pub fn char_units(c: char, font: FontStyle) -> u16 {
    let table = match font {
        FontStyle::Regular => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    };
    match c {
        ' '..='~' => table[c as usize - ' ' as usize],
        '\u{2022}' => BULLET_WIDTH,
        _ => WIDEST_GLYPH,
    }
}

/// Width of a character in points at the given font size.
pub fn char_width(c: char, font: FontStyle, size: i64) -> f64 {
    f64::from(char_units(c, font)) * size as f64 / 1000.0
}

/// Width of a string in points at the given font size.
pub fn text_width(text: &str, font: FontStyle, size: i64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_units(c, font))).sum();
    f64::from(units) * size as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(char_units(' ', FontStyle::Regular), 278);
        assert_eq!(char_units('W', FontStyle::Regular), 944);
        assert_eq!(char_units('i', FontStyle::Regular), 222);
        assert_eq!(char_units('i', FontStyle::Bold), 278);
        assert_eq!(char_units('~', FontStyle::Bold), 584);
        assert_eq!(char_units('\u{2022}', FontStyle::Regular), 350);
        assert_eq!(char_units('é', FontStyle::Regular), 1000);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        // 'W' + 'i' = 1166 units
        assert!((text_width("Wi", FontStyle::Regular, 10) - 11.66).abs() < 1e-9);
        assert!((text_width("Wi", FontStyle::Regular, 20) - 23.32).abs() < 1e-9);
        assert_eq!(text_width("", FontStyle::Bold, 11), 0.0);
    }
}
