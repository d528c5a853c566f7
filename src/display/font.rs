/// Height (in pixels) of a glyph.
pub const GLYPH_HEIGHT: usize = 5;
/// Width (in pixels) of a glyph.
pub const GLYPH_WIDTH: usize = 4;
/// Horizontal distance between the left edges of two neighbouring glyphs.
pub const GLYPH_ADVANCE: usize = GLYPH_WIDTH + 1;

type Glyph = [u8; GLYPH_HEIGHT];

/// Raw data for the 4x5 digit atlas.
///
/// One byte per row, the high nibble holds the pixels from left to right.
#[rustfmt::skip]
static DIGIT_ATLAS: [Glyph; 10] = [
    [0xF0, 0x90, 0x90, 0x90, 0xF0], // 0
    [0x20, 0x60, 0x20, 0x20, 0x70], // 1
    [0xF0, 0x10, 0xF0, 0x80, 0xF0], // 2
    [0xF0, 0x10, 0xF0, 0x10, 0xF0], // 3
    [0x90, 0x90, 0xF0, 0x10, 0x10], // 4
    [0xF0, 0x80, 0xF0, 0x10, 0xF0], // 5
    [0xF0, 0x80, 0xF0, 0x90, 0xF0], // 6
    [0xF0, 0x10, 0x20, 0x40, 0x40], // 7
    [0xF0, 0x90, 0xF0, 0x90, 0xF0], // 8
    [0xF0, 0x90, 0xF0, 0x10, 0xF0], // 9
];

/// The letters used by the control labels.
#[rustfmt::skip]
static LETTER_ATLAS: [(char, Glyph); 9] = [
    ('A', [0x60, 0x90, 0xF0, 0x90, 0x90]),
    ('E', [0xF0, 0x80, 0xE0, 0x80, 0xF0]),
    ('M', [0x90, 0xF0, 0xF0, 0x90, 0x90]),
    ('O', [0x60, 0x90, 0x90, 0x90, 0x60]),
    ('P', [0xE0, 0x90, 0xE0, 0x80, 0x80]),
    ('R', [0xE0, 0x90, 0xE0, 0xA0, 0x90]),
    ('S', [0x70, 0x80, 0x60, 0x10, 0xE0]),
    ('T', [0xE0, 0x40, 0x40, 0x40, 0x40]),
    ('U', [0x90, 0x90, 0x90, 0x90, 0x60]),
];

static COLON: Glyph = [0x00, 0x40, 0x00, 0x40, 0x00];
static BLANK: Glyph = [0x00; GLYPH_HEIGHT];

/// Look up the glyph for a character.
///
/// Characters without a glyph render blank.
pub fn glyph(c: char) -> &'static Glyph {
    if let Some(digit) = c.to_digit(10) {
        return &DIGIT_ATLAS[digit as usize];
    }

    match c {
        ':' => &COLON,
        _ => LETTER_ATLAS
            .iter()
            .find(|(letter, _)| *letter == c.to_ascii_uppercase())
            .map(|(_, glyph)| glyph)
            .unwrap_or(&BLANK),
    }
}

/// The width (in pixels) of a line of text.
pub fn text_width(text: &str) -> usize {
    (text.chars().count() * GLYPH_ADVANCE).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_glyphs() {
        assert_eq!(glyph('0'), &[0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert_eq!(glyph('7'), &[0xF0, 0x10, 0x20, 0x40, 0x40]);
    }

    #[test]
    fn test_label_glyphs() {
        for label in ["START", "STOP", "RESUME", "RESET"] {
            for c in label.chars() {
                assert_ne!(glyph(c), &BLANK, "missing glyph for {c}");
            }
        }
        assert_eq!(glyph('s'), glyph('S'));
    }

    #[test]
    fn test_unknown_glyph() {
        assert_eq!(glyph('?'), &BLANK);
        assert_eq!(glyph(' '), &BLANK);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("0"), 4);
        assert_eq!(text_width("00:00:00"), 39);
    }
}
