//! 8x8 glyph table
//!
//! Covers printable ASCII 32 (space) through 90 ('Z'). Each glyph is eight
//! column bytes, left to right, with bit 0 as the top pixel, which matches
//! the framebuffer band layout so glyphs blit without transposition.
//! Lowercase letters and the punctuation above 'Z' have no glyph.

/// First character code with a glyph
pub const FIRST_GLYPH: u8 = b' ';

/// Last character code with a glyph
pub const LAST_GLYPH: u8 = b'Z';

/// Glyph bitmaps indexed by `code - FIRST_GLYPH`
pub const FONT_8X8: [[u8; 8]; (LAST_GLYPH - FIRST_GLYPH + 1) as usize] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 32 ' '
    [0x00, 0x00, 0x00, 0xde, 0xde, 0x00, 0x00, 0x00], // 33 '!'
    [0x00, 0x00, 0x0e, 0x00, 0x00, 0x0e, 0x00, 0x00], // 34 '"'
    [0x00, 0x24, 0x7e, 0x24, 0x24, 0x7e, 0x24, 0x00], // 35 '#'
    [0x00, 0x00, 0x58, 0x54, 0xfe, 0x54, 0x34, 0x00], // 36 '$'
    [0x00, 0xc6, 0x66, 0x30, 0x18, 0xcc, 0xc6, 0x00], // 37 '%'
    [0x00, 0x6c, 0x92, 0x92, 0xba, 0x44, 0xa0, 0x00], // 38 '&'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0e, 0x00, 0x00], // 39 '''
    [0x00, 0x00, 0x00, 0x7c, 0xc6, 0x82, 0x00, 0x00], // 40 '('
    [0x00, 0x00, 0x82, 0xc6, 0x7c, 0x00, 0x00, 0x00], // 41 ')'
    [0x24, 0x3c, 0x18, 0x7e, 0x7e, 0x18, 0x3c, 0x24], // 42 '*'
    [0x00, 0x18, 0x18, 0x7e, 0x7e, 0x18, 0x18, 0x00], // 43 '+'
    [0x00, 0x00, 0x80, 0xe0, 0x60, 0x00, 0x00, 0x00], // 44 ','
    [0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // 45 '-'
    [0x00, 0x00, 0x00, 0xc0, 0xc0, 0x00, 0x00, 0x00], // 46 '.'
    [0x00, 0xc0, 0x60, 0x30, 0x18, 0x0c, 0x06, 0x00], // 47 '/'
    [0x00, 0x7c, 0xfe, 0xb2, 0x9a, 0xfe, 0x7c, 0x00], // 48 '0'
    [0x00, 0x80, 0x84, 0xfe, 0xfe, 0x80, 0x80, 0x00], // 49 '1'
    [0x00, 0x84, 0xc6, 0xe2, 0xb2, 0x9e, 0x8c, 0x00], // 50 '2'
    [0x00, 0x44, 0xc6, 0x92, 0x92, 0xfe, 0x6c, 0x00], // 51 '3'
    [0x00, 0x30, 0x38, 0x2c, 0xfe, 0xfe, 0x20, 0x00], // 52 '4'
    [0x00, 0x4e, 0xce, 0x8a, 0x8a, 0xfa, 0x72, 0x00], // 53 '5'
    [0x00, 0x78, 0xfc, 0x96, 0x92, 0xf2, 0x60, 0x00], // 54 '6'
    [0x00, 0x02, 0xe2, 0xf2, 0x1a, 0x0e, 0x06, 0x00], // 55 '7'
    [0x00, 0x6c, 0xfe, 0x92, 0x92, 0xfe, 0x6c, 0x00], // 56 '8'
    [0x00, 0x0c, 0x9e, 0x92, 0xd2, 0x7e, 0x3c, 0x00], // 57 '9'
    [0x00, 0x00, 0x00, 0x6c, 0x6c, 0x00, 0x00, 0x00], // 58 ':'
    [0x00, 0x00, 0x80, 0xec, 0x6c, 0x00, 0x00, 0x00], // 59 ';'
    [0x00, 0x10, 0x10, 0x28, 0x28, 0x44, 0x44, 0x00], // 60 '<'
    [0x00, 0x28, 0x28, 0x28, 0x28, 0x28, 0x28, 0x00], // 61 '='
    [0x00, 0x44, 0x44, 0x28, 0x28, 0x10, 0x10, 0x00], // 62 '>'
    [0x00, 0x04, 0x06, 0x52, 0x52, 0x0e, 0x0c, 0x00], // 63 '?'
    [0x00, 0x38, 0x44, 0xb2, 0xaa, 0xba, 0x24, 0x18], // 64 '@'
    [0x00, 0xfc, 0xfe, 0x12, 0x12, 0xfe, 0xfc, 0x00], // 65 'A'
    [0x00, 0xfe, 0xfe, 0x92, 0x92, 0xfe, 0x6c, 0x00], // 66 'B'
    [0x00, 0x7c, 0xfe, 0x82, 0x82, 0xc6, 0x44, 0x00], // 67 'C'
    [0x00, 0xfe, 0xfe, 0x82, 0xc6, 0x7c, 0x38, 0x00], // 68 'D'
    [0x00, 0xfe, 0xfe, 0x92, 0x92, 0x92, 0x82, 0x00], // 69 'E'
    [0x00, 0xfe, 0xfe, 0x12, 0x12, 0x12, 0x02, 0x00], // 70 'F'
    [0x00, 0x7c, 0xfe, 0x82, 0x92, 0xf6, 0x64, 0x00], // 71 'G'
    [0x00, 0xfe, 0xfe, 0x10, 0x10, 0xfe, 0xfe, 0x00], // 72 'H'
    [0x00, 0x82, 0x82, 0xfe, 0xfe, 0x82, 0x82, 0x00], // 73 'I'
    [0x00, 0x40, 0xc2, 0x82, 0xfe, 0x7e, 0x02, 0x00], // 74 'J'
    [0x00, 0xfe, 0xfe, 0x38, 0x6c, 0xc6, 0x82, 0x00], // 75 'K'
    [0x00, 0xfe, 0xfe, 0x80, 0x80, 0x80, 0x80, 0x00], // 76 'L'
    [0x00, 0xfe, 0xfe, 0x0c, 0x38, 0x0c, 0xfe, 0xfe], // 77 'M'
    [0x00, 0xfe, 0xfe, 0x18, 0x30, 0xfe, 0xfe, 0x00], // 78 'N'
    [0x00, 0x7c, 0xfe, 0x82, 0x82, 0xfe, 0x7c, 0x00], // 79 'O'
    [0x00, 0xfe, 0xfe, 0x12, 0x12, 0x1e, 0x0c, 0x00], // 80 'P'
    [0x00, 0x7c, 0xfe, 0x82, 0x62, 0xde, 0xbc, 0x00], // 81 'Q'
    [0x00, 0xfe, 0xfe, 0x12, 0x32, 0xfe, 0xcc, 0x00], // 82 'R'
    [0x00, 0x4c, 0xde, 0x92, 0x92, 0xf6, 0x64, 0x00], // 83 'S'
    [0x00, 0x02, 0x02, 0xfe, 0xfe, 0x02, 0x02, 0x00], // 84 'T'
    [0x00, 0x7e, 0xfe, 0x80, 0x80, 0xfe, 0x7e, 0x00], // 85 'U'
    [0x00, 0x3e, 0x7e, 0xc0, 0xc0, 0x7e, 0x3e, 0x00], // 86 'V'
    [0x00, 0xfe, 0xfe, 0x60, 0x38, 0x60, 0xfe, 0xfe], // 87 'W'
    [0x00, 0xc6, 0xee, 0x38, 0x38, 0xee, 0xc6, 0x00], // 88 'X'
    [0x00, 0x06, 0x0e, 0xf8, 0xf8, 0x0e, 0x06, 0x00], // 89 'Y'
    [0x00, 0xc2, 0xe2, 0xb2, 0x9a, 0x8e, 0x86, 0x00], // 90 'Z'
];

/// Look up the glyph for a character
///
/// Returns `None` for anything outside the table.
pub fn glyph(ch: char) -> Option<&'static [u8; 8]> {
    let code = u32::from(ch);
    if code < u32::from(FIRST_GLYPH) || code > u32::from(LAST_GLYPH) {
        return None;
    }
    FONT_8X8.get((code - u32::from(FIRST_GLYPH)) as usize)
}
