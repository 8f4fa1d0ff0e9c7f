//! Boot splash artwork
//!
//! Three 33-column strips placed in consecutive bands, centred horizontally
//! (offset 25 within each band).

/// Width of each splash strip in columns
pub const SPLASH_WIDTH: usize = 33;

/// Decorative leaf tips sitting on top of the lettering (band 1)
const HEADING: [u8; SPLASH_WIDTH] = [
    0xc0, 0xe0, 0xc0, 0xf0, 0xc0, 0xe0, 0xf0, 0xc0, 0x80, 0xe0, 0x80, 0xf0, 0xc0, 0xc0, 0xe0,
    0xc0, 0xf0, 0xe0, 0xc0, 0xe0, 0xc0, 0xf8, 0xc0, 0xe0, 0xf0, 0xc0, 0xf0, 0xe0, 0xc0, 0xf0,
    0xe0, 0xc0, 0xe0,
];

/// Upper half of the framed lettering (band 2)
const LETTERS_TOP: [u8; SPLASH_WIDTH] = [
    0xff, 0x00, 0xfc, 0x80, 0x80, 0x80, 0xfc, 0x00, 0xfc, 0x04, 0x04, 0x04, 0xfc, 0x00, 0xfc,
    0x04, 0x04, 0x04, 0x1c, 0x00, 0xfc, 0x00, 0x00, 0x00, 0xfc, 0x00, 0xfc, 0x84, 0x84, 0x84,
    0x04, 0x00, 0xff,
];

/// Lower half of the framed lettering (band 3)
const LETTERS_BOTTOM: [u8; SPLASH_WIDTH] = [
    0xff, 0x80, 0xbf, 0x80, 0x80, 0x80, 0xbf, 0x80, 0xbf, 0xa0, 0xa0, 0xa0, 0xbf, 0x80, 0xbf,
    0xa0, 0xa1, 0xa1, 0xbf, 0x80, 0xbf, 0xa0, 0xa0, 0xa0, 0xbf, 0x80, 0xbf, 0xa0, 0xa0, 0xa0,
    0xa0, 0x80, 0xff,
];

/// Framebuffer byte offset and column data for each strip
pub const SPLASH_STRIPS: [(usize, &[u8; SPLASH_WIDTH]); 3] = [
    (109, &HEADING),
    (193, &LETTERS_TOP),
    (277, &LETTERS_BOTTOM),
];
