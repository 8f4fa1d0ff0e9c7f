//! Text cursor and glyph rendering
//!
//! The canvas doubles as a 10x6 grid of 8x8 character cells. The cursor
//! wraps column-first: past the last column it moves to the start of the
//! next row, and past the last row it returns to the top.

use crate::backend::{DisplayError, DisplayInterface};
use crate::font;
use crate::pcd8544::Pcd8544;

/// Character columns
pub const TEXT_COLUMNS: u8 = 10;

/// Character rows
pub const TEXT_ROWS: u8 = 6;

/// Cell size in pixels
const CELL_SIZE: u8 = 8;

/// Position on the character grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextCursor {
    col: u8,
    row: u8,
}

impl TextCursor {
    /// Cursor at the top-left cell
    pub const fn origin() -> Self {
        Self { col: 0, row: 0 }
    }

    /// Create a cursor, or `None` if the cell is off the grid
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < TEXT_COLUMNS && row < TEXT_ROWS {
            Some(Self { col, row })
        } else {
            None
        }
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Move one cell forward, wrapping to the next row and then to the top
    pub fn advance(&mut self) {
        if self.col + 1 >= TEXT_COLUMNS {
            self.col = 0;
            self.newline_row();
        } else {
            self.col += 1;
        }
    }

    /// Move to column 0 of the next row, wrapping to the top
    pub fn newline(&mut self) {
        self.col = 0;
        self.newline_row();
    }

    /// Top-left pixel of the current cell
    pub const fn pixel_origin(&self) -> (u8, u8) {
        (self.col * CELL_SIZE, self.row * CELL_SIZE)
    }

    fn newline_row(&mut self) {
        self.row = (self.row + 1) % TEXT_ROWS;
    }
}

/// Text layer over a PCD8544 surface
///
/// Owns the single surface and cursor for the device. Glyphs are drawn
/// into the framebuffer; only the `autoflush` variants push to the panel.
pub struct Renderer<DI> {
    surface: Pcd8544<DI>,
    cursor: TextCursor,
}

impl<DI> Renderer<DI> {
    /// Wrap a surface with the cursor at the origin
    pub fn new(surface: Pcd8544<DI>) -> Self {
        Self {
            surface,
            cursor: TextCursor::origin(),
        }
    }

    /// Move the cursor
    ///
    /// Off-grid positions are rejected and leave the cursor where it was.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        match TextCursor::new(col, row) {
            Some(cursor) => {
                self.cursor = cursor;
                Ok(())
            }
            None => {
                warn!("set_cursor: ({}, {}) out of bounds", col, row);
                Err(DisplayError::InvalidCoordinates)
            }
        }
    }

    /// Current `(column, row)`
    pub fn cursor(&self) -> (u8, u8) {
        (self.cursor.col(), self.cursor.row())
    }

    /// Start of the next line
    pub fn newline(&mut self) {
        self.cursor.newline();
    }

    /// The underlying pixel surface
    pub fn surface(&self) -> &Pcd8544<DI> {
        &self.surface
    }

    /// The underlying pixel surface, for shape drawing
    pub fn surface_mut(&mut self) -> &mut Pcd8544<DI> {
        &mut self.surface
    }

    /// Give back the surface
    pub fn into_surface(self) -> Pcd8544<DI> {
        self.surface
    }

    /// Draw one glyph at the cursor and advance
    ///
    /// `'\n'` moves to the next line. Characters without a glyph leave
    /// their cell blank but still advance the cursor.
    fn put_char(&mut self, ch: char) -> Result<(), DisplayError> {
        if ch == '\n' {
            self.cursor.newline();
            return Ok(());
        }

        let drawn = match font::glyph(ch) {
            Some(glyph) => {
                let (x, y) = self.cursor.pixel_origin();
                self.surface.draw_bitmap_8x8(glyph, x, y)
            }
            None => {
                warn!("print_char: unsupported character {=u32:#x}", ch as u32);
                Ok(())
            }
        };

        self.cursor.advance();
        drawn
    }
}

impl<DI> Renderer<DI>
where
    DI: DisplayInterface,
{
    /// Print one character, optionally pushing the canvas afterwards
    pub async fn print_char(&mut self, ch: char, autoflush: bool) -> Result<(), DisplayError> {
        self.put_char(ch)?;
        if autoflush {
            self.surface.flush().await?;
        }
        Ok(())
    }

    /// Print a string, optionally pushing the canvas once at the end
    ///
    /// Returns the number of characters processed.
    pub async fn print_str(&mut self, text: &str, autoflush: bool) -> Result<usize, DisplayError> {
        let mut count = 0;
        for ch in text.chars() {
            self.put_char(ch)?;
            count += 1;
        }

        if autoflush {
            self.surface.flush().await?;
        }
        Ok(count)
    }

    /// Clear the panel (cursor unchanged)
    pub async fn clear(&mut self) -> Result<(), DisplayError> {
        self.surface.clear().await
    }

    /// Push the canvas
    pub async fn flush(&mut self) -> Result<(), DisplayError> {
        self.surface.flush().await
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::framebuffer::WIDTH;
    use crate::pcd8544::testing::FakeInterface;
    use crate::pcd8544::DEFAULT_OPERATING_VOLTAGE;

    fn renderer() -> Renderer<FakeInterface> {
        Renderer::new(Pcd8544::new(
            FakeInterface::default(),
            DEFAULT_OPERATING_VOLTAGE,
        ))
    }

    #[test]
    fn test_cursor_bounds() {
        let mut r = renderer();
        assert!(r.set_cursor(9, 5).is_ok());
        assert_eq!(r.cursor(), (9, 5));

        assert_eq!(r.set_cursor(10, 0), Err(DisplayError::InvalidCoordinates));
        assert_eq!(r.set_cursor(0, 6), Err(DisplayError::InvalidCoordinates));
        assert_eq!(r.cursor(), (9, 5));
    }

    #[test]
    fn test_advance_wraps_rows_and_screen() {
        let mut cursor = TextCursor::new(9, 2).unwrap();
        cursor.advance();
        assert_eq!((cursor.col(), cursor.row()), (0, 3));

        let mut cursor = TextCursor::new(9, 5).unwrap();
        cursor.advance();
        assert_eq!((cursor.col(), cursor.row()), (0, 0));
    }

    #[test]
    fn test_newline_wraps_from_last_row() {
        let mut r = renderer();
        r.set_cursor(4, 5).unwrap();
        r.newline();
        assert_eq!(r.cursor(), (0, 0));

        r.set_cursor(7, 1).unwrap();
        r.newline();
        assert_eq!(r.cursor(), (0, 2));
    }

    #[test]
    fn test_ten_chars_fill_a_row() {
        for row in 0..TEXT_ROWS {
            let mut r = renderer();
            r.set_cursor(0, row).unwrap();
            let count = block_on(r.print_str("ABCDEFGHIJ", false)).unwrap();
            assert_eq!(count, 10);

            let expected_row = if row < 5 { row + 1 } else { 0 };
            assert_eq!(r.cursor(), (0, expected_row));
        }
    }

    #[test]
    fn test_print_char_draws_glyph_in_cell() {
        let mut r = renderer();
        r.set_cursor(2, 1).unwrap();
        block_on(r.print_char('A', false)).unwrap();

        let start = WIDTH + 16;
        let bytes = r.surface().framebuffer().as_bytes();
        assert_eq!(&bytes[start..start + 8], font::glyph('A').unwrap());
        assert_eq!(r.cursor(), (3, 1));
        assert_eq!(r.surface().interface().frames_pushed, 0);
    }

    #[test]
    fn test_unsupported_char_leaves_blank_cell() {
        let mut r = renderer();
        let count = block_on(r.print_str("a!", false)).unwrap();
        assert_eq!(count, 2);
        assert_eq!(r.cursor(), (2, 0));

        let bytes = r.surface().framebuffer().as_bytes();
        assert!(bytes[..8].iter().all(|&b| b == 0));
        assert_eq!(&bytes[8..16], font::glyph('!').unwrap());
    }

    #[test]
    fn test_newline_character() {
        let mut r = renderer();
        block_on(r.print_str("AB\nC", false)).unwrap();
        assert_eq!(r.cursor(), (1, 1));
    }

    #[test]
    fn test_print_str_flushes_once() {
        let mut r = renderer();
        block_on(r.print_str("LOADING...", true)).unwrap();
        assert_eq!(r.surface().interface().frames_pushed, 1);

        block_on(r.print_char('X', true)).unwrap();
        assert_eq!(r.surface().interface().frames_pushed, 2);
    }
}
