//! Monochrome framebuffer
//!
//! The canvas is stored exactly as the PCD8544 expects it in display RAM:
//! `HEIGHT / 8` horizontal bands of `WIDTH` column bytes. Within a column
//! byte, bit `i` is row `i` of the band.
//!
//! ```text
//! byte index = (y / 8) * WIDTH + x
//! bit index  = y % 8
//! ```

use crate::backend::DisplayError;

/// Canvas width in pixels
pub const WIDTH: usize = 84;

/// Canvas height in pixels
pub const HEIGHT: usize = 48;

/// Number of 8-row bands
pub const BANDS: usize = HEIGHT / 8;

/// Framebuffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * BANDS;

/// Rectangle drawing style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fill {
    /// 1px outline
    Outline,
    /// Every pixel inside the rectangle
    Solid,
}

/// Band-organized monochrome canvas
#[derive(Clone)]
pub struct Framebuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create an empty canvas
    pub const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Zero every pixel
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Raw canvas bytes in display RAM order
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Read a single pixel
    ///
    /// Out-of-canvas coordinates read as unset.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if !in_bounds(x, y) {
            return false;
        }
        self.bytes[byte_index(x, y)] & bit_mask(y) != 0
    }

    /// Draw a rectangle from top-left `(x1, y1)` to bottom-right `(x2, y2)`
    ///
    /// Drawing is additive: bits are only ever set, never cleared. All four
    /// coordinates are checked before any pixel is touched, so a rejected
    /// call leaves the canvas unchanged. An inverted range (`x1 > x2` or
    /// `y1 > y2`) covers no pixels and succeeds.
    pub fn draw_rect(
        &mut self,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        fill: Fill,
    ) -> Result<(), DisplayError> {
        if !in_bounds(x1, y1) || !in_bounds(x2, y2) {
            warn!("draw_rect: ({}, {})-({}, {}) out of bounds", x1, y1, x2, y2);
            return Err(DisplayError::InvalidCoordinates);
        }

        for x in x1..=x2 {
            let edge = x == x1 || x == x2;
            if fill == Fill::Solid || edge {
                self.set_column(x, y1, y2);
            } else if y1 <= y2 {
                self.bytes[byte_index(x, y1)] |= bit_mask(y1);
                self.bytes[byte_index(x, y2)] |= bit_mask(y2);
            }
        }

        Ok(())
    }

    /// Write an 8x8 bitmap with its top-left corner at `(x, y)`
    ///
    /// The eight column bytes overwrite the band containing `y`, starting at
    /// column `x`; `y` is not shifted within the band. Columns that would land
    /// past the end of the canvas are silently skipped, and columns past the
    /// right edge continue into the next band.
    pub fn draw_bitmap_8x8(&mut self, bitmap: &[u8; 8], x: u8, y: u8) -> Result<(), DisplayError> {
        if !in_bounds(x, y) {
            warn!("draw_bitmap_8x8: ({}, {}) out of bounds", x, y);
            return Err(DisplayError::InvalidCoordinates);
        }

        let start = (y as usize / 8) * WIDTH + x as usize;
        for (i, &column) in bitmap.iter().enumerate() {
            match self.bytes.get_mut(start + i) {
                Some(byte) => *byte = column,
                None => break,
            }
        }

        Ok(())
    }

    /// Zero one 8-row band
    pub fn clear_line(&mut self, line: u8) -> Result<(), DisplayError> {
        if line as usize >= BANDS {
            warn!("clear_line: line {} past final band", line);
            return Err(DisplayError::InvalidLine);
        }

        let start = line as usize * WIDTH;
        self.bytes[start..start + WIDTH].fill(0);
        Ok(())
    }

    /// Copy raw column bytes into the canvas at a byte offset
    ///
    /// The whole run must fit; nothing is written otherwise.
    pub fn blit(&mut self, offset: usize, data: &[u8]) -> Result<(), DisplayError> {
        let Some(end) = offset
            .checked_add(data.len())
            .filter(|&end| end <= BUFFER_SIZE)
        else {
            warn!("blit: {} bytes at {} past end of canvas", data.len(), offset);
            return Err(DisplayError::InvalidCoordinates);
        };
        self.bytes[offset..end].copy_from_slice(data);
        Ok(())
    }

    fn set_column(&mut self, x: u8, y1: u8, y2: u8) {
        for y in y1..=y2 {
            self.bytes[byte_index(x, y)] |= bit_mask(y);
        }
    }
}

fn in_bounds(x: u8, y: u8) -> bool {
    (x as usize) < WIDTH && (y as usize) < HEIGHT
}

fn byte_index(x: u8, y: u8) -> usize {
    (y as usize / 8) * WIDTH + x as usize
}

fn bit_mask(y: u8) -> u8 {
    1 << (y % 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_pixels(fb: &Framebuffer) -> usize {
        fb.as_bytes().iter().map(|b| b.count_ones() as usize).sum()
    }

    #[test]
    fn test_buffer_geometry() {
        assert_eq!(BANDS, 6);
        assert_eq!(BUFFER_SIZE, 504);
        assert_eq!(byte_index(0, 8), 84);
        assert_eq!(byte_index(83, 47), 503);
        assert_eq!(bit_mask(13), 1 << 5);
    }

    #[test]
    fn test_header_underline() {
        let mut fb = Framebuffer::new();
        fb.draw_rect(0, 9, 83, 9, Fill::Solid).unwrap();

        for x in 0..WIDTH as u8 {
            assert!(fb.pixel(x, 9));
        }
        assert_eq!(set_pixels(&fb), WIDTH);
        assert_eq!(fb.as_bytes()[WIDTH], 0b0000_0010);
    }

    #[test]
    fn test_outline_sets_only_perimeter() {
        let mut fb = Framebuffer::new();
        fb.draw_rect(2, 3, 6, 12, Fill::Outline).unwrap();

        // 2 full columns of 10 + 3 interior columns with top and bottom bits
        assert_eq!(set_pixels(&fb), 2 * 10 + 3 * 2);
        assert!(fb.pixel(2, 7));
        assert!(fb.pixel(6, 12));
        assert!(fb.pixel(4, 3));
        assert!(fb.pixel(4, 12));
        assert!(!fb.pixel(4, 7));
        assert!(!fb.pixel(1, 3));
        assert!(!fb.pixel(7, 3));
    }

    #[test]
    fn test_drawing_is_additive() {
        let mut fb = Framebuffer::new();
        fb.draw_rect(0, 0, 83, 47, Fill::Solid).unwrap();
        fb.draw_rect(10, 10, 20, 20, Fill::Outline).unwrap();
        assert_eq!(set_pixels(&fb), WIDTH * HEIGHT);
    }

    #[test]
    fn test_rect_out_of_bounds_touches_nothing() {
        let mut fb = Framebuffer::new();
        assert_eq!(
            fb.draw_rect(0, 0, 84, 10, Fill::Solid),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            fb.draw_rect(0, 0, 10, 48, Fill::Outline),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(set_pixels(&fb), 0);
    }

    #[test]
    fn test_inverted_rect_draws_nothing() {
        let mut fb = Framebuffer::new();
        assert!(fb.draw_rect(2, 26, 0, 29, Fill::Solid).is_ok());
        assert_eq!(set_pixels(&fb), 0);
    }

    #[test]
    fn test_bitmap_overwrites_band() {
        let mut fb = Framebuffer::new();
        fb.draw_rect(0, 8, 20, 15, Fill::Solid).unwrap();
        let bitmap = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];

        // y = 13 still targets band 1 without a vertical shift
        fb.draw_bitmap_8x8(&bitmap, 4, 13).unwrap();
        assert_eq!(&fb.as_bytes()[WIDTH + 4..WIDTH + 12], &bitmap);
        assert_eq!(fb.as_bytes()[WIDTH + 3], 0xff);
    }

    #[test]
    fn test_bitmap_at_canvas_end_is_truncated() {
        let mut fb = Framebuffer::new();
        let bitmap = [0xff; 8];
        assert!(fb.draw_bitmap_8x8(&bitmap, 80, 40).is_ok());

        // Only columns 80..84 of the last band fit
        assert_eq!(set_pixels(&fb), 4 * 8);
        assert_eq!(&fb.as_bytes()[BUFFER_SIZE - 4..], &[0xff; 4]);
    }

    #[test]
    fn test_bitmap_wraps_into_next_band() {
        let mut fb = Framebuffer::new();
        fb.draw_bitmap_8x8(&[0xff; 8], 80, 0).unwrap();
        assert!(fb.pixel(83, 0));
        assert!(fb.pixel(0, 8));
        assert!(fb.pixel(3, 15));
        assert!(!fb.pixel(4, 8));
    }

    #[test]
    fn test_bitmap_out_of_bounds_rejected() {
        let mut fb = Framebuffer::new();
        assert_eq!(
            fb.draw_bitmap_8x8(&[0xff; 8], 84, 0),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(set_pixels(&fb), 0);
    }

    #[test]
    fn test_clear_line() {
        let mut fb = Framebuffer::new();
        fb.draw_rect(0, 0, 83, 47, Fill::Solid).unwrap();
        fb.clear_line(2).unwrap();

        assert!(fb.pixel(0, 15));
        assert!(!fb.pixel(0, 16));
        assert!(!fb.pixel(83, 23));
        assert!(fb.pixel(0, 24));
        assert_eq!(fb.clear_line(6), Err(DisplayError::InvalidLine));
    }

    #[test]
    fn test_blit_bounds() {
        let mut fb = Framebuffer::new();
        assert!(fb.blit(BUFFER_SIZE - 2, &[1, 2]).is_ok());
        assert_eq!(
            fb.blit(BUFFER_SIZE - 1, &[1, 2]),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(fb.as_bytes()[BUFFER_SIZE - 2..], [1, 2]);
    }

    #[test]
    fn test_blit_rejection_writes_nothing() {
        let mut fb = Framebuffer::new();
        assert_eq!(
            fb.blit(BUFFER_SIZE - 3, &[0xFF; 4]),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            fb.blit(usize::MAX, &[0xFF]),
            Err(DisplayError::InvalidCoordinates)
        );
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }
}
