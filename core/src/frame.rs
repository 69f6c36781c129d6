use std::fmt;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Frame Buffer
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// Pixels are stored row-major and indexed as `[y][x]`.
///
/// Sprites are XORed onto the buffer so drawing the same sprite twice erases it.
/// Coordinates wrap around the edges of the display, pixel by pixel.
#[derive(Copy, Clone, PartialEq)]
pub struct FrameBuffer {
    pixels: [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// The state of the pixel at `x`, `y` or None if it isn't on the display
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Rows of pixels from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool; DISPLAY_WIDTH]> {
        self.pixels.iter()
    }

    /// Whether any pixel is on
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().flatten().all(|pixel| !pixel)
    }

    /// XORs a sprite onto the buffer with its top-left corner at `x`, `y`.
    ///
    /// Each byte of `sprite` is one 8 pixel row, most significant bit on the left.
    /// Returns true if any pixel that was on got turned off.
    ///
    /// # Arguments
    /// * `x` the column of the sprite's left edge; wraps modulo 64
    /// * `y` the row of the sprite's top edge; wraps modulo 32
    /// * `sprite` the rows of the sprite
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in sprite.iter().enumerate() {
            let py = (y + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                if (byte >> (7 - bit)) & 1 == 0 {
                    continue;
                }
                let px = (x + bit) % DISPLAY_WIDTH;
                let pixel = &mut self.pixels[py][px];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }
        collision
    }

    /// Set a single pixel; used to build expected frames
    #[cfg(test)]
    pub(crate) fn set(&mut self, x: usize, y: usize, on: bool) {
        self.pixels[y][x] = on;
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders as text, one line per row, `#` for pixels that are on
impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|&on| if on { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "FrameBuffer")?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The "0" glyph
    const ZERO: [u8; 5] = [0xF0, 0x90, 0x90, 0x90, 0xF0];

    #[test]
    fn test_new_is_blank() {
        assert!(FrameBuffer::new().is_blank());
    }

    #[test]
    fn test_draws_msb_first() {
        let mut frame = FrameBuffer::new();
        let collision = frame.draw_sprite(1, 1, &ZERO);
        assert!(!collision);

        let mut expected = FrameBuffer::new();
        for x in 1..5 {
            expected.set(x, 1, true);
            expected.set(x, 5, true);
        }
        for y in 2..5 {
            expected.set(1, y, true);
            expected.set(4, y, true);
        }
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_xors_onto_existing_pixels() {
        let mut frame = FrameBuffer::new();
        // 0 1 0 1 -> Set
        frame.set(3, 0, true);
        frame.set(5, 0, true);
        // 1 1 0 0 -> Draw xor
        frame.draw_sprite(2, 0, &[0b1100_0000]);
        let row: Vec<bool> = (2..6).map(|x| frame.get(x, 0).unwrap()).collect();
        assert_eq!(row, vec![true, false, false, true]);
    }

    #[test]
    fn test_reports_collision() {
        let mut frame = FrameBuffer::new();
        frame.set(0, 0, true);
        assert!(frame.draw_sprite(0, 0, &[0x80]));
        assert_eq!(frame.get(0, 0), Some(false));
    }

    #[test]
    fn test_collision_is_or_of_all_rows() {
        let mut frame = FrameBuffer::new();
        // only the first row collides, later rows don't reset it
        frame.set(0, 0, true);
        assert!(frame.draw_sprite(0, 0, &[0x80, 0x80, 0x80]));
    }

    #[test]
    fn test_drawing_twice_erases() {
        let mut frame = FrameBuffer::new();
        frame.set(10, 10, true);
        let before = frame;
        frame.draw_sprite(8, 8, &ZERO);
        assert!(frame.draw_sprite(8, 8, &ZERO));
        assert_eq!(frame, before);
    }

    #[test]
    fn test_wraps_around_edges() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(62, 31, &[0xF0, 0xF0]);
        // bottom right corner
        assert_eq!(frame.get(62, 31), Some(true));
        assert_eq!(frame.get(63, 31), Some(true));
        // wrapped horizontally
        assert_eq!(frame.get(0, 31), Some(true));
        assert_eq!(frame.get(1, 31), Some(true));
        // wrapped vertically and horizontally
        assert_eq!(frame.get(62, 0), Some(true));
        assert_eq!(frame.get(1, 0), Some(true));
        assert_eq!(frame.get(2, 0), Some(false));
    }

    #[test]
    fn test_wraps_large_origins() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(64 + 3, 32 + 2, &[0x80]);
        assert_eq!(frame.get(3, 2), Some(true));
    }

    #[test]
    fn test_get_out_of_range() {
        let frame = FrameBuffer::new();
        assert_eq!(frame.get(64, 0), None);
        assert_eq!(frame.get(0, 32), None);
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &ZERO);
        frame.clear();
        assert!(frame.is_blank());
    }

    #[test]
    fn test_renders_as_text() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &[0xA0]);
        let text = frame.to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("#.#."));
        assert_eq!(first.len(), 64);
        assert_eq!(text.lines().count(), 32);
    }
}
