//! Built-in 5x7 bitmap font
//!
//! Always available, so label rendering never depends on what is installed.
//! Covers `A-Z`, `0-9` and space; lowercase is drawn as uppercase and
//! anything else as a hollow box.

use image::{Rgb, RgbImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between glyphs
const SPACING: u32 = 1;

/// Rows top to bottom, bit 4 is the leftmost column
type Glyph = [u8; GLYPH_HEIGHT as usize];

const MISSING: Glyph = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];
const SPACE: Glyph = [0; GLYPH_HEIGHT as usize];

const LETTERS: [Glyph; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        ' ' => &SPACE,
        c @ 'A'..='Z' => &LETTERS[(c as u8 - b'A') as usize],
        c @ '0'..='9' => &DIGITS[(c as u8 - b'0') as usize],
        _ => &MISSING,
    }
}

/// Bitmap font drawn with square pixel blocks of `scale` pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    pub scale: u32,
}

impl BitmapFont {
    /// Nearest integer block size for a requested em size
    pub fn for_em(em_px: u32) -> Self {
        Self {
            scale: (em_px / 8).max(1),
        }
    }

    /// Width and height of `text`, without trailing spacing
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let count = text.chars().count() as u32;
        if count == 0 {
            return (0, 0);
        }
        let width = count * (GLYPH_WIDTH + SPACING) - SPACING;
        (width * self.scale, GLYPH_HEIGHT * self.scale)
    }

    /// Draw `text` with its top-left corner at (x, y); pixels off the canvas are skipped
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        let scale = self.scale as i32;
        let advance = ((GLYPH_WIDTH + SPACING) * self.scale) as i32;

        for (index, c) in text.chars().enumerate() {
            let left = x + index as i32 * advance;
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0x10 >> col) == 0 {
                        continue;
                    }
                    let block_x = left + col as i32 * scale;
                    let block_y = y + row as i32 * scale;
                    fill_block(canvas, block_x, block_y, self.scale, color);
                }
            }
        }
    }
}

fn fill_block(canvas: &mut RgbImage, x: i32, y: i32, size: u32, color: Rgb<u8>) {
    let (width, height) = canvas.dimensions();
    for dy in 0..size as i32 {
        for dx in 0..size as i32 {
            let (px, py) = (x + dx, y + dy);
            if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                continue;
            }
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_em_scale() {
        assert_eq!(BitmapFont::for_em(48).scale, 6);
        assert_eq!(BitmapFont::for_em(128).scale, 16);
        assert_eq!(BitmapFont::for_em(3).scale, 1);
    }

    #[test]
    fn test_measure() {
        let font = BitmapFont { scale: 2 };
        assert_eq!(font.measure("TL"), (22, 14));
        assert_eq!(font.measure("A"), (10, 14));
        assert_eq!(font.measure(""), (0, 0));
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(glyph('t'), glyph('T'));
        assert_eq!(glyph('?'), &MISSING);
    }

    #[test]
    fn test_draw_t_crossbar() {
        let font = BitmapFont { scale: 1 };
        let white = Rgb([255, 255, 255]);
        let mut canvas = RgbImage::from_pixel(20, 10, Rgb([0, 0, 0]));
        font.draw(&mut canvas, 1, 1, white, "TL");

        // Top bar of T spans five columns
        for x in 1..6 {
            assert_eq!(*canvas.get_pixel(x, 1), white);
        }
        // Stem of L, then its foot
        assert_eq!(*canvas.get_pixel(7, 1), white);
        assert_eq!(*canvas.get_pixel(11, 7), white);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_draw_clips_at_edges() {
        let font = BitmapFont { scale: 4 };
        let mut canvas = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));
        font.draw(&mut canvas, -10, -10, Rgb([255, 0, 0]), "TL");
        font.draw(&mut canvas, 6, 6, Rgb([255, 0, 0]), "TL");
        assert_eq!(canvas.dimensions(), (8, 8));
    }
}
