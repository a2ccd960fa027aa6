//! Built-in 5x7 bitmap font, used whenever no outline font can be loaded.
//!
//! Each glyph is 7 rows; the low 5 bits of a row are pixels, bit 4 leftmost.
//! Cells are 6x8 (one column and one row of spacing) before scaling.

/// Glyph width in font units.
pub const GLYPH_W: u32 = 5;
/// Glyph height in font units.
pub const GLYPH_H: u32 = 7;
/// Horizontal advance per character in font units.
pub const ADVANCE: u32 = 6;
/// Line pitch in font units.
pub const LINE_PITCH: u32 = 8;

use crate::foundation::core::{Canvas, MAX_FONT_SIZE_PX};

const MISSING: [u8; 7] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

/// Rows of the glyph for `ch`; lowercase maps to uppercase, unknown characters to a box.
pub fn glyph5x7(ch: char) -> [u8; 7] {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        [$a,$b,$c,$d,$e,$f,$g]
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b01100,0b01100),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00110,0b00100,0b01000),
        ':' => g!(0b00000,0b01100,0b01100,0b00000,0b01100,0b01100,0b00000),
        ';' => g!(0b00000,0b01100,0b01100,0b00000,0b01100,0b00100,0b01000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '?' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b00000,0b00100),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),
        '=' => g!(0b00000,0b00000,0b11111,0b00000,0b11111,0b00000,0b00000),
        '*' => g!(0b00000,0b00100,0b10101,0b01110,0b10101,0b00100,0b00000),
        '_' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111),
        '/' => g!(0b00000,0b00001,0b00010,0b00100,0b01000,0b10000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        '(' => g!(0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010),
        ')' => g!(0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000),
        '\'' => g!(0b00100,0b00100,0b01000,0b00000,0b00000,0b00000,0b00000),
        '"' => g!(0b01010,0b01010,0b01010,0b00000,0b00000,0b00000,0b00000),
        '&' => g!(0b01100,0b10010,0b10100,0b01000,0b10101,0b10010,0b01101),
        '#' => g!(0b01010,0b01010,0b11111,0b01010,0b11111,0b01010,0b01010),

        _ => MISSING,
    }
}

/// Fixed-cell bitmap font scaled by an integer factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Scale chosen so one line pitch roughly matches `size_px`, capped at [`MAX_FONT_SIZE_PX`].
    pub fn for_size(size_px: f32) -> Self {
        let scale = (size_px.min(MAX_FONT_SIZE_PX) / LINE_PITCH as f32).round();
        let scale = if scale.is_finite() && scale >= 1.0 {
            scale as u32
        } else {
            1
        };
        Self { scale }
    }

    /// Integer scale factor.
    pub fn scale(self) -> u32 {
        self.scale
    }

    /// Ink box of `text` in pixels (trailing spacing excluded), saturating at `u32::MAX`.
    pub fn measure(self, text: &str) -> (u32, u32) {
        let lines: Vec<&str> = text.split('\n').collect();
        let widest = lines.iter().map(|l| l.chars().count() as u64).max().unwrap_or(0);
        if widest == 0 && lines.len() <= 1 {
            return (0, 0);
        }
        let scale = u64::from(self.scale);
        let units_w = (widest.saturating_mul(u64::from(ADVANCE)))
            .saturating_sub(u64::from(ADVANCE - GLYPH_W));
        let units_h = (lines.len() as u64).saturating_mul(u64::from(LINE_PITCH))
            - u64::from(LINE_PITCH - GLYPH_H);
        let clamp = |v: u64| u32::try_from(v).unwrap_or(u32::MAX);
        (
            clamp(units_w.saturating_mul(scale)),
            clamp(units_h.saturating_mul(scale)),
        )
    }

    /// Call `plot(x, y)` for every lit pixel of `text` laid out from `(x0, y0)` that falls
    /// inside `bounds`.
    pub fn for_each_pixel(
        self,
        text: &str,
        x0: i64,
        y0: i64,
        bounds: Canvas,
        mut plot: impl FnMut(i64, i64),
    ) {
        let s = i64::from(self.scale);
        let (bw, bh) = (i64::from(bounds.width), i64::from(bounds.height));
        for (line_idx, line) in text.split('\n').enumerate() {
            let line_y = y0 + line_idx as i64 * i64::from(LINE_PITCH) * s;
            for (col, ch) in line.chars().enumerate() {
                let cell_x = x0 + col as i64 * i64::from(ADVANCE) * s;
                for (ry, rowbits) in glyph5x7(ch).iter().enumerate() {
                    for rx in 0..GLYPH_W {
                        if rowbits & (1 << (GLYPH_W - 1 - rx)) == 0 {
                            continue;
                        }
                        let px = cell_x + i64::from(rx) * s;
                        let py = line_y + ry as i64 * s;
                        let (xs, xe) = (px.max(0), (px + s).min(bw));
                        let (ys, ye) = (py.max(0), (py + s).min(bh));
                        for y in ys..ye {
                            for x in xs..xe {
                                plot(x, y);
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/bitmap.rs"]
mod tests;
