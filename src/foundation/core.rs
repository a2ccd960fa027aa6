use crate::foundation::error::{ChromaError, ChromaResult};

/// Margin added on every side of the chrome working surface.
pub const EFFECT_PADDING: u32 = 80;

/// Largest canvas edge accepted; the padded chrome surface must still fit a 16-bit raster.
pub const MAX_CANVAS_EDGE: u32 = u16::MAX as u32 - 2 * EFFECT_PADDING;

/// Largest font size accepted; one line of text cannot outgrow the largest canvas.
pub const MAX_FONT_SIZE_PX: f32 = MAX_CANVAS_EDGE as f32;

/// Output canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Validated constructor.
    pub fn new(width: u32, height: u32) -> ChromaResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check both edges are non-zero and within [`MAX_CANVAS_EDGE`].
    pub fn validate(self) -> ChromaResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChromaError::validation("canvas width and height must be > 0"));
        }
        if self.width > MAX_CANVAS_EDGE || self.height > MAX_CANVAS_EDGE {
            return Err(ChromaError::validation(format!(
                "canvas edges must be <= {MAX_CANVAS_EDGE}, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Number of pixels.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Canvas grown by `pad` pixels on every side.
    pub fn padded(self, pad: u32) -> Self {
        Self {
            width: self.width + 2 * pad,
            height: self.height + 2 * pad,
        }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Construct from straight channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplied bytes of this color scaled by an additional 8-bit coverage.
    pub fn premul_with_coverage(self, coverage: u8) -> [u8; 4] {
        fn premul(c: u8, a: u16) -> u8 {
            (((u16::from(c) * a) + 127) / 255) as u8
        }

        let a = ((u16::from(self.a) * u16::from(coverage)) + 127) / 255;
        [premul(self.r, a), premul(self.g, a), premul(self.b, a), a as u8]
    }

    /// Premultiplied bytes at full coverage.
    pub fn to_premul(self) -> [u8; 4] {
        self.premul_with_coverage(255)
    }
}

/// Integer pixel position (may be negative or outside the canvas).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelPos {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl PixelPos {
    /// Construct a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
