use crate::foundation::{
    core::Canvas,
    error::{ChromaError, ChromaResult},
};

/// Single-channel coverage grid of rasterized text.
///
/// A mask is rendered once at the text position; stamping at an integer offset
/// shifts it rather than re-rasterizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMask {
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl GlyphMask {
    /// Mask with no coverage.
    pub fn empty(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            coverage: vec![0u8; canvas.pixel_count()],
        }
    }

    /// Wrap an existing coverage buffer.
    pub fn from_coverage(canvas: Canvas, coverage: Vec<u8>) -> ChromaResult<Self> {
        if coverage.len() != canvas.pixel_count() {
            return Err(ChromaError::render(format!(
                "mask buffer of {} bytes does not match {}x{}",
                coverage.len(),
                canvas.width,
                canvas.height
            )));
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            coverage,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Coverage at `(x, y)`; zero outside the grid.
    pub fn coverage_at(&self, x: i64, y: i64) -> u8 {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return 0;
        }
        self.coverage[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Raw row-major coverage.
    pub fn coverage(&self) -> &[u8] {
        &self.coverage
    }

    /// True when nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.coverage.iter().all(|&c| c == 0)
    }

    /// Iterate `(x, y, coverage)` for covered pixels only.
    pub fn covered(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        let w = self.width as usize;
        self.coverage
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0)
            .map(move |(i, &c)| ((i % w) as u32, (i / w) as u32, c))
    }

    pub(crate) fn set_max(&mut self, x: i64, y: i64, value: u8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let i = (y as usize) * (self.width as usize) + (x as usize);
        self.coverage[i] = self.coverage[i].max(value);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/mask.rs"]
mod tests;
