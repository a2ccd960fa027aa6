use std::{path::Path, sync::Arc};

use crate::{
    foundation::{
        core::{Canvas, PixelPos},
        error::{ChromaError, ChromaResult},
    },
    text::{
        bitmap::BitmapFont,
        layout::{TextBrushRgba8, TextLayoutEngine},
        mask::GlyphMask,
    },
};

/// Family name reported for the built-in bitmap font.
pub const BUILTIN_FAMILY: &str = "builtin-5x7";

/// A font handle at a fixed pixel size.
///
/// Outline fonts are shaped with Parley and filled with `vello_cpu`; the
/// built-in bitmap font needs no external data and never fails.
#[derive(Clone)]
pub struct Font {
    size_px: f32,
    kind: FontKind,
}

#[derive(Clone)]
enum FontKind {
    Outline {
        bytes: Arc<Vec<u8>>,
        family: String,
    },
    Builtin(BitmapFont),
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut d = f.debug_struct("Font");
        d.field("size_px", &self.size_px)
            .field("family", &self.family_name());
        if let FontKind::Outline { bytes, .. } = &self.kind {
            d.field("font_bytes_len", &bytes.len());
        }
        d.finish()
    }
}

impl Font {
    /// Load `path`, falling back to the built-in font when the file is missing or unreadable.
    ///
    /// Only an invalid `size_px` is reported as an error.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load_or_builtin(path: &Path, size_px: f32) -> ChromaResult<Self> {
        validate_size(size_px)?;
        match Self::from_file(path, size_px) {
            Ok(font) => {
                tracing::debug!(family = %font.family_name(), "loaded font");
                Ok(font)
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, "font unavailable, using built-in font");
                Ok(Self::builtin(size_px))
            }
            Err(e) => Err(e),
        }
    }

    /// Load an outline font from disk.
    pub fn from_file(path: &Path, size_px: f32) -> ChromaResult<Self> {
        if !path.is_file() {
            return Err(ChromaError::missing(format!(
                "font file '{}' not found",
                path.display()
            )));
        }
        let bytes = std::fs::read(path).map_err(|e| {
            ChromaError::decode(format!("read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes, size_px)
    }

    /// Wrap outline font bytes, checking that Parley can register them.
    pub fn from_bytes(bytes: Vec<u8>, size_px: f32) -> ChromaResult<Self> {
        validate_size(size_px)?;
        let family = TextLayoutEngine::new().register_font(&bytes)?;
        Ok(Self {
            size_px,
            kind: FontKind::Outline {
                bytes: Arc::new(bytes),
                family,
            },
        })
    }

    /// The built-in bitmap font scaled towards `size_px`.
    pub fn builtin(size_px: f32) -> Self {
        Self {
            size_px,
            kind: FontKind::Builtin(BitmapFont::for_size(size_px)),
        }
    }

    /// True when this is the built-in fallback.
    pub fn is_builtin(&self) -> bool {
        matches!(self.kind, FontKind::Builtin(_))
    }

    /// Family name from the font data, or [`BUILTIN_FAMILY`].
    pub fn family_name(&self) -> &str {
        match &self.kind {
            FontKind::Outline { family, .. } => family,
            FontKind::Builtin(_) => BUILTIN_FAMILY,
        }
    }

    /// Raw outline font bytes, if any.
    pub fn font_bytes(&self) -> Option<&[u8]> {
        match &self.kind {
            FontKind::Outline { bytes, .. } => Some(bytes.as_slice()),
            FontKind::Builtin(_) => None,
        }
    }

    /// Requested size in pixels.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Shape `text` once so it can be measured and rasterized repeatedly.
    pub fn shape(&self, text: &str) -> ChromaResult<ShapedText> {
        let inner = match &self.kind {
            FontKind::Outline { bytes, family } => {
                let mut engine = TextLayoutEngine::new();
                engine.register_font(bytes)?;
                let layout = engine.layout_plain(text, family, self.size_px)?;
                let font = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                    0,
                );
                Shaped::Outline { layout, font }
            }
            FontKind::Builtin(bitmap) => Shaped::Bitmap {
                text: text.to_string(),
                font: *bitmap,
            },
        };
        Ok(ShapedText { inner })
    }
}

fn validate_size(size_px: f32) -> ChromaResult<()> {
    if !size_px.is_finite() || size_px <= 0.0 {
        return Err(ChromaError::validation(
            "font size_px must be finite and > 0",
        ));
    }
    Ok(())
}

/// Text laid out in a specific font, ready to rasterize into masks.
pub struct ShapedText {
    inner: Shaped,
}

enum Shaped {
    Outline {
        layout: parley::Layout<TextBrushRgba8>,
        font: vello_cpu::peniko::FontData,
    },
    Bitmap {
        text: String,
        font: BitmapFont,
    },
}

impl ShapedText {
    /// Size of the laid-out text box in whole pixels.
    pub fn size(&self) -> (u32, u32) {
        match &self.inner {
            Shaped::Outline { layout, .. } => (
                layout.width().ceil().max(0.0) as u32,
                layout.height().ceil().max(0.0) as u32,
            ),
            Shaped::Bitmap { text, font } => font.measure(text),
        }
    }

    /// Top-left position that centers the text box on `canvas` (floor division).
    pub fn centered_origin(&self, canvas: Canvas) -> PixelPos {
        let (w, h) = self.size();
        let x = (i64::from(canvas.width) - i64::from(w)).div_euclid(2);
        let y = (i64::from(canvas.height) - i64::from(h)).div_euclid(2);
        PixelPos::new(x as i32, y as i32)
    }

    /// Rasterize the text with its top-left corner at `origin` into a `canvas`-sized mask.
    pub fn rasterize(&self, origin: PixelPos, canvas: Canvas) -> ChromaResult<GlyphMask> {
        match &self.inner {
            Shaped::Outline { layout, font } => rasterize_outline(layout, font, origin, canvas),
            Shaped::Bitmap { text, font } => {
                let mut mask = GlyphMask::empty(canvas);
                let (x0, y0) = (i64::from(origin.x), i64::from(origin.y));
                font.for_each_pixel(text, x0, y0, canvas, |x, y| mask.set_max(x, y, 255));
                Ok(mask)
            }
        }
    }
}

fn rasterize_outline(
    layout: &parley::Layout<TextBrushRgba8>,
    font: &vello_cpu::peniko::FontData,
    origin: PixelPos,
    canvas: Canvas,
) -> ChromaResult<GlyphMask> {
    let width = u16::try_from(canvas.width)
        .map_err(|_| ChromaError::render("mask width exceeds u16"))?;
    let height = u16::try_from(canvas.height)
        .map_err(|_| ChromaError::render("mask height exceeds u16"))?;

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        f64::from(origin.x),
        f64::from(origin.y),
    )));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            // Absolute positions: run offset, running advance and line baseline applied.
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let coverage: Vec<u8> = pixmap
        .data_as_u8_slice()
        .chunks_exact(4)
        .map(|px| px[3])
        .collect();
    GlyphMask::from_coverage(canvas, coverage)
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
