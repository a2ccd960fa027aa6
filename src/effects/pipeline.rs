//! Assembly of the chrome/rainbow text effect.
//!
//! 1. **Shape**: `Font + text -> ShapedText`, centered on the canvas
//! 2. **Layers**: background, rainbow (with glow), shadow, chrome
//! 3. **Composite**: back-to-front source-over, rainbow at [`RAINBOW_OPACITY`]
//! 4. **Finish**: flatten to RGB, then contrast and color enhancement

use std::path::PathBuf;

use image::RgbImage;

use crate::{
    assets::output::write_rgb_png,
    effects::{
        adjust::{FINAL_COLOR, FINAL_CONTRAST, enhance_color, enhance_contrast},
        composite::Layer,
        layers::{background_layer, chrome_layer, rainbow_layer, shadow_layer},
    },
    foundation::{
        config::EffectConfig,
        core::{Canvas, PixelPos},
        error::ChromaResult,
    },
    text::font::{Font, ShapedText},
};

/// Factor applied to the rainbow layer's alpha before compositing.
pub const RAINBOW_OPACITY: f32 = 0.7;

/// The individual layers of one effect, before compositing.
#[derive(Clone, Debug)]
pub struct TextEffectLayers {
    /// Top-left corner of the centered text box.
    pub origin: PixelPos,
    /// Solid black base.
    pub background: Layer,
    /// Rainbow-filled text over its glow.
    pub rainbow: Layer,
    /// Offset black shadow.
    pub shadow: Layer,
    /// Beveled chrome text.
    pub chrome: Layer,
}

impl TextEffectLayers {
    /// Build all layers for `text` centered on `canvas`.
    pub fn build(text: &ShapedText, canvas: Canvas) -> ChromaResult<Self> {
        let origin = text.centered_origin(canvas);
        tracing::debug!(x = origin.x, y = origin.y, "text origin");
        Ok(Self {
            origin,
            background: background_layer(canvas),
            rainbow: rainbow_layer(text, origin, canvas)?,
            shadow: shadow_layer(text, origin, canvas)?,
            chrome: chrome_layer(text, origin, canvas)?,
        })
    }

    /// Composite back-to-front onto the background.
    pub fn composite(&self) -> ChromaResult<Layer> {
        let mut out = self.background.clone();
        out.composite_over(&self.rainbow.faded(RAINBOW_OPACITY), 1.0)?;
        out.composite_over(&self.shadow, 1.0)?;
        out.composite_over(&self.chrome, 1.0)?;
        Ok(out)
    }
}

/// Flatten a composite and apply the final tone adjustments.
pub fn finish(composite: &Layer) -> RgbImage {
    let rgb = composite.flatten_rgb();
    let rgb = enhance_contrast(&rgb, FINAL_CONTRAST);
    enhance_color(&rgb, FINAL_COLOR)
}

/// Render the effect for `text` in `font` onto a `canvas`-sized RGB image.
///
/// Text the font cannot draw produces a plain (adjusted) black image rather than an error.
#[tracing::instrument(skip(font), fields(family = %font.family_name(), size_px = font.size_px()))]
pub fn generate_text_effect(font: &Font, text: &str, canvas: Canvas) -> ChromaResult<RgbImage> {
    canvas.validate()?;
    let shaped = font.shape(text)?;
    let layers = TextEffectLayers::build(&shaped, canvas)?;
    let composite = layers.composite()?;
    Ok(finish(&composite))
}

/// Load the configured font (with fallback) and render the effect.
pub fn render_text_effect(cfg: &EffectConfig) -> ChromaResult<RgbImage> {
    cfg.validate()?;
    let font = Font::load_or_builtin(&cfg.font_path, cfg.font_size_px)?;
    generate_text_effect(&font, &cfg.text, cfg.canvas()?)
}

/// Render the effect and write it to `cfg.output_path`.
///
/// Write failures are the only errors besides invalid configuration.
#[tracing::instrument(skip(cfg), fields(out = %cfg.output_path.display()))]
pub fn render_to_file(cfg: &EffectConfig) -> ChromaResult<PathBuf> {
    let img = render_text_effect(cfg)?;
    write_rgb_png(&cfg.output_path, &img)?;
    tracing::info!(width = img.width(), height = img.height(), "wrote text effect");
    Ok(cfg.output_path.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pipeline.rs"]
mod tests;
