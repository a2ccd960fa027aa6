//! The three text layers of the chrome/rainbow effect.

use crate::{
    effects::{
        composite::Layer,
        gradient::rainbow_color,
        stamp::{Stamp, apply_stamps, ring_stamps},
    },
    foundation::{
        core::{Canvas, EFFECT_PADDING, PixelPos, Rgba8},
        error::ChromaResult,
    },
    text::{font::ShapedText, mask::GlyphMask},
};

/// Offset of the black shadow layer from the text position.
pub const SHADOW_OFFSET: (i32, i32) = (3, 3);
/// Offset of the rainbow layer from the text position.
pub const RAINBOW_OFFSET: (i32, i32) = (6, 6);

const DROP_SHADOW: Stamp = Stamp::new(3, 5, Rgba8::new(0, 0, 0, 200));
const INNER_GLOW_COLOR: Rgba8 = Rgba8::new(0, 0, 0, 70);
const INNER_GLOW_SIZE: i32 = 4;
const BASE_FILL: Stamp = Stamp::new(0, 0, Rgba8::new(140, 140, 140, 255));

const BEVEL_HIGHLIGHTS: [Stamp; 3] = [
    Stamp::new(0, -3, Rgba8::new(255, 255, 255, 120)),
    Stamp::new(0, -2, Rgba8::new(240, 240, 240, 100)),
    Stamp::new(-1, -2, Rgba8::new(220, 220, 220, 80)),
];

const BEVEL_SHADOWS: [Stamp; 3] = [
    Stamp::new(1, 3, Rgba8::new(0, 0, 0, 80)),
    Stamp::new(0, 2, Rgba8::new(40, 40, 40, 60)),
    Stamp::new(2, 2, Rgba8::new(20, 20, 20, 40)),
];

const SATIN: [Stamp; 2] = [
    Stamp::new(1, 1, Rgba8::new(20, 30, 80, 100)),
    Stamp::new(2, 2, Rgba8::new(20, 30, 80, 100)),
];

const EDGE_HINTS: [Stamp; 3] = [
    Stamp::new(-1, 0, Rgba8::new(100, 255, 200, 30)),
    Stamp::new(1, 0, Rgba8::new(200, 100, 255, 30)),
    Stamp::new(0, -1, Rgba8::new(255, 200, 100, 25)),
];

const TOP_EDGE: Stamp = Stamp::new(0, -1, Rgba8::new(255, 255, 255, 140));

const GLOW_COLOR: Rgba8 = Rgba8::new(255, 255, 255, 100);
const GLOW_SIZE: i32 = 5;

/// Full chrome stamp sequence in composite order.
pub fn chrome_stamps() -> Vec<Stamp> {
    let mut stamps = vec![DROP_SHADOW];
    stamps.extend(ring_stamps(INNER_GLOW_SIZE, INNER_GLOW_COLOR));
    stamps.push(BASE_FILL);
    stamps.extend(BEVEL_HIGHLIGHTS);
    stamps.extend(BEVEL_SHADOWS);
    stamps.extend(SATIN);
    stamps.extend(EDGE_HINTS);
    stamps.push(TOP_EDGE);
    stamps
}

/// Glow stamps behind the rainbow text: an outer and an inner pass with identical stamp sets.
pub fn glow_stamps() -> Vec<Stamp> {
    let outer = ring_stamps(GLOW_SIZE, GLOW_COLOR);
    let inner = ring_stamps(GLOW_SIZE, GLOW_COLOR);
    outer.into_iter().chain(inner).collect()
}

/// Opaque black base every layer is composited onto.
pub fn background_layer(canvas: Canvas) -> Layer {
    Layer::solid(canvas, Rgba8::BLACK)
}

/// Rasterize `text` at `origin` on a surface padded by [`EFFECT_PADDING`].
///
/// Ink just outside the canvas stays in the mask, so stamps shifted back in still see it.
fn padded_mask(text: &ShapedText, origin: PixelPos, canvas: Canvas) -> ChromaResult<GlyphMask> {
    let pad = EFFECT_PADDING as i32;
    text.rasterize(origin.offset(pad, pad), canvas.padded(EFFECT_PADDING))
}

fn crop_padding(surface: &Layer, canvas: Canvas) -> ChromaResult<Layer> {
    surface.crop(EFFECT_PADDING, EFFECT_PADDING, canvas)
}

/// Beveled chrome text, stamped on a surface padded by [`EFFECT_PADDING`] then cropped to `canvas`.
pub fn chrome_layer(text: &ShapedText, origin: PixelPos, canvas: Canvas) -> ChromaResult<Layer> {
    let mask = padded_mask(text, origin, canvas)?;
    let mut surface = Layer::transparent(mask.canvas());
    apply_stamps(&mut surface, &mask, &chrome_stamps());
    crop_padding(&surface, canvas)
}

/// Opaque black copy of the text at [`SHADOW_OFFSET`].
pub fn shadow_layer(text: &ShapedText, origin: PixelPos, canvas: Canvas) -> ChromaResult<Layer> {
    let at = origin.offset(SHADOW_OFFSET.0, SHADOW_OFFSET.1);
    let mask = padded_mask(text, at, canvas)?;
    let mut surface = Layer::transparent(mask.canvas());
    apply_stamps(&mut surface, &mask, &[Stamp::new(0, 0, Rgba8::BLACK)]);
    crop_padding(&surface, canvas)
}

/// Rainbow-filled text at [`RAINBOW_OFFSET`] over its white glow.
///
/// Gradient columns follow canvas coordinates; the glow is stamped on the padded surface.
pub fn rainbow_layer(text: &ShapedText, origin: PixelPos, canvas: Canvas) -> ChromaResult<Layer> {
    let at = origin.offset(RAINBOW_OFFSET.0, RAINBOW_OFFSET.1);
    let mask = padded_mask(text, at, canvas)?;
    let pad = EFFECT_PADDING;

    let mut gradient_text = Layer::transparent(mask.canvas());
    for (x, y, coverage) in mask.covered() {
        if x < pad || x >= pad + canvas.width {
            continue;
        }
        let [r, g, b] = rainbow_color(x - pad, canvas.width);
        gradient_text.blend_pixel(i64::from(x), i64::from(y), Rgba8::new(r, g, b, 255), coverage);
    }

    let mut glow = Layer::transparent(mask.canvas());
    apply_stamps(&mut glow, &mask, &glow_stamps());

    glow.composite_over(&gradient_text, 1.0)?;
    crop_padding(&glow, canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/layers.rs"]
mod tests;
