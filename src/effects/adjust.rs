//! Global tone adjustments applied to the flattened composite.
//!
//! Both adjustments are "enhance" blends: `out = degenerate + (px - degenerate) * factor`.
//! `factor == 1.0` is the identity, `0.0` collapses to the degenerate image.

use image::RgbImage;

use crate::foundation::math::luma601;

/// Contrast boost used by the final pass.
pub const FINAL_CONTRAST: f32 = 1.2;
/// Saturation ("color") boost used by the final pass.
pub const FINAL_COLOR: f32 = 1.3;

/// Scale towards black; `0.2` keeps a fifth of the brightness.
pub fn enhance_brightness(img: &RgbImage, factor: f32) -> RgbImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        for c in &mut px.0 {
            *c = blend(0.0, f32::from(*c), factor);
        }
    }
    out
}

/// Stretch every channel away from the image's mean luma.
pub fn enhance_contrast(img: &RgbImage, factor: f32) -> RgbImage {
    let mean = mean_luma(img);
    let mut out = img.clone();
    for px in out.pixels_mut() {
        for c in &mut px.0 {
            *c = blend(mean, f32::from(*c), factor);
        }
    }
    out
}

/// Stretch every pixel away from its own gray value.
pub fn enhance_color(img: &RgbImage, factor: f32) -> RgbImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let [r, g, b] = px.0;
        let gray = luma601(r, g, b).round();
        for c in &mut px.0 {
            *c = blend(gray, f32::from(*c), factor);
        }
    }
    out
}

fn mean_luma(img: &RgbImage) -> f32 {
    let n = u64::from(img.width()) * u64::from(img.height());
    if n == 0 {
        return 0.0;
    }
    let sum: u64 = img
        .pixels()
        .map(|p| luma601(p.0[0], p.0[1], p.0[2]).round() as u64)
        .sum();
    ((sum as f64 / n as f64) + 0.5).floor() as f32
}

fn blend(degenerate: f32, value: f32, factor: f32) -> u8 {
    (degenerate + (value - degenerate) * factor)
        .round()
        .clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/adjust.rs"]
mod tests;
