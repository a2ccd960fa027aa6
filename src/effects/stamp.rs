//! Stamp descriptors and the single routine that applies them.
//!
//! Every effect layer is an ordered list of `(offset, color)` stamps of one
//! glyph mask, each composited source-over onto the layer in list order.

use crate::{
    effects::composite::Layer,
    foundation::core::Rgba8,
    text::mask::GlyphMask,
};

/// One alpha-blended draw of the glyph mask at a pixel offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stamp {
    /// Horizontal offset from the mask position.
    pub dx: i32,
    /// Vertical offset from the mask position.
    pub dy: i32,
    /// Straight-alpha color; the mask coverage scales its alpha.
    pub color: Rgba8,
}

impl Stamp {
    /// Construct a stamp.
    pub const fn new(dx: i32, dy: i32, color: Rgba8) -> Self {
        Self { dx, dy, color }
    }
}

/// Offsets of the 3x3 neighbourhood minus center at magnitudes `1..=max_magnitude`.
///
/// Order is magnitude, then `dx` in `[-m, 0, m]`, then `dy` in `[-m, 0, m]`.
pub fn ring_offsets(max_magnitude: i32) -> Vec<(i32, i32)> {
    let mut out = Vec::with_capacity((max_magnitude.max(0) as usize) * 8);
    for m in 1..=max_magnitude {
        for dx in [-m, 0, m] {
            for dy in [-m, 0, m] {
                if dx != 0 || dy != 0 {
                    out.push((dx, dy));
                }
            }
        }
    }
    out
}

/// Ring stamps of one color.
pub fn ring_stamps(max_magnitude: i32, color: Rgba8) -> Vec<Stamp> {
    ring_offsets(max_magnitude)
        .into_iter()
        .map(|(dx, dy)| Stamp::new(dx, dy, color))
        .collect()
}

/// Composite one stamp of `mask` onto `layer`.
///
/// `mask` and `layer` share a coordinate system; pixels shifted outside the layer are dropped.
pub fn apply_stamp(layer: &mut Layer, mask: &GlyphMask, stamp: Stamp) {
    if stamp.color.a == 0 {
        return;
    }
    for (x, y, coverage) in mask.covered() {
        layer.blend_pixel(
            i64::from(x) + i64::from(stamp.dx),
            i64::from(y) + i64::from(stamp.dy),
            stamp.color,
            coverage,
        );
    }
}

/// Composite every stamp in order.
pub fn apply_stamps(layer: &mut Layer, mask: &GlyphMask, stamps: &[Stamp]) {
    for &stamp in stamps {
        apply_stamp(layer, mask, stamp);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/stamp.rs"]
mod tests;
