use image::RgbImage;

use crate::foundation::{core::Canvas, math::hsv_to_rgb8};

/// Color of column `x` in a rainbow sweeping hue `0 -> 1` across `width` columns.
pub fn rainbow_color(x: u32, width: u32) -> [u8; 3] {
    let hue = if width == 0 {
        0.0
    } else {
        f64::from(x) / f64::from(width)
    };
    hsv_to_rgb8(hue, 1.0, 1.0)
}

/// Full-canvas rainbow; every row is identical.
pub fn rainbow_gradient(canvas: Canvas) -> RgbImage {
    let columns: Vec<[u8; 3]> = (0..canvas.width)
        .map(|x| rainbow_color(x, canvas.width))
        .collect();
    RgbImage::from_fn(canvas.width, canvas.height, |x, _| {
        image::Rgb(columns[x as usize])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/gradient.rs"]
mod tests;
