use crate::foundation::{
    core::{Canvas, Rgba8},
    error::{ChromaError, ChromaResult},
    math::mul_div255,
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over blend of premultiplied `src` onto `dst`, with `src` attenuated by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Blend a whole premultiplied buffer onto another of identical length.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> ChromaResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ChromaError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Premultiplied RGBA8 raster the size of a canvas.
///
/// Layers start transparent (or solid for the background), receive stamps, and
/// are combined back-to-front with [`Layer::composite_over`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Layer {
    /// Fully transparent layer.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0u8; canvas.pixel_count() * 4],
        }
    }

    /// Layer filled with one color.
    pub fn solid(canvas: Canvas, color: Rgba8) -> Self {
        let px = color.to_premul();
        Self {
            width: canvas.width,
            height: canvas.height,
            data: px.repeat(canvas.pixel_count()),
        }
    }

    /// Wrap an existing premultiplied buffer.
    pub fn from_premul(canvas: Canvas, data: Vec<u8>) -> ChromaResult<Self> {
        if data.len() != canvas.pixel_count() * 4 {
            return Err(ChromaError::render(format!(
                "layer buffer of {} bytes does not match {}x{} rgba8",
                data.len(),
                canvas.width,
                canvas.height
            )));
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
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

    /// Row-major premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`; panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> PremulRgba8 {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// True when no pixel has any coverage.
    pub fn is_empty(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Source-over blend of `color` (with `coverage`) onto one pixel; out-of-bounds is ignored.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba8, coverage: u8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let src = color.premul_with_coverage(coverage);
        if src[3] == 0 {
            return;
        }
        let i = self.index(x as u32, y as u32);
        let d = &mut self.data[i..i + 4];
        let out = over([d[0], d[1], d[2], d[3]], src, 1.0);
        d.copy_from_slice(&out);
    }

    /// Blend `src` over this layer. Both layers must share dimensions.
    pub fn composite_over(&mut self, src: &Layer, opacity: f32) -> ChromaResult<()> {
        if src.width != self.width || src.height != self.height {
            return Err(ChromaError::render(format!(
                "cannot composite {}x{} layer onto {}x{} layer",
                src.width, src.height, self.width, self.height
            )));
        }
        over_in_place(&mut self.data, &src.data, opacity)
    }

    /// Copy with every straight alpha scaled by `factor` and truncated, colors kept.
    pub fn faded(&self, factor: f32) -> Layer {
        let factor = factor.clamp(0.0, 1.0);
        let mut data = self.data.clone();
        for px in data.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 {
                continue;
            }
            // Nudge so factors like 0.7 that f32 stores just below truncate as intended.
            let faded = (f64::from(a) * f64::from(factor) + 1e-4).floor() as u32;
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * faded + a / 2) / a).min(faded) as u8;
            }
            px[3] = faded as u8;
        }
        Layer {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Copy the `size` window whose top-left corner is `(x, y)`.
    pub fn crop(&self, x: u32, y: u32, size: Canvas) -> ChromaResult<Layer> {
        let fits = x
            .checked_add(size.width)
            .is_some_and(|r| r <= self.width)
            && y.checked_add(size.height).is_some_and(|b| b <= self.height);
        if !fits {
            return Err(ChromaError::render(format!(
                "crop {}x{}+{x}+{y} exceeds {}x{} layer",
                size.width, size.height, self.width, self.height
            )));
        }

        let row_bytes = size.width as usize * 4;
        let mut data = Vec::with_capacity(size.pixel_count() * 4);
        for row in y..y + size.height {
            let start = self.index(x, row);
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Layer::from_premul(size, data)
    }

    /// Drop alpha by compositing onto black, i.e. keep the premultiplied color.
    pub fn flatten_rgb(&self) -> image::RgbImage {
        let rgb: Vec<u8> = self
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        image::RgbImage::from_raw(self.width, self.height, rgb)
            .unwrap_or_else(|| image::RgbImage::new(self.width, self.height))
    }

    /// Straight-alpha copy for encoders that expect unpremultiplied RGBA.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        image::RgbaImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
