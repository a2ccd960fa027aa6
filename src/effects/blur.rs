use crate::foundation::error::{ChromaError, ChromaResult};

/// Separable Gaussian blur over an interleaved 8-bit buffer with `channels` samples per pixel.
///
/// Edges clamp. `radius == 0` returns the input unchanged.
pub fn blur_interleaved(
    src: &[u8],
    width: u32,
    height: u32,
    channels: usize,
    radius: u32,
    sigma: f32,
) -> ChromaResult<Vec<u8>> {
    if channels == 0 || channels > 4 {
        return Err(ChromaError::validation("blur supports 1..=4 channels"));
    }
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| ChromaError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(ChromaError::render(
            "blur_interleaved expects src matching width*height*channels",
        ));
    }
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    let dims = Dims {
        width: width as i32,
        height: height as i32,
        channels,
    };
    pass(src, &mut tmp, dims, &kernel, Axis::Horizontal);
    pass(&tmp, &mut out, dims, &kernel, Axis::Vertical);
    Ok(out)
}

/// Gaussian blur of an RGB image; `sigma` is the standard deviation and the kernel spans `3 * sigma`.
pub fn gaussian_blur_rgb(img: &image::RgbImage, sigma: f32) -> ChromaResult<image::RgbImage> {
    let (w, h) = img.dimensions();
    let radius = (sigma * 3.0).ceil().max(0.0) as u32;
    let out = blur_interleaved(img.as_raw(), w, h, 3, radius, sigma)?;
    image::RgbImage::from_raw(w, h, out)
        .ok_or_else(|| ChromaError::render("blurred buffer does not match image size"))
}

/// Symmetric q16 kernel: side taps are rounded, the center tap takes whatever makes the sum 1.0.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ChromaResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ChromaError::validation("blur sigma must be > 0"));
    }

    let two_sigma_sq = 2.0 * f64::from(sigma).powi(2);
    let falloff: Vec<f64> = (0..=radius)
        .map(|d| (-f64::from(d).powi(2) / two_sigma_sq).exp())
        .collect();
    let total = falloff[0] + 2.0 * falloff[1..].iter().sum::<f64>();

    let sides: Vec<u32> = falloff[1..]
        .iter()
        .map(|w| (w / total * 65536.0).round() as u32)
        .collect();
    let center = 65536u32
        .checked_sub(2 * sides.iter().sum::<u32>())
        .ok_or_else(|| ChromaError::render("gaussian kernel side taps exceed unity"))?;

    let mut kernel: Vec<u32> = sides.iter().rev().copied().collect();
    kernel.push(center);
    kernel.extend_from_slice(&sides);
    Ok(kernel)
}

#[derive(Clone, Copy)]
struct Dims {
    width: i32,
    height: i32,
    channels: usize,
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn pass(src: &[u8], dst: &mut [u8], d: Dims, k: &[u32], axis: Axis) {
    let radius = (k.len() / 2) as i32;
    for y in 0..d.height {
        for x in 0..d.width {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let delta = ki as i32 - radius;
                let (sx, sy) = match axis {
                    Axis::Horizontal => ((x + delta).clamp(0, d.width - 1), y),
                    Axis::Vertical => (x, (y + delta).clamp(0, d.height - 1)),
                };
                let idx = ((sy * d.width + sx) as usize) * d.channels;
                for (c, a) in acc.iter_mut().take(d.channels).enumerate() {
                    *a += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * d.width + x) as usize) * d.channels;
            for (c, a) in acc.iter().take(d.channels).enumerate() {
                dst[out_idx + c] = q16_to_u8(*a);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
