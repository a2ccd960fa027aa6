//! Background textures: a blurred noise field, multi-octave clouds, and
//! image files darkened for use behind text.

use std::path::Path;

use image::{GrayImage, RgbImage};

use crate::{
    assets::decode::{read_rgb, resize_rgb},
    effects::{adjust::enhance_brightness, blur::gaussian_blur_rgb},
    foundation::{
        core::Canvas,
        error::{ChromaError, ChromaResult},
        math::MinstdRng,
    },
};

/// Blur applied to the raw noise field.
pub const NOISE_BLUR_SIGMA: f32 = 2.0;
/// Blur applied to the summed cloud octaves.
pub const CLOUDS_BLUR_SIGMA: f32 = 1.0;
/// Number of cloud octaves; octave `k` is sampled at `1 / 2^k` resolution.
pub const CLOUD_OCTAVES: u32 = 4;
/// Brightness kept by [`load_texture`].
pub const TEXTURE_BRIGHTNESS: f32 = 0.2;

/// Uniform RGB noise smoothed by a Gaussian blur.
pub fn generate_noise_texture(canvas: Canvas, seed: u64) -> ChromaResult<RgbImage> {
    canvas.validate()?;
    let mut rng = MinstdRng::new(seed);
    let raw: Vec<u8> = (0..canvas.pixel_count() * 3).map(|_| rng.next_u8()).collect();
    let noise = RgbImage::from_raw(canvas.width, canvas.height, raw)
        .ok_or_else(|| ChromaError::render("noise buffer does not match canvas"))?;
    gaussian_blur_rgb(&noise, NOISE_BLUR_SIGMA)
}

/// Grayscale cloud pattern built from upscaled noise octaves, returned as RGB.
pub fn generate_clouds_texture(canvas: Canvas, seed: u64) -> ChromaResult<RgbImage> {
    canvas.validate()?;
    let mut rng = MinstdRng::new(seed);
    let mut clouds: Option<GrayImage> = None;

    for octave in 0..CLOUD_OCTAVES {
        let scale = 1u32 << octave;
        let w = (canvas.width / scale).max(1);
        let h = (canvas.height / scale).max(1);
        let small = GrayImage::from_fn(w, h, |_, _| image::Luma([rng.next_u8()]));
        let layer = image::imageops::resize(
            &small,
            canvas.width,
            canvas.height,
            image::imageops::FilterType::Lanczos3,
        );

        clouds = Some(match clouds {
            None => layer,
            Some(mut acc) => {
                for (a, b) in acc.pixels_mut().zip(layer.pixels()) {
                    a.0[0] = ((u16::from(a.0[0]) + u16::from(b.0[0]) + 1) / 2) as u8;
                }
                acc
            }
        });
    }

    let gray = clouds.unwrap_or_else(|| GrayImage::new(canvas.width, canvas.height));
    let rgb = image::DynamicImage::ImageLuma8(gray).to_rgb8();
    gaussian_blur_rgb(&rgb, CLOUDS_BLUR_SIGMA)
}

/// Load `path` as a dark background texture the size of `canvas`.
///
/// A missing file is replaced by the noise texture before darkening. A file that
/// exists but cannot be decoded yields the undarkened noise texture.
#[tracing::instrument(skip(canvas), fields(path = %path.display()))]
pub fn load_texture(path: &Path, canvas: Canvas, seed: u64) -> ChromaResult<RgbImage> {
    canvas.validate()?;
    let base = match read_rgb(path) {
        Ok(img) => resize_rgb(&img, canvas.width, canvas.height),
        Err(ChromaError::MissingResource(msg)) => {
            tracing::info!(%msg, "texture missing, generating noise");
            generate_noise_texture(canvas, seed)?
        }
        Err(e) if e.is_recoverable() => {
            tracing::warn!(error = %e, "texture unreadable, using noise texture");
            return generate_noise_texture(canvas, seed);
        }
        Err(e) => return Err(e),
    };
    Ok(enhance_brightness(&base, TEXTURE_BRIGHTNESS))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/texture.rs"]
mod tests;
