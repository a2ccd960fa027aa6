use std::path::Path;

use image::RgbImage;

use crate::foundation::error::{ChromaError, ChromaResult};

/// Decode any supported image format and convert it to RGB.
pub fn decode_rgb(bytes: &[u8]) -> ChromaResult<RgbImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ChromaError::decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgb8())
}

/// Read and decode an image file as RGB.
///
/// A nonexistent path is [`ChromaError::MissingResource`]; unreadable or corrupt data is
/// [`ChromaError::Decode`].
pub fn read_rgb(path: &Path) -> ChromaResult<RgbImage> {
    if !path.is_file() {
        return Err(ChromaError::missing(format!(
            "image file '{}' not found",
            path.display()
        )));
    }
    let bytes = std::fs::read(path)
        .map_err(|e| ChromaError::decode(format!("read image '{}': {e}", path.display())))?;
    decode_rgb(&bytes)
}

/// Resize to exactly `width x height` with a Lanczos3 filter; a no-op when already that size.
pub fn resize_rgb(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    image::imageops::resize(img, width, height, image::imageops::FilterType::Lanczos3)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
