use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::ChromaResult;

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> ChromaResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write an opaque RGB image as PNG.
pub fn write_rgb_png(path: &Path, img: &image::RgbImage) -> ChromaResult<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Write a straight-alpha RGBA image as PNG.
pub fn write_rgba_png(path: &Path, img: &image::RgbaImage) -> ChromaResult<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/output.rs"]
mod tests;
