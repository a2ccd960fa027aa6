use std::path::{Path, PathBuf};

use crate::{
    assets::output::write_rgba_png,
    foundation::error::ChromaResult,
    viewer::{
        context::{ViewerConfig, ViewerContext},
        raster::Renderer,
        texture::CubeTextures,
    },
};

/// File name of frame `index` in a headless sequence.
pub fn frame_file_name(index: u32) -> String {
    format!("cube_{index:04}.png")
}

/// Advance and render `frames` frames, writing each as a PNG into `out_dir`.
pub fn render_sequence(
    ctx: &mut ViewerContext,
    textures: &CubeTextures,
    frames: u32,
    out_dir: &Path,
) -> ChromaResult<Vec<PathBuf>> {
    let mut renderer = Renderer::new(ctx.width, ctx.height)?;
    let mut written = Vec::with_capacity(frames as usize);
    for index in 0..frames {
        ctx.advance();
        let frame = renderer.render(ctx, textures)?;
        let path = out_dir.join(frame_file_name(index));
        write_rgba_png(&path, &frame.to_rgba_image()?)?;
        tracing::debug!(index, path = %path.display(), "wrote cube frame");
        written.push(path);
    }
    Ok(written)
}

/// Load textures for `cfg` and render a headless sequence.
#[tracing::instrument(skip(cfg), fields(out_dir = %out_dir.display()))]
pub fn run_headless(cfg: &ViewerConfig, frames: u32, out_dir: &Path) -> ChromaResult<Vec<PathBuf>> {
    let textures = CubeTextures::load(cfg)?;
    let mut ctx = ViewerContext::new(cfg);
    let written = render_sequence(&mut ctx, &textures, frames, out_dir)?;
    tracing::info!(frames = written.len(), mode = ctx.mode.label(), "rendered cube frames");
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/session.rs"]
mod tests;
