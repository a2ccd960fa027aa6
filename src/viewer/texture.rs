//! Viewer textures: loading from files or URLs, procedural fallbacks and
//! bilinear sampling.

use std::path::PathBuf;

use glam::{Vec2, Vec3};
use image::RgbImage;

use crate::{
    assets::decode::{decode_rgb, resize_rgb},
    foundation::error::{ChromaError, ChromaResult},
};

/// Edge of the square face-texture fallback.
pub const FACE_FALLBACK_SIZE: u32 = 256;
/// Edge of the square environment texture.
pub const ENV_SIZE: u32 = 512;

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wrap {
    /// Tile the texture.
    Repeat,
    /// Stretch the edge texels.
    Clamp,
}

/// An RGB texture with bilinear filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    image: RgbImage,
    wrap: Wrap,
}

impl Texture {
    /// Wrap a decoded image.
    pub fn new(image: RgbImage, wrap: Wrap) -> Self {
        Self { image, wrap }
    }

    /// Opaque red square used when a face texture cannot be loaded.
    pub fn face_fallback() -> Self {
        Self::new(
            RgbImage::from_pixel(FACE_FALLBACK_SIZE, FACE_FALLBACK_SIZE, image::Rgb([255, 0, 0])),
            Wrap::Repeat,
        )
    }

    /// Red/green ramp used when the environment texture cannot be loaded.
    pub fn env_fallback() -> Self {
        Self::new(
            RgbImage::from_fn(ENV_SIZE, ENV_SIZE, |x, y| {
                image::Rgb([(x / 2) as u8, (y / 2) as u8, 128])
            }),
            Wrap::Clamp,
        )
    }

    /// Width in texels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in texels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Underlying image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Bilinear sample at `uv`, channels in `[0, 1]`. Row 0 is `v = 0`.
    pub fn sample(&self, uv: Vec2) -> Vec3 {
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return Vec3::ZERO;
        }
        let x = uv.x * w as f32 - 0.5;
        let y = uv.y * h as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;

        let texel = |tx: i64, ty: i64| -> Vec3 {
            let px = self.image.get_pixel(self.resolve(tx, w), self.resolve(ty, h)).0;
            Vec3::new(f32::from(px[0]), f32::from(px[1]), f32::from(px[2])) / 255.0
        };
        let (ix, iy) = (x0 as i64, y0 as i64);
        let top = texel(ix, iy).lerp(texel(ix + 1, iy), fx);
        let bottom = texel(ix, iy + 1).lerp(texel(ix + 1, iy + 1), fx);
        top.lerp(bottom, fy)
    }

    fn resolve(&self, i: i64, n: u32) -> u32 {
        let n = i64::from(n);
        match self.wrap {
            Wrap::Repeat => i.rem_euclid(n) as u32,
            Wrap::Clamp => i.clamp(0, n - 1) as u32,
        }
    }
}

/// Where a texture comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextureSource {
    /// Local file.
    File(PathBuf),
    /// `http://` or `https://` URL.
    Url(String),
}

impl TextureSource {
    /// Classify a path-or-URL string.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::File(PathBuf::from(s))
        }
    }

    /// Raw encoded bytes of the texture.
    pub fn fetch(&self) -> ChromaResult<Vec<u8>> {
        match self {
            Self::File(path) => {
                if !path.is_file() {
                    return Err(ChromaError::missing(format!(
                        "texture file '{}' not found",
                        path.display()
                    )));
                }
                std::fs::read(path).map_err(|e| {
                    ChromaError::decode(format!("read texture '{}': {e}", path.display()))
                })
            }
            Self::Url(url) => fetch_url(url),
        }
    }
}

impl std::fmt::Display for TextureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(feature = "net")]
fn fetch_url(url: &str) -> ChromaResult<Vec<u8>> {
    use std::io::Read as _;

    const MAX_TEXTURE_BYTES: u64 = 64 * 1024 * 1024;

    let response = ureq::get(url)
        .call()
        .map_err(|e| ChromaError::network(format!("GET '{url}': {e}")))?;
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_TEXTURE_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| ChromaError::network(format!("read body of '{url}': {e}")))?;
    Ok(bytes)
}

#[cfg(not(feature = "net"))]
fn fetch_url(url: &str) -> ChromaResult<Vec<u8>> {
    Err(ChromaError::network(format!(
        "cannot fetch '{url}': built without the `net` feature"
    )))
}

/// Load a face texture, or the red fallback on any recoverable failure.
pub fn load_face_texture(source: &str) -> ChromaResult<Texture> {
    let source = TextureSource::parse(source);
    tracing::debug!(%source, "loading face texture");
    match source.fetch().and_then(|bytes| decode_rgb(&bytes)) {
        Ok(img) => Ok(Texture::new(img, Wrap::Repeat)),
        Err(e) if e.is_recoverable() => {
            tracing::warn!(%source, error = %e, "face texture unavailable, using fallback");
            Ok(Texture::face_fallback())
        }
        Err(e) => Err(e),
    }
}

/// Load the environment texture resized to [`ENV_SIZE`] squared, or the ramp fallback.
pub fn load_env_texture(source: &str) -> ChromaResult<Texture> {
    let source = TextureSource::parse(source);
    tracing::debug!(%source, "loading environment texture");
    match source.fetch().and_then(|bytes| decode_rgb(&bytes)) {
        Ok(img) => Ok(Texture::new(resize_rgb(&img, ENV_SIZE, ENV_SIZE), Wrap::Clamp)),
        Err(e) if e.is_recoverable() => {
            tracing::warn!(%source, error = %e, "environment texture unavailable, using fallback");
            Ok(Texture::env_fallback())
        }
        Err(e) => Err(e),
    }
}

/// Every texture a cube render needs.
#[derive(Clone, Debug)]
pub struct CubeTextures {
    /// One texture per entry of [`super::cube::CUBE_FACES`].
    pub faces: Vec<Texture>,
    /// Sphere-mapped environment.
    pub env: Texture,
}

impl CubeTextures {
    /// Load the face and environment textures named in `cfg`.
    #[tracing::instrument(skip_all)]
    pub fn load(cfg: &super::context::ViewerConfig) -> ChromaResult<Self> {
        cfg.validate()?;
        let faces = cfg
            .face_textures
            .iter()
            .map(|s| load_face_texture(s))
            .collect::<ChromaResult<Vec<_>>>()?;
        let env = load_env_texture(&cfg.env_texture)?;
        Ok(Self { faces, env })
    }

    /// All fallbacks, no IO.
    pub fn fallback() -> Self {
        Self {
            faces: vec![Texture::face_fallback(); super::cube::CUBE_FACES.len()],
            env: Texture::env_fallback(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/texture.rs"]
mod tests;
