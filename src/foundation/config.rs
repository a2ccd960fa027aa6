use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use anyhow::Context as _;
use serde::de::DeserializeOwned;

use crate::foundation::{
    core::{Canvas, MAX_FONT_SIZE_PX},
    error::{ChromaError, ChromaResult},
};

/// Environment variable that pins the noise-texture seed.
pub const NOISE_SEED_ENV: &str = "CHROMATEXT_NOISE_SEED";

/// Inputs of one text-effect generation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Text to render; `\n` starts a new line.
    pub text: String,
    /// Font file; the built-in bitmap font is used when it cannot be loaded.
    pub font_path: PathBuf,
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Destination PNG.
    pub output_path: PathBuf,
    /// Optional background texture, only consumed by the `noise` tooling.
    pub texture_path: Option<PathBuf>,
    /// Seed for the noise-texture fallback.
    pub noise_seed: Option<u64>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            text: "stop starting\nstart finishing".to_string(),
            font_path: PathBuf::from("Daft Font.TTF"),
            font_size_px: 100.0,
            width: 1000,
            height: 600,
            output_path: PathBuf::from("daft_punk_effect.png"),
            texture_path: Some(PathBuf::from("texture.png")),
            noise_seed: None,
        }
    }
}

impl EffectConfig {
    /// Validated canvas for this config.
    pub fn canvas(&self) -> ChromaResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Check sizes before any work starts.
    pub fn validate(&self) -> ChromaResult<()> {
        self.canvas()?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChromaError::validation(
                "font_size_px must be finite and > 0",
            ));
        }
        if self.font_size_px > MAX_FONT_SIZE_PX {
            return Err(ChromaError::validation(format!(
                "font_size_px must be <= {MAX_FONT_SIZE_PX}, got {}",
                self.font_size_px
            )));
        }
        Ok(())
    }

    /// Seed from the config, then [`NOISE_SEED_ENV`], then the wall clock.
    pub fn resolved_noise_seed(&self) -> u64 {
        if let Some(seed) = self.noise_seed {
            return seed;
        }
        std::env::var(NOISE_SEED_ENV)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0)
            })
    }
}

/// Read any JSON config file.
pub fn load_json_config<T: DeserializeOwned>(path: &Path) -> ChromaResult<T> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r)
        .map_err(|e| ChromaError::serde(format!("parse config '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
