//! chromatext renders a layered chrome/rainbow text effect to PNG and ships a
//! small software-rendered, textured cube viewer.
//!
//! # Text effect pipeline
//!
//! 1. **Shape**: `Font + text -> ShapedText` (Parley layout or the built-in 5x7 bitmap font)
//! 2. **Layers**: each layer is an ordered list of [`Stamp`]s of one [`GlyphMask`]
//!    (chrome bevel, offset shadow, rainbow text over a white glow)
//! 3. **Composite**: back-to-front source-over onto a black background
//! 4. **Finish**: flatten to RGB, then contrast and color enhancement
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs give bit-identical images. Only the noise
//!   texture consumes randomness, and it is seeded.
//! - **Fallbacks over failures**: missing fonts and textures are replaced by generated
//!   defaults with a `tracing` warning; only invalid sizes and output IO are errors.
//! - **Premultiplied RGBA8** for every intermediate layer.
//!
//! # Viewer
//!
//! [`ViewerContext`] holds all viewer state and is driven by [`ViewerKey`] presses and
//! [`ViewerContext::advance`]. [`Renderer`] draws the cube into RGBA [`Frame`]s; the
//! `window` feature presents them interactively, otherwise [`run_headless`] writes PNGs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod foundation;
mod text;
mod viewer;

pub use assets::decode::{decode_rgb, read_rgb, resize_rgb};
pub use assets::output::{ensure_parent_dir, write_rgb_png, write_rgba_png};
pub use assets::texture::{
    CLOUD_OCTAVES, CLOUDS_BLUR_SIGMA, NOISE_BLUR_SIGMA, TEXTURE_BRIGHTNESS,
    generate_clouds_texture, generate_noise_texture, load_texture,
};
pub use effects::adjust::{
    FINAL_COLOR, FINAL_CONTRAST, enhance_brightness, enhance_color, enhance_contrast,
};
pub use effects::blur::{blur_interleaved, gaussian_blur_rgb};
pub use effects::composite::{Layer, PremulRgba8, over, over_in_place};
pub use effects::gradient::{rainbow_color, rainbow_gradient};
pub use effects::layers::{
    RAINBOW_OFFSET, SHADOW_OFFSET, background_layer, chrome_layer, chrome_stamps, glow_stamps,
    rainbow_layer, shadow_layer,
};
pub use effects::pipeline::{
    RAINBOW_OPACITY, TextEffectLayers, finish, generate_text_effect, render_text_effect,
    render_to_file,
};
pub use effects::stamp::{Stamp, apply_stamp, apply_stamps, ring_offsets, ring_stamps};
pub use foundation::config::{EffectConfig, NOISE_SEED_ENV, load_json_config};
pub use foundation::core::{
    Canvas, EFFECT_PADDING, MAX_CANVAS_EDGE, MAX_FONT_SIZE_PX, PixelPos, Rgba8,
};
pub use foundation::error::{ChromaError, ChromaResult};
pub use foundation::math::{MinstdRng, hsv_to_rgb8, luma601};
pub use text::bitmap::{ADVANCE, BitmapFont, GLYPH_H, GLYPH_W, LINE_PITCH, glyph5x7};
pub use text::font::{BUILTIN_FAMILY, Font, ShapedText};
pub use text::layout::{TextBrushRgba8, TextLayoutEngine};
pub use text::mask::GlyphMask;
pub use viewer::context::{
    BASE_TILT_DEG, FOV_Y_DEG, RenderMode, ViewerConfig, ViewerContext, ViewerKey, Z_FAR, Z_NEAR,
};
pub use viewer::cube::{CUBE_FACES, CubeFace};
pub use viewer::raster::{
    CLEAR_RGBA, Frame, GLOBAL_AMBIENT, LIGHT, Light, METALLIC_MATERIAL, Material, Renderer,
    TEXTURED_MATERIAL, light_intensity, render_frame, sphere_map_uv,
};
pub use viewer::session::{frame_file_name, render_sequence, run_headless};
pub use viewer::texture::{
    CubeTextures, ENV_SIZE, FACE_FALLBACK_SIZE, Texture, TextureSource, Wrap, load_env_texture,
    load_face_texture,
};
#[cfg(feature = "window")]
pub use viewer::window::{map_key, run_window};
