//! Viewer state and the keyboard state machine that drives it.

use glam::{Mat4, Vec3};

use crate::foundation::error::{ChromaError, ChromaResult};

/// Vertical field of view in degrees.
pub const FOV_Y_DEG: f32 = 45.0;
/// Near clip distance.
pub const Z_NEAR: f32 = 0.1;
/// Far clip distance.
pub const Z_FAR: f32 = 50.0;
/// Fixed tilt applied about the x axis before the spin, in degrees.
pub const BASE_TILT_DEG: f32 = 100.0;

const SPEED_STEP: f32 = 0.5;
const DEFAULT_SPEED: f32 = 0.5;
const FAST_SPEED: f32 = 15.0;
const FAST_THRESHOLD: f32 = 10.0;
const DISTANCE_STEP: f32 = 0.5;

/// How the cube surfaces are shaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Lit face textures.
    #[default]
    TexturedFaces,
    /// Metallic material with the face texture modulated by a sphere-mapped environment.
    ShinyTextured,
}

impl RenderMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::TexturedFaces => Self::ShinyTextured,
            Self::ShinyTextured => Self::TexturedFaces,
        }
    }

    /// Human-readable name for logs and the window title.
    pub fn label(self) -> &'static str {
        match self {
            Self::TexturedFaces => "Textured Faces",
            Self::ShinyTextured => "Combined Shiny/Textured",
        }
    }
}

/// Input events understood by [`ViewerContext::handle_key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewerKey {
    /// Window closed.
    Quit,
    /// Stop the viewer.
    Escape,
    /// Toggle the render mode.
    T,
    /// Spin faster.
    Up,
    /// Spin slower (may go negative).
    Down,
    /// Pause or resume the spin.
    Space,
    /// Jump between fast and default spin.
    R,
    /// Move the camera towards the cube.
    W,
    /// Move the camera away from the cube.
    S,
}

/// Viewer settings loadable from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Face textures (path or http(s) URL) in front, back, top, bottom, right, left order.
    pub face_textures: Vec<String>,
    /// Environment (sphere map) texture, path or URL.
    pub env_texture: String,
    /// Initial render mode.
    pub mode: RenderMode,
    /// Initial spin speed in degrees per frame.
    pub rotation_speed: f32,
    /// Initial camera translation along z.
    pub distance: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            face_textures: [
                "texture_uns.png",
                "texture_uns.png",
                "1_stop_starting.png",
                "2.cross.png",
                "2.png",
                "3_all.png",
            ]
            .map(str::to_string)
            .to_vec(),
            env_texture: "texture_uns.jpg".to_string(),
            mode: RenderMode::TexturedFaces,
            rotation_speed: DEFAULT_SPEED,
            distance: -5.0,
        }
    }
}

impl ViewerConfig {
    /// Check frame size, texture count and numeric fields.
    pub fn validate(&self) -> ChromaResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChromaError::validation("viewer width and height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(ChromaError::validation("viewer frame edges must fit in 16 bits"));
        }
        if self.face_textures.len() != super::cube::CUBE_FACES.len() {
            return Err(ChromaError::validation(format!(
                "expected {} face textures, got {}",
                super::cube::CUBE_FACES.len(),
                self.face_textures.len()
            )));
        }
        if !self.rotation_speed.is_finite() || !self.distance.is_finite() {
            return Err(ChromaError::validation(
                "rotation_speed and distance must be finite",
            ));
        }
        Ok(())
    }
}

/// Mutable state of one viewer session.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerContext {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Current render mode.
    pub mode: RenderMode,
    /// Accumulated rotation about x, y and z in degrees. Only z is applied to the model.
    pub rotation: Vec3,
    /// Degrees added to the y rotation per frame.
    pub rotation_speed: f32,
    /// Camera translation along z.
    pub distance: f32,
    /// False once the user asked to quit.
    pub running: bool,
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl ViewerContext {
    /// Fresh context from a config.
    pub fn new(cfg: &ViewerConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            mode: cfg.mode,
            rotation: Vec3::ZERO,
            rotation_speed: cfg.rotation_speed,
            distance: cfg.distance,
            running: true,
        }
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: ViewerKey) {
        match key {
            ViewerKey::Quit | ViewerKey::Escape => self.running = false,
            ViewerKey::T => {
                self.mode = self.mode.toggled();
                tracing::info!(mode = self.mode.label(), "rendering mode toggled");
            }
            ViewerKey::Up => self.rotation_speed += SPEED_STEP,
            ViewerKey::Down => self.rotation_speed -= SPEED_STEP,
            ViewerKey::Space => {
                self.rotation_speed = if self.rotation_speed == 0.0 {
                    DEFAULT_SPEED
                } else {
                    0.0
                };
            }
            ViewerKey::R => {
                self.rotation_speed = if self.rotation_speed <= FAST_THRESHOLD {
                    FAST_SPEED
                } else {
                    DEFAULT_SPEED
                };
            }
            ViewerKey::W => self.distance += DISTANCE_STEP,
            ViewerKey::S => self.distance -= DISTANCE_STEP,
        }
    }

    /// Step the rotation by one frame.
    pub fn advance(&mut self) {
        let s = self.rotation_speed;
        self.rotation += Vec3::new(s * 0.7, s, s * 0.3);
    }

    /// Object-to-eye transform: camera translation, fixed tilt, then the z spin.
    pub fn model_view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.distance))
            * Mat4::from_rotation_x(BASE_TILT_DEG.to_radians())
            * Mat4::from_rotation_z(self.rotation.z.to_radians())
    }

    /// OpenGL-style perspective projection for the frame aspect ratio.
    pub fn projection(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        Mat4::perspective_rh_gl(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/context.rs"]
mod tests;
