//! Software renderer for the lit, textured cube.
//!
//! Per-vertex lighting in eye space (Gouraud), near-plane clipping, back-face
//! culling, a depth buffer and perspective-correct interpolation of both the
//! face texture coordinates and the sphere-map coordinates.

use glam::{Mat3, Mat4, Vec2, Vec3, Vec4, Vec4Swizzles as _};

use crate::{
    foundation::error::{ChromaError, ChromaResult},
    viewer::{
        context::{RenderMode, ViewerContext},
        cube::CUBE_FACES,
        texture::{CubeTextures, Texture},
    },
};

/// Frame clear color.
pub const CLEAR_RGBA: [u8; 4] = [0, 0, 0, 255];
/// Scene ambient term added to every lit vertex.
pub const GLOBAL_AMBIENT: f32 = 0.2;

/// A positional white light in eye space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    /// Eye-space position.
    pub position: Vec3,
    /// Ambient intensity.
    pub ambient: f32,
    /// Diffuse intensity.
    pub diffuse: f32,
    /// Specular intensity.
    pub specular: f32,
}

/// The viewer's single light.
pub const LIGHT: Light = Light {
    position: Vec3::new(5.0, 5.0, 5.0),
    ambient: 0.2,
    diffuse: 0.8,
    specular: 1.0,
};

/// Gray surface reflectances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Ambient reflectance.
    pub ambient: f32,
    /// Diffuse reflectance.
    pub diffuse: f32,
    /// Specular reflectance.
    pub specular: f32,
    /// Specular exponent.
    pub shininess: f32,
    /// Self-illumination.
    pub emission: f32,
}

/// Material of [`RenderMode::TexturedFaces`].
pub const TEXTURED_MATERIAL: Material = Material {
    ambient: 0.2,
    diffuse: 0.8,
    specular: 0.2,
    shininess: 30.0,
    emission: 0.0,
};

/// Material of [`RenderMode::ShinyTextured`].
pub const METALLIC_MATERIAL: Material = Material {
    ambient: 0.1,
    diffuse: 0.3,
    specular: 0.9,
    shininess: 128.0,
    emission: 0.1,
};

impl RenderMode {
    /// Surface material used by this mode.
    pub fn material(self) -> Material {
        match self {
            Self::TexturedFaces => TEXTURED_MATERIAL,
            Self::ShinyTextured => METALLIC_MATERIAL,
        }
    }
}

/// Blinn-Phong intensity at an eye-space point with a non-local viewer.
pub fn light_intensity(material: &Material, light: &Light, pos: Vec3, normal: Vec3) -> f32 {
    let l = (light.position - pos).normalize_or_zero();
    let n_dot_l = normal.dot(l).max(0.0);
    let mut i = material.emission
        + material.ambient * GLOBAL_AMBIENT
        + material.ambient * light.ambient
        + material.diffuse * light.diffuse * n_dot_l;
    if n_dot_l > 0.0 {
        let h = (l + Vec3::Z).normalize_or_zero();
        let n_dot_h = normal.dot(h).max(0.0);
        i += material.specular * light.specular * n_dot_h.powf(material.shininess);
    }
    i.clamp(0.0, 1.0)
}

/// Sphere-map texture coordinates for an eye-space point and unit normal.
pub fn sphere_map_uv(pos: Vec3, normal: Vec3) -> Vec2 {
    let u = pos.normalize_or_zero();
    let r = u - 2.0 * normal * normal.dot(u);
    let m = 2.0 * (r.x * r.x + r.y * r.y + (r.z + 1.0) * (r.z + 1.0)).sqrt();
    if m <= f32::EPSILON {
        return Vec2::splat(0.5);
    }
    Vec2::new(r.x / m + 0.5, r.y / m + 0.5)
}

/// An opaque RGBA8 frame, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA bytes.
    pub data: Vec<u8>,
}

impl Frame {
    fn cleared(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: CLEAR_RGBA.repeat(width as usize * height as usize),
        }
    }

    /// Pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Copy into an `image` buffer.
    pub fn to_rgba_image(&self) -> ChromaResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| ChromaError::render("frame buffer does not match its size"))
    }

    /// Pack as `0x00RRGGBB` words, the layout window surfaces expect.
    pub fn to_xrgb_u32(&self) -> Vec<u32> {
        self.data
            .chunks_exact(4)
            .map(|px| (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]))
            .collect()
    }

    fn put(&mut self, index: usize, rgb: Vec3) {
        let c = (rgb.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        self.data[index * 4..index * 4 + 4].copy_from_slice(&[c.x as u8, c.y as u8, c.z as u8, 255]);
    }
}

#[derive(Clone, Copy, Debug)]
struct ClipVertex {
    pos: Vec4,
    uv: Vec2,
    env_uv: Vec2,
    light: f32,
}

impl ClipVertex {
    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            pos: self.pos.lerp(other.pos, t),
            uv: self.uv.lerp(other.uv, t),
            env_uv: self.env_uv.lerp(other.env_uv, t),
            light: self.light + (other.light - self.light) * t,
        }
    }

    fn near_distance(self) -> f32 {
        self.pos.z + self.pos.w
    }
}

#[derive(Clone, Copy, Debug)]
struct ScreenVertex {
    x: f32,
    y: f32,
    z: f32,
    inv_w: f32,
    uv: Vec2,
    env_uv: Vec2,
    light: f32,
}

/// Reusable color and depth buffers.
#[derive(Clone, Debug)]
pub struct Renderer {
    frame: Frame,
    depth: Vec<f32>,
}

impl Renderer {
    /// Buffers for `width x height` frames.
    pub fn new(width: u32, height: u32) -> ChromaResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChromaError::validation("frame width and height must be > 0"));
        }
        Ok(Self {
            frame: Frame::cleared(width, height),
            depth: vec![f32::INFINITY; width as usize * height as usize],
        })
    }

    /// Last rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Draw the cube as seen from `ctx`.
    pub fn render(&mut self, ctx: &ViewerContext, textures: &CubeTextures) -> ChromaResult<&Frame> {
        if (ctx.width, ctx.height) != (self.frame.width, self.frame.height) {
            *self = Self::new(ctx.width, ctx.height)?;
        }
        if textures.faces.len() != CUBE_FACES.len() {
            return Err(ChromaError::validation(format!(
                "expected {} face textures, got {}",
                CUBE_FACES.len(),
                textures.faces.len()
            )));
        }

        self.frame.data.chunks_exact_mut(4).for_each(|px| px.copy_from_slice(&CLEAR_RGBA));
        self.depth.fill(f32::INFINITY);

        let model_view = ctx.model_view();
        let projection = ctx.projection();
        let normal_matrix = Mat3::from_mat4(model_view).inverse().transpose();
        let material = ctx.mode.material();

        for (face, texture) in CUBE_FACES.iter().zip(&textures.faces) {
            let normal = (normal_matrix * face.normal).normalize_or_zero();
            let verts: Vec<ClipVertex> = face
                .vertices
                .iter()
                .zip(face.uvs)
                .map(|(&v, uv)| {
                    let eye = model_view * v.extend(1.0);
                    let eye3 = eye.xyz();
                    ClipVertex {
                        pos: projection * eye,
                        uv,
                        env_uv: sphere_map_uv(eye3, normal),
                        light: light_intensity(&material, &LIGHT, eye3, normal),
                    }
                })
                .collect();

            for tri in face.triangles() {
                let polygon = clip_near([verts[tri[0]], verts[tri[1]], verts[tri[2]]]);
                for i in 1..polygon.len().saturating_sub(1) {
                    let screen = [
                        self.to_screen(polygon[0]),
                        self.to_screen(polygon[i]),
                        self.to_screen(polygon[i + 1]),
                    ];
                    self.fill_triangle(screen, ctx.mode, texture, textures);
                }
            }
        }
        Ok(&self.frame)
    }

    fn to_screen(&self, v: ClipVertex) -> ScreenVertex {
        let inv_w = 1.0 / v.pos.w;
        let ndc = v.pos.xyz() * inv_w;
        ScreenVertex {
            x: (ndc.x + 1.0) * 0.5 * self.frame.width as f32,
            y: (1.0 - ndc.y) * 0.5 * self.frame.height as f32,
            z: ndc.z,
            inv_w,
            uv: v.uv,
            env_uv: v.env_uv,
            light: v.light,
        }
    }

    fn fill_triangle(
        &mut self,
        [a, b, c]: [ScreenVertex; 3],
        mode: RenderMode,
        texture: &Texture,
        textures: &CubeTextures,
    ) {
        // Screen y points down, so front faces wind clockwise here.
        let area = edge(a.x, a.y, b.x, b.y, c.x, c.y);
        if area >= 0.0 {
            return;
        }

        let (w, h) = (self.frame.width as f32, self.frame.height as f32);
        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as u32;
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as u32;
        let max_x = a.x.max(b.x).max(c.x).ceil().min(w) as u32;
        let max_y = a.y.max(b.y).max(c.y).ceil().min(h) as u32;

        for py in min_y..max_y {
            for px in min_x..max_x {
                let (sx, sy) = (px as f32 + 0.5, py as f32 + 0.5);
                let w0 = edge(b.x, b.y, c.x, c.y, sx, sy) / area;
                let w1 = edge(c.x, c.y, a.x, a.y, sx, sy) / area;
                let w2 = edge(a.x, a.y, b.x, b.y, sx, sy) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let z = w0 * a.z + w1 * b.z + w2 * c.z;
                let index = py as usize * self.frame.width as usize + px as usize;
                if z > 1.0 || z >= self.depth[index] {
                    continue;
                }

                let q = w0 * a.inv_w + w1 * b.inv_w + w2 * c.inv_w;
                if q <= 0.0 {
                    continue;
                }
                let (p0, p1, p2) = (w0 * a.inv_w / q, w1 * b.inv_w / q, w2 * c.inv_w / q);
                let uv = a.uv * p0 + b.uv * p1 + c.uv * p2;
                let light = a.light * p0 + b.light * p1 + c.light * p2;

                let mut rgb = texture.sample(uv) * light;
                if mode == RenderMode::ShinyTextured {
                    let env_uv = a.env_uv * p0 + b.env_uv * p1 + c.env_uv * p2;
                    rgb *= textures.env.sample(env_uv);
                }

                self.depth[index] = z;
                self.frame.put(index, rgb);
            }
        }
    }
}

fn edge(ax: f32, ay: f32, bx: f32, by: f32, px: f32, py: f32) -> f32 {
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

/// Clip a triangle against the near plane (`z >= -w`); yields 0, 3 or 4 vertices.
fn clip_near(tri: [ClipVertex; 3]) -> Vec<ClipVertex> {
    let mut out = Vec::with_capacity(4);
    for i in 0..3 {
        let cur = tri[i];
        let next = tri[(i + 1) % 3];
        let (dc, dn) = (cur.near_distance(), next.near_distance());
        if dc >= 0.0 {
            out.push(cur);
        }
        if (dc >= 0.0) != (dn >= 0.0) {
            out.push(cur.lerp(next, dc / (dc - dn)));
        }
    }
    out
}

/// Render one frame for `ctx` into a fresh buffer.
pub fn render_frame(ctx: &ViewerContext, textures: &CubeTextures) -> ChromaResult<Frame> {
    let mut renderer = Renderer::new(ctx.width, ctx.height)?;
    renderer.render(ctx, textures)?;
    Ok(renderer.frame)
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/raster.rs"]
mod tests;
