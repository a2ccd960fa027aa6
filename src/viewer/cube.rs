use glam::{Vec2, Vec3};

/// One quad of the unit cube with a flat normal and per-corner texture coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeFace {
    /// Face name, used in logs.
    pub name: &'static str,
    /// Corners in counter-clockwise order seen from outside.
    pub vertices: [Vec3; 4],
    /// Outward normal.
    pub normal: Vec3,
    /// Texture coordinates matching `vertices`.
    pub uvs: [Vec2; 4],
}

const fn v3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

const fn v2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

const UV_ACROSS: [Vec2; 4] = [v2(0.0, 0.0), v2(1.0, 0.0), v2(1.0, 1.0), v2(0.0, 1.0)];
const UV_UP: [Vec2; 4] = [v2(0.0, 0.0), v2(0.0, 1.0), v2(1.0, 1.0), v2(1.0, 0.0)];

/// The six faces of the `[-1, 1]^3` cube, in texture-binding order.
pub const CUBE_FACES: [CubeFace; 6] = [
    CubeFace {
        name: "front",
        vertices: [v3(-1.0, -1.0, 1.0), v3(1.0, -1.0, 1.0), v3(1.0, 1.0, 1.0), v3(-1.0, 1.0, 1.0)],
        normal: v3(0.0, 0.0, 1.0),
        uvs: UV_ACROSS,
    },
    CubeFace {
        name: "back",
        vertices: [v3(-1.0, -1.0, -1.0), v3(-1.0, 1.0, -1.0), v3(1.0, 1.0, -1.0), v3(1.0, -1.0, -1.0)],
        normal: v3(0.0, 0.0, -1.0),
        uvs: UV_UP,
    },
    CubeFace {
        name: "top",
        vertices: [v3(-1.0, 1.0, -1.0), v3(-1.0, 1.0, 1.0), v3(1.0, 1.0, 1.0), v3(1.0, 1.0, -1.0)],
        normal: v3(0.0, 1.0, 0.0),
        uvs: UV_UP,
    },
    CubeFace {
        name: "bottom",
        vertices: [v3(-1.0, -1.0, -1.0), v3(1.0, -1.0, -1.0), v3(1.0, -1.0, 1.0), v3(-1.0, -1.0, 1.0)],
        normal: v3(0.0, -1.0, 0.0),
        uvs: UV_ACROSS,
    },
    CubeFace {
        name: "right",
        vertices: [v3(1.0, -1.0, -1.0), v3(1.0, 1.0, -1.0), v3(1.0, 1.0, 1.0), v3(1.0, -1.0, 1.0)],
        normal: v3(1.0, 0.0, 0.0),
        uvs: UV_UP,
    },
    CubeFace {
        name: "left",
        vertices: [v3(-1.0, -1.0, -1.0), v3(-1.0, -1.0, 1.0), v3(-1.0, 1.0, 1.0), v3(-1.0, 1.0, -1.0)],
        normal: v3(-1.0, 0.0, 0.0),
        uvs: UV_ACROSS,
    },
];

impl CubeFace {
    /// Split the quad into two triangles sharing corner 0.
    pub fn triangles(&self) -> [[usize; 3]; 2] {
        [[0, 1, 2], [0, 2, 3]]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/cube.rs"]
mod tests;
