use super::*;

#[test]
fn normals_point_outward_and_match_winding() {
    for face in &CUBE_FACES {
        let [a, b, c, _] = face.vertices;
        let winding = (b - a).cross(c - a).normalize();
        assert!((winding - face.normal).length() < 1e-6, "{}", face.name);

        let center = face.vertices.iter().copied().sum::<Vec3>() / 4.0;
        assert!((center - face.normal).length() < 1e-6, "{}", face.name);
    }
}

#[test]
fn every_corner_is_on_the_unit_cube() {
    for face in &CUBE_FACES {
        for v in face.vertices {
            assert_eq!(v.abs(), Vec3::ONE);
        }
    }
}

#[test]
fn uvs_span_the_full_texture() {
    for face in &CUBE_FACES {
        let min = face.uvs.iter().fold(Vec2::splat(1.0), |m, uv| m.min(*uv));
        let max = face.uvs.iter().fold(Vec2::ZERO, |m, uv| m.max(*uv));
        assert_eq!((min, max), (Vec2::ZERO, Vec2::ONE), "{}", face.name);
    }
}

#[test]
fn faces_are_in_binding_order() {
    let names: Vec<_> = CUBE_FACES.iter().map(|f| f.name).collect();
    assert_eq!(names, ["front", "back", "top", "bottom", "right", "left"]);
}
