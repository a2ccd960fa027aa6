use super::*;

#[test]
fn source_parsing_splits_urls_from_paths() {
    assert_eq!(
        TextureSource::parse("https://example.com/a.png"),
        TextureSource::Url("https://example.com/a.png".into())
    );
    assert_eq!(
        TextureSource::parse("http://example.com/a.png"),
        TextureSource::Url("http://example.com/a.png".into())
    );
    assert_eq!(
        TextureSource::parse("textures/http.png"),
        TextureSource::File("textures/http.png".into())
    );
}

#[test]
fn missing_face_texture_falls_back_to_red() {
    let tex = load_face_texture("target/missing/face.png").unwrap();
    assert_eq!(tex, Texture::face_fallback());
    assert_eq!((tex.width(), tex.height()), (256, 256));
    assert_eq!(tex.image().get_pixel(17, 200).0, [255, 0, 0]);
}

#[test]
fn missing_env_texture_falls_back_to_ramp() {
    let tex = load_env_texture("target/missing/env.jpg").unwrap();
    assert_eq!((tex.width(), tex.height()), (512, 512));
    assert_eq!(tex.image().get_pixel(0, 0).0, [0, 0, 128]);
    assert_eq!(tex.image().get_pixel(511, 300).0, [255, 150, 128]);
}

#[cfg(not(feature = "net"))]
#[test]
fn urls_without_net_feature_fall_back() {
    let err = TextureSource::parse("https://example.invalid/x.png")
        .fetch()
        .unwrap_err();
    assert!(matches!(err, ChromaError::Network(_)));
    assert_eq!(
        load_face_texture("https://example.invalid/x.png").unwrap(),
        Texture::face_fallback()
    );
}

#[test]
fn env_texture_is_resized() {
    let dir = std::path::PathBuf::from("target/unit-viewer");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("env_small.png");
    RgbImage::from_pixel(8, 4, image::Rgb([10, 200, 30]))
        .save(&path)
        .unwrap();

    let tex = load_env_texture(path.to_str().unwrap()).unwrap();
    assert_eq!((tex.width(), tex.height()), (512, 512));
}

#[test]
fn bilinear_sample_blends_neighbours() {
    let img = RgbImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            image::Rgb([0, 0, 0])
        } else {
            image::Rgb([255, 255, 255])
        }
    });
    let clamp = Texture::new(img.clone(), Wrap::Clamp);
    let mid = clamp.sample(Vec2::new(0.5, 0.5));
    assert!((mid.x - 0.5).abs() < 1e-6);
    assert_eq!(clamp.sample(Vec2::new(0.0, 0.5)), Vec3::ZERO);

    // Repeat wraps the left edge onto the right texel.
    let repeat = Texture::new(img, Wrap::Repeat);
    let edge = repeat.sample(Vec2::new(0.0, 0.5));
    assert!((edge.x - 0.5).abs() < 1e-6);
}

#[test]
fn fallback_set_has_one_texture_per_face() {
    let set = CubeTextures::fallback();
    assert_eq!(set.faces.len(), 6);
    assert_eq!(set.env, Texture::env_fallback());
}
