use super::*;

fn canvas() -> Canvas {
    Canvas::new(24, 16).unwrap()
}

#[test]
fn noise_is_seeded_and_sized() {
    let a = generate_noise_texture(canvas(), 7).unwrap();
    let b = generate_noise_texture(canvas(), 7).unwrap();
    let c = generate_noise_texture(canvas(), 8).unwrap();
    assert_eq!(a.dimensions(), (24, 16));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn noise_blur_narrows_the_value_range() {
    let img = generate_noise_texture(Canvas::new(64, 64).unwrap(), 1).unwrap();
    let (min, max) = img
        .as_raw()
        .iter()
        .fold((255u8, 0u8), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    assert!(max - min < 200, "range {min}..{max}");
}

#[test]
fn clouds_are_gray_and_deterministic() {
    let a = generate_clouds_texture(canvas(), 3).unwrap();
    assert_eq!(a, generate_clouds_texture(canvas(), 3).unwrap());
    assert!(a.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
}

#[test]
fn missing_texture_is_dark_noise() {
    let img = load_texture(Path::new("target/missing/texture.png"), canvas(), 5).unwrap();
    let noise = generate_noise_texture(canvas(), 5).unwrap();
    assert_eq!(img, enhance_brightness(&noise, TEXTURE_BRIGHTNESS));
}

#[test]
fn corrupt_texture_is_plain_noise() {
    let dir = std::path::PathBuf::from("target/unit-assets");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("corrupt_texture.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let img = load_texture(&path, canvas(), 9).unwrap();
    assert_eq!(img, generate_noise_texture(canvas(), 9).unwrap());
}

#[test]
fn real_texture_is_resized_and_darkened() {
    let dir = std::path::PathBuf::from("target/unit-assets");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("white_texture.png");
    RgbImage::from_pixel(5, 5, image::Rgb([255, 255, 255]))
        .save(&path)
        .unwrap();

    let img = load_texture(&path, canvas(), 0).unwrap();
    assert_eq!(img.dimensions(), (24, 16));
    assert!(img.pixels().all(|p| p.0 == [51, 51, 51]));
}
