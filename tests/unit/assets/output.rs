use super::*;

#[test]
fn writes_png_into_new_directory() {
    let dir = std::path::PathBuf::from("target/unit-output/nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("out.png");

    let img = image::RgbImage::from_pixel(3, 2, image::Rgb([1, 2, 3]));
    write_rgb_png(&path, &img).unwrap();

    let back = image::open(&path).unwrap().to_rgb8();
    assert_eq!(back, img);
}

#[test]
fn rgba_png_keeps_alpha() {
    let path = std::path::PathBuf::from("target/unit-output/alpha.png");
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 100, 50, 128]));
    write_rgba_png(&path, &img).unwrap();
    assert_eq!(image::open(&path).unwrap().to_rgba8(), img);
}

#[test]
fn bare_file_name_needs_no_directory() {
    assert!(ensure_parent_dir(Path::new("out.png")).is_ok());
}

#[test]
fn unwritable_target_is_an_error() {
    let dir = std::path::PathBuf::from("target/unit-output/blocker");
    std::fs::create_dir_all(&dir).unwrap();
    let img = image::RgbImage::new(1, 1);
    // A directory cannot be overwritten by a file.
    assert!(write_rgb_png(&dir, &img).is_err());
}
