use std::io::Cursor;

use super::*;

fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_roundtrips_pixels() {
    let img = RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8 * 40, y as u8 * 90, 7]));
    let out = decode_rgb(&png_bytes(&img)).unwrap();
    assert_eq!(out, img);
}

#[test]
fn decode_converts_rgba_to_rgb() {
    let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 40]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let out = decode_rgb(&buf).unwrap();
    assert_eq!(out.get_pixel(1, 1).0, [10, 20, 30]);
}

#[test]
fn garbage_is_a_decode_error() {
    let err = decode_rgb(b"not an image").unwrap_err();
    assert!(matches!(err, ChromaError::Decode(_)));
}

#[test]
fn missing_file_is_missing_resource() {
    let err = read_rgb(Path::new("target/no/such/texture.png")).unwrap_err();
    assert!(matches!(err, ChromaError::MissingResource(_)));
    assert!(err.is_recoverable());
}

#[test]
fn resize_hits_requested_size() {
    let img = RgbImage::from_pixel(10, 4, image::Rgb([100, 100, 100]));
    let out = resize_rgb(&img, 5, 8);
    assert_eq!(out.dimensions(), (5, 8));
    assert_eq!(resize_rgb(&img, 10, 4), img);
}
