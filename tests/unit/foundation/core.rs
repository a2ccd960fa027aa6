use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_edges() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(MAX_CANVAS_EDGE + 1, 10).is_err());
    assert!(Canvas::new(MAX_CANVAS_EDGE, 1).is_ok());
}

#[test]
fn canvas_padding_grows_both_edges() {
    let c = Canvas::new(200, 100).unwrap();
    assert_eq!(c.padded(EFFECT_PADDING), Canvas { width: 360, height: 260 });
    assert_eq!(c.pixel_count(), 20_000);
}

#[test]
fn premul_scales_color_by_alpha_and_coverage() {
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
    assert_eq!(Rgba8::new(200, 100, 50, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::new(255, 255, 255, 100).to_premul(), [100, 100, 100, 100]);
    assert_eq!(Rgba8::BLACK.premul_with_coverage(128), [0, 0, 0, 128]);
    assert_eq!(Rgba8::WHITE.premul_with_coverage(0), [0, 0, 0, 0]);
}

#[test]
fn pixel_pos_offset_is_additive() {
    assert_eq!(PixelPos::new(10, 20).offset(-3, 5), PixelPos::new(7, 25));
}
