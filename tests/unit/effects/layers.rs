use super::*;
use crate::text::font::Font;

fn setup() -> (ShapedText, PixelPos, Canvas) {
    let canvas = Canvas::new(120, 60).unwrap();
    let shaped = Font::builtin(16.0).shape("AB").unwrap();
    let origin = shaped.centered_origin(canvas);
    (shaped, origin, canvas)
}

#[test]
fn chrome_sequence_has_expected_shape() {
    let stamps = chrome_stamps();
    assert_eq!(stamps.len(), 1 + 32 + 1 + 3 + 3 + 2 + 3 + 1);
    assert_eq!(stamps[0], Stamp::new(3, 5, Rgba8::new(0, 0, 0, 200)));
    assert_eq!(stamps[33], Stamp::new(0, 0, Rgba8::new(140, 140, 140, 255)));
    assert_eq!(
        *stamps.last().unwrap(),
        Stamp::new(0, -1, Rgba8::new(255, 255, 255, 140))
    );
}

#[test]
fn glow_passes_are_identical_halves() {
    let stamps = glow_stamps();
    assert_eq!(stamps.len(), 80);
    assert_eq!(stamps[..40], stamps[40..]);
}

#[test]
fn every_layer_matches_canvas_size() {
    let (shaped, origin, canvas) = setup();
    for layer in [
        chrome_layer(&shaped, origin, canvas).unwrap(),
        shadow_layer(&shaped, origin, canvas).unwrap(),
        rainbow_layer(&shaped, origin, canvas).unwrap(),
    ] {
        assert_eq!(layer.canvas(), canvas);
        assert!(!layer.is_empty());
    }
}

#[test]
fn shadow_is_opaque_black_offset_by_three() {
    let (shaped, origin, canvas) = setup();
    let layer = shadow_layer(&shaped, origin, canvas).unwrap();
    let mask = shaped.rasterize(origin, canvas).unwrap();
    let (x, y, _) = mask.covered().next().unwrap();
    assert_eq!(layer.pixel(x + 3, y + 3), [0, 0, 0, 255]);
    assert!(layer.data().chunks_exact(4).all(|px| px[..3] == [0, 0, 0]));
}

#[test]
fn chrome_base_fill_is_gray_with_bevel_tint() {
    let (shaped, origin, canvas) = setup();
    let layer = chrome_layer(&shaped, origin, canvas).unwrap();
    let mask = shaped.rasterize(origin, canvas).unwrap();
    for (x, y, _) in mask.covered() {
        assert_eq!(layer.pixel(x, y)[3], 255);
    }
}

#[test]
fn rainbow_text_carries_gradient_color() {
    let (shaped, origin, canvas) = setup();
    let layer = rainbow_layer(&shaped, origin, canvas).unwrap();
    let mask = shaped
        .rasterize(origin.offset(RAINBOW_OFFSET.0, RAINBOW_OFFSET.1), canvas)
        .unwrap();
    let (x, y, _) = mask.covered().next().unwrap();
    let [r, g, b] = rainbow_color(x, canvas.width);
    assert_eq!(layer.pixel(x, y), [r, g, b, 255]);
}

#[test]
fn empty_text_yields_empty_layers() {
    let canvas = Canvas::new(40, 20).unwrap();
    let shaped = Font::builtin(16.0).shape("").unwrap();
    let origin = PixelPos::new(5, 5);
    assert!(chrome_layer(&shaped, origin, canvas).unwrap().is_empty());
    assert!(shadow_layer(&shaped, origin, canvas).unwrap().is_empty());
    assert!(rainbow_layer(&shaped, origin, canvas).unwrap().is_empty());
}

#[test]
fn background_is_opaque_black() {
    let canvas = Canvas::new(4, 3).unwrap();
    let bg = background_layer(canvas);
    assert!(bg.data().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn glow_reaches_in_from_ink_left_of_the_canvas() {
    let canvas = Canvas::new(40, 20).unwrap();
    let shaped = Font::builtin(8.0).shape("A").unwrap();
    // Rainbow copy lands at x = -5..=-1, fully off the canvas.
    let origin = PixelPos::new(-11, 2);
    let layer = rainbow_layer(&shaped, origin, canvas).unwrap();

    let y = 2 + RAINBOW_OFFSET.1 as u32 + 3;
    for x in 0..5 {
        assert!(layer.pixel(x, y)[3] > 0, "no glow at x={x}");
    }
    assert_eq!(layer.pixel(5, y)[3], 0);
}

#[test]
fn shadow_is_clipped_not_shifted_at_the_edge() {
    let canvas = Canvas::new(40, 20).unwrap();
    let shaped = Font::builtin(8.0).shape("A").unwrap();
    let layer = shadow_layer(&shaped, PixelPos::new(-5, 2), canvas).unwrap();
    // Glyph columns -2..=2; the right edge column of "A" sits at x = 2.
    assert_eq!(layer.pixel(2, 2 + 3 + 1), [0, 0, 0, 255]);
    assert_eq!(layer.pixel(3, 2 + 3 + 1), [0, 0, 0, 0]);
}
