use super::*;

#[test]
fn lowercase_maps_to_uppercase() {
    assert_eq!(glyph5x7('a'), glyph5x7('A'));
    assert_eq!(glyph5x7('z'), glyph5x7('Z'));
}

#[test]
fn unknown_characters_render_a_box() {
    assert_eq!(glyph5x7('\u{2603}'), MISSING);
    assert_eq!(glyph5x7(' '), [0; 7]);
}

#[test]
fn scale_tracks_font_size() {
    assert_eq!(BitmapFont::for_size(100.0).scale(), 13);
    assert_eq!(BitmapFont::for_size(1.0).scale(), 1);
    assert_eq!(BitmapFont::for_size(f32::NAN).scale(), 1);
}

#[test]
fn measure_counts_cells_and_lines() {
    let f = BitmapFont::for_size(8.0);
    assert_eq!(f.measure("AB"), (11, 7));
    assert_eq!(f.measure("AB\nC"), (11, 15));
    assert_eq!(f.measure(""), (0, 0));

    let f2 = BitmapFont::for_size(16.0);
    assert_eq!(f2.measure("AB"), (22, 14));
}

#[test]
fn pixels_stay_inside_measured_box() {
    let f = BitmapFont::for_size(16.0);
    let (w, h) = f.measure("Hi\nthere");
    let mut count = 0;
    let bounds = Canvas::new(1000, 1000).unwrap();
    f.for_each_pixel("Hi\nthere", 0, 0, bounds, |x, y| {
        assert!(x >= 0 && y >= 0);
        assert!(x < i64::from(w) && y < i64::from(h));
        count += 1;
    });
    assert!(count > 0);
}

#[test]
fn huge_sizes_are_capped_and_measure_saturates() {
    let f = BitmapFont::for_size(1e9);
    assert_eq!(f.scale(), (MAX_FONT_SIZE_PX / LINE_PITCH as f32).round() as u32);
    let (w, h) = f.measure("stop starting\nstart finishing");
    assert_eq!(w, 89 * f.scale());
    assert_eq!(h, 15 * f.scale());

    let long = "W".repeat(200_000);
    assert_eq!(f.measure(&long).0, u32::MAX);
}

#[test]
fn plotting_is_clipped_to_bounds() {
    let f = BitmapFont::for_size(1e9);
    let bounds = Canvas::new(8, 4).unwrap();
    let mut count = 0u32;
    f.for_each_pixel("B", -3, -2, bounds, |x, y| {
        assert!((0..8).contains(&x) && (0..4).contains(&y));
        count += 1;
    });
    assert_eq!(count, 32);
}
