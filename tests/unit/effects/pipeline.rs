use super::*;
use crate::foundation::core::Rgba8;

fn builtin() -> Font {
    Font::builtin(16.0)
}

#[test]
fn output_matches_canvas_and_is_rgb() {
    let canvas = Canvas::new(200, 100).unwrap();
    let img = generate_text_effect(&builtin(), "AB", canvas).unwrap();
    assert_eq!(img.dimensions(), (200, 100));
    assert_eq!(img.as_raw().len(), 200 * 100 * 3);
}

#[test]
fn output_is_deterministic() {
    let canvas = Canvas::new(160, 80).unwrap();
    let a = generate_text_effect(&builtin(), "HI\nYO", canvas).unwrap();
    let b = generate_text_effect(&builtin(), "HI\nYO", canvas).unwrap();
    assert_eq!(a, b);
}

#[test]
fn text_pixels_are_not_black() {
    let canvas = Canvas::new(200, 100).unwrap();
    let img = generate_text_effect(&builtin(), "AB", canvas).unwrap();
    assert!(img.pixels().any(|p| p.0 != [0, 0, 0]));
}

#[test]
fn empty_text_gives_black_image() {
    let canvas = Canvas::new(50, 20).unwrap();
    let img = generate_text_effect(&builtin(), "", canvas).unwrap();
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn composite_order_puts_chrome_on_top() {
    let canvas = Canvas::new(120, 60).unwrap();
    let shaped = builtin().shape("W").unwrap();
    let layers = TextEffectLayers::build(&shaped, canvas).unwrap();
    let out = layers.composite().unwrap();

    let mask = shaped.rasterize(layers.origin, canvas).unwrap();
    for (x, y, _) in mask.covered() {
        // The chrome layer is opaque over the glyph body.
        assert_eq!(out.pixel(x, y), layers.chrome.pixel(x, y));
    }
}

#[test]
fn rainbow_is_attenuated_where_nothing_covers_it() {
    let canvas = Canvas::new(120, 60).unwrap();
    let shaped = builtin().shape("I").unwrap();
    let layers = TextEffectLayers::build(&shaped, canvas).unwrap();
    let out = layers.composite().unwrap();

    let found = (0..canvas.height)
        .flat_map(|y| (0..canvas.width).map(move |x| (x, y)))
        .find(|&(x, y)| {
            layers.rainbow.pixel(x, y)[3] == 255
                && layers.shadow.pixel(x, y)[3] == 0
                && layers.chrome.pixel(x, y)[3] == 0
        });
    let (x, y) = found.expect("rainbow pixel outside shadow and chrome");
    let mut expected = Layer::solid(Canvas::new(1, 1).unwrap(), Rgba8::BLACK);
    let rainbow = layers.rainbow.pixel(x, y);
    let single = Layer::from_premul(Canvas::new(1, 1).unwrap(), rainbow.to_vec()).unwrap();
    expected
        .composite_over(&single.faded(RAINBOW_OPACITY), 1.0)
        .unwrap();
    assert_eq!(out.pixel(x, y), expected.pixel(0, 0));
}

#[test]
fn invalid_canvas_is_rejected() {
    let canvas = Canvas {
        width: 0,
        height: 10,
    };
    assert!(generate_text_effect(&builtin(), "A", canvas).is_err());
}

#[test]
fn missing_font_still_renders() {
    let cfg = EffectConfig {
        text: "AB".to_string(),
        font_path: "target/definitely/missing.ttf".into(),
        font_size_px: 16.0,
        width: 200,
        height: 100,
        ..EffectConfig::default()
    };
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let img = tracing::subscriber::with_default(subscriber, || render_text_effect(&cfg)).unwrap();
    assert_eq!(img.dimensions(), (200, 100));

    let text = logs.contents();
    assert!(text.contains("WARN"), "{text}");
    assert!(text.contains("using built-in font"), "{text}");
}

#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
