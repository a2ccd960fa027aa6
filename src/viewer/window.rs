use minifb::{Key, KeyRepeat, Window, WindowOptions};

use crate::{
    foundation::error::{ChromaError, ChromaResult},
    viewer::{
        context::{ViewerConfig, ViewerContext, ViewerKey},
        raster::Renderer,
        texture::CubeTextures,
    },
};

const TITLE: &str = "Combined Bump Mapping and Environment Mapping Cube";
const TARGET_FPS: usize = 60;

/// Viewer key bound to a window key, if any.
pub fn map_key(key: Key) -> Option<ViewerKey> {
    Some(match key {
        Key::Escape => ViewerKey::Escape,
        Key::T => ViewerKey::T,
        Key::Up => ViewerKey::Up,
        Key::Down => ViewerKey::Down,
        Key::Space => ViewerKey::Space,
        Key::R => ViewerKey::R,
        Key::W => ViewerKey::W,
        Key::S => ViewerKey::S,
        _ => return None,
    })
}

/// Open a window and spin the cube until it is closed or Escape is pressed.
#[tracing::instrument(skip_all)]
pub fn run_window(cfg: &ViewerConfig) -> ChromaResult<()> {
    let textures = CubeTextures::load(cfg)?;
    let mut ctx = ViewerContext::new(cfg);
    let mut renderer = Renderer::new(ctx.width, ctx.height)?;

    let (w, h) = (ctx.width as usize, ctx.height as usize);
    let mut window = Window::new(TITLE, w, h, WindowOptions::default())
        .map_err(|e| ChromaError::render(format!("open window: {e}")))?;
    window.set_target_fps(TARGET_FPS);

    while ctx.running {
        if !window.is_open() {
            ctx.handle_key(ViewerKey::Quit);
            break;
        }
        for key in window.get_keys_pressed(KeyRepeat::No) {
            if let Some(k) = map_key(key) {
                ctx.handle_key(k);
            }
        }
        if !ctx.running {
            break;
        }

        ctx.advance();
        let frame = renderer.render(&ctx, &textures)?;
        window
            .update_with_buffer(&frame.to_xrgb_u32(), w, h)
            .map_err(|e| ChromaError::render(format!("present frame: {e}")))?;
    }
    Ok(())
}
