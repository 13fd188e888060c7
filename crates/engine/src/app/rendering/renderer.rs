use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageReader;
use pixels::{Error, Pixels, SurfaceTexture};
use tracing::warn;
use winit::window::Window;

use crate::app::scene::{FrameRenderer, FrameView, PlayerView};
use crate::sim::{MovementState, TileCell, TileKind};
use crate::sprite_keys::sprite_image_path;

use super::transform::{cell_to_screen_px, visible_cell_range, Viewport};

const CLEAR_COLOR: [u8; 4] = [12, 12, 16, 255];
const TILE_FALLBACK_FLOOR_COLOR: [u8; 4] = [74, 112, 56, 255];
const TILE_FALLBACK_WALL_COLOR: [u8; 4] = [92, 84, 78, 255];
const PLAYER_FALLBACK_COLOR: [u8; 4] = [220, 220, 240, 255];
const PLAYER_MOVING_FALLBACK_COLOR: [u8; 4] = [255, 210, 70, 255];

struct LoadedSprite {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

/// Sprites keyed by validated key, loaded lazily from `<sprite_root>/<key>.png`.
/// Failed loads are cached as `None` and warned about once.
pub(crate) struct SpriteCache {
    sprite_root: PathBuf,
    sprites: HashMap<String, Option<LoadedSprite>>,
    warned_keys: HashSet<String>,
}

impl SpriteCache {
    pub(crate) fn new(sprite_root: PathBuf) -> Self {
        Self {
            sprite_root,
            sprites: HashMap::new(),
            warned_keys: HashSet::new(),
        }
    }

    fn resolve(&mut self, key: &str) -> Option<&LoadedSprite> {
        if !self.sprites.contains_key(key) {
            let loaded = match resolve_sprite_image_path(&self.sprite_root, key)
                .and_then(|path| load_sprite_rgba(&path).map_err(|reason| (Some(path), reason)))
            {
                Ok(sprite) => Some(sprite),
                Err((path, reason)) => {
                    warn_sprite_load_once(&mut self.warned_keys, key, path.as_deref(), &reason);
                    None
                }
            };
            self.sprites.insert(key.to_string(), loaded);
        }
        self.sprites.get(key).and_then(Option::as_ref)
    }
}

pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    viewport: Viewport,
    sprites: SpriteCache,
}

impl Renderer {
    /// `buffer` is the fixed frame size the scene lays out against; the
    /// surface follows the physical window size and pixels scales between them.
    pub fn new(window: Arc<Window>, buffer: Viewport, sprite_root: PathBuf) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), buffer, size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            viewport: buffer,
            sprites: SpriteCache::new(sprite_root),
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), self.viewport, width, height)?;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        buffer: Viewport,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(surface_width.max(1), surface_height.max(1), window);
        Pixels::new(buffer.width, buffer.height, surface)
    }
}

impl FrameRenderer for Renderer {
    type Error = Error;

    fn draw_frame(&mut self, view: &FrameView<'_>) -> Result<(), Error> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Ok(());
        }
        compose_frame(
            self.pixels.frame_mut(),
            self.viewport,
            view,
            &mut self.sprites,
        );
        self.pixels.render()
    }
}

/// Paints background tiles shifted by the camera, then the player on top.
pub(crate) fn compose_frame(
    frame: &mut [u8],
    viewport: Viewport,
    view: &FrameView<'_>,
    sprites: &mut SpriteCache,
) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&CLEAR_COLOR);
    }
    draw_background(frame, viewport, view, sprites);
    draw_player(frame, viewport, &view.player, sprites);
}

fn draw_background(
    frame: &mut [u8],
    viewport: Viewport,
    view: &FrameView<'_>,
    sprites: &mut SpriteCache,
) {
    let tile_size = view.tilemap.tile_size();
    let Some(range) = visible_cell_range(view.camera, viewport, tile_size) else {
        return;
    };

    for y in range.y_min..=range.y_max {
        for x in range.x_min..=range.x_max {
            let cell = TileCell::new(x, y);
            let visual = view.tilemap.tile_visual(cell);
            let fallback = match visual.kind {
                TileKind::Void => continue,
                TileKind::Floor => TILE_FALLBACK_FLOOR_COLOR,
                TileKind::Wall => TILE_FALLBACK_WALL_COLOR,
            };
            let (left, top) = cell_to_screen_px(cell, view.camera, tile_size);
            let sprite = visual.sprite_key.and_then(|key| sprites.resolve(key));
            match sprite {
                Some(sprite) => draw_sprite_at(frame, viewport, left, top, sprite),
                None => fill_rect_clipped(frame, viewport, left, top, tile_size, tile_size, fallback),
            }
        }
    }
}

fn draw_player(
    frame: &mut [u8],
    viewport: Viewport,
    player: &PlayerView<'_>,
    sprites: &mut SpriteCache,
) {
    let PlayerView {
        screen_position,
        size_px,
        state,
        sprite_key,
    } = *player;
    if let Some(sprite) = sprite_key.and_then(|key| sprites.resolve(key)) {
        draw_sprite_at(frame, viewport, screen_position.x, screen_position.y, sprite);
        return;
    }
    let color = match state {
        MovementState::Idle => PLAYER_FALLBACK_COLOR,
        MovementState::Moving(_) => PLAYER_MOVING_FALLBACK_COLOR,
    };
    fill_rect_clipped(
        frame,
        viewport,
        screen_position.x,
        screen_position.y,
        size_px,
        size_px,
        color,
    );
}

fn resolve_sprite_image_path(
    sprite_root: &Path,
    key: &str,
) -> Result<PathBuf, (Option<PathBuf>, String)> {
    sprite_image_path(sprite_root, key).map_err(|error| (None, format!("invalid_key:{error}")))
}

fn load_sprite_rgba(path: &Path) -> Result<LoadedSprite, String> {
    let reader = ImageReader::open(path).map_err(|error| format!("file_open_failed:{error}"))?;
    let decoded = reader
        .decode()
        .map_err(|error| format!("decode_failed:{error}"))?;
    let image = decoded.to_rgba8();
    Ok(LoadedSprite {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

fn warn_sprite_load_once(
    warned_keys: &mut HashSet<String>,
    key: &str,
    resolved_path: Option<&Path>,
    reason: &str,
) {
    if !warned_keys.insert(key.to_string()) {
        return;
    }
    let path_display = resolved_path
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<unresolved>".to_string());
    warn!(
        sprite_key = key,
        path = %path_display,
        reason = reason,
        "renderer_sprite_load_failed_using_fallback"
    );
}

fn write_pixel_rgba_clipped(frame: &mut [u8], viewport: Viewport, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 || x >= viewport.width as i32 || y >= viewport.height as i32 {
        return;
    }
    let byte_offset = (y as usize * viewport.width as usize + x as usize) * 4;
    let Some(pixel) = frame.get_mut(byte_offset..byte_offset + 4) else {
        return;
    };
    pixel.copy_from_slice(&color);
}

fn blend_pixel_rgba_clipped(frame: &mut [u8], viewport: Viewport, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 || x >= viewport.width as i32 || y >= viewport.height as i32 {
        return;
    }
    let byte_offset = (y as usize * viewport.width as usize + x as usize) * 4;
    let Some(pixel) = frame.get_mut(byte_offset..byte_offset + 4) else {
        return;
    };
    let beneath = [pixel[0], pixel[1], pixel[2], pixel[3]];
    pixel.copy_from_slice(&blend_over(color, beneath));
}

/// Source-over lerp of `src` onto an opaque `dst`; the result is opaque.
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let a = src[3] as u16;
    let inv_a = 255 - a;
    let lerp = |front: u8, back: u8| ((front as u16 * a + back as u16 * inv_a) / 255) as u8;
    [
        lerp(src[0], dst[0]),
        lerp(src[1], dst[1]),
        lerp(src[2], dst[2]),
        255,
    ]
}

fn fill_rect_clipped(
    frame: &mut [u8],
    viewport: Viewport,
    left: i32,
    top: i32,
    width: u32,
    height: u32,
    color: [u8; 4],
) {
    let right = (left + width as i32).min(viewport.width as i32);
    let bottom = (top + height as i32).min(viewport.height as i32);
    for y in top.max(0)..bottom {
        for x in left.max(0)..right {
            write_pixel_rgba_clipped(frame, viewport, x, y, color);
        }
    }
}

fn draw_sprite_at(frame: &mut [u8], viewport: Viewport, left: i32, top: i32, sprite: &LoadedSprite) {
    if sprite.width == 0 || sprite.height == 0 {
        return;
    }
    let expected_rgba_len = sprite.width as usize * sprite.height as usize * 4;
    if sprite.rgba.len() < expected_rgba_len {
        return;
    }

    let draw_left = left.max(0);
    let draw_top = top.max(0);
    let draw_right = (left + sprite.width as i32).min(viewport.width as i32);
    let draw_bottom = (top + sprite.height as i32).min(viewport.height as i32);

    for out_y in draw_top..draw_bottom {
        let src_row_offset = (out_y - top) as usize * sprite.width as usize * 4;
        for out_x in draw_left..draw_right {
            let src_offset = src_row_offset + (out_x - left) as usize * 4;
            let alpha = sprite.rgba[src_offset + 3];
            if alpha == 0 {
                continue;
            }
            let color = [
                sprite.rgba[src_offset],
                sprite.rgba[src_offset + 1],
                sprite.rgba[src_offset + 2],
                alpha,
            ];
            if alpha == u8::MAX {
                write_pixel_rgba_clipped(frame, viewport, out_x, out_y, color);
            } else {
                blend_pixel_rgba_clipped(frame, viewport, out_x, out_y, color);
            }
        }
    }
}
