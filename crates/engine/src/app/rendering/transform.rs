use crate::sim::{CameraOffset, PixelPoint, TileCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRangeInclusive {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

/// Top-left screen pixel of `cell` with the background shifted by `camera`.
pub fn cell_to_screen_px(cell: TileCell, camera: CameraOffset, tile_size: u32) -> (i32, i32) {
    let origin = cell.origin_px(tile_size);
    (origin.x + camera.left, origin.y + camera.top)
}

/// Cells that overlap the viewport at least partially.
pub fn visible_cell_range(
    camera: CameraOffset,
    viewport: Viewport,
    tile_size: u32,
) -> Option<CellRangeInclusive> {
    if viewport.width == 0 || viewport.height == 0 || tile_size == 0 {
        return None;
    }
    let size = tile_size as i32;
    let right_edge = viewport.width as i32 - 1;
    let bottom_edge = viewport.height as i32 - 1;

    Some(CellRangeInclusive {
        x_min: (-camera.left).div_euclid(size),
        x_max: (right_edge - camera.left).div_euclid(size),
        y_min: (-camera.top).div_euclid(size),
        y_max: (bottom_edge - camera.top).div_euclid(size),
    })
}

/// Screen position that keeps a `sprite_size` square centred in the viewport.
pub fn centered_screen_position(viewport: Viewport, sprite_size: u32) -> PixelPoint {
    PixelPoint {
        x: viewport.width as i32 / 2 - sprite_size as i32 / 2,
        y: viewport.height as i32 / 2 - sprite_size as i32 / 2,
    }
}
