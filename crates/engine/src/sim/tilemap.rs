use super::geometry::{PixelPoint, TileCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Void,
    Floor,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileVisual<'a> {
    pub kind: TileKind,
    pub sprite_key: Option<&'a str>,
}

/// Passability queries the simulation needs from a loaded level.
///
/// Implementations must answer for any cell, including cells beyond the loaded
/// edge, and must treat those consistently.
pub trait TileMap {
    fn tile_size(&self) -> u32;

    fn is_wall_cell(&self, cell: TileCell) -> bool;

    fn is_wall(&self, x_px: i32, y_px: i32) -> bool {
        self.is_wall_cell(TileCell::containing(
            PixelPoint::new(x_px, y_px),
            self.tile_size(),
        ))
    }

    fn tile_visual(&self, cell: TileCell) -> TileVisual<'_> {
        let kind = if self.is_wall_cell(cell) {
            TileKind::Wall
        } else {
            TileKind::Floor
        };
        TileVisual {
            kind,
            sprite_key: None,
        }
    }
}

/// Map with no walls at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenField {
    pub tile_size: u32,
}

impl TileMap for OpenField {
    fn tile_size(&self) -> u32 {
        self.tile_size
    }

    fn is_wall_cell(&self, _cell: TileCell) -> bool {
        false
    }
}
