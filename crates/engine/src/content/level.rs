use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::sim::{PixelPoint, TileCell, TileKind, TileMap, TileVisual};
use crate::sprite_keys::{validate_sprite_key, SpriteKeyError};

const DEFAULT_PLAYER_GLYPH: char = 'P';

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid level json at `{path}`: {message}")]
    Json { path: String, message: String },
    #[error("level tile_size must be greater than zero")]
    ZeroTileSize,
    #[error("level of {width}x{height} cells at tile_size {tile_size} exceeds the i32 pixel range")]
    TileSizeTooLarge {
        tile_size: u32,
        width: usize,
        height: usize,
    },
    #[error("level has no rows")]
    NoRows,
    #[error("level row {row} is empty")]
    EmptyRow { row: usize },
    #[error("level row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("legend key `{key}` must be exactly one character")]
    BadLegendKey { key: String },
    #[error("player_glyph `{glyph}` must be exactly one character")]
    BadPlayerGlyph { glyph: String },
    #[error("player glyph '{glyph}' is declared as a wall in the legend")]
    WallPlayerGlyph { glyph: char },
    #[error("glyph '{glyph}' at row {row}, column {column} is not in the legend")]
    UnknownGlyph {
        glyph: char,
        row: usize,
        column: usize,
    },
    #[error("level has no player start glyph '{glyph}'")]
    MissingPlayerStart { glyph: char },
    #[error("player start glyph appears again at row {row}, column {column}")]
    DuplicatePlayerStart { row: usize, column: usize },
    #[error("sprite key `{key}` for {owner} is invalid: {source}")]
    InvalidSprite {
        key: String,
        owner: String,
        #[source]
        source: SpriteKeyError,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LevelFile {
    tile_size: u32,
    legend: BTreeMap<String, LegendEntryFile>,
    #[serde(default)]
    player_glyph: Option<String>,
    #[serde(default)]
    player_sprite: Option<String>,
    rows: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LegendEntryFile {
    #[serde(default)]
    wall: bool,
    #[serde(default)]
    sprite: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TileDef {
    wall: bool,
    sprite: Option<String>,
}

/// A validated rectangular level. Cells outside the grid are walls.
#[derive(Debug, Clone)]
pub struct LevelMap {
    tile_size: u32,
    width: u32,
    height: u32,
    tiles: Vec<TileDef>,
    cells: Vec<usize>,
    player_start: TileCell,
    player_sprite: Option<String>,
}

impl LevelMap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn player_start(&self) -> TileCell {
        self.player_start
    }

    /// Grid location of the start cell's top-left pixel.
    pub fn player_start_px(&self) -> PixelPoint {
        self.player_start.origin_px(self.tile_size)
    }

    pub fn player_sprite(&self) -> Option<&str> {
        self.player_sprite.as_deref()
    }

    fn tile_at(&self, cell: TileCell) -> Option<&TileDef> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.width as i32 || cell.y >= self.height as i32 {
            return None;
        }
        let index = cell.y as usize * self.width as usize + cell.x as usize;
        self.cells.get(index).and_then(|tile| self.tiles.get(*tile))
    }
}

impl TileMap for LevelMap {
    fn tile_size(&self) -> u32 {
        self.tile_size
    }

    fn is_wall_cell(&self, cell: TileCell) -> bool {
        self.tile_at(cell).map_or(true, |tile| tile.wall)
    }

    fn tile_visual(&self, cell: TileCell) -> TileVisual<'_> {
        match self.tile_at(cell) {
            Some(tile) => TileVisual {
                kind: if tile.wall {
                    TileKind::Wall
                } else {
                    TileKind::Floor
                },
                sprite_key: tile.sprite.as_deref(),
            },
            None => TileVisual {
                kind: TileKind::Void,
                sprite_key: None,
            },
        }
    }
}

pub fn load_level(path: &Path) -> Result<LevelMap, LevelError> {
    let raw = fs::read_to_string(path).map_err(|source| LevelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_level_json(&raw)
}

pub fn parse_level_json(raw: &str) -> Result<LevelMap, LevelError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    let file: LevelFile =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|error| LevelError::Json {
            path: error.path().to_string(),
            message: error.inner().to_string(),
        })?;
    build_level(file)
}

fn build_level(file: LevelFile) -> Result<LevelMap, LevelError> {
    if file.tile_size == 0 {
        return Err(LevelError::ZeroTileSize);
    }
    if file.rows.is_empty() {
        return Err(LevelError::NoRows);
    }

    let player_glyph = match file.player_glyph.as_deref() {
        None => DEFAULT_PLAYER_GLYPH,
        Some(text) => single_char(text).ok_or_else(|| LevelError::BadPlayerGlyph {
            glyph: text.to_string(),
        })?,
    };

    let mut tiles = Vec::with_capacity(file.legend.len() + 1);
    let mut glyph_to_tile = BTreeMap::new();
    let mut player_floor_sprite = None;
    for (key, entry) in file.legend {
        let glyph =
            single_char(&key).ok_or_else(|| LevelError::BadLegendKey { key: key.clone() })?;
        if let Some(sprite) = entry.sprite.as_deref() {
            check_sprite(sprite, format!("legend '{glyph}'"))?;
        }
        if glyph == player_glyph {
            if entry.wall {
                return Err(LevelError::WallPlayerGlyph { glyph });
            }
            player_floor_sprite = entry.sprite;
            continue;
        }
        glyph_to_tile.insert(glyph, tiles.len());
        tiles.push(TileDef {
            wall: entry.wall,
            sprite: entry.sprite,
        });
    }
    // The start cell is always floor; its legend entry, if any, only supplies a sprite.
    let player_floor = tiles.len();
    tiles.push(TileDef {
        wall: false,
        sprite: player_floor_sprite,
    });

    if let Some(sprite) = file.player_sprite.as_deref() {
        check_sprite(sprite, "player".to_string())?;
    }

    let width = file.rows[0].chars().count();
    let mut cells = Vec::with_capacity(width * file.rows.len());
    let mut player_start = None;
    for (row, line) in file.rows.iter().enumerate() {
        let found = line.chars().count();
        if found == 0 {
            return Err(LevelError::EmptyRow { row });
        }
        if found != width {
            return Err(LevelError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        for (column, glyph) in line.chars().enumerate() {
            if glyph == player_glyph {
                if player_start.is_some() {
                    return Err(LevelError::DuplicatePlayerStart { row, column });
                }
                player_start = Some(TileCell::new(column as i32, row as i32));
                cells.push(player_floor);
                continue;
            }
            let tile = glyph_to_tile
                .get(&glyph)
                .copied()
                .ok_or(LevelError::UnknownGlyph { glyph, row, column })?;
            cells.push(tile);
        }
    }
    let height = file.rows.len();
    if !fits_pixel_range(file.tile_size, width) || !fits_pixel_range(file.tile_size, height) {
        return Err(LevelError::TileSizeTooLarge {
            tile_size: file.tile_size,
            width,
            height,
        });
    }
    let player_start = player_start.ok_or(LevelError::MissingPlayerStart {
        glyph: player_glyph,
    })?;

    Ok(LevelMap {
        tile_size: file.tile_size,
        width: width as u32,
        height: height as u32,
        tiles,
        cells,
        player_start,
        player_sprite: file.player_sprite,
    })
}

/// The grid plus the ring of out-of-grid cells around it (treated as walls and
/// drawn as void) must have pixel origins that fit in `i32`.
fn fits_pixel_range(tile_size: u32, cells: usize) -> bool {
    let cells = cells.checked_add(1).map(i32::try_from);
    match (i32::try_from(tile_size), cells) {
        (Ok(size), Some(Ok(cells))) => cells.checked_mul(size).is_some(),
        _ => false,
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => Some(glyph),
        _ => None,
    }
}

fn check_sprite(key: &str, owner: String) -> Result<(), LevelError> {
    validate_sprite_key(key).map_err(|source| LevelError::InvalidSprite {
        key: key.to_string(),
        owner,
        source,
    })
}
