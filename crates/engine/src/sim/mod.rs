mod collision;
mod geometry;
mod movement;
mod player;
mod tilemap;
mod world;

pub use collision::{probe_blocked, BlockedDirections};
pub use geometry::{CameraOffset, Direction, PixelPoint, TileCell};
pub use movement::{
    ActiveMove, MoveOutcome, MovementConfig, MovementController, MovementState,
    DEFAULT_MOVEMENT_LIMIT,
};
pub use player::Player;
pub use tilemap::{OpenField, TileKind, TileMap, TileVisual};
pub use world::{TickReport, World};
