use super::geometry::{Direction, PixelPoint, TileCell};
use super::tilemap::TileMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockedDirections {
    blocked: [bool; 4],
}

impl BlockedDirections {
    pub fn is_blocked(&self, direction: Direction) -> bool {
        self.blocked[direction.index()]
    }

    pub fn set(&mut self, direction: Direction, blocked: bool) {
        self.blocked[direction.index()] = blocked;
    }

    pub fn with_blocked(mut self, direction: Direction, blocked: bool) -> Self {
        self.set(direction, blocked);
        self
    }

    pub fn up(&self) -> bool {
        self.is_blocked(Direction::Up)
    }

    pub fn right(&self) -> bool {
        self.is_blocked(Direction::Right)
    }

    pub fn down(&self) -> bool {
        self.is_blocked(Direction::Down)
    }

    pub fn left(&self) -> bool {
        self.is_blocked(Direction::Left)
    }
}

/// Walls around the cell that contains `grid_location`.
pub fn probe_blocked<M: TileMap + ?Sized>(
    tilemap: &M,
    grid_location: PixelPoint,
) -> BlockedDirections {
    let cell = TileCell::containing(grid_location, tilemap.tile_size());
    let mut blocked = BlockedDirections::default();
    for direction in Direction::ALL {
        blocked.set(direction, tilemap.is_wall_cell(cell.neighbour(direction)));
    }
    blocked
}
