use crate::app::InputSource;

use super::collision::{probe_blocked, BlockedDirections};
use super::geometry::{CameraOffset, Direction, PixelPoint, TileCell};
use super::movement::{MoveOutcome, MovementConfig, MovementController, MovementState};
use super::tilemap::TileMap;

#[derive(Debug, Clone)]
pub struct Player {
    screen_position: PixelPoint,
    grid_location: PixelPoint,
    blocked: BlockedDirections,
    movement: MovementController,
}

impl Player {
    pub fn new(
        screen_position: PixelPoint,
        camera: CameraOffset,
        tile_size: u32,
        config: MovementConfig,
    ) -> Self {
        Self {
            screen_position,
            grid_location: camera.grid_location(screen_position),
            blocked: BlockedDirections::default(),
            movement: MovementController::new(tile_size, config),
        }
    }

    pub fn screen_position(&self) -> PixelPoint {
        self.screen_position
    }

    pub fn grid_location(&self) -> PixelPoint {
        self.grid_location
    }

    pub fn cell(&self) -> TileCell {
        TileCell::containing(self.grid_location, self.movement.tile_size())
    }

    pub fn blocked(&self) -> BlockedDirections {
        self.blocked
    }

    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    pub fn movement_mut(&mut self) -> &mut MovementController {
        &mut self.movement
    }

    pub fn state(&self) -> MovementState {
        self.movement.state()
    }

    pub fn refresh_grid_location(&mut self, camera: CameraOffset) {
        self.grid_location = camera.grid_location(self.screen_position);
    }

    pub fn refresh_blocked<M: TileMap + ?Sized>(&mut self, tilemap: &M) {
        self.blocked = probe_blocked(tilemap, self.grid_location);
    }

    /// Offers every held direction to the controller in input order while the
    /// cooldown window is open. Returns the outcome of each issued request.
    pub fn process_input<I: InputSource + ?Sized>(&mut self, input: &I) -> Vec<MoveOutcome> {
        let held = Direction::ALL
            .into_iter()
            .filter(|direction| input.pressed(direction.input_action()));
        self.movement.issue_moves(held, &self.blocked)
    }
}
