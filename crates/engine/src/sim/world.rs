use std::time::Duration;

use crate::app::{InputSource, QuitSignal};

use super::geometry::{CameraOffset, Direction, PixelPoint};
use super::movement::{MoveOutcome, MovementConfig};
use super::player::Player;
use super::tilemap::TileMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub move_outcomes: Vec<MoveOutcome>,
    pub quit_requested: bool,
}

/// One player on one scrolling background.
///
/// Update mutates the player; only [`World::render_step`] moves the camera.
#[derive(Debug, Clone)]
pub struct World<M> {
    tilemap: M,
    player: Player,
    camera: CameraOffset,
    tick: u64,
}

impl<M: TileMap> World<M> {
    /// Places `start_location` (world pixels) under `screen_position`.
    pub fn new(
        tilemap: M,
        screen_position: PixelPoint,
        start_location: PixelPoint,
        config: MovementConfig,
    ) -> Self {
        let camera = CameraOffset::aligning(screen_position, start_location);
        let mut player = Player::new(screen_position, camera, tilemap.tile_size(), config);
        player.refresh_blocked(&tilemap);
        Self {
            tilemap,
            player,
            camera,
            tick: 0,
        }
    }

    pub fn tilemap(&self) -> &M {
        &self.tilemap
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn camera(&self) -> CameraOffset {
        self.camera
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// One fixed simulation step: grid refresh, collision probe, input,
    /// cooldown, then the quit poll.
    pub fn update<I>(&mut self, fixed_dt: Duration, input: &I) -> TickReport
    where
        I: InputSource + QuitSignal + ?Sized,
    {
        self.player.refresh_grid_location(self.camera);
        debug_assert_eq!(
            self.player.grid_location(),
            self.camera.grid_location(self.player.screen_position()),
            "grid location drifted from camera"
        );
        self.player.refresh_blocked(&self.tilemap);
        let move_outcomes = self.player.process_input(input);
        self.player.movement_mut().advance_cooldown(fixed_dt);
        self.tick = self.tick.saturating_add(1);

        TickReport {
            move_outcomes,
            quit_requested: input.quit_requested(),
        }
    }

    /// Scrolls the camera one pixel along the in-flight move, if any.
    pub fn render_step(&mut self) -> Option<Direction> {
        self.player.movement_mut().drain_scroll_step(&mut self.camera)
    }
}
