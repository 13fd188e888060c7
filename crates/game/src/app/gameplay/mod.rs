use std::time::Duration;

use tilewalk_engine::app::centered_screen_position;
use tilewalk_engine::sim::{MoveOutcome, TileCell, TileMap};
use tilewalk_engine::{
    FrameView, InputSnapshot, LevelMap, LoopMetricsSnapshot, MovementConfig, PlayerView, Scene,
    SceneCommand, Viewport, World,
};
use tracing::debug;

/// Single-level exploration: the player stays centred while the level scrolls.
pub(crate) struct ExplorationScene {
    world: World<LevelMap>,
}

impl ExplorationScene {
    pub(crate) fn new(level: LevelMap, viewport: Viewport, movement: MovementConfig) -> Self {
        let screen_position = centered_screen_position(viewport, level.tile_size());
        let start = level.player_start_px();
        Self {
            world: World::new(level, screen_position, start, movement),
        }
    }

    #[cfg(test)]
    pub(crate) fn world(&self) -> &World<LevelMap> {
        &self.world
    }

    fn live_cell(&self) -> TileCell {
        let player = self.world.player();
        TileCell::containing(
            self.world.camera().grid_location(player.screen_position()),
            self.world.tilemap().tile_size(),
        )
    }
}

impl Scene for ExplorationScene {
    fn update(&mut self, fixed_dt: Duration, input: &InputSnapshot) -> SceneCommand {
        let report = self.world.update(fixed_dt, input);
        let cell = self.world.player().cell();
        for outcome in &report.move_outcomes {
            match outcome {
                MoveOutcome::Started(direction) => debug!(
                    direction = direction.name(),
                    cell_x = cell.x,
                    cell_y = cell.y,
                    tick = self.world.tick(),
                    "move_started"
                ),
                MoveOutcome::Blocked(direction) => debug!(
                    direction = direction.name(),
                    cell_x = cell.x,
                    cell_y = cell.y,
                    "move_blocked"
                ),
                MoveOutcome::Busy | MoveOutcome::CoolingDown => {}
            }
        }

        if report.quit_requested {
            SceneCommand::Quit
        } else {
            SceneCommand::None
        }
    }

    fn render_step(&mut self) {
        if let Some(direction) = self.world.render_step() {
            let cell = self.live_cell();
            debug!(
                direction = direction.name(),
                cell_x = cell.x,
                cell_y = cell.y,
                "move_finished"
            );
        }
    }

    fn frame_view(&self) -> FrameView<'_> {
        let tilemap = self.world.tilemap();
        let player = self.world.player();
        FrameView {
            camera: self.world.camera(),
            tilemap,
            player: PlayerView {
                screen_position: player.screen_position(),
                size_px: tilemap.tile_size(),
                state: player.state(),
                sprite_key: tilemap.player_sprite(),
            },
        }
    }

    fn debug_title(&self, metrics: &LoopMetricsSnapshot) -> Option<String> {
        let cell = self.world.player().cell();
        Some(format!(
            "tilewalk | cell ({}, {}) | {} | {:.0} fps | {:.0} tps",
            cell.x,
            cell.y,
            self.world.player().state().label(),
            metrics.fps,
            metrics.tps
        ))
    }
}

#[cfg(test)]
mod tests;
