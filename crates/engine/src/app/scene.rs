use std::time::Duration;

use crate::sim::{CameraOffset, MovementState, PixelPoint, TileMap};

use super::input::InputSnapshot;
use super::metrics::LoopMetricsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerView<'a> {
    pub screen_position: PixelPoint,
    pub size_px: u32,
    pub state: MovementState,
    pub sprite_key: Option<&'a str>,
}

/// Read-only state handed to the renderer once per frame.
#[derive(Clone, Copy)]
pub struct FrameView<'a> {
    pub camera: CameraOffset,
    pub tilemap: &'a dyn TileMap,
    pub player: PlayerView<'a>,
}

/// Presentation sink. Must not feed anything back into the simulation.
pub trait FrameRenderer {
    type Error;

    fn draw_frame(&mut self, view: &FrameView<'_>) -> Result<(), Self::Error>;
}

pub trait Scene {
    /// One fixed-rate simulation step.
    fn update(&mut self, fixed_dt: Duration, input: &InputSnapshot) -> SceneCommand;

    /// Per-frame animation that runs once before drawing, independent of tick rate.
    fn render_step(&mut self);

    fn frame_view(&self) -> FrameView<'_>;

    fn debug_title(&self, _metrics: &LoopMetricsSnapshot) -> Option<String> {
        None
    }
}
