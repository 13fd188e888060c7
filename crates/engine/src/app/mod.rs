mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;
mod scheduler;

pub use input::{InputAction, InputSnapshot, InputSource, QuitSignal};
pub use loop_runner::{
    advance_frame, run_app, AppError, FrameOutcome, LoopConfig, RENDER_FPS_ENV_VAR,
    SLOW_FRAME_ENV_VAR,
};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{
    cell_to_screen_px, centered_screen_position, visible_cell_range, CellRangeInclusive, Renderer,
    Viewport,
};
pub use scene::{FrameRenderer, FrameView, PlayerView, Scene, SceneCommand};
pub use scheduler::{
    clamp_frame_delta, FixedStepScheduler, StepPlan, DEFAULT_FIXED_DT, DEFAULT_MAX_FRAME_DELTA,
};
