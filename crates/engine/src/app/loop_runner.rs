use std::env;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::content::LevelError;
use crate::{AppPaths, StartupError};

use super::input::ActionStates;
use super::metrics::MetricsAccumulator;
use super::rendering::Viewport;
use super::scheduler::{
    normalize_non_zero_duration, FixedStepScheduler, StepPlan, DEFAULT_MAX_FRAME_DELTA,
};
use super::{FrameRenderer, InputAction, InputSnapshot, Renderer, Scene, SceneCommand};

pub const SLOW_FRAME_ENV_VAR: &str = "TILEWALK_SLOW_FRAME_MS";
pub const RENDER_FPS_ENV_VAR: &str = "TILEWALK_MAX_RENDER_FPS";

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_tps: u32,
    pub max_frame_delta: Duration,
    pub metrics_log_interval: Duration,
    pub simulated_slow_frame_ms: u64,
    pub max_render_fps: Option<u32>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "tilewalk".to_string(),
            window_width: 1280,
            window_height: 720,
            target_tps: 100,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
            metrics_log_interval: Duration::from_secs(1),
            simulated_slow_frame_ms: 0,
            max_render_fps: None,
        }
    }
}

impl LoopConfig {
    /// Size of the frame buffer the scene draws into, in pixels.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.window_width.max(1),
            height: self.window_height.max(1),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    pub plan: StepPlan,
    pub ticks_run: u32,
    pub quit_requested: bool,
}

/// Runs every due fixed tick, then one render step and one draw.
///
/// Stops at the first tick whose update asks to quit; that frame is not drawn.
pub fn advance_frame<R, F>(
    scheduler: &mut FixedStepScheduler,
    now: Duration,
    scene: &mut dyn Scene,
    renderer: &mut R,
    mut next_input: F,
) -> Result<FrameOutcome, R::Error>
where
    R: FrameRenderer + ?Sized,
    F: FnMut() -> InputSnapshot,
{
    let plan = scheduler.begin_frame(now);
    let fixed_dt = scheduler.fixed_dt();
    let mut ticks_run = 0u32;

    for _ in 0..plan.ticks_to_run {
        let input = next_input();
        ticks_run += 1;
        if scene.update(fixed_dt, &input) == SceneCommand::Quit {
            return Ok(FrameOutcome {
                plan,
                ticks_run,
                quit_requested: true,
            });
        }
    }

    scene.render_step();
    renderer.draw_frame(&scene.frame_view())?;
    Ok(FrameOutcome {
        plan,
        ticks_run,
        quit_requested: false,
    })
}

pub fn run_app(
    config: LoopConfig,
    mut scene: Box<dyn Scene>,
    app_paths: AppPaths,
) -> Result<(), AppError> {
    info!(
        root = %app_paths.root.display(),
        assets_dir = %app_paths.assets_dir.display(),
        "startup"
    );

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let window_for_loop = Arc::clone(&window);
    let mut renderer = Renderer::new(window, config.viewport(), app_paths.sprites_dir.clone())
        .map_err(AppError::CreateRenderer)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let max_frame_delta =
        normalize_non_zero_duration(config.max_frame_delta, DEFAULT_MAX_FRAME_DELTA);
    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    let slow_frame_delay = resolve_slow_frame_delay(config.simulated_slow_frame_ms);
    let effective_render_cap = normalize_render_fps_cap(resolve_render_fps_cap(
        env::var(RENDER_FPS_ENV_VAR),
        config.max_render_fps,
    ));
    let render_frame_target = target_frame_duration(effective_render_cap);

    let clock_start = Instant::now();
    let mut scheduler = FixedStepScheduler::from_tps(config.target_tps, max_frame_delta, Duration::ZERO);
    let mut input_collector = InputCollector::default();

    info!(
        target_tps = config.target_tps.max(1),
        fixed_dt_us = scheduler.fixed_dt().as_micros() as u64,
        max_frame_delta_ms = max_frame_delta.as_millis() as u64,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        slow_frame_delay_ms = slow_frame_delay.as_millis() as u64,
        render_fps_cap = %format_render_cap(effective_render_cap),
        "loop_config"
    );

    let mut last_frame_instant = Instant::now();
    let mut frame_pacer = FramePacer::new(render_frame_target, Instant::now());
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval, Instant::now());
    let mut last_applied_title: Option<String> = None;

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window_for_loop.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        input_collector.mark_quit_requested();
                        info!(reason = "window_close", "shutdown_requested");
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(error) = renderer.resize(new_size.width, new_size.height) {
                            warn!(error = %error, "renderer_resize_failed");
                            window_target.exit();
                        }
                    }
                    WindowEvent::Focused(false) => {
                        input_collector.release_all();
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        input_collector.handle_keyboard_input(&event);
                    }
                    WindowEvent::RedrawRequested => {
                        if slow_frame_delay > Duration::ZERO {
                            // Debug perturbation to exercise the frame-delta clamp.
                            thread::sleep(slow_frame_delay);
                        }

                        let now = Instant::now();
                        let raw_frame_dt = now.saturating_duration_since(last_frame_instant);
                        last_frame_instant = now;

                        let outcome = match advance_frame(
                            &mut scheduler,
                            now.saturating_duration_since(clock_start),
                            scene.as_mut(),
                            &mut renderer,
                            || input_collector.snapshot_for_tick(),
                        ) {
                            Ok(outcome) => outcome,
                            Err(error) => {
                                warn!(error = %error, "renderer_draw_failed");
                                window_target.exit();
                                return;
                            }
                        };
                        metrics_accumulator.record_ticks(outcome.ticks_run);

                        if outcome.plan.dropped_stall > Duration::ZERO {
                            warn!(
                                dropped_stall_ms = outcome.plan.dropped_stall.as_millis() as u64,
                                max_frame_delta_ms = max_frame_delta.as_millis() as u64,
                                "sim_clamp_triggered"
                            );
                        }
                        if outcome.quit_requested {
                            info!(reason = "quit_signal", "shutdown_requested");
                            window_target.exit();
                            return;
                        }

                        metrics_accumulator
                            .record_frame(raw_frame_dt, outcome.plan.dropped_stall > Duration::ZERO);
                        if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                            info!(
                                fps = snapshot.fps,
                                tps = snapshot.tps,
                                frame_time_ms = snapshot.frame_time_ms,
                                clamped_frames = snapshot.clamped_frames,
                                "loop_metrics"
                            );
                        }

                        let next_title = scene.debug_title(&metrics_accumulator.last_snapshot());
                        if next_title != last_applied_title {
                            match &next_title {
                                Some(title) => window_for_loop.set_title(title),
                                None => window_for_loop.set_title(&config.window_title),
                            }
                            last_applied_title = next_title;
                        }

                        let cap_sleep = frame_pacer.pace(Instant::now());
                        if cap_sleep > Duration::ZERO {
                            thread::sleep(cap_sleep);
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window_for_loop.request_redraw();
            }
            Event::LoopExiting => {
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

#[derive(Debug, Default)]
struct InputCollector {
    quit_requested: bool,
    action_states: ActionStates,
}

impl InputCollector {
    fn mark_quit_requested(&mut self) {
        self.quit_requested = true;
    }

    fn release_all(&mut self) {
        self.action_states = ActionStates::default();
    }

    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        let is_pressed = key_event.state == ElementState::Pressed;
        self.update_action_state_from_physical_key(key_event.physical_key, is_pressed);
    }

    fn update_action_state_from_physical_key(&mut self, key: PhysicalKey, is_pressed: bool) {
        match key {
            PhysicalKey::Code(KeyCode::KeyW) | PhysicalKey::Code(KeyCode::ArrowUp) => {
                self.action_states.set(InputAction::MoveUp, is_pressed);
            }
            PhysicalKey::Code(KeyCode::KeyD) | PhysicalKey::Code(KeyCode::ArrowRight) => {
                self.action_states.set(InputAction::MoveRight, is_pressed);
            }
            PhysicalKey::Code(KeyCode::KeyS) | PhysicalKey::Code(KeyCode::ArrowDown) => {
                self.action_states.set(InputAction::MoveDown, is_pressed);
            }
            PhysicalKey::Code(KeyCode::KeyA) | PhysicalKey::Code(KeyCode::ArrowLeft) => {
                self.action_states.set(InputAction::MoveLeft, is_pressed);
            }
            PhysicalKey::Code(KeyCode::Escape) => {
                self.action_states.set(InputAction::Quit, is_pressed);
                if is_pressed {
                    self.mark_quit_requested();
                }
            }
            _ => {}
        }
    }

    fn snapshot_for_tick(&mut self) -> InputSnapshot {
        InputSnapshot::new(self.quit_requested, self.action_states)
    }
}

fn normalize_render_fps_cap(cap: Option<u32>) -> Option<u32> {
    cap.filter(|value| *value > 0)
}

fn target_frame_duration(max_render_fps: Option<u32>) -> Option<Duration> {
    max_render_fps.map(|fps| Duration::from_secs_f64(1.0 / fps as f64))
}

fn compute_cap_sleep(elapsed: Duration, target: Option<Duration>) -> Duration {
    match target {
        Some(frame_target) if elapsed < frame_target => frame_target - elapsed,
        _ => Duration::ZERO,
    }
}

/// Spaces presented frames at least `target` apart.
#[derive(Debug, Clone, Copy)]
struct FramePacer {
    target: Option<Duration>,
    last_present: Instant,
}

impl FramePacer {
    fn new(target: Option<Duration>, now: Instant) -> Self {
        Self {
            target,
            last_present: now,
        }
    }

    /// Sleep owed after a frame that finished at `now`. The next frame is
    /// measured from the end of that sleep.
    fn pace(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_present);
        let sleep = compute_cap_sleep(elapsed, self.target);
        self.last_present = now + sleep;
        sleep
    }
}

fn format_render_cap(cap: Option<u32>) -> String {
    match cap {
        Some(value) => value.to_string(),
        None => "off".to_string(),
    }
}

fn resolve_slow_frame_delay(config_slow_frame_ms: u64) -> Duration {
    match env::var(SLOW_FRAME_ENV_VAR) {
        Ok(value) => match value.parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                warn!(
                    env_var = SLOW_FRAME_ENV_VAR,
                    value = value.as_str(),
                    "invalid slow-frame env var value; falling back to config"
                );
                Duration::from_millis(config_slow_frame_ms)
            }
        },
        Err(env::VarError::NotPresent) => Duration::from_millis(config_slow_frame_ms),
        Err(err) => {
            warn!(
                env_var = SLOW_FRAME_ENV_VAR,
                error = %err,
                "unable to read slow-frame env var; falling back to config"
            );
            Duration::from_millis(config_slow_frame_ms)
        }
    }
}

fn resolve_render_fps_cap(
    env_value: Result<String, env::VarError>,
    config_cap: Option<u32>,
) -> Option<u32> {
    match env_value {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(fps) => Some(fps),
            Err(_) => {
                warn!(
                    env_var = RENDER_FPS_ENV_VAR,
                    value = value.as_str(),
                    "invalid render fps cap; falling back to config"
                );
                config_cap
            }
        },
        Err(env::VarError::NotPresent) => config_cap,
        Err(err) => {
            warn!(
                env_var = RENDER_FPS_ENV_VAR,
                error = %err,
                "unable to read render fps cap env var; falling back to config"
            );
            config_cap
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;
    use crate::app::{FrameView, PlayerView};
    use crate::sim::{CameraOffset, MovementState, OpenField, PixelPoint};

    const OPEN: OpenField = OpenField { tile_size: 64 };

    #[derive(Default)]
    struct CountingScene {
        updates: u32,
        render_steps: u32,
        quit_on_update: Option<u32>,
        pressed_right: u32,
    }

    impl Scene for CountingScene {
        fn update(&mut self, _fixed_dt: Duration, input: &InputSnapshot) -> SceneCommand {
            self.updates += 1;
            if input.is_down(InputAction::MoveRight) {
                self.pressed_right += 1;
            }
            if self.quit_on_update == Some(self.updates) {
                SceneCommand::Quit
            } else {
                SceneCommand::None
            }
        }

        fn render_step(&mut self) {
            self.render_steps += 1;
        }

        fn frame_view(&self) -> FrameView<'_> {
            FrameView {
                camera: CameraOffset::new(self.render_steps as i32, 0),
                tilemap: &OPEN,
                player: PlayerView {
                    screen_position: PixelPoint::default(),
                    size_px: 64,
                    state: MovementState::Idle,
                    sprite_key: None,
                },
            }
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        cameras: Vec<CameraOffset>,
    }

    impl FrameRenderer for RecordingRenderer {
        type Error = Infallible;

        fn draw_frame(&mut self, view: &FrameView<'_>) -> Result<(), Infallible> {
            self.cameras.push(view.camera);
            Ok(())
        }
    }

    fn scheduler() -> FixedStepScheduler {
        FixedStepScheduler::new(
            Duration::from_millis(10),
            DEFAULT_MAX_FRAME_DELTA,
            Duration::ZERO,
        )
    }

    #[test]
    fn frame_runs_due_ticks_then_renders_once() {
        let mut scheduler = scheduler();
        let mut scene = CountingScene::default();
        let mut renderer = RecordingRenderer::default();

        let outcome = advance_frame(
            &mut scheduler,
            Duration::from_millis(35),
            &mut scene,
            &mut renderer,
            InputSnapshot::empty,
        )
        .expect("frame");

        assert_eq!(outcome.ticks_run, 3);
        assert!(!outcome.quit_requested);
        assert_eq!(scene.updates, 3);
        assert_eq!(scene.render_steps, 1);
        assert_eq!(renderer.cameras, vec![CameraOffset::new(1, 0)]);
    }

    #[test]
    fn frames_without_due_ticks_still_render() {
        let mut scheduler = scheduler();
        let mut scene = CountingScene::default();
        let mut renderer = RecordingRenderer::default();

        for ms in 1..=5 {
            advance_frame(
                &mut scheduler,
                Duration::from_millis(ms),
                &mut scene,
                &mut renderer,
                InputSnapshot::empty,
            )
            .expect("frame");
        }

        assert_eq!(scene.updates, 0);
        assert_eq!(scene.render_steps, 5);
        assert_eq!(renderer.cameras.len(), 5);
    }

    #[test]
    fn quit_stops_remaining_ticks_and_skips_draw() {
        let mut scheduler = scheduler();
        let mut scene = CountingScene {
            quit_on_update: Some(2),
            ..CountingScene::default()
        };
        let mut renderer = RecordingRenderer::default();

        let outcome = advance_frame(
            &mut scheduler,
            Duration::from_millis(100),
            &mut scene,
            &mut renderer,
            InputSnapshot::empty,
        )
        .expect("frame");

        assert!(outcome.quit_requested);
        assert_eq!(outcome.ticks_run, 2);
        assert_eq!(outcome.plan.ticks_to_run, 10);
        assert_eq!(scene.render_steps, 0);
        assert!(renderer.cameras.is_empty());
    }

    #[test]
    fn each_tick_polls_fresh_input() {
        let mut scheduler = scheduler();
        let mut scene = CountingScene::default();
        let mut renderer = RecordingRenderer::default();
        let mut polls = 0u32;

        advance_frame(
            &mut scheduler,
            Duration::from_millis(40),
            &mut scene,
            &mut renderer,
            || {
                polls += 1;
                InputSnapshot::empty().with_action_down(InputAction::MoveRight, polls % 2 == 1)
            },
        )
        .expect("frame");

        assert_eq!(polls, 4);
        assert_eq!(scene.pressed_right, 2);
    }

    #[test]
    fn stalled_frame_is_clamped_before_ticking() {
        let mut scheduler = scheduler();
        let mut scene = CountingScene::default();
        let mut renderer = RecordingRenderer::default();

        let outcome = advance_frame(
            &mut scheduler,
            Duration::from_secs(10),
            &mut scene,
            &mut renderer,
            InputSnapshot::empty,
        )
        .expect("frame");

        assert_eq!(outcome.ticks_run, 25);
        assert_eq!(outcome.plan.dropped_stall, Duration::from_millis(9_750));
        assert_eq!(scene.render_steps, 1);
    }

    #[test]
    fn wasd_and_arrow_keys_map_to_actions() {
        let mut input = InputCollector::default();

        input.update_action_state_from_physical_key(PhysicalKey::Code(KeyCode::KeyW), true);
        input.update_action_state_from_physical_key(PhysicalKey::Code(KeyCode::ArrowLeft), true);

        let snapshot = input.snapshot_for_tick();
        assert!(snapshot.is_down(InputAction::MoveUp));
        assert!(snapshot.is_down(InputAction::MoveLeft));
        assert!(!snapshot.is_down(InputAction::MoveRight));
    }

    #[test]
    fn key_release_clears_action_state() {
        let mut input = InputCollector::default();
        input.update_action_state_from_physical_key(PhysicalKey::Code(KeyCode::KeyD), true);
        input.update_action_state_from_physical_key(PhysicalKey::Code(KeyCode::KeyD), false);

        let snapshot = input.snapshot_for_tick();
        assert!(!snapshot.is_down(InputAction::MoveRight));
    }

    #[test]
    fn held_key_stays_down_across_ticks() {
        let mut input = InputCollector::default();
        input.update_action_state_from_physical_key(PhysicalKey::Code(KeyCode::KeyS), true);

        assert!(input.snapshot_for_tick().is_down(InputAction::MoveDown));
        assert!(input.snapshot_for_tick().is_down(InputAction::MoveDown));
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut input = InputCollector::default();
        input.update_action_state_from_physical_key(PhysicalKey::Code(KeyCode::KeyA), true);
        input.release_all();

        assert!(!input.snapshot_for_tick().is_down(InputAction::MoveLeft));
    }

    #[test]
    fn escape_latches_quit_signal() {
        use crate::app::QuitSignal;

        let mut input = InputCollector::default();
        input.update_action_state_from_physical_key(PhysicalKey::Code(KeyCode::Escape), true);
        input.update_action_state_from_physical_key(PhysicalKey::Code(KeyCode::Escape), false);

        assert!(input.snapshot_for_tick().quit_requested());
    }

    #[test]
    fn target_frame_duration_none_when_cap_off() {
        assert_eq!(target_frame_duration(None), None);
    }

    #[test]
    fn target_frame_duration_for_60hz_is_expected() {
        let duration = target_frame_duration(Some(60)).expect("duration");
        assert!((duration.as_secs_f64() - (1.0 / 60.0)).abs() < 0.000_001);
    }

    #[test]
    fn compute_cap_sleep_zero_when_over_budget() {
        let sleep = compute_cap_sleep(Duration::from_millis(20), target_frame_duration(Some(60)));
        assert_eq!(sleep, Duration::ZERO);
    }

    #[test]
    fn compute_cap_sleep_positive_when_under_budget() {
        let sleep = compute_cap_sleep(Duration::from_millis(5), target_frame_duration(Some(60)));
        assert!(sleep > Duration::ZERO);
    }

    #[test]
    fn pacer_sleeps_only_the_rest_of_the_frame_budget() {
        let target = target_frame_duration(Some(60)).expect("duration");
        let start = Instant::now();
        let mut pacer = FramePacer::new(Some(target), start);

        let work = Duration::from_millis(10);
        let sleep = pacer.pace(start + work);
        assert_eq!(sleep, target - work);
        assert!(sleep < Duration::from_millis(7));
    }

    #[test]
    fn paced_frames_present_one_target_apart() {
        let target = target_frame_duration(Some(60)).expect("duration");
        let start = Instant::now();
        let mut pacer = FramePacer::new(Some(target), start);
        let work = Duration::from_millis(10);

        let mut frame_start = start;
        let mut presents = Vec::new();
        for _ in 0..4 {
            let done = frame_start + work;
            let sleep = pacer.pace(done);
            frame_start = done + sleep;
            presents.push(frame_start);
        }

        for pair in presents.windows(2) {
            assert_eq!(pair[1] - pair[0], target);
        }
    }

    #[test]
    fn pacer_without_cap_or_over_budget_never_sleeps() {
        let start = Instant::now();
        let mut uncapped = FramePacer::new(None, start);
        assert_eq!(uncapped.pace(start + Duration::from_millis(1)), Duration::ZERO);

        let target = target_frame_duration(Some(60));
        let mut capped = FramePacer::new(target, start);
        assert_eq!(capped.pace(start + Duration::from_millis(30)), Duration::ZERO);
        assert_eq!(
            capped.pace(start + Duration::from_millis(35)),
            target.expect("duration") - Duration::from_millis(5)
        );
    }

    #[test]
    fn render_fps_cap_env_overrides_config() {
        assert_eq!(resolve_render_fps_cap(Ok("60".to_string()), None), Some(60));
        assert_eq!(resolve_render_fps_cap(Ok(" 30 ".to_string()), Some(60)), Some(30));
        assert_eq!(
            normalize_render_fps_cap(resolve_render_fps_cap(Ok("0".to_string()), Some(60))),
            None
        );
    }

    #[test]
    fn render_fps_cap_falls_back_to_config() {
        assert_eq!(
            resolve_render_fps_cap(Err(env::VarError::NotPresent), Some(144)),
            Some(144)
        );
        assert_eq!(resolve_render_fps_cap(Ok("fast".to_string()), Some(144)), Some(144));
        assert_eq!(resolve_render_fps_cap(Ok("-1".to_string()), None), None);
    }

    #[test]
    fn normalize_render_fps_cap_disables_zero() {
        assert_eq!(normalize_render_fps_cap(Some(0)), None);
        assert_eq!(normalize_render_fps_cap(Some(60)), Some(60));
    }

    #[test]
    fn default_viewport_matches_window_size() {
        let config = LoopConfig::default();
        assert_eq!(
            config.viewport(),
            Viewport {
                width: 1280,
                height: 720
            }
        );
        assert_eq!(config.target_tps, 100);
    }
}
