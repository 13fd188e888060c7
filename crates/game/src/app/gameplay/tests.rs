use std::convert::Infallible;
use std::time::Duration;

use tilewalk_engine::app::FixedStepScheduler;
use tilewalk_engine::sim::{CameraOffset, Direction, MovementState, PixelPoint, TileCell, TileMap};
use tilewalk_engine::{
    advance_frame, parse_level_json, FrameRenderer, FrameView, InputAction, InputSnapshot,
    LoopMetricsSnapshot, MovementConfig, Scene, SceneCommand, Viewport,
};

use super::ExplorationScene;

const VIEWPORT: Viewport = Viewport {
    width: 1280,
    height: 720,
};
const FRAME: Duration = Duration::from_millis(10);

const HALL: &str = r########"{
    "tile_size": 4,
    "legend": {
        "#": { "wall": true, "sprite": "tiles/wall" },
        ".": { "sprite": "tiles/floor" }
    },
    "player_sprite": "player",
    "rows": [
        "######",
        "#P...#",
        "######"
    ]
}"########;

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(CameraOffset, MovementState)>,
}

impl FrameRenderer for RecordingRenderer {
    type Error = Infallible;

    fn draw_frame(&mut self, view: &FrameView<'_>) -> Result<(), Infallible> {
        self.frames.push((view.camera, view.player.state));
        Ok(())
    }
}

fn hall_scene(movement_limit: Duration) -> ExplorationScene {
    let level = parse_level_json(HALL).expect("level");
    ExplorationScene::new(level, VIEWPORT, MovementConfig { movement_limit })
}

fn held(action: InputAction) -> InputSnapshot {
    InputSnapshot::empty().with_action_down(action, true)
}

/// Drives `frames` frames of one tick and one render step each.
fn run_frames(
    scene: &mut ExplorationScene,
    renderer: &mut RecordingRenderer,
    frames: u32,
    mut input: impl FnMut() -> InputSnapshot,
) -> bool {
    let mut scheduler = FixedStepScheduler::new(FRAME, Duration::from_millis(250), Duration::ZERO);
    for frame in 1..=frames {
        let outcome = advance_frame(&mut scheduler, FRAME * frame, scene, renderer, &mut input)
            .expect("frame");
        if outcome.quit_requested {
            return true;
        }
    }
    false
}

#[test]
fn start_cell_is_placed_under_centred_player() {
    let scene = hall_scene(Duration::from_millis(20));
    let world = scene.world();

    assert_eq!(world.player().screen_position(), PixelPoint::new(638, 358));
    assert_eq!(world.camera(), CameraOffset::new(634, 354));
    assert_eq!(world.player().cell(), TileCell::new(1, 1));
    assert!(world.player().blocked().left());
    assert!(!world.player().blocked().right());
}

#[test]
fn holding_right_walks_to_the_wall_and_stops() {
    let mut scene = hall_scene(Duration::from_millis(20));
    let mut renderer = RecordingRenderer::default();
    let start_camera = scene.world().camera();

    run_frames(&mut scene, &mut renderer, 100, || held(InputAction::MoveRight));

    let world = scene.world();
    assert_eq!(world.player().cell(), TileCell::new(4, 1));
    assert!(world.player().blocked().right());
    assert_eq!(world.player().state(), MovementState::Idle);
    assert_eq!(world.camera().left, start_camera.left - 12);
    assert_eq!(world.camera().top, start_camera.top);
}

#[test]
fn camera_scrolls_one_pixel_per_rendered_frame() {
    let mut scene = hall_scene(Duration::from_millis(200));
    let mut renderer = RecordingRenderer::default();
    let start = scene.world().camera();

    run_frames(&mut scene, &mut renderer, 6, || held(InputAction::MoveRight));

    let lefts: Vec<i32> = renderer
        .frames
        .iter()
        .map(|(camera, _)| start.left - camera.left)
        .collect();
    assert_eq!(lefts, vec![1, 2, 3, 4, 4, 4]);
    assert_eq!(renderer.frames[2].1, MovementState::Moving(Direction::Right));
    assert_eq!(renderer.frames[3].1, MovementState::Idle);
}

#[test]
fn blocked_direction_never_moves_camera() {
    let mut scene = hall_scene(Duration::ZERO);
    let mut renderer = RecordingRenderer::default();
    let start = scene.world().camera();

    run_frames(&mut scene, &mut renderer, 30, || held(InputAction::MoveUp));

    assert!(renderer.frames.iter().all(|(camera, _)| *camera == start));
    assert_eq!(scene.world().player().cell(), TileCell::new(1, 1));
}

#[test]
fn quit_signal_ends_the_run_without_drawing_that_frame() {
    let mut scene = hall_scene(Duration::from_millis(20));
    let mut renderer = RecordingRenderer::default();
    let mut polls = 0u32;

    let quit = run_frames(&mut scene, &mut renderer, 50, || {
        polls += 1;
        InputSnapshot::empty().with_quit_requested(polls == 3)
    });

    assert!(quit);
    assert_eq!(renderer.frames.len(), 2);
}

#[test]
fn update_reports_quit_after_processing_input() {
    let mut scene = hall_scene(Duration::from_millis(20));
    let input = held(InputAction::MoveRight).with_quit_requested(true);

    assert_eq!(scene.update(FRAME, &input), SceneCommand::Quit);
    assert_eq!(
        scene.world().player().state(),
        MovementState::Moving(Direction::Right)
    );
}

#[test]
fn frame_view_exposes_level_sprites() {
    let scene = hall_scene(Duration::from_millis(20));
    let view = scene.frame_view();

    assert_eq!(view.player.sprite_key, Some("player"));
    assert_eq!(view.player.size_px, 4);
    assert_eq!(
        view.tilemap.tile_visual(TileCell::new(0, 0)).sprite_key,
        Some("tiles/wall")
    );
}

#[test]
fn debug_title_shows_cell_state_and_rates() {
    let scene = hall_scene(Duration::from_millis(20));
    let metrics = LoopMetricsSnapshot {
        fps: 59.6,
        tps: 100.0,
        ..LoopMetricsSnapshot::default()
    };

    assert_eq!(
        scene.debug_title(&metrics).as_deref(),
        Some("tilewalk | cell (1, 1) | idle | 60 fps | 100 tps")
    );
}
