use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tilewalk_engine::sim::{TileMap, DEFAULT_MOVEMENT_LIMIT};
use tilewalk_engine::{
    load_level, resolve_app_paths, AppError, AppPaths, LoopConfig, MovementConfig, Scene,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::gameplay::ExplorationScene;

const LEVEL_ENV_VAR: &str = "TILEWALK_LEVEL";
const MOVE_LIMIT_ENV_VAR: &str = "TILEWALK_MOVE_LIMIT_MS";
const DEFAULT_LEVEL_FILE: &str = "level.json";

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
    pub(crate) paths: AppPaths,
}

pub(crate) fn build_app() -> Result<AppWiring, AppError> {
    init_tracing();
    info!("=== Tilewalk Startup ===");

    let paths = resolve_app_paths()?;
    wire_app(
        paths,
        env::var(LEVEL_ENV_VAR).ok(),
        env::var(MOVE_LIMIT_ENV_VAR).ok(),
    )
}

fn wire_app(
    paths: AppPaths,
    level_name: Option<String>,
    move_limit: Option<String>,
) -> Result<AppWiring, AppError> {
    let level_path = resolve_level_path(&paths.levels_dir, level_name);
    let level = load_level(&level_path)?;
    let start = level.player_start();
    info!(
        path = %level_path.display(),
        width = level.width(),
        height = level.height(),
        tile_size = level.tile_size(),
        start_x = start.x,
        start_y = start.y,
        "level_loaded"
    );

    let movement = MovementConfig {
        movement_limit: resolve_movement_limit(move_limit),
    };
    let config = LoopConfig::default();
    let scene = ExplorationScene::new(level, config.viewport(), movement);

    Ok(AppWiring {
        config,
        scene: Box::new(scene),
        paths,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn resolve_level_path(levels_dir: &Path, raw: Option<String>) -> PathBuf {
    match raw.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => levels_dir.join(name),
        _ => levels_dir.join(DEFAULT_LEVEL_FILE),
    }
}

fn resolve_movement_limit(raw: Option<String>) -> Duration {
    let Some(value) = raw else {
        return DEFAULT_MOVEMENT_LIMIT;
    };
    match value.trim().parse::<u64>() {
        Ok(ms) => Duration::from_millis(ms),
        Err(_) => {
            warn!(
                env_var = MOVE_LIMIT_ENV_VAR,
                value = value.as_str(),
                "invalid movement limit; falling back to default"
            );
            DEFAULT_MOVEMENT_LIMIT
        }
    }
}
