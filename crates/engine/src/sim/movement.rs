use std::time::Duration;

use super::collision::BlockedDirections;
use super::geometry::{CameraOffset, Direction};

pub const DEFAULT_MOVEMENT_LIMIT: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementConfig {
    /// Minimum simulated time between accepted move inputs.
    pub movement_limit: Duration,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            movement_limit: DEFAULT_MOVEMENT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovementState {
    #[default]
    Idle,
    Moving(Direction),
}

impl MovementState {
    pub fn label(self) -> &'static str {
        match self {
            MovementState::Idle => "idle",
            MovementState::Moving(Direction::Up) => "moving_up",
            MovementState::Moving(Direction::Right) => "moving_right",
            MovementState::Moving(Direction::Down) => "moving_down",
            MovementState::Moving(Direction::Left) => "moving_left",
        }
    }
}

/// A single tile move that is still scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMove {
    pub direction: Direction,
    pub remaining_px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Started(Direction),
    Blocked(Direction),
    Busy,
    CoolingDown,
}

impl MoveOutcome {
    /// Whether the request consumed the cooldown window.
    pub fn was_issued(self) -> bool {
        matches!(self, MoveOutcome::Started(_) | MoveOutcome::Blocked(_))
    }
}

#[derive(Debug, Clone)]
pub struct MovementController {
    tile_size: u32,
    cooldown: Duration,
    limit: Duration,
    active: Option<ActiveMove>,
}

impl MovementController {
    /// Starts with the cooldown already elapsed so the first press responds.
    pub fn new(tile_size: u32, config: MovementConfig) -> Self {
        Self {
            tile_size: tile_size.max(1),
            cooldown: config.movement_limit,
            limit: config.movement_limit,
            active: None,
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn cooldown_ready(&self) -> bool {
        self.cooldown >= self.limit
    }

    pub fn active_move(&self) -> Option<ActiveMove> {
        self.active
    }

    pub fn state(&self) -> MovementState {
        match self.active {
            Some(active) => MovementState::Moving(active.direction),
            None => MovementState::Idle,
        }
    }

    /// Remaining scroll pixels for `direction`; zero unless it is the active move.
    pub fn budget(&self, direction: Direction) -> u32 {
        match self.active {
            Some(active) if active.direction == direction => active.remaining_px,
            _ => 0,
        }
    }

    pub fn issue_move(&mut self, direction: Direction, blocked: &BlockedDirections) -> MoveOutcome {
        if !self.cooldown_ready() {
            return MoveOutcome::CoolingDown;
        }
        let outcome = self.offer(direction, blocked);
        if outcome.was_issued() {
            self.cooldown = Duration::ZERO;
        }
        outcome
    }

    /// Offers several directions within one cooldown window. The cooldown is
    /// checked once up front and reset once if any request was issued.
    pub fn issue_moves<D>(&mut self, directions: D, blocked: &BlockedDirections) -> Vec<MoveOutcome>
    where
        D: IntoIterator<Item = Direction>,
    {
        if !self.cooldown_ready() {
            return Vec::new();
        }
        let outcomes = directions
            .into_iter()
            .map(|direction| self.offer(direction, blocked))
            .filter(|outcome| outcome.was_issued())
            .collect::<Vec<_>>();
        if !outcomes.is_empty() {
            self.cooldown = Duration::ZERO;
        }
        outcomes
    }

    fn offer(&mut self, direction: Direction, blocked: &BlockedDirections) -> MoveOutcome {
        if self.active.is_some() {
            return MoveOutcome::Busy;
        }
        if blocked.is_blocked(direction) {
            return MoveOutcome::Blocked(direction);
        }
        self.active = Some(ActiveMove {
            direction,
            remaining_px: self.tile_size,
        });
        MoveOutcome::Started(direction)
    }

    pub fn advance_cooldown(&mut self, fixed_dt: Duration) {
        self.cooldown = self.cooldown.saturating_add(fixed_dt);
    }

    /// Moves the camera one pixel along the active move. Returns the direction
    /// of a move that finished on this step.
    pub fn drain_scroll_step(&mut self, camera: &mut CameraOffset) -> Option<Direction> {
        let active = self.active.as_mut()?;
        debug_assert!(active.remaining_px > 0, "active move with empty budget");

        camera.shift_one_pixel(active.direction);
        active.remaining_px = active.remaining_px.saturating_sub(1);
        if active.remaining_px > 0 {
            return None;
        }

        let finished = active.direction;
        self.active = None;
        Some(finished)
    }
}
