use crate::app::InputAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Input evaluation order: the first direction that starts a move wins the tick.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Neighbouring cell offset in tile units, y growing downwards.
    pub const fn cell_delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// One pixel of camera travel for a move in this direction.
    ///
    /// The background scrolls opposite to the player's apparent motion: moving
    /// right pulls the background left.
    pub const fn camera_step(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (-1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (1, 0),
        }
    }

    pub const fn input_action(self) -> InputAction {
        match self {
            Direction::Up => InputAction::MoveUp,
            Direction::Right => InputAction::MoveRight,
            Direction::Down => InputAction::MoveDown,
            Direction::Left => InputAction::MoveLeft,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Scroll displacement of the background, in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CameraOffset {
    pub left: i32,
    pub top: i32,
}

impl CameraOffset {
    pub const fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    /// Offset that places `location` under `screen_position`.
    pub const fn aligning(screen_position: PixelPoint, location: PixelPoint) -> Self {
        Self {
            left: screen_position.x - location.x,
            top: screen_position.y - location.y,
        }
    }

    pub fn shift_one_pixel(&mut self, direction: Direction) {
        let (dx, dy) = direction.camera_step();
        self.left += dx;
        self.top += dy;
    }

    pub const fn grid_location(self, screen_position: PixelPoint) -> PixelPoint {
        PixelPoint {
            x: screen_position.x - self.left,
            y: screen_position.y - self.top,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TileCell {
    pub x: i32,
    pub y: i32,
}

impl TileCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell containing a world pixel. Negative coordinates floor towards -inf.
    pub fn containing(point: PixelPoint, tile_size: u32) -> Self {
        let size = tile_size.max(1) as i32;
        Self {
            x: point.x.div_euclid(size),
            y: point.y.div_euclid(size),
        }
    }

    pub const fn neighbour(self, direction: Direction) -> Self {
        let (dx, dy) = direction.cell_delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn origin_px(self, tile_size: u32) -> PixelPoint {
        let size = tile_size as i32;
        PixelPoint {
            x: self.x * size,
            y: self.y * size,
        }
    }
}
