#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveRight,
    MoveDown,
    MoveLeft,
    Quit,
}

const ACTION_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveRight => 1,
            InputAction::MoveDown => 2,
            InputAction::MoveLeft => 3,
            InputAction::Quit => 4,
        }
    }
}

/// Held-key state, polled once per simulation tick. Must not block.
pub trait InputSource {
    fn pressed(&self, action: InputAction) -> bool;
}

/// Polled once per simulation tick; asserting it ends the loop.
pub trait QuitSignal {
    fn quit_requested(&self) -> bool;
}

/// Input captured for one simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, actions: ActionStates) -> Self {
        Self {
            quit_requested,
            actions,
        }
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }
}

impl InputSource for InputSnapshot {
    fn pressed(&self, action: InputAction) -> bool {
        self.is_down(action)
    }
}

impl QuitSignal for InputSnapshot {
    fn quit_requested(&self) -> bool {
        self.quit_requested || self.is_down(InputAction::Quit)
    }
}
