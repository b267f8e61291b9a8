use super::config::SpeedPreset;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Per-tick displacement of the snake head.
///
/// Either standing still (only before the first move of a run) or one
/// orthogonal unit along a [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const STILL: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn is_still(&self) -> bool {
        *self == Self::STILL
    }

    /// The direction this velocity points in, `None` while standing still
    pub fn direction(&self) -> Option<Direction> {
        match (self.dx, self.dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Velocity { dx, dy }
    }
}

/// Player intent delivered to the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Request a new heading for the next tick
    Direction(Direction),
    Pause,
    Resume,
    /// Pause while running, resume while paused
    TogglePause,
    Start,
    Restart,
    SetSpeed(SpeedPreset),
}

impl From<Direction> for Input {
    fn from(direction: Direction) -> Self {
        Input::Direction(direction)
    }
}
