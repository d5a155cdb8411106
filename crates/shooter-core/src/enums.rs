//! Enumeration types used throughout the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Cardinal movement direction. The y axis grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector in playfield space.
    pub fn to_vector(self) -> DVec2 {
        match self {
            Direction::Up => DVec2::new(0.0, -1.0),
            Direction::Right => DVec2::new(1.0, 0.0),
            Direction::Down => DVec2::new(0.0, 1.0),
            Direction::Left => DVec2::new(-1.0, 0.0),
        }
    }
}

/// Player movement intent for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    #[default]
    Stay,
    Move(Direction),
}

impl From<Option<Direction>> for Movement {
    fn from(direction: Option<Direction>) -> Self {
        direction.map_or(Movement::Stay, Movement::Move)
    }
}

/// Overall game status. `Playing -> Lost` only; `reset()` is the way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Lost,
}

/// Why the player lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// Player square left the playfield.
    OutOfBounds,
    /// Enemy caught up with the player.
    Collision,
    /// An enemy bullet hit the player.
    Shot,
}
