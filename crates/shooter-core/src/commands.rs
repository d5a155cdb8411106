//! Per-frame player input handed to the simulation by the host.

use serde::{Deserialize, Serialize};

use crate::enums::{Direction, Movement};

/// Everything the player asks for in a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerIntent {
    pub movement: Movement,
    /// Firing angle in radians, measured from +x toward +y (down).
    pub aim_angle: f64,
    /// Fire if the player's reload timer allows it.
    pub shoot: bool,
}

impl PlayerIntent {
    pub fn new(direction: Option<Direction>, aim_angle: f64, shoot: bool) -> Self {
        Self {
            movement: direction.into(),
            aim_angle,
            shoot,
        }
    }

    /// Stand still and hold fire.
    pub fn idle() -> Self {
        Self::default()
    }
}
