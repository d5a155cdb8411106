//! Board snapshot: the complete visible state handed to the host each frame.

use serde::{Deserialize, Serialize};

use crate::enums::{GameStatus, LossCause};
use crate::events::BoardEvent;
use crate::types::{BoardTime, ShooterId, Square};

/// Read-only view of a board after a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub time: BoardTime,
    pub status: GameStatus,
    /// First loss of the session, if any.
    pub loss_cause: Option<LossCause>,
    pub score: u64,
    pub player: ShooterView,
    pub enemy: ShooterView,
    pub bullets: Vec<BulletView>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<BoardEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShooterView {
    pub id: ShooterId,
    pub square: Square,
    pub can_shoot: bool,
    pub time_to_reload: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    /// Firer's id; hosts use it to pick the draw color.
    pub owner: ShooterId,
    pub square: Square,
    pub heading: f64,
}

impl BoardSnapshot {
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Bullets fired by the given shooter.
    pub fn bullets_of(&self, owner: ShooterId) -> impl Iterator<Item = &BulletView> {
        self.bullets.iter().filter(move |b| b.owner == owner)
    }
}
