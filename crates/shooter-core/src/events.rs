//! Events emitted by the simulation for host feedback (sounds, effects, logs).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::LossCause;
use crate::types::ShooterId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardEvent {
    /// A shooter fired a bullet.
    ShotFired { owner: ShooterId, heading: f64 },
    /// The player's bullet hit the enemy.
    EnemyHit { score: u64 },
    /// The enemy was moved to a fresh location.
    EnemyRespawned { at: DVec2 },
    /// The game was lost.
    PlayerLost { cause: LossCause },
}
