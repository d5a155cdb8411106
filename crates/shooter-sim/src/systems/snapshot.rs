//! Snapshot system: builds a `BoardSnapshot` from the board's parts.
//!
//! Read-only apart from the event list, which is handed over to the snapshot.

use shooter_core::enums::{GameStatus, LossCause};
use shooter_core::events::BoardEvent;
use shooter_core::state::BoardSnapshot;
use shooter_core::types::BoardTime;

use crate::bullet::Bullet;
use crate::shooter::Shooter;

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: BoardTime,
    status: GameStatus,
    loss_cause: Option<LossCause>,
    score: u64,
    player: &Shooter,
    enemy: &Shooter,
    bullets: &[Bullet],
    events: Vec<BoardEvent>,
) -> BoardSnapshot {
    BoardSnapshot {
        time,
        status,
        loss_cause,
        score,
        player: player.view(),
        enemy: enemy.view(),
        bullets: bullets.iter().map(Bullet::view).collect(),
        events,
    }
}
