//! Player phase: move (or just reload), fire on request, check bounds.

use tracing::debug;

use shooter_core::commands::PlayerIntent;
use shooter_core::enums::{LossCause, Movement};
use shooter_core::events::BoardEvent;

use crate::bullet::Bullet;
use crate::shooter::Shooter;

pub fn run(
    player: &mut Shooter,
    intent: &PlayerIntent,
    dt: f64,
    bullets: &mut Vec<Bullet>,
    events: &mut Vec<BoardEvent>,
) -> Option<LossCause> {
    match intent.movement {
        Movement::Move(direction) => player.move_in_direction(dt, direction),
        Movement::Stay => player.tick_reload(dt),
    }

    if intent.shoot {
        if let Some(bullet) = player.try_shoot(intent.aim_angle) {
            debug!(owner = ?bullet.owner(), heading = bullet.heading(), "player fired");
            events.push(BoardEvent::ShotFired {
                owner: bullet.owner(),
                heading: bullet.heading(),
            });
            bullets.push(bullet);
        }
    }

    if player.square().is_valid() {
        None
    } else {
        Some(LossCause::OutOfBounds)
    }
}
