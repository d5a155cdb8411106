//! Enemy phase: seek the player, fire at the player when reloaded, check contact.

use tracing::debug;

use shooter_core::enums::LossCause;
use shooter_core::events::BoardEvent;

use crate::bullet::Bullet;
use crate::shooter::Shooter;

pub fn run(
    enemy: &mut Shooter,
    player: &Shooter,
    dt: f64,
    bullets: &mut Vec<Bullet>,
    events: &mut Vec<BoardEvent>,
) -> Option<LossCause> {
    let target = player.center();
    enemy.move_towards(dt, target);

    if let Some(bullet) = enemy.try_shoot_towards(target) {
        debug!(owner = ?bullet.owner(), heading = bullet.heading(), "enemy fired");
        events.push(BoardEvent::ShotFired {
            owner: bullet.owner(),
            heading: bullet.heading(),
        });
        bullets.push(bullet);
    }

    if enemy.square().intersects(player.square()) {
        Some(LossCause::Collision)
    } else {
        None
    }
}
