//! Bullet phase: advance every bullet, resolve hits, cull the ones that left.
//!
//! Bullets are processed in insertion order and survivors keep their
//! relative order. For each bullet, in this order:
//! 1. hit on the player: game lost, bullet dropped
//! 2. hit on the enemy: score, enemy respawns, bullet dropped
//! 3. out of the playfield: bullet dropped
//!
//! A respawn takes effect immediately, so later bullets in the same frame
//! are tested against the enemy's new location.

use rand::Rng;
use tracing::debug;

use shooter_core::enums::LossCause;
use shooter_core::events::BoardEvent;

use crate::bullet::Bullet;
use crate::config::BoardConfig;
use crate::shooter::Shooter;
use crate::spawn;

#[allow(clippy::too_many_arguments)]
pub fn run<R: Rng + ?Sized>(
    bullets: &mut Vec<Bullet>,
    player: &Shooter,
    enemy: &mut Shooter,
    dt: f64,
    config: &BoardConfig,
    rng: &mut R,
    score: &mut u64,
    events: &mut Vec<BoardEvent>,
) -> Option<LossCause> {
    let mut loss = None;

    bullets.retain_mut(|bullet| {
        bullet.advance(dt);

        if bullet.hits(player.square(), Some(player.id())) {
            loss = Some(LossCause::Shot);
            return false;
        }

        if bullet.hits(enemy.square(), Some(enemy.id())) {
            *score += config.hit_score;
            events.push(BoardEvent::EnemyHit { score: *score });
            let at = spawn::respawn_enemy(
                enemy,
                player.square(),
                rng,
                config.spawn_margin(),
                config.max_respawn_attempts,
            );
            events.push(BoardEvent::EnemyRespawned { at });
            debug!(score = *score, "enemy hit");
            return false;
        }

        bullet.is_valid()
    });

    loss
}
