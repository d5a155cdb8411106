//! Spawn helpers: shooter ids, random locations and enemy respawn.

use glam::DVec2;
use rand::Rng;
use tracing::{debug, warn};

use shooter_core::types::{ShooterId, Square};

use crate::shooter::Shooter;

/// Hand out the next board-local shooter id.
pub fn allocate_id(next_shooter_id: &mut u32) -> ShooterId {
    let id = ShooterId(*next_shooter_id);
    *next_shooter_id += 1;
    id
}

/// Uniform random point in `[margin, 1 - margin]` on both axes.
///
/// `margin` must be at most 0.5.
pub fn random_location<R: Rng + ?Sized>(rng: &mut R, margin: f64) -> DVec2 {
    let range = margin..=1.0 - margin;
    DVec2::new(rng.gen_range(range.clone()), rng.gen_range(range))
}

/// Move `enemy` to a random location whose square does not touch `player`.
///
/// Samples at most `max_attempts` times. If every sample overlaps, the enemy
/// is parked at the spawn-range corner farthest from the player instead.
/// Returns the new location.
pub fn respawn_enemy<R: Rng + ?Sized>(
    enemy: &mut Shooter,
    player: &Square,
    rng: &mut R,
    margin: f64,
    max_attempts: u32,
) -> DVec2 {
    for attempt in 1..=max_attempts {
        let candidate = random_location(rng, margin);
        if !Square::new(candidate, enemy.square().width).intersects(player) {
            enemy.set_center(candidate);
            debug!(attempt, x = candidate.x, y = candidate.y, "enemy respawned");
            return candidate;
        }
    }

    let fallback = farthest_corner(player.center, margin);
    warn!(
        max_attempts,
        x = fallback.x,
        y = fallback.y,
        "no free spawn location found, using farthest corner"
    );
    enemy.set_center(fallback);
    fallback
}

/// Corner of the spawn range `[margin, 1 - margin]^2` farthest from `from`.
///
/// With `margin` equal to a shooter width below
/// `BoardConfig::SHOOTER_WIDTH_LIMIT`, a shooter there is clear of any
/// shooter that lies inside the playfield.
pub fn farthest_corner(from: DVec2, margin: f64) -> DVec2 {
    let lo = margin;
    let hi = 1.0 - margin;
    [
        DVec2::new(lo, lo),
        DVec2::new(hi, lo),
        DVec2::new(hi, hi),
        DVec2::new(lo, hi),
    ]
    .into_iter()
    .max_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
    .unwrap_or(DVec2::splat(lo))
}
