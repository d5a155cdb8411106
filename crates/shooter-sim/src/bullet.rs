//! Straight-line projectile.

use glam::DVec2;

use shooter_core::state::BulletView;
use shooter_core::types::{direction_vector, ShooterId, Square};

/// A bullet flies at constant speed along the heading it was fired with.
/// It lives until it hits something or leaves the playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    square: Square,
    owner: ShooterId,
    speed: f64,
    heading: f64,
}

impl Bullet {
    pub fn new(center: DVec2, width: f64, owner: ShooterId, speed: f64, heading: f64) -> Self {
        Self {
            square: Square::new(center, width),
            owner,
            speed,
            heading,
        }
    }

    pub fn square(&self) -> &Square {
        &self.square
    }

    pub fn owner(&self) -> ShooterId {
        self.owner
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn advance(&mut self, dt: f64) {
        self.square
            .translate(dt * self.speed * direction_vector(self.heading));
    }

    /// Whether the bullet overlaps `target`. A bullet never hits the square
    /// owned by its own firer.
    pub fn hits(&self, target: &Square, target_owner: Option<ShooterId>) -> bool {
        if target_owner == Some(self.owner) {
            return false;
        }
        self.square.intersects(target)
    }

    pub fn is_valid(&self) -> bool {
        self.square.is_valid()
    }

    pub fn view(&self) -> BulletView {
        BulletView {
            owner: self.owner,
            square: self.square,
            heading: self.heading,
        }
    }
}
