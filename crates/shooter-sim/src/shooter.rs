//! A moving square that fires bullets, gated by a reload timer.

use glam::DVec2;

use shooter_core::constants::EPSILON;
use shooter_core::enums::Direction;
use shooter_core::error::ConfigError;
use shooter_core::state::ShooterView;
use shooter_core::types::{aim_angle, ShooterId, Square};

use crate::bullet::Bullet;
use crate::config::ShooterTuning;

/// Player- or AI-controlled shooter.
///
/// The reload timer starts at 0 (ready), jumps to `reload_time` on every
/// shot and decays by the frame delta down to 0. Movement is never clamped
/// to the playfield; leaving it is the caller's loss condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Shooter {
    square: Square,
    id: ShooterId,
    speed: f64,
    bullet_width: f64,
    bullet_speed: f64,
    reload_time: f64,
    time_to_reload: f64,
}

impl Shooter {
    pub fn new(id: ShooterId, center: DVec2, tuning: &ShooterTuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self {
            square: Square::new(center, tuning.width),
            id,
            speed: tuning.speed,
            bullet_width: tuning.bullet_width,
            bullet_speed: tuning.bullet_speed,
            reload_time: tuning.reload_time,
            time_to_reload: 0.0,
        })
    }

    pub fn id(&self) -> ShooterId {
        self.id
    }

    pub fn square(&self) -> &Square {
        &self.square
    }

    pub fn center(&self) -> DVec2 {
        self.square.center
    }

    /// Teleport, e.g. on spawn. Leaves the reload timer alone.
    pub fn set_center(&mut self, center: DVec2) {
        self.square.center = center;
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn reload_time(&self) -> f64 {
        self.reload_time
    }

    pub fn time_to_reload(&self) -> f64 {
        self.time_to_reload
    }

    pub fn can_shoot(&self) -> bool {
        self.time_to_reload <= 0.0
    }

    /// Translate by `distance` along `unit`.
    pub fn move_by(&mut self, distance: f64, unit: DVec2) {
        self.square.translate(distance * unit);
    }

    /// Move one frame's worth in a cardinal direction, then tick the reload timer.
    pub fn move_in_direction(&mut self, dt: f64, direction: Direction) {
        self.move_by(dt * self.speed, direction.to_vector());
        self.tick_reload(dt);
    }

    /// Seek toward `target`, stopping exactly on it instead of overshooting.
    /// The reload timer ticks whether or not the shooter moved.
    pub fn move_towards(&mut self, dt: f64, target: DVec2) {
        let offset = target - self.square.center;
        let remaining = offset.length();
        if remaining > EPSILON {
            let distance = (dt * self.speed).min(remaining);
            self.move_by(distance, offset / remaining);
        }
        self.tick_reload(dt);
    }

    pub fn tick_reload(&mut self, dt: f64) {
        self.time_to_reload = (self.time_to_reload - dt).max(0.0);
    }

    /// Fire from the current center along `angle_radians` if reloaded.
    pub fn try_shoot(&mut self, angle_radians: f64) -> Option<Bullet> {
        if !self.can_shoot() {
            return None;
        }
        self.time_to_reload = self.reload_time;
        Some(Bullet::new(
            self.square.center,
            self.bullet_width,
            self.id,
            self.bullet_speed,
            angle_radians,
        ))
    }

    pub fn try_shoot_towards(&mut self, target: DVec2) -> Option<Bullet> {
        self.try_shoot(aim_angle(self.square.center, target))
    }

    pub fn view(&self) -> ShooterView {
        ShooterView {
            id: self.id,
            square: self.square,
            can_shoot: self.can_shoot(),
            time_to_reload: self.time_to_reload,
        }
    }
}
