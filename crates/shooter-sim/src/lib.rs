//! Simulation engine for the shooter game.
//!
//! Owns the player, the enemy and every live bullet, advances them once per
//! frame in a fixed phase order, and produces `BoardSnapshot`s for the host.

pub mod bullet;
pub mod config;
pub mod engine;
pub mod shooter;
pub mod spawn;
pub mod systems;

pub use bullet::Bullet;
pub use config::{BoardConfig, ShooterTuning};
pub use engine::Board;
pub use shooter::Shooter;
pub use shooter_core as core;

#[cfg(test)]
mod tests;
