//! Simulation constants and default tuning parameters.
//!
//! All distances are in playfield units (the playfield is the unit square),
//! speeds in playfield units per second, times in seconds.

/// Host frame rate (Hz) for fixed-step loops.
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Distances below this are treated as "already there".
pub const EPSILON: f64 = 1e-6;

// --- Shooters ---

/// Player movement speed.
pub const PLAYER_SPEED: f64 = 0.5;

/// Enemy seek speed.
pub const ENEMY_SPEED: f64 = 0.3;

/// Side length of both shooters' squares.
pub const SHOOTER_WIDTH: f64 = 0.1;

/// Player cooldown between shots.
pub const PLAYER_RELOAD_TIME: f64 = 0.5;

/// Enemy cooldown between shots.
pub const ENEMY_RELOAD_TIME: f64 = 1.0;

// --- Bullets ---

/// Bullet travel speed.
pub const BULLET_SPEED: f64 = 0.1;

/// Side length of a bullet's square.
pub const BULLET_WIDTH: f64 = 0.05;

// --- Scoring ---

/// Points awarded each time the player's bullet hits the enemy.
pub const HIT_SCORE: u64 = 1;

// --- Spawning ---

/// Upper bound on rejection-sampling attempts when respawning the enemy.
pub const MAX_RESPAWN_ATTEMPTS: u32 = 1000;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
