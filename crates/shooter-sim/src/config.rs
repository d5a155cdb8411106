//! Per-session tuning.
//!
//! Keep this separate from host/runtime settings (frame rate, output format).

use serde::{Deserialize, Serialize};

use shooter_core::constants::*;
use shooter_core::error::{check_reload_time, check_speed, check_width, ConfigError};

/// Every tunable of a board. Deserializes with defaults for missing fields,
/// so a config file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// RNG seed for spawn locations. Same seed + same inputs = same game.
    pub seed: u64,
    pub player_speed: f64,
    pub enemy_speed: f64,
    pub bullet_speed: f64,
    pub shooter_width: f64,
    pub bullet_width: f64,
    pub enemy_reload_time: f64,
    pub player_reload_time: f64,
    pub hit_score: u64,
    pub max_respawn_attempts: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,
            bullet_speed: BULLET_SPEED,
            shooter_width: SHOOTER_WIDTH,
            bullet_width: BULLET_WIDTH,
            enemy_reload_time: ENEMY_RELOAD_TIME,
            player_reload_time: PLAYER_RELOAD_TIME,
            hit_score: HIT_SCORE,
            max_respawn_attempts: MAX_RESPAWN_ATTEMPTS,
        }
    }
}

impl BoardConfig {
    /// Exclusive upper bound on shooter width.
    ///
    /// Below it, the spawn-range corner farthest from any valid player is
    /// more than one width away on some axis, so an enemy parked there never
    /// touches the player.
    pub const SHOOTER_WIDTH_LIMIT: f64 = 0.25;

    /// Check every constraint. The first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_speed("player_speed", self.player_speed)?;
        check_speed("enemy_speed", self.enemy_speed)?;
        check_speed("bullet_speed", self.bullet_speed)?;
        check_width("shooter_width", self.shooter_width)?;
        check_width("bullet_width", self.bullet_width)?;
        check_reload_time("enemy_reload_time", self.enemy_reload_time)?;
        check_reload_time("player_reload_time", self.player_reload_time)?;
        if self.shooter_width >= Self::SHOOTER_WIDTH_LIMIT {
            return Err(ConfigError::WidthTooLarge {
                field: "shooter_width",
                value: self.shooter_width,
                limit: Self::SHOOTER_WIDTH_LIMIT,
            });
        }
        if self.max_respawn_attempts == 0 {
            return Err(ConfigError::ZeroRespawnAttempts);
        }
        Ok(())
    }

    /// Distance kept from the playfield edge when spawning a shooter.
    pub fn spawn_margin(&self) -> f64 {
        self.shooter_width
    }

    pub fn player_tuning(&self) -> ShooterTuning {
        ShooterTuning {
            width: self.shooter_width,
            speed: self.player_speed,
            bullet_width: self.bullet_width,
            bullet_speed: self.bullet_speed,
            reload_time: self.player_reload_time,
        }
    }

    pub fn enemy_tuning(&self) -> ShooterTuning {
        ShooterTuning {
            width: self.shooter_width,
            speed: self.enemy_speed,
            bullet_width: self.bullet_width,
            bullet_speed: self.bullet_speed,
            reload_time: self.enemy_reload_time,
        }
    }
}

/// Tuning for a single shooter and the bullets it fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShooterTuning {
    pub width: f64,
    pub speed: f64,
    pub bullet_width: f64,
    pub bullet_speed: f64,
    pub reload_time: f64,
}

impl ShooterTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_width("width", self.width)?;
        check_speed("speed", self.speed)?;
        check_width("bullet_width", self.bullet_width)?;
        check_speed("bullet_speed", self.bullet_speed)?;
        check_reload_time("reload_time", self.reload_time)?;
        Ok(())
    }
}
