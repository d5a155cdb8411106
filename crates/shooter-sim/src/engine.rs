//! Board: the simulation core.
//!
//! `Board` owns the player, the enemy and every live bullet, runs the three
//! frame phases in a fixed order and produces `BoardSnapshot`s. Headless and
//! single-threaded; the host drives it once per frame with a time delta and
//! the player's intent.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use shooter_core::commands::PlayerIntent;
use shooter_core::enums::{GameStatus, LossCause};
use shooter_core::error::ConfigError;
use shooter_core::events::BoardEvent;
use shooter_core::state::BoardSnapshot;
use shooter_core::types::BoardTime;

use crate::bullet::Bullet;
use crate::config::BoardConfig;
use crate::shooter::Shooter;
use crate::spawn;
use crate::systems;

/// One game session.
///
/// The random source is only used for spawn locations. `Board::new` seeds a
/// `ChaCha8Rng` from the config; `Board::with_rng` accepts any generator.
#[derive(Debug)]
pub struct Board<R = ChaCha8Rng> {
    config: BoardConfig,
    player: Shooter,
    enemy: Shooter,
    bullets: Vec<Bullet>,
    score: u64,
    status: GameStatus,
    loss_cause: Option<LossCause>,
    time: BoardTime,
    rng: R,
    events: Vec<BoardEvent>,
}

impl Board<ChaCha8Rng> {
    /// Create a board seeded from `config.seed`.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Board<R> {
    /// Create a board drawing spawn locations from `rng`.
    pub fn with_rng(config: BoardConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut next_shooter_id = 0;
        let margin = config.spawn_margin();
        let player = Shooter::new(
            spawn::allocate_id(&mut next_shooter_id),
            spawn::random_location(&mut rng, margin),
            &config.player_tuning(),
        )?;
        let mut enemy = Shooter::new(
            spawn::allocate_id(&mut next_shooter_id),
            spawn::random_location(&mut rng, margin),
            &config.enemy_tuning(),
        )?;
        spawn::respawn_enemy(
            &mut enemy,
            player.square(),
            &mut rng,
            margin,
            config.max_respawn_attempts,
        );

        Ok(Self {
            config,
            player,
            enemy,
            bullets: Vec::new(),
            score: 0,
            status: GameStatus::Playing,
            loss_cause: None,
            time: BoardTime::default(),
            rng,
            events: Vec::new(),
        })
    }

    /// Advance the game by `dt` seconds.
    ///
    /// Runs the player, enemy and bullet phases in that order. A loss in an
    /// early phase does not stop the later ones. Does nothing once the game
    /// is lost, or when `dt` is not a positive finite number.
    pub fn update(&mut self, dt: f64, intent: &PlayerIntent) {
        if self.status == GameStatus::Lost {
            return;
        }
        if !(dt.is_finite() && dt > 0.0) {
            warn!(dt, "ignoring frame with invalid time delta");
            return;
        }

        // 1. Player
        let loss = systems::player::run(
            &mut self.player,
            intent,
            dt,
            &mut self.bullets,
            &mut self.events,
        );
        self.mark_lost(loss);

        // 2. Enemy
        let loss = systems::enemy::run(
            &mut self.enemy,
            &self.player,
            dt,
            &mut self.bullets,
            &mut self.events,
        );
        self.mark_lost(loss);

        // 3. Bullets
        let loss = systems::bullets::run(
            &mut self.bullets,
            &self.player,
            &mut self.enemy,
            dt,
            &self.config,
            &mut self.rng,
            &mut self.score,
            &mut self.events,
        );
        self.mark_lost(loss);

        self.time.advance(dt);
    }

    /// Start a fresh round: new player location, enemy respawned away from
    /// it, no bullets, zero score. Shooter ids are kept.
    pub fn reset(&mut self) {
        let margin = self.config.spawn_margin();
        self.player
            .set_center(spawn::random_location(&mut self.rng, margin));
        spawn::respawn_enemy(
            &mut self.enemy,
            self.player.square(),
            &mut self.rng,
            margin,
            self.config.max_respawn_attempts,
        );
        self.bullets.clear();
        self.events.clear();
        self.status = GameStatus::Playing;
        self.loss_cause = None;
        self.score = 0;
        self.time = BoardTime::default();
        info!("board reset");
    }

    /// Build a snapshot of the current state, handing over the events
    /// emitted since the previous snapshot.
    pub fn snapshot(&mut self) -> BoardSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            self.time,
            self.status,
            self.loss_cause,
            self.score,
            &self.player,
            &self.enemy,
            &self.bullets,
            events,
        )
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn player(&self) -> &Shooter {
        &self.player
    }

    pub fn enemy(&self) -> &Shooter {
        &self.enemy
    }

    /// Live bullets in firing order.
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn loss_cause(&self) -> Option<LossCause> {
        self.loss_cause
    }

    pub fn time(&self) -> BoardTime {
        self.time
    }

    /// Test hook: mutable access to every part of the board.
    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut Shooter, &mut Shooter, &mut Vec<Bullet>) {
        (&mut self.player, &mut self.enemy, &mut self.bullets)
    }

    /// `Playing -> Lost` only. The first cause of the session is kept.
    fn mark_lost(&mut self, cause: Option<LossCause>) {
        let Some(cause) = cause else {
            return;
        };
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Lost;
            self.loss_cause = Some(cause);
            self.events.push(BoardEvent::PlayerLost { cause });
            info!(?cause, score = self.score, frame = self.time.frame, "player lost");
        }
    }
}
