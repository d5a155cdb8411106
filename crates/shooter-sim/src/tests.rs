//! Tests for shooters, board configuration and the frame phases.

use glam::DVec2;
use rand::rngs::mock::StepRng;

use shooter_core::commands::PlayerIntent;
use shooter_core::enums::*;
use shooter_core::error::ConfigError;
use shooter_core::events::BoardEvent;
use shooter_core::types::ShooterId;

use crate::bullet::Bullet;
use crate::config::{BoardConfig, ShooterTuning};
use crate::engine::Board;
use crate::shooter::Shooter;

const DT: f64 = 0.01;

fn tuning(speed: f64, reload_time: f64) -> ShooterTuning {
    ShooterTuning {
        width: 0.1,
        speed,
        bullet_width: 0.05,
        bullet_speed: 0.1,
        reload_time,
    }
}

fn shooter_at(x: f64, y: f64) -> Shooter {
    Shooter::new(ShooterId(0), DVec2::new(x, y), &tuning(0.5, 0.5)).unwrap()
}

fn board() -> Board {
    Board::new(BoardConfig::default()).unwrap()
}

/// Put the shooters at fixed spots and clear the bullets.
fn place(board: &mut Board, player: DVec2, enemy: DVec2) {
    let (p, e, bullets) = board.parts_mut();
    p.set_center(player);
    e.set_center(enemy);
    bullets.clear();
}

fn push_bullet(board: &mut Board, bullet: Bullet) {
    let (_, _, bullets) = board.parts_mut();
    bullets.push(bullet);
}

// ---- Shooter ----

#[test]
fn test_shoot_then_reload_scenario() {
    let mut shooter = shooter_at(0.5, 0.5);
    assert!(shooter.can_shoot());

    let bullet = shooter.try_shoot(0.0).expect("ready shooter fires");
    assert_eq!(bullet.square().center, DVec2::new(0.5, 0.5));
    assert_eq!(bullet.heading(), 0.0);
    assert_eq!(bullet.owner(), shooter.id());
    assert_eq!(bullet.square().width, 0.05);
    assert_eq!(bullet.speed(), 0.1);
    assert_eq!(shooter.time_to_reload(), 0.5);

    assert!(shooter.try_shoot(0.0).is_none());
    assert_eq!(shooter.time_to_reload(), 0.5);
}

#[test]
fn test_reload_timer_decays_and_floors_at_zero() {
    let mut shooter = shooter_at(0.5, 0.5);
    shooter.try_shoot(0.0).unwrap();

    shooter.tick_reload(0.2);
    assert!((shooter.time_to_reload() - 0.3).abs() < 1e-12);
    assert!(shooter.try_shoot(1.0).is_none());

    shooter.tick_reload(1.0);
    assert_eq!(shooter.time_to_reload(), 0.0);
    assert!(shooter.can_shoot());
    assert!(shooter.try_shoot(1.0).is_some());
    assert_eq!(shooter.time_to_reload(), shooter.reload_time());
}

#[test]
fn test_zero_reload_time_fires_every_call() {
    let mut shooter =
        Shooter::new(ShooterId(0), DVec2::new(0.5, 0.5), &tuning(0.5, 0.0)).unwrap();
    assert!(shooter.try_shoot(0.0).is_some());
    assert!(shooter.try_shoot(0.0).is_some());
}

#[test]
fn test_move_in_direction() {
    let mut shooter = shooter_at(0.5, 0.5);
    shooter.try_shoot(0.0).unwrap();
    shooter.move_in_direction(0.2, Direction::Up);
    assert!((shooter.center() - DVec2::new(0.5, 0.4)).length() < 1e-12);
    assert!((shooter.time_to_reload() - 0.3).abs() < 1e-12);

    shooter.move_in_direction(0.2, Direction::Right);
    assert!((shooter.center() - DVec2::new(0.6, 0.4)).length() < 1e-12);
}

#[test]
fn test_move_by_is_not_clamped() {
    let mut shooter = shooter_at(0.5, 0.5);
    shooter.move_by(2.0, Direction::Left.to_vector());
    assert!((shooter.center().x + 1.5).abs() < 1e-12);
    assert!(!shooter.square().is_valid());
}

#[test]
fn test_move_towards_never_overshoots() {
    let targets = [
        DVec2::new(0.9, 0.5),
        DVec2::new(0.51, 0.52),
        DVec2::new(0.1, 0.2),
    ];
    for target in targets {
        for dt in [0.01, 0.1, 1.0] {
            let mut shooter = shooter_at(0.5, 0.5);
            let before = shooter.center().distance(target);
            shooter.move_towards(dt, target);
            let after = shooter.center().distance(target);
            let expected = (before - shooter.speed() * dt).max(0.0);
            assert!(
                (after - expected).abs() < 1e-9,
                "target {target:?} dt {dt}: {after} vs {expected}"
            );
        }
    }
}

#[test]
fn test_move_towards_own_location_stays_put_but_reloads() {
    let mut shooter = shooter_at(0.3, 0.7);
    shooter.try_shoot(0.0).unwrap();
    shooter.move_towards(0.1, DVec2::new(0.3, 0.7));
    assert!((shooter.center() - DVec2::new(0.3, 0.7)).length() < 1e-12);
    assert!((shooter.time_to_reload() - 0.4).abs() < 1e-12);
}

#[test]
fn test_try_shoot_towards_aims_at_target() {
    let mut shooter = shooter_at(0.5, 0.5);
    let bullet = shooter.try_shoot_towards(DVec2::new(0.5, 0.9)).unwrap();
    assert!((bullet.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!(shooter.try_shoot_towards(DVec2::new(0.9, 0.9)).is_none());
}

#[test]
fn test_shooter_rejects_bad_tuning() {
    let center = DVec2::new(0.5, 0.5);
    let mut bad = tuning(0.5, 0.5);
    bad.width = 0.0;
    assert!(matches!(
        Shooter::new(ShooterId(0), center, &bad),
        Err(ConfigError::NonPositiveWidth { .. })
    ));

    let bad = tuning(-0.1, 0.5);
    assert!(matches!(
        Shooter::new(ShooterId(0), center, &bad),
        Err(ConfigError::NonPositiveSpeed { .. })
    ));

    let bad = tuning(0.5, -1.0);
    assert!(matches!(
        Shooter::new(ShooterId(0), center, &bad),
        Err(ConfigError::NegativeReloadTime { .. })
    ));
}

// ---- Config ----

#[test]
fn test_default_config_is_valid() {
    let config = BoardConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.player_speed, 0.5);
    assert_eq!(config.enemy_speed, 0.3);
    assert_eq!(config.bullet_speed, 0.1);
    assert_eq!(config.shooter_width, 0.1);
    assert_eq!(config.bullet_width, 0.05);
    assert_eq!(config.enemy_reload_time, 1.0);
    assert_eq!(config.player_reload_time, 0.5);
    assert_eq!(config.hit_score, 1);
}

#[test]
fn test_config_validation_names_the_field() {
    let config = BoardConfig {
        enemy_speed: 0.0,
        ..Default::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::NonPositiveSpeed {
            field: "enemy_speed",
            value: 0.0
        })
    );

    let config = BoardConfig {
        shooter_width: 0.25,
        ..Default::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::WidthTooLarge {
            field: "shooter_width",
            value: 0.25,
            limit: 0.25
        })
    );
    assert!(BoardConfig {
        shooter_width: 0.4,
        ..Default::default()
    }
    .validate()
    .is_err());

    let config = BoardConfig {
        player_reload_time: f64::INFINITY,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonFiniteValue {
            field: "player_reload_time",
            ..
        })
    ));

    let config = BoardConfig {
        max_respawn_attempts: 0,
        ..Default::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroRespawnAttempts));
}

#[test]
fn test_board_new_fails_fast_on_bad_config() {
    let config = BoardConfig {
        bullet_width: -0.05,
        ..Default::default()
    };
    assert!(matches!(
        Board::new(config),
        Err(ConfigError::NonPositiveWidth {
            field: "bullet_width",
            ..
        })
    ));
}

// ---- Board construction and reset ----

#[test]
fn test_new_board_starts_playing() {
    let board = board();
    assert_eq!(board.status(), GameStatus::Playing);
    assert_eq!(board.score(), 0);
    assert!(board.bullets().is_empty());
    assert_ne!(board.player().id(), board.enemy().id());
    assert!(board.player().square().is_valid());
    assert!(board.enemy().square().is_valid());
    assert!(!board.enemy().square().intersects(board.player().square()));
}

#[test]
fn test_injected_rng_drives_spawns() {
    // A generator that always yields zero samples the low end of the spawn
    // range, so both shooters land on the same spot and the enemy has to
    // fall back to the farthest corner.
    let board = Board::with_rng(BoardConfig::default(), StepRng::new(0, 0)).unwrap();
    assert!((board.player().center() - DVec2::splat(0.1)).length() < 1e-12);
    assert!((board.enemy().center() - DVec2::splat(0.9)).length() < 1e-12);
    assert!(!board.enemy().square().intersects(board.player().square()));
}

#[test]
fn test_reset_round_trip() {
    let mut board = board();
    let ids = (board.player().id(), board.enemy().id());
    for _ in 0..50 {
        board.update(0.05, &PlayerIntent::new(Some(Direction::Up), 0.3, true));
    }
    assert!(!board.is_playing(), "walking up for 2.5s leaves the playfield");

    for _ in 0..100 {
        board.reset();
        assert_eq!(board.status(), GameStatus::Playing);
        assert_eq!(board.score(), 0);
        assert_eq!(board.loss_cause(), None);
        assert!(board.bullets().is_empty());
        assert_eq!(board.time().frame, 0);
        assert!(!board.enemy().square().intersects(board.player().square()));
        assert!(board.player().square().is_valid());
        assert_eq!((board.player().id(), board.enemy().id()), ids);
    }
}

#[test]
fn test_widest_shooters_still_reset_apart() {
    let config = BoardConfig {
        shooter_width: 0.2499,
        ..Default::default()
    };
    config.validate().unwrap();

    let mut board = Board::new(config.clone()).unwrap();
    for _ in 0..200 {
        board.reset();
        assert!(!board.enemy().square().intersects(board.player().square()));
        assert!(board.enemy().square().is_valid());
    }

    // Forced fallback: every sample lands on the player.
    let board = Board::with_rng(config, StepRng::new(0, 0)).unwrap();
    assert!(!board.enemy().square().intersects(board.player().square()));
}

// ---- Frame phases ----

#[test]
fn test_enemy_bullet_on_player_loses_game() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.15, 0.15));
    let enemy_id = board.enemy().id();
    push_bullet(
        &mut board,
        Bullet::new(DVec2::new(0.5, 0.5), 0.05, enemy_id, 0.1, 0.0),
    );

    board.update(DT, &PlayerIntent::idle());

    assert_eq!(board.status(), GameStatus::Lost);
    assert_eq!(board.loss_cause(), Some(LossCause::Shot));
    assert_eq!(board.score(), 0);
    // Only the enemy's fresh shot remains.
    assert_eq!(board.bullets().len(), 1);
    assert!(board
        .bullets()
        .iter()
        .all(|b| !b.square().intersects(board.player().square())));
}

#[test]
fn test_player_bullet_on_enemy_scores_and_respawns() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.2, 0.2));
    let player_id = board.player().id();
    push_bullet(
        &mut board,
        Bullet::new(DVec2::new(0.2, 0.2), 0.05, player_id, 0.1, 0.0),
    );

    board.update(DT, &PlayerIntent::idle());
    let snapshot = board.snapshot();

    assert_eq!(board.status(), GameStatus::Playing);
    assert_eq!(board.score(), board.config().hit_score);
    assert!(!board.enemy().square().intersects(board.player().square()));
    assert!(board.bullets().iter().all(|b| b.owner() != player_id));
    assert!(snapshot
        .events
        .iter()
        .any(|e| matches!(e, BoardEvent::EnemyHit { score: 1 })));
    let respawned_at = snapshot.events.iter().find_map(|e| match e {
        BoardEvent::EnemyRespawned { at } => Some(*at),
        _ => None,
    });
    assert_eq!(respawned_at, Some(board.enemy().center()));
}

#[test]
fn test_player_leaving_playfield_loses_game() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.06), DVec2::new(0.5, 0.85));

    board.update(0.1, &PlayerIntent::new(Some(Direction::Up), 0.0, false));

    assert_eq!(board.status(), GameStatus::Lost);
    assert_eq!(board.loss_cause(), Some(LossCause::OutOfBounds));
}

#[test]
fn test_enemy_contact_loses_game() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.58, 0.5));

    board.update(DT, &PlayerIntent::idle());

    assert_eq!(board.status(), GameStatus::Lost);
    assert_eq!(board.loss_cause(), Some(LossCause::Collision));
}

#[test]
fn test_multiple_losses_in_one_frame_keep_first_cause() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.06), DVec2::new(0.5, 0.85));
    let enemy_id = board.enemy().id();
    // Sits where the player will be after moving up.
    push_bullet(
        &mut board,
        Bullet::new(DVec2::new(0.5, 0.01), 0.05, enemy_id, 0.0001, 0.0),
    );

    board.update(0.1, &PlayerIntent::new(Some(Direction::Up), 0.0, false));

    assert_eq!(board.status(), GameStatus::Lost);
    assert_eq!(board.loss_cause(), Some(LossCause::OutOfBounds));
    // The bullet phase still ran and consumed the hit.
    assert!(board.bullets().iter().all(|b| b.owner() != enemy_id
        || !b.square().intersects(board.player().square())));
    let lost_events = board
        .snapshot()
        .events
        .iter()
        .filter(|e| matches!(e, BoardEvent::PlayerLost { .. }))
        .count();
    assert_eq!(lost_events, 1);
}

#[test]
fn test_own_bullet_never_hits_player() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.15, 0.85));

    board.update(DT, &PlayerIntent::new(None, 0.0, true));

    assert_eq!(board.status(), GameStatus::Playing);
    let player_id = board.player().id();
    assert_eq!(
        board.bullets().iter().filter(|b| b.owner() == player_id).count(),
        1
    );
}

#[test]
fn test_player_fire_respects_reload() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.15, 0.85));
    let player_id = board.player().id();
    let shoot = PlayerIntent::new(None, 0.0, true);

    board.update(DT, &shoot);
    board.update(DT, &shoot);
    let count = board.bullets().iter().filter(|b| b.owner() == player_id).count();
    assert_eq!(count, 1);
    assert!((board.player().time_to_reload() - (0.5 - DT)).abs() < 1e-9);
}

#[test]
fn test_enemy_fires_when_reloaded() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.15, 0.5));
    let enemy_id = board.enemy().id();

    board.update(DT, &PlayerIntent::idle());
    let shots: Vec<_> = board
        .bullets()
        .iter()
        .filter(|b| b.owner() == enemy_id)
        .collect();
    assert_eq!(shots.len(), 1);
    // Aimed straight at the player, to the right.
    assert!(shots[0].heading().abs() < 1e-9);
    assert_eq!(board.enemy().time_to_reload(), board.config().enemy_reload_time);
}

#[test]
fn test_enemy_seeks_player() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.15, 0.5));
    let before = board.enemy().center().distance(board.player().center());

    board.update(0.1, &PlayerIntent::idle());

    let after = board.enemy().center().distance(board.player().center());
    assert!((before - after - 0.03).abs() < 1e-9);
}

#[test]
fn test_out_of_bounds_bullets_are_culled_in_order() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.15, 0.85));
    let player_id = board.player().id();
    // Disarm the enemy for this frame.
    let _ = board.parts_mut().1.try_shoot(0.0);
    let fast = 1.0;
    push_bullet(
        &mut board,
        Bullet::new(DVec2::new(0.8, 0.2), 0.05, player_id, fast, 0.0),
    );
    push_bullet(
        &mut board,
        Bullet::new(DVec2::new(0.97, 0.2), 0.05, player_id, fast, 0.0),
    );
    push_bullet(
        &mut board,
        Bullet::new(DVec2::new(0.3, 0.2), 0.05, player_id, fast, 0.0),
    );

    board.update(DT, &PlayerIntent::idle());

    let xs: Vec<f64> = board.bullets().iter().map(|b| b.square().center.x).collect();
    assert_eq!(xs.len(), 2);
    assert!((xs[0] - 0.81).abs() < 1e-9);
    assert!((xs[1] - 0.31).abs() < 1e-9);
}

#[test]
fn test_update_is_noop_after_loss() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.58, 0.5));
    board.update(DT, &PlayerIntent::idle());
    assert!(!board.is_playing());

    let frame = board.time().frame;
    let enemy_at = board.enemy().center();
    board.update(DT, &PlayerIntent::idle());
    assert_eq!(board.time().frame, frame);
    assert_eq!(board.enemy().center(), enemy_at);
}

#[test]
fn test_invalid_dt_is_ignored() {
    let mut board = board();
    let player_at = board.player().center();
    for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        board.update(dt, &PlayerIntent::new(Some(Direction::Left), 0.0, true));
    }
    assert_eq!(board.time().frame, 0);
    assert_eq!(board.player().center(), player_at);
    assert!(board.bullets().is_empty());
}

#[test]
fn test_snapshot_drains_events() {
    let mut board = board();
    place(&mut board, DVec2::new(0.5, 0.5), DVec2::new(0.15, 0.85));
    board.update(DT, &PlayerIntent::new(None, 0.0, true));

    let first = board.snapshot();
    let fired = first
        .events
        .iter()
        .filter(|e| matches!(e, BoardEvent::ShotFired { .. }))
        .count();
    assert_eq!(fired, 2, "player and enemy both fire on the first frame");
    assert_eq!(first.bullets.len(), board.bullets().len());
    assert_eq!(first.player.id, board.player().id());
    assert_eq!(first.time.frame, 1);

    let second = board.snapshot();
    assert!(second.events.is_empty());
}
