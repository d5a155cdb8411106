//! Input sources for the frame loop: a trait, plus a simple bot that plays
//! the player's side.

use glam::DVec2;

use shooter_core::commands::PlayerIntent;
use shooter_core::enums::Direction;
use shooter_core::state::{BoardSnapshot, ShooterView};
use shooter_core::types::aim_angle;

use crate::input::InputState;

/// Something that decides the player's intent each frame.
pub trait Pilot {
    fn intent(&mut self, snapshot: &BoardSnapshot) -> PlayerIntent;

    /// Whether the host should reset the board before the next frame.
    fn wants_restart(&mut self) -> bool {
        false
    }
}

impl Pilot for InputState {
    fn intent(&mut self, snapshot: &BoardSnapshot) -> PlayerIntent {
        InputState::intent(self, snapshot.player.square.center)
    }

    fn wants_restart(&mut self) -> bool {
        self.take_restart()
    }
}

/// Aims at the enemy and fires whenever reloaded. Steps back toward the
/// middle when close to an edge, and away from the enemy when it gets close.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Distance from an edge (center to edge) that counts as "too close".
    pub edge_margin: f64,
    /// Enemy distance (center to center) below which the bot retreats.
    pub keep_away: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            edge_margin: 0.15,
            keep_away: 0.3,
        }
    }
}

impl Autopilot {
    pub fn decide(&self, player: &ShooterView, enemy: &ShooterView) -> PlayerIntent {
        let here = player.square.center;
        let enemy_at = enemy.square.center;

        let direction = self
            .edge_escape(here)
            .or_else(|| {
                (here.distance(enemy_at) < self.keep_away).then(|| dominant_direction(here - enemy_at))
            });

        PlayerIntent::new(direction, aim_angle(here, enemy_at), player.can_shoot)
    }

    /// Direction back toward the middle if `at` is within `edge_margin` of an edge.
    fn edge_escape(&self, at: DVec2) -> Option<Direction> {
        let lo = self.edge_margin;
        let hi = 1.0 - self.edge_margin;
        if at.x < lo {
            Some(Direction::Right)
        } else if at.x > hi {
            Some(Direction::Left)
        } else if at.y < lo {
            Some(Direction::Down)
        } else if at.y > hi {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

impl Pilot for Autopilot {
    fn intent(&mut self, snapshot: &BoardSnapshot) -> PlayerIntent {
        self.decide(&snapshot.player, &snapshot.enemy)
    }
}

/// Cardinal direction closest to `v`. Ties go to the horizontal axis.
pub fn dominant_direction(v: DVec2) -> Direction {
    if v.x.abs() >= v.y.abs() {
        if v.x >= 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if v.y >= 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
