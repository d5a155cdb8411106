//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned square in playfield space.
///
/// The playfield is the unit square `[0, 1] x [0, 1]`. The y axis grows
/// downward (screen convention), so "top" is the smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub center: DVec2,
    pub width: f64,
}

impl Square {
    /// The whole playfield.
    pub const PLAYFIELD: Square = Square {
        center: DVec2::new(0.5, 0.5),
        width: 1.0,
    };

    pub fn new(center: DVec2, width: f64) -> Self {
        Self { center, width }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn top_left(&self) -> DVec2 {
        self.center - DVec2::splat(self.half_width())
    }

    pub fn top_right(&self) -> DVec2 {
        self.center + DVec2::new(self.half_width(), -self.half_width())
    }

    pub fn bottom_left(&self) -> DVec2 {
        self.center + DVec2::new(-self.half_width(), self.half_width())
    }

    pub fn bottom_right(&self) -> DVec2 {
        self.center + DVec2::splat(self.half_width())
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// Whether `point` lies inside the square, edges included.
    pub fn contains(&self, point: DVec2) -> bool {
        let top_left = self.top_left();
        let bottom_right = self.bottom_right();
        (top_left.x..=bottom_right.x).contains(&point.x)
            && (top_left.y..=bottom_right.y).contains(&point.y)
    }

    /// Closed-interval overlap test. Squares that only share an edge or a
    /// corner intersect.
    pub fn intersects(&self, other: &Square) -> bool {
        let min = self.top_left().max(other.top_left());
        let max = self.bottom_right().min(other.bottom_right());
        min.x <= max.x && min.y <= max.y
    }

    /// Whether the whole square lies within the playfield.
    pub fn is_valid(&self) -> bool {
        Self::PLAYFIELD.contains(self.top_left()) && Self::PLAYFIELD.contains(self.bottom_right())
    }

    pub fn translate(&mut self, offset: DVec2) {
        self.center += offset;
    }
}

/// Identity of a shooter, unique within one board.
///
/// Bullets carry their firer's id so they never hit the shooter that fired them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShooterId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardTime {
    /// Number of frames simulated since the last reset.
    pub frame: u64,
    /// Simulated seconds since the last reset.
    pub elapsed_secs: f64,
}

impl BoardTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}

/// Unit vector pointing along `angle_radians` (0 = +x, pi/2 = +y, i.e. down).
pub fn direction_vector(angle_radians: f64) -> DVec2 {
    DVec2::new(angle_radians.cos(), angle_radians.sin())
}

/// Angle in radians of the ray from `from` to `to`.
pub fn aim_angle(from: DVec2, to: DVec2) -> f64 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}
