//! Board <-> pixel conversion and the per-frame draw list.
//!
//! The board is the unit square; the window is a `size_px` square. Nothing
//! here draws: hosts walk the `DrawList` with whatever backend they use.

use glam::{DVec2, IVec2};
use serde::Serialize;

use shooter_core::state::{BoardSnapshot, ShooterView};
use shooter_core::types::{direction_vector, ShooterId, Square};

/// Default window side in pixels.
pub const SCREEN_SIZE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    Black,
    Blue,
    Red,
    White,
}

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::Red => (255, 0, 0),
            Color::White => (255, 255, 255),
        }
    }
}

/// Filled axis-aligned square in pixels, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawRect {
    pub top_left: IVec2,
    pub size: i32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawLine {
    pub start: IVec2,
    pub end: IVec2,
    pub color: Color,
}

/// Text anchored at its top-centre point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawLabel {
    pub mid_top: IVec2,
    pub text: String,
    pub color: Color,
}

/// Everything to draw for one frame, back to front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawList {
    pub background: Color,
    pub score: DrawLabel,
    pub rects: Vec<DrawRect>,
    /// Aim indicator; only while playing.
    pub aim_line: Option<DrawLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub size_px: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size_px: SCREEN_SIZE,
        }
    }
}

impl Viewport {
    pub fn new(size_px: u32) -> Self {
        Self { size_px }
    }

    /// Pixel length of a board distance, rounded to the nearest pixel.
    pub fn to_screen_size(&self, size: f64) -> i32 {
        (size * self.size_px as f64).round() as i32
    }

    pub fn to_screen(&self, location: DVec2) -> IVec2 {
        (location * self.size_px as f64).round().as_ivec2()
    }

    pub fn to_board(&self, pixel: IVec2) -> DVec2 {
        pixel.as_dvec2() / self.size_px as f64
    }

    pub fn rect(&self, square: &Square, color: Color) -> DrawRect {
        DrawRect {
            top_left: self.to_screen(square.top_left()),
            size: self.to_screen_size(square.width),
            color,
        }
    }

    /// Draw list for `snapshot`, with the player aiming along `aim_angle`.
    pub fn draw_list(&self, snapshot: &BoardSnapshot, aim_angle: f64) -> DrawList {
        let mut rects = Vec::with_capacity(snapshot.bullets.len() + 2);
        rects.push(self.rect(&snapshot.player.square, Color::Blue));
        rects.push(self.rect(&snapshot.enemy.square, Color::Red));
        for bullet in &snapshot.bullets {
            let color = bullet_color(bullet.owner, &snapshot.player);
            rects.push(self.rect(&bullet.square, color));
        }

        let aim_line = snapshot
            .is_playing()
            .then(|| self.aim_line(&snapshot.player, aim_angle));

        DrawList {
            background: Color::White,
            score: DrawLabel {
                mid_top: self.to_screen(DVec2::new(0.5, 0.0)),
                text: format!("Score: {}", snapshot.score),
                color: Color::Black,
            },
            rects,
            aim_line,
        }
    }

    /// Line from the player's center, twice the player's width long.
    fn aim_line(&self, player: &ShooterView, aim_angle: f64) -> DrawLine {
        let start = player.square.center;
        let end = start + 2.0 * player.square.width * direction_vector(aim_angle);
        DrawLine {
            start: self.to_screen(start),
            end: self.to_screen(end),
            color: Color::Blue,
        }
    }
}

/// Player bullets are blue, everything else red.
pub fn bullet_color(owner: ShooterId, player: &ShooterView) -> Color {
    if owner == player.id {
        Color::Blue
    } else {
        Color::Red
    }
}
