//! Keyboard and pointer state, turned into a `PlayerIntent` once per frame.

use glam::DVec2;

use shooter_core::commands::PlayerIntent;
use shooter_core::enums::Direction;
use shooter_core::types::aim_angle;

/// Host keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Shoot,
    Restart,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Shoot | Key::Restart => None,
        }
    }
}

/// Input accumulated between frames.
///
/// The most recently pressed direction wins. Releasing that key stops the
/// player; releasing any other direction key does not. A restart is
/// requested on release of the restart key and consumed by the loop.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    direction: Option<Direction>,
    shoot: bool,
    restart_requested: bool,
    /// Pointer position in board coordinates.
    pointer: DVec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if key == Key::Shoot {
            self.shoot = true;
        }
        if let Some(direction) = key.direction() {
            self.direction = Some(direction);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Shoot => self.shoot = false,
            Key::Restart => self.restart_requested = true,
            _ => {
                if key.direction() == self.direction {
                    self.direction = None;
                }
            }
        }
    }

    pub fn set_pointer(&mut self, board_position: DVec2) {
        self.pointer = board_position;
    }

    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    /// Returns true once per restart key release.
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }

    /// Intent for this frame, aiming from `player_center` at the pointer.
    pub fn intent(&self, player_center: DVec2) -> PlayerIntent {
        PlayerIntent::new(
            self.direction,
            aim_angle(player_center, self.pointer),
            self.shoot,
        )
    }
}
