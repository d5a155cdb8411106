//! Per-frame phases run by the board, in order: player, enemy, bullets.
//!
//! Phases are plain functions over the board's parts. They report a loss by
//! returning the cause; the board owns the status transition.

pub mod bullets;
pub mod enemy;
pub mod player;
pub mod snapshot;
