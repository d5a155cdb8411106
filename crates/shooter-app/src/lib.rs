//! Headless presentation host for the shooter simulation.
//!
//! Maps key and pointer state to `PlayerIntent`, converts between board and
//! pixel coordinates, builds draw lists from snapshots, and runs a
//! fixed-step frame loop driven by an autopilot.
//!
//! `input` and `viewport` are the surface for windowed hosts: the `shooter`
//! binary only uses the draw lists (`--draw-lists`), while `InputState` and
//! `Viewport::to_board` map real key and pointer events onto the board.

pub mod autopilot;
pub mod game_loop;
pub mod input;
pub mod settings;
pub mod viewport;
