//! Core types and definitions for the shooter simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! playfield geometry, player intent, status enums, events, snapshots,
//! tuning constants and configuration errors.
//! It has no dependency on a random source or a logging backend.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
