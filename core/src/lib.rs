//! Pure, deterministic state engine for a single-player grid snake game.
//!
//! A host creates a [`GameState`] once per game, feeds input events through
//! [`GameState::change_direction`] and calls [`GameState::step`] once per tick.
//! Rendering, key handling and tick cadence stay on the host side.

pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::snake::{
    DeathReason, Direction, GameConfig, GameState, Point, WallCollisionMode,
};
