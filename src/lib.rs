//! Sokoban puzzle engine.
//!
//! Construct a [`Sokoban`] from a level text, drive it with [`Sokoban::step`]
//! and [`Sokoban::undo`], and read back the character grid, counters, and
//! solved state for display. Presentation (terminal, sprites, menus) lives
//! outside the engine; see `src/main.rs` for a terminal player built on the
//! same public surface.

pub mod console_interface;
pub mod core;

pub use crate::core::{
    BOX, BOX_IN_GOAL, BoxMove, Cell, DEFAULT_LEVEL, DEFAULT_UNDO_LIMIT, Direction, GOAL,
    HistoryEntry, PLAYER, PLAYER_IN_GOAL, SPACE, Sokoban, SokobanError, Vec2, WALL, tile_char,
};

#[cfg(test)]
mod test;
