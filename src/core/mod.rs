mod game;
mod models;
mod pathfinding;

pub use game::{DEFAULT_LEVEL, DEFAULT_UNDO_LIMIT, Sokoban};
pub use models::{
    BOX, BOX_IN_GOAL, GOAL, PLAYER, PLAYER_IN_GOAL, SPACE, WALL,
    BoxMove, Cell, Direction, HistoryEntry, SokobanError, Vec2, tile_char,
};
