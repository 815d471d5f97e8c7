use std::ops::{Add, Neg, Sub};

use thiserror::Error;

/// Grid coordinate: `i` is the row (downwards), `j` the column (rightwards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub const fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i - rhs.i, j: self.j - rhs.j }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 { i: -self.i, j: -self.j }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the fixed order pathfinding expands neighbors:
    /// up first, then clockwise.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub const fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    /// Inverse of [`delta`](Self::delta); `None` for anything but a unit step.
    pub fn from_delta(delta: Vec2) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }
}

/// Fixed terrain of one grid position. `Target` is a goal cell that a box
/// must cover for the level to be solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Wall,
    Floor,
    Target,
}

pub const SPACE: char = ' ';
pub const WALL: char = '#';
pub const GOAL: char = '.';
pub const BOX: char = '$';
pub const BOX_IN_GOAL: char = '*';
pub const PLAYER: char = '@';
pub const PLAYER_IN_GOAL: char = '+';

/// Display symbol for one grid position. The seven results are exactly the
/// characters the level parser accepts.
pub fn tile_char(cell: Cell, has_player: bool, has_box: bool) -> char {
    match (cell, has_player, has_box) {
        (Cell::Wall, _, _) => WALL,
        (Cell::Floor, true, _) => PLAYER,
        (Cell::Floor, _, true) => BOX,
        (Cell::Floor, _, _) => SPACE,
        (Cell::Target, true, _) => PLAYER_IN_GOAL,
        (Cell::Target, _, true) => BOX_IN_GOAL,
        (Cell::Target, _, _) => GOAL,
    }
}

/// One reversible push: the box moved `from` → `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxMove {
    pub from: Vec2,
    pub to: Vec2,
}

/// Everything needed to reverse one successful step: the pre-step player
/// position, the box displacement if the step was a push, and the pre-step
/// counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub player: Vec2,
    pub push: Option<BoxMove>,
    pub nmove: u32,
    pub npush: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SokobanError {
    #[error("level must contain exactly one player, found {players}")]
    InvalidLevel { players: usize },
}
