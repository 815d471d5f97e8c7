use std::collections::{HashSet, VecDeque};
use std::fmt;

use tracing::{debug, trace};

use crate::core::models::{
    BOX, BOX_IN_GOAL, GOAL, PLAYER, PLAYER_IN_GOAL, WALL,
    BoxMove, Cell, Direction, HistoryEntry, SokobanError, Vec2, tile_char,
};

/// Built-in 10x5 level used when the level text is empty: a walled room with
/// one box and one goal, the player starting on the goal.
pub const DEFAULT_LEVEL: &str = "\
##########
#        #
#  $  +  #
#        #
##########";

/// Undo depth used by [`Sokoban::default`]. Deep enough for any interactive
/// session while keeping history memory bounded.
pub const DEFAULT_UNDO_LIMIT: usize = 4096;

/// The puzzle engine: fixed terrain parsed once at construction, plus the
/// mutable player/box state, move and push counters, and a bounded undo stack.
#[derive(Clone, Debug)]
pub struct Sokoban {
    grid: Vec<Vec<Cell>>,
    player: Vec2,
    boxes: HashSet<Vec2>,
    nmove: u32,
    npush: u32,
    history: VecDeque<HistoryEntry>,
    undo_limit: usize,
}

impl Sokoban {
    /// Parses a level text into an engine.
    ///
    /// One character per cell: ` ` floor, `#` wall, `.` goal, `$` box,
    /// `*` box on goal, `@` player, `+` player on goal. Unrecognized
    /// characters parse as floor. Blank lines are skipped and ragged lines
    /// are padded with floor to the widest row. An empty (or all-whitespace)
    /// text selects [`DEFAULT_LEVEL`].
    ///
    /// Fails with [`SokobanError::InvalidLevel`] unless exactly one player
    /// symbol is present.
    pub fn new(level: &str, undo_limit: usize) -> Result<Sokoban, SokobanError> {
        let level = if level.trim().is_empty() { DEFAULT_LEVEL } else { level };

        let rows: Vec<&str> = level
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        let ncol = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(rows.len());
        let mut players: Vec<Vec2> = Vec::new();
        let mut boxes: HashSet<Vec2> = HashSet::new();

        for (i, line) in rows.iter().enumerate() {
            let mut row = Vec::with_capacity(ncol);
            for (j, ch) in line.chars().enumerate() {
                let pos = Vec2::new(i as i32, j as i32);
                let cell = match ch {
                    WALL => Cell::Wall,
                    GOAL => Cell::Target,
                    BOX => {
                        boxes.insert(pos);
                        Cell::Floor
                    }
                    BOX_IN_GOAL => {
                        boxes.insert(pos);
                        Cell::Target
                    }
                    PLAYER => {
                        players.push(pos);
                        Cell::Floor
                    }
                    PLAYER_IN_GOAL => {
                        players.push(pos);
                        Cell::Target
                    }
                    _ => Cell::Floor,
                };
                row.push(cell);
            }
            row.resize(ncol, Cell::Floor);
            grid.push(row);
        }

        let &[player] = players.as_slice() else {
            return Err(SokobanError::InvalidLevel { players: players.len() });
        };

        debug!(
            nrow = grid.len(),
            ncol,
            boxes = boxes.len(),
            undo_limit,
            "parsed level"
        );

        Ok(Sokoban {
            grid,
            player,
            boxes,
            nmove: 0,
            npush: 0,
            history: VecDeque::new(),
            undo_limit,
        })
    }

    pub fn nrow(&self) -> usize {
        self.grid.len()
    }

    pub fn ncol(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn boxes(&self) -> &HashSet<Vec2> {
        &self.boxes
    }

    /// Player displacements since construction.
    pub fn nmove(&self) -> u32 {
        self.nmove
    }

    /// Box displacements since construction. Always `npush <= nmove`.
    pub fn npush(&self) -> u32 {
        self.npush
    }

    /// Undoable steps, most recent last. Never longer than the undo limit.
    pub fn history(&self) -> &VecDeque<HistoryEntry> {
        &self.history
    }

    pub fn undo_limit(&self) -> usize {
        self.undo_limit
    }

    /// Whether `pos` lies within the grid extents.
    pub fn covers(&self, pos: Vec2) -> bool {
        pos.i >= 0
            && (pos.i as usize) < self.nrow()
            && pos.j >= 0
            && (pos.j as usize) < self.ncol()
    }

    pub(crate) fn cell(&self, pos: Vec2) -> Cell {
        self.grid[pos.i as usize][pos.j as usize]
    }

    fn is_open(&self, pos: Vec2) -> bool {
        self.covers(pos) && self.cell(pos) != Cell::Wall
    }

    /// In-bounds, not a wall, and not occupied by a box. The cells
    /// pathfinding may walk through.
    pub(crate) fn is_walkable(&self, pos: Vec2) -> bool {
        self.is_open(pos) && !self.boxes.contains(&pos)
    }

    /// Whether a step in `direction` would succeed. Pure: never mutates.
    pub fn can_step(&self, direction: Direction) -> bool {
        let dest = self.player + direction.delta();
        if !self.is_open(dest) {
            return false;
        }
        if self.boxes.contains(&dest) {
            // Pushing: the cell beyond the box must be free as well.
            let beyond = dest + direction.delta();
            return self.is_open(beyond) && !self.boxes.contains(&beyond);
        }
        true
    }

    /// Moves the player one cell, pushing a box ahead of it if the cell
    /// beyond the box is free.
    ///
    /// A rejected step (wall, out of bounds, blocked push) returns `false`
    /// and leaves every part of the state untouched. A successful step
    /// updates the counters and records one history entry, evicting the
    /// oldest entry once the undo limit is reached.
    pub fn step(&mut self, direction: Direction) -> bool {
        if !self.can_step(direction) {
            trace!(?direction, "step rejected");
            return false;
        }

        let dest = self.player + direction.delta();
        let push = self.boxes.take(&dest).map(|from| {
            let to = from + direction.delta();
            self.boxes.insert(to);
            BoxMove { from, to }
        });

        self.history.push_back(HistoryEntry {
            player: self.player,
            push,
            nmove: self.nmove,
            npush: self.npush,
        });
        if self.history.len() > self.undo_limit {
            self.history.pop_front();
        }

        self.player = dest;
        self.nmove += 1;
        if push.is_some() {
            self.npush += 1;
        }
        trace!(?direction, player = ?self.player, pushed = push.is_some(), "step");
        true
    }

    /// Reverts the most recent step, restoring the player, the pushed box
    /// (if any), and both counters. Returns `false` when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop_back() else {
            return false;
        };
        if let Some(push) = entry.push {
            self.boxes.remove(&push.to);
            self.boxes.insert(push.from);
        }
        self.player = entry.player;
        self.nmove = entry.nmove;
        self.npush = entry.npush;
        trace!(player = ?self.player, "undo");
        true
    }

    /// Solved once every goal cell is covered by a box. Boxes resting on
    /// plain floor do not count against this.
    pub fn is_solved(&self) -> bool {
        for (i, row) in self.grid.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell == Cell::Target && !self.boxes.contains(&Vec2::new(i as i32, j as i32)) {
                    return false;
                }
            }
        }
        true
    }

    /// Character-grid snapshot using the same symbol table the parser
    /// accepts.
    pub fn to_grid(&self) -> Vec<Vec<char>> {
        self.grid
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &cell)| {
                        let pos = Vec2::new(i as i32, j as i32);
                        tile_char(cell, pos == self.player, self.boxes.contains(&pos))
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Sokoban {
    fn default() -> Sokoban {
        Sokoban::new(DEFAULT_LEVEL, DEFAULT_UNDO_LIMIT)
            .expect("built-in default level is well formed")
    }
}

impl fmt::Display for Sokoban {
    /// Rows joined by `\n`, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_grid().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
