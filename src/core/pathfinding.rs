use std::collections::{HashMap, VecDeque};

use crate::core::game::Sokoban;
use crate::core::models::{Direction, Vec2};

impl Sokoban {
    /// Shortest walking route from the player to `target`, as the sequence
    /// of cells to step through: the first entry is one step away from the
    /// player and the last is `target` itself. Walking never pushes a box;
    /// cells holding a box are obstacles exactly like walls.
    ///
    /// Breadth-first search over the 4-neighborhood, so the result is a
    /// shortest path; ties are broken by the fixed expansion order of
    /// [`Direction::ALL`]. Empty when `target` is the player's current cell
    /// or cannot be reached (including out-of-bounds targets). Never
    /// mutates state.
    pub fn find_path(&self, target: Vec2) -> Vec<Vec2> {
        if target == self.player() || !self.is_walkable(target) {
            return Vec::new();
        }

        let mut came_from: HashMap<Vec2, Vec2> = HashMap::new();
        let mut frontier: VecDeque<Vec2> = VecDeque::new();
        came_from.insert(self.player(), self.player());
        frontier.push_back(self.player());

        'search: while let Some(pos) = frontier.pop_front() {
            for direction in Direction::ALL {
                let next = pos + direction.delta();
                if !self.is_walkable(next) || came_from.contains_key(&next) {
                    continue;
                }
                came_from.insert(next, pos);
                if next == target {
                    break 'search;
                }
                frontier.push_back(next);
            }
        }

        if !came_from.contains_key(&target) {
            return Vec::new();
        }

        // Walk the parent links back from the target, then flip.
        let mut path = Vec::new();
        let mut pos = target;
        while pos != self.player() {
            path.push(pos);
            match came_from.get(&pos) {
                Some(&prev) => pos = prev,
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}
