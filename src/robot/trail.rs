//! Trail of visited cells
//!
//! The trail only grows while the program runs. Snapshots remember how long
//! it was at each step, so any point in history is a prefix of the full
//! trail and stepping backward never copies it.

use super::Position;
use rustc_hash::FxHashMap;

/// Cells occupied by the robot, in visiting order, starting at the origin
#[derive(Debug, Clone)]
pub struct Trail {
    positions: Vec<Position>,
}

impl Trail {
    pub fn new() -> Self {
        Trail {
            positions: vec![Position::ORIGIN],
        }
    }

    pub fn push(&mut self, position: Position) {
        self.positions.push(position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: the origin is recorded on construction.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The first `len` positions (clamped to the trail length)
    pub fn prefix(&self, len: usize) -> &[Position] {
        &self.positions[..len.min(self.positions.len())]
    }

    /// Keep only the first `len` positions
    pub fn truncate(&mut self, len: usize) {
        self.positions.truncate(len);
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

/// How many times each cell appears in `positions`
pub fn visit_counts(positions: &[Position]) -> FxHashMap<Position, u32> {
    let mut counts = FxHashMap::default();
    for pos in positions {
        *counts.entry(*pos).or_insert(0) += 1;
    }
    counts
}

/// Smallest `(min, max)` corners enclosing every position, or `None` for an empty slice
pub fn bounds(positions: &[Position]) -> Option<(Position, Position)> {
    let first = *positions.first()?;
    Some(positions.iter().fold((first, first), |(lo, hi), p| {
        (
            Position::new(lo.x.min(p.x), lo.y.min(p.y)),
            Position::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}
