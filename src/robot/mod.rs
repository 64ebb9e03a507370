//! Robot model for program execution
//!
//! This module provides the state the interpreter mutates:
//! - [`Robot`]: Position and heading on an unbounded integer grid
//! - [`trail`]: Every cell the robot has occupied, in order
//!
//! # Movement
//!
//! The robot starts at the origin facing north. `go` moves one cell forward,
//! `right` and `left` turn 90° without moving:
//!
//! ```text
//!          North (y + 1)
//!               ▲
//! West (x - 1) ◀ ▶ East (x + 1)
//!               ▼
//!          South (y - 1)
//! ```

pub mod trail;

use crate::parser::ast::Primitive;
use std::fmt;

/// A cell on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Position { x, y }
    }

    /// The neighbouring cell in direction `heading`
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Arrow glyph used by the grid pane
    pub fn arrow(self) -> char {
        match self {
            Heading::North => '▲',
            Heading::East => '▶',
            Heading::South => '▼',
            Heading::West => '◀',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        };
        f.write_str(name)
    }
}

/// Position and heading of the robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Robot {
    pub position: Position,
    pub heading: Heading,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one primitive. Returns true if the robot changed cells.
    pub fn apply(&mut self, action: Primitive) -> bool {
        match action {
            Primitive::Go => {
                self.position = self.position.step(self.heading);
                true
            }
            Primitive::Right => {
                self.heading = self.heading.turn_right();
                false
            }
            Primitive::Left => {
                self.heading = self.heading.turn_left();
                false
            }
        }
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.heading)
    }
}
