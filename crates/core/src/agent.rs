//! Agent module - right-hand wall follower
//!
//! The agent only ever looks at two cells per step: the one straight ahead and
//! the one on its right. It turns left when blocked, otherwise walks forward,
//! and then turns right whenever the wall on its right opens up. In a perfect
//! maze this traces the wall of the whole tree and eventually passes every
//! reachable cell.

use crate::error::Result;
use crate::grid::Grid;
use crate::types::{Direction, Point, Tile};

/// What a single [`Agent::step`] did.
///
/// A move and a left turn never happen in the same step, and neither do a
/// left turn and a right turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub moved: bool,
    pub turned_left: bool,
    pub turned_right: bool,
}

/// Traversal state: where the agent stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    position: Point,
    direction: Direction,
}

impl Agent {
    pub fn new(position: Point, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn left_direction(&self) -> Direction {
        self.direction.turn_left()
    }

    pub fn right_direction(&self) -> Direction {
        self.direction.turn_right()
    }

    /// The cell straight ahead
    pub fn ahead(&self) -> Point {
        self.position.offset(self.direction)
    }

    /// The cell on the agent's left
    pub fn left(&self) -> Point {
        self.position.offset(self.left_direction())
    }

    /// The cell on the agent's right
    pub fn right(&self) -> Point {
        self.position.offset(self.right_direction())
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }

    /// Advance one step through `maze`.
    pub fn step(&mut self, maze: &Grid<Tile>) -> Result<StepOutcome> {
        let mut outcome = StepOutcome::default();

        let ahead = self.ahead();
        if maze.get_at(ahead)?.is_wall() {
            self.turn_left();
            outcome.turned_left = true;
        } else {
            self.position = ahead;
            outcome.moved = true;
        }

        if !maze.get_at(self.right())?.is_wall() {
            self.turn_right();
            outcome.turned_right = true;
        }

        Ok(outcome)
    }
}
