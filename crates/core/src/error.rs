//! Error types for maze construction and traversal.

use thiserror::Error;

/// Errors surfaced by the maze core.
///
/// None of these are retried internally; they signal a caller bug or a broken
/// construction invariant and abort the current operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },

    #[error("pillar at ({x}, {y}) has no legal collapse direction")]
    InvariantViolation { x: i32, y: i32 },

    #[error("maze dimensions {width}x{height} must be odd and at least 5")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("goal not reached within {max_steps} steps")]
    StepLimitExceeded { max_steps: u32 },
}

pub type Result<T> = std::result::Result<T, MazeError>;
