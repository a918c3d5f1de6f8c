//! Core maze logic - pure, deterministic, and testable
//!
//! This crate contains the maze generator and the wall-following agent.
//! It has **no dependencies** on terminal I/O, timing or input, making it:
//!
//! - **Deterministic**: the same seed and dimensions produce the same maze and walk
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: usable headless, in the terminal viewer, or in benches
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size bounds-checked 2D storage
//! - [`generator`]: "pillar collapse" perfect maze generation
//! - [`agent`]: right-hand rule traversal, one transition per step
//! - [`session`]: a generated maze, its goal, the agent and the visited trace
//! - [`error`]: the [`MazeError`] taxonomy
//!
//! # Maze Rules
//!
//! - Width and height are odd and at least 5; the border is always Wall
//! - Road cells form a spanning tree: connected, no cycles
//! - The agent starts at (1, 1) facing East; the goal is (width-2, height-2)
//! - The agent reaches the goal within `4 x road cells` steps
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{MazeConfig, MazeSession};
//!
//! let mut session = MazeSession::new(MazeConfig::new(21, 21, 7)).unwrap();
//! let limit = session.step_limit();
//! let steps = session.run_to_goal(limit).unwrap();
//!
//! assert!(session.is_goal_reached());
//! assert!(steps <= limit);
//! ```

pub mod agent;
pub mod error;
pub mod generator;
pub mod grid;
pub mod session;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use agent::{Agent, StepOutcome};
pub use error::{MazeError, Result};
pub use generator::{candidate_directions, generate, validate_dimensions, GenerationStats};
pub use grid::Grid;
pub use session::{MazeConfig, MazeSession, MazeSnapshot};
