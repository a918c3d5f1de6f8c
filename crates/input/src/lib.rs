//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::MazeAction`]. The viewer has
//! no held-key state: every press (and terminal auto-repeat) is one action.

pub mod map;

pub use tui_maze_types as types;

pub use map::{handle_key_event, should_quit};
