//! TUI Maze (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_maze::{core,engine,input,term,types}` and hosts the command-line
//! configuration shared by the binary and the tests.

pub mod config;

pub use tui_maze_core as core;
pub use tui_maze_engine as engine;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
