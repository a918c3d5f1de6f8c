//! Playback engine - paces a maze session against a frame clock.
//!
//! The core only knows how to take one step. This crate decides *when* to take
//! it: the agent advances once every `speed_frame` frames, and viewer actions
//! (speed, zoom, pause, regenerate) adjust that pacing.

pub mod playback;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use playback::{FrameEvent, Playback};
