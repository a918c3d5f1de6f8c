//! Terminal rendering for the maze viewer.
//!
//! Renders into a simple framebuffer that is then flushed to the terminal,
//! rather than going through a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and free of presentation concerns
//! - Follow the agent with an easing camera and adjustable zoom
//! - Only re-emit the cells that changed between frames

pub mod camera;
pub mod fb;
pub mod maze_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_engine as engine;
pub use tui_maze_types as types;

pub use camera::Camera;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use maze_view::{MazeView, Viewport};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
