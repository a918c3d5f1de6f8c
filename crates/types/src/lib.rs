//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (maze generation, traversal, terminal rendering).
//!
//! # Coordinates
//!
//! Cells are addressed by `(x, y)` with `x` growing to the right and `y` growing
//! downwards. Coordinates are signed so that neighbor arithmetic can step off the
//! grid and be reported as out of bounds instead of wrapping.
//!
//! # Directions
//!
//! Directions follow a fixed cyclic order, which defines turning:
//!
//! | Index | Direction | Vector |
//! |-------|-----------|--------|
//! | 0 | East | (1, 0) |
//! | 1 | South | (0, 1) |
//! | 2 | West | (-1, 0) |
//! | 3 | North | (0, -1) |
//!
//! Turning right is `index + 1 (mod 4)`, turning left is `index - 1 (mod 4)`.
//!
//! # Playback Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame interval (~60 FPS) |
//! | `DEFAULT_SPEED_FRAME` | 5 | Agent steps once every N frames |
//! | `MIN_SPEED_FRAME` | 1 | Fastest cadence |
//! | `MAX_SPEED_FRAME` | 60 | Slowest cadence |
//! | `MIN_ZOOM` / `MAX_ZOOM` | 0.1 / 6.0 | Zoom clamp |
//! | `ZOOM_STEP` | 0.1 | Zoom change per key press |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Direction, Point, Tile};
//!
//! let facing = Direction::East;
//! assert_eq!(facing.turn_right(), Direction::South);
//! assert_eq!(facing.turn_left(), Direction::North);
//!
//! let start = Point::new(1, 1);
//! assert_eq!(start.offset(facing), Point::new(2, 1));
//!
//! assert!(Tile::Wall.is_wall());
//! assert!(!Tile::Road.is_wall());
//! ```

/// Default maze width in cells (must be odd and at least 5)
pub const DEFAULT_WIDTH: u16 = 51;

/// Default maze height in cells (must be odd and at least 5)
pub const DEFAULT_HEIGHT: u16 = 51;

/// Smallest maze dimension that still holds one pillar
pub const MIN_DIMENSION: u16 = 5;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Default cadence: the agent advances once every 5 frames
pub const DEFAULT_SPEED_FRAME: u32 = 5;

/// Fastest cadence (one step per frame)
pub const MIN_SPEED_FRAME: u32 = 1;

/// Slowest cadence (one step per second at 60 FPS)
pub const MAX_SPEED_FRAME: u32 = 60;

/// Default zoom factor
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Lower zoom clamp
pub const MIN_ZOOM: f32 = 0.1;

/// Upper zoom clamp
pub const MAX_ZOOM: f32 = 6.0;

/// Zoom change per key press
pub const ZOOM_STEP: f32 = 0.1;

/// Pillars at or above this row may also collapse northwards.
///
/// Every later pillar row is restricted to East, South and West.
pub const PILLAR_NORTH_ROW_LIMIT: i32 = 2;

/// Upper bound on direction re-draws while collapsing a single pillar
pub const MAX_COLLAPSE_ATTEMPTS: u32 = 1024;


/// Per-cell maze state
///
/// - **Pillar**: transient marker used only while generating
/// - **Wall**: blocked cell
/// - **Road**: open cell the agent can walk on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    Pillar,
    Wall,
    #[default]
    Road,
}

impl Tile {
    /// True only for [`Tile::Wall`]
    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Single-character representation used by ASCII dumps
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Tile;
    ///
    /// assert_eq!(Tile::Wall.as_char(), '#');
    /// assert_eq!(Tile::Road.as_char(), ' ');
    /// assert_eq!(Tile::Pillar.as_char(), '+');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            Tile::Pillar => '+',
            Tile::Wall => '#',
            Tile::Road => ' ',
        }
    }
}

/// Facing direction, in cyclic order East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    East,
    South,
    West,
    North,
}

impl Direction {
    /// All directions in cyclic (index) order
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Position in the cyclic order (0..=3)
    pub fn index(&self) -> usize {
        match self {
            Direction::East => 0,
            Direction::South => 1,
            Direction::West => 2,
            Direction::North => 3,
        }
    }

    /// Direction at `index`, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Turn 90° clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Direction;
    ///
    /// assert_eq!(Direction::East.turn_right(), Direction::South);
    /// assert_eq!(Direction::North.turn_right(), Direction::East);
    /// ```
    pub fn turn_right(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Turn 90° counter-clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Direction;
    ///
    /// assert_eq!(Direction::East.turn_left(), Direction::North);
    /// assert_eq!(Direction::South.turn_left(), Direction::East);
    /// ```
    pub fn turn_left(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Unit vector `(dx, dy)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }

    /// Lowercase name, used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::North => "north",
        }
    }
}

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring point one step in `dir`
    pub fn offset(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Viewer actions produced by input handling
///
/// These only affect presentation and pacing; none of them touch the maze
/// rules except `Regenerate`, which builds a fresh maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeAction {
    /// Increase zoom by one step
    ZoomIn,
    /// Decrease zoom by one step
    ZoomOut,
    /// Step more often (fewer frames per step)
    SpeedUp,
    /// Step less often (more frames per step)
    SpeedDown,
    /// Toggle pause state
    Pause,
    /// Build a new maze with the next seed
    Regenerate,
}
