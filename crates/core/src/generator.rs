//! Generator module - "pillar collapse" perfect maze generation
//!
//! The grid is first opened up (all Road), walled in along its border, and
//! then seeded with a Pillar on every interior cell whose coordinates are both
//! even. Each pillar is then collapsed, in row-major order, into a two-cell
//! wall: the pillar itself plus one randomly chosen neighbor.
//!
//! Pillars on the first pillar row may fall in any direction. All later rows
//! never fall North, so every wall segment hangs off the border or off a
//! pillar that was already resolved, and the walls can never close a loop.
//! A neighbor that is already Wall is rejected and the direction re-drawn.
//! The resulting Road cells form a spanning tree of the interior.

use arrayvec::ArrayVec;
use log::debug;
use rand::Rng;

use crate::error::{MazeError, Result};
use crate::grid::Grid;
use crate::types::{
    Direction, Point, Tile, MAX_COLLAPSE_ATTEMPTS, MIN_DIMENSION, PILLAR_NORTH_ROW_LIMIT,
};

/// Counters collected while generating, mostly useful for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationStats {
    /// Number of pillars placed (and collapsed)
    pub pillars: u32,
    /// Rejected direction draws across all pillars
    pub resamples: u32,
}

/// Reject dimensions the pillar lattice cannot tile.
pub fn validate_dimensions(width: u16, height: u16) -> Result<()> {
    let ok = |d: u16| d >= MIN_DIMENSION && d % 2 == 1;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions { width, height })
    }
}

/// Directions a pillar on row `y` may collapse towards.
pub fn candidate_directions(y: i32) -> ArrayVec<Direction, 4> {
    let mut dirs: ArrayVec<Direction, 4> = ArrayVec::new();
    dirs.push(Direction::East);
    dirs.push(Direction::South);
    dirs.push(Direction::West);
    if y <= PILLAR_NORTH_ROW_LIMIT {
        dirs.push(Direction::North);
    }
    dirs
}

/// Turn `grid` into a perfect maze in place.
///
/// Whatever the grid held before is overwritten. The only randomness comes
/// from `rng`, so a seeded generator yields the same maze every time.
pub fn generate<R: Rng + ?Sized>(grid: &mut Grid<Tile>, rng: &mut R) -> Result<GenerationStats> {
    let (width, height) = (grid.width(), grid.height());
    validate_dimensions(width, height)?;

    let last_x = width as i32 - 1;
    let last_y = height as i32 - 1;

    grid.fill(Tile::Road);

    grid.set_each(|x, y, _| {
        if x == 0 || y == 0 || x == last_x || y == last_y {
            Tile::Wall
        } else {
            Tile::Road
        }
    });

    grid.set_each(|x, y, tile| {
        let interior = x > 0 && y > 0 && x < last_x && y < last_y;
        if interior && x % 2 == 0 && y % 2 == 0 {
            Tile::Pillar
        } else {
            tile
        }
    });

    let mut stats = GenerationStats::default();
    for y in (2..last_y).step_by(2) {
        for x in (2..last_x).step_by(2) {
            if grid.get(x, y)? != Tile::Pillar {
                continue;
            }
            stats.resamples += collapse_pillar(grid, Point::new(x, y), rng)?;
            stats.pillars += 1;
        }
    }

    debug!(
        "generated {}x{} maze: {} pillars, {} resamples",
        width, height, stats.pillars, stats.resamples
    );
    Ok(stats)
}

/// Collapse one pillar, returning how many draws were rejected.
fn collapse_pillar<R: Rng + ?Sized>(grid: &mut Grid<Tile>, pillar: Point, rng: &mut R) -> Result<u32> {
    let candidates = candidate_directions(pillar.y);

    // A pillar boxed in on every allowed side would make the draw loop spin forever.
    let mut any_open = false;
    for dir in &candidates {
        if !grid.get_at(pillar.offset(*dir))?.is_wall() {
            any_open = true;
            break;
        }
    }
    if !any_open {
        return Err(MazeError::InvariantViolation {
            x: pillar.x,
            y: pillar.y,
        });
    }

    for attempt in 0..MAX_COLLAPSE_ATTEMPTS {
        let dir = candidates[rng.gen_range(0..candidates.len())];
        let target = pillar.offset(dir);
        if grid.get_at(target)?.is_wall() {
            continue;
        }

        grid.set_at(pillar, Tile::Wall)?;
        grid.set_at(target, Tile::Wall)?;
        return Ok(attempt);
    }

    Err(MazeError::InvariantViolation {
        x: pillar.x,
        y: pillar.y,
    })
}
