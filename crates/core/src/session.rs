//! Session module - one maze plus the agent walking it
//!
//! A session owns the generated grid, the agent, the goal and a parallel
//! "visited" trace. Generation happens once in [`MazeSession::new`]; after that
//! the grid is only read, and each call to [`MazeSession::step`] advances the
//! agent by exactly one transition.

use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::{Agent, StepOutcome};
use crate::error::{MazeError, Result};
use crate::generator::{generate, validate_dimensions, GenerationStats};
use crate::grid::Grid;
use crate::types::{Direction, Point, Tile, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Dimensions and seed for a new maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    pub seed: u64,
}

impl MazeConfig {
    pub fn new(width: u16, height: u16, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Start cell: just inside the top-left corner
    pub fn start(&self) -> Point {
        Point::new(1, 1)
    }

    /// Goal cell: just inside the bottom-right corner
    pub fn goal(&self) -> Point {
        Point::new(self.width as i32 - 2, self.height as i32 - 2)
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, 1)
    }
}

/// Read-only summary of a session, cheap to copy every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSnapshot {
    pub width: u16,
    pub height: u16,
    pub seed: u64,
    pub position: Point,
    pub direction: Direction,
    pub ahead: Point,
    pub right: Point,
    pub goal: Point,
    pub steps: u32,
    pub goal_reached: bool,
}

#[derive(Debug, Clone)]
pub struct MazeSession {
    config: MazeConfig,
    grid: Grid<Tile>,
    trace: Grid<bool>,
    agent: Agent,
    goal: Point,
    steps: u32,
    stats: GenerationStats,
}

impl MazeSession {
    /// Generate a maze for `config` and place the agent at the start.
    pub fn new(config: MazeConfig) -> Result<Self> {
        validate_dimensions(config.width, config.height)?;

        let mut grid = Grid::new(config.width, config.height, Tile::Road);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let stats = generate(&mut grid, &mut rng)?;

        Self::from_parts(config, grid, stats, config.start(), config.goal())
    }

    /// Wrap an already-built grid (hand-made layouts, fixtures).
    pub fn with_grid(grid: Grid<Tile>, start: Point, goal: Point) -> Result<Self> {
        let config = MazeConfig::new(grid.width(), grid.height(), 0);
        Self::from_parts(config, grid, GenerationStats::default(), start, goal)
    }

    fn from_parts(
        config: MazeConfig,
        grid: Grid<Tile>,
        stats: GenerationStats,
        start: Point,
        goal: Point,
    ) -> Result<Self> {
        grid.get_at(start)?;
        grid.get_at(goal)?;

        // Cells are marked after each step; the start is only marked once stepped on.
        let trace = Grid::new(config.width, config.height, false);

        Ok(Self {
            config,
            grid,
            trace,
            agent: Agent::new(start, Direction::East),
            goal,
            steps: 0,
            stats,
        })
    }

    /// Throw the maze away and build a new one with `seed`.
    pub fn regenerate(&mut self, seed: u64) -> Result<()> {
        *self = Self::new(self.config.with_seed(seed))?;
        Ok(())
    }

    pub fn config(&self) -> MazeConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn grid(&self) -> &Grid<Tile> {
        &self.grid
    }

    /// Cells the agent has stood on
    pub fn trace(&self) -> &Grid<bool> {
        &self.trace
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    pub fn is_goal_reached(&self) -> bool {
        self.agent.position() == self.goal
    }

    /// Advance the agent once. Does nothing after the goal is reached.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.is_goal_reached() {
            return Ok(StepOutcome::default());
        }

        let outcome = self.agent.step(&self.grid)?;
        self.steps += 1;
        self.trace.set_at(self.agent.position(), true)?;

        trace!(
            "step {}: at ({}, {}) facing {}",
            self.steps,
            self.agent.position().x,
            self.agent.position().y,
            self.agent.direction().as_str()
        );
        if self.is_goal_reached() {
            info!(
                "goal ({}, {}) reached after {} steps (seed {})",
                self.goal.x, self.goal.y, self.steps, self.config.seed
            );
        }
        Ok(outcome)
    }

    /// Step until the goal, giving up after `max_steps` transitions.
    ///
    /// Returns the total step count of the session.
    pub fn run_to_goal(&mut self, max_steps: u32) -> Result<u32> {
        let mut taken = 0;
        while !self.is_goal_reached() {
            if taken >= max_steps {
                return Err(MazeError::StepLimitExceeded { max_steps });
            }
            self.step()?;
            taken += 1;
        }
        Ok(self.steps)
    }

    /// Upper bound on the steps a wall follower needs in this maze
    pub fn step_limit(&self) -> u32 {
        (self.grid.count(Tile::Road) as u32).saturating_mul(4)
    }

    pub fn snapshot(&self) -> MazeSnapshot {
        MazeSnapshot {
            width: self.config.width,
            height: self.config.height,
            seed: self.config.seed,
            position: self.agent.position(),
            direction: self.agent.direction(),
            ahead: self.agent.ahead(),
            right: self.agent.right(),
            goal: self.goal,
            steps: self.steps,
            goal_reached: self.is_goal_reached(),
        }
    }

    /// Render the maze as text: `#` wall, `.` visited, `@` agent, `G` goal.
    pub fn to_ascii(&self) -> String {
        let width = self.grid.width() as usize;
        let mut out = String::with_capacity((width + 1) * self.grid.height() as usize);
        let agent = self.agent.position();
        self.grid.each(|x, y, tile| {
            let p = Point::new(x, y);
            let ch = if p == agent {
                '@'
            } else if p == self.goal {
                'G'
            } else if matches!(self.trace.get(x, y), Ok(true)) {
                '.'
            } else {
                tile.as_char()
            };
            out.push(ch);
            if x as usize + 1 == width {
                out.push('\n');
            }
        });
        out
    }

    /// One-line summary used by the headless runner
    pub fn summary(&self) -> String {
        format!(
            "{}x{} seed={} steps={} roads={} goal={}",
            self.config.width,
            self.config.height,
            self.config.seed,
            self.steps,
            self.grid.count(Tile::Road),
            if self.is_goal_reached() { "reached" } else { "pending" }
        )
    }
}
