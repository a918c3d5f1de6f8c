//! Command-line configuration.
//!
//! ```text
//! tui-maze [--width N] [--height N] [--seed N] [--speed N]
//! tui-maze solve [--width N] [--height N] [--seed N] [--max-steps N]
//! ```
//!
//! When `--seed` is absent the seed comes from `TUI_MAZE_SEED`, or from the
//! clock if that is unset too.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

use crate::core::{validate_dimensions, MazeConfig};
use crate::types::{DEFAULT_HEIGHT, DEFAULT_SPEED_FRAME, DEFAULT_WIDTH, MAX_SPEED_FRAME, MIN_SPEED_FRAME};

/// Environment variable consulted for the default seed
pub const SEED_ENV: &str = "TUI_MAZE_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Animated terminal viewer
    Interactive,
    /// Headless: walk to the goal and print the result
    Solve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: RunMode,
    pub maze: MazeConfig,
    pub speed_frame: u32,
    /// Step cap for `solve`; defaults to the session's own bound
    pub max_steps: Option<u32>,
}

/// Parse `args` (without the program name).
pub fn parse_args(args: &[String], default_seed: u64) -> Result<RunConfig> {
    let (mode, rest) = match args.first().map(String::as_str) {
        Some("solve") => (RunMode::Solve, &args[1..]),
        _ => (RunMode::Interactive, args),
    };

    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut seed = default_seed;
    let mut speed_frame = DEFAULT_SPEED_FRAME;
    let mut max_steps = None;

    let mut i = 0usize;
    while i < rest.len() {
        let flag = rest[i].as_str();
        let value = || {
            rest.get(i + 1)
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };
        match flag {
            "--width" => width = parse_value(flag, value()?)?,
            "--height" => height = parse_value(flag, value()?)?,
            "--seed" => seed = parse_value(flag, value()?)?,
            "--speed" => {
                let v: u32 = parse_value(flag, value()?)?;
                if !(MIN_SPEED_FRAME..=MAX_SPEED_FRAME).contains(&v) {
                    return Err(anyhow!(
                        "--speed must be between {} and {}",
                        MIN_SPEED_FRAME,
                        MAX_SPEED_FRAME
                    ));
                }
                speed_frame = v;
            }
            "--max-steps" if mode == RunMode::Solve => {
                max_steps = Some(parse_value(flag, value()?)?);
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 2;
    }

    validate_dimensions(width, height).context("invalid maze size")?;

    Ok(RunConfig {
        mode,
        maze: MazeConfig::new(width, height, seed),
        speed_frame,
        max_steps,
    })
}

fn parse_value<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T> {
    raw.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, raw))
}

/// Seed used when `--seed` is not given.
pub fn default_seed() -> Result<u64> {
    match std::env::var(SEED_ENV) {
        Ok(v) => v
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_ENV, v)),
        Err(_) => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)),
    }
}
