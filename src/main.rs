//! Terminal maze runner (default binary).
//!
//! Interactive mode animates the agent with crossterm and the framebuffer
//! renderer; `solve` walks the maze headless and prints it.
//!
//! Logs go to stderr. In interactive mode they are only enabled when
//! `RUST_LOG` is set, so redirect stderr (`2>maze.log`) to keep the screen clean.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_maze::config::{default_seed, parse_args, RunConfig, RunMode};
use tui_maze::core::MazeSession;
use tui_maze::engine::{FrameEvent, Playback};
use tui_maze::input::{handle_key_event, should_quit};
use tui_maze::term::{
    frame_fingerprint, Camera, FrameBuffer, MazeView, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_maze::types::FRAME_MS;

/// Redraw at least this often even when nothing moves.
const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args, default_seed()?)?;
    init_logging(config.mode);

    match config.mode {
        RunMode::Solve => solve(config),
        RunMode::Interactive => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, config);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn init_logging(mode: RunMode) {
    match mode {
        RunMode::Solve => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .init();
        }
        RunMode::Interactive => {
            if std::env::var_os("RUST_LOG").is_some() {
                env_logger::init();
            }
        }
    }
}

fn solve(config: RunConfig) -> Result<()> {
    let mut session = MazeSession::new(config.maze).context("failed to generate maze")?;
    let stats = session.stats();
    info!(
        "generated {}x{} maze with seed {} ({} pillars, {} resamples)",
        config.maze.width, config.maze.height, config.maze.seed, stats.pillars, stats.resamples
    );

    let max_steps = config.max_steps.unwrap_or_else(|| session.step_limit());
    let outcome = session.run_to_goal(max_steps);

    print!("{}", session.to_ascii());
    println!("{}", session.summary());

    outcome.context("agent did not reach the goal")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: RunConfig) -> Result<()> {
    let session = MazeSession::new(config.maze).context("failed to generate maze")?;
    let mut playback = Playback::new(session).with_speed_frame(config.speed_frame);
    let mut camera = Camera::at(playback.session().agent().position());

    let view = MazeView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let started = Instant::now();
    let mut last_frame = Instant::now();
    let frame_duration = Duration::from_millis(FRAME_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fingerprint = frame_fingerprint(&playback, &camera, w, h);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint, playback.is_static()) {
            view.render_into(&playback, &camera, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let seed = playback.session().seed();
                        playback.apply(action)?;
                        if playback.session().seed() != seed {
                            camera.snap_to(playback.session().agent().position());
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Frame.
        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();

            match playback.on_frame() {
                Ok(FrameEvent::GoalReached { steps }) => {
                    info!("goal reached in {} steps", steps);
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("traversal aborted: {}", e);
                    return Err(e).context("maze traversal failed");
                }
            }
            camera.follow(playback.session().agent().position());
        }
    }
}
