//! Frame-driven playback of a maze session.

use log::debug;

use crate::core::{MazeSession, Result, StepOutcome};
use crate::types::{
    MazeAction, DEFAULT_SPEED_FRAME, DEFAULT_ZOOM, MAX_SPEED_FRAME, MAX_ZOOM, MIN_SPEED_FRAME,
    MIN_ZOOM, ZOOM_STEP,
};

/// What happened during one [`Playback::on_frame`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// Nothing to do this frame (waiting for cadence, paused, or finished)
    Idle,
    /// The agent took one step
    Stepped(StepOutcome),
    /// Reported once, on the first frame after the agent reaches the goal
    GoalReached { steps: u32 },
}

/// Owns a session and advances it at a configurable cadence.
#[derive(Debug, Clone)]
pub struct Playback {
    session: MazeSession,
    frame: u64,
    speed_frame: u32,
    /// Zoom in tenths, so repeated steps never drift
    zoom_tenths: u32,
    paused: bool,
    goal_announced: bool,
}

fn zoom_to_tenths(zoom: f32) -> u32 {
    (zoom * 10.0).round() as u32
}

impl Playback {
    pub fn new(session: MazeSession) -> Self {
        Self {
            session,
            frame: 0,
            speed_frame: DEFAULT_SPEED_FRAME,
            zoom_tenths: zoom_to_tenths(DEFAULT_ZOOM),
            paused: false,
            goal_announced: false,
        }
    }

    pub fn with_speed_frame(mut self, speed_frame: u32) -> Self {
        self.speed_frame = speed_frame.clamp(MIN_SPEED_FRAME, MAX_SPEED_FRAME);
        self
    }

    pub fn session(&self) -> &MazeSession {
        &self.session
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Frames between two agent steps
    pub fn speed_frame(&self) -> u32 {
        self.speed_frame
    }

    pub fn zoom(&self) -> f32 {
        self.zoom_tenths as f32 / 10.0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance the frame clock, stepping the agent when the cadence allows.
    pub fn on_frame(&mut self) -> Result<FrameEvent> {
        self.frame = self.frame.wrapping_add(1);

        if self.session.is_goal_reached() {
            if self.goal_announced {
                return Ok(FrameEvent::Idle);
            }
            self.goal_announced = true;
            return Ok(FrameEvent::GoalReached {
                steps: self.session.steps(),
            });
        }

        if self.paused || self.frame % self.speed_frame as u64 != 0 {
            return Ok(FrameEvent::Idle);
        }

        self.session.step().map(FrameEvent::Stepped)
    }

    pub fn apply(&mut self, action: MazeAction) -> Result<()> {
        match action {
            MazeAction::SpeedUp => {
                self.speed_frame = self.speed_frame.saturating_sub(1).max(MIN_SPEED_FRAME);
            }
            MazeAction::SpeedDown => {
                self.speed_frame = (self.speed_frame + 1).min(MAX_SPEED_FRAME);
            }
            MazeAction::ZoomIn => {
                self.zoom_tenths =
                    (self.zoom_tenths + zoom_to_tenths(ZOOM_STEP)).min(zoom_to_tenths(MAX_ZOOM));
            }
            MazeAction::ZoomOut => {
                self.zoom_tenths = self
                    .zoom_tenths
                    .saturating_sub(zoom_to_tenths(ZOOM_STEP))
                    .max(zoom_to_tenths(MIN_ZOOM));
            }
            MazeAction::Pause => {
                self.paused = !self.paused;
            }
            MazeAction::Regenerate => {
                let seed = self.session.seed().wrapping_add(1);
                debug!("regenerating maze with seed {}", seed);
                self.session.regenerate(seed)?;
                self.frame = 0;
                self.goal_announced = false;
            }
        }
        Ok(())
    }

    /// Whether anything on screen can still change without input
    pub fn is_static(&self) -> bool {
        self.paused || self.goal_announced
    }
}
