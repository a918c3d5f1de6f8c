//! MazeView: maps a playback session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: row 0 is a status bar, the rest of the screen is the maze,
//! centered on the camera. The last row carries a banner while paused or once
//! the goal is reached.

use crate::camera::Camera;
use crate::core::Grid;
use crate::engine::Playback;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Point, Tile};

pub const WALL_COLOR: Rgb = Rgb::new(25, 25, 30);
pub const ROAD_COLOR: Rgb = Rgb::new(230, 230, 230);
pub const TRACE_COLOR: Rgb = Rgb::new(60, 170, 80);
pub const GOAL_COLOR: Rgb = Rgb::new(240, 220, 60);
pub const AGENT_COLOR: Rgb = Rgb::new(0, 170, 255);
pub const AHEAD_MARKER_COLOR: Rgb = Rgb::new(230, 40, 40);
pub const RIGHT_MARKER_COLOR: Rgb = Rgb::new(40, 60, 230);

const BLOCK: char = '█';
const MARKER: char = '•';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Projection {
    center_x: i32,
    center_y: i32,
    cell_w: u16,
    cell_h: u16,
    camera: Camera,
}

impl Projection {
    fn new(viewport: Viewport, camera: Camera, zoom: f32) -> Self {
        let area_h = viewport.height.saturating_sub(1) as i32;
        Self {
            center_x: viewport.width as i32 / 2,
            center_y: 1 + area_h / 2,
            cell_w: cell_size(zoom * 2.0),
            cell_h: cell_size(zoom),
            camera,
        }
    }

    /// Top-left terminal cell of maze cell `p`
    fn origin(&self, p: Point) -> (i32, i32) {
        let sx = self.center_x as f32 + (p.x as f32 - self.camera.x) * self.cell_w as f32;
        let sy = self.center_y as f32 + (p.y as f32 - self.camera.y) * self.cell_h as f32;
        (sx.floor() as i32, sy.floor() as i32)
    }
}

fn cell_size(scaled: f32) -> u16 {
    (scaled.round() as u16).max(1)
}

/// Renders the maze, trace, goal and agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct MazeView {
    /// Draw the ahead/right probe markers next to the agent.
    pub show_markers: bool,
}

impl MazeView {
    pub fn new() -> Self {
        Self { show_markers: true }
    }

    pub fn with_markers(mut self, show: bool) -> Self {
        self.show_markers = show;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        playback: &Playback,
        camera: &Camera,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        let session = playback.session();
        let proj = Projection::new(viewport, *camera, playback.zoom());
        let trace = session.trace();

        session.grid().each(|x, y, tile| {
            let style = CellStyle::solid(tile_color(tile, trace, x, y));
            self.fill_cell(fb, &proj, Point::new(x, y), style);
        });

        self.fill_cell(fb, &proj, session.goal(), CellStyle::solid(GOAL_COLOR));

        let agent = session.agent();
        self.fill_cell(fb, &proj, agent.position(), CellStyle::solid(AGENT_COLOR));

        if self.show_markers {
            self.draw_marker(fb, &proj, agent.ahead(), AHEAD_MARKER_COLOR);
            self.draw_marker(fb, &proj, agent.right(), RIGHT_MARKER_COLOR);
        }

        self.draw_status_bar(fb, playback, viewport);

        if playback.is_paused() {
            self.draw_banner(fb, viewport, "PAUSED");
        } else if session.is_goal_reached() {
            self.draw_banner(fb, viewport, "GOAL!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, playback: &Playback, camera: &Camera, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(playback, camera, viewport, &mut fb);
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, proj: &Projection, p: Point, style: CellStyle) {
        let (sx, sy) = proj.origin(p);
        fb.fill_rect(sx, sy, proj.cell_w, proj.cell_h, BLOCK, style);
    }

    fn draw_marker(&self, fb: &mut FrameBuffer, proj: &Projection, p: Point, color: Rgb) {
        let (sx, sy) = proj.origin(p);
        let mx = sx + proj.cell_w as i32 / 2;
        let my = sy + proj.cell_h as i32 / 2;
        if mx < 0 || my < 0 {
            return;
        }
        let Some(under) = fb.get(mx as u16, my as u16) else {
            return;
        };
        fb.put_char(
            mx as u16,
            my as u16,
            MARKER,
            CellStyle::new(color, under.style.bg),
        );
    }

    fn draw_status_bar(&self, fb: &mut FrameBuffer, playback: &Playback, viewport: Viewport) {
        let bar = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
        let label = bar.bold();
        fb.fill_rect(0, 0, viewport.width, 1, ' ', bar);

        let snap = playback.session().snapshot();
        let zoom_tenths = (playback.zoom() * 10.0).round() as u64;

        let mut x = fb.put_str(1, 0, "STEPS ", label);
        x = fb.put_u64(x, 0, snap.steps as u64, bar);
        x = fb.put_str(x + 2, 0, "SPEED ", label);
        x = fb.put_u64(x, 0, playback.speed_frame() as u64, bar);
        x = fb.put_str(x + 2, 0, "ZOOM ", label);
        x = fb.put_u64(x, 0, zoom_tenths / 10, bar);
        x = fb.put_str(x, 0, ".", bar);
        x = fb.put_u64(x, 0, zoom_tenths % 10, bar);
        x = fb.put_str(x + 2, 0, "SEED ", label);
        x = fb.put_u64(x, 0, snap.seed, bar);

        const HINT: &str = "arrows: speed/zoom  p: pause  r: new  q: quit";
        let hint_w = HINT.chars().count() as u16;
        if viewport.width > x + 4 + hint_w {
            let dim = CellStyle::new(Rgb::new(130, 130, 140), Rgb::new(0, 0, 0));
            fb.put_str(viewport.width - hint_w - 1, 0, HINT, dim);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
        let y = viewport.height - 1;
        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

fn tile_color(tile: Tile, trace: &Grid<bool>, x: i32, y: i32) -> Rgb {
    match tile {
        Tile::Wall | Tile::Pillar => WALL_COLOR,
        Tile::Road if matches!(trace.get(x, y), Ok(true)) => TRACE_COLOR,
        Tile::Road => ROAD_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_maps_to_cell_size() {
        let vp = Viewport::new(40, 21);
        let p = Projection::new(vp, Camera::default(), 1.0);
        assert_eq!((p.cell_w, p.cell_h), (2, 1));
        let p = Projection::new(vp, Camera::default(), 0.1);
        assert_eq!((p.cell_w, p.cell_h), (1, 1));
        let p = Projection::new(vp, Camera::default(), 3.0);
        assert_eq!((p.cell_w, p.cell_h), (6, 3));
    }

    #[test]
    fn camera_cell_lands_on_screen_center() {
        let vp = Viewport::new(40, 21);
        let p = Projection::new(vp, Camera::at(Point::new(5, 5)), 1.0);
        assert_eq!(p.origin(Point::new(5, 5)), (20, 11));
        assert_eq!(p.origin(Point::new(6, 4)), (22, 10));
    }
}
