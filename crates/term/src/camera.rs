//! Camera that trails the agent.
//!
//! Each frame the camera closes a fixed fraction of the distance to its
//! target, so the view glides after the agent instead of jumping.

use crate::types::Point;

/// Fraction of the remaining distance covered per frame is `1 / CAMERA_EASE`.
pub const CAMERA_EASE: f32 = 5.0;

/// Camera center in maze cell units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    pub fn at(p: Point) -> Self {
        Self {
            x: p.x as f32,
            y: p.y as f32,
        }
    }

    /// Ease one frame towards `target`.
    pub fn follow(&mut self, target: Point) {
        self.x += (target.x as f32 - self.x) / CAMERA_EASE;
        self.y += (target.y as f32 - self.y) / CAMERA_EASE;
    }

    /// Jump straight to `target` (new maze, resize).
    pub fn snap_to(&mut self, target: Point) {
        *self = Self::at(target);
    }

    /// Position quantized to 1/8 cell, for change detection
    pub fn quantized(&self) -> (i32, i32) {
        ((self.x * 8.0).round() as i32, (self.y * 8.0).round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_moves_a_fifth_of_the_way() {
        let mut cam = Camera::at(Point::new(0, 0));
        cam.follow(Point::new(10, -5));
        assert_eq!(cam.x, 2.0);
        assert_eq!(cam.y, -1.0);
    }

    #[test]
    fn follow_converges() {
        let mut cam = Camera::at(Point::new(0, 0));
        for _ in 0..100 {
            cam.follow(Point::new(7, 3));
        }
        assert!((cam.x - 7.0).abs() < 1e-3);
        assert!((cam.y - 3.0).abs() < 1e-3);
        assert_eq!(cam.quantized(), (56, 24));
    }
}
