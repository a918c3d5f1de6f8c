use tui_maze::core::{MazeConfig, MazeSession};
use tui_maze::engine::Playback;
use tui_maze::term::{frame_fingerprint, Camera, RenderThrottle};
use tui_maze::types::{MazeAction, Point};

#[test]
fn test_render_throttle_static_unchanged_is_throttled() {
    let mut t = RenderThrottle::new(250);

    // First frame always renders.
    assert!(t.should_render(0, 123, true));

    // Same fingerprint while static: throttled.
    assert!(!t.should_render(10, 123, true));
    assert!(!t.should_render(249, 123, true));

    // Interval elapsed: allow a redraw.
    assert!(t.should_render(250, 123, true));
}

#[test]
fn test_render_throttle_changes_render_immediately() {
    let mut t = RenderThrottle::new(1000);

    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
    assert!(!t.should_render(2, 2, true));
}

#[test]
fn test_render_throttle_non_static_always_renders() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 7, false));
    assert!(t.should_render(1, 7, false));
}

#[test]
fn test_render_throttle_reset_forces_render() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 5, true));
    assert!(!t.should_render(1, 5, true));
    t.reset();
    assert!(t.should_render(2, 5, true));
}

#[test]
fn test_fingerprint_tracks_visible_state() {
    let mut pb = Playback::new(MazeSession::new(MazeConfig::new(11, 11, 3)).unwrap());
    let camera = Camera::at(Point::new(1, 1));

    let base = frame_fingerprint(&pb, &camera, 80, 24);
    assert_eq!(base, frame_fingerprint(&pb, &camera, 80, 24));
    assert_ne!(base, frame_fingerprint(&pb, &camera, 100, 24));
    assert_ne!(base, frame_fingerprint(&pb, &Camera::at(Point::new(3, 1)), 80, 24));

    pb.apply(MazeAction::ZoomIn).unwrap();
    let zoomed = frame_fingerprint(&pb, &camera, 80, 24);
    assert_ne!(base, zoomed);

    pb.apply(MazeAction::Pause).unwrap();
    assert_ne!(zoomed, frame_fingerprint(&pb, &camera, 80, 24));
}
