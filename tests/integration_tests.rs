//! Integration tests - keys, playback and the headless runner working together

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_maze::config::{parse_args, RunMode};
use tui_maze::core::MazeSession;
use tui_maze::engine::{FrameEvent, Playback};
use tui_maze::input::{handle_key_event, should_quit};
use tui_maze::types::MazeAction;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn press(pb: &mut Playback, code: KeyCode) {
    let action = handle_key_event(KeyEvent::from(code)).unwrap();
    pb.apply(action).unwrap();
}

#[test]
fn test_keys_drive_playback() {
    let config = parse_args(&args(&["--width", "15", "--height", "11", "--seed", "9"]), 0).unwrap();
    assert_eq!(config.mode, RunMode::Interactive);

    let mut pb = Playback::new(MazeSession::new(config.maze).unwrap())
        .with_speed_frame(config.speed_frame);
    let start_speed = pb.speed_frame();

    // Right slows the agent (more frames per step), Left speeds it up.
    press(&mut pb, KeyCode::Right);
    assert_eq!(pb.speed_frame(), start_speed + 1);
    press(&mut pb, KeyCode::Left);
    press(&mut pb, KeyCode::Left);
    assert_eq!(pb.speed_frame(), start_speed - 1);

    press(&mut pb, KeyCode::Up);
    assert!(pb.zoom() > 1.0);

    press(&mut pb, KeyCode::Char('p'));
    assert!(pb.is_paused());
    assert_eq!(pb.on_frame().unwrap(), FrameEvent::Idle);
    press(&mut pb, KeyCode::Char(' '));
    assert!(!pb.is_paused());

    press(&mut pb, KeyCode::Char('r'));
    assert_eq!(pb.session().seed(), 10);

    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))).is_none());
}

#[test]
fn test_playback_runs_to_goal_at_full_speed() {
    let config = parse_args(&args(&["--width", "21", "--height", "21", "--speed", "1"]), 42).unwrap();
    let mut headless = MazeSession::new(config.maze).unwrap();
    let expected = headless.run_to_goal(headless.step_limit()).unwrap();

    let mut pb = Playback::new(MazeSession::new(config.maze).unwrap())
        .with_speed_frame(config.speed_frame);
    let mut frames = 0;
    loop {
        frames += 1;
        match pb.on_frame().unwrap() {
            FrameEvent::GoalReached { steps } => {
                assert_eq!(steps, expected);
                break;
            }
            FrameEvent::Idle => panic!("idle frame at speed 1"),
            FrameEvent::Stepped(_) => {}
        }
        assert!(frames <= expected + 1);
    }
    assert_eq!(pb.on_frame().unwrap(), FrameEvent::Idle);
}

#[test]
fn test_regenerate_restarts_traversal() {
    let mut pb = Playback::new(MazeSession::new(Default::default()).unwrap()).with_speed_frame(1);
    for _ in 0..20 {
        pb.on_frame().unwrap();
    }
    assert_eq!(pb.session().steps(), 20);

    pb.apply(MazeAction::Regenerate).unwrap();
    assert_eq!(pb.session().steps(), 0);
    assert_eq!(pb.session().agent().position(), pb.session().config().start());
    assert_eq!(pb.session().seed(), 2);
}

#[test]
fn test_solve_mode_reports_ascii() {
    let config = parse_args(&args(&["solve", "--width", "9", "--height", "7", "--seed", "1"]), 0).unwrap();
    assert_eq!(config.mode, RunMode::Solve);

    let mut session = MazeSession::new(config.maze).unwrap();
    let limit = config.max_steps.unwrap_or_else(|| session.step_limit());
    session.run_to_goal(limit).unwrap();

    let ascii = session.to_ascii();
    assert_eq!(ascii.lines().count(), 7);
    assert!(ascii.lines().all(|line| line.chars().count() == 9));
    assert!(ascii.contains('@'));
    assert!(!ascii.contains('G'));
    assert!(session.summary().contains("goal=reached"));
}
