//! Key mapping from terminal events to viewer actions.

use crate::types::MazeAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<MazeAction> {
    match key.code {
        // Zoom
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('+') => {
            Some(MazeAction::ZoomIn)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('-') => {
            Some(MazeAction::ZoomOut)
        }

        // Speed: Right adds frames between steps, Left removes them
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(MazeAction::SpeedDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(MazeAction::SpeedUp),

        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(MazeAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(MazeAction::Regenerate),

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
