//! Fixed key bindings
//!
//! Arrow keys steer the piece, up rotates. Bindings are not configurable.

use crate::game::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key press into a game intent, if it maps to one
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    match key.code {
        KeyCode::Left => Some(Intent::MoveLeft),
        KeyCode::Right => Some(Intent::MoveRight),
        KeyCode::Down => Some(Intent::SoftDrop),
        KeyCode::Up => Some(Intent::Rotate),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}
