use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::Move;
use crate::session::Intent;

/// Map a key press to an intent. Releases, repeats and unbound keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Intent::Quit),
            _ => None,
        };
    }
    let intent = match key.code {
        KeyCode::Left => Intent::Move(Move::Left),
        KeyCode::Right => Intent::Move(Move::Right),
        KeyCode::Up => Intent::Move(Move::Up),
        KeyCode::Down => Intent::Move(Move::Down),
        KeyCode::Esc => Intent::Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Intent::Move(Move::Left),
            'd' => Intent::Move(Move::Right),
            'w' => Intent::Move(Move::Up),
            's' => Intent::Move(Move::Down),
            'r' => Intent::Restart,
            'q' => Intent::Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(intent)
}
