//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{Direction, GameAction};

/// Map keyboard input to game actions.
///
/// Arrow keys (and WASD/HJKL) slide the board. Holding Shift with a
/// direction triggers the duplicate-eliminating slide for that direction's
/// axis; the test is a bitwise "Shift is present", so Shift combined with
/// further modifiers still counts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let dir = match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Direction::Right,
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Direction::Down,

        // New board
        KeyCode::Char('r') | KeyCode::Char('R') => return Some(GameAction::Reset),

        _ => return None,
    };

    if key.modifiers.contains(KeyModifiers::SHIFT) {
        Some(GameAction::PowerfulSlide(dir.axis()))
    } else {
        Some(GameAction::Slide(dir))
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
