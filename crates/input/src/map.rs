//! Key mapping from terminal events to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Command;

/// Map a keyboard event to a command.
///
/// Only presses count; repeats and releases map to [`Command::None`], as does
/// any unbound key.
pub fn map_key(key: KeyEvent) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::None;
    }
    if should_quit(key) {
        return Command::Quit;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Command::MoveLeft
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::MoveRight
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Command::SoftDrop,

        // Rotation: up turns counter-clockwise, down clockwise.
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Command::RotateCcw,
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Command::RotateCw,

        KeyCode::Char(' ') => Command::HardDrop,

        _ => Command::None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
