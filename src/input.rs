//! Key mapping from terminal events to session commands.
//!
//! This is driver territory: the engine never sees key codes, only
//! [`Command`] values.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map keyboard input to a session command.
///
/// The down key maps to [`Command::Tick`]: a manual gravity step, which
/// locks the piece when it is already resting on something.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::Right),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::Rotate),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::Tick),
        _ => None,
    }
}

/// Check if the key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
