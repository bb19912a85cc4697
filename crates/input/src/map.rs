//! Key mapping from terminal events to intents.
//!
//! Terminals rarely report key releases, so each key press maps straight to a
//! one-shot intent instead of going through [`crate::IntentLatch`].

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an intent.
pub fn intent_for_key(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Intent::ShiftLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Intent::ShiftRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char(' ') => Some(Intent::SoftDrop),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(Intent::RotateCcw),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key asks for a new game.
pub fn is_reset(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Intent::ShiftLeft)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char('L'))),
            Some(Intent::ShiftRight)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Intent::SoftDrop)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Intent::RotateCcw)
        );
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_and_reset_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(is_reset(KeyEvent::from(KeyCode::Char('r'))));
        assert!(!is_reset(KeyEvent::from(KeyCode::Left)));
    }
}
