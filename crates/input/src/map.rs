//! Key mapping from terminal events to movement keys.

use crate::types::MoveKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a keyboard event to the movement key it drives.
pub fn key_for(key: KeyEvent) -> Option<MoveKey> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(MoveKey::Forward)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(MoveKey::Backward)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(MoveKey::RotateLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(MoveKey::RotateRight)
        }
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(key_for(KeyEvent::from(KeyCode::Up)), Some(MoveKey::Forward));
        assert_eq!(key_for(KeyEvent::from(KeyCode::Down)), Some(MoveKey::Backward));
        assert_eq!(key_for(KeyEvent::from(KeyCode::Char('w'))), Some(MoveKey::Forward));
        assert_eq!(key_for(KeyEvent::from(KeyCode::Char('S'))), Some(MoveKey::Backward));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(key_for(KeyEvent::from(KeyCode::Left)), Some(MoveKey::RotateLeft));
        assert_eq!(key_for(KeyEvent::from(KeyCode::Right)), Some(MoveKey::RotateRight));
        assert_eq!(key_for(KeyEvent::from(KeyCode::Char('A'))), Some(MoveKey::RotateLeft));
        assert_eq!(key_for(KeyEvent::from(KeyCode::Char('d'))), Some(MoveKey::RotateRight));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_for(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(key_for(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
