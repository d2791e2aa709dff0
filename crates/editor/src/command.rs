//! Command dispatch for key presses.
//!
//! Separates "what key was pressed" from "what the engine does about it":
//! a [`KeyPress`] parses into one [`EditorCommand`] variant, and the engine
//! executes commands without ever looking at key identities again.

use caret_keyboard::{Key, KeyPress};

/// One engine action, parsed from a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    // Movement (collapses an active window)
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Movement with selection (Shift held; only the moving endpoint follows)
    ExtendLeft,
    ExtendRight,
    ExtendUp,
    ExtendDown,

    // Text editing
    Insert(String),
    InsertNewline,
    Backspace,
    Delete,

    /// Bare modifiers, dead keys and Escape: no state change, no emission.
    Ignore,
}

impl EditorCommand {
    /// Parse a key press into a command.
    ///
    /// Every key maps to exactly one command. Unrecognized keys fall through
    /// to [`EditorCommand::Insert`] with the key name as literal text; that
    /// fallback is deliberate, so there is no "unknown key" error path.
    pub fn from_key_press(press: &KeyPress) -> Self {
        match &press.key {
            Key::Shift
            | Key::Control
            | Key::Meta
            | Key::Alt
            | Key::Dead
            | Key::Unidentified
            | Key::Escape => Self::Ignore,

            Key::ArrowLeft if press.shift => Self::ExtendLeft,
            Key::ArrowLeft => Self::MoveLeft,
            Key::ArrowRight if press.shift => Self::ExtendRight,
            Key::ArrowRight => Self::MoveRight,
            Key::ArrowUp if press.shift => Self::ExtendUp,
            Key::ArrowUp => Self::MoveUp,
            Key::ArrowDown if press.shift => Self::ExtendDown,
            Key::ArrowDown => Self::MoveDown,

            Key::Backspace => Self::Backspace,
            Key::Delete => Self::Delete,
            Key::Enter => Self::InsertNewline,

            // Tab is literal text, exactly like a printable character.
            Key::Tab => Self::Insert("\t".to_string()),
            Key::Char(ch) => Self::Insert(ch.to_string()),
            Key::Other(name) => Self::Insert(name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_keys_are_ignored() {
        for key in [
            Key::Shift,
            Key::Control,
            Key::Meta,
            Key::Alt,
            Key::Dead,
            Key::Unidentified,
            Key::Escape,
        ] {
            let cmd = EditorCommand::from_key_press(&KeyPress::plain(key));
            assert_eq!(cmd, EditorCommand::Ignore);
        }
    }

    #[test]
    fn test_shift_selects_extend_variants() {
        assert_eq!(
            EditorCommand::from_key_press(&KeyPress::plain(Key::ArrowRight)),
            EditorCommand::MoveRight
        );
        assert_eq!(
            EditorCommand::from_key_press(&KeyPress::shifted(Key::ArrowRight)),
            EditorCommand::ExtendRight
        );
        assert_eq!(
            EditorCommand::from_key_press(&KeyPress::shifted(Key::ArrowUp)),
            EditorCommand::ExtendUp
        );
    }

    #[test]
    fn test_tab_is_literal_text() {
        assert_eq!(
            EditorCommand::from_key_press(&KeyPress::plain(Key::Tab)),
            EditorCommand::Insert("\t".to_string())
        );
    }

    #[test]
    fn test_unknown_key_falls_through_to_text() {
        let press = KeyPress::plain(Key::from_name("Home"));
        assert_eq!(
            EditorCommand::from_key_press(&press),
            EditorCommand::Insert("Home".to_string())
        );
    }

    #[test]
    fn test_shifted_printable_still_inserts() {
        let press = KeyPress::shifted(Key::Char('A'));
        assert_eq!(
            EditorCommand::from_key_press(&press),
            EditorCommand::Insert("A".to_string())
        );
    }
}
