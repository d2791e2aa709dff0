//! Key identity model and keyboard-event translation.
//!
//! The caret engine consumes key presses by identity name, following the
//! `KeyboardEvent.key` vocabulary of browser keyboard events ("ArrowLeft",
//! "Backspace", "Enter", single printable characters, ...). This crate owns
//! that vocabulary ([`Key`], [`KeyPress`]) and the translation from crossterm
//! key events for the terminal demo.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Identity of a pressed key.
///
/// Modeled on the browser `key` naming: named editing/navigation keys,
/// bare modifier keys, and printable characters. Anything else arrives as
/// [`Key::Other`] carrying its name verbatim; the engine treats such keys as
/// literal text, which is the deliberate fallback for unrecognized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Shift,
    Control,
    Meta,
    Alt,
    Dead,
    Unidentified,
    /// A printable character.
    Char(char),
    /// Any other key name, carried verbatim.
    Other(String),
}

impl Key {
    /// Parse a browser-style key name.
    ///
    /// Single-char names become [`Key::Char`]; unknown multi-char names
    /// become [`Key::Other`] and are never rejected.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "Escape" => Key::Escape,
            "Shift" => Key::Shift,
            "Control" => Key::Control,
            "Meta" => Key::Meta,
            "Alt" => Key::Alt,
            "Dead" => Key::Dead,
            "Unidentified" => Key::Unidentified,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }

    /// The browser-style name of this key.
    pub fn name(&self) -> &str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::Backspace => "Backspace",
            Key::Delete => "Delete",
            Key::Enter => "Enter",
            Key::Tab => "Tab",
            Key::Escape => "Escape",
            Key::Shift => "Shift",
            Key::Control => "Control",
            Key::Meta => "Meta",
            Key::Alt => "Alt",
            Key::Dead => "Dead",
            Key::Unidentified => "Unidentified",
            Key::Char(_) => "",
            Key::Other(name) => name,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(ch) => write!(f, "{ch}"),
            other => f.write_str(other.name()),
        }
    }
}

/// A key press as consumed by the engine.
///
/// Only the key identity and the shift flag are consulted; other modifiers
/// and key codes are ignored at this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key, shift: bool) -> Self {
        Self { key, shift }
    }

    /// Press without the shift modifier.
    pub fn plain(key: Key) -> Self {
        Self::new(key, false)
    }

    /// Press with the shift modifier held.
    pub fn shifted(key: Key) -> Self {
        Self::new(key, true)
    }
}

impl From<KeyEvent> for KeyPress {
    /// Translate a crossterm key event.
    ///
    /// Terminal keys with no equivalent in the engine's vocabulary (function
    /// keys, Home/End, ...) map to [`Key::Unidentified`] so they stay inert
    /// instead of being spelled out as literal text.
    fn from(event: KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Left => Key::ArrowLeft,
            KeyCode::Right => Key::ArrowRight,
            KeyCode::Up => Key::ArrowUp,
            KeyCode::Down => Key::ArrowDown,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab | KeyCode::BackTab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Char(ch) => Key::Char(ch),
            _ => Key::Unidentified,
        };
        Self::new(key, event.modifiers.contains(KeyModifiers::SHIFT))
    }
}
