//! Keyboard input as seen by the game

use crossterm::event::KeyCode;

/// A single key press fed to the game state
///
/// Anything the game does not understand becomes [`Key::Other`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Enter,
    Char(char),
    Other,
}

impl Key {
    /// Parse a browser-style key name
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Key;
    ///
    /// assert_eq!(Key::from_name("Enter"), Key::Enter);
    /// assert_eq!(Key::from_name("q"), Key::Char('q'));
    /// assert_eq!(Key::from_name("Shift"), Key::Other);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Self::Backspace,
            "Enter" => Self::Enter,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }

    /// The lowercased letter this key types, if it is one of `a`-`z` in either case
    #[inline]
    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Self::Char(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Enter => Self::Enter,
            KeyCode::Char(c) => Self::Char(c),
            _ => Self::Other,
        }
    }
}
