//! Key representation for editor input

/// Represents a decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte without a dedicated variant, passed through unchanged
    Char(u8),
    /// Control key combination, holding the lowercase letter (Ctrl+Q is `Ctrl(b'q')`)
    Ctrl(u8),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Navigation keys
    Home,
    End,
    PageUp,
    PageDown,
    /// Editing keys
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
}

pub const ESC: u8 = 0x1b;
pub const DEL: u8 = 0x7f;

impl Key {
    /// Classify a single input byte that did not start an escape sequence
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'\r' => Key::Enter,
            b'\t' => Key::Tab,
            ESC => Key::Escape,
            DEL => Key::Backspace,
            1..=26 => Key::Ctrl(b'a' + byte - 1),
            _ => Key::Char(byte),
        }
    }

    /// The byte this key inserts into the document, if it inserts anything
    #[must_use]
    pub fn as_byte(&self) -> Option<u8> {
        match *self {
            Key::Char(b) => Some(b),
            Key::Ctrl(c) => Some(c & 0x1f),
            Key::Tab => Some(b'\t'),
            _ => None,
        }
    }

    /// Printable ASCII accepted by the prompt line
    #[must_use]
    pub fn printable(&self) -> Option<u8> {
        match *self {
            Key::Char(b) if b.is_ascii() && !b.is_ascii_control() => Some(b),
            _ => None,
        }
    }
}
