//! Key representation for pane input

/// Represents a key press event delivered by the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+Q), stored lowercase
    Ctrl(char),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Navigation keys
    Home,
    End,
    /// Editing keys
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    /// Terminal resized to (cols, rows)
    Resize(u16, u16),
    /// Anything the backend could not translate
    Unknown,
}
