//! Centralized error handling for the text pane
//! Defines the crate error type, severity levels, and error codes
//!
//! Nothing in the layout core fails at runtime. Errors only surface at the
//! boundary (invalid viewport dimensions, terminal I/O in the host loop).

use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Standard error - operation failed but the pane can continue
    Error,
    /// Critical error - the host loop cannot continue
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid dimensions or settings handed in by the host
    Settings,
    /// Terminal backend errors
    Renderer,
    /// File system or I/O errors
    Io,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings => write!(f, "Settings"),
            Self::Renderer => write!(f, "Renderer"),
            Self::Io => write!(f, "IO"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Error codes raised by the crate
pub mod codes {
    pub const INVALID_WIDTH: &str = "INVALID_WIDTH";
    pub const TERMINAL: &str = "TERMINAL";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";
}

/// A structured error raised by the pane or its host loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g. "INVALID_WIDTH")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl PaneError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new critical error (Severity: Critical)
    pub fn critical(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            ..Self::new(kind, code, message)
        }
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for PaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for PaneError {}

impl From<String> for PaneError {
    fn from(msg: String) -> Self {
        Self::new(ErrorKind::Other, codes::GENERIC_ERROR, msg)
    }
}

impl From<&str> for PaneError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorKind::Other, codes::GENERIC_ERROR, msg)
    }
}

impl From<std::io::Error> for PaneError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, codes::IO_ERROR, err.to_string())
    }
}

/// Result alias for pane operations
pub type Result<T> = std::result::Result<T, PaneError>;
