//! Terminal backend abstraction
//! Provides platform-agnostic interface for terminal operations

//! ## term/ Invariants
//!
//! - Terminal handling is isolated behind a strict abstraction boundary.
//! - Raw mode is enabled before input processing begins.
//! - Terminal state is restored on normal exit and on panic.
//! - Terminal code never depends on pane internals, only on `Canvas`.

use crate::canvas::Canvas;
use crate::key::Key;
use ::crossterm::queue;
use ::crossterm::style::{Attribute, SetAttribute};

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend {
    /// Initialize terminal and enter raw mode
    fn init(&mut self) -> Result<(), String>;

    /// Restore terminal to original state
    fn deinit(&mut self);

    /// Read and decode a single keypress or resize
    /// Blocks until one is available
    fn read_key(&mut self) -> Result<Key, String>;

    /// Write bytes to stdout
    fn write(&mut self, bytes: &[u8]) -> Result<(), String>;

    /// Get terminal dimensions
    fn get_size(&self) -> Result<Size, String>;

    /// Clear entire screen
    fn clear_screen(&mut self) -> Result<(), String>;

    /// Move cursor to specified position (0-indexed)
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String>;

    /// Hide cursor
    fn hide_cursor(&mut self) -> Result<(), String>;

    /// Show cursor
    fn show_cursor(&mut self) -> Result<(), String>;
}

/// Draw a full canvas at the top-left of the terminal and place the
/// hardware cursor on the canvas's cursor marker (hidden if there is none)
pub fn present<T: TerminalBackend>(term: &mut T, canvas: &Canvas) -> Result<(), String> {
    term.hide_cursor()?;

    for (row, cells) in canvas.iter_rows().enumerate() {
        term.move_cursor(row as u16, 0)?;

        let mut output = Vec::with_capacity(cells.len() * 4);
        let mut inverse = false;
        for cell in cells.iter().filter(|c| !c.is_continuation()) {
            if cell.inverse != inverse {
                let attr = if cell.inverse {
                    Attribute::Reverse
                } else {
                    Attribute::NoReverse
                };
                queue!(output, SetAttribute(attr))
                    .map_err(|e| format!("Failed to set attribute: {e}"))?;
                inverse = cell.inverse;
            }
            let mut buf = [0u8; 4];
            output.extend_from_slice(cell.ch.encode_utf8(&mut buf).as_bytes());
        }
        if inverse {
            queue!(output, SetAttribute(Attribute::NoReverse))
                .map_err(|e| format!("Failed to reset attribute: {e}"))?;
        }
        term.write(&output)?;
    }

    if let Some((x, y)) = canvas.cursor() {
        term.move_cursor(y as u16, x as u16)?;
        term.show_cursor()?;
    }
    Ok(())
}

pub mod crossterm;
