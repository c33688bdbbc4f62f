//! Text buffer collaborator
//!
//! The pane never edits text itself. It forwards keys to a [`TextBuffer`]
//! and reads back rendered content, row counts and the cursor offset.
//!
//! ## Indexing model
//!
//! Offsets are code-point based (`char` indices into [`TextBuffer::content`]),
//! not grapheme clusters.
//!
//! ## Revision semantics
//!
//! `LineBuffer::revision` increments only on text mutations. Cursor movement
//! does not touch it.

use crate::canvas::{Canvas, Cell};
use crate::cursor::{map_cursor, offset_for_coords};
use crate::error::Result;
use crate::key::Key;
use crate::wrap::{cell_width, char_width, wrap, WrapLayout, PLACEHOLDER};
use std::path::Path;

/// Interface the pane consumes from its text buffer
pub trait TextBuffer {
    /// Apply a key at the given wrap width. Returns whether it was consumed.
    fn handle_key(&mut self, width: usize, key: Key) -> bool;

    /// Render the buffer's own content at `width` columns, one canvas row
    /// per wrapped row
    fn render_content(&self, width: usize) -> Canvas;

    /// Number of wrapped rows at `width`
    fn row_count(&self, width: usize) -> usize {
        wrap(self.content(), width.max(1)).row_count()
    }

    /// Logical cursor offset, within `0..=content().len()`
    fn cursor_offset(&self) -> usize;

    /// Flat buffer content
    fn content(&self) -> &[char];
}

/// Minimal in-memory buffer used by the demo host and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
    revision: u64,
    /// Spaces inserted for Tab; 0 leaves Tab unconsumed
    tab_width: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at the end
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self {
            chars,
            cursor,
            ..Self::default()
        }
    }

    /// Load a file into a new buffer, cursor at the start
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let mut buffer = Self::from_text(&text);
        buffer.cursor = 0;
        Ok(buffer)
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Place the cursor, clamped to the content
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.chars.len());
    }

    pub fn insert_char(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
        self.revision += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert_char(ch);
        }
    }

    fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        self.revision += 1;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        self.revision += 1;
        true
    }

    fn line_start(&self) -> usize {
        self.chars[..self.cursor]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |p| p + 1)
    }

    fn line_end(&self) -> usize {
        self.chars[self.cursor..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.chars.len(), |p| self.cursor + p)
    }

    /// Move one wrapped row up or down, keeping the screen column
    fn move_vertical(&mut self, layout: &WrapLayout, down: bool) -> bool {
        let (x, y) = map_cursor(layout, &self.chars, self.cursor);
        let target = if down {
            if y + 1 >= layout.row_count() {
                return false;
            }
            y + 1
        } else {
            if y == 0 {
                return false;
            }
            y - 1
        };
        self.cursor = offset_for_coords(layout, &self.chars, x, target);
        true
    }

    fn move_to(&mut self, offset: usize) -> bool {
        if offset == self.cursor {
            return false;
        }
        self.cursor = offset;
        true
    }
}

impl TextBuffer for LineBuffer {
    fn handle_key(&mut self, width: usize, key: Key) -> bool {
        match key {
            Key::Char(ch) => {
                self.insert_char(ch);
                true
            }
            Key::Enter => {
                self.insert_char('\n');
                true
            }
            Key::Tab if self.tab_width > 0 => {
                let column = self.cursor - self.line_start();
                let spaces = self.tab_width - column % self.tab_width;
                self.insert_str(&" ".repeat(spaces));
                true
            }
            Key::Backspace => self.delete_backward(),
            Key::Delete => self.delete_forward(),
            Key::ArrowLeft => self.move_to(self.cursor.saturating_sub(1)),
            Key::ArrowRight => self.move_to((self.cursor + 1).min(self.chars.len())),
            Key::Home => self.move_to(self.line_start()),
            Key::End => self.move_to(self.line_end()),
            Key::ArrowUp | Key::ArrowDown => {
                let layout = wrap(&self.chars, width.max(1));
                self.move_vertical(&layout, key == Key::ArrowDown)
            }
            _ => false,
        }
    }

    fn render_content(&self, width: usize) -> Canvas {
        let layout = wrap(&self.chars, width.max(1));
        let mut canvas = Canvas::new(width, layout.row_count());
        for (row, span) in layout.rows().iter().enumerate() {
            let mut col = 0;
            for &ch in &self.chars[span.start..span.end] {
                let w = cell_width(ch, width);
                if w == 0 {
                    continue;
                }
                let shown = if char_width(ch) > width { PLACEHOLDER } else { ch };
                canvas.set_cell(row, col, Cell::new(shown));
                if w == 2 {
                    canvas.set_cell(row, col + 1, Cell::continuation());
                }
                col += w;
            }
        }
        canvas
    }

    fn cursor_offset(&self) -> usize {
        self.cursor
    }

    fn content(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
