//! Canvas value type
//! A fixed-size grid of cells with an optional cursor marker
//!
//! ## canvas/ Invariants
//!
//! - Every row holds exactly `cols` cells.
//! - Padding, cropping and overlaying return or mutate canvases without
//!   touching any other state.
//! - The cursor marker is expressed in the canvas's own coordinate space.
//! - A wide character occupies its cell plus one continuation cell.

/// A cell in the canvas grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character shown in this cell (`'\0'` marks a continuation cell)
    pub ch: char,
    /// Render with reverse video
    pub inverse: bool,
}

impl Cell {
    const CONTINUATION_CHAR: char = '\0';

    /// Create a new cell with the given character
    pub fn new(ch: char) -> Self {
        Self { ch, inverse: false }
    }

    /// Create an empty (space) cell
    pub fn empty() -> Self {
        Self::new(' ')
    }

    /// The trailing half of a double-width character
    pub fn continuation() -> Self {
        Self::new(Self::CONTINUATION_CHAR)
    }

    pub fn is_continuation(&self) -> bool {
        self.ch == Self::CONTINUATION_CHAR
    }

    /// Set reverse video
    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

/// A rectangular grid of cells plus an optional cursor position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Grid of cells - outer vec is rows, inner vec is columns
    cells: Vec<Vec<Cell>>,
    /// Number of columns
    cols: usize,
    /// Cursor as (x, y) in canvas coordinates
    cursor: Option<(usize, usize)>,
}

impl Canvas {
    /// Create a blank canvas with the given dimensions
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec![Cell::empty(); cols]; rows],
            cols,
            cursor: None,
        }
    }

    /// Build a canvas from text lines, truncating or blank-padding each line to `cols`
    pub fn from_lines<S: AsRef<str>>(lines: &[S], cols: usize) -> Self {
        let mut canvas = Self::new(cols, lines.len());
        for (row, line) in lines.iter().enumerate() {
            canvas.put_str(row, 0, line.as_ref());
        }
        canvas
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Get the cursor marker as (x, y)
    #[must_use]
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<(usize, usize)>) {
        self.cursor = cursor;
    }

    /// Get a cell from the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Set a cell in the grid
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Write a string starting at (row, col), clipped at the right edge.
    /// Returns the number of columns written.
    pub fn put_str(&mut self, row: usize, col: usize, text: &str) -> usize {
        let mut x = col;
        for ch in text.chars() {
            let w = crate::wrap::char_width(ch);
            if w == 0 {
                continue;
            }
            if x + w > self.cols {
                break;
            }
            self.set_cell(row, x, Cell::new(ch));
            if w == 2 {
                self.set_cell(row, x + 1, Cell::continuation());
            }
            x += w;
        }
        x - col
    }

    /// Iterate the rows of the grid
    pub fn iter_rows(&self) -> std::slice::Iter<'_, Vec<Cell>> {
        self.cells.iter()
    }

    /// Text of a single row, continuation cells skipped
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|cells| {
                cells
                    .iter()
                    .filter(|c| !c.is_continuation())
                    .map(|c| c.ch)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All rows as text, mainly for assertions
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.rows()).map(|r| self.row_text(r)).collect()
    }

    /// Add blank columns on the left and right. The cursor moves with the content.
    #[must_use]
    pub fn pad_columns(mut self, left: usize, right: usize) -> Self {
        for row in &mut self.cells {
            let mut padded = Vec::with_capacity(left + row.len() + right);
            padded.resize(left, Cell::empty());
            padded.append(row);
            padded.resize(padded.len() + right, Cell::empty());
            *row = padded;
        }
        self.cols += left + right;
        self.cursor = self.cursor.map(|(x, y)| (x + left, y));
        self
    }

    /// Keep `count` rows starting at `top`, padding with blank rows when the
    /// canvas is shorter than `top + count`. The cursor is shifted up by `top`
    /// and dropped if it falls outside the kept window.
    #[must_use]
    pub fn crop_rows(mut self, top: usize, count: usize) -> Self {
        let available = self.cells.len().saturating_sub(top);
        let mut kept: Vec<Vec<Cell>> = self.cells.drain(..).skip(top).take(count).collect();
        for _ in available.min(count)..count {
            kept.push(vec![Cell::empty(); self.cols]);
        }
        self.cells = kept;
        self.cursor = self
            .cursor
            .filter(|&(_, y)| y >= top && y < top + count)
            .map(|(x, y)| (x, y - top));
        self
    }

    /// Draw `other` on top of this canvas with its top-left corner at (row, col).
    /// Cells falling outside this canvas are clipped. The cursor of `other`,
    /// if any and if inside this canvas, replaces this canvas's cursor.
    pub fn overlay(&mut self, other: &Canvas, row: usize, col: usize) {
        for (dy, cells) in other.cells.iter().enumerate() {
            for (dx, cell) in cells.iter().enumerate() {
                self.set_cell(row + dy, col + dx, *cell);
            }
        }
        if let Some((x, y)) = other.cursor {
            let (x, y) = (x + col, y + row);
            if y < self.rows() && x < self.cols {
                self.cursor = Some((x, y));
            }
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
