//! Line wrapping engine
//! Partitions flat text content into display rows at a fixed column width
//!
//! ## wrap/ Invariants
//!
//! - `wrap` is a pure function of (content, width).
//! - Rows are ordered and contiguous: `rows[i].next == rows[i + 1].start`,
//!   the first row starts at 0 and the last row's `next` is the content length.
//! - There is always at least one row, even for empty content.
//! - A row never displays more than `width` columns. A character wider
//!   than the whole row is drawn as [`PLACEHOLDER`] and counts as one column.
//! - Newlines and the space a word-wrap breaks at are consumed by the row
//!   they end, never displayed.

use unicode_width::UnicodeWidthChar;

/// Display width of a character in terminal columns.
/// Control characters (including tab and newline) take no columns.
#[inline]
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Drawn in place of a character too wide for its row
pub const PLACEHOLDER: char = '?';

/// Columns `ch` takes in a row `width` columns wide
#[inline]
pub fn cell_width(ch: char, width: usize) -> usize {
    match char_width(ch) {
        w if w > width => char_width(PLACEHOLDER),
        w => w,
    }
}

/// Display width of a run of characters laid out in a row `width` columns wide
pub fn span_width(chars: &[char], width: usize) -> usize {
    chars.iter().map(|&c| cell_width(c, width)).sum()
}

/// One display row of a wrap layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// Offset of the first displayed character
    pub start: usize,
    /// Offset one past the last displayed character
    pub end: usize,
    /// Offset where the following row starts (`end` plus any consumed separator)
    pub next: usize,
    /// Display width of `start..end` in columns, never above the layout width
    pub width: usize,
}

impl RowSpan {
    /// Whether the given offset belongs to this row (`start <= offset < next`)
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.next
    }
}

/// The partition of content into display rows at a fixed width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapLayout {
    width: usize,
    len: usize,
    rows: Vec<RowSpan>,
}

impl WrapLayout {
    /// Wrap `content` at `width` columns.
    ///
    /// # Panics
    /// When `width` is 0. Callers reserve the cursor column before calling
    /// and must never ask for a zero-column layout.
    pub fn new(content: &[char], width: usize) -> Self {
        assert!(width > 0, "wrap width must be at least 1");

        let mut rows = Vec::new();
        let mut line_start = 0;
        loop {
            let line_end = content[line_start..]
                .iter()
                .position(|&c| c == '\n')
                .map_or(content.len(), |p| line_start + p);
            let has_newline = line_end < content.len();
            wrap_line(content, line_start, line_end, has_newline, width, &mut rows);
            if !has_newline {
                break;
            }
            line_start = line_end + 1;
        }

        Self {
            width,
            len: content.len(),
            rows,
        }
    }

    /// The wrap width this layout was computed for
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Length of the content this layout covers
    #[must_use]
    pub fn content_len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[RowSpan] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&RowSpan> {
        self.rows.get(index)
    }

    /// Index of the row holding `offset`. Offsets at or past the end of the
    /// content land on the final row.
    pub fn row_index_for(&self, offset: usize) -> usize {
        let idx = self.rows.partition_point(|r| r.next <= offset);
        idx.min(self.rows.len() - 1)
    }
}

/// Wrap `content` at `width` columns (see [`WrapLayout::new`])
pub fn wrap(content: &[char], width: usize) -> WrapLayout {
    WrapLayout::new(content, width)
}

/// Wrap a single logical line `line_start..line_end`, appending its rows
fn wrap_line(
    content: &[char],
    line_start: usize,
    line_end: usize,
    has_newline: bool,
    width: usize,
    rows: &mut Vec<RowSpan>,
) {
    let newline = usize::from(has_newline);

    if line_start == line_end {
        rows.push(RowSpan {
            start: line_start,
            end: line_end,
            next: line_end + newline,
            width: 0,
        });
        return;
    }

    let mut pos = line_start;
    while pos < line_end {
        // Longest prefix that fits in `width` columns
        let mut fit_end = pos;
        let mut fit_width = 0;
        while fit_end < line_end {
            let w = cell_width(content[fit_end], width);
            if fit_width + w > width {
                break;
            }
            fit_width += w;
            fit_end += 1;
        }
        debug_assert!(fit_end > pos, "every character fits an empty row");

        if fit_end == line_end {
            rows.push(RowSpan {
                start: pos,
                end: line_end,
                next: line_end + newline,
                width: fit_width,
            });
            return;
        }

        // Break at the overflowing space, else at the last space inside the
        // row, else hard-break. A space that ends the logical line is kept
        // as content so the cursor after it still has a row.
        let break_at = if content[fit_end] == ' ' && fit_end + 1 < line_end {
            Some(fit_end)
        } else {
            (pos + 1..fit_end).rev().find(|&i| content[i] == ' ')
        };

        match break_at {
            Some(space) => {
                rows.push(RowSpan {
                    start: pos,
                    end: space,
                    next: space + 1,
                    width: span_width(&content[pos..space], width),
                });
                pos = space + 1;
            }
            None => {
                rows.push(RowSpan {
                    start: pos,
                    end: fit_end,
                    next: fit_end,
                    width: fit_width,
                });
                pos = fit_end;
            }
        }
    }
}
