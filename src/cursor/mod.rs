//! Cursor mapping between logical offsets and screen coordinates
//!
//! The column is deliberately not clamped to `width - 1`. A cursor sitting
//! right after the last character of a full row reports `x == width`, which
//! lands in the pane's reserved blank column instead of on top of the text.

use crate::wrap::{cell_width, span_width, WrapLayout};

/// Map a logical cursor offset to (x, y) screen coordinates.
///
/// `cursor_offset` must be within `0..=content.len()`; offsets past the end
/// are treated as the end of the content.
pub fn map_cursor(layout: &WrapLayout, content: &[char], cursor_offset: usize) -> (usize, usize) {
    debug_assert_eq!(layout.content_len(), content.len());
    let offset = cursor_offset.min(content.len());
    let y = layout.row_index_for(offset);
    let row = layout.rows()[y];
    let x = span_width(&content[row.start..offset.min(row.end)], layout.width());
    (x, y)
}

/// Inverse of [`map_cursor`]: the offset whose cell is closest to (x, y)
/// without passing it. Rows past the end clamp to the final row.
pub fn offset_for_coords(layout: &WrapLayout, content: &[char], x: usize, y: usize) -> usize {
    let y = y.min(layout.row_count() - 1);
    let row = layout.rows()[y];
    let mut col = 0;
    let mut offset = row.start;
    while offset < row.end {
        let w = cell_width(content[offset], layout.width());
        if col + w > x {
            break;
        }
        col += w;
        offset += 1;
    }
    // A hard-broken row has no separator; its end belongs to the next row.
    if offset == row.end && row.end == row.next && y + 1 < layout.row_count() && offset > row.start {
        offset -= 1;
    }
    offset
}
