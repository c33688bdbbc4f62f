//! Viewport management
//! Keeps a vertical scroll offset in step with the cursor row
//!
//! ## viewport/ Invariants
//!
//! - `0 <= offset <= max(0, total_rows - height)` after every update.
//! - The cursor row lies in `offset..offset + height` after an update with
//!   `height > 0`.
//! - `scroll_position` is 0 when the content fits, otherwise
//!   `offset / (total_rows - height)`, always within `[0, 1]`.
//! - With `height == 0` nothing is visible: the cursor is not followed and
//!   the offset is only clamped.
//! - The viewport never mutates buffer contents.

use crate::error::{codes, ErrorKind, PaneError, Result};
use tracing::trace;

/// Size of the pane in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    width: usize,
    height: usize,
}

impl ViewportSize {
    /// Validate and build a viewport size. Width must be at least 1 so the
    /// reserved cursor column exists; height may be 0.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            return Err(PaneError::new(
                ErrorKind::Settings,
                codes::INVALID_WIDTH,
                format!("viewport width must be at least 1 (got {width}x{height})"),
            ));
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Columns available to text once the cursor column is reserved
    #[must_use]
    pub fn text_width(&self) -> usize {
        self.width - 1
    }

    /// Width the wrap layout is computed at. A pane with no text columns
    /// still lays out one cell per row so the cursor row stays meaningful.
    #[must_use]
    pub fn layout_width(&self) -> usize {
        self.text_width().max(1)
    }
}

/// Scroll offset plus the normalized scroll position derived from it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Wrapped rows hidden above the top of the viewport
    pub offset: usize,
    /// How far through the scrollable range the window sits, in `[0, 1]`
    pub scroll_position: f64,
}

/// Viewport manages which rows of the wrap layout are visible
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Viewport {
    state: ScrollState,
    /// Offset before the last update (for detecting scroll changes)
    prev_offset: usize,
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll so the cursor row is visible and recompute the scroll position.
    pub fn update_scroll(
        &mut self,
        cursor_row: usize,
        total_rows: usize,
        viewport_height: usize,
    ) -> ScrollState {
        self.prev_offset = self.state.offset;
        let mut offset = self.state.offset;

        if viewport_height > 0 {
            if cursor_row < offset {
                offset = cursor_row;
            } else if cursor_row >= offset + viewport_height {
                offset = cursor_row + 1 - viewport_height;
            }
        }

        // Content may have shrunk since the last update
        let max_offset = total_rows.saturating_sub(viewport_height);
        offset = offset.min(max_offset);

        self.state.offset = offset;
        self.state.scroll_position = if total_rows > viewport_height {
            offset as f64 / max_offset as f64
        } else {
            0.0
        };

        if self.scrolled() {
            trace!(
                from = self.prev_offset,
                to = offset,
                cursor_row,
                total_rows,
                viewport_height,
                "viewport scrolled"
            );
        }
        debug_assert!((0.0..=1.0).contains(&self.state.scroll_position));

        self.state
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.state.offset
    }

    #[must_use]
    pub fn scroll_position(&self) -> f64 {
        self.state.scroll_position
    }

    /// Get the previous offset (before last update)
    #[must_use]
    pub fn prev_offset(&self) -> usize {
        self.prev_offset
    }

    /// Whether the last update moved the window
    #[must_use]
    pub fn scrolled(&self) -> bool {
        self.state.offset != self.prev_offset
    }

    /// Set the offset directly. The next update re-clamps it against the content.
    #[cfg(test)]
    pub(crate) fn set_offset(&mut self, offset: usize) {
        self.state.offset = offset;
    }
}
