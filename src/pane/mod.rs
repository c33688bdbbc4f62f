//! Scrollable text pane
//! Composes the buffer's canvas, the wrapped cursor position and the scroll window
//!
//! ## pane/ Invariants
//!
//! - The rightmost column is reserved and never holds buffer text, so a
//!   cursor at the end of a full row lands there instead of shifting text.
//! - Every render recomputes the wrap layout; only the scroll state persists.
//! - Observers are notified exactly once per render, synchronously.
//! - The pane never edits text; keys are forwarded to the buffer.

use crate::buffer::TextBuffer;
use crate::canvas::Canvas;
use crate::cursor::map_cursor;
use crate::key::Key;
use crate::observer::{format_scroll_position, ScrollObservers, SubscriptionId};
use crate::settings::PaneSettings;
use crate::viewport::{ScrollState, Viewport, ViewportSize};
use crate::wrap::wrap;
use tracing::{debug_span, warn};

/// A multi-line text viewport over a [`TextBuffer`]
#[derive(Debug)]
pub struct TextPane<B: TextBuffer> {
    buffer: B,
    viewport: Viewport,
    observers: ScrollObservers,
    scroll_precision: usize,
}

impl<B: TextBuffer> TextPane<B> {
    pub fn new(buffer: B) -> Self {
        Self::with_settings(buffer, &PaneSettings::default())
    }

    pub fn with_settings(buffer: B, settings: &PaneSettings) -> Self {
        Self {
            buffer,
            viewport: Viewport::new(),
            observers: ScrollObservers::new(),
            scroll_precision: settings.scroll_precision,
        }
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    /// Scroll state as of the last render
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.viewport.state()
    }

    /// Register an observer for scroll-position changes
    pub fn subscribe(&mut self, callback: impl FnMut(&str) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observers(&self) -> &ScrollObservers {
        &self.observers
    }

    /// Forward a key to the buffer at the text width. Resize events are not
    /// buffer input; the next render picks up the new size.
    pub fn handle_key(&mut self, size: ViewportSize, key: Key) -> bool {
        if let Key::Resize(..) = key {
            return false;
        }
        self.buffer.handle_key(size.layout_width(), key)
    }

    /// Wrapped rows of the buffer at this size
    pub fn rows(&self, size: ViewportSize) -> usize {
        self.buffer.row_count(size.layout_width())
    }

    /// Render the visible window of the buffer.
    ///
    /// The result is exactly `size.width() x size.height()` cells with the
    /// cursor marker in the canvas's own coordinates. With a height of 0 the
    /// canvas is empty and carries no cursor. With a width of 1 no text is
    /// visible and the cursor sits in the only (reserved) column.
    pub fn render(&mut self, size: ViewportSize) -> Canvas {
        let _span = debug_span!(
            "pane_render",
            width = size.width(),
            height = size.height()
        )
        .entered();

        let text_width = size.text_width();
        let layout_width = size.layout_width();
        if text_width == 0 || size.height() == 0 {
            warn!(
                width = size.width(),
                height = size.height(),
                "rendering degenerate viewport"
            );
        }

        let layout = wrap(self.buffer.content(), layout_width);
        let total_rows = layout.row_count();
        let (x, y) = map_cursor(&layout, self.buffer.content(), self.buffer.cursor_offset());
        let x = if text_width == 0 { 0 } else { x };

        let content = if text_width == 0 {
            Canvas::new(0, total_rows)
        } else {
            self.buffer.render_content(text_width)
        };
        let canvas = content.pad_columns(0, 1);

        let state = self.viewport.update_scroll(y, total_rows, size.height());
        self.observers
            .notify(&format_scroll_position(state.scroll_position, self.scroll_precision));

        let mut canvas = canvas.crop_rows(state.offset, size.height());
        if size.height() > 0 {
            debug_assert!(y >= state.offset && y < state.offset + size.height());
            canvas.set_cursor(Some((x, y - state.offset)));
        }
        canvas
    }
}
