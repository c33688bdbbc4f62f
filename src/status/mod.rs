//! Status line
//! One-row display that observes the pane's scroll position
//!
//! ## status/ Invariants
//!
//! - Status content is derived entirely from what observers deliver.
//! - Status rendering does not influence pane behavior.
//! - Status never consumes input.

use crate::canvas::Canvas;
use crate::settings::StatusSettings;
use std::cell::RefCell;
use std::rc::Rc;
use unicode_width::UnicodeWidthStr;

/// Status line renderer
#[derive(Debug, Clone)]
pub struct StatusLine {
    label: String,
    settings: StatusSettings,
    /// Last scroll position text, shared with the observer closure
    scroll: Rc<RefCell<String>>,
}

impl StatusLine {
    pub fn new(label: impl Into<String>, settings: StatusSettings) -> Self {
        Self {
            label: label.into(),
            settings,
            scroll: Rc::new(RefCell::new(String::new())),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.settings.show
    }

    /// Rows the status line takes from the screen
    #[must_use]
    pub fn height(&self) -> usize {
        usize::from(self.settings.show)
    }

    /// Observer to hand to [`crate::pane::TextPane::subscribe`]
    pub fn observer(&self) -> impl FnMut(&str) + 'static {
        let scroll = Rc::clone(&self.scroll);
        move |text: &str| {
            let mut current = scroll.borrow_mut();
            current.clear();
            current.push_str(text);
        }
    }

    pub fn scroll_text(&self) -> String {
        self.scroll.borrow().clone()
    }

    /// Render the label on the left and the scroll position right-aligned.
    /// The label is dropped when both do not fit.
    pub fn render(&self, cols: usize) -> Canvas {
        let mut canvas = Canvas::new(cols, 1);

        let right = format!("{} ", self.scroll.borrow());
        let left = format!(" {}", self.label);
        let right_width = right.width();

        if left.width() + right_width <= cols {
            canvas.put_str(0, 0, &left);
        }
        canvas.put_str(0, cols.saturating_sub(right_width), &right);

        if self.settings.reverse_video {
            for col in 0..cols {
                if let Some(cell) = canvas.cell(0, col) {
                    let cell = cell.with_inverse(true);
                    canvas.set_cell(0, col, cell);
                }
            }
        }
        canvas
    }
}
