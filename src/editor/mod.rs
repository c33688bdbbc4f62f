//! Editor host
//! Runs a text pane full-screen with a status line in a single-threaded event loop
//!
//! Each key is handled to completion (buffer mutation, then a full render)
//! before the next one is read.

use crate::buffer::LineBuffer;
use crate::canvas::Canvas;
use crate::error::{codes, ErrorKind, PaneError, Result};
use crate::key::Key;
use crate::pane::TextPane;
use crate::settings::PaneSettings;
use crate::status::StatusLine;
use crate::term::{present, Size, TerminalBackend};
use crate::viewport::ViewportSize;
use tracing::{debug, info};

fn terminal_error(message: String) -> PaneError {
    PaneError::critical(ErrorKind::Renderer, codes::TERMINAL, message)
}

/// Main editor struct
pub struct Editor<T: TerminalBackend> {
    term: T,
    pane: TextPane<LineBuffer>,
    status: StatusLine,
    size: Size,
    should_quit: bool,
}

impl<T: TerminalBackend> Editor<T> {
    /// Create a new editor instance. Puts the terminal into raw mode.
    pub fn new(
        mut term: T,
        buffer: LineBuffer,
        settings: &PaneSettings,
        label: impl Into<String>,
    ) -> Result<Self> {
        term.init().map_err(terminal_error)?;
        let size = term.get_size().map_err(terminal_error)?;

        let buffer = if settings.expand_tabs {
            buffer.with_tab_width(settings.tab_width)
        } else {
            buffer
        };
        let mut pane = TextPane::with_settings(buffer, settings);
        let status = StatusLine::new(label, settings.status_line.clone());
        if status.is_visible() {
            pane.subscribe(status.observer());
        }

        info!(rows = size.rows, cols = size.cols, "editor started");
        Ok(Editor {
            term,
            pane,
            status,
            size,
            should_quit: false,
        })
    }

    pub fn pane(&self) -> &TextPane<LineBuffer> {
        &self.pane
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Area left for the pane once the status line is taken off
    pub fn pane_size(&self) -> Result<ViewportSize> {
        let rows = usize::from(self.size.rows).saturating_sub(self.status.height());
        ViewportSize::new(usize::from(self.size.cols), rows)
    }

    /// Compose one full-screen frame
    pub fn frame(&mut self) -> Result<Canvas> {
        let pane_size = self.pane_size()?;
        let cols = usize::from(self.size.cols);
        let rows = usize::from(self.size.rows);

        let mut screen = Canvas::new(cols, rows);
        screen.overlay(&self.pane.render(pane_size), 0, 0);
        if self.status.is_visible() && rows > 0 {
            screen.overlay(&self.status.render(cols), rows - 1, 0);
        }
        Ok(screen)
    }

    /// Process one key
    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Ctrl('q') => {
                debug!("quit requested");
                self.should_quit = true;
            }
            Key::Resize(cols, rows) => {
                debug!(cols, rows, "terminal resized");
                self.size = Size { rows, cols };
                self.term.clear_screen().map_err(terminal_error)?;
            }
            _ => {
                let pane_size = self.pane_size()?;
                if !self.pane.handle_key(pane_size, key) {
                    debug!(?key, "key not consumed");
                }
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let canvas = self.frame()?;
        present(&mut self.term, &canvas).map_err(terminal_error)
    }

    /// Run the editor main loop until Ctrl+Q
    pub fn run(&mut self) -> Result<()> {
        self.render()?;
        while !self.should_quit {
            let key = self.term.read_key().map_err(terminal_error)?;
            self.handle_key(key)?;
            if !self.should_quit {
                self.render()?;
            }
        }
        Ok(())
    }
}

impl<T: TerminalBackend> Drop for Editor<T> {
    fn drop(&mut self) {
        self.term.deinit();
    }
}
