//! Textpane - a scrollable multi-line text pane for character-grid terminals

pub mod buffer;
pub mod canvas;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod key;
pub mod observer;
pub mod pane;
pub mod settings;
pub mod status;
pub mod term;
pub mod viewport;
pub mod wrap;

#[cfg(test)]
pub mod test_utils;
