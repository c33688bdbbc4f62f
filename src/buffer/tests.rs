//! Tests for the reference text buffer

use super::*;

#[test]
fn test_from_text_places_cursor_at_end() {
    let buf = LineBuffer::from_text("abc");
    assert_eq!(buf.cursor_offset(), 3);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.revision(), 0);
}

#[test]
fn test_insert_and_enter() {
    let mut buf = LineBuffer::new();
    assert!(buf.is_empty());
    assert!(buf.handle_key(10, Key::Char('a')));
    assert!(buf.handle_key(10, Key::Enter));
    assert!(buf.handle_key(10, Key::Char('b')));
    assert_eq!(buf.text(), "a\nb");
    assert_eq!(buf.cursor_offset(), 3);
    assert_eq!(buf.revision(), 3);
}

#[test]
fn test_backspace_and_delete() {
    let mut buf = LineBuffer::from_text("abc");
    assert!(buf.handle_key(10, Key::Backspace));
    assert_eq!(buf.text(), "ab");
    assert!(!buf.handle_key(10, Key::Delete));

    buf.set_cursor(0);
    assert!(!buf.handle_key(10, Key::Backspace));
    assert!(buf.handle_key(10, Key::Delete));
    assert_eq!(buf.text(), "b");
    assert_eq!(buf.cursor_offset(), 0);
}

#[test]
fn test_horizontal_movement_stops_at_edges() {
    let mut buf = LineBuffer::from_text("ab");
    assert!(!buf.handle_key(10, Key::ArrowRight));
    assert!(buf.handle_key(10, Key::ArrowLeft));
    assert!(buf.handle_key(10, Key::ArrowLeft));
    assert!(!buf.handle_key(10, Key::ArrowLeft));
    assert_eq!(buf.cursor_offset(), 0);
    assert_eq!(buf.revision(), 0);
}

#[test]
fn test_home_end_use_logical_lines() {
    let mut buf = LineBuffer::from_text("one\ntwo words");
    buf.set_cursor(6);
    assert!(buf.handle_key(4, Key::Home));
    assert_eq!(buf.cursor_offset(), 4);
    assert!(buf.handle_key(4, Key::End));
    assert_eq!(buf.cursor_offset(), 13);
    assert!(!buf.handle_key(4, Key::End));
}

#[test]
fn test_vertical_movement_follows_wrapped_rows() {
    // "hello world" at width 5 wraps into "hello" / "world"
    let mut buf = LineBuffer::from_text("hello world");
    buf.set_cursor(9);
    assert!(buf.handle_key(5, Key::ArrowUp));
    assert_eq!(buf.cursor_offset(), 3);
    assert!(!buf.handle_key(5, Key::ArrowUp));
    assert!(buf.handle_key(5, Key::ArrowDown));
    assert_eq!(buf.cursor_offset(), 9);
    assert!(!buf.handle_key(5, Key::ArrowDown));
}

#[test]
fn test_vertical_movement_clamps_to_shorter_row() {
    let mut buf = LineBuffer::from_text("long line\nab");
    buf.set_cursor(8);
    assert!(buf.handle_key(20, Key::ArrowDown));
    assert_eq!(buf.cursor_offset(), 12);
}

#[test]
fn test_tab_expands_to_next_stop() {
    let mut buf = LineBuffer::from_text("ab").with_tab_width(4);
    assert!(buf.handle_key(10, Key::Tab));
    assert_eq!(buf.text(), "ab  ");

    let mut plain = LineBuffer::new();
    assert!(!plain.handle_key(10, Key::Tab));
}

#[test]
fn test_unhandled_keys() {
    let mut buf = LineBuffer::new();
    assert!(!buf.handle_key(10, Key::Escape));
    assert!(!buf.handle_key(10, Key::Ctrl('q')));
    assert!(!buf.handle_key(10, Key::Unknown));
}

#[test]
fn test_render_content() {
    let buf = LineBuffer::from_text("hello world\nab");
    let canvas = buf.render_content(5);
    assert_eq!(canvas.cols(), 5);
    assert_eq!(canvas.to_lines(), vec!["hello", "world", "ab   "]);
    assert_eq!(canvas.cursor(), None);
}

#[test]
fn test_render_content_wide_chars() {
    let buf = LineBuffer::from_text("日本語");
    let canvas = buf.render_content(4);
    assert_eq!(canvas.to_lines(), vec!["日本", "語  "]);
}

#[test]
fn test_render_content_too_wide_for_row_uses_placeholder() {
    let buf = LineBuffer::from_text("a日");
    let canvas = buf.render_content(1);
    assert_eq!(canvas.cols(), 1);
    assert_eq!(canvas.to_lines(), vec!["a", "?"]);
    assert!(!canvas.cell(1, 0).unwrap().is_continuation());
}

#[test]
fn test_row_count_matches_wrap() {
    let buf = LineBuffer::from_text("abcdefghijk\n");
    assert_eq!(buf.row_count(10), 3);
    assert_eq!(buf.row_count(20), 2);
}

#[test]
fn test_load_file() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "first\nsecond").unwrap();

    let buf = LineBuffer::load(file.path()).unwrap();
    assert_eq!(buf.text(), "first\nsecond");
    assert_eq!(buf.cursor_offset(), 0);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = LineBuffer::load(dir.path().join("missing.txt")).unwrap_err();
    assert_eq!(err.kind, crate::error::ErrorKind::Io);
}
