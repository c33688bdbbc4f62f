//! Tests for the canvas module

use super::*;

#[test]
fn test_canvas_creation() {
    let canvas = Canvas::new(10, 3);
    assert_eq!(canvas.cols(), 10);
    assert_eq!(canvas.rows(), 3);
    assert_eq!(canvas.cursor(), None);
    assert_eq!(canvas.row_text(0), " ".repeat(10));
}

#[test]
fn test_set_and_get_cell() {
    let mut canvas = Canvas::new(5, 5);
    assert!(canvas.set_cell(2, 3, Cell::new('X')));
    assert_eq!(canvas.cell(2, 3).unwrap().ch, 'X');

    assert!(!canvas.set_cell(5, 0, Cell::new('X')));
    assert!(!canvas.set_cell(0, 5, Cell::new('X')));
    assert!(canvas.cell(5, 5).is_none());
}

#[test]
fn test_from_lines_truncates_and_pads() {
    let canvas = Canvas::from_lines(&["hello world", "hi"], 5);
    assert_eq!(canvas.to_lines(), vec!["hello", "hi   "]);
}

#[test]
fn test_put_str_wide_chars() {
    let mut canvas = Canvas::new(5, 1);
    let written = canvas.put_str(0, 0, "a日b");
    assert_eq!(written, 4);
    assert!(canvas.cell(0, 2).unwrap().is_continuation());
    assert_eq!(canvas.row_text(0), "a日b ");
}

#[test]
fn test_put_str_wide_char_does_not_split_at_edge() {
    let mut canvas = Canvas::new(2, 1);
    let written = canvas.put_str(0, 0, "a日");
    assert_eq!(written, 1);
    assert_eq!(canvas.row_text(0), "a ");
}

#[test]
fn test_pad_columns() {
    let mut canvas = Canvas::from_lines(&["ab", "cd"], 2);
    canvas.set_cursor(Some((1, 1)));

    let padded = canvas.pad_columns(1, 2);
    assert_eq!(padded.cols(), 5);
    assert_eq!(padded.to_lines(), vec![" ab  ", " cd  "]);
    assert_eq!(padded.cursor(), Some((2, 1)));
}

#[test]
fn test_pad_columns_zero_width_canvas() {
    let padded = Canvas::new(0, 3).pad_columns(0, 1);
    assert_eq!(padded.cols(), 1);
    assert_eq!(padded.to_lines(), vec![" ", " ", " "]);
}

#[test]
fn test_crop_rows_window() {
    let canvas = Canvas::from_lines(&["0", "1", "2", "3", "4"], 1);
    let cropped = canvas.crop_rows(1, 3);
    assert_eq!(cropped.to_lines(), vec!["1", "2", "3"]);
}

#[test]
fn test_crop_rows_pads_short_canvas() {
    let canvas = Canvas::from_lines(&["a", "b"], 1);
    let cropped = canvas.crop_rows(1, 4);
    assert_eq!(cropped.rows(), 4);
    assert_eq!(cropped.to_lines(), vec!["b", " ", " ", " "]);
}

#[test]
fn test_crop_rows_past_end_is_blank() {
    let canvas = Canvas::from_lines(&["a"], 1);
    let cropped = canvas.crop_rows(5, 2);
    assert_eq!(cropped.to_lines(), vec![" ", " "]);
}

#[test]
fn test_crop_rows_zero_count() {
    let canvas = Canvas::from_lines(&["a", "b"], 1);
    let cropped = canvas.crop_rows(0, 0);
    assert_eq!(cropped.rows(), 0);
    assert_eq!(cropped.cols(), 1);
}

#[test]
fn test_crop_rows_moves_cursor() {
    let mut canvas = Canvas::from_lines(&["a", "b", "c"], 1);
    canvas.set_cursor(Some((0, 2)));
    assert_eq!(canvas.clone().crop_rows(1, 2).cursor(), Some((0, 1)));
    assert_eq!(canvas.crop_rows(0, 2).cursor(), None);
}

#[test]
fn test_overlay_clips_and_takes_cursor() {
    let mut base = Canvas::new(4, 2);
    let mut top = Canvas::from_lines(&["xyz"], 3);
    top.set_cursor(Some((1, 0)));

    base.overlay(&top, 1, 2);
    assert_eq!(base.to_lines(), vec!["    ", "  xy"]);
    assert_eq!(base.cursor(), Some((3, 1)));
}

#[test]
fn test_overlay_keeps_cursor_when_other_has_none() {
    let mut base = Canvas::new(3, 2);
    base.set_cursor(Some((0, 0)));
    base.overlay(&Canvas::from_lines(&["s"], 1), 1, 0);
    assert_eq!(base.cursor(), Some((0, 0)));
    assert_eq!(base.row_text(1), "s  ");
}

#[test]
fn test_cell_inverse() {
    let cell = Cell::new('a').with_inverse(true);
    assert!(cell.inverse);
    assert_eq!(Cell::default(), Cell::empty());
}
