use super::*;

fn editor_at(text: &str, cursor: usize) -> TextEditor {
    let mut editor = TextEditor::new(text);
    editor.set_cursor(cursor);
    editor
}

#[test]
fn horizontal_moves_stop_at_buffer_edges() {
    let mut editor = editor_at("ab", 0);
    assert!(!editor.move_left());
    assert!(editor.move_right());
    assert!(editor.move_right());
    assert!(!editor.move_right());
    assert_eq!(editor.cursor(), 2);
}

#[test]
fn word_moves_skip_whitespace_runs() {
    let mut editor = editor_at("one  two three", 0);
    editor.move_word_right();
    assert_eq!(editor.cursor(), 5);
    editor.move_word_right();
    assert_eq!(editor.cursor(), 9);
    editor.move_word_left();
    assert_eq!(editor.cursor(), 5);
    editor.move_word_left();
    assert_eq!(editor.cursor(), 0);
}

#[test]
fn line_start_and_end() {
    let mut editor = editor_at("first\nsecond line\nthird", 8);
    editor.move_to_line_start();
    assert_eq!(editor.cursor(), 6);
    editor.move_to_line_end();
    assert_eq!(editor.cursor(), 17);
}

#[test]
fn vertical_moves_keep_preferred_column() {
    let mut editor = editor_at("long line\nab\nanother line", 7);
    assert!(editor.move_vertical(1));
    assert_eq!(editor.line_col(editor.cursor()), (1, 2));
    assert!(editor.move_vertical(1));
    assert_eq!(editor.line_col(editor.cursor()), (2, 7));
    assert!(!editor.move_vertical(1));
    assert!(editor.move_vertical(-2));
    assert_eq!(editor.line_col(editor.cursor()), (0, 7));
}

#[test]
fn line_col_and_offset_at_agree() {
    let editor = TextEditor::new("𝗮𝗯\n\nxyz");
    assert_eq!(editor.line_count(), 3);
    assert_eq!(editor.line_col(0), (0, 0));
    assert_eq!(editor.line_col(2), (0, 2));
    assert_eq!(editor.line_col(3), (1, 0));
    assert_eq!(editor.line_col(6), (2, 2));
    assert_eq!(editor.offset_at(2, 2), 6);
    assert_eq!(editor.offset_at(1, 9), 3);
    assert_eq!(editor.offset_at(9, 0), editor.len_chars());
}

#[test]
fn shift_movement_extends_selection() {
    let mut editor = editor_at("hello world", 6);
    editor.prepare_selection(true);
    editor.move_to_line_end();
    assert_eq!(editor.selected_text(), "world");

    editor.prepare_selection(true);
    editor.move_word_left();
    editor.move_word_left();
    assert_eq!(editor.selected_text(), "hello ");

    editor.prepare_selection(false);
    editor.move_right();
    assert!(!editor.has_selection());
}
