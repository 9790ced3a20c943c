use super::*;

fn editor_with_selection(text: &str, start: usize, end: usize) -> TextEditor {
    let mut editor = TextEditor::new(text);
    assert!(editor.set_selection(SelectionRange::new(start, end)));
    editor
}

#[test]
fn format_without_selection_is_noop() {
    let mut editor = TextEditor::new("plain");
    editor.set_cursor(2);

    assert_eq!(editor.format_selection(Style::Bold), Ok(false));
    assert_eq!(editor.text(), "plain");
    assert_eq!(editor.revision(), 0);
    assert!(!editor.has_pending_restore());
}

#[test]
fn format_commits_buffer_then_restores_selection_on_settle() {
    let mut editor = editor_with_selection("make this bold", 10, 14);

    assert_eq!(editor.format_selection(Style::Bold), Ok(true));
    assert_eq!(editor.text(), "make this 𝗯𝗼𝗹𝗱");
    assert!(!editor.has_selection());
    assert_eq!(editor.cursor(), 10);
    assert!(editor.has_pending_restore());

    assert_eq!(editor.settle_selection(), Some(SelectionRange::new(10, 14)));
    assert_eq!(editor.selected_text(), "𝗯𝗼𝗹𝗱");
    assert!(editor.settle_selection().is_none());
}

#[test]
fn restored_selection_covers_longer_replacement() {
    let mut editor = editor_with_selection("ab", 0, 2);
    editor.format_selection(Style::Underline).unwrap();
    assert_eq!(editor.settle_selection(), Some(SelectionRange::new(0, 4)));
    assert_eq!(editor.selected_text(), "a\u{332}b\u{332}");
}

#[test]
fn formats_chain_on_restored_selection() {
    let mut editor = editor_with_selection("x\ny", 0, 3);
    editor.format_selection(Style::Indent).unwrap();
    editor.settle_selection();
    editor.format_selection(Style::BulletList).unwrap();
    editor.settle_selection();
    assert_eq!(editor.text(), "  ◦ x\n  ◦ y");
    assert_eq!(editor.selection(), SelectionRange::new(0, 11));
}

#[test]
fn second_format_supersedes_pending_restore() {
    let mut editor = editor_with_selection("abc", 0, 3);
    editor.format_selection(Style::Strikethrough).unwrap();

    // Select again before the first restore settled.
    editor.set_selection(SelectionRange::new(0, 2));
    editor.format_selection(Style::Bold).unwrap();

    assert_eq!(editor.settle_selection(), Some(SelectionRange::new(0, 2)));
    assert!(!editor.has_pending_restore());
}

#[test]
fn editing_cancels_pending_restore() {
    let mut editor = editor_with_selection("abc", 0, 3);
    editor.format_selection(Style::Monospace).unwrap();
    editor.insert_char('!');

    assert!(!editor.has_pending_restore());
    assert!(editor.settle_selection().is_none());
    assert_eq!(editor.text(), "!𝚊𝚋𝚌");
}

#[test]
fn failed_format_keeps_buffer_and_selection() {
    let text = vec!["    item"; 13].join("\n");
    let len = text.chars().count();
    let mut editor = editor_with_selection(&text, 0, len);

    assert!(editor.format_selection(Style::NumberedList).is_err());
    assert_eq!(editor.text(), text);
    assert_eq!(editor.selection(), SelectionRange::new(0, len));
}

#[test]
fn typing_replaces_selection() {
    let mut editor = editor_with_selection("hello world", 0, 5);
    editor.insert_str("howdy");
    assert_eq!(editor.text(), "howdy world");
    assert_eq!(editor.cursor(), 5);
    assert!(!editor.has_selection());
}

#[test]
fn backspace_and_delete() {
    let mut editor = TextEditor::new("a𝗯c");
    editor.set_cursor(2);
    assert!(editor.backspace());
    assert_eq!(editor.text(), "ac");
    assert_eq!(editor.cursor(), 1);
    assert!(editor.delete_forward());
    assert_eq!(editor.text(), "a");
    assert!(!editor.delete_forward());

    editor.set_cursor(0);
    assert!(!editor.backspace());
}

#[test]
fn newline_splits_line() {
    let mut editor = TextEditor::new("ab");
    editor.set_cursor(1);
    editor.insert_newline();
    assert_eq!(editor.text(), "a\nb");
    assert_eq!(editor.line_col(editor.cursor()), (1, 0));
}

#[test]
fn select_all_and_out_of_range_selection() {
    let mut editor = TextEditor::new("text");
    editor.select_all();
    assert_eq!(editor.selected_text(), "text");
    assert!(!editor.set_selection(SelectionRange::new(1, 9)));
    assert_eq!(editor.selection(), SelectionRange::new(0, 4));
}
