use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::format::SelectionRange;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorVisualPosition {
    pub line: usize,
    pub column: u16,
}

#[derive(Debug)]
pub struct RenderResult {
    pub lines: Vec<Line<'static>>,
    pub cursor: Option<CursorVisualPosition>,
    pub total_lines: usize,
}

/// Lays out `text` into screen lines no wider than `width` columns,
/// highlighting `selection` and locating the character offset `cursor`.
pub fn render_buffer(
    text: &str,
    selection: SelectionRange,
    cursor: usize,
    width: usize,
    theme: &Theme,
) -> RenderResult {
    let mut renderer = Renderer::new(width.max(1), selection, theme);
    for (offset, ch) in text.chars().enumerate() {
        if offset == cursor {
            renderer.mark_cursor();
        }
        renderer.push_char(offset, ch);
    }
    if cursor >= text.chars().count() {
        renderer.mark_cursor();
    }
    renderer.finish()
}

struct Renderer<'a> {
    wrap_width: usize,
    selection: SelectionRange,
    theme: &'a Theme,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    current_text: String,
    current_selected: bool,
    column: usize,
    cursor: Option<CursorVisualPosition>,
}

impl<'a> Renderer<'a> {
    fn new(wrap_width: usize, selection: SelectionRange, theme: &'a Theme) -> Self {
        Self {
            wrap_width,
            selection,
            theme,
            lines: Vec::new(),
            spans: Vec::new(),
            current_text: String::new(),
            current_selected: false,
            column: 0,
            cursor: None,
        }
    }

    /// A cursor after a full row sits at the start of the next row. That row
    /// is opened by whatever follows, never by the cursor itself.
    fn mark_cursor(&mut self) {
        let (line, column) = if self.column >= self.wrap_width {
            (self.lines.len() + 1, 0)
        } else {
            (self.lines.len(), self.column)
        };
        self.cursor = Some(CursorVisualPosition {
            line,
            column: column.min(u16::MAX as usize) as u16,
        });
    }

    fn push_char(&mut self, offset: usize, ch: char) {
        let selected = self.selection.contains(offset);

        if ch == '\n' {
            // Selected line breaks show as a highlighted cell.
            if selected {
                self.push_text(" ", true);
            }
            self.break_line();
            return;
        }

        let width = ch.width().unwrap_or(0);
        if width > 0 && self.column + width > self.wrap_width && self.column > 0 {
            self.break_line();
        }
        let mut buf = [0u8; 4];
        self.push_text(ch.encode_utf8(&mut buf), selected);
        self.column += width;
    }

    fn push_text(&mut self, text: &str, selected: bool) {
        if selected != self.current_selected {
            self.flush_span();
            self.current_selected = selected;
        }
        self.current_text.push_str(text);
    }

    fn flush_span(&mut self) {
        if self.current_text.is_empty() {
            return;
        }
        let style = if self.current_selected {
            self.theme.selection_style()
        } else {
            Style::default()
        };
        let text = std::mem::take(&mut self.current_text);
        self.spans.push(Span::styled(text, style));
    }

    fn break_line(&mut self) {
        self.flush_span();
        self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        self.column = 0;
    }

    fn finish(mut self) -> RenderResult {
        self.break_line();
        let total_lines = self.lines.len();
        RenderResult {
            lines: self.lines,
            cursor: self.cursor,
            total_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn splits_on_newlines() {
        let theme = Theme::default();
        let render = render_buffer("one\ntwo", SelectionRange::default(), 0, 80, &theme);
        assert_eq!(render.total_lines, 2);
        assert_eq!(line_text(&render.lines[0]), "one");
        assert_eq!(line_text(&render.lines[1]), "two");
        assert_eq!(
            render.cursor,
            Some(CursorVisualPosition { line: 0, column: 0 })
        );
    }

    #[test]
    fn cursor_at_end_of_buffer() {
        let theme = Theme::default();
        let render = render_buffer("ab\n", SelectionRange::default(), 3, 80, &theme);
        assert_eq!(render.total_lines, 2);
        assert_eq!(
            render.cursor,
            Some(CursorVisualPosition { line: 1, column: 0 })
        );
    }

    #[test]
    fn selection_gets_its_own_span() {
        let theme = Theme::default();
        let render = render_buffer("hello world", SelectionRange::new(6, 11), 11, 80, &theme);
        let spans = &render.lines[0].spans;
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "hello ");
        assert_eq!(spans[0].style, Style::default());
        assert_eq!(spans[1].content, "world");
        assert_eq!(spans[1].style, theme.selection_style());
    }

    #[test]
    fn wraps_at_width_and_places_cursor() {
        let theme = Theme::default();
        let render = render_buffer("abcdef", SelectionRange::default(), 4, 3, &theme);
        assert_eq!(render.total_lines, 2);
        assert_eq!(line_text(&render.lines[0]), "abc");
        assert_eq!(line_text(&render.lines[1]), "def");
        assert_eq!(
            render.cursor,
            Some(CursorVisualPosition { line: 1, column: 1 })
        );
    }

    #[test]
    fn cursor_after_full_row_does_not_add_a_line() {
        let theme = Theme::default();
        let lines = |cursor| {
            let render = render_buffer("abc\nd", SelectionRange::default(), cursor, 3, &theme);
            let lines: Vec<String> = render.lines.iter().map(line_text).collect();
            (lines, render.total_lines, render.cursor)
        };

        let (at_end_of_row, total, cursor) = lines(3);
        assert_eq!(at_end_of_row, vec!["abc", "d"]);
        assert_eq!(total, 2);
        assert_eq!(cursor, Some(CursorVisualPosition { line: 1, column: 0 }));

        let (elsewhere, _, _) = lines(5);
        assert_eq!(at_end_of_row, elsewhere);
    }

    #[test]
    fn cursor_after_full_last_row_moves_below_it() {
        let theme = Theme::default();
        let render = render_buffer("abc", SelectionRange::default(), 3, 3, &theme);
        assert_eq!(render.total_lines, 1);
        assert_eq!(
            render.cursor,
            Some(CursorVisualPosition { line: 1, column: 0 })
        );
    }

    #[test]
    fn combining_marks_take_no_column() {
        let theme = Theme::default();
        let text = "a\u{336}b\u{336}";
        let render = render_buffer(text, SelectionRange::default(), 4, 80, &theme);
        assert_eq!(
            render.cursor,
            Some(CursorVisualPosition { line: 0, column: 2 })
        );
    }
}
