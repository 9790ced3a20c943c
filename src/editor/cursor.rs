use super::TextEditor;

impl TextEditor {
    /// Moves the cursor to `offset`, clamped to the buffer. Returns whether
    /// the cursor moved.
    pub fn set_cursor(&mut self, offset: usize) -> bool {
        self.preferred_column = None;
        self.move_to(offset)
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.set_cursor(self.cursor - 1)
    }

    pub fn move_right(&mut self) -> bool {
        self.set_cursor(self.cursor + 1)
    }

    pub fn move_word_left(&mut self) -> bool {
        let chars: Vec<char> = self.buffer.chars().collect();
        let mut pos = self.cursor.min(chars.len());
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        self.set_cursor(pos)
    }

    pub fn move_word_right(&mut self) -> bool {
        let chars: Vec<char> = self.buffer.chars().collect();
        let mut pos = self.cursor.min(chars.len());
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        self.set_cursor(pos)
    }

    pub fn move_to_line_start(&mut self) -> bool {
        let (line, _) = self.line_col(self.cursor);
        self.set_cursor(self.offset_at(line, 0))
    }

    pub fn move_to_line_end(&mut self) -> bool {
        let (line, _) = self.line_col(self.cursor);
        self.set_cursor(self.offset_at(line, usize::MAX))
    }

    pub fn move_to_document_start(&mut self) -> bool {
        self.set_cursor(0)
    }

    pub fn move_to_document_end(&mut self) -> bool {
        self.set_cursor(self.len_chars())
    }

    /// Moves `delta` lines up (negative) or down, keeping the column the
    /// cursor had before the first vertical move where the line allows.
    pub fn move_vertical(&mut self, delta: isize) -> bool {
        let (line, column) = self.line_col(self.cursor);
        let last_line = self.line_count().saturating_sub(1);
        let target = line.saturating_add_signed(delta).min(last_line);
        if target == line {
            return false;
        }

        let column = self.preferred_column.unwrap_or(column);
        let moved = self.move_to(self.offset_at(target, column));
        self.preferred_column = Some(column);
        moved
    }

    pub fn line_count(&self) -> usize {
        self.buffer.split('\n').count()
    }

    /// Zero-based line and column of a character offset.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let mut line = 0;
        let mut column = 0;
        for ch in self.buffer.chars().take(offset) {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    /// Character offset of `column` on `line`, clamped to the line's end.
    pub fn offset_at(&self, line: usize, column: usize) -> usize {
        let mut offset = 0;
        for (idx, text) in self.buffer.split('\n').enumerate() {
            let len = text.chars().count();
            if idx == line {
                return offset + column.min(len);
            }
            offset += len + 1;
        }
        self.len_chars()
    }

    fn move_to(&mut self, offset: usize) -> bool {
        let offset = offset.min(self.len_chars());
        if offset == self.cursor {
            return false;
        }
        self.cursor = offset;
        self.restore.cancel();
        true
    }
}
