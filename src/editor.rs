use crate::format::{self, FormatError, SelectionRange, Style, byte_offset};

mod cursor;
mod restore;

pub use restore::{PendingRestore, SelectionRestore};

/// Plain-text buffer with a cursor and an optional selection anchor.
///
/// All offsets are character offsets. The selection spans from the anchor
/// to the cursor in whichever order they lie.
#[derive(Debug, Default)]
pub struct TextEditor {
    buffer: String,
    cursor: usize,
    anchor: Option<usize>,
    preferred_column: Option<usize>,
    restore: SelectionRestore,
    revision: u64,
}

impl TextEditor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bumped on every buffer change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn selection(&self) -> SelectionRange {
        match self.anchor {
            Some(anchor) => SelectionRange::between(anchor, self.cursor),
            None => SelectionRange::collapsed(self.cursor),
        }
    }

    pub fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    pub fn selected_text(&self) -> &str {
        let selection = self.selection();
        match (
            byte_offset(&self.buffer, selection.start),
            byte_offset(&self.buffer, selection.end),
        ) {
            (Some(start), Some(end)) => &self.buffer[start..end],
            _ => "",
        }
    }

    /// Selects `range`, leaving the cursor at its end. Ranges reaching past
    /// the buffer are ignored.
    pub fn set_selection(&mut self, range: SelectionRange) -> bool {
        if range.start > range.end || range.end > self.len_chars() {
            return false;
        }
        self.anchor = (!range.is_empty()).then_some(range.start);
        self.cursor = range.end;
        self.preferred_column = None;
        true
    }

    pub fn select_all(&mut self) {
        let len = self.len_chars();
        self.restore.cancel();
        self.set_selection(SelectionRange::new(0, len));
    }

    /// Starts or drops the selection ahead of a cursor movement. Extending
    /// keeps an existing anchor.
    pub fn prepare_selection(&mut self, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Inserts `text` at the cursor, replacing the selection if there is one.
    pub fn insert_str(&mut self, text: &str) {
        self.delete_selection();
        let at = self.cursor;
        self.replace_range(SelectionRange::collapsed(at), text);
        self.cursor = at + text.chars().count();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_selection(&mut self) -> bool {
        let selection = self.selection();
        self.anchor = None;
        if selection.is_empty() {
            return false;
        }
        self.replace_range(selection, "");
        self.cursor = selection.start;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let start = self.cursor - 1;
        self.replace_range(SelectionRange::new(start, self.cursor), "");
        self.cursor = start;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.len_chars() {
            return false;
        }
        self.replace_range(SelectionRange::new(self.cursor, self.cursor + 1), "");
        true
    }

    /// Formats the current selection with `style`.
    ///
    /// On success the new buffer is committed with the cursor parked at the
    /// start of the replacement, and the selection covering the replacement
    /// is scheduled for [`settle_selection`](Self::settle_selection).
    /// Returns `Ok(false)` when nothing is selected.
    pub fn format_selection(&mut self, style: Style) -> Result<bool, FormatError> {
        let selection = self.selection();
        if selection.is_empty() {
            return Ok(false);
        }

        let formatted = format::apply(&self.buffer, selection, style)?;
        log::debug!(
            "applied {style} to {}..{} -> {}..{}",
            selection.start,
            selection.end,
            formatted.selection.start,
            formatted.selection.end
        );

        self.buffer = formatted.buffer;
        self.revision += 1;
        self.anchor = None;
        self.cursor = selection.start;
        self.preferred_column = None;
        self.restore.schedule(formatted.selection);
        Ok(true)
    }

    /// Re-applies the selection scheduled by the last formatting call.
    pub fn settle_selection(&mut self) -> Option<SelectionRange> {
        let pending = self.restore.settle()?;
        if self.set_selection(pending.range) {
            Some(pending.range)
        } else {
            log::warn!(
                "dropping stale selection restore #{} ({}..{})",
                pending.ticket,
                pending.range.start,
                pending.range.end
            );
            None
        }
    }

    pub fn has_pending_restore(&self) -> bool {
        self.restore.is_pending()
    }

    fn replace_range(&mut self, range: SelectionRange, text: &str) {
        let (Some(start), Some(end)) = (
            byte_offset(&self.buffer, range.start),
            byte_offset(&self.buffer, range.end),
        ) else {
            return;
        };
        self.buffer.replace_range(start..end, text);
        self.revision += 1;
        self.preferred_column = None;
        self.restore.cancel();
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod editor_tests;

#[cfg(test)]
#[path = "editor/cursor_tests.rs"]
mod cursor_tests;
