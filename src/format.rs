//! Unicode formatting of plain text.
//!
//! Styles are produced by character substitution (mathematical
//! alphanumerics), combining marks, and line re-layout for lists and
//! indentation, so the result survives platforms that strip markup.
//! Every transformer is a pure function of its input.

use std::{fmt, str::FromStr};

use thiserror::Error;

mod glyphs;
mod indent;
mod lists;
mod marks;

pub use glyphs::{GlyphStyle, apply_glyphs, map_style};
pub use indent::{INDENT_UNIT, indent, is_blank, level_of, render_indent};
pub use lists::{
    BULLET_PALETTE, COUNTER_DEPTH, ListCounters, bullet_list, numbered_list, numbered_marker,
};
pub use marks::{CombiningMark, apply_mark};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("list level {level} has no marker for item {count}")]
    MarkerOutOfRange { level: usize, count: u32 },
}

pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown style `{0}`")]
pub struct ParseStyleError(String);

/// Half-open range `[start, end)` of character offsets into a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn collapsed(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Builds a range from two offsets in either order.
    pub fn between(a: usize, b: usize) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    /// True when nothing is selected. Inverted ranges count as empty.
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Italic,
    Monospace,
    Strikethrough,
    Underline,
    BulletList,
    NumberedList,
    Indent,
    Outdent,
}

impl Style {
    pub const ALL: [Style; 9] = [
        Style::Bold,
        Style::Italic,
        Style::Monospace,
        Style::Strikethrough,
        Style::Underline,
        Style::BulletList,
        Style::NumberedList,
        Style::Indent,
        Style::Outdent,
    ];

    /// Stable identifier used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::Monospace => "monospace",
            Style::Strikethrough => "strikethrough",
            Style::Underline => "underline",
            Style::BulletList => "bullet-list",
            Style::NumberedList => "numbered-list",
            Style::Indent => "indent",
            Style::Outdent => "outdent",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Style::Bold => "Bold",
            Style::Italic => "Italic",
            Style::Monospace => "Monospace",
            Style::Strikethrough => "Strikethrough",
            Style::Underline => "Underline",
            Style::BulletList => "Bullet List",
            Style::NumberedList => "Numbered List",
            Style::Indent => "Indent",
            Style::Outdent => "Unindent",
        }
    }

    /// True for styles that rewrite whole lines rather than characters.
    pub const fn is_line_based(self) -> bool {
        matches!(
            self,
            Style::BulletList | Style::NumberedList | Style::Indent | Style::Outdent
        )
    }

    pub fn transform(self, text: &str) -> Result<String> {
        Ok(match self {
            Style::Bold => apply_glyphs(GlyphStyle::Bold, text),
            Style::Italic => apply_glyphs(GlyphStyle::Italic, text),
            Style::Monospace => apply_glyphs(GlyphStyle::Monospace, text),
            Style::Strikethrough => apply_mark(CombiningMark::Strikethrough, text),
            Style::Underline => apply_mark(CombiningMark::Underline, text),
            Style::BulletList => bullet_list(text),
            Style::NumberedList => numbered_list(text)?,
            Style::Indent => indent(text, true),
            Style::Outdent => indent(text, false),
        })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        let alias = match wanted.as_str() {
            "mono" => Some(Style::Monospace),
            "strike" => Some(Style::Strikethrough),
            "bullets" => Some(Style::BulletList),
            "numbers" => Some(Style::NumberedList),
            "unindent" => Some(Style::Outdent),
            _ => None,
        };
        alias
            .or_else(|| Style::ALL.into_iter().find(|style| style.name() == wanted))
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

/// A buffer after formatting, with the selection covering the replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatted {
    pub buffer: String,
    pub selection: SelectionRange,
}

impl Formatted {
    pub fn changed_from(&self, buffer: &str) -> bool {
        self.buffer != buffer
    }
}

/// Byte index of the `offset`-th character, or the buffer length when
/// `offset` is one past the last character.
pub fn byte_offset(text: &str, offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .nth(offset)
}

/// Applies `style` to the selected part of `buffer`.
///
/// An empty, inverted or out-of-bounds selection leaves the buffer and the
/// selection unchanged. Otherwise the returned selection starts where the
/// old one did and spans exactly the formatted replacement.
pub fn apply(buffer: &str, selection: SelectionRange, style: Style) -> Result<Formatted> {
    let unchanged = || Formatted {
        buffer: buffer.to_string(),
        selection,
    };

    if selection.is_empty() {
        return Ok(unchanged());
    }

    let (Some(start), Some(end)) = (
        byte_offset(buffer, selection.start),
        byte_offset(buffer, selection.end),
    ) else {
        return Ok(unchanged());
    };

    let replacement = style.transform(&buffer[start..end])?;
    let replacement_len = replacement.chars().count();

    let mut out = String::with_capacity(buffer.len() - (end - start) + replacement.len());
    out.push_str(&buffer[..start]);
    out.push_str(&replacement);
    out.push_str(&buffer[end..]);

    Ok(Formatted {
        buffer: out,
        selection: SelectionRange::new(selection.start, selection.start + replacement_len),
    })
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
