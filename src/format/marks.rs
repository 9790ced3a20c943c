#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombiningMark {
    /// U+0336 COMBINING LONG STROKE OVERLAY
    Strikethrough,
    /// U+0332 COMBINING LOW LINE
    Underline,
}

impl CombiningMark {
    pub const fn as_char(self) -> char {
        match self {
            CombiningMark::Strikethrough => '\u{0336}',
            CombiningMark::Underline => '\u{0332}',
        }
    }
}

/// Follows every character of `text`, whitespace and line breaks included,
/// with the combining mark.
pub fn apply_mark(mark: CombiningMark, text: &str) -> String {
    let mark = mark.as_char();
    let mut out = String::with_capacity(text.len() + text.chars().count() * mark.len_utf8());
    for ch in text.chars() {
        out.push(ch);
        out.push(mark);
    }
    out
}
