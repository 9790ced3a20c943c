/// One level of indentation.
pub const INDENT_UNIT: &str = "  ";

/// Returns true for empty and whitespace-only lines.
///
/// Blank lines have no indentation level; every line transformer passes
/// them through verbatim.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Nesting level of a line: the leading whitespace run in characters,
/// halved and rounded down.
pub fn level_of(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count() / 2
}

pub fn render_indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Adds (`grow`) or removes one indentation unit on every non-blank line.
///
/// Outdenting a line with fewer than two leading spaces leaves it unchanged.
pub fn indent(text: &str, grow: bool) -> String {
    map_lines(text, |line| {
        if grow {
            format!("{INDENT_UNIT}{line}")
        } else {
            line.strip_prefix(INDENT_UNIT).unwrap_or(line).to_string()
        }
    })
}

/// Rewrites each non-blank line of `text`, keeping blank lines and the
/// `\n` separators untouched.
pub(super) fn map_lines<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                line.to_string()
            } else {
                f(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
