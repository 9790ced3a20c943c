use super::indent::{is_blank, level_of, map_lines, render_indent};
use super::{FormatError, Result};

/// Bullet glyphs by nesting level; deeper levels reuse the last one.
pub const BULLET_PALETTE: [char; 5] = ['•', '◦', '▪', '▫', '◆'];

/// Nesting depths that keep their own counter.
pub const COUNTER_DEPTH: usize = 5;

const LETTER_BASE: u32 = 96; // 'a' - 1
const ROMAN_NUMERAL_ONE: u32 = 0x2160; // Ⅰ
const LETTER_COUNT: u32 = 26;
const ROMAN_NUMERAL_COUNT: u32 = 12;
const DEEP_MARKER: char = '\u{2022}';

pub fn bullet_list(text: &str) -> String {
    map_lines(text, |line| {
        let level = level_of(line);
        let bullet = BULLET_PALETTE[level.min(BULLET_PALETTE.len() - 1)];
        format!("{}{} {}", render_indent(level), bullet, line.trim_start())
    })
}

/// Per-level item counters for a single numbered-list pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListCounters {
    counts: [u32; COUNTER_DEPTH],
}

impl ListCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an item at `level` and returns its ordinal within the level.
    ///
    /// Entering a level forgets the progress of every deeper level, so a
    /// nested run started after returning to a shallower level restarts at 1.
    /// Levels without a counter return `None`.
    pub fn advance(&mut self, level: usize) -> Option<u32> {
        if level >= COUNTER_DEPTH {
            return None;
        }
        for count in &mut self.counts[level + 1..] {
            *count = 0;
        }
        self.counts[level] += 1;
        Some(self.counts[level])
    }

    pub fn get(&self, level: usize) -> u32 {
        self.counts.get(level).copied().unwrap_or(0)
    }
}

/// Marker text for the `count`-th item at `level`.
pub fn numbered_marker(level: usize, count: u32) -> Result<String> {
    let offset_char = |base: u32, limit: u32| {
        if (1..=limit).contains(&count) {
            char::from_u32(base + count).ok_or(FormatError::MarkerOutOfRange { level, count })
        } else {
            Err(FormatError::MarkerOutOfRange { level, count })
        }
    };

    match level {
        0 => Ok(format!("{count}.")),
        1 => Ok(format!("{}.", offset_char(LETTER_BASE, LETTER_COUNT)?)),
        2 => Ok(format!(
            "{}.",
            offset_char(ROMAN_NUMERAL_ONE - 1, ROMAN_NUMERAL_COUNT)?
        )),
        _ => Ok(DEEP_MARKER.to_string()),
    }
}

/// Numbers every non-blank line by nesting level: `1.` at the top level,
/// `a.` one level down, `Ⅰ.` two levels down and `•` deeper than that.
///
/// Fails when a lettered level runs past `z` or a Roman-numeral level runs
/// past `Ⅻ`.
pub fn numbered_list(text: &str) -> Result<String> {
    let mut counters = ListCounters::new();
    let mut lines = Vec::new();

    for line in text.split('\n') {
        if is_blank(line) {
            lines.push(line.to_string());
            continue;
        }

        let level = level_of(line);
        let count = counters.advance(level).unwrap_or(0);
        let marker = numbered_marker(level, count)?;
        lines.push(format!(
            "{}{} {}",
            render_indent(level),
            marker,
            line.trim_start()
        ));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod list_tests;
