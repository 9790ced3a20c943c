/// Letter styles expressed through the Mathematical Alphanumeric Symbols block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphStyle {
    Bold,
    Italic,
    Monospace,
}

/// First code point of each contiguous run in a glyph table.
///
/// Lowercase, uppercase and (optionally) digit runs are laid out in
/// ASCII order, so a lookup is an offset from the run start.
struct GlyphTable {
    lower: u32,
    upper: u32,
    digits: Option<u32>,
}

// Mathematical Sans-Serif Bold
const BOLD: GlyphTable = GlyphTable {
    lower: 0x1D5EE,
    upper: 0x1D5D4,
    digits: Some(0x1D7EC),
};

// Mathematical Sans-Serif Italic has no digits.
const ITALIC: GlyphTable = GlyphTable {
    lower: 0x1D622,
    upper: 0x1D608,
    digits: None,
};

// Mathematical Monospace
const MONOSPACE: GlyphTable = GlyphTable {
    lower: 0x1D68A,
    upper: 0x1D670,
    digits: Some(0x1D7F6),
};

impl GlyphStyle {
    fn table(self) -> &'static GlyphTable {
        match self {
            GlyphStyle::Bold => &BOLD,
            GlyphStyle::Italic => &ITALIC,
            GlyphStyle::Monospace => &MONOSPACE,
        }
    }
}

impl GlyphTable {
    fn lookup(&self, ch: char) -> Option<char> {
        let base = match ch {
            'a'..='z' => self.lower + (ch as u32 - 'a' as u32),
            'A'..='Z' => self.upper + (ch as u32 - 'A' as u32),
            '0'..='9' => self.digits? + (ch as u32 - '0' as u32),
            _ => return None,
        };
        char::from_u32(base)
    }
}

/// Maps a single character to its styled counterpart.
///
/// Characters without an entry in the style's table are returned as-is.
pub fn map_style(style: GlyphStyle, ch: char) -> char {
    style.table().lookup(ch).unwrap_or(ch)
}

pub fn apply_glyphs(style: GlyphStyle, text: &str) -> String {
    text.chars().map(|ch| map_style(style, ch)).collect()
}
