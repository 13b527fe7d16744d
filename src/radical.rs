use std::fmt;

/// Number of Kangxi radicals in the catalog.
pub const RADICAL_COUNT: usize = 214;

/// Code point of U+2F00 KANGXI RADICAL ONE. Radical `n` (zero-based) lives at `base + n`.
pub const KANGXI_BASE_CODE_POINT: u32 = 0x2F00;

/// Returns the Kangxi radical glyph for a zero-based catalog index.
///
/// Returns `None` for indices outside `0..RADICAL_COUNT`.
pub fn glyph_for_index(index: usize) -> Option<char> {
    if index >= RADICAL_COUNT {
        return None;
    }

    char::from_u32(KANGXI_BASE_CODE_POINT + index as u32)
}

/// A single radical as shown by the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadicalEntry {
    /// Zero-based position in the catalog.
    pub index: usize,
    /// Glyph derived from `index` in the Kangxi Radicals block.
    pub glyph: char,
    /// Canonical English meaning, used as the quiz answer.
    pub meaning: String,
    /// Pinyin pronunciation with tone marks.
    pub pronunciation: String,
}

impl RadicalEntry {
    /// Kangxi numbering, starting at 1.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

impl fmt::Display for RadicalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} {}: {}",
            self.glyph,
            self.number(),
            self.pronunciation,
            self.meaning
        )
    }
}
