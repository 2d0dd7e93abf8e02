// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Digit atlas cells and the glyph lookup table.
//!
//! The procedural atlas is two rows high. The top row holds the digits `0`–`9` left to right, each
//! a tenth of the texture wide, so digit `d` starts at `x = d / 10`. The bottom row holds the
//! decimal point and the minus sign.

use understory_sequence::{OrderedPair, Sequence};

/// Atlas cell of the decimal point, as `[x, y, width, height]`.
pub const DECIMAL_POINT_CELL: [f32; 4] = [0.0, 0.5, 0.1, 0.5];

/// Atlas cell of the minus sign, as `[x, y, width, height]`.
pub const MINUS_CELL: [f32; 4] = [0.1, 0.5, 0.1, 0.5];

/// Characters the procedural atlas can draw.
pub const ATLAS_CHARS: &str = "0123456789.-";

/// The `u_offset` cell for `c`, or `None` if the atlas has no glyph for it.
pub fn atlas_offset(c: char) -> Option<[f32; 4]> {
    match c {
        '.' => Some(DECIMAL_POINT_CELL),
        '-' => Some(MINUS_CELL),
        _ => c.to_digit(10).map(|d| [d as f32 / 10.0, 0.0, 0.1, 0.5]),
    }
}

/// Sorted character → atlas cell table, built once and searched per glyph.
///
/// Entries are [`OrderedPair`]s keyed by cell and ordered by character.
#[derive(Clone, Debug)]
pub struct GlyphTable {
    entries: Sequence<OrderedPair<[f32; 4], char>>,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::from_chars(ATLAS_CHARS.chars())
    }
}

impl GlyphTable {
    /// Table for the given characters. Characters without an atlas cell are left out.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut entries = Sequence::new();
        for c in chars {
            if let Some(cell) = atlas_offset(c)
                && entries.binary_search_by_key(&c, |e: &OrderedPair<_, char>| e.value).is_err()
            {
                entries.insert_sorted(OrderedPair::new(cell, c));
            }
        }
        Self { entries }
    }

    /// Cell for `c`.
    pub fn lookup(&self, c: char) -> Option<[f32; 4]> {
        let i = self.entries.binary_search_by_key(&c, |e| e.value).ok()?;
        self.entries.get(i).map(|e| e.key)
    }

    /// Number of characters in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no characters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
