//! Wrapping text ranges with SGR escape sequences.

use std::ops::Range;

use crate::sgr::{self, SgrCode, RESET_SEQUENCE};

/// Range of selected chars in a text.
///
/// Positions are measured in chars (Unicode scalar values), not bytes. A selection
/// is lenient: it is [clamped](Self::clamp()) to the text bounds before use, and a reversed
/// range is treated as if its ends were swapped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Starting char position (inclusive).
    pub start: usize,
    /// Ending char position (exclusive).
    pub end: usize,
}

impl Selection {
    /// Creates a selection.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Checks whether the selection contains no chars.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns a normalized copy of this selection that fits into `0..=char_len`.
    #[must_use]
    pub fn clamp(self, char_len: usize) -> Self {
        let (start, end) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        Self {
            start: start.min(char_len),
            end: end.min(char_len),
        }
    }

    /// Converts this selection into a byte range of `text`, clamping it first.
    pub(crate) fn byte_range(self, text: &str) -> Range<usize> {
        let Self { start, end } = self.clamp(text.chars().count());
        char_to_byte(text, start)..char_to_byte(text, end)
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Converts a char position into a byte one. Positions past the end of `text` map to its length.
pub(crate) fn char_to_byte(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map_or(text.len(), |(byte_pos, _)| byte_pos)
}

/// Wraps the `selection` in `text` with an opening SGR sequence built from `codes`
/// and a trailing reset sequence.
///
/// If the selection is empty (after clamping) or `codes` are empty, `text` is returned unchanged.
/// Codes are emitted in the provided order.
///
/// # Examples
///
/// ```
/// use ansi_block::{apply_codes, Color, SgrCode};
///
/// let styled = apply_codes("hello", 1..4, &[SgrCode::Foreground(Color::Red)]);
/// assert_eq!(styled, "h\u{1b}[31mell\u{1b}[0mo");
/// // Empty selections are ignored.
/// assert_eq!(apply_codes("hello", 2..2, &[SgrCode::BOLD]), "hello");
/// ```
pub fn apply_codes(text: &str, selection: impl Into<Selection>, codes: &[SgrCode]) -> String {
    let range = selection.into().byte_range(text);
    if range.is_empty() || codes.is_empty() {
        return text.to_owned();
    }

    let mut output = String::with_capacity(text.len() + 4 * codes.len() + 6);
    output.push_str(&text[..range.start]);
    sgr::write_sequence(&mut output, codes.iter().copied());
    output.push_str(&text[range.clone()]);
    output.push_str(RESET_SEQUENCE);
    output.push_str(&text[range.end..]);
    output
}
