//! `StyledText` document model.

use std::fmt;

use crate::{
    ansi_parser::AnsiParser,
    apply::{char_to_byte, Selection},
    sgr::{self, RESET_SEQUENCE},
    style::{StylePatch, StyleSet, StyledRun},
};


/// `ESC[` occurring in the text rather than starting an escape sequence.
const LITERAL_CSI: &str = "\u{1b}[";

/// Text together with its styling, represented as a sequence of [`StyledRun`]s.
///
/// Runs always cover the entire text; adjacent runs never share the same style, and
/// only an empty document contains an empty run. The text with embedded SGR escapes
/// is derived from runs on demand via [`Self::to_ansi()`] or the [`Display`](fmt::Display)
/// implementation.
///
/// # Examples
///
/// ```
/// use ansi_block::{Color, StylePatch, StyledText};
///
/// let mut text = StyledText::plain("hi there");
/// let patch = StylePatch {
///     foreground: Some(Color::Red),
///     ..StylePatch::default()
/// };
/// text.apply_style(0..2, &patch);
/// assert_eq!(text.to_ansi(), "\u{1b}[31mhi\u{1b}[0m there");
/// assert_eq!(StyledText::from_ansi(&text.to_ansi()), text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    runs: Vec<StyledRun>,
}

impl Default for StyledText {
    fn default() -> Self {
        Self {
            runs: vec![StyledRun::default()],
        }
    }
}

impl StyledText {
    /// Creates an unstyled document.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![StyledRun::plain(text)],
        }
    }

    /// Parses a string with embedded SGR escapes. Parsing is lenient: unknown codes
    /// are ignored, and an unterminated escape sequence is treated as text.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(text), ret, fields(text.len = text.len()))
    )]
    pub fn from_ansi(text: &str) -> Self {
        Self {
            runs: AnsiParser::parse(text),
        }
    }

    /// Creates a document from arbitrary runs, dropping empty ones and merging adjacent runs
    /// with the same style.
    pub fn from_runs(runs: impl IntoIterator<Item = StyledRun>) -> Self {
        let mut this = Self { runs: vec![] };
        for run in runs {
            this.push_run(run);
        }
        this.ensure_non_empty();
        this
    }

    fn push_run(&mut self, run: StyledRun) {
        if run.text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => self.runs.push(run),
        }
    }

    fn ensure_non_empty(&mut self) {
        if self.runs.is_empty() {
            self.runs.push(StyledRun::default());
        }
    }

    /// Returns styled runs constituting this document.
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Returns the text without styling.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Returns the text length in chars.
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(|run| run.text.chars().count()).sum()
    }

    /// Checks whether the document contains no text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    /// Checks whether the document has no styling.
    pub fn is_plain(&self) -> bool {
        self.runs.iter().all(|run| run.style.is_none())
    }

    /// Returns the style of the char at the specified position, or `None` if the position
    /// is out of bounds.
    pub fn style_at(&self, char_pos: usize) -> Option<StyleSet> {
        let mut run_start = 0;
        for run in &self.runs {
            let run_len = run.text.chars().count();
            if char_pos < run_start + run_len {
                return Some(run.style);
            }
            run_start += run_len;
        }
        None
    }

    /// Merges the `patch` into the style of each char in the `selection`. Colors in the patch
    /// replace existing ones; effects are added to existing ones.
    pub fn apply_style(&mut self, selection: impl Into<Selection>, patch: &StylePatch) {
        self.map_styles(selection.into(), |style| style.patched(patch));
    }

    /// Removes all styling from the chars in the `selection`.
    pub fn clear_style(&mut self, selection: impl Into<Selection>) {
        self.map_styles(selection.into(), |_| StyleSet::NONE);
    }

    fn map_styles(&mut self, selection: Selection, map: impl Fn(StyleSet) -> StyleSet) {
        let selection = selection.clamp(self.char_len());
        if selection.is_empty() {
            return;
        }

        let old_runs = std::mem::take(&mut self.runs);
        let mut run_start = 0;
        for run in old_runs {
            let run_len = run.text.chars().count();
            let run_end = run_start + run_len;
            let local_start = selection.start.clamp(run_start, run_end) - run_start;
            let local_end = selection.end.clamp(run_start, run_end) - run_start;

            let start_byte = char_to_byte(&run.text, local_start);
            let end_byte = char_to_byte(&run.text, local_end);
            self.push_run(StyledRun::new(&run.text[..start_byte], run.style));
            self.push_run(StyledRun::new(
                &run.text[start_byte..end_byte],
                map(run.style),
            ));
            self.push_run(StyledRun::new(&run.text[end_byte..], run.style));
            run_start = run_end;
        }
        self.ensure_non_empty();
    }

    /// Replaces the chars in the `selection` with `replacement`. The inserted text inherits
    /// the style of the char preceding the selection. If the selection starts at the beginning
    /// of the text, the style of the char following the selection is used instead; if there is
    /// no such char either, the inserted text is unstyled.
    pub fn replace_range(&mut self, selection: impl Into<Selection>, replacement: &str) {
        let selection = selection.into().clamp(self.char_len());
        let inherited_style = selection
            .start
            .checked_sub(1)
            .and_then(|pos| self.style_at(pos))
            .or_else(|| self.style_at(selection.end))
            .unwrap_or_default();

        let old_runs = std::mem::take(&mut self.runs);
        let mut prefix = Vec::with_capacity(old_runs.len());
        let mut suffix = Vec::with_capacity(old_runs.len());
        let mut run_start = 0;
        for run in old_runs {
            let run_end = run_start + run.text.chars().count();
            let local_start = selection.start.clamp(run_start, run_end) - run_start;
            let local_end = selection.end.clamp(run_start, run_end) - run_start;
            let start_byte = char_to_byte(&run.text, local_start);
            let end_byte = char_to_byte(&run.text, local_end);

            prefix.push(StyledRun::new(&run.text[..start_byte], run.style));
            suffix.push(StyledRun::new(&run.text[end_byte..], run.style));
            run_start = run_end;
        }

        let inserted = StyledRun::new(replacement, inherited_style);
        let new_runs = prefix.into_iter().chain([inserted]).chain(suffix);
        for run in new_runs {
            self.push_run(run);
        }
        self.ensure_non_empty();
    }

    /// Serializes this document into a string with embedded SGR escapes. Each styled run
    /// is wrapped into a sequence setting its style and a reset sequence; unstyled runs are output
    /// as-is.
    ///
    /// A literal `ESC[` in the text would start an escape sequence when parsed back, so
    /// a sequence re-setting the run style is inserted between `ESC` and `[`. Parsing
    /// the output with [`Self::from_ansi()`] always yields the original document.
    pub fn to_ansi(&self) -> String {
        let mut output = String::new();
        for run in &self.runs {
            if run.style.is_none() {
                Self::write_run_text(&mut output, run);
            } else {
                sgr::write_sequence(&mut output, run.style.codes());
                Self::write_run_text(&mut output, run);
                output.push_str(RESET_SEQUENCE);
            }
        }
        output
    }

    fn write_run_text(output: &mut String, run: &StyledRun) {
        let mut rest = run.text.as_str();
        while let Some(pos) = rest.find(LITERAL_CSI) {
            let csi_pos = pos + sgr::ESC.len_utf8();
            output.push_str(&rest[..csi_pos]);
            if run.style.is_none() {
                output.push_str(RESET_SEQUENCE);
            } else {
                sgr::write_sequence(output, run.style.codes());
            }
            rest = &rest[csi_pos..];
        }
        output.push_str(rest);
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_ansi())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}
