//! `Session` controller tying together the document, selection and pending style choice.

use crate::{
    apply::Selection,
    document::StyledText,
    fence,
    html::{render_html, HtmlOptions},
    sgr::{Color, Effect},
    style::{EffectSet, StylePatch, StyledRun},
};

/// Style chosen by the user before applying it to the selection.
///
/// Colors equal to [`Self::DEFAULT_FOREGROUND`] / [`Self::DEFAULT_BACKGROUND`] are treated
/// as "no choice" and are not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct StylePicker {
    /// Text color.
    pub foreground: Color,
    /// Background color.
    pub background: Color,
    /// Whether to apply bold effect.
    pub bold: bool,
    /// Whether to apply italic effect.
    pub italic: bool,
    /// Whether to apply underline effect.
    pub underline: bool,
}

impl Default for StylePicker {
    fn default() -> Self {
        Self {
            foreground: Self::DEFAULT_FOREGROUND,
            background: Self::DEFAULT_BACKGROUND,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl StylePicker {
    /// Text color that is not applied.
    pub const DEFAULT_FOREGROUND: Color = Color::White;
    /// Background color that is not applied.
    pub const DEFAULT_BACKGROUND: Color = Color::Black;

    /// Text colors offered to the user, starting from red. The last choice is
    /// [`Self::DEFAULT_FOREGROUND`], which is never applied.
    pub const FOREGROUND_CHOICES: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Background colors offered to the user.
    pub const BACKGROUND_CHOICES: [Color; 8] = Color::ALL;

    /// Converts this choice into a patch. Default colors are skipped.
    pub fn to_patch(&self) -> StylePatch {
        let effects: EffectSet = [
            (Effect::Bold, self.bold),
            (Effect::Italic, self.italic),
            (Effect::Underline, self.underline),
        ]
        .into_iter()
        .filter_map(|(effect, enabled)| enabled.then_some(effect))
        .collect();

        StylePatch {
            foreground: Some(self.foreground).filter(|&color| color != Self::DEFAULT_FOREGROUND),
            background: Some(self.background).filter(|&color| color != Self::DEFAULT_BACKGROUND),
            effects,
        }
    }
}

/// Editing session for a single document.
///
/// The session holds the [`StyledText`] being edited, the last recorded selection, and
/// the pending [`StylePicker`] choice. Derived views (the styled text, the fenced output
/// and the HTML preview) are computed on each call.
///
/// # Examples
///
/// ```
/// use ansi_block::{Color, Session};
///
/// let mut session = Session::new();
/// session.set_raw_text("hi there");
/// session.record_selection(0, 2);
/// session.picker_mut().foreground = Color::Red;
/// assert!(session.apply_pending_style());
///
/// assert_eq!(session.styled_text(), "\u{1b}[31mhi\u{1b}[0m there");
/// assert_eq!(session.output(), "```ansi\n\u{1b}[31mhi\u{1b}[0m there\n```");
/// assert_eq!(
///     session.preview_html(),
///     r#"<span style="color:#ff5555">hi</span> there"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    document: StyledText,
    selection: Selection,
    picker: StylePicker,
    html_options: HtmlOptions,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from a string with embedded SGR escapes (e.g., the body of a block
    /// produced by [`Self::output()`] and extracted with [`fence::unwrap()`]).
    pub fn from_ansi(text: &str) -> Self {
        Self {
            document: StyledText::from_ansi(text),
            ..Self::default()
        }
    }

    /// Sets options used by [`Self::preview_html()`].
    #[must_use]
    pub fn with_html_options(mut self, options: HtmlOptions) -> Self {
        self.html_options = options;
        self
    }

    /// Returns the edited document.
    pub fn document(&self) -> &StyledText {
        &self.document
    }

    /// Returns the text without styling.
    pub fn raw_text(&self) -> String {
        self.document.text()
    }

    /// Returns styled runs of the document.
    pub fn runs(&self) -> &[StyledRun] {
        self.document.runs()
    }

    /// Returns the last recorded selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the pending style choice.
    pub fn picker(&self) -> &StylePicker {
        &self.picker
    }

    /// Returns a mutable reference to the pending style choice.
    pub fn picker_mut(&mut self) -> &mut StylePicker {
        &mut self.picker
    }

    /// Replaces the raw text. Only the edited region is updated: the common prefix and suffix
    /// of the old and new text retain their styling, and inserted text inherits the style
    /// of the preceding char.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(new_text.len = new_text.len()))
    )]
    pub fn set_raw_text(&mut self, new_text: &str) {
        let old_text = self.document.text();
        if old_text == new_text {
            return;
        }

        let old_chars: Vec<char> = old_text.chars().collect();
        let new_chars: Vec<char> = new_text.chars().collect();
        let prefix_len = old_chars
            .iter()
            .zip(&new_chars)
            .take_while(|(old, new)| old == new)
            .count();
        let max_suffix_len = old_chars.len().min(new_chars.len()) - prefix_len;
        let suffix_len = old_chars
            .iter()
            .rev()
            .zip(new_chars.iter().rev())
            .take(max_suffix_len)
            .take_while(|(old, new)| old == new)
            .count();

        let replaced = Selection::new(prefix_len, old_chars.len() - suffix_len);
        let inserted: String = new_chars[prefix_len..new_chars.len() - suffix_len]
            .iter()
            .collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(?replaced, inserted.len = inserted.len(), "reconciled text edit");

        self.document.replace_range(replaced, &inserted);
    }

    /// Records the selection used by subsequent apply operations. Positions are measured
    /// in chars; they are clamped to the text bounds when applying styles.
    pub fn record_selection(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end);
    }

    /// Applies the pending style choice to the recorded selection.
    ///
    /// Returns `false` and leaves the document intact if the selection is empty, or if
    /// the choice has only default colors and no effects.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), ret, fields(self.selection = ?self.selection))
    )]
    pub fn apply_pending_style(&mut self) -> bool {
        let patch = self.picker.to_patch();
        self.apply_patch(&patch)
    }

    /// Applies a single effect to the recorded selection.
    ///
    /// Returns `false` and leaves the document intact if the selection is empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), ret, fields(self.selection = ?self.selection))
    )]
    pub fn apply_effect(&mut self, effect: Effect) -> bool {
        self.apply_patch(&StylePatch::effect(effect))
    }

    /// Removes styling from the recorded selection.
    ///
    /// Returns `false` if the selection is empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), ret, fields(self.selection = ?self.selection))
    )]
    pub fn clear_style(&mut self) -> bool {
        let selection = self.clamped_selection();
        if selection.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("selection is empty; declining to clear style");
            return false;
        }
        self.document.clear_style(selection);
        true
    }

    fn clamped_selection(&self) -> Selection {
        self.selection.clamp(self.document.char_len())
    }

    fn apply_patch(&mut self, patch: &StylePatch) -> bool {
        let selection = self.clamped_selection();
        if selection.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("selection is empty; declining to apply style");
            return false;
        }
        if patch.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("no style chosen; declining to apply style");
            return false;
        }

        self.document.apply_style(selection, patch);
        true
    }

    /// Returns the text with embedded SGR escapes. If no styling is applied, this is
    /// the raw text, unless the raw text contains a literal `ESC[` (see [`StyledText::to_ansi()`]).
    pub fn styled_text(&self) -> String {
        self.document.to_ansi()
    }

    /// Returns the styled text wrapped into a fenced `ansi` code block, ready to be pasted
    /// into a chat message.
    pub fn output(&self) -> String {
        fence::wrap(&self.styled_text())
    }

    /// Renders the document as HTML.
    pub fn preview_html(&self) -> String {
        render_html(self.document.runs(), &self.html_options)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{palette::NamedPalette, style::StyleSet};

    fn session_with_text(text: &str) -> Session {
        let mut session = Session::new();
        session.set_raw_text(text);
        session
    }

    #[test]
    fn end_to_end_scenario() {
        let mut session = session_with_text("hi there");
        session.record_selection(0, 2);
        session.picker_mut().foreground = Color::Red;
        assert!(session.apply_pending_style());

        assert_eq!(session.styled_text(), "\u{1b}[31mhi\u{1b}[0m there");
        assert_eq!(
            session.output(),
            "```ansi\n\u{1b}[31mhi\u{1b}[0m there\n```"
        );
        let red = StyleSet::default().with_foreground(Color::Red);
        assert_eq!(
            session.runs(),
            [StyledRun::new("hi", red), StyledRun::plain(" there")]
        );
    }

    #[test]
    fn output_falls_back_to_raw_text() {
        let session = session_with_text("just text");
        assert_eq!(session.output(), "```ansi\njust text\n```");
        assert_eq!(session.preview_html(), "just text");
        assert_eq!(Session::new().output(), "```ansi\n\n```");
    }

    #[test]
    fn default_choice_is_declined() {
        let mut session = session_with_text("hello");
        session.record_selection(0, 5);
        session.picker_mut().foreground = StylePicker::DEFAULT_FOREGROUND;
        session.picker_mut().background = StylePicker::DEFAULT_BACKGROUND;
        assert!(!session.apply_pending_style());
        assert_eq!(session.styled_text(), "hello");
    }

    #[test]
    fn empty_selection_is_declined() {
        let mut session = session_with_text("hello");
        session.record_selection(3, 3);
        session.picker_mut().foreground = Color::Green;
        assert!(!session.apply_pending_style());
        assert!(!session.apply_effect(Effect::Bold));
        assert!(!session.clear_style());

        session.record_selection(10, 20);
        assert!(!session.apply_pending_style());
        assert_eq!(session.styled_text(), "hello");
    }

    #[test]
    fn applying_colors_and_toggles_from_picker() {
        let mut session = session_with_text("hello");
        session.record_selection(1, 4);
        *session.picker_mut() = StylePicker {
            foreground: Color::Yellow,
            background: Color::Blue,
            bold: true,
            underline: true,
            ..StylePicker::default()
        };
        assert!(session.apply_pending_style());
        assert_eq!(session.styled_text(), "h\u{1b}[33;44;1;4mell\u{1b}[0mo");
    }

    #[test]
    fn applying_toggle() {
        let mut session = session_with_text("hello");
        session.record_selection(0, 1);
        assert!(session.apply_effect(Effect::Italic));
        assert_eq!(session.styled_text(), "\u{1b}[3mh\u{1b}[0mello");
    }

    #[test]
    fn consecutive_applications_are_preserved() {
        let mut session = session_with_text("red and blue");
        session.record_selection(0, 3);
        session.picker_mut().foreground = Color::Red;
        assert!(session.apply_pending_style());

        session.record_selection(8, 12);
        session.picker_mut().foreground = Color::Blue;
        assert!(session.apply_pending_style());

        assert_eq!(
            session.styled_text(),
            "\u{1b}[31mred\u{1b}[0m and \u{1b}[34mblue\u{1b}[0m"
        );
    }

    #[test]
    fn editing_text_keeps_styles_outside_edit() {
        let mut session = session_with_text("hi there");
        session.record_selection(0, 2);
        session.picker_mut().foreground = Color::Red;
        session.apply_pending_style();

        // Append text.
        session.set_raw_text("hi there!");
        assert_eq!(session.styled_text(), "\u{1b}[31mhi\u{1b}[0m there!");
        // Delete text.
        session.set_raw_text("hi the!");
        assert_eq!(session.styled_text(), "\u{1b}[31mhi\u{1b}[0m the!");
        // Type right after the styled word.
        session.set_raw_text("hii the!");
        assert_eq!(session.styled_text(), "\u{1b}[31mhii\u{1b}[0m the!");
        // Replace everything.
        session.set_raw_text("bye");
        assert_eq!(session.styled_text(), "bye");
        assert_eq!(session.raw_text(), "bye");
    }

    #[test]
    fn editing_repeated_chars() {
        let mut session = session_with_text("aaaa");
        session.record_selection(2, 4);
        session.apply_effect(Effect::Bold);
        session.set_raw_text("aaa");
        assert_eq!(session.raw_text(), "aaa");
        assert_eq!(session.styled_text(), "aa\u{1b}[1ma\u{1b}[0m");
    }

    #[test]
    fn styling_text_with_literal_escape() {
        let mut session = session_with_text("a\u{1b}[b");
        session.record_selection(0, 3);
        session.picker_mut().foreground = Color::Red;
        assert!(session.apply_pending_style());

        let red = StyleSet::default().with_foreground(Color::Red);
        assert_eq!(
            session.runs(),
            [StyledRun::new("a\u{1b}[", red), StyledRun::plain("b")]
        );
        let styled = session.styled_text();
        assert_eq!(styled, "\u{1b}[31ma\u{1b}\u{1b}[31m[\u{1b}[0mb");
        assert_eq!(crate::parse_ansi(&styled), session.runs());
        assert_eq!(
            session.preview_html(),
            "<span style=\"color:#ff5555\">a\u{1b}[</span>b"
        );
    }

    #[test]
    fn clearing_style() {
        let mut session = Session::from_ansi("\u{1b}[32mgreen\u{1b}[0m");
        session.record_selection(0, 5);
        assert!(session.clear_style());
        assert_eq!(session.styled_text(), "green");
    }

    #[test]
    fn preview_with_custom_palette() {
        let options = HtmlOptions::default().with_palette(NamedPalette::Xterm.into());
        let mut session = Session::from_ansi("a<b").with_html_options(options);
        session.record_selection(1, 2);
        session.apply_effect(Effect::Underline);
        assert_eq!(
            session.preview_html(),
            "a<span style=\"text-decoration:underline\">&lt;</span>b"
        );
    }

    #[test]
    fn picker_choices() {
        assert_eq!(StylePicker::FOREGROUND_CHOICES.len(), 7);
        assert_eq!(
            StylePicker::FOREGROUND_CHOICES.last(),
            Some(&StylePicker::DEFAULT_FOREGROUND)
        );
        assert_eq!(StylePicker::BACKGROUND_CHOICES.len(), 8);
        assert!(StylePicker::default().to_patch().is_empty());
    }
}
