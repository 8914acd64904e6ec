//! Rendering styled runs as HTML markup.

use crate::{
    ansi_parser::AnsiParser,
    palette::Palette,
    sgr::Color,
    style::{StyleSet, StyledRun},
    utils::escape_html,
};


/// Configurable options of the HTML rendering.
///
/// # Examples
///
/// ```
/// use ansi_block::{render_html, HtmlOptions, NamedPalette, StyledText};
///
/// let text = StyledText::from_ansi("\u{1b}[31mhi\u{1b}[0m there");
/// let options = HtmlOptions::default().with_palette(NamedPalette::Xterm.into());
/// let html = render_html(text.runs(), &options);
/// assert_eq!(html, r#"<span style="color:#cd0000">hi</span> there"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HtmlOptions {
    /// Palette of terminal colors. The default value of [`Palette`] is used by default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub palette: Palette,
}

impl HtmlOptions {
    /// Sets the color palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// HTML `<span>` containing styling info.
#[derive(Debug, Default)]
struct StyledSpan {
    styles: Vec<String>,
}

impl StyledSpan {
    fn new(style: &StyleSet, palette: &Palette) -> Self {
        let mut this = Self::default();
        if let Some(color) = style.foreground {
            this.push_color("color", color, palette);
        }
        if let Some(color) = style.background {
            this.push_color("background", color, palette);
        }
        if style.bold {
            this.styles.push("font-weight:bold".to_owned());
        }
        if style.italic {
            this.styles.push("font-style:italic".to_owned());
        }
        if style.underline {
            this.styles.push("text-decoration:underline".to_owned());
        }
        this
    }

    fn push_color(&mut self, property: &str, color: Color, palette: &Palette) {
        let value = palette.get(color);
        self.styles.push(format!("{property}:{value:x}"));
    }

    fn write_tag(&self, output: &mut String) {
        output.push_str("<span style=\"");
        output.push_str(&self.styles.join(";"));
        output.push_str("\">");
    }
}

/// Renders styled runs as HTML.
///
/// Unstyled runs are output as escaped text; styled ones are wrapped in `<span>`s with inline
/// styles, declared in the following order: text color, background color, bold, italic,
/// underline.
pub fn render_html(runs: &[StyledRun], options: &HtmlOptions) -> String {
    let mut output = String::new();
    for run in runs {
        if run.style.is_none() {
            escape_html(&mut output, &run.text);
        } else {
            StyledSpan::new(&run.style, &options.palette).write_tag(&mut output);
            escape_html(&mut output, &run.text);
            output.push_str("</span>");
        }
    }
    output
}

/// Parses a string with SGR escapes and renders it as HTML with default [`HtmlOptions`].
///
/// # Examples
///
/// ```
/// use ansi_block::ansi_to_html;
///
/// let html = ansi_to_html("\u{1b}[1;44m<b>\u{1b}[0m!");
/// assert_eq!(
///     html,
///     r#"<span style="background:#5555ff;font-weight:bold">&lt;b&gt;</span>!"#
/// );
/// ```
pub fn ansi_to_html(text: &str) -> String {
    render_html(&AnsiParser::parse(text), &HtmlOptions::default())
}
