//! Styling text with [ANSI SGR escapes][SGR] for fenced `ansi` code blocks in chat messages.
//!
//! # What it does
//!
//! This crate allows to:
//!
//! - Mark ranges of text with colors and effects (bold, italic, underline), either
//!   on the string level with [`apply_codes()`], or on a [`StyledText`] document.
//! - Parse strings with embedded escapes into [`StyledRun`]s, leniently: unknown codes are ignored
//!   and unterminated escape sequences are kept as text.
//! - Produce a fenced `ansi` code block that a chat client renders with colors (see [`fence`]).
//! - Preview styled text as HTML ([`render_html()`]) or in a terminal ([`write_runs()`]).
//!
//! [`Session`] ties everything together in the way a text editor UI would use it:
//! the user types text, selects a range, picks colors and applies them.
//!
//! # Supported codes
//!
//! | Code | Effect |
//! |:-----|:-------|
//! | `0` | Reset all styles |
//! | `1` | Bold |
//! | `3` | Italic |
//! | `4` | Underline |
//! | `30`–`37` | Text color: black, red, green, yellow, blue, magenta (pink), cyan, white |
//! | `40`–`47` | Background color: black, red, green, yellow, blue, magenta (purple), cyan, white |
//!
//! A later color of the same layer replaces the earlier one; effects accumulate until
//! a reset.
//!
//! # Design decisions
//!
//! - **Runs as the source of truth.** A [`StyledText`] stores styled runs rather than a string
//!   with escapes, so that editing and restyling do not need to re-synchronize two buffers.
//!   Strings with escapes are produced only on output.
//! - **Merging styles.** Applying a style to a range that is already styled merges the styles
//!   (e.g., bold over red text produces bold red text).
//! - **Char positions.** Selections are measured in chars, not bytes, and are clamped
//!   to the text bounds.
//!
//! # Crate features
//!
//! ## `serde`
//!
//! *(Off by default)*
//!
//! Derives `serde` traits for [`HtmlOptions`] and [`Palette`] (so that they can be read from
//! config files), and `Serialize` for [`StyledRun`] and related types.
//!
//! ## `tracing`
//!
//! *(Off by default)*
//!
//! Emits [tracing] spans and events for [`Session`] operations and parsing.
//!
//! # Examples
//!
//! ```
//! use ansi_block::{fence, Color, Effect, Session};
//!
//! let mut session = Session::new();
//! session.set_raw_text("Warning: disk is full");
//! session.record_selection(0, 8);
//! session.picker_mut().foreground = Color::Yellow;
//! assert!(session.apply_pending_style());
//! assert!(session.apply_effect(Effect::Bold));
//!
//! let output = session.output();
//! assert_eq!(
//!     fence::unwrap(&output),
//!     Some("\u{1b}[33;1mWarning:\u{1b}[0m disk is full")
//! );
//! ```
//!
//! [SGR]: https://en.wikipedia.org/wiki/ANSI_escape_code#SGR
//! [tracing]: https://docs.rs/tracing/

// Documentation settings.
#![doc(html_root_url = "https://docs.rs/ansi-block/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Linter settings.
#![warn(missing_debug_implementations, missing_docs, bare_trait_objects)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

pub use self::{
    apply::{apply_codes, Selection},
    document::StyledText,
    html::{ansi_to_html, render_html, HtmlOptions},
    palette::{NamedPalette, NamedPaletteParseError, Palette, TermColors},
    session::{Session, StylePicker},
    sgr::{Color, ColorParseError, Effect, Layer, SgrCode, SgrCodeError, RESET_SEQUENCE},
    style::{EffectSet, StylePatch, StyleSet, StyledRun},
    term::write_runs,
    utils::{RgbColor, RgbColorParseError},
};

mod ansi_parser;
mod apply;
mod document;
pub mod fence;
mod html;
mod palette;
mod session;
mod sgr;
mod style;
mod term;
mod utils;

/// Parses a string with embedded SGR escapes into styled runs.
///
/// The runs cover the entire text with escapes removed; adjacent runs have different styles.
/// Unknown codes are ignored, and an escape sequence without the terminating `m` is treated
/// as text, together with everything after it. An input without text produces a single
/// empty unstyled run.
///
/// # Examples
///
/// ```
/// use ansi_block::{parse_ansi, Color, StyleSet, StyledRun};
///
/// let runs = parse_ansi("\u{1b}[31m\u{1b}[32mx\u{1b}[0m");
/// let green = StyleSet::default().with_foreground(Color::Green);
/// assert_eq!(runs, [StyledRun::new("x", green)]);
/// ```
pub fn parse_ansi(text: &str) -> Vec<StyledRun> {
    ansi_parser::AnsiParser::parse(text)
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
