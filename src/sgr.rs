//! Table of supported SGR (Select Graphic Rendition) codes.

use std::{error::Error as StdError, fmt, str::FromStr};

pub(crate) const ESC: char = '\u{1b}';
pub(crate) const CSI: char = '[';
pub(crate) const SGR_FINAL: char = 'm';

/// Escape sequence resetting all styles.
pub const RESET_SEQUENCE: &str = "\u{1b}[0m";

/// One of 8 base terminal colors.
///
/// The color index (0 for black, 1 for red, etc.) is added to 30 to obtain the foreground
/// SGR code, and to 40 to obtain the background one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    /// Black color.
    Black,
    /// Red color.
    Red,
    /// Green color.
    Green,
    /// Yellow color.
    Yellow,
    /// Blue color.
    Blue,
    /// Magenta color. Labeled as "pink" for text and "purple" for backgrounds.
    Magenta,
    /// Cyan color.
    Cyan,
    /// White color.
    White,
}

impl Color {
    /// All colors in the order of their indices.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Returns the 0-based index of this color.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Gets a color by its 0-based index.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the lowercase name of this color.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Returns a human-readable label of this color as displayed in color pickers.
    /// Magenta is called differently depending on the layer.
    pub const fn label(self, layer: Layer) -> &'static str {
        match (self, layer) {
            (Self::Black, _) => "Black",
            (Self::Red, _) => "Red",
            (Self::Green, _) => "Green",
            (Self::Yellow, _) => "Yellow",
            (Self::Blue, _) => "Blue",
            (Self::Magenta, Layer::Foreground) => "Pink",
            (Self::Magenta, Layer::Background) => "Purple",
            (Self::Cyan, _) => "Cyan",
            (Self::White, _) => "White",
        }
    }

    /// Returns the SGR code setting this color on the specified layer.
    pub const fn code(self, layer: Layer) -> u8 {
        match layer {
            Layer::Foreground => 30 + self.index(),
            Layer::Background => 40 + self.index(),
        }
    }

    pub(crate) fn to_termcolor(self) -> termcolor::Color {
        match self {
            Self::Black => termcolor::Color::Black,
            Self::Red => termcolor::Color::Red,
            Self::Green => termcolor::Color::Green,
            Self::Yellow => termcolor::Color::Yellow,
            Self::Blue => termcolor::Color::Blue,
            Self::Magenta => termcolor::Color::Magenta,
            Self::Cyan => termcolor::Color::Cyan,
            Self::White => termcolor::Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Parses a color from its name (case-insensitive). Besides [`Color::name()`]s,
/// `pink` and `purple` are accepted as aliases for [`Color::Magenta`].
impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.trim().to_ascii_lowercase();
        match lowercase.as_str() {
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" | "pink" | "purple" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            _ => Err(ColorParseError(())),
        }
    }
}

/// Errors that can occur when [parsing](FromStr) a [`Color`] from a string.
#[derive(Debug)]
pub struct ColorParseError(());

impl fmt::Display for ColorParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(
            "Invalid color name; allowed names are `black`, `red`, `green`, `yellow`, `blue`, \
             `magenta` (`pink`, `purple`), `cyan` and `white`",
        )
    }
}

impl StdError for ColorParseError {}

/// Layer a [`Color`] is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Text color.
    Foreground,
    /// Background color.
    Background,
}

/// Text effect toggled by a single SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effect {
    /// Bold text (code 1).
    Bold,
    /// Italic text (code 3).
    Italic,
    /// Underlined text (code 4).
    Underline,
}

impl Effect {
    /// All effects in the order their codes are emitted.
    pub const ALL: [Self; 3] = [Self::Bold, Self::Italic, Self::Underline];

    /// Returns the SGR code of this effect.
    pub const fn code(self) -> u8 {
        match self {
            Self::Bold => 1,
            Self::Italic => 3,
            Self::Underline => 4,
        }
    }
}

/// Supported SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SgrCode {
    /// Resets all styles (code 0).
    Reset,
    /// Switches on a text effect.
    Effect(Effect),
    /// Sets the text color (codes 30–37).
    Foreground(Color),
    /// Sets the background color (codes 40–47).
    Background(Color),
}

impl SgrCode {
    /// Bold text.
    pub const BOLD: Self = Self::Effect(Effect::Bold);
    /// Italic text.
    pub const ITALIC: Self = Self::Effect(Effect::Italic);
    /// Underlined text.
    pub const UNDERLINE: Self = Self::Effect(Effect::Underline);

    /// Returns the numeric value of this code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Reset => 0,
            Self::Effect(effect) => effect.code(),
            Self::Foreground(color) => color.code(Layer::Foreground),
            Self::Background(color) => color.code(Layer::Background),
        }
    }

    /// Looks up a code by its numeric value. Returns `None` for unsupported codes.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Reset,
            1 => Self::BOLD,
            3 => Self::ITALIC,
            4 => Self::UNDERLINE,
            30..=37 => match Color::from_index(code - 30) {
                Some(color) => Self::Foreground(color),
                None => return None,
            },
            40..=47 => match Color::from_index(code - 40) {
                Some(color) => Self::Background(color),
                None => return None,
            },
            _ => return None,
        })
    }

    /// Parses a single parameter of an SGR escape body. Only the exact decimal spelling
    /// of a supported code is recognized; empty and zero-padded params are not.
    pub(crate) fn from_param(param: &str) -> Option<Self> {
        let is_canonical = match param.as_bytes() {
            [] | [b'0', _, ..] => false,
            bytes => bytes.iter().all(u8::is_ascii_digit),
        };
        if !is_canonical {
            return None;
        }
        param.parse::<u8>().ok().and_then(Self::from_code)
    }
}

impl fmt::Display for SgrCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.code())
    }
}

impl TryFrom<u8> for SgrCode {
    type Error = SgrCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(SgrCodeError(code))
    }
}

/// Error returned when converting an unsupported numeric code into an [`SgrCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrCodeError(pub u8);

impl fmt::Display for SgrCodeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unsupported SGR code {}; expected 0, 1, 3, 4, 30–37 or 40–47",
            self.0
        )
    }
}

impl StdError for SgrCodeError {}

/// Writes an opening `ESC[…m` sequence with the codes joined by `;`.
pub(crate) fn write_sequence(output: &mut String, codes: impl IntoIterator<Item = SgrCode>) {
    use fmt::Write as _;

    output.push(ESC);
    output.push(CSI);
    for (i, code) in codes.into_iter().enumerate() {
        if i > 0 {
            output.push(';');
        }
        write!(output, "{code}").unwrap();
        // ^-- `unwrap` is safe; writing to a string never fails.
    }
    output.push(SGR_FINAL);
}
