//! Misc utils.

use std::{error::Error as StdError, fmt, num::ParseIntError, str::FromStr};

/// RGB color with 8-bit channels.
///
/// A color [can be parsed](FromStr) from a hex string like `#fed` or `#de382b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl fmt::LowerHex for RgbColor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Errors that can occur when [parsing](FromStr) an [`RgbColor`] from a string.
#[derive(Debug)]
#[non_exhaustive]
pub enum RgbColorParseError {
    /// Color string contains non-ASCII chars.
    NotAscii,
    /// The color does not have a `#` prefix.
    NoHashPrefix,
    /// The color has incorrect string length (not 1 or 2 chars per color channel).
    /// The byte length of the string (including 1 char for the `#` prefix)
    /// is provided within this variant.
    IncorrectLen(usize),
    /// Error parsing color channel value.
    IncorrectDigit(ParseIntError),
}

impl fmt::Display for RgbColorParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAscii => formatter.write_str("color string contains non-ASCII chars"),
            Self::NoHashPrefix => formatter.write_str("missing '#' prefix"),
            Self::IncorrectLen(len) => write!(
                formatter,
                "unexpected byte length {len} of color string, expected 4 or 7"
            ),
            Self::IncorrectDigit(err) => write!(formatter, "error parsing hex digit: {err}"),
        }
    }
}

impl StdError for RgbColorParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::IncorrectDigit(err) => Some(err),
            _ => None,
        }
    }
}

impl FromStr for RgbColor {
    type Err = RgbColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.as_bytes()[0] != b'#' {
            return Err(RgbColorParseError::NoHashPrefix);
        }
        if !s.is_ascii() {
            return Err(RgbColorParseError::NotAscii);
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(RgbColorParseError::IncorrectDigit)
        };
        match s.len() {
            4 => Ok(Self(channel(1..2)? * 17, channel(2..3)? * 17, channel(3..4)? * 17)),
            7 => Ok(Self(channel(1..3)?, channel(3..5)?, channel(5..7)?)),
            len => Err(RgbColorParseError::IncorrectLen(len)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::RgbColor;

    impl Serialize for RgbColor {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&format!("{self:x}"))
        }
    }

    impl<'de> Deserialize<'de> for RgbColor {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            #[derive(Debug)]
            struct ColorVisitor;

            impl de::Visitor<'_> for ColorVisitor {
                type Value = RgbColor;

                fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str("hex color, such as #fed or #a757ff")
                }

                fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                    value.parse().map_err(E::custom)
                }
            }

            deserializer.deserialize_str(ColorVisitor)
        }
    }
}

/// Escapes chars significant in HTML markup.
pub(crate) fn escape_html(output: &mut String, text: &str) {
    let mut last_escape = 0;
    for (i, ch) in text.char_indices() {
        let escaped = match ch {
            '>' => "&gt;",
            '<' => "&lt;",
            '&' => "&amp;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        output.push_str(&text[last_escape..i]);
        output.push_str(escaped);
        last_escape = i + ch.len_utf8();
    }
    output.push_str(&text[last_escape..]);
}
