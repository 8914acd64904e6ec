//! `StyleSet` and related types.

use termcolor::ColorSpec;

use crate::sgr::{Color, Effect, SgrCode};

/// Set of styles active at a certain point of a styled string.
///
/// At most one foreground and one background color can be active at a time;
/// setting a color replaces the previous one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(clippy::struct_excessive_bools)] // makes serialization simpler
pub struct StyleSet {
    /// Bold text.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "StyleSet::is_false"))]
    pub bold: bool,
    /// Italic text.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "StyleSet::is_false"))]
    pub italic: bool,
    /// Underlined text.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "StyleSet::is_false"))]
    pub underline: bool,
    /// Text color.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub foreground: Option<Color>,
    /// Background color.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub background: Option<Color>,
}

impl StyleSet {
    /// Empty style set.
    pub const NONE: Self = Self {
        bold: false,
        italic: false,
        underline: false,
        foreground: None,
        background: None,
    };

    #[cfg(feature = "serde")]
    #[allow(clippy::trivially_copy_pass_by_ref)] // required by `serde`
    fn is_false(&val: &bool) -> bool {
        !val
    }

    /// Checks whether this set has no active styles.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Sets the text color.
    #[must_use]
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Switches on the specified effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.set_effect(effect, true);
        self
    }

    /// Checks whether the specified effect is on.
    pub fn has_effect(&self, effect: Effect) -> bool {
        match effect {
            Effect::Bold => self.bold,
            Effect::Italic => self.italic,
            Effect::Underline => self.underline,
        }
    }

    pub(crate) fn set_effect(&mut self, effect: Effect, value: bool) {
        match effect {
            Effect::Bold => self.bold = value,
            Effect::Italic => self.italic = value,
            Effect::Underline => self.underline = value,
        }
    }

    /// Updates this set according to a single SGR code.
    pub fn update(&mut self, code: SgrCode) {
        match code {
            SgrCode::Reset => *self = Self::NONE,
            SgrCode::Effect(effect) => self.set_effect(effect, true),
            SgrCode::Foreground(color) => self.foreground = Some(color),
            SgrCode::Background(color) => self.background = Some(color),
        }
    }

    /// Returns SGR codes that set this style from scratch: foreground, background,
    /// then effects in the order of their codes.
    pub fn codes(&self) -> Vec<SgrCode> {
        let colors = [
            self.foreground.map(SgrCode::Foreground),
            self.background.map(SgrCode::Background),
        ];
        let effects = Effect::ALL
            .into_iter()
            .filter(|&effect| self.has_effect(effect))
            .map(SgrCode::Effect);
        colors.into_iter().flatten().chain(effects).collect()
    }

    pub(crate) fn to_color_spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(self.bold)
            .set_italic(self.italic)
            .set_underline(self.underline)
            .set_fg(self.foreground.map(Color::to_termcolor))
            .set_bg(self.background.map(Color::to_termcolor));
        spec
    }
}

/// Change to apply to the [`StyleSet`] of a text range. Colors override the existing ones,
/// effects are added to the existing ones.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StylePatch {
    /// Text color to set.
    pub foreground: Option<Color>,
    /// Background color to set.
    pub background: Option<Color>,
    /// Effects to switch on.
    pub effects: EffectSet,
}

impl StylePatch {
    /// Creates a patch switching on a single effect.
    pub fn effect(effect: Effect) -> Self {
        Self {
            effects: EffectSet::default().with(effect),
            ..Self::default()
        }
    }

    /// Checks whether this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.effects.is_empty()
    }

    /// Returns SGR codes corresponding to this patch, in the order foreground, background,
    /// bold, italic, underline.
    pub fn codes(&self) -> Vec<SgrCode> {
        let style = StyleSet::NONE.patched(self);
        style.codes()
    }
}

impl StyleSet {
    /// Returns a copy of this set with the `patch` merged in.
    #[must_use]
    pub fn patched(mut self, patch: &StylePatch) -> Self {
        if let Some(color) = patch.foreground {
            self.foreground = Some(color);
        }
        if let Some(color) = patch.background {
            self.background = Some(color);
        }
        for effect in Effect::ALL {
            if patch.effects.contains(effect) {
                self.set_effect(effect, true);
            }
        }
        self
    }
}

/// Compact set of [`Effect`]s.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectSet(u8);

impl EffectSet {
    const fn bit(effect: Effect) -> u8 {
        1 << effect.code()
    }

    /// Adds an effect to this set.
    #[must_use]
    pub const fn with(self, effect: Effect) -> Self {
        Self(self.0 | Self::bit(effect))
    }

    /// Checks whether the set contains the specified effect.
    pub const fn contains(self, effect: Effect) -> bool {
        self.0 & Self::bit(effect) != 0
    }

    /// Checks whether this set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Effect> for EffectSet {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

/// Contiguous piece of text with a uniform [`StyleSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StyledRun {
    /// Unstyled text of the run.
    pub text: String,
    /// Style applied to the text.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub style: StyleSet,
}

impl StyledRun {
    /// Creates a run with the specified text and style.
    pub fn new(text: impl Into<String>, style: StyleSet) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Creates an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleSet::NONE)
    }
}
