use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::DEFAULT_THEME_ID,
    foundation::{
        core::Color,
        error::{WhisperError, WhisperResult},
    },
};

/// Which header element tops the card. Exactly one is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    /// "WHISPER BOX" wordmark in a translucent pill.
    #[default]
    BrandedBadge,
    /// The theme's display name, spaced out.
    ThemeName,
    /// A circled question mark icon.
    QuestionMark,
    /// A short rounded bar.
    MinimalLine,
    /// The theme's badge glyph.
    DefaultBadge,
}

impl HeaderStyle {
    pub const ALL: [HeaderStyle; 5] = [
        HeaderStyle::BrandedBadge,
        HeaderStyle::ThemeName,
        HeaderStyle::QuestionMark,
        HeaderStyle::MinimalLine,
        HeaderStyle::DefaultBadge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HeaderStyle::BrandedBadge => "branded-badge",
            HeaderStyle::ThemeName => "theme-name",
            HeaderStyle::QuestionMark => "question-mark",
            HeaderStyle::MinimalLine => "minimal-line",
            HeaderStyle::DefaultBadge => "default-badge",
        }
    }
}

impl FromStr for HeaderStyle {
    type Err = WhisperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderStyle::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| WhisperError::validation(format!("unknown header style \"{s}\"")))
    }
}

impl fmt::Display for HeaderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caption typography.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Heavy italic uppercase sans with tight tracking.
    #[default]
    Modern,
    /// Serif italic.
    Serif,
    /// Handwriting face, set larger.
    Hand,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Modern, FontStyle::Serif, FontStyle::Hand];

    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Modern => "modern",
            FontStyle::Serif => "serif",
            FontStyle::Hand => "hand",
        }
    }

    /// CSS-style family list, most specific first, generic last.
    pub fn families(self) -> &'static [&'static str] {
        match self {
            FontStyle::Modern => &["Inter", "Helvetica Neue", "Arial", "sans-serif"],
            FontStyle::Serif => &["Georgia", "Times New Roman", "DejaVu Serif", "serif"],
            FontStyle::Hand => &["Caveat", "Comic Neue", "Comic Sans MS", "cursive"],
        }
    }

    pub fn weight(self) -> u16 {
        match self {
            FontStyle::Modern => 900,
            FontStyle::Serif | FontStyle::Hand => 400,
        }
    }

    pub fn italic(self) -> bool {
        matches!(self, FontStyle::Modern | FontStyle::Serif)
    }

    pub fn uppercase(self) -> bool {
        matches!(self, FontStyle::Modern)
    }

    /// Tracking in em.
    pub fn letter_spacing_em(self) -> f64 {
        match self {
            FontStyle::Modern => -0.025,
            FontStyle::Serif | FontStyle::Hand => 0.0,
        }
    }

    /// Mean glyph advance in em, used when no face is available to measure with.
    pub(crate) fn mean_advance_em(self) -> f64 {
        match self {
            FontStyle::Modern => 0.66,
            FontStyle::Serif => 0.5,
            FontStyle::Hand => 0.42,
        }
    }
}

impl FromStr for FontStyle {
    type Err = WhisperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontStyle::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| WhisperError::validation(format!("unknown font style \"{s}\"")))
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caption colors offered in the share dialog. Any other absolute color is also accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColorPreset {
    White,
    Black,
    Muted,
}

impl TextColorPreset {
    pub const ALL: [TextColorPreset; 3] = [
        TextColorPreset::White,
        TextColorPreset::Black,
        TextColorPreset::Muted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextColorPreset::White => "White",
            TextColorPreset::Black => "Black",
            TextColorPreset::Muted => "Muted",
        }
    }

    pub fn color(self) -> Color {
        match self {
            TextColorPreset::White => Color::WHITE,
            TextColorPreset::Black => Color::BLACK,
            TextColorPreset::Muted => Color::hex(0xCBD5E1),
        }
    }
}

/// Per-session card personalization. Created when the share surface opens, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardPresentation {
    pub selected_theme_key: String,
    pub header_style: HeaderStyle,
    pub font_style: FontStyle,
    pub text_color: Color,
}

impl Default for CardPresentation {
    fn default() -> Self {
        Self {
            selected_theme_key: DEFAULT_THEME_ID.to_owned(),
            header_style: HeaderStyle::default(),
            font_style: FontStyle::default(),
            text_color: Color::WHITE,
        }
    }
}

impl CardPresentation {
    /// Builder-style theme switch; the key is checked against the catalog.
    pub fn with_theme(mut self, key: &str) -> WhisperResult<Self> {
        crate::catalog::get_theme(key)?;
        self.selected_theme_key = key.to_owned();
        Ok(self)
    }

    pub fn with_header(mut self, header_style: HeaderStyle) -> Self {
        self.header_style = header_style;
        self
    }

    pub fn with_font(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    pub fn with_text_color(mut self, text_color: Color) -> Self {
        self.text_color = text_color;
        self
    }
}
