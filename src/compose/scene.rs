use serde::{Deserialize, Serialize};

use crate::{
    catalog::Gradient,
    compose::presentation::{FontStyle, HeaderStyle},
    foundation::{
        core::{Color, Rect},
        math::Fnv1a64,
    },
    patterns::Drawing,
};

/// Target a scene is composed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fidelity {
    /// Small interactive card shown on screen.
    Preview,
    /// Fixed 1080x1080 surface, only ever rasterized.
    Export,
}

impl Fidelity {
    /// Side of the square canvas in logical units.
    pub fn canvas_size(self) -> f64 {
        match self {
            Fidelity::Preview => 360.0,
            Fidelity::Export => 1080.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    Normal,
    Overlay,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatternLayer {
    /// Opacity of the containing layer, on top of the drawing's own opacity.
    pub opacity: f64,
    pub blend: BlendMode,
    pub drawing: Drawing,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Shadow {
    pub dx: f64,
    pub dy: f64,
    pub blur: f64,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Border {
    pub color: Color,
    pub width: f64,
}

/// Rounded rectangle behind header and footer text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pill {
    pub frame: Rect,
    pub radius: f64,
    pub fill: Color,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
}

/// One styled single-line text run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub font_size: f64,
    pub weight: u16,
    pub letter_spacing_em: f64,
    pub color: Color,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "style")]
pub enum Header {
    BrandedBadge {
        pill: Pill,
        label: TextRun,
    },
    ThemeName {
        frame: Rect,
        label: TextRun,
    },
    QuestionMark {
        frame: Rect,
        color: Color,
        opacity: f64,
    },
    MinimalLine {
        pill: Pill,
    },
    DefaultBadge {
        frame: Rect,
        glyph: TextRun,
        shadow: Shadow,
    },
}

impl Header {
    pub fn style(&self) -> HeaderStyle {
        match self {
            Header::BrandedBadge { .. } => HeaderStyle::BrandedBadge,
            Header::ThemeName { .. } => HeaderStyle::ThemeName,
            Header::QuestionMark { .. } => HeaderStyle::QuestionMark,
            Header::MinimalLine { .. } => HeaderStyle::MinimalLine,
            Header::DefaultBadge { .. } => HeaderStyle::DefaultBadge,
        }
    }

    pub fn frame(&self) -> Rect {
        match self {
            Header::BrandedBadge { pill, .. } | Header::MinimalLine { pill } => pill.frame,
            Header::ThemeName { frame, .. }
            | Header::QuestionMark { frame, .. }
            | Header::DefaultBadge { frame, .. } => *frame,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Caption {
    /// The message exactly as the user wrote it.
    pub text: String,
    pub font: FontStyle,
    pub families: &'static [&'static str],
    pub weight: u16,
    pub italic: bool,
    pub uppercase: bool,
    pub letter_spacing_em: f64,
    /// Nominal size; the renderer may shrink it so every line fits `frame`.
    pub font_size: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    pub color: Color,
    pub shadow: Option<Shadow>,
    /// Box the wrapped caption must fit in, centered.
    pub frame: Rect,
}

impl Caption {
    /// Text as drawn: quoted, uppercased for the modern face.
    pub fn display_text(&self) -> String {
        let body = if self.uppercase {
            self.text.to_uppercase()
        } else {
            self.text.clone()
        };
        format!("\"{body}\"")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Footer {
    pub pill: Pill,
    pub lead: TextRun,
    pub link: TextRun,
    /// Space between `lead` and `link`.
    pub gap: f64,
}

/// The triple a scene was composed from.
///
/// Preview and export scenes built from the same inputs carry equal sources, which is what makes
/// "what you preview is what you export" checkable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSource {
    pub theme_id: &'static str,
    pub header_style: HeaderStyle,
    pub font_style: FontStyle,
    pub text_color: Color,
    pub caption: String,
}

impl CardSource {
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_str(self.theme_id);
        h.write_str(self.header_style.as_str());
        h.write_str(self.font_style.as_str());
        h.write_bytes(&[
            self.text_color.r,
            self.text_color.g,
            self.text_color.b,
            self.text_color.a,
        ]);
        h.write_str(&self.caption);
        h.finish()
    }
}

/// Layered, unrasterized description of a themed card.
///
/// Layers paint in field order: background, pattern, header, caption, footer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub fidelity: Fidelity,
    pub size: f64,
    pub corner_radius: f64,
    pub padding: f64,
    pub background: Gradient,
    pub pattern: PatternLayer,
    pub header: Header,
    pub caption: Caption,
    pub footer: Footer,
    pub source: CardSource,
}

impl Scene {
    pub fn is_export(&self) -> bool {
        self.fidelity == Fidelity::Export
    }
}
