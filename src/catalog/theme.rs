use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::{
        core::Color,
        error::{WhisperError, WhisperResult},
    },
    patterns::PatternId,
};

/// Visual family of a theme; drives the recommended-usage hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Aesthetic,
    Luxury,
    Playful,
    Minimal,
    Bold,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Aesthetic,
        Category::Luxury,
        Category::Playful,
        Category::Minimal,
        Category::Bold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Aesthetic => "aesthetic",
            Category::Luxury => "luxury",
            Category::Playful => "playful",
            Category::Minimal => "minimal",
            Category::Bold => "bold",
        }
    }
}

impl FromStr for Category {
    type Err = WhisperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| WhisperError::validation(format!("unknown category \"{s}\"")))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access tier. Ordered: `Free < Pro < Premium`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Pro,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Pro, Tier::Premium];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Pro => "pro",
            Tier::Premium => "premium",
        }
    }
}

impl FromStr for Tier {
    type Err = WhisperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| WhisperError::validation(format!("unknown tier \"{s}\"")))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    /// Position along the gradient line, in percent.
    pub percent: f64,
}

impl GradientStop {
    pub const fn new(color: Color, percent: f64) -> Self {
        Self { color, percent }
    }
}

/// Linear gradient: an angle in CSS degrees plus ordered color stops.
///
/// Serialized as the CSS descriptor, e.g. `linear-gradient(135deg, #667EEA 0%, #764BA2 100%)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub angle_deg: f64,
    pub stops: Cow<'static, [GradientStop]>,
}

impl Gradient {
    pub const fn new(angle_deg: f64, stops: &'static [GradientStop]) -> Self {
        Self {
            angle_deg,
            stops: Cow::Borrowed(stops),
        }
    }

    pub fn to_css(&self) -> String {
        let mut out = format!("linear-gradient({}deg", self.angle_deg);
        for stop in self.stops.iter() {
            out.push_str(&format!(", {} {}%", stop.color.to_hex(), stop.percent));
        }
        out.push(')');
        out
    }

    /// Parses the descriptor produced by [`Gradient::to_css`]. Hex colors of any case are accepted.
    pub fn parse_css(css: &str) -> WhisperResult<Self> {
        let invalid = |why: &str| WhisperError::validation(format!("gradient \"{css}\": {why}"));

        let body = css
            .trim()
            .strip_prefix("linear-gradient(")
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| invalid("expected linear-gradient(...)"))?;

        let mut parts = body.split(',').map(str::trim);
        let angle_deg = parts
            .next()
            .and_then(|a| a.strip_suffix("deg"))
            .and_then(|a| a.trim().parse::<f64>().ok())
            .ok_or_else(|| invalid("expected an angle in deg"))?;

        let mut stops = Vec::new();
        for part in parts {
            let (color, pos) = part
                .split_once(char::is_whitespace)
                .ok_or_else(|| invalid("stop must be \"<color> <percent>%\""))?;
            let percent = pos
                .trim()
                .strip_suffix('%')
                .and_then(|p| p.parse::<f64>().ok())
                .ok_or_else(|| invalid("stop position must be a percentage"))?;
            stops.push(GradientStop::new(Color::parse_hex(color)?, percent));
        }
        if stops.len() < 2 {
            return Err(invalid("need at least two stops"));
        }

        Ok(Self {
            angle_deg,
            stops: Cow::Owned(stops),
        })
    }
}

impl Serialize for Gradient {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Gradient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_css(&s).map_err(serde::de::Error::custom)
    }
}

/// Immutable catalog record.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tier: Tier,
    pub gradient: Gradient,
    pub text_color: Color,
    pub accent_color: Color,
    pub pattern: PatternId,
    pub badge: &'static str,
}

/// Owned counterpart of [`Theme`] for reading serialized catalog records back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub tier: Tier,
    pub gradient: Gradient,
    pub text_color: Color,
    pub accent_color: Color,
    pub pattern: PatternId,
    pub badge: String,
}

impl From<&Theme> for ThemeRecord {
    fn from(t: &Theme) -> Self {
        Self {
            id: t.id.to_owned(),
            name: t.name.to_owned(),
            description: t.description.to_owned(),
            category: t.category,
            tier: t.tier,
            gradient: t.gradient.clone(),
            text_color: t.text_color,
            accent_color: t.accent_color,
            pattern: t.pattern,
            badge: t.badge.to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/theme.rs"]
mod tests;
