//! Tier gating and presentation hints derived from it.
//!
//! Everything here is a pure lookup: no I/O, no state.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Category, Tier},
    foundation::core::Color,
};

/// Snapshot of the tiers the current user has unlocked, as reported by the payment backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessState {
    pub free: bool,
    pub pro: bool,
    pub premium: bool,
}

impl AccessState {
    pub const FREE_ONLY: Self = Self {
        free: true,
        pro: false,
        premium: false,
    };

    pub const ALL: Self = Self {
        free: true,
        pro: true,
        premium: true,
    };

    /// Highest tier this snapshot unlocks.
    pub fn highest(self) -> Tier {
        if self.premium {
            Tier::Premium
        } else if self.pro {
            Tier::Pro
        } else {
            Tier::Free
        }
    }
}

/// `free ⊂ pro ⊂ premium`: premium access implies pro, free is always open.
pub fn is_unlocked(tier: Tier, access: &AccessState) -> bool {
    match tier {
        Tier::Free => true,
        Tier::Pro => access.pro || access.premium,
        Tier::Premium => access.premium,
    }
}

/// Usage contexts a category is suggested for. UI hinting only.
pub fn recommended_contexts(category: Category) -> &'static [&'static str] {
    match category {
        Category::Minimal => &["linkedin", "resume", "portfolio"],
        Category::Playful => &["tiktok", "instagram", "personal"],
        Category::Bold => &["twitter", "twitch", "youtube"],
        Category::Luxury => &["business", "store", "fashion"],
        Category::Aesthetic => &["instagram", "pinterest", "blog"],
    }
}

/// String-keyed variant of [`recommended_contexts`]; unknown categories get `["web"]`.
pub fn recommended_contexts_for(category: &str) -> &'static [&'static str] {
    match category.parse::<Category>() {
        Ok(c) => recommended_contexts(c),
        Err(_) => &["web"],
    }
}

/// A theme is dark when its text color is light (YIQ >= 128).
pub fn is_dark_theme(text_color: Color) -> bool {
    text_color.yiq() >= 128.0
}

/// Black on light backgrounds, white on dark ones.
pub fn contrasting_text_color(background: Color) -> Color {
    if background.yiq() >= 128.0 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/access/mod.rs"]
mod tests;
