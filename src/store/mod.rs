//! Theme browsing: filtered, lock-annotated listings, a preview slot and optimistic selection.

use std::future::Future;

use serde::Serialize;

use crate::{
    access::{AccessState, contrasting_text_color, is_dark_theme, is_unlocked, recommended_contexts},
    catalog::{Category, Theme, Tier, get_theme, list_themes},
    compose::{CardPresentation, Fidelity, Scene, compose},
    export::platform::Notice,
    foundation::{
        core::Color,
        error::{WhisperError, WhisperResult},
    },
};

/// Caption shown on store preview cards.
pub const SAMPLE_CAPTION: &str = "I've never told anyone this, but I secretly admire you";

pub const THEME_UPDATED: &str = "Theme updated!";

/// Browse criteria, combined with AND. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BrowseFilter {
    /// Case-insensitive substring of the theme name.
    pub query: String,
    pub category: Option<Category>,
    pub tier: Option<Tier>,
}

impl BrowseFilter {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_none() && self.tier.is_none()
    }

    pub fn matches(&self, theme: &Theme) -> bool {
        let query = self.query.to_lowercase();
        theme.name.to_lowercase().contains(&query)
            && self.category.is_none_or(|c| c == theme.category)
            && self.tier.is_none_or(|t| t == theme.tier)
    }
}

/// A catalog entry as the store shows it to one user.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeListing {
    pub theme: &'static Theme,
    pub locked: bool,
    pub recommended_for: &'static [&'static str],
    /// Legible text color on the theme's accent color.
    pub badge_text_color: Color,
    pub is_dark: bool,
}

impl ThemeListing {
    pub fn new(theme: &'static Theme, access: &AccessState) -> Self {
        Self {
            theme,
            locked: !is_unlocked(theme.tier, access),
            recommended_for: recommended_contexts(theme.category),
            badge_text_color: contrasting_text_color(theme.accent_color),
            is_dark: is_dark_theme(theme.text_color),
        }
    }
}

/// Every catalog theme matching `filter`, in catalog order.
pub fn browse(access: &AccessState, filter: &BrowseFilter) -> Vec<ThemeListing> {
    list_themes()
        .iter()
        .filter(|t| filter.matches(t))
        .map(|t| ThemeListing::new(t, access))
        .collect()
}

/// Persists the user's theme choice.
pub trait ThemeSaver: Send + Sync {
    fn save(&self, theme_id: &str) -> impl Future<Output = WhisperResult<()>> + Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The previewed theme is now active and the preview is closed.
    Applied(&'static str),
    /// The previewed theme needs a tier the user lacks; nothing changed.
    UnlockRequired(Tier),
    NothingPreviewed,
}

/// Notice shown when the user asks to unlock `tier`.
pub fn unlock_notice(tier: Tier) -> Notice {
    Notice::info(format!("Unlock {} Access", tier.as_str().to_uppercase()))
}

/// Store state for one user: active theme, access snapshot, filter and preview slot.
#[derive(Clone, Debug)]
pub struct ThemeStore {
    current: &'static Theme,
    access: AccessState,
    filter: BrowseFilter,
    preview: Option<&'static Theme>,
}

impl ThemeStore {
    pub fn new(current_id: &str, access: AccessState) -> WhisperResult<Self> {
        Ok(Self {
            current: get_theme(current_id)?,
            access,
            filter: BrowseFilter::default(),
            preview: None,
        })
    }

    pub fn current(&self) -> &'static Theme {
        self.current
    }

    pub fn access(&self) -> AccessState {
        self.access
    }

    /// A new snapshot from the payment backend. Lock state is recomputed on the next listing.
    pub fn set_access(&mut self, access: AccessState) {
        self.access = access;
    }

    pub fn filter(&self) -> &BrowseFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: BrowseFilter) {
        self.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.filter = BrowseFilter::default();
    }

    pub fn listings(&self) -> Vec<ThemeListing> {
        browse(&self.access, &self.filter)
    }

    /// Fills the preview slot. The active theme is untouched.
    pub fn open_preview(&mut self, id: &str) -> WhisperResult<ThemeListing> {
        let theme = get_theme(id)?;
        self.preview = Some(theme);
        Ok(ThemeListing::new(theme, &self.access))
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    pub fn previewing(&self) -> Option<ThemeListing> {
        self.preview.map(|t| ThemeListing::new(t, &self.access))
    }

    /// Sample card for the previewed theme, in the default presentation.
    pub fn preview_scene(&self) -> Option<Scene> {
        self.preview.map(|theme| {
            compose(
                theme,
                &CardPresentation::default(),
                SAMPLE_CAPTION,
                Fidelity::Preview,
            )
        })
    }

    /// Applies the previewed theme, or reports the tier that must be unlocked first.
    pub async fn apply_preview<S: ThemeSaver>(&mut self, saver: &S) -> WhisperResult<ApplyOutcome> {
        let Some(theme) = self.preview else {
            return Ok(ApplyOutcome::NothingPreviewed);
        };
        if !is_unlocked(theme.tier, &self.access) {
            return Ok(ApplyOutcome::UnlockRequired(theme.tier));
        }
        self.preview = None;
        self.select_theme(theme.id, saver).await?;
        Ok(ApplyOutcome::Applied(theme.id))
    }

    /// Makes `id` active right away, then persists it; a failed save restores the previous theme.
    #[tracing::instrument(level = "debug", skip(self, saver), fields(from = self.current.id))]
    pub async fn select_theme<S: ThemeSaver>(&mut self, id: &str, saver: &S) -> WhisperResult<()> {
        let theme = get_theme(id)?;
        if !is_unlocked(theme.tier, &self.access) {
            return Err(WhisperError::validation(format!(
                "theme \"{id}\" requires {} access",
                theme.tier
            )));
        }

        let previous = std::mem::replace(&mut self.current, theme);
        match saver.save(theme.id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(%err, restored = previous.id, "theme save failed");
                self.current = previous;
                Err(match err {
                    WhisperError::SaveFailure(_) => err,
                    other => WhisperError::save(other.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/mod.rs"]
mod tests;
