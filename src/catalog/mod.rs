//! Static, tiered theme catalog.

pub mod registry;
pub mod theme;

pub use registry::{DEFAULT_THEME_ID, get_theme, list_themes};
pub use theme::{Category, Gradient, GradientStop, Theme, ThemeRecord, Tier};
