//! Whisper Cards turns anonymous messages into themed, shareable card images.
//!
//! The crate is organized leaf-first:
//!
//! - [`catalog`]: the static, tiered theme registry
//! - [`patterns`]: deterministic procedural background drawings
//! - [`access`]: tier gating and presentation hints
//! - [`compose`]: theme + presentation + caption -> [`Scene`] at preview or export fidelity
//! - [`render`]: scene -> SVG -> pixels -> PNG
//! - [`export`]: the font-settled, single-flight export pipeline
//! - [`store`]: filtered browsing, previews and optimistic theme selection
#![forbid(unsafe_code)]

mod foundation;

pub mod access;
pub mod catalog;
pub mod compose;
pub mod config;
pub mod export;
pub mod patterns;
pub mod render;
pub mod store;

pub use crate::foundation::core::{BezPath, Color, Point, Rect, Vec2};
pub use crate::foundation::error::{WhisperError, WhisperResult};

pub use crate::access::{AccessState, is_unlocked};
pub use crate::catalog::{Category, Gradient, Theme, Tier, get_theme, list_themes};
pub use crate::compose::{CardPresentation, Fidelity, FontStyle, HeaderStyle, Scene, compose};
pub use crate::config::ExportOpts;
pub use crate::export::{
    CardSession, ExportMode, ExportOutcome, ExportPipeline, ExportReport, ExportStage, ExportState,
    HeadlessPlatform, Platform,
};
pub use crate::patterns::{Drawing, Opacity, PatternId};
pub use crate::render::{CpuRasterizer, FontBook, FontOpts, RasterBackend};
pub use crate::store::{BrowseFilter, ThemeListing, ThemeStore};
