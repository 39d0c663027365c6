use std::{fs::File, io::BufReader, path::Path, time::Duration};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{WhisperError, WhisperResult},
    render::fonts::FontOpts,
};

/// Export pipeline settings.
///
/// Every field has a default, so a JSON file only needs the values it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOpts {
    /// Device pixels per scene unit; the PNG side is `1080 * pixel_ratio`.
    pub pixel_ratio: f32,
    /// Frame boundaries awaited after fonts are ready.
    pub frame_waits: u32,
    pub settle_delay_ms: u64,
    /// Upper bound on waiting for fonts; past it the export proceeds without them.
    pub font_timeout_ms: u64,
    pub capture_timeout_ms: u64,
    pub fonts: FontOpts,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            pixel_ratio: 3.0,
            frame_waits: 2,
            settle_delay_ms: 150,
            font_timeout_ms: 5_000,
            capture_timeout_ms: 30_000,
            fonts: FontOpts::default(),
        }
    }
}

impl ExportOpts {
    /// Reads options from a JSON file and validates them.
    pub fn from_path(path: &Path) -> WhisperResult<Self> {
        let f = File::open(path).with_context(|| format!("open options '{}'", path.display()))?;
        let opts: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| WhisperError::serde(format!("{}: {e}", path.display())))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> WhisperResult<()> {
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(WhisperError::validation("pixel_ratio must be finite and > 0"));
        }
        if self.pixel_ratio > 8.0 {
            return Err(WhisperError::validation("pixel_ratio must be <= 8"));
        }
        if self.font_timeout_ms == 0 {
            return Err(WhisperError::validation("font_timeout_ms must be > 0"));
        }
        if self.capture_timeout_ms == 0 {
            return Err(WhisperError::validation("capture_timeout_ms must be > 0"));
        }
        Ok(())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn font_timeout(&self) -> Duration {
        Duration::from_millis(self.font_timeout_ms)
    }

    pub fn capture_timeout(&self) -> Duration {
        Duration::from_millis(self.capture_timeout_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
