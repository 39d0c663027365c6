/// Convenience result type used across Whisper Cards.
pub type WhisperResult<T> = Result<T, WhisperError>;

/// Top-level error taxonomy used by engine APIs.
///
/// None of these are fatal to the host application: callers report them locally and carry on.
#[derive(thiserror::Error, Debug)]
pub enum WhisperError {
    /// A pattern identifier did not resolve in the pattern library.
    ///
    /// Pattern identifiers only come from validated theme records, so this is a programmer error.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// A theme id did not resolve in the catalog.
    #[error("theme not found: {0}")]
    ThemeNotFound(String),

    /// Invalid caller-provided data (options, colors, opacities, scenes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failed or timed out.
    #[error("capture failure: {0}")]
    CaptureFailure(String),

    /// The host platform cannot perform the requested distribution.
    #[error("distribution unavailable: {0}")]
    DistributionUnavailable(String),

    /// The external persistence call rejected a theme selection.
    #[error("save failure: {0}")]
    SaveFailure(String),

    /// An export is already in flight for this pipeline.
    #[error("export already in flight")]
    ExportInFlight,

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WhisperError {
    /// Build a [`WhisperError::UnknownPattern`] value.
    pub fn unknown_pattern(id: impl Into<String>) -> Self {
        Self::UnknownPattern(id.into())
    }

    /// Build a [`WhisperError::ThemeNotFound`] value.
    pub fn theme_not_found(id: impl Into<String>) -> Self {
        Self::ThemeNotFound(id.into())
    }

    /// Build a [`WhisperError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WhisperError::CaptureFailure`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::CaptureFailure(msg.into())
    }

    /// Build a [`WhisperError::DistributionUnavailable`] value.
    pub fn distribution_unavailable(msg: impl Into<String>) -> Self {
        Self::DistributionUnavailable(msg.into())
    }

    /// Build a [`WhisperError::SaveFailure`] value.
    pub fn save(msg: impl Into<String>) -> Self {
        Self::SaveFailure(msg.into())
    }

    /// Build a [`WhisperError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Message shown to the user when this error reaches a notice surface.
    ///
    /// Capture and distribution errors collapse to a generic message; the detail goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::CaptureFailure(_) | Self::DistributionUnavailable(_) => {
                "Generation failed.".to_string()
            }
            Self::SaveFailure(_) => "Failed to update theme".to_string(),
            Self::ExportInFlight => "An export is already in progress.".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
