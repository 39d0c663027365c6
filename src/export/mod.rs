//! Font-settled capture of export scenes and handoff to the host platform.

pub mod artifact;
pub mod pipeline;
pub mod platform;
pub mod session;

pub use artifact::{ExportArtifact, download_filename};
pub use pipeline::{ExportMode, ExportOutcome, ExportPipeline, ExportReport, ExportStage, ExportState};
pub use platform::{
    DirPlatform, FontLoader, HeadlessPlatform, Notice, NoticeLevel, Platform, PlatformEvent,
};
pub use session::CardSession;
