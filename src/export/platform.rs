use std::{
    future::Future,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use anyhow::Context as _;
use serde::Serialize;

use crate::{
    export::artifact::ExportArtifact,
    foundation::error::{WhisperError, WhisperResult},
    render::fonts::{FontBook, FontOpts},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A toast-style message for the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Host capabilities the export pipeline suspends on or hands results to.
pub trait Platform: Send + Sync {
    /// Shows or hides the offscreen export surface.
    fn set_export_surface_visible(&self, visible: bool);

    /// Resolves once every font the host will ever load is available.
    fn fonts_ready(&self) -> impl Future<Output = FontBook> + Send;

    /// Resolves at the next frame boundary, after layout has been flushed.
    fn next_frame(&self) -> impl Future<Output = ()> + Send;

    fn can_share_files(&self) -> bool;

    fn share(&self, artifact: &ExportArtifact) -> impl Future<Output = WhisperResult<()>> + Send;

    fn download(&self, artifact: &ExportArtifact)
    -> impl Future<Output = WhisperResult<()>> + Send;

    fn notify(&self, notice: Notice);
}

/// Loads a [`FontBook`] once on a blocking worker and hands out clones afterwards.
#[derive(Debug)]
pub struct FontLoader {
    opts: FontOpts,
    book: tokio::sync::OnceCell<FontBook>,
}

impl FontLoader {
    pub fn new(opts: FontOpts) -> Self {
        Self {
            opts,
            book: tokio::sync::OnceCell::new(),
        }
    }

    /// Already loaded fonts; `get` resolves immediately.
    pub fn ready(book: FontBook) -> Self {
        Self {
            opts: FontOpts::default(),
            book: tokio::sync::OnceCell::new_with(Some(book)),
        }
    }

    pub async fn get(&self) -> FontBook {
        self.book
            .get_or_init(|| async {
                let opts = self.opts.clone();
                match tokio::task::spawn_blocking(move || FontBook::load(&opts)).await {
                    Ok(book) => book,
                    Err(err) => {
                        tracing::warn!(%err, "font loading worker failed, continuing without fonts");
                        FontBook::empty()
                    }
                }
            })
            .await
            .clone()
    }
}

/// What a [`HeadlessPlatform`] observed, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum PlatformEvent {
    SurfaceShown,
    SurfaceHidden,
    Frame,
    Shared(ExportArtifact),
    Downloaded(ExportArtifact),
    Notified(Notice),
}

#[derive(Clone, Debug)]
enum FontSupply {
    Ready(FontBook),
    /// Never resolves.
    Stalled,
}

/// In-memory platform that records everything it is asked to do.
#[derive(Clone, Debug)]
pub struct HeadlessPlatform {
    fonts: FontSupply,
    can_share: bool,
    share_error: Option<String>,
    events: Arc<Mutex<Vec<PlatformEvent>>>,
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self {
            fonts: FontSupply::Ready(FontBook::empty()),
            can_share: false,
            share_error: None,
            events: Arc::default(),
        }
    }
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fonts(mut self, fonts: FontBook) -> Self {
        self.fonts = FontSupply::Ready(fonts);
        self
    }

    /// Font readiness never resolves, as when a web font request hangs.
    pub fn with_stalled_fonts(mut self) -> Self {
        self.fonts = FontSupply::Stalled;
        self
    }

    pub fn with_file_sharing(mut self, can_share: bool) -> Self {
        self.can_share = can_share;
        self
    }

    /// Makes `share` fail, as when the user dismisses the share sheet.
    pub fn with_share_error(mut self, message: impl Into<String>) -> Self {
        self.share_error = Some(message.into());
        self
    }

    pub fn events(&self) -> Vec<PlatformEvent> {
        self.lock().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                PlatformEvent::Notified(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether the export surface is visible after the events seen so far.
    pub fn surface_visible(&self) -> bool {
        self.lock().iter().fold(false, |visible, e| match e {
            PlatformEvent::SurfaceShown => true,
            PlatformEvent::SurfaceHidden => false,
            _ => visible,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<PlatformEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, event: PlatformEvent) {
        self.lock().push(event);
    }
}

impl Platform for HeadlessPlatform {
    fn set_export_surface_visible(&self, visible: bool) {
        self.record(if visible {
            PlatformEvent::SurfaceShown
        } else {
            PlatformEvent::SurfaceHidden
        });
    }

    async fn fonts_ready(&self) -> FontBook {
        match &self.fonts {
            FontSupply::Ready(book) => book.clone(),
            FontSupply::Stalled => std::future::pending().await,
        }
    }

    async fn next_frame(&self) {
        tokio::task::yield_now().await;
        self.record(PlatformEvent::Frame);
    }

    fn can_share_files(&self) -> bool {
        self.can_share
    }

    async fn share(&self, artifact: &ExportArtifact) -> WhisperResult<()> {
        if let Some(message) = &self.share_error {
            return Err(WhisperError::distribution_unavailable(message.clone()));
        }
        self.record(PlatformEvent::Shared(artifact.clone()));
        Ok(())
    }

    async fn download(&self, artifact: &ExportArtifact) -> WhisperResult<()> {
        self.record(PlatformEvent::Downloaded(artifact.clone()));
        Ok(())
    }

    fn notify(&self, notice: Notice) {
        self.record(PlatformEvent::Notified(notice));
    }
}

/// Frame interval of a 60 Hz display.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Platform for command-line use: downloads are written into a directory, notices go to the log.
#[derive(Debug)]
pub struct DirPlatform {
    dir: PathBuf,
    fonts: FontLoader,
}

impl DirPlatform {
    pub fn new(dir: impl Into<PathBuf>, fonts: FontOpts) -> Self {
        Self {
            dir: dir.into(),
            fonts: FontLoader::new(fonts),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, artifact: &ExportArtifact) -> PathBuf {
        self.dir.join(&artifact.filename)
    }
}

impl Platform for DirPlatform {
    fn set_export_surface_visible(&self, visible: bool) {
        tracing::debug!(visible, "export surface");
    }

    async fn fonts_ready(&self) -> FontBook {
        self.fonts.get().await
    }

    async fn next_frame(&self) {
        tokio::time::sleep(FRAME_INTERVAL).await;
    }

    fn can_share_files(&self) -> bool {
        false
    }

    async fn share(&self, _artifact: &ExportArtifact) -> WhisperResult<()> {
        Err(WhisperError::distribution_unavailable(
            "no share target on the command line",
        ))
    }

    async fn download(&self, artifact: &ExportArtifact) -> WhisperResult<()> {
        let dir = self.dir.clone();
        let path = self.path_for(artifact);
        let png = artifact.png.clone();
        tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("create output dir '{}'", dir.display()))?;
            std::fs::write(&path, &png)
                .with_context(|| format!("write png '{}'", path.display()))?;
            Ok(())
        })
        .await
        .context("download worker")??;
        Ok(())
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => tracing::info!("{}", notice.message),
            NoticeLevel::Error => tracing::error!("{}", notice.message),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/platform.rs"]
mod tests;
