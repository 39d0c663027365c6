use std::{
    sync::{Arc, Mutex, PoisonError},
    time::SystemTime,
};

use serde::Serialize;

use crate::{
    compose::Scene,
    config::ExportOpts,
    export::{
        artifact::ExportArtifact,
        platform::{FontLoader, Notice, Platform},
    },
    foundation::error::{WhisperError, WhisperResult},
    render::{
        backend::{Capture, CpuRasterizer, RasterBackend},
        fonts::{FontBook, FontOpts},
    },
};

pub const SAVED_MESSAGE: &str = "Image saved!";

/// Posted when the host cannot share files and the image is handed back in memory.
pub const SHARE_FALLBACK_MESSAGE: &str =
    "Sharing is not available here. Your image is ready to save.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportState {
    #[default]
    Idle,
    Preparing,
    Rasterizing,
    Distributing,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    Download,
    Share,
}

/// Suspension points an export passed, in the order they complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportStage {
    FontsReady,
    FrameSettled,
    DelayElapsed,
    Rasterized,
    Distributed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExportOutcome {
    Downloaded { filename: String },
    Shared { filename: String },
    /// File sharing is not available; the image is handed back instead.
    Fallback(ExportArtifact),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportReport {
    pub stages: Vec<ExportStage>,
    pub outcome: ExportOutcome,
    /// Fonts did not become ready in time and the capture used the fallback book.
    pub fonts_timed_out: bool,
    pub width: u32,
    pub height: u32,
    /// Fingerprint of the inputs the exported scene was composed from.
    pub source_fingerprint: u64,
}

/// Shows the export surface once and hides it at most once, at the latest on drop.
struct Surface<'a, P: Platform> {
    platform: &'a P,
    visible: bool,
}

impl<'a, P: Platform> Surface<'a, P> {
    fn show(platform: &'a P) -> Self {
        platform.set_export_surface_visible(true);
        Self {
            platform,
            visible: true,
        }
    }

    fn hide(&mut self) {
        if self.visible {
            self.platform.set_export_surface_visible(false);
            self.visible = false;
        }
    }
}

impl<P: Platform> Drop for Surface<'_, P> {
    fn drop(&mut self) {
        self.hide();
    }
}

/// Held for the lifetime of one export; returns the pipeline to `Idle` however the export ends,
/// including when its future is dropped mid-flight.
struct InFlight<'a> {
    state: &'a Mutex<ExportState>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = ExportState::Idle;
    }
}

/// Font-settled capture of export scenes, one at a time.
///
/// `export` suspends on font readiness, `frame_waits` frame boundaries and the settle delay, in
/// that order, before rasterizing on a blocking worker. A second call while one is running is
/// rejected with [`WhisperError::ExportInFlight`].
///
/// When fonts are not ready in time the capture uses the last book the platform delivered, or
/// else a fallback book of system fonts plus `opts.fonts.font_dirs`, loaded once.
pub struct ExportPipeline<P: Platform, B: RasterBackend + 'static = CpuRasterizer> {
    platform: P,
    backend: Arc<B>,
    opts: ExportOpts,
    state: Mutex<ExportState>,
    last_fonts: Mutex<Option<FontBook>>,
    fallback_fonts: FontLoader,
}

impl<P: Platform> ExportPipeline<P, CpuRasterizer> {
    pub fn cpu(platform: P, opts: ExportOpts) -> WhisperResult<Self> {
        Self::new(platform, CpuRasterizer, opts)
    }
}

impl<P: Platform, B: RasterBackend + 'static> ExportPipeline<P, B> {
    pub fn new(platform: P, backend: B, opts: ExportOpts) -> WhisperResult<Self> {
        opts.validate()?;
        let fallback_fonts = FontLoader::new(FontOpts {
            system_fonts: true,
            font_dirs: opts.fonts.font_dirs.clone(),
        });
        Ok(Self {
            platform,
            backend: Arc::new(backend),
            opts,
            state: Mutex::new(ExportState::Idle),
            last_fonts: Mutex::new(None),
            fallback_fonts,
        })
    }

    /// Uses `fonts` instead of loading a fallback book when font readiness times out.
    pub fn with_fallback_fonts(mut self, fonts: FontBook) -> Self {
        self.fallback_fonts = FontLoader::ready(fonts);
        self
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn opts(&self) -> &ExportOpts {
        &self.opts
    }

    pub fn state(&self) -> ExportState {
        *self.lock_state()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ExportState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, next: ExportState) {
        let mut state = self.lock_state();
        tracing::debug!(from = ?*state, to = ?next, "export state");
        *state = next;
    }

    /// `Idle -> Preparing`, or `ExportInFlight` when any other state is active.
    fn begin(&self) -> WhisperResult<InFlight<'_>> {
        let mut state = self.lock_state();
        if *state != ExportState::Idle {
            return Err(WhisperError::ExportInFlight);
        }
        *state = ExportState::Preparing;
        Ok(InFlight { state: &self.state })
    }

    /// Book for a capture whose fonts timed out: the last non-empty book the platform delivered,
    /// else the fallback loader's.
    async fn fallback_fonts(&self) -> FontBook {
        let last = self
            .last_fonts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match last {
            Some(book) => book,
            None => self.fallback_fonts.get().await,
        }
    }

    fn remember_fonts(&self, fonts: &FontBook) {
        if !fonts.is_empty() {
            *self.last_fonts.lock().unwrap_or_else(PoisonError::into_inner) = Some(fonts.clone());
        }
    }

    /// Exports `scene`, which must be an export-fidelity scene.
    ///
    /// The scene is owned by this call from the start, so later presentation edits never reach
    /// an export in flight.
    #[tracing::instrument(
        level = "info",
        skip(self, scene),
        fields(theme = scene.source.theme_id, header = %scene.source.header_style)
    )]
    pub async fn export(&self, scene: Scene, mode: ExportMode) -> WhisperResult<ExportReport> {
        if !scene.is_export() {
            return Err(WhisperError::validation(
                "only export-fidelity scenes can be captured",
            ));
        }
        let _in_flight = self.begin()?;

        let mut surface = Surface::show(&self.platform);
        let result = self.run(scene, mode, &mut surface).await;
        surface.hide();

        match &result {
            Ok(report) => {
                tracing::info!(stages = report.stages.len(), "export finished");
            }
            Err(err) => {
                self.set_state(ExportState::Failed);
                tracing::warn!(%err, "export failed");
                self.platform.notify(Notice::error(err.user_message()));
            }
        }
        result
    }

    async fn run(
        &self,
        scene: Scene,
        mode: ExportMode,
        surface: &mut Surface<'_, P>,
    ) -> WhisperResult<ExportReport> {
        let source_fingerprint = scene.source.fingerprint();
        let mut stages = Vec::with_capacity(5);

        let (fonts, fonts_timed_out) =
            match tokio::time::timeout(self.opts.font_timeout(), self.platform.fonts_ready()).await
            {
                Ok(fonts) => {
                    self.remember_fonts(&fonts);
                    (fonts, false)
                }
                Err(_) => {
                    let fonts = self.fallback_fonts().await;
                    tracing::warn!(
                        timeout_ms = self.opts.font_timeout_ms,
                        faces = fonts.face_count(),
                        "fonts not ready in time, capturing with fallback fonts"
                    );
                    (fonts, true)
                }
            };
        stages.push(ExportStage::FontsReady);

        for _ in 0..self.opts.frame_waits {
            self.platform.next_frame().await;
        }
        stages.push(ExportStage::FrameSettled);

        tokio::time::sleep(self.opts.settle_delay()).await;
        stages.push(ExportStage::DelayElapsed);

        self.set_state(ExportState::Rasterizing);
        let capture = self.capture(scene, fonts).await?;
        stages.push(ExportStage::Rasterized);
        let (width, height) = (capture.width, capture.height);

        self.set_state(ExportState::Distributing);
        surface.hide();
        let outcome = self.distribute(capture, mode).await?;
        stages.push(ExportStage::Distributed);

        Ok(ExportReport {
            stages,
            outcome,
            fonts_timed_out,
            width,
            height,
            source_fingerprint,
        })
    }

    async fn capture(&self, scene: Scene, fonts: FontBook) -> WhisperResult<Capture> {
        let backend = Arc::clone(&self.backend);
        let pixel_ratio = self.opts.pixel_ratio;
        let worker =
            tokio::task::spawn_blocking(move || backend.capture(&scene, &fonts, pixel_ratio));

        match tokio::time::timeout(self.opts.capture_timeout(), worker).await {
            Ok(Ok(Ok(capture))) => Ok(capture),
            Ok(Ok(Err(err @ WhisperError::CaptureFailure(_)))) => Err(err),
            Ok(Ok(Err(err))) => Err(WhisperError::capture(err.to_string())),
            Ok(Err(join)) => Err(WhisperError::capture(format!(
                "rasterizer worker failed: {join}"
            ))),
            Err(_) => Err(WhisperError::capture(format!(
                "rasterization timed out after {}ms",
                self.opts.capture_timeout_ms
            ))),
        }
    }

    async fn distribute(&self, capture: Capture, mode: ExportMode) -> WhisperResult<ExportOutcome> {
        match mode {
            ExportMode::Download => {
                let artifact = ExportArtifact::for_download(capture, SystemTime::now());
                self.platform.download(&artifact).await?;
                self.platform.notify(Notice::success(SAVED_MESSAGE));
                Ok(ExportOutcome::Downloaded {
                    filename: artifact.filename,
                })
            }
            ExportMode::Share => {
                let artifact = ExportArtifact::for_share(capture);
                if self.platform.can_share_files() {
                    self.platform.share(&artifact).await?;
                    Ok(ExportOutcome::Shared {
                        filename: artifact.filename,
                    })
                } else {
                    tracing::info!("host cannot share files, returning image in memory");
                    self.platform.notify(Notice::info(SHARE_FALLBACK_MESSAGE));
                    Ok(ExportOutcome::Fallback(artifact))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/pipeline.rs"]
mod tests;
