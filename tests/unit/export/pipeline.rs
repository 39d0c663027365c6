use std::time::Duration;

use super::*;
use crate::{
    catalog::get_theme,
    compose::{CardPresentation, Fidelity, compose},
    export::platform::{HeadlessPlatform, NoticeLevel, PlatformEvent},
    render::fonts::FontOpts,
};

struct FixedBackend;

impl RasterBackend for FixedBackend {
    fn capture(&self, scene: &Scene, _fonts: &FontBook, pixel_ratio: f32) -> WhisperResult<Capture> {
        let side = (scene.size as f32 * pixel_ratio) as u32;
        Ok(Capture {
            width: side,
            height: side,
            pixel_ratio,
            png: vec![0x89, b'P', b'N', b'G'],
        })
    }
}

struct BrokenBackend(fn() -> WhisperError);

impl RasterBackend for BrokenBackend {
    fn capture(&self, _: &Scene, _: &FontBook, _: f32) -> WhisperResult<Capture> {
        Err((self.0)())
    }
}

/// Remembers how many faces each capture was handed.
#[derive(Clone, Default)]
struct FaceCountBackend(Arc<Mutex<Vec<usize>>>);

impl FaceCountBackend {
    fn seen(&self) -> Vec<usize> {
        self.0.lock().unwrap().clone()
    }
}

impl RasterBackend for FaceCountBackend {
    fn capture(&self, scene: &Scene, fonts: &FontBook, pixel_ratio: f32) -> WhisperResult<Capture> {
        self.0.lock().unwrap().push(fonts.face_count());
        FixedBackend.capture(scene, fonts, pixel_ratio)
    }
}

fn fast_opts() -> ExportOpts {
    ExportOpts {
        settle_delay_ms: 1,
        font_timeout_ms: 50,
        ..ExportOpts::default()
    }
}

fn scene(fidelity: Fidelity) -> Scene {
    compose(
        get_theme("ocean").unwrap(),
        &CardPresentation::default(),
        "hello",
        fidelity,
    )
}

const ALL_STAGES: [ExportStage; 5] = [
    ExportStage::FontsReady,
    ExportStage::FrameSettled,
    ExportStage::DelayElapsed,
    ExportStage::Rasterized,
    ExportStage::Distributed,
];

#[tokio::test]
async fn download_passes_every_stage_in_order() {
    let p = ExportPipeline::new(HeadlessPlatform::new(), FixedBackend, fast_opts()).unwrap();
    let s = scene(Fidelity::Export);
    let fp = s.source.fingerprint();

    let report = p.export(s, ExportMode::Download).await.unwrap();
    assert_eq!(report.stages, ALL_STAGES);
    assert_eq!((report.width, report.height), (3240, 3240));
    assert_eq!(report.source_fingerprint, fp);
    assert!(!report.fonts_timed_out);
    let ExportOutcome::Downloaded { filename } = &report.outcome else {
        panic!("expected download, got {:?}", report.outcome);
    };
    assert!(filename.starts_with("whisper-") && filename.ends_with(".png"));

    assert_eq!(p.state(), ExportState::Idle);
    let platform = p.platform();
    assert!(!platform.surface_visible());
    assert_eq!(platform.notices(), vec![Notice::success(SAVED_MESSAGE)]);
}

#[tokio::test]
async fn surface_is_hidden_before_share() {
    let platform = HeadlessPlatform::new().with_file_sharing(true);
    let p = ExportPipeline::new(platform, FixedBackend, fast_opts()).unwrap();

    let report = p.export(scene(Fidelity::Export), ExportMode::Share).await.unwrap();
    assert_eq!(
        report.outcome,
        ExportOutcome::Shared {
            filename: "whisper.png".to_owned()
        }
    );

    let events = p.platform().events();
    assert_eq!(events[0], PlatformEvent::SurfaceShown);
    assert_eq!(events[1], PlatformEvent::Frame);
    assert_eq!(events[2], PlatformEvent::Frame);
    assert_eq!(events[3], PlatformEvent::SurfaceHidden);
    assert!(matches!(&events[4], PlatformEvent::Shared(a) if a.title == "Whisper Box"));
    assert_eq!(events.len(), 5);
}

#[tokio::test]
async fn share_without_file_support_falls_back_visibly() {
    let p = ExportPipeline::new(HeadlessPlatform::new(), FixedBackend, fast_opts()).unwrap();
    let report = p.export(scene(Fidelity::Export), ExportMode::Share).await.unwrap();

    let ExportOutcome::Fallback(artifact) = &report.outcome else {
        panic!("expected fallback, got {:?}", report.outcome);
    };
    assert_eq!(artifact.filename, "whisper.png");
    assert_eq!(artifact.mime, "image/png");
    assert_eq!(report.stages, ALL_STAGES);

    let notices = p.platform().notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Info);
    assert_eq!(notices[0].message, SHARE_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn preview_scenes_are_rejected_up_front() {
    let p = ExportPipeline::new(HeadlessPlatform::new(), FixedBackend, fast_opts()).unwrap();
    let err = p
        .export(scene(Fidelity::Preview), ExportMode::Download)
        .await
        .unwrap_err();
    assert!(matches!(err, WhisperError::Validation(_)));
    assert!(p.platform().events().is_empty());
    assert_eq!(p.state(), ExportState::Idle);
}

#[tokio::test]
async fn capture_failure_notifies_and_resets() {
    let backend = BrokenBackend(|| WhisperError::capture("pixmap"));
    let p = ExportPipeline::new(HeadlessPlatform::new(), backend, fast_opts()).unwrap();

    let err = p
        .export(scene(Fidelity::Export), ExportMode::Download)
        .await
        .unwrap_err();
    assert!(matches!(err, WhisperError::CaptureFailure(_)));
    assert_eq!(p.state(), ExportState::Idle);

    let platform = p.platform();
    assert!(!platform.surface_visible());
    assert_eq!(platform.notices(), vec![Notice::error("Generation failed.")]);
    assert!(
        !platform
            .events()
            .iter()
            .any(|e| matches!(e, PlatformEvent::Downloaded(_)))
    );
}

#[tokio::test]
async fn backend_errors_surface_as_capture_failures() {
    let backend = BrokenBackend(|| WhisperError::validation("bad svg"));
    let p = ExportPipeline::new(HeadlessPlatform::new(), backend, fast_opts()).unwrap();
    let err = p
        .export(scene(Fidelity::Export), ExportMode::Share)
        .await
        .unwrap_err();
    assert!(matches!(&err, WhisperError::CaptureFailure(m) if m.contains("bad svg")));
}

#[tokio::test]
async fn stalled_fonts_time_out_and_export_continues() {
    let platform = HeadlessPlatform::new().with_stalled_fonts();
    let p = ExportPipeline::new(platform, FixedBackend, fast_opts()).unwrap();
    let report = p
        .export(scene(Fidelity::Export), ExportMode::Download)
        .await
        .unwrap();
    assert!(report.fonts_timed_out);
    assert_eq!(report.stages, ALL_STAGES);
}

#[tokio::test]
async fn stalled_fonts_fall_back_to_system_faces() {
    let system = FontBook::load(&FontOpts::default());
    if system.is_empty() {
        return;
    }
    let backend = FaceCountBackend::default();
    let platform = HeadlessPlatform::new().with_stalled_fonts();
    let p = ExportPipeline::new(platform, backend.clone(), fast_opts()).unwrap();

    let report = p
        .export(scene(Fidelity::Export), ExportMode::Download)
        .await
        .unwrap();
    assert!(report.fonts_timed_out);
    assert_eq!(backend.seen(), vec![system.face_count()]);
}

#[tokio::test]
async fn preloaded_fallback_fonts_are_used_on_timeout() {
    let system = FontBook::load(&FontOpts::default());
    if system.is_empty() {
        return;
    }
    let backend = FaceCountBackend::default();
    let platform = HeadlessPlatform::new().with_stalled_fonts();
    let p = ExportPipeline::new(platform, backend.clone(), fast_opts())
        .unwrap()
        .with_fallback_fonts(system.clone());

    p.export(scene(Fidelity::Export), ExportMode::Download)
        .await
        .unwrap();
    assert_eq!(backend.seen(), vec![system.face_count()]);
}

#[tokio::test]
async fn dropped_export_releases_the_pipeline() {
    let platform = HeadlessPlatform::new().with_stalled_fonts();
    let opts = ExportOpts {
        font_timeout_ms: 60_000,
        ..fast_opts()
    };
    let p = ExportPipeline::new(platform, FixedBackend, opts).unwrap();

    let abandoned = tokio::time::timeout(
        Duration::from_millis(20),
        p.export(scene(Fidelity::Export), ExportMode::Download),
    )
    .await;
    assert!(abandoned.is_err());
    assert_eq!(p.state(), ExportState::Idle);
    assert!(!p.platform().surface_visible());

    // Accepted and waiting on fonts again, not rejected as in flight.
    let retried = tokio::time::timeout(
        Duration::from_millis(20),
        p.export(scene(Fidelity::Export), ExportMode::Download),
    )
    .await;
    assert!(retried.is_err());
    assert_eq!(p.state(), ExportState::Idle);
}

#[tokio::test]
async fn rejected_share_is_reported() {
    let platform = HeadlessPlatform::new()
        .with_file_sharing(true)
        .with_share_error("dismissed");
    let p = ExportPipeline::new(platform, FixedBackend, fast_opts()).unwrap();
    let err = p
        .export(scene(Fidelity::Export), ExportMode::Share)
        .await
        .unwrap_err();
    assert!(matches!(err, WhisperError::DistributionUnavailable(_)));
    assert_eq!(p.state(), ExportState::Idle);
    assert!(!p.platform().surface_visible());
    assert_eq!(p.platform().notices(), vec![Notice::error("Generation failed.")]);
}

#[test]
fn invalid_opts_are_rejected() {
    let opts = ExportOpts {
        pixel_ratio: -1.0,
        ..ExportOpts::default()
    };
    assert!(ExportPipeline::new(HeadlessPlatform::new(), FixedBackend, opts).is_err());
}
