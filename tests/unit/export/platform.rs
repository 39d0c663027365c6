use std::time::{Duration, UNIX_EPOCH};

use super::*;
use crate::render::Capture;

fn artifact() -> ExportArtifact {
    ExportArtifact::for_download(
        Capture {
            width: 2,
            height: 2,
            pixel_ratio: 1.0,
            png: b"\x89PNG fake".to_vec(),
        },
        UNIX_EPOCH + Duration::from_millis(42),
    )
}

#[tokio::test]
async fn headless_records_in_order() {
    let p = HeadlessPlatform::new().with_file_sharing(true);
    p.set_export_surface_visible(true);
    p.next_frame().await;
    p.set_export_surface_visible(false);
    p.share(&artifact()).await.unwrap();
    p.notify(Notice::success("Image saved!"));

    let events = p.events();
    assert_eq!(events.len(), 5);
    assert_eq!(events[0], PlatformEvent::SurfaceShown);
    assert_eq!(events[1], PlatformEvent::Frame);
    assert_eq!(events[2], PlatformEvent::SurfaceHidden);
    assert!(matches!(&events[3], PlatformEvent::Shared(a) if a.filename == "whisper-42.png"));
    assert_eq!(p.notices(), vec![Notice::success("Image saved!")]);
    assert!(!p.surface_visible());
    assert!(p.can_share_files());
}

#[tokio::test]
async fn headless_share_error_is_distribution_unavailable() {
    let p = HeadlessPlatform::new()
        .with_file_sharing(true)
        .with_share_error("dismissed");
    let err = p.share(&artifact()).await.unwrap_err();
    assert!(matches!(err, WhisperError::DistributionUnavailable(_)));
    assert!(p.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn stalled_fonts_never_resolve() {
    let p = HeadlessPlatform::new().with_stalled_fonts();
    let waited = tokio::time::timeout(Duration::from_secs(5), p.fonts_ready()).await;
    assert!(waited.is_err());
}

#[tokio::test]
async fn font_loader_loads_once() {
    let loader = FontLoader::new(FontOpts {
        system_fonts: false,
        font_dirs: vec![PathBuf::from("/definitely/not/a/font/dir")],
    });
    let a = loader.get().await;
    let b = loader.get().await;
    assert!(a.is_empty());
    assert_eq!(a.face_count(), b.face_count());

    let ready = FontLoader::ready(FontBook::empty());
    assert!(ready.get().await.is_empty());
}

#[tokio::test]
async fn dir_platform_writes_downloads() {
    let dir = std::env::temp_dir().join(format!("whisper-cards-dir-{}", std::process::id()));
    let p = DirPlatform::new(&dir, FontOpts::default());
    let a = artifact();
    p.download(&a).await.unwrap();

    let path = p.path_for(&a);
    assert_eq!(path, dir.join("whisper-42.png"));
    assert_eq!(std::fs::read(&path).unwrap(), a.png);
    assert!(!p.can_share_files());
    assert!(matches!(
        p.share(&a).await,
        Err(WhisperError::DistributionUnavailable(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}
