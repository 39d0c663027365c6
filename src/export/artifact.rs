use std::time::{SystemTime, UNIX_EPOCH};

use crate::render::Capture;

pub const SHARE_FILENAME: &str = "whisper.png";
pub const SHARE_TITLE: &str = "Whisper Box";
pub const PNG_MIME: &str = "image/png";

/// `whisper-<unix-millis>.png`.
pub fn download_filename(at: SystemTime) -> String {
    let millis = at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("whisper-{millis}.png")
}

/// An exported card image, owned by the export call that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: &'static str,
    /// Title handed to the share sheet.
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
    pub png: Vec<u8>,
}

impl ExportArtifact {
    fn from_capture(capture: Capture, filename: String) -> Self {
        Self {
            filename,
            mime: PNG_MIME,
            title: SHARE_TITLE,
            width: capture.width,
            height: capture.height,
            pixel_ratio: capture.pixel_ratio,
            png: capture.png,
        }
    }

    pub fn for_download(capture: Capture, at: SystemTime) -> Self {
        Self::from_capture(capture, download_filename(at))
    }

    pub fn for_share(capture: Capture) -> Self {
        Self::from_capture(capture, SHARE_FILENAME.to_owned())
    }

    pub fn byte_len(&self) -> usize {
        self.png.len()
    }
}
