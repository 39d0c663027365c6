use crate::{
    compose::Scene,
    foundation::error::WhisperResult,
    render::{
        fonts::FontBook,
        raster::{encode_png, rasterize_svg},
        svg::scene_svg,
    },
};

/// A captured scene, PNG-encoded.
#[derive(Clone, Debug, PartialEq)]
pub struct Capture {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Device pixels per scene unit the scene was captured at.
    pub pixel_ratio: f32,
    /// Lossless PNG bytes.
    pub png: Vec<u8>,
}

/// Turns a composed scene into pixels.
///
/// Implementations are called from a blocking worker and may take as long as they need; the
/// export pipeline bounds them with its capture timeout.
pub trait RasterBackend: Send + Sync {
    fn capture(&self, scene: &Scene, fonts: &FontBook, pixel_ratio: f32) -> WhisperResult<Capture>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// SVG emission rasterized with `resvg`.
    #[default]
    Cpu,
}

/// Create a raster backend implementation.
pub fn create_backend(kind: BackendKind) -> Box<dyn RasterBackend> {
    match kind {
        BackendKind::Cpu => Box::new(CpuRasterizer),
    }
}

/// CPU backend: scene -> SVG -> `resvg` pixmap -> PNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuRasterizer;

impl RasterBackend for CpuRasterizer {
    #[tracing::instrument(level = "debug", skip_all, fields(theme = scene.source.theme_id, pixel_ratio))]
    fn capture(&self, scene: &Scene, fonts: &FontBook, pixel_ratio: f32) -> WhisperResult<Capture> {
        let svg = scene_svg(scene, fonts);
        let image = rasterize_svg(&svg, fonts, pixel_ratio)?;
        let png = encode_png(&image)?;
        Ok(Capture {
            width: image.width,
            height: image.height,
            pixel_ratio,
            png,
        })
    }
}

impl<B: RasterBackend + ?Sized> RasterBackend for Box<B> {
    fn capture(&self, scene: &Scene, fonts: &FontBook, pixel_ratio: f32) -> WhisperResult<Capture> {
        (**self).capture(scene, fonts, pixel_ratio)
    }
}

impl<B: RasterBackend + ?Sized> RasterBackend for std::sync::Arc<B> {
    fn capture(&self, scene: &Scene, fonts: &FontBook, pixel_ratio: f32) -> WhisperResult<Capture> {
        (**self).capture(scene, fonts, pixel_ratio)
    }
}
