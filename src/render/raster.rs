use std::io::Cursor;

use anyhow::Context;

use crate::{
    foundation::{
        error::{WhisperError, WhisperResult},
        math::demultiply_rgba8_in_place,
    },
    render::fonts::{FontBook, font_resolver},
};

/// Largest raster side accepted before allocating.
pub const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl RasterImage {
    /// Pixel at `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.rgba.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn is_opaque(&self) -> bool {
        self.rgba.chunks_exact(4).all(|px| px[3] == 255)
    }
}

/// Parses an SVG document with `fonts` as its font database.
pub fn parse_svg(svg: &str, fonts: &FontBook) -> WhisperResult<usvg::Tree> {
    let opts = usvg::Options {
        fontdb: fonts.database(),
        font_resolver: font_resolver(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse scene svg")?;
    Ok(tree)
}

/// Output size for a tree drawn at `pixel_ratio` device pixels per unit.
pub fn raster_size(tree: &usvg::Tree, pixel_ratio: f32) -> WhisperResult<(u32, u32)> {
    if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
        return Err(WhisperError::validation("pixel ratio must be finite and > 0"));
    }
    let to_px = |v: f32| -> WhisperResult<u32> {
        let px = (v * pixel_ratio).round();
        if !px.is_finite() || px < 1.0 {
            return Err(WhisperError::capture("svg has invalid width/height"));
        }
        Ok(px as u32)
    };
    let size = tree.size();
    let (w, h) = (to_px(size.width())?, to_px(size.height())?);
    if w > MAX_DIM || h > MAX_DIM {
        return Err(WhisperError::capture(format!(
            "raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok((w, h))
}

/// Renders an SVG document to straight-alpha RGBA8.
#[tracing::instrument(level = "debug", skip(svg, fonts), fields(bytes = svg.len()))]
pub fn rasterize_svg(svg: &str, fonts: &FontBook, pixel_ratio: f32) -> WhisperResult<RasterImage> {
    let tree = parse_svg(svg, fonts)?;
    let (width, height) = raster_size(&tree, pixel_ratio)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| WhisperError::capture("failed to allocate pixmap"))?;
    let sx = width as f32 / tree.size().width();
    let sy = height as f32 / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba);
    tracing::debug!(width, height, "svg rasterized");
    Ok(RasterImage {
        width,
        height,
        rgba,
    })
}

/// Lossless PNG encoding.
pub fn encode_png(image: &RasterImage) -> WhisperResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(image.width, image.height, image.rgba.clone())
        .ok_or_else(|| WhisperError::capture("pixel buffer does not match its dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
