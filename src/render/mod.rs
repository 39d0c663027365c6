//! Scene rendering: fonts, caption layout, SVG emission, rasterization and PNG encoding.

pub mod backend;
pub mod fonts;
pub mod raster;
pub mod svg;
pub mod text;

pub use backend::{BackendKind, Capture, CpuRasterizer, RasterBackend, create_backend};
pub use fonts::{FontBook, FontOpts};
pub use raster::{RasterImage, encode_png, rasterize_svg};
pub use svg::{drawing_to_svg, scene_svg, scene_to_svg};
pub use text::{CaptionLayout, MIN_CAPTION_SIZE, layout_caption};
