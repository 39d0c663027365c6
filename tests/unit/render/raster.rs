use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="#ff0000"/><rect width="5" height="5" fill="#0000ff" fill-opacity="0.5"/></svg>"##;

#[test]
fn rasterizes_at_pixel_ratio() {
    let img = rasterize_svg(SQUARE, &FontBook::empty(), 3.0).unwrap();
    assert_eq!((img.width, img.height), (30, 30));
    assert_eq!(img.rgba.len(), 30 * 30 * 4);
    assert_eq!(img.pixel(29, 29), Some([255, 0, 0, 255]));
    assert!(img.is_opaque());
    assert_eq!(img.pixel(30, 0), None);
}

#[test]
fn invalid_pixel_ratio_is_rejected() {
    let err = rasterize_svg(SQUARE, &FontBook::empty(), 0.0).unwrap_err();
    assert!(matches!(err, WhisperError::Validation(_)));
}

#[test]
fn malformed_svg_is_an_error() {
    let err = rasterize_svg("<svg", &FontBook::empty(), 1.0).unwrap_err();
    assert!(err.to_string().contains("parse scene svg"));
}

#[test]
fn png_round_trips_through_image_decoder() {
    let img = rasterize_svg(SQUARE, &FontBook::empty(), 1.0).unwrap();
    let png = encode_png(&img).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (10, 10));
    assert_eq!(decoded.into_raw(), img.rgba);
}

#[test]
fn mismatched_buffer_fails_encoding() {
    let img = RasterImage {
        width: 2,
        height: 2,
        rgba: vec![0; 4],
    };
    assert!(matches!(
        encode_png(&img),
        Err(WhisperError::CaptureFailure(_))
    ));
}
