use super::*;
use crate::{
    catalog::get_theme,
    compose::{CardPresentation, Fidelity, HeaderStyle, TextColorPreset, compose},
    patterns::{PatternId, render},
};

fn export_scene(theme: &str, header: HeaderStyle, caption: &str) -> Scene {
    let p = CardPresentation::default().with_header(header);
    compose(get_theme(theme).unwrap(), &p, caption, Fidelity::Export)
}

#[test]
fn num_rounds_and_normalizes_zero() {
    assert_eq!(num(600.0), "600");
    assert_eq!(num(0.1 + 0.2), "0.3");
    assert_eq!(num(-0.0001), "0");
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(escape(r#"<b>"A&B's"</b>"#), "&lt;b&gt;&quot;A&amp;B&apos;s&quot;&lt;/b&gt;");
}

#[test]
fn export_document_is_1080_square_without_rounded_clip() {
    let scene = export_scene("galaxy", HeaderStyle::ThemeName, "hello");
    let svg = scene_svg(&scene, &FontBook::empty());
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1080" height="1080""#));
    assert!(svg.contains(r#"rx="0""#));
    assert!(svg.contains("GALAXY BURST"));
    assert!(svg.ends_with("</g></svg>"));
}

#[test]
fn background_gradient_uses_theme_stops() {
    let scene = export_scene("ocean", HeaderStyle::BrandedBadge, "x");
    let svg = scene_svg(&scene, &FontBook::empty());
    for stop in scene.background.stops.iter() {
        assert!(svg.contains(&stop.color.to_svg_rgb()), "{}", stop.color);
    }
    assert!(svg.contains(r#"gradientUnits="userSpaceOnUse""#));
}

#[test]
fn diagonal_gradient_spans_corner_to_corner() {
    let scene = export_scene("ocean", HeaderStyle::BrandedBadge, "x");
    assert_eq!(scene.background.angle_deg, 135.0);
    let bg = background_gradient(&scene);
    assert!(bg.contains(r#"x1="0" y1="0" x2="1080" y2="1080""#), "{bg}");
}

#[test]
fn caption_text_is_escaped_and_shadowed() {
    let scene = export_scene("ocean", HeaderStyle::MinimalLine, "a < b & c");
    let svg = scene_svg(&scene, &FontBook::empty());
    assert!(svg.contains("&lt;"));
    assert!(svg.contains("&amp;"));
    assert!(svg.contains(r#"filter="url(#caption-shadow)""#));
}

#[test]
fn black_caption_has_no_shadow_filter() {
    let p = CardPresentation::default()
        .with_header(HeaderStyle::MinimalLine)
        .with_text_color(TextColorPreset::Black.color());
    let scene = compose(get_theme("ocean").unwrap(), &p, "quiet", Fidelity::Export);
    let svg = scene_svg(&scene, &FontBook::empty());
    assert!(!svg.contains("caption-shadow"));
    assert!(svg.contains("footer-shadow"));
}

#[test]
fn preview_pattern_layer_blends_with_overlay() {
    let p = CardPresentation::default();
    let scene = compose(get_theme("ocean").unwrap(), &p, "hi", Fidelity::Preview);
    let svg = scene_svg(&scene, &FontBook::empty());
    assert!(svg.contains(r#"<g opacity="0.4" style="mix-blend-mode:overlay">"#));
    assert!(svg.contains(r#"rx="40""#));
}

#[test]
fn question_mark_header_draws_icon() {
    let scene = export_scene("ocean", HeaderStyle::QuestionMark, "hi");
    let svg = scene_svg(&scene, &FontBook::empty());
    assert!(svg.contains("M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"));
}

#[test]
fn footer_has_lead_and_link_spans() {
    let scene = export_scene("ocean", HeaderStyle::DefaultBadge, "hi");
    let svg = scene_svg(&scene, &FontBook::empty());
    assert!(svg.contains(">reply on</tspan>"));
    assert!(svg.contains(
        r##"<tspan dx="10" font-weight="900" fill="#22d3ee">whisper-box.xyz</tspan>"##
    ));
}

#[test]
fn pattern_gradients_are_prefixed() {
    let drawing = render(PatternId::AuroraWaves, PatternId::AuroraWaves.default_opacity());
    let svg = drawing_to_svg(&drawing, 300.0, 200.0);
    assert!(svg.contains(r#"id="p-aurora""#));
    assert!(svg.contains("url(#p-aurora)"));
    assert!(svg.contains(r#"viewBox="0 0 600 600""#));
}

#[test]
fn stretch_patterns_disable_aspect_ratio() {
    let drawing = render(PatternId::SoftWaves, PatternId::SoftWaves.default_opacity());
    let svg = drawing_to_svg(&drawing, 600.0, 600.0);
    let expected = match drawing.aspect {
        AspectMode::Slice => "xMidYMid slice",
        AspectMode::Stretch => "none",
    };
    assert!(svg.contains(&format!(r#"preserveAspectRatio="{expected}""#)));
}
