use super::*;
use crate::{catalog::get_theme, compose::scene::Header};

fn ocean() -> &'static Theme {
    get_theme("ocean").unwrap()
}

#[test]
fn composition_is_idempotent() {
    let p = CardPresentation::default();
    let a = compose(ocean(), &p, "same words", Fidelity::Export);
    let b = compose(ocean(), &p, "same words", Fidelity::Export);
    assert_eq!(a, b);
}

#[test]
fn preview_and_export_agree_on_everything_but_size() {
    let p = CardPresentation::default()
        .with_header(HeaderStyle::ThemeName)
        .with_font(FontStyle::Hand)
        .with_text_color(Color::hex(0xCBD5E1));
    let preview = compose(ocean(), &p, "you light up every room", Fidelity::Preview);
    let export = compose(ocean(), &p, "you light up every room", Fidelity::Export);

    assert_eq!(preview.source, export.source);
    assert_eq!(preview.source.fingerprint(), export.source.fingerprint());
    assert_eq!(preview.header.style(), export.header.style());
    assert_eq!(preview.caption.font, export.caption.font);
    assert_eq!(preview.caption.color, export.caption.color);
    assert_eq!(preview.caption.text, export.caption.text);
    assert_eq!(preview.background, export.background);
    assert_eq!(preview.pattern.drawing, export.pattern.drawing);

    assert_eq!(preview.size, 360.0);
    assert_eq!(export.size, 1080.0);
    assert_eq!(export.padding, 120.0);
    assert_eq!(export.corner_radius, 0.0);
}

#[test]
fn export_sizes_are_not_a_uniform_multiple() {
    let p = CardPresentation::default();
    let preview = compose(ocean(), &p, "x", Fidelity::Preview);
    let export = compose(ocean(), &p, "x", Fidelity::Export);
    let scale = export.size / preview.size;
    let caption_ratio = export.caption.font_size / preview.caption.font_size;
    assert!((caption_ratio - scale).abs() > 0.5);
}

#[test]
fn pattern_layer_differs_by_fidelity() {
    let p = CardPresentation::default();
    let preview = compose(ocean(), &p, "x", Fidelity::Preview);
    let export = compose(ocean(), &p, "x", Fidelity::Export);
    assert_eq!(preview.pattern.opacity, 0.4);
    assert_eq!(preview.pattern.blend, BlendMode::Overlay);
    assert_eq!(export.pattern.opacity, 0.5);
    assert_eq!(export.pattern.blend, BlendMode::Normal);
    assert_eq!(export.pattern.drawing.opacity, 0.5);
}

#[test]
fn black_serif_minimal_line_has_no_shadow() {
    let p = CardPresentation::default()
        .with_header(HeaderStyle::MinimalLine)
        .with_font(FontStyle::Serif)
        .with_text_color(Color::BLACK);
    let scene = compose(ocean(), &p, "hello world", Fidelity::Export);

    assert!(matches!(scene.header, Header::MinimalLine { .. }));
    assert_eq!(scene.caption.font, FontStyle::Serif);
    assert!(scene.caption.italic);
    assert!(!scene.caption.uppercase);
    assert_eq!(scene.caption.color, Color::BLACK);
    assert!(scene.caption.shadow.is_none());
    assert_eq!(scene.caption.display_text(), "\"hello world\"");
}

#[test]
fn black_preview_caption_keeps_its_shadow() {
    let p = CardPresentation::default().with_text_color(Color::BLACK);
    let preview = compose(ocean(), &p, "hello world", Fidelity::Preview);
    let export = compose(ocean(), &p, "hello world", Fidelity::Export);
    assert_eq!(preview.caption.shadow, Some(PREVIEW.caption_shadow));
    assert!(export.caption.shadow.is_none());
}

#[test]
fn modern_caption_is_heavy_italic_uppercase() {
    let scene = compose(ocean(), &CardPresentation::default(), "psst", Fidelity::Export);
    assert_eq!(scene.caption.weight, 900);
    assert!(scene.caption.italic);
    assert_eq!(scene.caption.display_text(), "\"PSST\"");
    assert!(scene.caption.shadow.is_some());
    assert_eq!(scene.caption.font_size, 100.0);
}

#[test]
fn hand_caption_is_set_larger() {
    let p = CardPresentation::default().with_font(FontStyle::Hand);
    assert_eq!(compose(ocean(), &p, "x", Fidelity::Preview).caption.font_size, 32.0);
    assert_eq!(compose(ocean(), &p, "x", Fidelity::Export).caption.font_size, 120.0);
}

#[test]
fn frames_stack_header_caption_footer() {
    for style in HeaderStyle::ALL {
        for fidelity in [Fidelity::Preview, Fidelity::Export] {
            let p = CardPresentation::default().with_header(style);
            let s = compose(ocean(), &p, "stacked", fidelity);
            let header = s.header.frame();
            let caption = s.caption.frame;
            let footer = s.footer.pill.frame;
            assert_eq!(s.header.style(), style);
            assert!(header.y0 >= s.padding - 1e-9, "{style} {fidelity:?}");
            assert!(header.y1 <= caption.y0, "{style} {fidelity:?}");
            assert!(caption.y1 <= footer.y0, "{style} {fidelity:?}");
            assert!(footer.y1 <= s.size - s.padding + 1e-9, "{style} {fidelity:?}");
            assert!(caption.width() > 0.0 && caption.height() > 0.0);
        }
    }
}

#[test]
fn theme_name_header_spells_the_theme() {
    let p = CardPresentation::default().with_header(HeaderStyle::ThemeName);
    let s = compose(get_theme("galaxy").unwrap(), &p, "x", Fidelity::Preview);
    let Header::ThemeName { label, .. } = &s.header else {
        panic!("expected theme name header");
    };
    assert_eq!(label.text, "GALAXY BURST");
    assert_eq!(label.opacity, 0.8);
}

#[test]
fn footer_links_to_the_app() {
    let preview = compose(ocean(), &CardPresentation::default(), "x", Fidelity::Preview);
    let export = compose(ocean(), &CardPresentation::default(), "x", Fidelity::Export);
    assert_eq!(preview.footer.lead.text, "reply on");
    assert_eq!(export.footer.link.text, "whisper-box.xyz");
    assert_eq!(export.footer.link.color, Color::hex(0x22D3EE));
    assert_eq!(export.footer.link.weight, 900);
}

#[test]
fn compose_selected_rejects_unknown_theme() {
    let mut p = CardPresentation::default();
    p.selected_theme_key = "missing".to_owned();
    assert!(compose_selected(&p, "x", Fidelity::Preview).is_err());
    p.selected_theme_key = "galaxy".to_owned();
    let s = compose_selected(&p, "x", Fidelity::Preview).unwrap();
    assert_eq!(s.source.theme_id, "galaxy");
}
