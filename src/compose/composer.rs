use crate::{
    catalog::{Theme, get_theme},
    compose::{
        presentation::{CardPresentation, FontStyle, HeaderStyle},
        scene::{
            BlendMode, Border, Caption, CardSource, Fidelity, Footer, Header, PatternLayer, Pill,
            Scene, Shadow, TextRun,
        },
    },
    foundation::{
        core::{Color, Rect},
        error::WhisperResult,
    },
    patterns::{Opacity, render},
};

pub const BRAND_LABEL: &str = "Whisper Box";
pub const FOOTER_LEAD: &str = "reply on";
pub const FOOTER_LINK: &str = "whisper-box.xyz";

/// Mean advance of heavy uppercase header text, in em.
const LABEL_ADVANCE_EM: f64 = 0.68;

/// Per-fidelity sizing table. Export values are tuned for legibility at 1080 units and are not a
/// multiple of the preview values.
struct Metrics {
    size: f64,
    padding: f64,
    corner_radius: f64,

    pattern_layer_opacity: f64,
    pattern_blend: BlendMode,

    brand_font: f64,
    brand_line: f64,
    brand_pad: (f64, f64),
    brand_fill_alpha: f64,

    theme_name_font: f64,
    theme_name_line: f64,

    question_icon: f64,

    bar: (f64, f64),

    badge_font: f64,
    badge_line: f64,

    caption_font: f64,
    caption_font_hand: f64,
    caption_line_height: f64,
    caption_inset: f64,
    caption_gap: f64,
    caption_shadow: Shadow,
    /// Pure black captions drop their shadow.
    black_drops_shadow: bool,

    footer_font: f64,
    footer_line: f64,
    footer_weights: (u16, u16),
    footer_pad: (f64, f64),
    footer_border: Border,
    footer_link: Color,
    footer_gap: f64,
    footer_shadow: Option<Shadow>,
}

const fn black(alpha: u8) -> Color {
    Color::rgba(0, 0, 0, alpha)
}

const fn white(alpha: u8) -> Color {
    Color::rgba(255, 255, 255, alpha)
}

const PREVIEW: Metrics = Metrics {
    size: 360.0,
    padding: 40.0,
    corner_radius: 40.0,
    pattern_layer_opacity: 0.4,
    pattern_blend: BlendMode::Overlay,
    brand_font: 10.0,
    brand_line: 15.0,
    brand_pad: (24.0, 8.0),
    brand_fill_alpha: 0.10,
    theme_name_font: 12.0,
    theme_name_line: 16.0,
    question_icon: 32.0,
    bar: (64.0, 6.0),
    badge_font: 30.0,
    badge_line: 36.0,
    caption_font: 22.0,
    caption_font_hand: 32.0,
    caption_line_height: 1.25,
    caption_inset: 0.0,
    caption_gap: 12.0,
    caption_shadow: Shadow {
        dx: 0.0,
        dy: 8.0,
        blur: 5.0,
        color: black(20),
    },
    black_drops_shadow: false,
    footer_font: 10.0,
    footer_line: 15.0,
    footer_weights: (700, 700),
    footer_pad: (24.0, 8.0),
    footer_border: Border {
        color: white(26),
        width: 1.0,
    },
    footer_link: Color::hex(0x4ECDC4),
    footer_gap: 3.0,
    footer_shadow: None,
};

const EXPORT: Metrics = Metrics {
    size: 1080.0,
    padding: 120.0,
    corner_radius: 0.0,
    pattern_layer_opacity: 0.5,
    pattern_blend: BlendMode::Normal,
    brand_font: 36.0,
    brand_line: 40.0,
    brand_pad: (48.0, 16.0),
    brand_fill_alpha: 0.25,
    theme_name_font: 48.0,
    theme_name_line: 48.0,
    question_icon: 64.0,
    bar: (128.0, 12.0),
    badge_font: 60.0,
    badge_line: 60.0,
    caption_font: 100.0,
    caption_font_hand: 120.0,
    caption_line_height: 1.1,
    caption_inset: 40.0,
    caption_gap: 0.0,
    caption_shadow: Shadow {
        dx: 0.0,
        dy: 20.0,
        blur: 60.0,
        color: black(77),
    },
    black_drops_shadow: true,
    footer_font: 26.0,
    footer_line: 31.0,
    footer_weights: (800, 900),
    footer_pad: (60.0, 20.0),
    footer_border: Border {
        color: white(38),
        width: 2.0,
    },
    footer_link: Color::hex(0x22D3EE),
    footer_gap: 10.0,
    footer_shadow: Some(Shadow {
        dx: 0.0,
        dy: 15.0,
        blur: 35.0,
        color: black(51),
    }),
};

fn metrics(fidelity: Fidelity) -> &'static Metrics {
    match fidelity {
        Fidelity::Preview => &PREVIEW,
        Fidelity::Export => &EXPORT,
    }
}

/// Approximate advance of a single-line run, for sizing the pills behind it.
pub(crate) fn estimate_run_width(run: &TextRun, advance_em: f64) -> f64 {
    let n = run.text.chars().count() as f64;
    (n * (advance_em + run.letter_spacing_em) * run.font_size).max(0.0)
}

fn centered(cx: f64, top: f64, w: f64, h: f64) -> Rect {
    Rect::new(cx - w / 2.0, top, cx + w / 2.0, top + h)
}

fn elevated() -> Shadow {
    Shadow {
        dx: 0.0,
        dy: 25.0,
        blur: 50.0,
        color: black(64),
    }
}

fn header(theme: &Theme, style: HeaderStyle, m: &Metrics, cx: f64, top: f64) -> Header {
    match style {
        HeaderStyle::BrandedBadge => {
            let label = TextRun {
                text: BRAND_LABEL.to_uppercase(),
                font_size: m.brand_font,
                weight: 900,
                letter_spacing_em: 0.4,
                color: Color::WHITE,
                opacity: 1.0,
            };
            let w = estimate_run_width(&label, LABEL_ADVANCE_EM) + 2.0 * m.brand_pad.0;
            let h = m.brand_line + 2.0 * m.brand_pad.1;
            Header::BrandedBadge {
                pill: Pill {
                    frame: centered(cx, top, w, h),
                    radius: h / 2.0,
                    fill: Color::WHITE.with_alpha(m.brand_fill_alpha),
                    border: Some(Border {
                        color: white(51),
                        width: 1.0,
                    }),
                    shadow: Some(elevated()),
                },
                label,
            }
        }
        HeaderStyle::ThemeName => {
            let label = TextRun {
                text: theme.name.to_uppercase(),
                font_size: m.theme_name_font,
                weight: 900,
                letter_spacing_em: 0.3,
                color: Color::WHITE,
                opacity: 0.8,
            };
            let w = estimate_run_width(&label, LABEL_ADVANCE_EM);
            Header::ThemeName {
                frame: centered(cx, top, w, m.theme_name_line),
                label,
            }
        }
        HeaderStyle::QuestionMark => Header::QuestionMark {
            frame: centered(cx, top, m.question_icon, m.question_icon),
            color: Color::WHITE,
            opacity: 0.8,
        },
        HeaderStyle::MinimalLine => {
            let (w, h) = m.bar;
            Header::MinimalLine {
                pill: Pill {
                    frame: centered(cx, top, w, h),
                    radius: h / 2.0,
                    fill: white(77),
                    border: None,
                    shadow: None,
                },
            }
        }
        HeaderStyle::DefaultBadge => Header::DefaultBadge {
            frame: centered(cx, top, m.badge_line, m.badge_line),
            glyph: TextRun {
                text: theme.badge.to_owned(),
                font_size: m.badge_font,
                weight: 400,
                letter_spacing_em: 0.0,
                color: Color::WHITE,
                opacity: 1.0,
            },
            shadow: Shadow {
                dx: 0.0,
                dy: 4.0,
                blur: 3.0,
                color: black(26),
            },
        },
    }
}

fn footer(m: &Metrics, cx: f64, bottom: f64) -> Footer {
    let lead = TextRun {
        text: FOOTER_LEAD.to_owned(),
        font_size: m.footer_font,
        weight: m.footer_weights.0,
        letter_spacing_em: 0.1,
        color: Color::WHITE,
        opacity: 1.0,
    };
    let link = TextRun {
        text: FOOTER_LINK.to_owned(),
        font_size: m.footer_font,
        weight: m.footer_weights.1,
        letter_spacing_em: 0.1,
        color: m.footer_link,
        opacity: 1.0,
    };
    let text_w = estimate_run_width(&lead, 0.55) + m.footer_gap + estimate_run_width(&link, 0.55);
    let w = text_w + 2.0 * (m.footer_pad.0 + m.footer_border.width);
    let h = m.footer_line + 2.0 * (m.footer_pad.1 + m.footer_border.width);
    Footer {
        pill: Pill {
            frame: centered(cx, bottom - h, w, h),
            radius: h / 2.0,
            fill: black(64),
            border: Some(m.footer_border),
            shadow: m.footer_shadow,
        },
        lead,
        link,
        gap: m.footer_gap,
    }
}

fn caption(
    text: &str,
    font: FontStyle,
    color: Color,
    m: &Metrics,
    frame: Rect,
) -> Caption {
    Caption {
        text: text.to_owned(),
        font,
        families: font.families(),
        weight: font.weight(),
        italic: font.italic(),
        uppercase: font.uppercase(),
        letter_spacing_em: font.letter_spacing_em(),
        font_size: match font {
            FontStyle::Hand => m.caption_font_hand,
            FontStyle::Modern | FontStyle::Serif => m.caption_font,
        },
        line_height: m.caption_line_height,
        color,
        shadow: (!(m.black_drops_shadow && color.is_pure_black())).then_some(m.caption_shadow),
        frame,
    }
}

/// Composes `theme` + `presentation` + `caption` into a scene at `fidelity`.
///
/// Pure: equal inputs give equal scenes. The theme argument wins over
/// `presentation.selected_theme_key`.
#[tracing::instrument(
    level = "debug",
    skip(theme, presentation, caption_text),
    fields(theme = theme.id, header = %presentation.header_style, font = %presentation.font_style)
)]
pub fn compose(
    theme: &'static Theme,
    presentation: &CardPresentation,
    caption_text: &str,
    fidelity: Fidelity,
) -> Scene {
    let m = metrics(fidelity);
    let cx = m.size / 2.0;
    let inner = Rect::new(m.padding, m.padding, m.size - m.padding, m.size - m.padding);

    let header = header(theme, presentation.header_style, m, cx, inner.y0);
    let footer = footer(m, cx, inner.y1);

    let pad = m.caption_inset;
    let top = header.frame().y1 + m.caption_gap + pad;
    let bottom = (footer.pill.frame.y0 - m.caption_gap - pad).max(top);
    let caption_frame = Rect::new(inner.x0 + pad, top, inner.x1 - pad, bottom);

    // Both fidelities draw the pattern at half strength; only the layer differs.
    let drawing = render(theme.pattern, Opacity::HALF);

    Scene {
        fidelity,
        size: m.size,
        corner_radius: m.corner_radius,
        padding: m.padding,
        background: theme.gradient.clone(),
        pattern: PatternLayer {
            opacity: m.pattern_layer_opacity,
            blend: m.pattern_blend,
            drawing,
        },
        header,
        caption: caption(
            caption_text,
            presentation.font_style,
            presentation.text_color,
            m,
            caption_frame,
        ),
        footer,
        source: CardSource {
            theme_id: theme.id,
            header_style: presentation.header_style,
            font_style: presentation.font_style,
            text_color: presentation.text_color,
            caption: caption_text.to_owned(),
        },
    }
}

/// Resolves `presentation.selected_theme_key` in the catalog, then composes.
pub fn compose_selected(
    presentation: &CardPresentation,
    caption_text: &str,
    fidelity: Fidelity,
) -> WhisperResult<Scene> {
    let theme = get_theme(&presentation.selected_theme_key)?;
    Ok(compose(theme, presentation, caption_text, fidelity))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
