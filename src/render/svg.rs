use crate::{
    compose::{
        presentation::FontStyle,
        scene::{BlendMode, Caption, Footer, Header, Pill, Scene, Shadow, TextRun},
    },
    foundation::core::{Color, Point, Rect},
    patterns::{
        AspectMode, Drawing, PATTERN_CANVAS,
        drawing::{GradientDef, GradientKind, Paint, Shape, Style},
    },
    render::{fonts::FontBook, text::CaptionLayout, text::layout_caption},
};

const EMOJI_FAMILIES: &[&str] = &[
    "Noto Color Emoji",
    "Apple Color Emoji",
    "Segoe UI Emoji",
    "sans-serif",
];

/// Baseline offset from a line's vertical center, in em.
const BASELINE_SHIFT_EM: f64 = 0.35;

const PATTERN_ID_PREFIX: &str = "p-";

/// Lays the caption out against `fonts` and serializes the whole scene.
pub fn scene_svg(scene: &Scene, fonts: &FontBook) -> String {
    let layout = layout_caption(&scene.caption, fonts);
    scene_to_svg(scene, &layout)
}

/// Serializes a scene to a standalone SVG document, using an already computed caption layout.
///
/// The document is `scene.size` units square. Layers appear in paint order.
pub fn scene_to_svg(scene: &Scene, caption: &CaptionLayout) -> String {
    let size = scene.size;
    let mut svg = SvgBuf::default();
    svg.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#,
        s = num(size)
    ));

    svg.push("<defs>");
    svg.push(background_gradient(scene));
    svg.push(format!(
        r#"<clipPath id="card-clip"><rect width="{s}" height="{s}" rx="{r}" ry="{r}"/></clipPath>"#,
        s = num(size),
        r = num(scene.corner_radius)
    ));
    let mut filters = Filters::default();
    collect_filters(scene, &mut filters);
    for (id, shadow) in &filters.defs {
        svg.push(drop_shadow_filter(id, shadow));
    }
    svg.push("</defs>");

    svg.push(r#"<g clip-path="url(#card-clip)">"#);
    svg.push(format!(
        r#"<rect width="{s}" height="{s}" fill="url(#card-bg)"/>"#,
        s = num(size)
    ));

    let blend = match scene.pattern.blend {
        BlendMode::Normal => String::new(),
        BlendMode::Overlay => r#" style="mix-blend-mode:overlay""#.to_owned(),
    };
    svg.push(format!(
        r#"<g opacity="{}"{blend}>"#,
        num(scene.pattern.opacity)
    ));
    svg.push(nested_drawing(&scene.pattern.drawing, size, size));
    svg.push("</g>");

    header_svg(&mut svg, &scene.header, &filters);
    caption_svg(&mut svg, &scene.caption, caption, &filters);
    footer_svg(&mut svg, &scene.footer, &filters);

    svg.push("</g></svg>");
    svg.finish()
}

/// Standalone SVG document for a pattern drawing, fitted into `width` x `height`.
pub fn drawing_to_svg(drawing: &Drawing, width: f64, height: f64) -> String {
    let mut svg = SvgBuf::default();
    svg.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(width),
        h = num(height)
    ));
    svg.push(nested_drawing(drawing, width, height));
    svg.push("</svg>");
    svg.finish()
}

#[derive(Default)]
struct SvgBuf(String);

impl SvgBuf {
    fn push(&mut self, s: impl AsRef<str>) {
        self.0.push_str(s.as_ref());
    }

    fn finish(self) -> String {
        self.0
    }
}

/// Filter ids keyed by the element they shadow.
#[derive(Default)]
struct Filters {
    defs: Vec<(&'static str, Shadow)>,
}

impl Filters {
    fn add(&mut self, id: &'static str, shadow: Option<Shadow>) {
        if let Some(shadow) = shadow {
            self.defs.push((id, shadow));
        }
    }

    fn attr(&self, id: &str) -> String {
        if self.defs.iter().any(|(d, _)| *d == id) {
            format!(r#" filter="url(#{id})""#)
        } else {
            String::new()
        }
    }
}

fn collect_filters(scene: &Scene, filters: &mut Filters) {
    match &scene.header {
        Header::BrandedBadge { pill, .. } => filters.add("header-shadow", pill.shadow),
        Header::DefaultBadge { shadow, .. } => filters.add("header-shadow", Some(*shadow)),
        Header::ThemeName { .. } | Header::QuestionMark { .. } | Header::MinimalLine { .. } => {}
    }
    filters.add("caption-shadow", scene.caption.shadow);
    filters.add("footer-shadow", scene.footer.pill.shadow);
}

fn drop_shadow_filter(id: &str, shadow: &Shadow) -> String {
    format!(
        r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="{dx}" dy="{dy}" stdDeviation="{sd}" flood-color="{c}" flood-opacity="{o}"/></filter>"#,
        dx = num(shadow.dx),
        dy = num(shadow.dy),
        sd = num(shadow.blur / 2.0),
        c = shadow.color.to_svg_rgb(),
        o = num(shadow.color.alpha_f64()),
    )
}

/// CSS `linear-gradient` angle mapped onto the square canvas in user space.
fn background_gradient(scene: &Scene) -> String {
    let size = scene.size;
    let theta = scene.background.angle_deg.to_radians();
    let (dx, dy) = (theta.sin(), -theta.cos());
    let half = (size * theta.sin().abs() + size * theta.cos().abs()) / 2.0;
    let c = size / 2.0;

    let mut out = format!(
        r#"<linearGradient id="card-bg" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        num(c - dx * half),
        num(c - dy * half),
        num(c + dx * half),
        num(c + dy * half),
    );
    for stop in scene.background.stops.iter() {
        out.push_str(&stop_svg(
            stop.percent / 100.0,
            stop.color,
            stop.color.alpha_f64(),
        ));
    }
    out.push_str("</linearGradient>");
    out
}

fn stop_svg(offset: f64, color: Color, opacity: f64) -> String {
    let opacity = if opacity < 1.0 {
        format!(r#" stop-opacity="{}""#, num(opacity))
    } else {
        String::new()
    };
    format!(
        r#"<stop offset="{}" stop-color="{}"{opacity}/>"#,
        num(offset),
        color.to_svg_rgb()
    )
}

fn nested_drawing(drawing: &Drawing, width: f64, height: f64) -> String {
    let aspect = match drawing.aspect {
        AspectMode::Slice => "xMidYMid slice",
        AspectMode::Stretch => "none",
    };
    let mut out = format!(
        r#"<svg x="0" y="0" width="{}" height="{}" viewBox="0 0 {c} {c}" preserveAspectRatio="{aspect}">"#,
        num(width),
        num(height),
        c = num(PATTERN_CANVAS),
    );
    if !drawing.gradients.is_empty() {
        out.push_str("<defs>");
        for def in &drawing.gradients {
            out.push_str(&gradient_def(def));
        }
        out.push_str("</defs>");
    }
    out.push_str(&format!(r#"<g opacity="{}">"#, num(drawing.opacity)));
    for shape in &drawing.shapes {
        shape_svg(&mut out, shape);
    }
    out.push_str("</g></svg>");
    out
}

fn gradient_def(def: &GradientDef) -> String {
    let (open, close) = match def.kind {
        GradientKind::Linear { x1, y1, x2, y2 } => (
            format!(
                r#"<linearGradient id="{PATTERN_ID_PREFIX}{}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                def.id,
                num(x1),
                num(y1),
                num(x2),
                num(y2)
            ),
            "</linearGradient>",
        ),
        GradientKind::Radial => (
            format!(r#"<radialGradient id="{PATTERN_ID_PREFIX}{}">"#, def.id),
            "</radialGradient>",
        ),
    };
    let mut out = open;
    for stop in &def.stops {
        out.push_str(&stop_svg(stop.offset, stop.color, stop.opacity));
    }
    out.push_str(close);
    out
}

fn paint_attr(name: &str, paint: Paint) -> String {
    match paint {
        Paint::None => format!(r#" {name}="none""#),
        Paint::Solid(color) => {
            let mut s = format!(r#" {name}="{}""#, color.to_svg_rgb());
            if !color.is_opaque() {
                s.push_str(&format!(r#" {name}-opacity="{}""#, num(color.alpha_f64())));
            }
            s
        }
        Paint::Gradient(id) => format!(r#" {name}="url(#{PATTERN_ID_PREFIX}{id})""#),
    }
}

fn style_attrs(style: &Style) -> String {
    let mut s = paint_attr("fill", style.fill);
    if let Some(stroke) = style.stroke {
        s.push_str(&paint_attr("stroke", stroke.paint));
        s.push_str(&format!(r#" stroke-width="{}""#, num(stroke.width)));
        if let Some([on, off]) = stroke.dash {
            s.push_str(&format!(r#" stroke-dasharray="{} {}""#, num(on), num(off)));
        }
    }
    if style.opacity < 1.0 {
        s.push_str(&format!(r#" opacity="{}""#, num(style.opacity)));
    }
    s
}

fn shape_svg(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Circle {
            center,
            radius,
            style,
        } => out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            num(center.x),
            num(center.y),
            num(*radius),
            style_attrs(style)
        )),
        Shape::Ellipse {
            center,
            rx,
            ry,
            style,
        } => out.push_str(&format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{}/>"#,
            num(center.x),
            num(center.y),
            num(*rx),
            num(*ry),
            style_attrs(style)
        )),
        Shape::Line { from, to, style } => out.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            style_attrs(style)
        )),
        Shape::Rect {
            rect,
            rotation,
            style,
        } => {
            let transform = rotation
                .map(|r| {
                    format!(
                        r#" transform="rotate({} {} {})""#,
                        num(r.degrees),
                        num(r.pivot.x),
                        num(r.pivot.y)
                    )
                })
                .unwrap_or_default();
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}"{transform}{}/>"#,
                num(rect.x0),
                num(rect.y0),
                num(rect.width()),
                num(rect.height()),
                style_attrs(style)
            ));
        }
        Shape::Path { path, style } => out.push_str(&format!(
            r#"<path d="{}"{}/>"#,
            path.to_svg(),
            style_attrs(style)
        )),
        Shape::Polygon { points, style } => out.push_str(&format!(
            r#"<polygon points="{}"{}/>"#,
            points_attr(points),
            style_attrs(style)
        )),
        Shape::Group(children) => {
            out.push_str("<g>");
            for child in children {
                shape_svg(out, child);
            }
            out.push_str("</g>");
        }
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn pill_svg(svg: &mut SvgBuf, pill: &Pill, filter: &str) {
    let mut attrs = paint_attr("fill", Paint::Solid(pill.fill));
    if let Some(border) = pill.border {
        attrs.push_str(&paint_attr("stroke", Paint::Solid(border.color)));
        attrs.push_str(&format!(r#" stroke-width="{}""#, num(border.width)));
    }
    svg.push(format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}"{attrs}{filter}/>"#,
        num(pill.frame.x0),
        num(pill.frame.y0),
        num(pill.frame.width()),
        num(pill.frame.height()),
        r = num(pill.radius),
    ));
}

fn family_attr(families: &[&str]) -> String {
    families
        .iter()
        .map(|f| match *f {
            "serif" | "sans-serif" | "cursive" | "fantasy" | "monospace" => (*f).to_owned(),
            named => format!("'{}'", escape(named)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_attrs(run: &TextRun) -> String {
    let mut s = format!(
        r#" font-size="{}" font-weight="{}" letter-spacing="{}""#,
        num(run.font_size),
        run.weight,
        num(run.letter_spacing_em * run.font_size)
    );
    s.push_str(&paint_attr("fill", Paint::Solid(run.color)));
    if run.opacity < 1.0 {
        s.push_str(&format!(r#" opacity="{}""#, num(run.opacity)));
    }
    s
}

fn centered_run(svg: &mut SvgBuf, run: &TextRun, frame: Rect, families: &[&str], filter: &str) {
    let c = frame.center();
    svg.push(format!(
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="{}"{}{filter}>{}</text>"#,
        num(c.x),
        num(c.y + BASELINE_SHIFT_EM * run.font_size),
        family_attr(families),
        run_attrs(run),
        escape(&run.text)
    ));
}

/// Circle with a question mark, drawn on a 24-unit grid.
fn question_icon(svg: &mut SvgBuf, frame: Rect, color: Color, opacity: f64) {
    let scale = frame.width() / 24.0;
    svg.push(format!(
        r#"<g transform="translate({} {}) scale({})" fill="none" stroke="{}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" opacity="{}">"#,
        num(frame.x0),
        num(frame.y0),
        num(scale),
        color.to_svg_rgb(),
        num(opacity * color.alpha_f64()),
    ));
    svg.push(r#"<circle cx="12" cy="12" r="10"/>"#);
    svg.push(r#"<path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/>"#);
    svg.push(r#"<path d="M12 17h.01"/>"#);
    svg.push("</g>");
}

fn header_svg(svg: &mut SvgBuf, header: &Header, filters: &Filters) {
    let label_families = FontStyle::Modern.families();
    let filter = filters.attr("header-shadow");
    match header {
        Header::BrandedBadge { pill, label } => {
            pill_svg(svg, pill, &filter);
            centered_run(svg, label, pill.frame, label_families, "");
        }
        Header::ThemeName { frame, label } => {
            centered_run(svg, label, *frame, label_families, "");
        }
        Header::QuestionMark {
            frame,
            color,
            opacity,
        } => question_icon(svg, *frame, *color, *opacity),
        Header::MinimalLine { pill } => pill_svg(svg, pill, ""),
        Header::DefaultBadge { frame, glyph, .. } => {
            centered_run(svg, glyph, *frame, EMOJI_FAMILIES, &filter);
        }
    }
}

fn caption_svg(svg: &mut SvgBuf, caption: &Caption, layout: &CaptionLayout, filters: &Filters) {
    let c = caption.frame.center();
    let top = c.y - layout.block_height() / 2.0;
    let mut attrs = format!(
        r#" text-anchor="middle" font-family="{}" font-size="{}" font-weight="{}" letter-spacing="{}""#,
        family_attr(caption.families),
        num(layout.font_size),
        caption.weight,
        num(caption.letter_spacing_em * layout.font_size),
    );
    if caption.italic {
        attrs.push_str(r#" font-style="italic""#);
    }
    attrs.push_str(&paint_attr("fill", Paint::Solid(caption.color)));

    svg.push(format!(
        "<g{}{}>",
        attrs,
        filters.attr("caption-shadow")
    ));
    for (i, line) in layout.lines.iter().enumerate() {
        let baseline =
            top + (i as f64 + 0.5) * layout.line_height + BASELINE_SHIFT_EM * layout.font_size;
        svg.push(format!(
            r#"<text x="{}" y="{}">{}</text>"#,
            num(c.x),
            num(baseline),
            escape(line)
        ));
    }
    svg.push("</g>");
}

fn footer_svg(svg: &mut SvgBuf, footer: &Footer, filters: &Filters) {
    pill_svg(svg, &footer.pill, &filters.attr("footer-shadow"));
    let c = footer.pill.frame.center();
    let size = footer.lead.font_size;
    let tspan = |run: &TextRun, dx: Option<f64>| {
        let dx = dx
            .map(|d| format!(r#" dx="{}""#, num(d)))
            .unwrap_or_default();
        format!(
            r#"<tspan{dx} font-weight="{}"{}>{}</tspan>"#,
            run.weight,
            paint_attr("fill", Paint::Solid(run.color)),
            escape(&run.text)
        )
    };
    svg.push(format!(
        r#"<text x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" letter-spacing="{}">{}{}</text>"#,
        num(c.x),
        num(c.y + BASELINE_SHIFT_EM * size),
        family_attr(FontStyle::Modern.families()),
        num(size),
        num(footer.lead.letter_spacing_em * size),
        tspan(&footer.lead, None),
        tspan(&footer.link, Some(footer.gap)),
    ));
}

/// Shortest decimal form, rounded to 1/1000 of a unit.
fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_owned() } else { r.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
