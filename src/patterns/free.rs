use crate::{
    foundation::math::spread,
    patterns::{
        PatternId,
        drawing::{AspectMode, Drawing, Shape, Style, horizontal_wave},
    },
};

pub(super) fn paper_grain(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::PaperGrain, AspectMode::Slice, opacity);
    for i in 0..300 {
        d.push(Shape::circle(
            spread(i, 47, 123, 600),
            spread(i, 83, 217, 600),
            0.6,
            Style::white_fill().opacity(0.25),
        ));
    }
    d
}

pub(super) fn halftone(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::Halftone, AspectMode::Slice, opacity);
    for row in 0..15u32 {
        for col in 0..15u32 {
            let radius = 1.5 + f64::from((row + col) % 3);
            d.push(Shape::circle(
                f64::from(20 + col * 40),
                f64::from(20 + row * 40),
                radius,
                Style::white_fill().opacity(0.3),
            ));
        }
    }
    d
}

pub(super) fn grid_dots(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::GridDots, AspectMode::Slice, opacity);
    for row in 0..20u32 {
        for col in 0..20u32 {
            d.push(Shape::circle(
                f64::from(15 + col * 30),
                f64::from(15 + row * 30),
                1.2,
                Style::white_fill().opacity(0.4),
            ));
        }
    }
    d
}

pub(super) fn soft_waves(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::SoftWaves, AspectMode::Stretch, opacity);
    for i in 0..6u32 {
        let y = f64::from(80 + i * 80);
        d.push(Shape::path(
            horizontal_wave(y, y - 30.0),
            Style::white_stroke(1.5).opacity(0.3),
        ));
    }
    d
}

pub(super) fn simple_lines(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::SimpleLines, AspectMode::Stretch, opacity);
    for i in 0..30u32 {
        let y = f64::from(i * 20);
        d.push(Shape::line(
            0.0,
            y,
            600.0,
            y,
            Style::white_stroke(1.0).opacity(0.25),
        ));
    }
    d
}

pub(super) fn basic_circles(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::BasicCircles, AspectMode::Slice, opacity);
    for i in 0..12u32 {
        d.push(Shape::circle(
            spread(i, 97, 100, 600),
            spread(i, 127, 100, 600),
            f64::from(20 + (i % 3) * 10),
            Style::white_stroke(1.0).opacity(0.3),
        ));
    }
    d
}

pub(super) fn minimal_cross(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::MinimalCross, AspectMode::Slice, opacity);
    let style = Style::white_stroke(1.0).opacity(0.3);
    for row in 0..10u32 {
        for col in 0..10u32 {
            let cx = f64::from(30 + col * 60);
            let cy = f64::from(30 + row * 60);
            d.push(Shape::Group(vec![
                Shape::line(cx, cy - 5.0, cx, cy + 5.0, style),
                Shape::line(cx - 5.0, cy, cx + 5.0, cy, style),
            ]));
        }
    }
    d
}

pub(super) fn light_texture(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::LightTexture, AspectMode::Slice, opacity);
    for i in 0..40u32 {
        let size = f64::from(3 + (i % 2) * 2);
        d.push(Shape::rect(
            spread(i, 61, 17, 590),
            spread(i, 103, 29, 590),
            size,
            size,
            Style::white_fill().opacity(0.2),
        ));
    }
    d
}
