use crate::{
    foundation::{
        core::{Point, Rect},
        math::spread,
    },
    patterns::{
        PatternId,
        drawing::{
            AspectMode, Drawing, GradientDef, Paint, QuadPath, Rotation, Shape, Style,
            horizontal_wave,
        },
    },
};

pub(super) fn concrete_texture(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::ConcreteTexture, AspectMode::Slice, opacity);
    for i in 0..60u32 {
        let x = spread(i, 73, 41, 580);
        let y = spread(i, 127, 89, 580);
        let w = f64::from((i % 3) * 15 + 12);
        let h = f64::from((i % 4) * 8 + 6);
        d.push(Shape::Rect {
            rect: Rect::new(x, y, x + w, y + h),
            rotation: Some(Rotation {
                degrees: f64::from((i * 17) % 90),
                pivot: Point::new(x, y),
            }),
            style: Style::white_fill().opacity(0.2),
        });
    }
    d
}

pub(super) fn candy_dots(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::CandyDots, AspectMode::Slice, opacity);
    for i in 0..35u32 {
        d.push(Shape::circle(
            spread(i, 89, 67, 600),
            spread(i, 137, 103, 600),
            f64::from(5 + (i % 3) * 3),
            Style::white_fill().opacity(0.4),
        ));
    }
    d
}

pub(super) fn water_ripples(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::WaterRipples, AspectMode::Slice, opacity);
    for i in 0..6u32 {
        d.push(Shape::circle(
            300.0,
            300.0,
            f64::from(60 + i * 60),
            Style::white_stroke(2.0).opacity(0.4 - f64::from(i) * 0.05),
        ));
    }
    d
}

pub(super) fn marble_veins(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::MarbleVeins, AspectMode::Stretch, opacity);
    for i in 0..12u32 {
        let x = f64::from(i * 50);
        let path = QuadPath::start(x, 0.0)
            .quad(x + 30.0, f64::from(120 + i * 25), x + 15.0, 300.0)
            .smooth(x + 8.0, 600.0)
            .finish();
        d.push(Shape::path(path, Style::white_stroke(2.5).opacity(0.3)));
    }
    d
}

pub(super) fn hexagon_pattern(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::HexagonPattern, AspectMode::Slice, opacity);
    for row in 0..8u32 {
        for col in 0..7u32 {
            let x = f64::from(40 + col * 80 + (row % 2) * 40);
            let y = f64::from(40 + row * 70);
            d.push(Shape::Polygon {
                points: vec![
                    Point::new(x, y - 25.0),
                    Point::new(x + 22.0, y - 12.5),
                    Point::new(x + 22.0, y + 12.5),
                    Point::new(x, y + 25.0),
                    Point::new(x - 22.0, y + 12.5),
                    Point::new(x - 22.0, y - 12.5),
                ],
                style: Style::white_stroke(1.5).opacity(0.35),
            });
        }
    }
    d
}

pub(super) fn wave_gradient(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::WaveGradient, AspectMode::Stretch, opacity).gradient(
        GradientDef::linear("wave-grad", (0.0, 0.0), (1.0, 1.0))
            .white(0.0, 0.4)
            .white(1.0, 0.1),
    );
    for i in 0..8u32 {
        let y = f64::from(60 + i * 70);
        d.push(Shape::path(
            horizontal_wave(y, y - 30.0),
            Style::stroke(Paint::Gradient("wave-grad"), 3.0).opacity(0.35),
        ));
    }
    d
}

pub(super) fn dot_matrix(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::DotMatrix, AspectMode::Slice, opacity);
    for row in 0..25u32 {
        for col in 0..25u32 {
            let radius = f64::from((row + col) % 4) * 0.8 + 0.8;
            d.push(Shape::circle(
                f64::from(12 + col * 24),
                f64::from(12 + row * 24),
                radius,
                Style::white_fill().opacity(0.35),
            ));
        }
    }
    d
}

pub(super) fn diagonal_lines(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::DiagonalLines, AspectMode::Stretch, opacity);
    for i in 0..30i32 {
        let accent = i % 5 == 0;
        let x = f64::from(i * 20);
        let style = if accent {
            Style::white_stroke(2.0).opacity(0.35)
        } else {
            Style::white_stroke(1.0).opacity(0.2)
        };
        d.push(Shape::line(x - 100.0, 0.0, x + 500.0, 600.0, style));
    }
    d
}
