use std::f64::consts::PI;

use crate::{
    foundation::{
        core::{Color, Point},
        math::spread,
    },
    patterns::{
        PatternId,
        drawing::{
            AspectMode, Drawing, GradientDef, Paint, QuadPath, Shape, Style, horizontal_wave,
        },
    },
};

const THERMAL_BAND: Color = Color::hex(0xFF006E);

pub(super) fn volcanic_cracks(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::VolcanicCracks, AspectMode::Slice, opacity);
    for i in 0..15u32 {
        let path = QuadPath::start(spread(i, 113, 0, 600), spread(i, 71, 0, 600))
            .line(spread(i, 173, 0, 600), spread(i, 211, 0, 600))
            .line(spread(i, 241, 0, 600), spread(i, 157, 0, 600))
            .finish();
        d.push(Shape::path(path, Style::white_stroke(2.5).opacity(0.4)));
    }
    d
}

pub(super) fn chrome_reflection(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::ChromeReflection, AspectMode::Slice, opacity).gradient(
        GradientDef::linear("chrome-grad", (0.0, 0.0), (1.0, 1.0))
            .white(0.0, 0.5)
            .white(0.5, 0.2)
            .white(1.0, 0.4),
    );
    let paint = Paint::Gradient("chrome-grad");
    d.push(Shape::path(
        QuadPath::start(-50.0, 100.0)
            .quad(200.0, 50.0, 600.0, -50.0)
            .finish(),
        Style::stroke(paint, 100.0),
    ));
    d.push(Shape::path(
        QuadPath::start(0.0, 520.0)
            .quad(350.0, 480.0, 650.0, 600.0)
            .finish(),
        Style::stroke(paint, 120.0),
    ));
    d
}

pub(super) fn thermal_scan(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::ThermalScan, AspectMode::Stretch, opacity);
    for i in 0..25u32 {
        let y = f64::from(i * 24);
        let style = if i % 5 == 0 {
            Style::white_stroke(2.5).opacity(0.45)
        } else {
            Style::white_stroke(1.0).opacity(0.2)
        };
        d.push(Shape::line(0.0, y, 600.0, y, style));
    }
    d.push(Shape::rect(
        0.0,
        280.0,
        600.0,
        4.0,
        Style::fill(Paint::Solid(THERMAL_BAND)).opacity(0.5),
    ));
    d
}

pub(super) fn mist_layers(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::MistLayers, AspectMode::Slice, opacity)
        .gradient(GradientDef::radial("mist").white(0.0, 0.4).white(1.0, 0.0));
    let fill = Style::fill(Paint::Gradient("mist"));
    d.push(Shape::ellipse(150.0, 150.0, 220.0, 140.0, fill));
    d.push(Shape::ellipse(450.0, 350.0, 270.0, 170.0, fill));
    d
}

pub(super) fn liquid_flow(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::LiquidFlow, AspectMode::Stretch, opacity).gradient(
        GradientDef::linear("liquid-grad", (0.0, 0.0), (1.0, 1.0))
            .white(0.0, 0.5)
            .white(0.5, 0.8)
            .white(1.0, 0.3),
    );
    for i in 0..10u32 {
        let x = f64::from(i * 60);
        let path = QuadPath::start(x, 0.0)
            .quad(x + 50.0, f64::from(100 + i * 40), x + 30.0, f64::from(200 + i * 30))
            .smooth(x + 20.0, f64::from(400 + i * 20))
            .quad(x + 40.0, f64::from(500 + i * 15), x + 25.0, 600.0)
            .finish();
        d.push(Shape::path(
            path,
            Style::stroke(Paint::Gradient("liquid-grad"), 3.5).opacity(0.4),
        ));
    }
    d
}

pub(super) fn neural_web(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::NeuralWeb, AspectMode::Slice, opacity);
    let node = |i: u32| Point::new(spread(i, 89, 100, 600), spread(i, 137, 100, 600));
    for i in 0..25u32 {
        let p = node(i);
        d.push(Shape::circle(p.x, p.y, 3.0, Style::white_fill().opacity(0.5)));
        if i < 20 {
            let q = node(i + 1);
            d.push(Shape::line(
                p.x,
                p.y,
                q.x,
                q.y,
                Style::white_stroke(0.5).opacity(0.25),
            ));
        }
    }
    d
}

pub(super) fn aurora_waves(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::AuroraWaves, AspectMode::Stretch, opacity).gradient(
        GradientDef::linear("aurora", (0.0, 0.0), (1.0, 0.0))
            .white(0.0, 0.2)
            .white(0.5, 0.6)
            .white(1.0, 0.2),
    );
    for i in 0..6u32 {
        let y = f64::from(100 + i * 80);
        d.push(Shape::path(
            horizontal_wave(y, y - 40.0),
            Style::stroke(Paint::Gradient("aurora"), 8.0).opacity(0.4),
        ));
    }
    d
}

pub(super) fn crystal_prism(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::CrystalPrism, AspectMode::Slice, opacity).gradient(
        GradientDef::linear("prism", (0.0, 0.0), (1.0, 1.0))
            .white(0.0, 0.6)
            .white(1.0, 0.2),
    );
    for i in 0..15u32 {
        let cx = spread(i, 97, 150, 600);
        let cy = spread(i, 127, 150, 600);
        let s = f64::from(40 + (i % 4) * 20);
        d.push(Shape::Polygon {
            points: vec![
                Point::new(cx, cy - s),
                Point::new(cx + s * 0.866, cy + s * 0.5),
                Point::new(cx - s * 0.866, cy + s * 0.5),
            ],
            style: Style::fill(Paint::Gradient("prism"))
                .with_stroke(Paint::Solid(Color::WHITE), 1.5)
                .opacity(0.35),
        });
    }
    d
}

pub(super) fn quantum_particles(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::QuantumParticles, AspectMode::Slice, opacity)
        .gradient(GradientDef::radial("quantum-glow").white(0.0, 0.8).white(1.0, 0.0));
    for i in 0..30u32 {
        let x = spread(i, 113, 100, 600);
        let y = spread(i, 157, 100, 600);
        let size = f64::from(2 + i % 3);
        let trail = QuadPath::start(x, y)
            .quad(x + 30.0, y - 20.0, x + 60.0, y)
            .finish();
        d.push(Shape::Group(vec![
            Shape::circle(x, y, size, Style::fill(Paint::Gradient("quantum-glow"))),
            Shape::circle(x, y, size * 0.4, Style::white_fill().opacity(0.6)),
            Shape::path(
                trail,
                Style::white_stroke(0.5).dashed(2.0, 3.0).opacity(0.3),
            ),
        ]));
    }
    d
}

pub(super) fn heat_shimmer(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::HeatShimmer, AspectMode::Stretch, opacity).gradient(
        GradientDef::linear("heat", (0.0, 0.0), (0.0, 1.0))
            .white(0.0, 0.1)
            .white(0.5, 0.4)
            .white(1.0, 0.1),
    );
    for i in 0..12u32 {
        let x = f64::from(i * 50);
        let sway = f64::from(10 + (i % 3) * 5);
        let path = QuadPath::start(x, 0.0)
            .quad(x + sway, 100.0, x + 5.0, 200.0)
            .smooth(x + 15.0, 400.0)
            .quad(x + 8.0, 500.0, x + 3.0, 600.0)
            .finish();
        d.push(Shape::path(
            path,
            Style::stroke(Paint::Gradient("heat"), 2.0).opacity(0.35),
        ));
    }
    for i in 0..15u32 {
        let y = f64::from(i * 40 + 20);
        let path = QuadPath::start(0.0, y)
            .quad(150.0, y - 5.0, 300.0, y + 5.0)
            .smooth(600.0, y)
            .finish();
        d.push(Shape::path(path, Style::white_stroke(1.0).opacity(0.15)));
    }
    d
}

pub(super) fn nebula_cloud(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::NebulaCloud, AspectMode::Slice, opacity)
        .gradient(
            GradientDef::radial("nebula-core")
                .white(0.0, 0.5)
                .white(0.5, 0.3)
                .white(1.0, 0.0),
        )
        .gradient(
            GradientDef::radial("nebula-haze")
                .white(0.0, 0.4)
                .white(0.7, 0.1)
                .white(1.0, 0.0),
        );
    let core = Style::fill(Paint::Gradient("nebula-core"));
    let haze = Style::fill(Paint::Gradient("nebula-haze"));
    d.push(Shape::ellipse(200.0, 180.0, 180.0, 120.0, core));
    d.push(Shape::ellipse(400.0, 320.0, 220.0, 160.0, core));
    d.push(Shape::ellipse(120.0, 420.0, 150.0, 100.0, haze));
    d.push(Shape::ellipse(480.0, 150.0, 170.0, 130.0, haze));
    for i in 0..40u32 {
        d.push(Shape::circle(
            spread(i, 97, 80, 600),
            spread(i, 127, 80, 600),
            1.0,
            Style::white_fill().opacity(0.5),
        ));
    }
    d
}

pub(super) fn scale_armor(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::ScaleArmor, AspectMode::Slice, opacity).gradient(
        GradientDef::linear("scale", (0.0, 0.0), (1.0, 1.0))
            .white(0.0, 0.4)
            .white(0.5, 0.2)
            .white(1.0, 0.35),
    );
    for row in 0..12u32 {
        for col in 0..8u32 {
            let x = f64::from(30 + col * 75 + (row % 2) * 37);
            let y = f64::from(20 + row * 50);
            let ridge = QuadPath::start(x - 25.0, y)
                .quad(x, y - 15.0, x + 25.0, y)
                .finish();
            d.push(Shape::Group(vec![
                Shape::ellipse(
                    x,
                    y,
                    35.0,
                    25.0,
                    Style::fill(Paint::Gradient("scale"))
                        .with_stroke(Paint::Solid(Color::WHITE), 1.0)
                        .opacity(0.4),
                ),
                Shape::path(ridge, Style::white_stroke(0.5).opacity(0.3)),
            ]));
        }
    }
    d
}

pub(super) fn ice_fractal(opacity: f64) -> Drawing {
    let mut d = Drawing::new(PatternId::IceFractal, AspectMode::Slice, opacity).gradient(
        GradientDef::linear("ice", (0.0, 0.0), (1.0, 1.0))
            .white(0.0, 0.5)
            .white(1.0, 0.2),
    );
    for i in 0..8u32 {
        let cx = spread(i, 127, 150, 550) + 25.0;
        let cy = spread(i, 173, 150, 550) + 25.0;
        let size = f64::from(50 + (i % 3) * 20);
        let mut flake = Vec::with_capacity(6 * 3 + 1);
        for arm in 0..6u32 {
            let angle = f64::from(arm) * PI / 3.0;
            let (sin, cos) = angle.sin_cos();
            flake.push(Shape::line(
                cx,
                cy,
                cx + cos * size,
                cy + sin * size,
                Style::stroke(Paint::Gradient("ice"), 1.5).opacity(0.45),
            ));
            let bx = cx + cos * size * 0.6;
            let by = cy + sin * size * 0.6;
            for twist in [-0.5, 0.5] {
                let (tsin, tcos) = (angle + twist).sin_cos();
                flake.push(Shape::line(
                    bx,
                    by,
                    bx + tcos * 12.0,
                    by + tsin * 12.0,
                    Style::white_stroke(1.0).opacity(0.35),
                ));
            }
        }
        flake.push(Shape::circle(cx, cy, 3.0, Style::white_fill().opacity(0.5)));
        d.push(Shape::Group(flake));
    }
    d
}
