use serde::Serialize;

use crate::{
    foundation::core::{BezPath, Color, Point, Rect},
    patterns::PatternId,
};

/// Side length of the logical canvas every pattern draws into.
pub const PATTERN_CANVAS: f64 = 600.0;

/// How a drawing is fitted into a container that is not 600x600.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectMode {
    /// Uniform scale that covers the container, centered (`xMidYMid slice`).
    Slice,
    /// Independent x/y scale that fills the container exactly (`none`).
    Stretch,
}

/// A procedural pattern rendered for one opacity value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Drawing {
    pub pattern: PatternId,
    pub aspect: AspectMode,
    /// Opacity applied to the whole drawing.
    pub opacity: f64,
    /// Gradient paint servers referenced by [`Paint::Gradient`].
    pub gradients: Vec<GradientDef>,
    pub shapes: Vec<Shape>,
}

impl Drawing {
    pub(crate) fn new(pattern: PatternId, aspect: AspectMode, opacity: f64) -> Self {
        Self {
            pattern,
            aspect,
            opacity,
            gradients: Vec::new(),
            shapes: Vec::new(),
        }
    }

    pub(crate) fn gradient(mut self, def: GradientDef) -> Self {
        self.gradients.push(def);
        self
    }

    pub(crate) fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Number of leaf primitives, groups flattened.
    pub fn primitive_count(&self) -> usize {
        fn count(shapes: &[Shape]) -> usize {
            shapes
                .iter()
                .map(|s| match s {
                    Shape::Group(children) => count(children),
                    _ => 1,
                })
                .sum()
        }
        count(&self.shapes)
    }

    /// Returns the gradient definition for `id`, if declared.
    pub fn gradient_def(&self, id: &str) -> Option<&GradientDef> {
        self.gradients.iter().find(|g| g.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradientDef {
    pub id: &'static str,
    pub kind: GradientKind,
    pub stops: Vec<PaintStop>,
}

impl GradientDef {
    /// Linear gradient in object-bounding-box fractions.
    pub(crate) fn linear(id: &'static str, from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            id,
            kind: GradientKind::Linear {
                x1: from.0,
                y1: from.1,
                x2: to.0,
                y2: to.1,
            },
            stops: Vec::new(),
        }
    }

    /// Radial gradient centered in the object bounding box.
    pub(crate) fn radial(id: &'static str) -> Self {
        Self {
            id,
            kind: GradientKind::Radial,
            stops: Vec::new(),
        }
    }

    /// White stop at `offset` with the given stop opacity.
    pub(crate) fn white(mut self, offset: f64, opacity: f64) -> Self {
        self.stops.push(PaintStop {
            offset,
            color: Color::WHITE,
            opacity,
        });
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKind {
    Linear { x1: f64, y1: f64, x2: f64, y2: f64 },
    Radial,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PaintStop {
    pub offset: f64,
    pub color: Color,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    None,
    Solid(Color),
    Gradient(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Style {
    pub fill: Paint,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

impl Style {
    pub(crate) fn fill(paint: Paint) -> Self {
        Self {
            fill: paint,
            stroke: None,
            opacity: 1.0,
        }
    }

    pub(crate) fn white_fill() -> Self {
        Self::fill(Paint::Solid(Color::WHITE))
    }

    pub(crate) fn stroke(paint: Paint, width: f64) -> Self {
        Self {
            fill: Paint::None,
            stroke: Some(Stroke {
                paint,
                width,
                dash: None,
            }),
            opacity: 1.0,
        }
    }

    pub(crate) fn white_stroke(width: f64) -> Self {
        Self::stroke(Paint::Solid(Color::WHITE), width)
    }

    pub(crate) fn with_stroke(mut self, paint: Paint, width: f64) -> Self {
        self.stroke = Some(Stroke {
            paint,
            width,
            dash: None,
        });
        self
    }

    pub(crate) fn dashed(mut self, on: f64, off: f64) -> Self {
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.dash = Some([on, off]);
        }
        self
    }

    pub(crate) fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rotation {
    pub degrees: f64,
    pub pivot: Point,
}

/// Vector primitive in pattern canvas units.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
        style: Style,
    },
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
        style: Style,
    },
    Line {
        from: Point,
        to: Point,
        style: Style,
    },
    Rect {
        rect: Rect,
        rotation: Option<Rotation>,
        style: Style,
    },
    Path {
        path: BezPath,
        style: Style,
    },
    Polygon {
        points: Vec<Point>,
        style: Style,
    },
    Group(Vec<Shape>),
}

impl Shape {
    pub(crate) fn circle(cx: f64, cy: f64, radius: f64, style: Style) -> Self {
        Self::Circle {
            center: Point::new(cx, cy),
            radius,
            style,
        }
    }

    pub(crate) fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, style: Style) -> Self {
        Self::Ellipse {
            center: Point::new(cx, cy),
            rx,
            ry,
            style,
        }
    }

    pub(crate) fn line(x1: f64, y1: f64, x2: f64, y2: f64, style: Style) -> Self {
        Self::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            style,
        }
    }

    pub(crate) fn rect(x: f64, y: f64, w: f64, h: f64, style: Style) -> Self {
        Self::Rect {
            rect: Rect::new(x, y, x + w, y + h),
            rotation: None,
            style,
        }
    }

    pub(crate) fn path(path: BezPath, style: Style) -> Self {
        Self::Path { path, style }
    }
}

/// Path builder with SVG `T` (smooth quadratic) semantics.
pub(crate) struct QuadPath {
    path: BezPath,
    cursor: Point,
    last_ctrl: Option<Point>,
}

impl QuadPath {
    pub(crate) fn start(x: f64, y: f64) -> Self {
        let cursor = Point::new(x, y);
        let mut path = BezPath::new();
        path.move_to(cursor);
        Self {
            path,
            cursor,
            last_ctrl: None,
        }
    }

    pub(crate) fn quad(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        let ctrl = Point::new(cx, cy);
        let end = Point::new(x, y);
        self.path.quad_to(ctrl, end);
        self.last_ctrl = Some(ctrl);
        self.cursor = end;
        self
    }

    /// Quadratic segment whose control point mirrors the previous one around the cursor.
    pub(crate) fn smooth(self, x: f64, y: f64) -> Self {
        let ctrl = match self.last_ctrl {
            Some(prev) => Point::new(
                2.0 * self.cursor.x - prev.x,
                2.0 * self.cursor.y - prev.y,
            ),
            None => self.cursor,
        };
        self.quad(ctrl.x, ctrl.y, x, y)
    }

    pub(crate) fn line(mut self, x: f64, y: f64) -> Self {
        let end = Point::new(x, y);
        self.path.line_to(end);
        self.last_ctrl = None;
        self.cursor = end;
        self
    }

    pub(crate) fn finish(self) -> BezPath {
        self.path
    }
}

/// Horizontal wave across the canvas: `M0,y Q150,crest 300,y T600,y`.
pub(crate) fn horizontal_wave(y: f64, crest: f64) -> BezPath {
    QuadPath::start(0.0, y)
        .quad(150.0, crest, 300.0, y)
        .smooth(PATTERN_CANVAS, y)
        .finish()
}
