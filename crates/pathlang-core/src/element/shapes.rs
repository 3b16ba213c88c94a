//! Expansion of the shape figures (ellipse, polygon, rectangle, rounded rectangle) into closed
//! sequences of line and arc segments.

use super::PathOp;
use crate::geom::{Point, Vector, point, vector};
use crate::geometry::{ArcSegment, Segment};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Builds an arc segment, falling back to a straight line when the arc is degenerate.
pub(crate) fn arc_or_line(arc: ArcSegment) -> Segment {
    if arc.is_degenerate() {
        Segment::Line { to: arc.to }
    } else {
        Segment::Arc(arc)
    }
}

struct FigureOps {
    ops: Vec<PathOp>,
    current: Point,
}

impl FigureOps {
    fn begin(start: Point) -> Self {
        Self {
            ops: vec![PathOp::BeginFigure(start)],
            current: start,
        }
    }

    fn push(&mut self, segment: Segment) {
        self.current = segment.end();
        self.ops.push(PathOp::Segment(segment));
    }

    fn line(&mut self, to: Point) {
        self.push(Segment::Line { to });
    }

    fn arc(&mut self, to: Point, radii: Vector) {
        self.push(arc_or_line(ArcSegment {
            from: self.current,
            to,
            radius_x: radii.x,
            radius_y: radii.y,
            rotation: 0.0,
            large_arc: false,
            sweep_clockwise: true,
        }));
    }

    fn close(mut self) -> Vec<PathOp> {
        self.ops.push(PathOp::EndFigure { closed: true });
        self.ops
    }
}

/// Two clockwise half-arcs starting at the rightmost point.
pub fn ellipse(center: Point, radius_x: f64, radius_y: f64) -> Vec<PathOp> {
    let radii = vector(radius_x, radius_y);
    let right = point(center.x + radius_x, center.y);
    let mut f = FigureOps::begin(right);
    f.arc(point(center.x - radius_x, center.y), radii);
    f.arc(right, radii);
    f.close()
}

/// Vertices of a regular polygon on a circle of `radius` around `center` (y axis pointing down).
/// Odd-sided polygons have a vertex at the top; even-sided ones a flat top edge. Fewer than three
/// sides yields no vertices.
pub fn polygon_vertices(sides: u16, radius: f64, center: Point) -> Vec<Point> {
    if sides < 3 {
        return Vec::new();
    }
    let step = TAU / f64::from(sides);
    let start = if sides % 2 == 1 {
        -FRAC_PI_2
    } else {
        -FRAC_PI_2 + step / 2.0
    };
    (0..sides)
        .map(|i| {
            let angle = start + step * f64::from(i);
            point(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

pub fn polygon(sides: u16, radius: f64, center: Point) -> Vec<PathOp> {
    let vertices = polygon_vertices(sides, radius, center);
    let Some((first, rest)) = vertices.split_first() else {
        return Vec::new();
    };
    let mut f = FigureOps::begin(*first);
    for v in rest {
        f.line(*v);
    }
    f.close()
}

pub fn rectangle(origin: Point, width: f64, height: f64) -> Vec<PathOp> {
    let mut f = FigureOps::begin(origin);
    f.line(point(origin.x + width, origin.y));
    f.line(point(origin.x + width, origin.y + height));
    f.line(point(origin.x, origin.y + height));
    f.close()
}

/// Per-corner (x, y) radii of a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: Vector,
    pub top_right: Vector,
    pub bottom_right: Vector,
    pub bottom_left: Vector,
}

impl CornerRadii {
    pub fn uniform(radius_x: f64, radius_y: f64) -> Self {
        let r = vector(radius_x.abs(), radius_y.abs());
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    /// Shrinks radii so the two corners sharing an edge never overlap. When they would, both
    /// corners of that edge are scaled proportionally so their sum equals the edge length.
    pub fn clamped(mut self, width: f64, height: f64) -> Self {
        fit(&mut self.top_left.x, &mut self.top_right.x, width);
        fit(&mut self.bottom_left.x, &mut self.bottom_right.x, width);
        fit(&mut self.top_left.y, &mut self.bottom_left.y, height);
        fit(&mut self.top_right.y, &mut self.bottom_right.y, height);
        self
    }
}

fn fit(a: &mut f64, b: &mut f64, length: f64) {
    let sum = *a + *b;
    if sum > length && sum > 0.0 {
        let scale = length / sum;
        *a *= scale;
        *b *= scale;
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Four edges joined by clockwise quarter-arcs, starting at the end of the top-left corner.
pub fn rounded_rectangle(origin: Point, width: f64, height: f64, radii: CornerRadii) -> Vec<PathOp> {
    let (x0, x1) = ordered(origin.x, origin.x + width);
    let (y0, y1) = ordered(origin.y, origin.y + height);
    let r = radii.clamped(x1 - x0, y1 - y0);

    let mut f = FigureOps::begin(point(x0 + r.top_left.x, y0));
    let edge = |f: &mut FigureOps, to: Point| {
        if f.current != to {
            f.line(to);
        }
    };
    let corner = |f: &mut FigureOps, to: Point, radii: Vector| {
        if f.current != to {
            f.arc(to, radii);
        }
    };

    edge(&mut f, point(x1 - r.top_right.x, y0));
    corner(&mut f, point(x1, y0 + r.top_right.y), r.top_right);
    edge(&mut f, point(x1, y1 - r.bottom_right.y));
    corner(&mut f, point(x1 - r.bottom_right.x, y1), r.bottom_right);
    edge(&mut f, point(x0 + r.bottom_left.x, y1));
    corner(&mut f, point(x0, y1 - r.bottom_left.y), r.bottom_left);
    edge(&mut f, point(x0, y0 + r.top_left.y));
    corner(&mut f, point(x0 + r.top_left.x, y0), r.top_left);
    f.close()
}
