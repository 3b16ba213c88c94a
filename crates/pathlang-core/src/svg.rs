//! Plain SVG path data and bounding boxes for emitted geometry.

use crate::arc::{ArcParameterization, angle_in_sweep};
use crate::geom::{Box2D, Point, point};
use crate::geometry::{ArcSegment, Geometry, Segment};
use std::f64::consts::PI;
use std::fmt::Write as _;

fn flag(b: bool) -> u8 {
    u8::from(b)
}

impl Geometry {
    /// Serializes the figures as SVG path data with absolute commands (`M`, `L`, `Q`, `C`, `A`,
    /// `Z`). The fill rule is not representable in path data; see [`Geometry::fill_rule`].
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        for figure in &self.figures {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "M{},{}", figure.start.x, figure.start.y);
            for segment in &figure.segments {
                let _ = match segment {
                    Segment::Line { to } => write!(out, " L{},{}", to.x, to.y),
                    Segment::Quadratic { control, to } => {
                        write!(out, " Q{},{} {},{}", control.x, control.y, to.x, to.y)
                    }
                    Segment::Cubic {
                        control1,
                        control2,
                        to,
                    } => write!(
                        out,
                        " C{},{} {},{} {},{}",
                        control1.x, control1.y, control2.x, control2.y, to.x, to.y
                    ),
                    Segment::Arc(arc) => write!(
                        out,
                        " A{},{} {} {} {} {},{}",
                        arc.radius_x,
                        arc.radius_y,
                        arc.rotation.to_degrees(),
                        flag(arc.large_arc),
                        flag(arc.sweep_clockwise),
                        arc.to.x,
                        arc.to.y
                    ),
                };
            }
            if figure.closed {
                out.push_str(" Z");
            }
        }
        out
    }

    /// Axis-aligned bounds of all figures, or `None` when there is nothing to bound. Bezier
    /// control points are included (a conservative hull); arcs are bounded exactly.
    pub fn bounds(&self) -> Option<Box2D> {
        let mut points = Vec::new();
        for figure in &self.figures {
            points.push(figure.start);
            for segment in &figure.segments {
                match segment {
                    Segment::Line { to } => points.push(*to),
                    Segment::Quadratic { control, to } => points.extend([*control, *to]),
                    Segment::Cubic {
                        control1,
                        control2,
                        to,
                    } => points.extend([*control1, *control2, *to]),
                    Segment::Arc(arc) => points.extend(arc_extrema(arc)),
                }
            }
        }
        if points.is_empty() {
            return None;
        }
        Some(Box2D::from_points(points))
    }
}

/// End points plus the axis extrema an arc actually passes through.
fn arc_extrema(arc: &ArcSegment) -> Vec<Point> {
    let mut out = vec![arc.from, arc.to];
    let ArcParameterization::CenterParameters {
        center,
        radius_x,
        radius_y,
        theta1,
        delta_theta,
    } = arc.center_parameterization()
    else {
        return out;
    };

    let (sin_phi, cos_phi) = arc.rotation.sin_cos();
    let at = |t: f64| {
        let (s, c) = t.sin_cos();
        point(
            center.x + cos_phi * radius_x * c - sin_phi * radius_y * s,
            center.y + sin_phi * radius_x * c + cos_phi * radius_y * s,
        )
    };

    // Parameter values where dx/dt = 0 and dy/dt = 0.
    let tx = (-radius_y * sin_phi).atan2(radius_x * cos_phi);
    let ty = (radius_y * cos_phi).atan2(radius_x * sin_phi);
    for base in [tx, ty] {
        for t in [base, base + PI] {
            if angle_in_sweep(t, theta1, delta_theta) {
                out.push(at(t));
            }
        }
    }
    out
}
