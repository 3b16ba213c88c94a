use super::shapes::{self, CornerRadii, arc_or_line};
use super::{ElementData, FillRule, PathElement};
use crate::geom::{Point, point, reflect, resolve};
use crate::geometry::{ArcSegment, Segment};

/// Final control point of the preceding bezier, kept for smooth-curve mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LastControl {
    #[default]
    None,
    Quadratic(Point),
    Cubic(Point),
}

/// Transient state threaded through emission: current point and smooth-curve memory.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmitState {
    pub current: Point,
    pub last_control: LastControl,
}

impl EmitState {
    pub fn at(current: Point) -> Self {
        Self {
            current,
            last_control: LastControl::None,
        }
    }
}

/// Low-level drawing operation produced by an element.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOp {
    SetFillRule(FillRule),
    BeginFigure(Point),
    Segment(Segment),
    EndFigure { closed: bool },
}

impl PathElement {
    /// Resolves relative coordinates against `state.current` and produces this element's drawing
    /// operations together with the updated state.
    pub fn emit(&self, state: EmitState) -> (EmitState, Vec<PathOp>) {
        let current = state.current;
        let relative = self.relative;
        let abs = |p: Point| resolve(p, current, relative);
        let segment = |to: Point, last_control: LastControl, segment: Segment| {
            (
                EmitState {
                    current: to,
                    last_control,
                },
                vec![PathOp::Segment(segment)],
            )
        };

        match self.data {
            ElementData::FillRule { rule } => (state, vec![PathOp::SetFillRule(rule)]),
            ElementData::MoveTo { point } => {
                let to = abs(point);
                (EmitState::at(to), vec![PathOp::BeginFigure(to)])
            }
            ElementData::Line { point } => {
                let to = abs(point);
                segment(to, LastControl::None, Segment::Line { to })
            }
            ElementData::HorizontalLine { x } => {
                let x = if relative { current.x + x } else { x };
                let to = point(x, current.y);
                segment(to, LastControl::None, Segment::Line { to })
            }
            ElementData::VerticalLine { y } => {
                let y = if relative { current.y + y } else { y };
                let to = point(current.x, y);
                segment(to, LastControl::None, Segment::Line { to })
            }
            ElementData::QuadraticBezier { control, point } => {
                let control = abs(control);
                let to = abs(point);
                segment(
                    to,
                    LastControl::Quadratic(control),
                    Segment::Quadratic { control, to },
                )
            }
            ElementData::SmoothQuadraticBezier { point } => {
                let control = match state.last_control {
                    LastControl::Quadratic(prev) => reflect(prev, current),
                    _ => current,
                };
                let to = abs(point);
                segment(
                    to,
                    LastControl::Quadratic(control),
                    Segment::Quadratic { control, to },
                )
            }
            ElementData::CubicBezier {
                control1,
                control2,
                point,
            } => {
                let control1 = abs(control1);
                let control2 = abs(control2);
                let to = abs(point);
                segment(
                    to,
                    LastControl::Cubic(control2),
                    Segment::Cubic {
                        control1,
                        control2,
                        to,
                    },
                )
            }
            ElementData::SmoothCubicBezier { control2, point } => {
                let control1 = match state.last_control {
                    LastControl::Cubic(prev) => reflect(prev, current),
                    _ => current,
                };
                let control2 = abs(control2);
                let to = abs(point);
                segment(
                    to,
                    LastControl::Cubic(control2),
                    Segment::Cubic {
                        control1,
                        control2,
                        to,
                    },
                )
            }
            ElementData::Arc {
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep_clockwise,
                point,
            } => {
                let to = abs(point);
                let arc = ArcSegment {
                    from: current,
                    to,
                    radius_x,
                    radius_y,
                    rotation,
                    large_arc,
                    sweep_clockwise,
                };
                segment(to, LastControl::None, arc_or_line(arc))
            }
            ElementData::ClosePath { closed } => {
                (EmitState::at(current), vec![PathOp::EndFigure { closed }])
            }
            ElementData::EllipseFigure {
                radius_x,
                radius_y,
                center,
            } => {
                let center = abs(center);
                (
                    EmitState::at(center),
                    shapes::ellipse(center, radius_x, radius_y),
                )
            }
            ElementData::PolygonFigure {
                sides,
                radius,
                center,
            } => {
                let center = abs(center);
                (
                    EmitState::at(center),
                    shapes::polygon(sides, radius, center),
                )
            }
            ElementData::RectangleFigure {
                origin,
                width,
                height,
            } => {
                let origin = abs(origin);
                (
                    EmitState::at(origin),
                    shapes::rectangle(origin, width, height),
                )
            }
            ElementData::RoundedRectangleFigure {
                origin,
                width,
                height,
                radius_x,
                radius_y,
            } => {
                let origin = abs(origin);
                (
                    EmitState::at(origin),
                    shapes::rounded_rectangle(
                        origin,
                        width,
                        height,
                        CornerRadii::uniform(radius_x, radius_y),
                    ),
                )
            }
        }
    }
}
