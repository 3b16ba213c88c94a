//! Geometry emitter: a single pass over the ordered elements, threading the current point and the
//! smooth-curve memory through each element's emission.

use crate::element::{EmitState, PathElement, PathOp};
use crate::geom::Point;
use crate::geometry::{Geometry, Segment, SubPath};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmitOptions {
    /// Also produce a human-readable trace of the drawing calls.
    pub trace: bool,
}

impl EmitOptions {
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Emitted {
    pub geometry: Geometry,
    pub trace: Option<String>,
}

#[derive(Debug, Default)]
struct GeometryBuilder {
    geometry: Geometry,
    open: Option<SubPath>,
    current: Point,
}

impl GeometryBuilder {
    fn apply(&mut self, op: PathOp) {
        match op {
            PathOp::SetFillRule(rule) => self.geometry.fill_rule = rule,
            PathOp::BeginFigure(start) => {
                self.end_figure(false);
                self.open = Some(SubPath::new(start));
                self.current = start;
            }
            PathOp::Segment(segment) => {
                let start = self.current;
                self.current = segment.end();
                self.open
                    .get_or_insert_with(|| SubPath::new(start))
                    .segments
                    .push(segment);
            }
            PathOp::EndFigure { closed } => self.end_figure(closed),
        }
    }

    fn end_figure(&mut self, closed: bool) {
        if let Some(mut figure) = self.open.take() {
            figure.closed = closed;
            self.geometry.figures.push(figure);
        }
    }

    fn finish(mut self) -> Geometry {
        self.end_figure(false);
        self.geometry
    }
}

fn write_op(out: &mut String, op: &PathOp) {
    let _ = match op {
        PathOp::SetFillRule(rule) => writeln!(out, "set_fill_rule({rule})"),
        PathOp::BeginFigure(p) => writeln!(out, "begin_figure({}, {})", p.x, p.y),
        PathOp::Segment(Segment::Line { to }) => writeln!(out, "add_line({}, {})", to.x, to.y),
        PathOp::Segment(Segment::Quadratic { control, to }) => writeln!(
            out,
            "add_quadratic_bezier({}, {}, {}, {})",
            control.x, control.y, to.x, to.y
        ),
        PathOp::Segment(Segment::Cubic {
            control1,
            control2,
            to,
        }) => writeln!(
            out,
            "add_cubic_bezier({}, {}, {}, {}, {}, {})",
            control1.x, control1.y, control2.x, control2.y, to.x, to.y
        ),
        PathOp::Segment(Segment::Arc(arc)) => writeln!(
            out,
            "add_arc({}, {}, {}, {}, {}, {}, {})",
            arc.to.x,
            arc.to.y,
            arc.radius_x,
            arc.radius_y,
            arc.rotation,
            if arc.sweep_clockwise {
                "clockwise"
            } else {
                "counter_clockwise"
            },
            if arc.large_arc { "large" } else { "small" }
        ),
        PathOp::EndFigure { closed } => writeln!(
            out,
            "end_figure({})",
            if *closed { "closed" } else { "open" }
        ),
    };
}

/// Emits geometry for elements that are already ordered and structurally valid.
pub fn emit(elements: &[PathElement], options: EmitOptions) -> Emitted {
    let mut builder = GeometryBuilder::default();
    let mut trace = options.trace.then(String::new);

    elements.iter().fold(EmitState::default(), |state, element| {
        let (next, ops) = element.emit(state);
        tracing::trace!(
            kind = %element.kind(),
            index = element.index,
            ops = ops.len(),
            "emitted path element"
        );
        for op in ops {
            if let Some(out) = trace.as_mut() {
                write_op(out, &op);
            }
            builder.apply(op);
        }
        next
    });

    let geometry = builder.finish();
    tracing::debug!(
        figures = geometry.figures.len(),
        segments = geometry.segment_count(),
        "emitted geometry"
    );
    Emitted { geometry, trace }
}
