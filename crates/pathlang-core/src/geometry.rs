//! Renderer-agnostic geometry produced by the emitter.
//!
//! All coordinates are absolute. A rendering backend turns this into a fillable/strokeable shape;
//! nothing here draws.

use crate::element::FillRule;
use crate::geom::Point;
use serde::Serialize;

/// An elliptical arc in endpoint parameterization (SVG convention). `rotation` is in radians and
/// `sweep_clockwise` means increasing angles in a y-down coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcSegment {
    pub from: Point,
    pub to: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep_clockwise: bool,
}

impl ArcSegment {
    /// Whether the arc degenerates into a straight line (a zero radius, or start equals end).
    pub fn is_degenerate(&self) -> bool {
        self.radius_x == 0.0 || self.radius_y == 0.0 || self.from == self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Segment {
    Line {
        to: Point,
    },
    Quadratic {
        control: Point,
        to: Point,
    },
    Cubic {
        control1: Point,
        control2: Point,
        to: Point,
    },
    Arc(ArcSegment),
}

impl Segment {
    pub fn end(&self) -> Point {
        match self {
            Segment::Line { to }
            | Segment::Quadratic { to, .. }
            | Segment::Cubic { to, .. }
            | Segment::Arc(ArcSegment { to, .. }) => *to,
        }
    }
}

/// One figure: a start point followed by connected segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubPath {
    pub start: Point,
    pub segments: Vec<Segment>,
    /// Loops back to `start` when filled or stroked.
    pub closed: bool,
}

impl SubPath {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
            closed: false,
        }
    }

    /// Start point followed by every segment end point.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().map(Segment::end))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub fill_rule: FillRule,
    pub figures: Vec<SubPath>,
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.figures.iter().map(|f| f.segments.len()).sum()
    }
}
