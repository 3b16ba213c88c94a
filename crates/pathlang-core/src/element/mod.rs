//! Element model: one variant per command kind.

mod attributes;
mod emit;
pub mod factory;
pub mod shapes;

pub use emit::{EmitState, LastControl, PathOp};

use crate::geom::Point;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommandKind {
    FillRule,
    PathFigure,
    EllipseFigure,
    PolygonFigure,
    RectangleFigure,
    RoundedRectangleFigure,
    MoveTo,
    Line,
    HorizontalLine,
    VerticalLine,
    QuadraticBezier,
    SmoothQuadraticBezier,
    CubicBezier,
    SmoothCubicBezier,
    Arc,
    ClosePath,
}

impl CommandKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::FillRule,
        Self::PathFigure,
        Self::EllipseFigure,
        Self::PolygonFigure,
        Self::RectangleFigure,
        Self::RoundedRectangleFigure,
        Self::MoveTo,
        Self::Line,
        Self::HorizontalLine,
        Self::VerticalLine,
        Self::QuadraticBezier,
        Self::SmoothQuadraticBezier,
        Self::CubicBezier,
        Self::SmoothCubicBezier,
        Self::Arc,
        Self::ClosePath,
    ];

    /// Figure-level kinds, in grammar alternation order.
    pub const FIGURES: [Self; 6] = [
        Self::FillRule,
        Self::PathFigure,
        Self::EllipseFigure,
        Self::PolygonFigure,
        Self::RectangleFigure,
        Self::RoundedRectangleFigure,
    ];

    /// Element-level kinds (the contents of a path figure), in grammar alternation order.
    pub const ELEMENTS: [Self; 10] = [
        Self::MoveTo,
        Self::Line,
        Self::HorizontalLine,
        Self::VerticalLine,
        Self::QuadraticBezier,
        Self::SmoothQuadraticBezier,
        Self::CubicBezier,
        Self::SmoothCubicBezier,
        Self::Arc,
        Self::ClosePath,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FillRule => "FillRule",
            Self::PathFigure => "PathFigure",
            Self::EllipseFigure => "EllipseFigure",
            Self::PolygonFigure => "PolygonFigure",
            Self::RectangleFigure => "RectangleFigure",
            Self::RoundedRectangleFigure => "RoundedRectangleFigure",
            Self::MoveTo => "MoveTo",
            Self::Line => "Line",
            Self::HorizontalLine => "HorizontalLine",
            Self::VerticalLine => "VerticalLine",
            Self::QuadraticBezier => "QuadraticBezier",
            Self::SmoothQuadraticBezier => "SmoothQuadraticBezier",
            Self::CubicBezier => "CubicBezier",
            Self::SmoothCubicBezier => "SmoothCubicBezier",
            Self::Arc => "Arc",
            Self::ClosePath => "ClosePath",
        }
    }

    /// Command letters (absolute, relative). Path figures have no letter of their own.
    pub fn letters(self) -> Option<&'static str> {
        Some(match self {
            Self::PathFigure => return None,
            Self::FillRule => "Ff",
            Self::EllipseFigure => "Oo",
            Self::PolygonFigure => "Pp",
            Self::RectangleFigure => "Rr",
            Self::RoundedRectangleFigure => "Uu",
            Self::MoveTo => "Mm",
            Self::Line => "Ll",
            Self::HorizontalLine => "Hh",
            Self::VerticalLine => "Vv",
            Self::QuadraticBezier => "Qq",
            Self::SmoothQuadraticBezier => "Tt",
            Self::CubicBezier => "Cc",
            Self::SmoothCubicBezier => "Ss",
            Self::Arc => "Aa",
            Self::ClosePath => "Zz",
        })
    }

    /// Whether compacted tuples may follow the first one (`L 1,1 2,2`).
    pub fn accepts_additional(self) -> bool {
        !matches!(self, Self::FillRule | Self::PathFigure | Self::ClosePath)
    }

    /// Kind produced by a compacted tuple. Tuples after a move-to are implicit line-tos.
    pub fn additional_kind(self) -> Self {
        match self {
            Self::MoveTo => Self::Line,
            other => other,
        }
    }

    /// Whether an element of this kind opens a new figure.
    pub fn begins_figure(self) -> bool {
        matches!(
            self,
            Self::MoveTo
                | Self::EllipseFigure
                | Self::PolygonFigure
                | Self::RectangleFigure
                | Self::RoundedRectangleFigure
        )
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Winding convention used to decide a closed path's interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FillRule {
    EvenOdd,
    #[default]
    Nonzero,
}

impl FillRule {
    /// `F0` selects even-odd, `F1` selects nonzero winding.
    pub fn from_flag(flag: bool) -> Self {
        if flag { Self::Nonzero } else { Self::EvenOdd }
    }
}

impl std::fmt::Display for FillRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::EvenOdd => "evenOdd",
            Self::Nonzero => "nonzero",
        })
    }
}

/// Kind-specific payload of a parsed element. Coordinates are as written in the source; relative
/// ones are resolved against the current point at emission time. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ElementData {
    FillRule {
        rule: FillRule,
    },
    MoveTo {
        point: Point,
    },
    Line {
        point: Point,
    },
    HorizontalLine {
        x: f64,
    },
    VerticalLine {
        y: f64,
    },
    QuadraticBezier {
        control: Point,
        point: Point,
    },
    SmoothQuadraticBezier {
        point: Point,
    },
    CubicBezier {
        control1: Point,
        control2: Point,
        point: Point,
    },
    SmoothCubicBezier {
        control2: Point,
        point: Point,
    },
    Arc {
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        large_arc: bool,
        sweep_clockwise: bool,
        point: Point,
    },
    ClosePath {
        closed: bool,
    },
    EllipseFigure {
        radius_x: f64,
        radius_y: f64,
        center: Point,
    },
    PolygonFigure {
        sides: u16,
        radius: f64,
        center: Point,
    },
    RectangleFigure {
        origin: Point,
        width: f64,
        height: f64,
    },
    RoundedRectangleFigure {
        origin: Point,
        width: f64,
        height: f64,
        radius_x: f64,
        radius_y: f64,
    },
}

impl ElementData {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::FillRule { .. } => CommandKind::FillRule,
            Self::MoveTo { .. } => CommandKind::MoveTo,
            Self::Line { .. } => CommandKind::Line,
            Self::HorizontalLine { .. } => CommandKind::HorizontalLine,
            Self::VerticalLine { .. } => CommandKind::VerticalLine,
            Self::QuadraticBezier { .. } => CommandKind::QuadraticBezier,
            Self::SmoothQuadraticBezier { .. } => CommandKind::SmoothQuadraticBezier,
            Self::CubicBezier { .. } => CommandKind::CubicBezier,
            Self::SmoothCubicBezier { .. } => CommandKind::SmoothCubicBezier,
            Self::Arc { .. } => CommandKind::Arc,
            Self::ClosePath { .. } => CommandKind::ClosePath,
            Self::EllipseFigure { .. } => CommandKind::EllipseFigure,
            Self::PolygonFigure { .. } => CommandKind::PolygonFigure,
            Self::RectangleFigure { .. } => CommandKind::RectangleFigure,
            Self::RoundedRectangleFigure { .. } => CommandKind::RoundedRectangleFigure,
        }
    }

    /// Default payload for a kind: nonzero fill rule, open close-path, zeroed coordinates.
    /// Path figures are composite and have no payload of their own.
    pub fn default_for(kind: CommandKind) -> Option<Self> {
        let origin = Point::origin();
        Some(match kind {
            CommandKind::PathFigure => return None,
            CommandKind::FillRule => Self::FillRule {
                rule: FillRule::default(),
            },
            CommandKind::MoveTo => Self::MoveTo { point: origin },
            CommandKind::Line => Self::Line { point: origin },
            CommandKind::HorizontalLine => Self::HorizontalLine { x: 0.0 },
            CommandKind::VerticalLine => Self::VerticalLine { y: 0.0 },
            CommandKind::QuadraticBezier => Self::QuadraticBezier {
                control: origin,
                point: origin,
            },
            CommandKind::SmoothQuadraticBezier => Self::SmoothQuadraticBezier { point: origin },
            CommandKind::CubicBezier => Self::CubicBezier {
                control1: origin,
                control2: origin,
                point: origin,
            },
            CommandKind::SmoothCubicBezier => Self::SmoothCubicBezier {
                control2: origin,
                point: origin,
            },
            CommandKind::Arc => Self::Arc {
                radius_x: 0.0,
                radius_y: 0.0,
                rotation: 0.0,
                large_arc: false,
                sweep_clockwise: false,
                point: origin,
            },
            CommandKind::ClosePath => Self::ClosePath { closed: false },
            CommandKind::EllipseFigure => Self::EllipseFigure {
                radius_x: 0.0,
                radius_y: 0.0,
                center: origin,
            },
            CommandKind::PolygonFigure => Self::PolygonFigure {
                sides: 0,
                radius: 0.0,
                center: origin,
            },
            CommandKind::RectangleFigure => Self::RectangleFigure {
                origin,
                width: 0.0,
                height: 0.0,
            },
            CommandKind::RoundedRectangleFigure => Self::RoundedRectangleFigure {
                origin,
                width: 0.0,
                height: 0.0,
                radius_x: 0.0,
                radius_y: 0.0,
            },
        })
    }
}

/// The atomic parsed unit of a path document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    /// Byte offset of the element in the source text (the command letter for a main tuple, the
    /// first non-whitespace character for a compacted one).
    pub index: usize,
    /// Lowercase command letter: coordinates are relative to the current point.
    pub relative: bool,
    /// Non-whitespace source characters this element accounts for.
    pub validation_count: usize,
    #[serde(flatten)]
    pub data: ElementData,
}

impl PathElement {
    pub fn new(index: usize, relative: bool, validation_count: usize, data: ElementData) -> Self {
        Self {
            index,
            relative,
            validation_count,
            data,
        }
    }

    /// Synthesized default for `kind`, accounting for no source characters.
    pub fn default_for(kind: CommandKind, index: usize) -> Option<Self> {
        ElementData::default_for(kind).map(|data| Self::new(index, false, 0, data))
    }

    pub fn kind(&self) -> CommandKind {
        self.data.kind()
    }
}
