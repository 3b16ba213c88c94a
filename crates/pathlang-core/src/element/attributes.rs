use super::{CommandKind, ElementData, FillRule, PathElement};
use crate::geom::{Point, point};
use crate::grammar::{literal, non_whitespace_len};
use crate::error::GrammarReason;
use crate::{AngleUnit, Error, NumericMode, ParseOptions, Result};
use regex::Captures;

/// Reads named attribute captures of one command tuple.
struct Attributes<'c, 'h> {
    caps: &'c Captures<'h>,
    base: usize,
    options: ParseOptions,
}

impl Attributes<'_, '_> {
    fn literal(&self, name: &str) -> (&str, usize) {
        match self.caps.name(name) {
            Some(m) => {
                let value = literal(m.as_str());
                (value, self.base + m.end() - value.len())
            }
            None => ("", self.base),
        }
    }

    fn rejected(&self, literal: &str, offset: usize) -> Result<()> {
        match self.options.numeric {
            NumericMode::Strict => Err(Error::NumericLiteral {
                literal: literal.to_string(),
                offset,
            }),
            NumericMode::Lenient => {
                tracing::debug!(literal, offset, "numeric literal defaulted to zero");
                Ok(())
            }
        }
    }

    fn float(&self, name: &str) -> Result<f64> {
        let (text, offset) = self.literal(name);
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => self.rejected(text, offset).map(|()| 0.0),
        }
    }

    fn point(&self, x: &str, y: &str) -> Result<Point> {
        Ok(point(self.float(x)?, self.float(y)?))
    }

    fn angle(&self, name: &str) -> Result<f64> {
        let value = self.float(name)?;
        Ok(match self.options.angle_unit {
            AngleUnit::Degrees => value.to_radians(),
            AngleUnit::Radians => value,
        })
    }

    fn sides(&self, name: &str) -> Result<u16> {
        let (text, offset) = self.literal(name);
        match text.parse::<u16>() {
            Ok(v) => Ok(v),
            Err(_) => self.rejected(text, offset).map(|()| 0),
        }
    }

    fn flag(&self, name: &str) -> bool {
        self.literal(name).0 == "1"
    }

    fn data(&self, kind: CommandKind) -> Result<ElementData> {
        Ok(match kind {
            CommandKind::FillRule => ElementData::FillRule {
                rule: FillRule::from_flag(self.flag("Value")),
            },
            // Path figures are read element by element and have no attributes of their own.
            CommandKind::PathFigure => {
                return Err(Error::Grammar {
                    text: self.caps.get(0).map_or("", |m| m.as_str()).to_string(),
                    reason: GrammarReason::Unrecognized,
                });
            }
            CommandKind::MoveTo => ElementData::MoveTo {
                point: self.point("X", "Y")?,
            },
            CommandKind::Line => ElementData::Line {
                point: self.point("X", "Y")?,
            },
            CommandKind::HorizontalLine => ElementData::HorizontalLine {
                x: self.float("X")?,
            },
            CommandKind::VerticalLine => ElementData::VerticalLine {
                y: self.float("Y")?,
            },
            CommandKind::QuadraticBezier => ElementData::QuadraticBezier {
                control: self.point("X1", "Y1")?,
                point: self.point("X", "Y")?,
            },
            CommandKind::SmoothQuadraticBezier => ElementData::SmoothQuadraticBezier {
                point: self.point("X", "Y")?,
            },
            CommandKind::CubicBezier => ElementData::CubicBezier {
                control1: self.point("X1", "Y1")?,
                control2: self.point("X2", "Y2")?,
                point: self.point("X", "Y")?,
            },
            CommandKind::SmoothCubicBezier => ElementData::SmoothCubicBezier {
                control2: self.point("X2", "Y2")?,
                point: self.point("X", "Y")?,
            },
            CommandKind::Arc => ElementData::Arc {
                radius_x: self.float("RadiusX")?.abs(),
                radius_y: self.float("RadiusY")?.abs(),
                rotation: self.angle("Angle")?,
                large_arc: self.flag("IsLargeArc"),
                sweep_clockwise: self.flag("SweepDirection"),
                point: self.point("X", "Y")?,
            },
            CommandKind::ClosePath => ElementData::ClosePath { closed: true },
            CommandKind::EllipseFigure => ElementData::EllipseFigure {
                radius_x: self.float("RadiusX")?.abs(),
                radius_y: self.float("RadiusY")?.abs(),
                center: self.point("X", "Y")?,
            },
            CommandKind::PolygonFigure => ElementData::PolygonFigure {
                sides: self.sides("Sides")?,
                radius: self.float("Radius")?,
                center: self.point("X", "Y")?,
            },
            CommandKind::RectangleFigure => ElementData::RectangleFigure {
                origin: self.point("X", "Y")?,
                width: self.float("Width")?,
                height: self.float("Height")?,
            },
            CommandKind::RoundedRectangleFigure => ElementData::RoundedRectangleFigure {
                origin: self.point("X", "Y")?,
                width: self.float("Width")?,
                height: self.float("Height")?,
                radius_x: self.float("RadiusX")?.abs(),
                radius_y: self.float("RadiusY")?.abs(),
            },
        })
    }
}

impl PathElement {
    /// Populates an element from a `main` match (command letter + first tuple). `base` is the
    /// byte offset of the matched haystack within the source.
    pub(crate) fn initialize(
        kind: CommandKind,
        caps: &Captures<'_>,
        base: usize,
        options: ParseOptions,
    ) -> Result<Self> {
        let (index, relative) = match caps.name("Command") {
            Some(m) => (
                base + m.start(),
                m.as_str().chars().all(|c| c.is_ascii_lowercase()),
            ),
            None => (base, false),
        };
        let attrs = Attributes {
            caps,
            base,
            options,
        };
        Ok(Self::new(
            index,
            relative,
            matched_count(caps),
            attrs.data(kind)?,
        ))
    }

    /// Populates an element from one compacted tuple that inherits `relative` from the command
    /// that introduced it.
    pub(crate) fn initialize_additional(
        kind: CommandKind,
        caps: &Captures<'_>,
        base: usize,
        relative: bool,
        options: ParseOptions,
    ) -> Result<Self> {
        let index = caps.get(0).map_or(base, |m| {
            let text = m.as_str();
            base + m.start() + (text.len() - text.trim_start().len())
        });
        let attrs = Attributes {
            caps,
            base,
            options,
        };
        Ok(Self::new(
            index,
            relative,
            matched_count(caps),
            attrs.data(kind)?,
        ))
    }
}

fn matched_count(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(0, |m| non_whitespace_len(m.as_str()))
}
