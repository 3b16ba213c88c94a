#![forbid(unsafe_code)]

//! Path mini-language parser + geometry emitter (headless).
//!
//! The language is a superset of SVG path data: a leading fill rule (`F0`/`F1`), sub-paths built
//! from the usual drawing commands, and shape figures (ellipse `O`, polygon `P`, rectangle `R`,
//! rounded rectangle `U`). Parsing produces an ordered [`PathDocument`]; emission turns it into
//! renderer-agnostic [`Geometry`].
//!
//! ```
//! let geometry = pathlang_core::parse("M 0,0 L 10,0 L 10,10 Z").unwrap();
//! assert_eq!(geometry.figures.len(), 1);
//! assert!(geometry.figures[0].closed);
//! ```

pub mod arc;
pub mod document;
pub mod element;
pub mod emitter;
pub mod error;
pub mod geom;
pub mod geometry;
pub mod grammar;
pub mod svg;

pub use arc::ArcParameterization;
pub use document::PathDocument;
pub use element::{CommandKind, ElementData, FillRule, PathElement};
pub use emitter::{EmitOptions, Emitted};
pub use error::{Error, GrammarReason, Result, SequencingReason};
pub use geometry::{ArcSegment, Geometry, Segment, SubPath};

/// How numeric literals that do not fit their field (overflow, negative side counts) are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericMode {
    /// Reject the whole document.
    #[default]
    Strict,
    /// Substitute zero and keep going.
    Lenient,
}

/// Unit of the arc x-axis-rotation field in source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub numeric: NumericMode,
    pub angle_unit: AngleUnit,
}

impl ParseOptions {
    /// Strict parsing (malformed numbers are returned as errors).
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient parsing: malformed numbers become zero.
    pub fn lenient() -> Self {
        Self {
            numeric: NumericMode::Lenient,
            ..Self::default()
        }
    }

    pub fn with_numeric(mut self, numeric: NumericMode) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn with_angle_unit(mut self, angle_unit: AngleUnit) -> Self {
        self.angle_unit = angle_unit;
        self
    }
}

/// Parses `text` and emits its geometry in one step.
pub fn parse(text: &str) -> Result<Geometry> {
    parse_with_options(text, ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Geometry> {
    Ok(PathDocument::parse_with_options(text, options)?.emit())
}

#[cfg(test)]
mod tests;
