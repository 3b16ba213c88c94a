//! Path document: parse orchestration and whole-document validation.

use crate::element::factory::{create_default, create_elements};
use crate::element::{CommandKind, ElementData, FillRule, PathElement};
use crate::emitter::{EmitOptions, Emitted, emit};
use crate::error::{GrammarReason, SequencingReason};
use crate::geometry::Geometry;
use crate::grammar::{element_regex, figure_regex, geometry_regex, non_whitespace_len};
use crate::{Error, ParseOptions, Result};
use regex::Captures;
use serde::Serialize;

/// An immutable, ordered sequence of parsed elements. The first element is always the fill rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathDocument {
    #[serde(skip)]
    source: String,
    elements: Vec<PathElement>,
}

fn matched_kind<'h>(
    caps: &Captures<'h>,
    kinds: &[CommandKind],
) -> Option<(CommandKind, regex::Match<'h>)> {
    kinds
        .iter()
        .find_map(|k| caps.name(k.name()).map(|m| (*k, m)))
}

fn grammar_error(text: &str, reason: GrammarReason) -> Error {
    Error::Grammar {
        text: text.to_string(),
        reason,
    }
}

/// Reads the elements of one path figure. A figure without a close command gets a synthesized,
/// open close-path element that accounts for no source characters.
fn read_path_figure(
    text: &str,
    base: usize,
    options: ParseOptions,
    out: &mut Vec<PathElement>,
) -> Result<()> {
    let mut closed = false;
    let mut end = 0;
    for caps in element_regex().captures_iter(text) {
        let Some((kind, m)) = matched_kind(&caps, &CommandKind::ELEMENTS) else {
            continue;
        };
        closed |= kind == CommandKind::ClosePath;
        out.extend(create_elements(kind, m.as_str(), base + m.start(), options)?);
        end = m.end();
    }
    if !closed {
        out.extend(create_default(CommandKind::ClosePath, base + end));
    }
    Ok(())
}

/// Orders elements and enforces the fill-rule invariant: at most one, and only in first position.
/// A default nonzero fill rule is inserted when none is present.
fn normalize(source: &str, mut elements: Vec<PathElement>) -> Result<Vec<PathElement>> {
    elements.sort_by_key(|e| e.index);

    let fill_rules = elements
        .iter()
        .filter(|e| e.kind() == CommandKind::FillRule)
        .count();
    if fill_rules > 1 {
        return Err(grammar_error(source, GrammarReason::MultipleFillRules));
    }
    match elements
        .iter()
        .position(|e| e.kind() == CommandKind::FillRule)
    {
        Some(0) => {}
        Some(_) => return Err(grammar_error(source, GrammarReason::FillRuleNotFirst)),
        None => {
            if let Some(fill_rule) = create_default(CommandKind::FillRule, 0) {
                elements.insert(0, fill_rule);
            }
        }
    }
    Ok(elements)
}

/// Figures may not nest: a figure begins only when none is open, and drawing elements only appear
/// inside an open path figure.
fn check_sequence(elements: &[PathElement]) -> Result<()> {
    let mut open = false;
    for e in elements {
        let kind = e.kind();
        let sequencing = |reason| Error::Sequencing {
            offset: e.index,
            kind,
            reason,
        };
        match kind {
            CommandKind::FillRule => {}
            k if k.begins_figure() => {
                if open {
                    return Err(sequencing(SequencingReason::FigureAlreadyOpen));
                }
                open = k == CommandKind::MoveTo;
            }
            CommandKind::ClosePath => {
                if !open {
                    return Err(sequencing(SequencingReason::NoOpenFigure));
                }
                open = false;
            }
            _ => {
                if !open {
                    return Err(sequencing(SequencingReason::NoOpenFigure));
                }
            }
        }
    }
    Ok(())
}

impl PathDocument {
    /// Parses with [`ParseOptions::default`] (strict numbers, arc angles in degrees).
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_options(text, ParseOptions::default())
    }

    pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Self> {
        let expected = non_whitespace_len(text);
        let covered = geometry_regex().find(text).map_or(0, |m| m.end());

        let mut elements = Vec::new();
        for caps in figure_regex().captures_iter(&text[..covered]) {
            let Some((kind, m)) = matched_kind(&caps, &CommandKind::FIGURES) else {
                continue;
            };
            match kind {
                CommandKind::PathFigure => {
                    read_path_figure(m.as_str(), m.start(), options, &mut elements)?
                }
                other => elements.extend(create_elements(other, m.as_str(), m.start(), options)?),
            }
        }

        let elements = normalize(text, elements)?;
        if !elements.iter().any(|e| e.kind().begins_figure()) {
            tracing::debug!(text, "path text matched no figure");
            return Err(grammar_error(text, GrammarReason::Unrecognized));
        }

        let consumed: usize = elements.iter().map(|e| e.validation_count).sum();
        if consumed != expected {
            tracing::debug!(expected, consumed, "path text has unrecognized characters");
            return Err(Error::Validation {
                text: text.to_string(),
                expected,
                consumed,
            });
        }

        check_sequence(&elements)?;

        tracing::debug!(
            elements = elements.len(),
            fill_rule = %fill_rule_of(&elements),
            "parsed path document"
        );
        Ok(Self {
            source: text.to_string(),
            elements,
        })
    }

    /// Builds a document from already-parsed elements (e.g. assembled programmatically). Elements
    /// are ordered by index and checked like parsed ones, except for character accounting.
    pub fn from_elements(elements: Vec<PathElement>) -> Result<Self> {
        let elements = normalize("", elements)?;
        check_sequence(&elements)?;
        Ok(Self {
            source: String::new(),
            elements,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn fill_rule(&self) -> FillRule {
        fill_rule_of(&self.elements)
    }

    pub fn emit(&self) -> Geometry {
        self.emit_with_options(EmitOptions::default()).geometry
    }

    pub fn emit_with_options(&self, options: EmitOptions) -> Emitted {
        emit(&self.elements, options)
    }
}

fn fill_rule_of(elements: &[PathElement]) -> FillRule {
    match elements.first().map(|e| e.data) {
        Some(ElementData::FillRule { rule }) => rule,
        _ => FillRule::default(),
    }
}

impl std::str::FromStr for PathDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
