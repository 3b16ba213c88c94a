//! Regular grammar of the path mini-language.
//!
//! The grammar has two levels:
//! - the *figure* grammar locates the optional fill rule and every figure (path figure, ellipse,
//!   polygon, rectangle, rounded rectangle) in the source text;
//! - the *element* grammar locates the drawing commands inside a path figure.
//!
//! Every command additionally has a narrower `main` pattern (command letter + first tuple) and an
//! `additional` pattern (one compacted tuple) with a named capture per attribute. Attribute
//! captures include their leading separator; [`literal`] strips it.
//!
//! All fragments tolerate leading whitespace and never require trailing whitespace, so they can be
//! concatenated without losing input. The `regex` crate has no look-around, so the "bare sign or dot
//! separates numbers" rule (`1-2`, `0.5.5`) is folded into the separator-plus-number fragments.

use crate::element::CommandKind;
use regex::Regex;
use std::fmt::Write as _;
use std::sync::OnceLock;

const SPACER: &str = r"\s*";
const SPACE_OR_COMMA: &str = r"(?:\s+|\s*,\s*)";
const FLOAT_BODY: &str = r"(?:[0-9]+\.?[0-9]*(?:[eE][-+]?[0-9]+)?|\.[0-9]+(?:[eE][-+]?[0-9]+)?)";
const LEADING_DOT_FLOAT: &str = r"\.[0-9]+(?:[eE][-+]?[0-9]+)?";
const INTEGER_BODY: &str = "[0-9]+";

/// One attribute of a command tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Float(&'static str),
    Integer(&'static str),
    Flag(&'static str),
}

impl Field {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Field::Float(name) | Field::Integer(name) | Field::Flag(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    /// First tuple after a command letter: optional whitespace only.
    Spacer,
    /// Compacted tuple: a full separator.
    Sep,
}

pub(crate) fn fields(kind: CommandKind) -> &'static [Field] {
    use Field::*;
    match kind {
        CommandKind::FillRule => &[Flag("Value")],
        CommandKind::PathFigure | CommandKind::ClosePath => &[],
        CommandKind::MoveTo | CommandKind::Line | CommandKind::SmoothQuadraticBezier => {
            &[Float("X"), Float("Y")]
        }
        CommandKind::HorizontalLine => &[Float("X")],
        CommandKind::VerticalLine => &[Float("Y")],
        CommandKind::QuadraticBezier => &[Float("X1"), Float("Y1"), Float("X"), Float("Y")],
        CommandKind::CubicBezier => &[
            Float("X1"),
            Float("Y1"),
            Float("X2"),
            Float("Y2"),
            Float("X"),
            Float("Y"),
        ],
        CommandKind::SmoothCubicBezier => &[Float("X2"), Float("Y2"), Float("X"), Float("Y")],
        CommandKind::Arc => &[
            Float("RadiusX"),
            Float("RadiusY"),
            Float("Angle"),
            Flag("IsLargeArc"),
            Flag("SweepDirection"),
            Float("X"),
            Float("Y"),
        ],
        CommandKind::EllipseFigure => &[Float("RadiusX"), Float("RadiusY"), Float("X"), Float("Y")],
        CommandKind::PolygonFigure => &[Integer("Sides"), Float("Radius"), Float("X"), Float("Y")],
        CommandKind::RectangleFigure => &[Float("X"), Float("Y"), Float("Width"), Float("Height")],
        CommandKind::RoundedRectangleFigure => &[
            Float("X"),
            Float("Y"),
            Float("Width"),
            Float("Height"),
            Float("RadiusX"),
            Float("RadiusY"),
        ],
    }
}

/// A bare leading dot only separates a float from a preceding value that can hold a fraction
/// (`0.5.5`); after an integer it would split the integer's own digits (`6.5`).
fn sep_float(after_integer: bool) -> String {
    if after_integer {
        format!("(?:{SPACE_OR_COMMA}[-+]?{FLOAT_BODY}|[-+]{FLOAT_BODY})")
    } else {
        format!("(?:{SPACE_OR_COMMA}[-+]?{FLOAT_BODY}|[-+]{FLOAT_BODY}|{LEADING_DOT_FLOAT})")
    }
}

fn sep_integer() -> String {
    format!("(?:{SPACE_OR_COMMA}[-+]?{INTEGER_BODY}|[-+]{INTEGER_BODY})")
}

fn tuple(fields: &[Field], lead: Lead, capture: bool) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().copied().enumerate() {
        let first = i == 0 && lead == Lead::Spacer;
        let after_integer = i > 0 && matches!(fields[i - 1], Field::Integer(_));
        let body = match (field, first) {
            (Field::Float(_), true) => format!("[-+]?{FLOAT_BODY}"),
            (Field::Float(_), false) => sep_float(after_integer),
            (Field::Integer(_), true) => format!("[-+]?{INTEGER_BODY}"),
            (Field::Integer(_), false) => sep_integer(),
            (Field::Flag(_), true) => "[01]".to_string(),
            (Field::Flag(_), false) => format!("{SPACE_OR_COMMA}[01]"),
        };
        if first {
            out.push_str(SPACER);
        }
        if capture {
            let _ = write!(&mut out, "(?P<{}>{body})", field.name());
        } else {
            let _ = write!(&mut out, "(?:{body})");
        }
    }
    out
}

fn letter_class(kind: CommandKind) -> String {
    format!("[{}]", kind.letters().unwrap_or_default())
}

/// Locating fragment (no captures) for a single command with all of its compacted tuples.
fn command_fragment(kind: CommandKind) -> String {
    let fields = fields(kind);
    let mut out = format!("{SPACER}{}{}", letter_class(kind), tuple(fields, Lead::Spacer, false));
    if kind.accepts_additional() {
        let _ = write!(&mut out, "(?:{})*", tuple(fields, Lead::Sep, false));
    }
    out
}

const PATH_FIGURE_BODY: [CommandKind; 8] = [
    CommandKind::Line,
    CommandKind::HorizontalLine,
    CommandKind::VerticalLine,
    CommandKind::QuadraticBezier,
    CommandKind::SmoothQuadraticBezier,
    CommandKind::CubicBezier,
    CommandKind::SmoothCubicBezier,
    CommandKind::Arc,
];

fn path_figure_fragment() -> String {
    let body = PATH_FIGURE_BODY
        .iter()
        .map(|k| command_fragment(*k))
        .collect::<Vec<_>>()
        .join("|");
    format!(
        "{}(?:{body})*(?:{})?",
        command_fragment(CommandKind::MoveTo),
        command_fragment(CommandKind::ClosePath)
    )
}

fn figure_fragment(kind: CommandKind) -> String {
    match kind {
        CommandKind::PathFigure => path_figure_fragment(),
        other => command_fragment(other),
    }
}

fn alternation(kinds: &[CommandKind], named: bool) -> String {
    kinds
        .iter()
        .map(|k| {
            let frag = figure_fragment(*k);
            if named {
                format!("(?P<{}>{frag})", k.name())
            } else {
                format!("(?:{frag})")
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

/// Whole-document grammar, anchored at the start: any sequence of fill rules and figures.
pub(crate) fn geometry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        compile(&format!(
            "^(?:{})*",
            alternation(&CommandKind::FIGURES, false)
        ))
    })
}

/// Locates one fill rule or figure; the matching named group is the figure kind.
pub(crate) fn figure_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(&alternation(&CommandKind::FIGURES, true)))
}

/// Locates one drawing command inside a path figure; the matching named group is the element kind.
pub(crate) fn element_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alts = CommandKind::ELEMENTS
            .iter()
            .map(|k| format!("(?P<{}>{})", k.name(), command_fragment(*k)))
            .collect::<Vec<_>>()
            .join("|");
        compile(&alts)
    })
}

pub(crate) struct CommandPatterns {
    pub(crate) main: Regex,
    pub(crate) additional: Option<Regex>,
}

/// Attribute-extraction patterns for a command. `None` for path figures, whose children are
/// extracted through [`element_regex`].
pub(crate) fn command_patterns(kind: CommandKind) -> Option<&'static CommandPatterns> {
    static PATTERNS: OnceLock<Vec<Option<CommandPatterns>>> = OnceLock::new();
    let table = PATTERNS.get_or_init(|| {
        CommandKind::ALL
            .iter()
            .map(|k| {
                let letters = k.letters()?;
                let fields = fields(*k);
                let main = compile(&format!(
                    "^{SPACER}(?P<Command>[{letters}]){}",
                    tuple(fields, Lead::Spacer, true)
                ));
                let additional = k
                    .accepts_additional()
                    .then(|| compile(&format!("^{}", tuple(fields, Lead::Sep, true))));
                Some(CommandPatterns { main, additional })
            })
            .collect()
    });
    table.get(kind as usize).and_then(Option::as_ref)
}

/// Strips the separator captured in front of an attribute value.
pub(crate) fn literal(captured: &str) -> &str {
    captured.trim_start_matches(|c: char| c.is_whitespace() || c == ',')
}

/// Number of non-whitespace characters in `text`.
pub fn non_whitespace_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
