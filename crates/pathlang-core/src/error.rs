use crate::element::CommandKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Path grammar mismatch ({reason}) for text: {text}")]
    Grammar { text: String, reason: GrammarReason },

    #[error(
        "Path validation failed: {consumed} of {expected} non-whitespace characters were recognized in: {text}"
    )]
    Validation {
        text: String,
        expected: usize,
        consumed: usize,
    },

    #[error("Invalid figure sequence at offset {offset}: {kind} {reason}")]
    Sequencing {
        offset: usize,
        kind: CommandKind,
        reason: SequencingReason,
    },

    #[error("Invalid numeric literal `{literal}` at offset {offset}")]
    NumericLiteral { literal: String, offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GrammarReason {
    #[error("no figure or fill rule recognized")]
    Unrecognized,
    #[error("more than one fill rule")]
    MultipleFillRules,
    #[error("fill rule must come first")]
    FillRuleNotFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequencingReason {
    #[error("begins a figure while another figure is still open")]
    FigureAlreadyOpen,
    #[error("appears outside of an open figure")]
    NoOpenFigure,
}
