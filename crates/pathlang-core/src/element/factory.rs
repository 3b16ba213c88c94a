//! Dispatch from a command kind to the matching element variant.
//!
//! Stateless: the compiled patterns are process-wide and read-only, so independent documents can
//! be built concurrently.

use super::{CommandKind, PathElement};
use crate::grammar::command_patterns;
use crate::{ParseOptions, Result};

/// Reads the command occurrence at the start of `text` (a figure or element capture located at
/// byte offset `base` of the source): the main tuple first, then every compacted tuple, each
/// inheriting the main tuple's relative flag.
pub fn create_elements(
    kind: CommandKind,
    text: &str,
    base: usize,
    options: ParseOptions,
) -> Result<Vec<PathElement>> {
    let Some(patterns) = command_patterns(kind) else {
        return Ok(Vec::new());
    };
    let Some(caps) = patterns.main.captures(text) else {
        return Ok(Vec::new());
    };
    let main = PathElement::initialize(kind, &caps, base, options)?;
    let mut out = vec![main];

    let Some(additional) = &patterns.additional else {
        return Ok(out);
    };
    let mut pos = caps.get(0).map_or(0, |m| m.end());
    while let Some(caps) = additional.captures(&text[pos..]) {
        let Some(m) = caps.get(0) else {
            break;
        };
        if m.is_empty() {
            break;
        }
        out.push(PathElement::initialize_additional(
            kind.additional_kind(),
            &caps,
            base + pos,
            main.relative,
            options,
        )?);
        pos += m.end();
    }
    Ok(out)
}

/// Default element for a kind (nonzero fill rule, open close-path, zeroed coordinates).
pub fn create_default(kind: CommandKind, index: usize) -> Option<PathElement> {
    PathElement::default_for(kind, index)
}
