//! Patch application: renders fixes to text edits and applies the largest
//! non-conflicting subset, one diagnostic at a time.

use crate::rewrite::TextEdit;
use crate::rules::Diagnostic;

/// Result of one fixing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub output: String,
    /// Diagnostics whose whole fix was applied.
    pub applied: usize,
    /// Fixable diagnostics held back by a conflict or an invalid edit.
    pub rejected: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Fixer;

impl Fixer {
    pub fn new() -> Self {
        Self
    }

    /// Apply fixes in diagnostic order. A fix is taken whole or not at all:
    /// any edit overlapping an already accepted edit rejects it, and it is
    /// left for the next pass.
    pub fn apply(&self, source: &str, diagnostics: &[Diagnostic]) -> FixOutcome {
        let mut accepted: Vec<(TextEdit, usize)> = Vec::new();
        let mut applied = 0;
        let mut rejected = 0;

        for diagnostic in diagnostics.iter().filter(|d| d.is_fixable()) {
            let Some(fix) = diagnostic.fix.as_ref() else {
                continue;
            };
            let edits = fix.edits();
            let valid = edits.iter().all(|e| is_valid_edit(source, e));
            let clashes = edits
                .iter()
                .any(|e| accepted.iter().any(|(a, _)| a.conflicts_with(e)));
            if !valid || clashes {
                tracing::trace!(
                    rule = diagnostic.rule_id,
                    line = diagnostic.line(),
                    valid,
                    "fix deferred"
                );
                rejected += 1;
                continue;
            }
            let seq = accepted.len();
            accepted.extend(edits.into_iter().enumerate().map(|(i, e)| (e, seq + i)));
            applied += 1;
        }

        FixOutcome {
            output: splice(source, accepted),
            applied,
            rejected,
        }
    }
}

fn is_valid_edit(source: &str, edit: &TextEdit) -> bool {
    edit.start <= edit.end
        && edit.end <= source.len()
        && source.is_char_boundary(edit.start)
        && source.is_char_boundary(edit.end)
}

/// Insertions at an offset go before a replacement starting there; equal
/// insertions keep acceptance order.
fn splice(source: &str, mut edits: Vec<(TextEdit, usize)>) -> String {
    edits.sort_by_key(|(e, seq)| (e.start, !e.is_insertion(), *seq));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for (edit, _) in edits {
        if edit.start < cursor {
            continue;
        }
        output.push_str(&source[cursor..edit.start]);
        output.push_str(&edit.text);
        cursor = edit.end;
    }
    output.push_str(&source[cursor..]);
    output
}
