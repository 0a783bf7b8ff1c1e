//! Inline suppression: `tonic-lint-ignore` and `eslint-disable-next-line`.

use tonic_lint_core::constants::SUPPRESSION_MARKER;

use crate::ast::Document;

const ESLINT_NEXT_LINE: &str = "eslint-disable-next-line";

/// Checks whether diagnostics are suppressed via inline comments.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuppressionChecker;

impl SuppressionChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check if a diagnostic of `rule_id` on 1-based `line` is suppressed.
    ///
    /// Supports, on the same line or the line above:
    /// - `// tonic-lint-ignore`: suppress every rule
    /// - `// tonic-lint-ignore enforce-shorthands`: one rule
    /// - `{/* tonic-lint-ignore a, b */}`: several rules
    /// - `// eslint-disable-next-line [rules]` with the same rule syntax
    pub fn is_suppressed(&self, doc: &Document, line: u32, rule_id: &str) -> bool {
        if line == 0 {
            return false;
        }
        if doc
            .line_text(line)
            .is_some_and(|l| self.line_suppresses(l, rule_id))
        {
            return true;
        }
        line > 1
            && doc
                .line_text(line - 1)
                .is_some_and(|l| self.line_suppresses(l, rule_id))
    }

    fn line_suppresses(&self, line: &str, rule_id: &str) -> bool {
        [SUPPRESSION_MARKER, ESLINT_NEXT_LINE]
            .iter()
            .find_map(|marker| self.check_directive(line, marker, rule_id))
            .unwrap_or(false)
    }

    /// `None` when the line has no such directive in a comment.
    fn check_directive(&self, line: &str, marker: &str, rule_id: &str) -> Option<bool> {
        let trimmed = line.trim();
        let pos = trimmed.find(marker)?;

        let before = &trimmed[..pos];
        if !before.contains("//") && !before.contains("/*") {
            return None;
        }

        let after = trimmed[pos + marker.len()..].trim();
        let after = after
            .split("*/")
            .next()
            .unwrap_or("")
            .split("--")
            .next()
            .unwrap_or("")
            .trim();
        if after.is_empty() {
            return Some(true);
        }

        Some(after.split(',').map(str::trim).any(|r| r == rule_id))
    }

    /// Extract all suppression directives from a document.
    pub fn extract_directives(&self, doc: &Document) -> Vec<SuppressionDirective> {
        (1..=doc.line_count() as u32)
            .filter_map(|line| {
                let text = doc.line_text(line)?;
                self.parse_directive(line, text)
            })
            .collect()
    }

    fn parse_directive(&self, line: u32, text: &str) -> Option<SuppressionDirective> {
        let trimmed = text.trim();
        let pos = trimmed.find(SUPPRESSION_MARKER)?;
        let before = &trimmed[..pos];
        if !before.contains("//") && !before.contains("/*") {
            return None;
        }
        let after = trimmed[pos + SUPPRESSION_MARKER.len()..]
            .split("*/")
            .next()
            .unwrap_or("")
            .trim();
        let rule_ids = if after.is_empty() {
            Vec::new()
        } else {
            after.split(',').map(|s| s.trim().to_string()).collect()
        };
        Some(SuppressionDirective {
            line,
            applies_to_line: line + 1,
            rule_ids,
        })
    }
}

/// A parsed `tonic-lint-ignore` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressionDirective {
    pub line: u32,
    pub applies_to_line: u32,
    /// Empty means every rule.
    pub rule_ids: Vec<String>,
}
