//! Core types for the rules engine.

use serde::{Deserialize, Serialize};

use crate::ast::{Document, Range, Span};
use crate::rewrite::{PatchOperation, TextEdit};

/// Severity levels for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Parse a configured rule level. `off` (and anything unknown) is `None`.
    pub fn from_level(level: &str) -> Option<Severity> {
        match level {
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            "info" => Some(Severity::Info),
            "hint" => Some(Severity::Hint),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of finding a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A raw value with a known replacement.
    Match,
    /// A color with no known path under strict mode. Never fixable.
    PolicyViolation,
    /// A match whose context cannot hold the rewrite; the fix is empty.
    UnfixableContext,
}

/// Ordered patch operations, applied all-or-nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fix {
    pub operations: Vec<PatchOperation>,
}

impl Fix {
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self { operations }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn edits(&self) -> Vec<TextEdit> {
        self.operations.iter().map(PatchOperation::render).collect()
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub rule_id: &'static str,
    pub message: String,
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub span: Span,
    pub range: Range,
    pub fix: Option<Fix>,
    pub suppressed: bool,
}

impl Diagnostic {
    pub fn new(
        doc: &Document,
        rule_id: &'static str,
        severity: Severity,
        kind: DiagnosticKind,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            message: message.into(),
            severity,
            kind,
            span,
            range: doc.range_of(span),
            fix: None,
            suppressed: false,
        }
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn line(&self) -> u32 {
        self.range.start.line
    }

    pub fn column(&self) -> u32 {
        self.range.start.column
    }

    /// Has a non-empty fix and is not suppressed.
    pub fn is_fixable(&self) -> bool {
        !self.suppressed && self.fix.as_ref().is_some_and(|f| !f.is_empty())
    }
}
