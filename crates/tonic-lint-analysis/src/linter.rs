//! Linter orchestrator: parse, run the enabled rules, fix until stable.

use std::path::Path;

use serde::Serialize;
use tonic_lint_core::config::TonicLintConfig;
use tonic_lint_core::constants::{MAX_FIX_PASSES, RULE_ENFORCE_COLOR_MODE, RULE_ENFORCE_SHORTHANDS};
use tonic_lint_core::errors::LintError;

use crate::ast::{Document, Range};
use crate::fixer::Fixer;
use crate::parsers::JsxParser;
use crate::rules::{ColorModeRule, Diagnostic, Rule, Severity, ShorthandsRule};

/// Diagnostics for one document.
#[derive(Debug, Clone)]
pub struct LintReport {
    pub path: String,
    pub diagnostics: Vec<Diagnostic>,
    /// Syntax errors tolerated while parsing.
    pub parse_errors: Vec<Range>,
}

impl LintReport {
    /// Diagnostics not silenced by an inline directive.
    pub fn active(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.suppressed)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.active().filter(|d| d.severity == severity).count()
    }

    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_fixable()).count()
    }
}

/// Output of [`Linter::fix_source`].
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub path: String,
    pub output: String,
    /// Passes that changed the source.
    pub passes: usize,
    /// Fixes applied across all passes.
    pub applied: usize,
    /// Unsuppressed diagnostics left after the last pass.
    #[serde(skip)]
    pub remaining: Vec<Diagnostic>,
}

impl FixReport {
    pub fn changed(&self) -> bool {
        self.passes > 0
    }
}

pub struct Linter {
    parser: JsxParser,
    fixer: Fixer,
    rules: Vec<Box<dyn Rule>>,
}

impl Linter {
    /// Validate `config` and register every rule whose level is not `off`.
    pub fn new(config: &TonicLintConfig) -> Result<Self, LintError> {
        TonicLintConfig::validate(config)?;

        let mut rules: Vec<Box<dyn Rule>> = Vec::new();
        if let Some(severity) = Severity::from_level(config.rules.level(RULE_ENFORCE_SHORTHANDS)) {
            rules.push(Box::new(ShorthandsRule::new(&config.shorthands, severity)));
        }
        if let Some(severity) = Severity::from_level(config.rules.level(RULE_ENFORCE_COLOR_MODE)) {
            rules.push(Box::new(ColorModeRule::new(&config.color_mode, severity)));
        }
        tracing::debug!(
            rules = ?rules.iter().map(|r| r.id()).collect::<Vec<_>>(),
            "linter ready"
        );

        Ok(Self {
            parser: JsxParser::new(),
            fixer: Fixer::new(),
            rules,
        })
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn lint_source(&self, path: &Path, source: &str) -> Result<LintReport, LintError> {
        let doc = self.parser.parse(source, path)?;
        let diagnostics = self.check(&doc);
        Ok(LintReport {
            path: doc.path,
            diagnostics,
            parse_errors: doc.error_ranges,
        })
    }

    /// Read `path` as UTF-8 and lint it.
    pub fn lint_file(&self, path: &Path) -> Result<LintReport, LintError> {
        let source = std::fs::read_to_string(path).map_err(|e| LintError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.lint_source(path, &source)
    }

    /// Lint and fix repeatedly until nothing applies or the pass limit is
    /// hit. Each pass re-parses the previous output.
    pub fn fix_source(&self, path: &Path, source: &str) -> Result<FixReport, LintError> {
        let mut current = source.to_string();
        let mut passes = 0;
        let mut applied = 0;

        let remaining = loop {
            let doc = self.parser.parse(&current, path)?;
            let diagnostics = self.check(&doc);
            if passes >= MAX_FIX_PASSES {
                tracing::warn!(path = %doc.path, passes, "fix pass limit reached");
                break diagnostics;
            }

            let outcome = self.fixer.apply(&current, &diagnostics);
            if outcome.applied == 0 {
                break diagnostics;
            }
            tracing::debug!(
                path = %doc.path,
                pass = passes + 1,
                applied = outcome.applied,
                deferred = outcome.rejected,
                "fix pass"
            );
            passes += 1;
            applied += outcome.applied;
            current = outcome.output;
        };

        Ok(FixReport {
            path: path.display().to_string(),
            output: current,
            passes,
            applied,
            remaining: remaining.into_iter().filter(|d| !d.suppressed).collect(),
        })
    }

    /// Run every rule over `doc`; diagnostics come back in source order.
    pub fn check(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> =
            self.rules.iter().flat_map(|rule| rule.check(doc)).collect();
        diagnostics.sort_by_key(|d| d.span.start);
        tracing::debug!(path = %doc.path, diagnostics = diagnostics.len(), "document checked");
        diagnostics
    }
}
