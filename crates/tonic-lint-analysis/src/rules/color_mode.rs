//! `enforce-color-mode`: literal colors on component color props become
//! reads off the `colorStyle` accessor, with the accessor declarations and
//! import added where missing.

use tonic_lint_core::config::ColorModeConfig;
use tonic_lint_core::constants::{COLOR_STYLE_BINDING, RULE_ENFORCE_COLOR_MODE};
use tonic_lint_core::types::collections::FxHashSet;

use crate::ast::{Document, ExprKind};
use crate::catalog::{color_key, AliasCatalog, ColorStyleCatalog};
use crate::normalize::is_special_color;
use crate::rewrite::{
    accessor_host, accessor_import, leading_statements, replace_with_member_path, AccessorHost,
    TraversalContext,
};
use crate::walker::{LiteralOccurrence, OccurrenceVisitor, TreeWalker, WalkOptions};

use super::suppression::SuppressionChecker;
use super::types::{Diagnostic, DiagnosticKind, Fix, Severity};
use super::Rule;

const HARDCODED_COLOR_MESSAGE: &str = "Use colorStyle hook instead of hardcoded color";

/// CSS color functions that strict mode treats as colors. Any other call
/// (gradients, `var()`, `url()`) is exempt.
const COLOR_FUNCTIONS: [&str; 4] = ["rgb(", "rgba(", "hsl(", "hsla("];

pub struct ColorModeRule {
    catalog: &'static AliasCatalog,
    styles: ColorStyleCatalog,
    /// Ignored colors, both verbatim and folded.
    ignored: FxHashSet<String>,
    strict: bool,
    import_source: String,
    severity: Severity,
    suppressions: SuppressionChecker,
}

impl ColorModeRule {
    pub fn new(config: &ColorModeConfig, severity: Severity) -> Self {
        let ignored = config
            .ignored_colors
            .iter()
            .flat_map(|c| [c.clone(), color_key(c)])
            .collect();
        Self {
            catalog: AliasCatalog::global(),
            styles: ColorStyleCatalog::from_config(config),
            ignored,
            strict: config.effective_only_allow_known_aliases(),
            import_source: config.effective_import_source().to_string(),
            severity,
            suppressions: SuppressionChecker::new(),
        }
    }

    pub fn styles(&self) -> &ColorStyleCatalog {
        &self.styles
    }

    fn is_ignored(&self, value: &str) -> bool {
        self.ignored.contains(value) || self.ignored.contains(&color_key(value))
    }
}

impl Rule for ColorModeRule {
    fn id(&self) -> &'static str {
        RULE_ENFORCE_COLOR_MODE
    }

    fn description(&self) -> &'static str {
        "Read component colors from the color-mode aware colorStyle accessor"
    }

    fn check(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut visitor = ColorModeVisitor {
            rule: self,
            doc,
            context: TraversalContext::new(),
            diagnostics: Vec::new(),
        };
        TreeWalker::new(self.catalog, WalkOptions::default()).walk(doc, &mut visitor);
        tracing::debug!(
            path = %doc.path,
            violations = visitor.diagnostics.len(),
            import_inserted = visitor.context.import_claimed(),
            "color mode check complete"
        );
        visitor.diagnostics
    }
}

struct ColorModeVisitor<'r, 'd> {
    rule: &'r ColorModeRule,
    doc: &'d Document,
    context: TraversalContext,
    diagnostics: Vec<Diagnostic>,
}

impl ColorModeVisitor<'_, '_> {
    fn diagnostic(&self, kind: DiagnosticKind, occurrence: &LiteralOccurrence<'_>, message: String) -> Diagnostic {
        let mut diagnostic = Diagnostic::new(
            self.doc,
            RULE_ENFORCE_COLOR_MODE,
            self.rule.severity,
            kind,
            occurrence.literal.span,
            message,
        );
        diagnostic.suppressed =
            self.rule
                .suppressions
                .is_suppressed(self.doc, diagnostic.line(), RULE_ENFORCE_COLOR_MODE);
        diagnostic
    }

    /// Replacement plus whatever one-time insertions this match is the
    /// first to need. `None` when there is nowhere to declare the accessor.
    fn plan_fix(&mut self, occurrence: &LiteralOccurrence<'_>, path: &str) -> Option<Fix> {
        let replacement = replace_with_member_path(
            occurrence.position,
            occurrence.literal.span,
            COLOR_STYLE_BINDING,
            path,
        );
        let mut operations = Vec::new();
        match accessor_host(self.doc, occurrence.element.scope) {
            AccessorHost::InScope => {}
            AccessorHost::Component(component) => {
                if self.context.claim_hook(component.id) {
                    operations.extend(leading_statements(component));
                }
            }
            AccessorHost::Unavailable => return None,
        }
        // Once per file, whether or not this scope needed a hook.
        if self.context.claim_import() {
            operations.extend(accessor_import(self.doc, &self.rule.import_source));
        }
        operations.push(replacement);
        Some(Fix::new(operations))
    }
}

impl<'d> OccurrenceVisitor<'d> for ColorModeVisitor<'_, 'd> {
    fn on_literal(&mut self, occurrence: &LiteralOccurrence<'d>) {
        if !self.rule.catalog.is_color_property(occurrence.prop_name) {
            return;
        }
        let ExprKind::String { value } = &occurrence.literal.kind else {
            return;
        };
        if is_special_color(value) || self.rule.is_ignored(value) {
            return;
        }

        let Some(path) = self.rule.styles.path_for_value(value).map(str::to_string) else {
            if self.rule.strict && looks_like_color(value) {
                let diagnostic = self.diagnostic(
                    DiagnosticKind::PolicyViolation,
                    occurrence,
                    format!("Color \"{value}\" has no colorStyle path; use a known color alias"),
                );
                tracing::trace!(line = diagnostic.line(), value = %value, "unknown color");
                self.diagnostics.push(diagnostic);
            }
            return;
        };

        let mut diagnostic = self.diagnostic(
            DiagnosticKind::Match,
            occurrence,
            HARDCODED_COLOR_MESSAGE.to_string(),
        );
        // Suppressed matches must not claim the one-time insertions.
        if !diagnostic.suppressed {
            match self.plan_fix(occurrence, &path) {
                Some(fix) => diagnostic.fix = Some(fix),
                None => {
                    diagnostic.kind = DiagnosticKind::UnfixableContext;
                    diagnostic.fix = Some(Fix::empty());
                }
            }
        }
        tracing::trace!(line = diagnostic.line(), path = %path, kind = ?diagnostic.kind, "hardcoded color");
        self.diagnostics.push(diagnostic);
    }
}

/// Whether strict mode should treat `value` as a color: hex, `name:shade`
/// tokens, `rgb`/`hsl` functions and bare color keywords.
pub fn looks_like_color(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some((name, shade)) = value.split_once(':') {
        return !name.is_empty()
            && !shade.is_empty()
            && name.chars().all(|c| c.is_ascii_alphabetic())
            && shade.chars().all(|c| c.is_ascii_alphanumeric());
    }
    if COLOR_FUNCTIONS.iter().any(|f| value.starts_with(f)) {
        return true;
    }
    !value.is_empty() && value != "none" && value.chars().all(|c| c.is_ascii_alphabetic())
}
