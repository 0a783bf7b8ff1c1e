//! `enforce-shorthands`: raw sizes, weights, z-indices, radii and colors on
//! component attributes become catalog tokens; border shorthands lose their
//! color to a `<prop>Color` sibling.

use tonic_lint_core::config::ShorthandsConfig;
use tonic_lint_core::constants::RULE_ENFORCE_SHORTHANDS;

use crate::ast::Document;
use crate::catalog::{AliasCatalog, PropertyKind};
use crate::normalize::{resolve, RawValue};
use crate::rewrite::{plan_border, replace_with_token, BorderRewrite};
use crate::walker::{
    LiteralOccurrence, OccurrenceVisitor, SlotAction, SlotOccurrence, TreeWalker, WalkOptions,
};

use super::suppression::SuppressionChecker;
use super::types::{Diagnostic, DiagnosticKind, Fix, Severity};
use super::Rule;

pub struct ShorthandsRule {
    catalog: &'static AliasCatalog,
    options: WalkOptions,
    severity: Severity,
    suppressions: SuppressionChecker,
}

impl ShorthandsRule {
    pub fn new(config: &ShorthandsConfig, severity: Severity) -> Self {
        Self {
            catalog: AliasCatalog::global(),
            options: WalkOptions {
                restrict_to_catalog: config.effective_restrict_to_catalog(),
            },
            severity,
            suppressions: SuppressionChecker::new(),
        }
    }
}

impl Rule for ShorthandsRule {
    fn id(&self) -> &'static str {
        RULE_ENFORCE_SHORTHANDS
    }

    fn description(&self) -> &'static str {
        "Replace raw style values on components with design-token shorthands"
    }

    fn check(&self, doc: &Document) -> Vec<Diagnostic> {
        let mut visitor = ShorthandsVisitor {
            rule: self,
            doc,
            diagnostics: Vec::new(),
        };
        TreeWalker::new(self.catalog, self.options).walk(doc, &mut visitor);
        tracing::debug!(
            path = %doc.path,
            matches = visitor.diagnostics.len(),
            "shorthands check complete"
        );
        visitor.diagnostics
    }
}

struct ShorthandsVisitor<'r, 'd> {
    rule: &'r ShorthandsRule,
    doc: &'d Document,
    diagnostics: Vec<Diagnostic>,
}

impl ShorthandsVisitor<'_, '_> {
    fn push(&mut self, mut diagnostic: Diagnostic) {
        diagnostic.suppressed =
            self.rule
                .suppressions
                .is_suppressed(self.doc, diagnostic.line(), RULE_ENFORCE_SHORTHANDS);
        tracing::trace!(
            line = diagnostic.line(),
            suppressed = diagnostic.suppressed,
            message = %diagnostic.message,
            "shorthand match"
        );
        self.diagnostics.push(diagnostic);
    }

    fn border_diagnostic(&self, plan: BorderRewrite) -> Diagnostic {
        let raw = self.doc.text(plan.span);
        let tokens = plan
            .tokens
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(" / ");
        let (kind, message) = if plan.fixable {
            (
                DiagnosticKind::Match,
                format!("Border-color has shorthand: {raw} should set {} to {tokens}", plan.sibling_key),
            )
        } else {
            (
                DiagnosticKind::UnfixableContext,
                format!(
                    "Border-color has shorthand: {raw} carries {tokens} but {} is already set",
                    plan.sibling_key
                ),
            )
        };
        Diagnostic::new(
            self.doc,
            RULE_ENFORCE_SHORTHANDS,
            self.rule.severity,
            kind,
            plan.span,
            message,
        )
        .with_fix(Fix::new(plan.operations))
    }
}

impl<'d> OccurrenceVisitor<'d> for ShorthandsVisitor<'_, 'd> {
    fn on_slot(&mut self, slot: &SlotOccurrence<'d>) -> SlotAction {
        // Breakpoint-wrapped borders have no sibling to put the color in.
        if slot.via_breakpoint || !self.rule.catalog.is_border_shorthand(slot.prop_name) {
            return SlotAction::Descend;
        }
        match plan_border(self.rule.catalog, self.doc, slot) {
            Some(plan) => {
                let diagnostic = self.border_diagnostic(plan);
                self.push(diagnostic);
                SlotAction::Skip
            }
            None => SlotAction::Descend,
        }
    }

    fn on_literal(&mut self, occurrence: &LiteralOccurrence<'d>) {
        let element = occurrence.element.name.as_deref();
        let Some(PropertyKind::Value(category)) =
            self.rule.catalog.classify(occurrence.prop_name, element)
        else {
            return;
        };
        let Some(raw) = RawValue::from_expr(occurrence.literal) else {
            return;
        };
        let Some(token) = resolve(self.rule.catalog, category, raw) else {
            return;
        };

        let operation = replace_with_token(occurrence.position, occurrence.literal.span, token);
        let diagnostic = Diagnostic::new(
            self.doc,
            RULE_ENFORCE_SHORTHANDS,
            self.rule.severity,
            DiagnosticKind::Match,
            occurrence.literal.span,
            format!("{}: {} should be \"{token}\"", category.message(), raw.display()),
        )
        .with_fix(Fix::new(vec![operation]));
        self.push(diagnostic);
    }
}
