//! JSON reporter: one object per file, diagnostics with ranges and fixes.

use serde_json::{json, Value};

use crate::linter::LintReport;
use crate::rules::Diagnostic;

use super::Reporter;

pub struct JsonReporter;

impl JsonReporter {
    fn diagnostic(diagnostic: &Diagnostic) -> Value {
        let edits = diagnostic
            .fix
            .as_ref()
            .map(|f| f.edits())
            .unwrap_or_default();
        json!({
            "rule_id": diagnostic.rule_id,
            "severity": diagnostic.severity,
            "kind": diagnostic.kind,
            "message": diagnostic.message,
            "range": diagnostic.range,
            "span": diagnostic.span,
            "suppressed": diagnostic.suppressed,
            "fix": diagnostic.fix.as_ref().map(|_| edits),
        })
    }
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, reports: &[LintReport]) -> Result<String, String> {
        let files: Vec<Value> = reports
            .iter()
            .map(|report| {
                json!({
                    "path": report.path,
                    "diagnostics": report.diagnostics.iter().map(Self::diagnostic).collect::<Vec<_>>(),
                    "parse_errors": report.parse_errors,
                })
            })
            .collect();

        let total: usize = reports.iter().map(|r| r.active().count()).sum();
        let output = json!({
            "files": files,
            "summary": {
                "files": reports.len(),
                "diagnostics": total,
                "fixable": reports.iter().map(LintReport::fixable_count).sum::<usize>(),
            },
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
