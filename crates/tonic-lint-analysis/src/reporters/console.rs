//! Console reporter: one line per diagnostic, optional ANSI color.

use crate::linter::LintReport;
use crate::rules::Severity;

use super::Reporter;

pub struct ConsoleReporter {
    pub use_color: bool,
    /// Also print suppressed diagnostics, tagged.
    pub show_suppressed: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            show_suppressed: false,
        }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[31m",   // red
            Severity::Warning => "\x1b[33m", // yellow
            Severity::Info => "\x1b[36m",    // cyan
            Severity::Hint => "\x1b[90m",    // gray
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, reports: &[LintReport]) -> Result<String, String> {
        let mut output = String::new();
        let mut errors = 0;
        let mut warnings = 0;
        let mut fixable = 0;
        let mut suppressed = 0;

        for report in reports {
            for diagnostic in &report.diagnostics {
                if diagnostic.suppressed {
                    suppressed += 1;
                    if !self.show_suppressed {
                        continue;
                    }
                } else {
                    match diagnostic.severity {
                        Severity::Error => errors += 1,
                        Severity::Warning => warnings += 1,
                        Severity::Info | Severity::Hint => {}
                    }
                    if diagnostic.is_fixable() {
                        fixable += 1;
                    }
                }

                let suppressed_tag = if diagnostic.suppressed { " [suppressed]" } else { "" };
                output.push_str(&format!(
                    "{}:{}:{} {}{}{} {} [{}]{}\n",
                    report.path,
                    diagnostic.line(),
                    diagnostic.column(),
                    self.color_start(diagnostic.severity),
                    diagnostic.severity,
                    self.color_end(),
                    diagnostic.message,
                    diagnostic.rule_id,
                    suppressed_tag,
                ));
            }
            if !report.parse_errors.is_empty() {
                output.push_str(&format!(
                    "{}: {} syntax error(s), linted what could be recovered\n",
                    report.path,
                    report.parse_errors.len()
                ));
            }
        }

        let total = errors + warnings;
        output.push_str(&format!(
            "\n{total} problem(s) ({errors} error(s), {warnings} warning(s)), {fixable} fixable"
        ));
        if suppressed > 0 {
            output.push_str(&format!(", {suppressed} suppressed"));
        }
        output.push('\n');

        Ok(output)
    }
}
