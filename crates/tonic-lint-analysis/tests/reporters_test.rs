//! Reporter output tests.
//! T10-REP-01 through T10-REP-04

use std::path::Path;

use tonic_lint_analysis::reporters::console::ConsoleReporter;
use tonic_lint_analysis::reporters::{available_formats, create_reporter, Reporter};
use tonic_lint_analysis::{LintReport, Linter};
use tonic_lint_core::config::TonicLintConfig;

fn reports() -> Vec<LintReport> {
    let linter = Linter::new(&TonicLintConfig::default()).unwrap();
    vec![
        linter
            .lint_source(
                Path::new("src/Card.jsx"),
                "<Box p=\"4px\" />;\n// tonic-lint-ignore\n<Box m=\"4px\" />;\n",
            )
            .unwrap(),
        linter.lint_source(Path::new("src/Empty.jsx"), "<Box />\n").unwrap(),
    ]
}

/// T10-REP-01: format registry
#[test]
fn test_create_reporter() {
    assert_eq!(available_formats(), &["console", "json"]);
    for format in available_formats() {
        let reporter = create_reporter(format).unwrap();
        assert_eq!(reporter.name(), *format);
    }
    assert!(create_reporter("sarif").is_none());
}

/// T10-REP-02: console lines and summary without color
#[test]
fn test_console_output() {
    let output = ConsoleReporter::new(false).generate(&reports()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with("src/Card.jsx:1:8 warning "), "{}", lines[0]);
    assert!(lines[0].ends_with("[enforce-shorthands]"), "{}", lines[0]);
    assert!(!output.contains("\x1b["));
    assert!(!output.contains("src/Card.jsx:3:"));
    assert!(output.ends_with("\n1 problem(s) (0 error(s), 1 warning(s)), 1 fixable, 1 suppressed\n"));
}

/// T10-REP-03: suppressed diagnostics can be shown, tagged
#[test]
fn test_console_shows_suppressed() {
    let reporter = ConsoleReporter {
        use_color: true,
        show_suppressed: true,
    };
    let output = reporter.generate(&reports()).unwrap();
    assert!(output.contains("\x1b[33mwarning\x1b[0m"));
    let suppressed = output.lines().find(|l| l.starts_with("src/Card.jsx:3:")).unwrap();
    assert!(suppressed.ends_with("[suppressed]"));
}

/// T10-REP-04: json output parses and summarizes active diagnostics
#[test]
fn test_json_output() {
    let output = create_reporter("json").unwrap().generate(&reports()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["files"], 2);
    assert_eq!(value["summary"]["diagnostics"], 1);
    assert_eq!(value["summary"]["fixable"], 1);

    let first = &value["files"][0]["diagnostics"][0];
    assert_eq!(first["rule_id"], "enforce-shorthands");
    assert_eq!(first["severity"], "warning");
    assert_eq!(first["kind"], "match");
    assert_eq!(first["range"]["start"]["line"], 1);
    assert_eq!(first["fix"][0]["text"], "\"1x\"");
    assert_eq!(value["files"][0]["diagnostics"][1]["suppressed"], true);
    assert!(value["files"][1]["diagnostics"].as_array().unwrap().is_empty());
}
