//! Fixer tests: conflict handling, atomic fixes and insertion ordering.
//! T7-FIX-01 through T7-FIX-06

use tonic_lint_analysis::ast::Span;
use tonic_lint_analysis::rewrite::PatchOperation;
use tonic_lint_analysis::{Diagnostic, DiagnosticKind, Document, Fix, Fixer, Language, Severity};

const SOURCE: &str = "<Box p=\"4px\" m=\"8px\" />";

fn doc() -> Document {
    Document::new("a.jsx", SOURCE, Language::JavaScript)
}

fn replace(start: usize, end: usize, text: &str) -> PatchOperation {
    PatchOperation::ReplaceLiteral {
        target: Span::new(start, end),
        replacement: text.to_string(),
    }
}

fn insert_at(offset: usize, text: &str) -> PatchOperation {
    // An empty replacement target is a pure insertion.
    replace(offset, offset, text)
}

fn diagnostic(doc: &Document, operations: Vec<PatchOperation>) -> Diagnostic {
    let span = match &operations[0] {
        PatchOperation::ReplaceLiteral { target, .. } => *target,
        _ => Span::point(0),
    };
    Diagnostic::new(
        doc,
        "enforce-shorthands",
        Severity::Warning,
        DiagnosticKind::Match,
        span,
        "test",
    )
    .with_fix(Fix::new(operations))
}

fn span_of(needle: &str) -> (usize, usize) {
    let start = SOURCE.find(needle).unwrap();
    (start, start + needle.len())
}

/// T7-FIX-01: independent fixes all apply
#[test]
fn test_independent_fixes() {
    let doc = doc();
    let (p0, p1) = span_of("\"4px\"");
    let (m0, m1) = span_of("\"8px\"");
    let diagnostics = vec![
        diagnostic(&doc, vec![replace(p0, p1, "\"1x\"")]),
        diagnostic(&doc, vec![replace(m0, m1, "\"2x\"")]),
    ];
    let outcome = Fixer::new().apply(SOURCE, &diagnostics);
    assert_eq!(outcome.output, "<Box p=\"1x\" m=\"2x\" />");
    assert_eq!((outcome.applied, outcome.rejected), (2, 0));
}

/// T7-FIX-02: the later of two overlapping fixes waits for the next pass
#[test]
fn test_overlapping_fix_rejected() {
    let doc = doc();
    let (p0, p1) = span_of("\"4px\"");
    let diagnostics = vec![
        diagnostic(&doc, vec![replace(p0, p1, "\"1x\"")]),
        diagnostic(&doc, vec![replace(p0 + 1, p1, "x\"")]),
    ];
    let outcome = Fixer::new().apply(SOURCE, &diagnostics);
    assert_eq!(outcome.output, "<Box p=\"1x\" m=\"8px\" />");
    assert_eq!((outcome.applied, outcome.rejected), (1, 1));
}

/// T7-FIX-03: a fix is applied whole or not at all
#[test]
fn test_fix_is_atomic() {
    let doc = doc();
    let (p0, p1) = span_of("\"4px\"");
    let (m0, m1) = span_of("\"8px\"");
    let diagnostics = vec![
        diagnostic(&doc, vec![replace(p0, p1, "\"1x\"")]),
        diagnostic(
            &doc,
            vec![replace(m0, m1, "\"2x\""), replace(p0, p1, "\"9x\"")],
        ),
    ];
    let outcome = Fixer::new().apply(SOURCE, &diagnostics);
    assert_eq!(outcome.output, "<Box p=\"1x\" m=\"8px\" />");
    assert_eq!((outcome.applied, outcome.rejected), (1, 1));
}

/// T7-FIX-04: insertions at an offset precede a replacement starting there
/// and keep their acceptance order among themselves
#[test]
fn test_insertion_ordering() {
    let doc = doc();
    let (p0, p1) = span_of("\"4px\"");
    let diagnostics = vec![
        diagnostic(&doc, vec![replace(p0, p1, "\"1x\"")]),
        diagnostic(&doc, vec![insert_at(p0, "A"), insert_at(p0, "B")]),
        diagnostic(&doc, vec![insert_at(p0, "C")]),
    ];
    let outcome = Fixer::new().apply(SOURCE, &diagnostics);
    assert_eq!(outcome.output, "<Box p=ABC\"1x\" m=\"8px\" />");
    assert_eq!(outcome.applied, 3);
}

/// T7-FIX-05: edits outside the source or off a char boundary are rejected
#[test]
fn test_invalid_edits_rejected() {
    let doc = doc();
    let diagnostics = vec![
        diagnostic(&doc, vec![replace(SOURCE.len(), SOURCE.len() + 4, "x")]),
        diagnostic(&doc, vec![replace(6, 3, "x")]),
    ];
    let outcome = Fixer::new().apply(SOURCE, &diagnostics);
    assert_eq!(outcome.output, SOURCE);
    assert_eq!((outcome.applied, outcome.rejected), (0, 2));

    let multibyte = "<Box content=\"é\" />";
    let doc = Document::new("b.jsx", multibyte, Language::JavaScript);
    let inside = multibyte.find('é').unwrap() + 1;
    let outcome = Fixer::new().apply(multibyte, &[diagnostic(&doc, vec![replace(inside, inside, "x")])]);
    assert_eq!(outcome.output, multibyte);
    assert_eq!(outcome.rejected, 1);
}

/// T7-FIX-06: suppressed and empty fixes are not counted
#[test]
fn test_unfixable_diagnostics_skipped() {
    let doc = doc();
    let (p0, p1) = span_of("\"4px\"");
    let mut suppressed = diagnostic(&doc, vec![replace(p0, p1, "\"1x\"")]);
    suppressed.suppressed = true;
    let empty = diagnostic(&doc, vec![replace(p0, p1, "\"1x\"")]).with_fix(Fix::empty());
    let outcome = Fixer::new().apply(SOURCE, &[suppressed, empty]);
    assert_eq!(outcome.output, SOURCE);
    assert_eq!((outcome.applied, outcome.rejected), (0, 0));
}
