//! # tonic-lint-analysis
//!
//! Analysis engine for tonic-lint.
//! Parses JSX/TSX sources, resolves raw style values against the alias
//! catalog, walks component attributes and rewrites matches into
//! design-token shorthands and color-mode accessor reads.

pub mod ast;
pub mod catalog;
pub mod fixer;
pub mod linter;
pub mod normalize;
pub mod parsers;
pub mod reporters;
pub mod rewrite;
pub mod rules;
pub mod walker;

pub use ast::Document;
pub use catalog::{AliasCatalog, Category, ColorStyleCatalog};
pub use fixer::{FixOutcome, Fixer};
pub use linter::{FixReport, LintReport, Linter};
pub use parsers::{JsxParser, Language};
pub use rules::{Diagnostic, DiagnosticKind, Fix, Rule, Severity};
