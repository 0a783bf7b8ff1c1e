//! Tree-sitter parser subsystem: JavaScript, TypeScript and TSX.

pub mod error_tolerant;
pub mod language;
pub mod lower;

use std::path::Path;

use tonic_lint_core::errors::ParseError;

use crate::ast::Document;
pub use language::Language;

/// Parses markup-bearing source files into typed documents.
///
/// A fresh `tree_sitter::Parser` is created per call, so one `JsxParser`
/// can be shared freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsxParser;

impl JsxParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `source`, picking the grammar from `path`'s extension.
    pub fn parse(&self, source: &str, path: &Path) -> Result<Document, ParseError> {
        let ext = path.extension().and_then(|e| e.to_str());
        let language = Language::from_extension(ext).ok_or_else(|| ParseError::UnsupportedLanguage {
            extension: ext.unwrap_or("").to_string(),
        })?;
        self.parse_as(source, path, language)
    }

    /// Parse `source` with an explicit grammar.
    pub fn parse_as(
        &self,
        source: &str,
        path: &Path,
        language: Language,
    ) -> Result<Document, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&language.ts_language())
            .map_err(|e| ParseError::GrammarNotFound {
                language: format!("{language}: {e}"),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::TreeSitterError {
                path: path.to_path_buf(),
                message: "parser returned no tree".to_string(),
            })?;
        let root = tree.root_node();

        let (error_count, error_ranges) = error_tolerant::count_errors(root);
        if error_count > 0 {
            tracing::warn!(
                path = %path.display(),
                errors = error_count,
                "partial parse, linting the recoverable parts"
            );
        }

        let lowered = lower::lower(root, source);
        let mut doc = Document::new(path.display().to_string(), source, language);
        doc.imports = lowered.imports;
        doc.scopes = lowered.scopes;
        doc.elements = lowered.elements;
        doc.first_statement = lowered.first_statement;
        doc.error_count = error_count;
        doc.error_ranges = error_ranges;

        tracing::debug!(
            path = %doc.path,
            %language,
            elements = doc.elements.len(),
            scopes = doc.scopes.len(),
            imports = doc.imports.len(),
            "document lowered"
        );
        Ok(doc)
    }
}
