//! A lowered source file and its position bookkeeping.

use super::types::{FunctionScope, ImportDecl, JsxElement, Position, Range, ScopeId, Span};
use crate::parsers::Language;

/// One parsed document: everything the rules inspect, with byte spans back
/// into `source`.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: String,
    pub source: String,
    pub language: Language,
    /// Top-level import declarations in source order.
    pub imports: Vec<ImportDecl>,
    /// Every function in the file, indexed by `ScopeId`.
    pub scopes: Vec<FunctionScope>,
    /// Every element in document order (outer before inner).
    pub elements: Vec<JsxElement>,
    /// Span of the first top-level statement, if any.
    pub first_statement: Option<Span>,
    pub error_count: u32,
    pub error_ranges: Vec<Range>,
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(path: impl Into<String>, source: impl Into<String>, language: Language) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            path: path.into(),
            source,
            language,
            imports: Vec::new(),
            scopes: Vec::new(),
            elements: Vec::new(),
            first_statement: None,
            error_count: 0,
            error_ranges: Vec::new(),
            line_starts,
        }
    }

    /// Source text covered by `span`. Out-of-range spans yield `""`.
    pub fn text(&self, span: Span) -> &str {
        self.source.get(span.start..span.end).unwrap_or("")
    }

    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = self
            .source
            .get(line_start..offset)
            .map(|s| s.chars().count())
            .unwrap_or(offset - line_start);
        Position {
            line: line_idx as u32 + 1,
            column: column as u32 + 1,
        }
    }

    /// 1-based line/column range of a byte span.
    pub fn range_of(&self, span: Span) -> Range {
        Range {
            start: self.position_of(span.start),
            end: self.position_of(span.end),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 1-based line without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());
        self.source
            .get(start..end)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }

    pub fn scope(&self, id: ScopeId) -> Option<&FunctionScope> {
        self.scopes.get(id)
    }

    /// Nearest component function at or above `scope`.
    pub fn enclosing_component(&self, scope: Option<ScopeId>) -> Option<&FunctionScope> {
        let mut current = scope;
        while let Some(id) = current {
            let s = self.scopes.get(id)?;
            if s.is_component {
                return Some(s);
            }
            current = s.parent;
        }
        None
    }

    /// First import declaration from `source` that carries named specifiers.
    pub fn named_import_from(&self, source: &str) -> Option<&ImportDecl> {
        self.imports
            .iter()
            .find(|i| i.source == source && i.last_specifier_end.is_some())
    }

    /// Whether any import from `source` brings in `name`.
    pub fn imports_name(&self, source: &str, name: &str) -> bool {
        self.imports
            .iter()
            .filter(|i| i.source == source)
            .any(|i| i.named.iter().any(|n| n == name))
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
