//! Structured patch operations and their text rendering.

use serde::{Deserialize, Serialize};

use crate::ast::{LogicalOp, ScopeId, Span};

/// One change to the document, described structurally. Rendered into a
/// [`TextEdit`] only when a fix is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOperation {
    /// Replace the node at `target` with `replacement` (already valid
    /// source text: `"1x"`, `{colorStyle.divider}`, ...).
    ReplaceLiteral { target: Span, replacement: String },
    /// Add `key` right after the node at `after`.
    InsertSibling {
        after: Span,
        key: String,
        value: SiblingValue,
        syntax: SiblingSyntax,
    },
    /// Add statements at the top of a function body.
    InsertLeadingStatement {
        scope: ScopeId,
        anchor: StatementAnchor,
        statements: Vec<String>,
    },
    /// Import `specifiers` from `source`.
    InsertImport {
        anchor: ImportAnchor,
        source: String,
        specifiers: Vec<String>,
    },
}

/// Value of an inserted sibling.
#[derive(Debug, Clone, PartialEq)]
pub enum SiblingValue {
    Token(String),
    /// Mirrors a ternary: `test ? consequent : alternate`. `test` is
    /// verbatim source.
    Conditional {
        test: String,
        consequent: String,
        alternate: String,
    },
    /// Mirrors a logical expression operand by operand.
    Logical {
        op: LogicalOp,
        left: SiblingOperand,
        right: SiblingOperand,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiblingOperand {
    /// Rendered as a string literal.
    Token(String),
    /// Source text kept as is.
    Verbatim(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingSyntax {
    /// ` key="..."` / ` key={...}`
    JsxAttribute,
    /// `, key: ...`
    ObjectProperty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementAnchor {
    /// Before the first statement of the body.
    Before(Span),
    /// Inside `{}` with no statements; the span is the block.
    EmptyBlock(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportAnchor {
    /// New declaration after the last existing import.
    AfterImport(Span),
    /// New declaration before the first statement of the file.
    BeforeFirstStatement(Span),
    /// Extend `{ a, b }` of an existing import; the offset is the end of
    /// its last specifier.
    AppendSpecifiers(usize),
}

/// A rendered, byte-addressed edit. `start == end` is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            text: text.into(),
        }
    }

    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            text: text.into(),
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.start == self.end
    }

    /// Two edits collide when they would touch the same bytes. Insertions
    /// only collide with a replacement strictly around them.
    pub fn conflicts_with(&self, other: &TextEdit) -> bool {
        match (self.is_insertion(), other.is_insertion()) {
            (true, true) => false,
            (true, false) => other.start < self.start && self.start < other.end,
            (false, true) => self.start < other.start && other.start < self.end,
            (false, false) => self.start < other.end && other.start < self.end,
        }
    }
}

impl PatchOperation {
    pub fn render(&self) -> TextEdit {
        match self {
            PatchOperation::ReplaceLiteral {
                target,
                replacement,
            } => TextEdit::replace(*target, replacement.clone()),
            PatchOperation::InsertSibling {
                after,
                key,
                value,
                syntax,
            } => TextEdit::insert(after.end, render_sibling(key, value, *syntax)),
            PatchOperation::InsertLeadingStatement {
                anchor, statements, ..
            } => match anchor {
                StatementAnchor::Before(first) => {
                    TextEdit::insert(first.start, format!("{}\n\n", statements.join("\n  ")))
                }
                StatementAnchor::EmptyBlock(block) => TextEdit::insert(
                    block.start + 1,
                    format!("\n  {}\n", statements.join("\n  ")),
                ),
            },
            PatchOperation::InsertImport {
                anchor,
                source,
                specifiers,
            } => {
                let names = specifiers.join(", ");
                match anchor {
                    ImportAnchor::AfterImport(last) => {
                        TextEdit::insert(last.end, format!("\nimport {{ {names} }} from '{source}';"))
                    }
                    ImportAnchor::BeforeFirstStatement(first) => TextEdit::insert(
                        first.start,
                        format!("import {{ {names} }} from '{source}';\n\n"),
                    ),
                    ImportAnchor::AppendSpecifiers(offset) => {
                        TextEdit::insert(*offset, format!(", {names}"))
                    }
                }
            }
        }
    }
}

fn render_sibling(key: &str, value: &SiblingValue, syntax: SiblingSyntax) -> String {
    match syntax {
        SiblingSyntax::JsxAttribute => match value {
            SiblingValue::Token(token) => format!(" {key}={}", quote(token)),
            other => format!(" {key}={{{}}}", render_value(other)),
        },
        SiblingSyntax::ObjectProperty => format!(", {key}:{}", render_value(value)),
    }
}

fn render_value(value: &SiblingValue) -> String {
    match value {
        SiblingValue::Token(token) => quote(token),
        SiblingValue::Conditional {
            test,
            consequent,
            alternate,
        } => format!("{test}?{}:{}", quote(consequent), quote(alternate)),
        SiblingValue::Logical { op, left, right } => format!(
            "{} {} {}",
            render_operand(left),
            op.as_str(),
            render_operand(right)
        ),
    }
}

fn render_operand(operand: &SiblingOperand) -> String {
    match operand {
        SiblingOperand::Token(token) => quote(token),
        SiblingOperand::Verbatim(text) => text.clone(),
    }
}

/// Double-quoted string literal.
pub fn quote(token: &str) -> String {
    format!("\"{}\"", token.replace('\\', "\\\\").replace('"', "\\\""))
}
