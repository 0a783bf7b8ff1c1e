//! Typed markup tree: the node kinds the walker and rules dispatch on.
//!
//! Lowered from the tree-sitter concrete syntax tree. Only the shapes the
//! engine inspects get their own variant; everything else collapses into
//! `ExprKind::Other` with its span kept so patches can still anchor to it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Half-open byte range `[start, end)` into the document source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn point(offset: usize) -> Self {
        Self { start: offset, end: offset }
    }

    pub fn from_ts_node(node: &tree_sitter::Node) -> Self {
        Self { start: node.start_byte(), end: node.end_byte() }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Index of a function scope within `Document::scopes`.
pub type ScopeId = usize;

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// String literal; `value` excludes the quotes.
    String { value: String },
    /// Numeric literal, including a leading unary minus.
    Number { value: f64, raw: String },
    /// `test ? consequent : alternate`
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    /// `left && right`, `left || right`, `left ?? right`
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Object { members: Vec<ObjectMember> },
    Paren { inner: Box<Expr> },
    /// Any call. Its result is dynamic; the walker never descends into it.
    Call,
    /// Identifiers, member reads, templates, functions, markup and the rest.
    Other { kind: String },
}

impl Expr {
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, ExprKind::String { .. } | ExprKind::Number { .. })
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::String { value } => Some(value),
            _ => None,
        }
    }

    /// Strip any number of parentheses.
    pub fn unparenthesized(&self) -> &Expr {
        match &self.kind {
            ExprKind::Paren { inner } => inner.unparenthesized(),
            _ => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
    Nullish,
}

impl LogicalOp {
    pub fn from_operator(op: &str) -> Option<Self> {
        match op {
            "&&" => Some(Self::And),
            "||" => Some(Self::Or),
            "??" => Some(Self::Nullish),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Nullish => "??",
        }
    }
}

/// A member of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectMember {
    /// `key: value`. `key` is `None` for computed keys.
    Property {
        key: Option<String>,
        span: Span,
        value: Expr,
    },
    /// `...argument`
    Spread { span: Span, argument: Expr },
    /// Shorthand properties, methods, getters.
    Other { span: Span },
}

/// A markup element (`<Box ... />` or `<Box ...>...</Box>`).
#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement {
    /// Leading name segment: `Box` for `<Box>`, `Menu` for `<Menu.Item>`.
    /// `None` for fragments.
    pub name: Option<String>,
    pub span: Span,
    pub attributes: Vec<JsxAttribute>,
    /// Innermost enclosing function.
    pub scope: Option<ScopeId>,
}

impl JsxElement {
    /// Components start with an uppercase letter; intrinsic tags do not.
    pub fn is_component(&self) -> bool {
        self.name
            .as_deref()
            .and_then(|n| n.chars().next())
            .is_some_and(|c| c.is_uppercase())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttribute {
    /// `name`, `name="..."`, `name={...}`
    Named {
        name: String,
        span: Span,
        value: Option<AttrValue>,
    },
    /// `{...argument}`
    Spread { span: Span, argument: Expr },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// `name="..."`; the expression is always `ExprKind::String`.
    String(Expr),
    /// `name={expr}`; `span` covers the braces. `expr` is `None` for `{}`.
    Container { span: Span, expr: Option<Expr> },
    /// `name=<Other />`
    Element { span: Span },
}

/// `import ... from 'source'`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub source: String,
    pub span: Span,
    /// Imported names of `{ a, b as c }` (the `a`/`b` side).
    pub named: SmallVec<[String; 4]>,
    /// End of the last named specifier, for appending new specifiers.
    pub last_specifier_end: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    Declaration,
    Expression,
    Arrow,
    Method,
}

/// Where new leading statements can go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionBody {
    /// `{ ... }`
    Block {
        span: Span,
        first_statement: Option<Span>,
    },
    /// `() => expr`; no statement can be inserted.
    Expression { span: Span },
}

/// A function and what the color-mode rule needs to know about it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionScope {
    pub id: ScopeId,
    pub parent: Option<ScopeId>,
    pub name: Option<String>,
    pub kind: FunctionKind,
    pub span: Span,
    pub body: FunctionBody,
    /// Recognized as a UI component by declaration/export convention.
    pub is_component: bool,
    /// Names bound by the body's top-level variable declarations.
    pub declared_bindings: SmallVec<[String; 4]>,
}

impl FunctionScope {
    pub fn declares(&self, binding: &str) -> bool {
        self.declared_bindings.iter().any(|b| b == binding)
    }
}
