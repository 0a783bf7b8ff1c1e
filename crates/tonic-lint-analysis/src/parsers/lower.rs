//! Lowering: tree-sitter concrete syntax tree → typed document model.
//!
//! One pass over the tree. A pre-pass over the program's top-level
//! statements marks the function nodes that count as components, so the
//! main pass can flag scopes as it enters them.

use smallvec::SmallVec;
use tonic_lint_core::types::collections::FxHashSet;
use tree_sitter::Node;

use crate::ast::{
    AttrValue, Expr, ExprKind, FunctionBody, FunctionKind, FunctionScope, ImportDecl, JsxAttribute,
    JsxElement, LogicalOp, ObjectMember, ScopeId, Span,
};

/// Everything lowered out of one tree.
#[derive(Debug, Default)]
pub struct Lowered {
    pub imports: Vec<ImportDecl>,
    pub scopes: Vec<FunctionScope>,
    pub elements: Vec<JsxElement>,
    pub first_statement: Option<Span>,
}

/// Lower the tree rooted at `root` (a `program` node) over `source`.
pub fn lower(root: Node, source: &str) -> Lowered {
    let mut lowerer = Lowerer {
        source,
        components: FxHashSet::default(),
        scope_stack: Vec::new(),
        out: Lowered::default(),
    };
    lowerer.mark_components(root);
    lowerer.out.first_statement = named_children(root)
        .into_iter()
        .find(|n| n.kind() != "hash_bang_line")
        .map(|n| Span::from_ts_node(&n));
    lowerer.visit(root);
    lowerer.out
}

struct Lowerer<'a> {
    source: &'a str,
    /// Node ids of functions recognized as components.
    components: FxHashSet<usize>,
    scope_stack: Vec<ScopeId>,
    out: Lowered,
}

const FUNCTION_KINDS: [&str; 7] = [
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "function",
    "generator_function",
    "arrow_function",
    "method_definition",
];

/// Higher-order wrappers a component may be passed through.
const COMPONENT_WRAPPERS: [&str; 2] = ["memo", "forwardRef"];

impl<'a> Lowerer<'a> {
    fn text(&self, node: Node) -> &'a str {
        self.source.get(node.start_byte()..node.end_byte()).unwrap_or("")
    }

    // ---- Component recognition ----

    fn mark_components(&mut self, program: Node) {
        for stmt in named_children(program) {
            self.mark_statement(stmt);
        }
    }

    fn mark_statement(&mut self, stmt: Node) {
        match stmt.kind() {
            "function_declaration" | "generator_function_declaration" => {
                if stmt
                    .child_by_field_name("name")
                    .is_some_and(|n| is_capitalized(self.text(n)))
                {
                    self.components.insert(stmt.id());
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                for declarator in named_children(stmt) {
                    if declarator.kind() != "variable_declarator" {
                        continue;
                    }
                    let bound_to_component = declarator
                        .child_by_field_name("name")
                        .is_some_and(|n| n.kind() == "identifier" && is_capitalized(self.text(n)));
                    if !bound_to_component {
                        continue;
                    }
                    if let Some(value) = declarator.child_by_field_name("value") {
                        self.mark_component_value(value);
                    }
                }
            }
            "export_statement" => {
                let is_default = has_token(stmt, "default");
                if let Some(decl) = stmt.child_by_field_name("declaration") {
                    if is_default && FUNCTION_KINDS.contains(&decl.kind()) {
                        self.components.insert(decl.id());
                    } else {
                        self.mark_statement(decl);
                    }
                }
                if is_default {
                    if let Some(value) = stmt.child_by_field_name("value") {
                        self.mark_component_value(value);
                    }
                }
            }
            _ => {}
        }
    }

    /// Mark a function value, looking through parentheses and
    /// `memo`/`forwardRef` wrappers.
    fn mark_component_value(&mut self, value: Node) {
        let value = unwrap_parens(value);
        match value.kind() {
            "arrow_function" | "function_expression" | "function" => {
                self.components.insert(value.id());
            }
            "call_expression" => {
                let wraps = value
                    .child_by_field_name("function")
                    .is_some_and(|callee| self.is_component_wrapper(callee));
                if !wraps {
                    return;
                }
                let first_arg = value
                    .child_by_field_name("arguments")
                    .and_then(|args| named_children(args).into_iter().next());
                if let Some(arg) = first_arg {
                    self.mark_component_value(arg);
                }
            }
            _ => {}
        }
    }

    fn is_component_wrapper(&self, callee: Node) -> bool {
        match callee.kind() {
            "identifier" => COMPONENT_WRAPPERS.contains(&self.text(callee)),
            "member_expression" => {
                let object = callee.child_by_field_name("object").map(|n| self.text(n));
                let property = callee.child_by_field_name("property").map(|n| self.text(n));
                object == Some("React") && property.is_some_and(|p| COMPONENT_WRAPPERS.contains(&p))
            }
            _ => false,
        }
    }

    // ---- Main pass ----

    fn visit(&mut self, node: Node) {
        let kind = node.kind();
        if FUNCTION_KINDS.contains(&kind) {
            let id = self.enter_function(node);
            self.scope_stack.push(id);
            self.visit_children(node);
            self.scope_stack.pop();
            return;
        }
        match kind {
            "import_statement" => {
                if node.parent().is_some_and(|p| p.kind() == "program") {
                    if let Some(import) = self.lower_import(node) {
                        self.out.imports.push(import);
                    }
                }
            }
            "jsx_element" | "jsx_self_closing_element" => {
                let element = self.lower_element(node);
                self.out.elements.push(element);
            }
            _ => {}
        }
        self.visit_children(node);
    }

    fn visit_children(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child);
        }
    }

    fn enter_function(&mut self, node: Node) -> ScopeId {
        let kind = match node.kind() {
            "function_declaration" | "generator_function_declaration" => FunctionKind::Declaration,
            "arrow_function" => FunctionKind::Arrow,
            "method_definition" => FunctionKind::Method,
            _ => FunctionKind::Expression,
        };
        let name = node
            .child_by_field_name("name")
            .or_else(|| {
                node.parent()
                    .filter(|p| p.kind() == "variable_declarator")
                    .and_then(|p| p.child_by_field_name("name"))
                    .filter(|n| n.kind() == "identifier")
            })
            .map(|n| self.text(n).to_string());

        let (body, declared_bindings) = match node.child_by_field_name("body") {
            Some(block) if block.kind() == "statement_block" => {
                let statements = named_children(block);
                let first_statement = statements.first().map(|s| Span::from_ts_node(s));
                let mut bindings = SmallVec::new();
                for stmt in &statements {
                    if matches!(stmt.kind(), "lexical_declaration" | "variable_declaration") {
                        for declarator in named_children(*stmt) {
                            if let Some(pattern) = declarator.child_by_field_name("name") {
                                self.collect_binding_names(pattern, &mut bindings);
                            }
                        }
                    }
                }
                (
                    FunctionBody::Block {
                        span: Span::from_ts_node(&block),
                        first_statement,
                    },
                    bindings,
                )
            }
            Some(expr) => (
                FunctionBody::Expression {
                    span: Span::from_ts_node(&expr),
                },
                SmallVec::new(),
            ),
            None => (
                FunctionBody::Expression {
                    span: Span::from_ts_node(&node),
                },
                SmallVec::new(),
            ),
        };

        let id = self.out.scopes.len();
        self.out.scopes.push(FunctionScope {
            id,
            parent: self.scope_stack.last().copied(),
            name,
            kind,
            span: Span::from_ts_node(&node),
            body,
            is_component: self.components.contains(&node.id()),
            declared_bindings,
        });
        id
    }

    fn collect_binding_names(&self, pattern: Node, out: &mut SmallVec<[String; 4]>) {
        match pattern.kind() {
            "identifier" | "shorthand_property_identifier_pattern" => {
                out.push(self.text(pattern).to_string());
            }
            "pair_pattern" => {
                if let Some(value) = pattern.child_by_field_name("value") {
                    self.collect_binding_names(value, out);
                }
            }
            "assignment_pattern" | "object_assignment_pattern" => {
                if let Some(left) = pattern.child_by_field_name("left") {
                    self.collect_binding_names(left, out);
                }
            }
            _ => {
                for child in named_children(pattern) {
                    self.collect_binding_names(child, out);
                }
            }
        }
    }

    fn lower_import(&self, node: Node) -> Option<ImportDecl> {
        let source = node.child_by_field_name("source")?;
        let mut named = SmallVec::new();
        let mut last_specifier_end = None;
        let clause = named_children(node)
            .into_iter()
            .find(|c| c.kind() == "import_clause");
        if let Some(clause) = clause {
            let named_imports = named_children(clause)
                .into_iter()
                .find(|c| c.kind() == "named_imports");
            if let Some(named_imports) = named_imports {
                for specifier in named_children(named_imports) {
                    if specifier.kind() != "import_specifier" {
                        continue;
                    }
                    if let Some(name) = specifier.child_by_field_name("name") {
                        named.push(strip_quotes(self.text(name)).to_string());
                    }
                    last_specifier_end = Some(specifier.end_byte());
                }
            }
        }
        Some(ImportDecl {
            source: strip_quotes(self.text(source)).to_string(),
            span: Span::from_ts_node(&node),
            named,
            last_specifier_end,
        })
    }

    // ---- Markup ----

    fn lower_element(&self, node: Node) -> JsxElement {
        let opening = if node.kind() == "jsx_element" {
            named_children(node)
                .into_iter()
                .find(|c| c.kind() == "jsx_opening_element")
        } else {
            Some(node)
        };

        let mut name = None;
        let mut attributes = Vec::new();
        if let Some(opening) = opening {
            let name_node = opening.child_by_field_name("name");
            name = name_node.map(|n| leading_segment(self.text(n)).to_string());
            for child in named_children(opening) {
                if name_node.is_some_and(|n| n.id() == child.id()) {
                    continue;
                }
                match child.kind() {
                    "jsx_attribute" => {
                        if let Some(attr) = self.lower_attribute(child) {
                            attributes.push(attr);
                        }
                    }
                    "jsx_expression" => {
                        let spread = named_children(child)
                            .into_iter()
                            .find(|c| c.kind() == "spread_element");
                        if let Some(spread) = spread {
                            if let Some(argument) = named_children(spread).into_iter().next() {
                                attributes.push(JsxAttribute::Spread {
                                    span: Span::from_ts_node(&child),
                                    argument: self.lower_expr(argument),
                                });
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        JsxElement {
            name,
            span: Span::from_ts_node(&node),
            attributes,
            scope: self.scope_stack.last().copied(),
        }
    }

    /// A quoted attribute value (`bg="..."`) is taken verbatim: JSX
    /// attribute strings have no backslash escapes.
    fn lower_attribute(&self, node: Node) -> Option<JsxAttribute> {
        let children = named_children(node);
        let name_node = children.first()?;
        let value = children.get(1).and_then(|v| match v.kind() {
            "string" => Some(AttrValue::String(Expr {
                span: Span::from_ts_node(v),
                kind: ExprKind::String {
                    value: strip_quotes(self.text(*v)).to_string(),
                },
            })),
            "jsx_expression" => Some(AttrValue::Container {
                span: Span::from_ts_node(v),
                expr: named_children(*v).into_iter().next().map(|e| self.lower_expr(e)),
            }),
            "jsx_element" | "jsx_self_closing_element" | "jsx_fragment" => Some(AttrValue::Element {
                span: Span::from_ts_node(v),
            }),
            _ => None,
        });
        Some(JsxAttribute::Named {
            name: self.text(*name_node).to_string(),
            span: Span::from_ts_node(&node),
            value,
        })
    }

    fn lower_expr(&self, node: Node) -> Expr {
        let span = Span::from_ts_node(&node);
        let kind = self.lower_expr_kind(node);
        Expr { span, kind }
    }

    fn lower_expr_kind(&self, node: Node) -> ExprKind {
        let other = || ExprKind::Other {
            kind: node.kind().to_string(),
        };
        match node.kind() {
            "string" => ExprKind::String {
                value: string_value(self.text(node)),
            },
            "number" => {
                let raw = self.text(node);
                match parse_number(raw) {
                    Some(value) => ExprKind::Number {
                        value,
                        raw: raw.to_string(),
                    },
                    None => other(),
                }
            }
            "unary_expression" => {
                let is_minus = node
                    .child_by_field_name("operator")
                    .is_some_and(|op| self.text(op) == "-");
                let argument = node
                    .child_by_field_name("argument")
                    .filter(|a| a.kind() == "number")
                    .and_then(|a| parse_number(self.text(a)));
                match (is_minus, argument) {
                    (true, Some(v)) => ExprKind::Number {
                        value: -v,
                        raw: self.text(node).to_string(),
                    },
                    _ => other(),
                }
            }
            "parenthesized_expression" => match named_children(node).into_iter().next() {
                Some(inner) => ExprKind::Paren {
                    inner: Box::new(self.lower_expr(inner)),
                },
                None => other(),
            },
            "ternary_expression" => {
                let parts = (
                    node.child_by_field_name("condition"),
                    node.child_by_field_name("consequence"),
                    node.child_by_field_name("alternative"),
                );
                match parts {
                    (Some(test), Some(consequent), Some(alternate)) => ExprKind::Conditional {
                        test: Box::new(self.lower_expr(test)),
                        consequent: Box::new(self.lower_expr(consequent)),
                        alternate: Box::new(self.lower_expr(alternate)),
                    },
                    _ => other(),
                }
            }
            "binary_expression" => {
                let op = node
                    .child_by_field_name("operator")
                    .and_then(|op| LogicalOp::from_operator(op.kind()));
                let left = node.child_by_field_name("left");
                let right = node.child_by_field_name("right");
                match (op, left, right) {
                    (Some(op), Some(left), Some(right)) => ExprKind::Logical {
                        op,
                        left: Box::new(self.lower_expr(left)),
                        right: Box::new(self.lower_expr(right)),
                    },
                    _ => other(),
                }
            }
            "object" => ExprKind::Object {
                members: named_children(node)
                    .into_iter()
                    .map(|m| self.lower_member(m))
                    .collect(),
            },
            "call_expression" => ExprKind::Call,
            _ => other(),
        }
    }

    fn lower_member(&self, node: Node) -> ObjectMember {
        let span = Span::from_ts_node(&node);
        match node.kind() {
            "pair" => {
                let key = node.child_by_field_name("key").and_then(|k| match k.kind() {
                    "property_identifier" | "number" => Some(self.text(k).to_string()),
                    "string" => Some(string_value(self.text(k))),
                    _ => None,
                });
                match node.child_by_field_name("value") {
                    Some(value) => ObjectMember::Property {
                        key,
                        span,
                        value: self.lower_expr(value),
                    },
                    None => ObjectMember::Other { span },
                }
            }
            "spread_element" => match named_children(node).into_iter().next() {
                Some(argument) => ObjectMember::Spread {
                    span,
                    argument: self.lower_expr(argument),
                },
                None => ObjectMember::Other { span },
            },
            _ => ObjectMember::Other { span },
        }
    }
}

/// Named children, skipping comments.
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .collect()
}

/// Whether `node` has a direct anonymous child token `token`.
fn has_token(node: Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|c| !c.is_named() && c.kind() == token);
    found
}

fn unwrap_parens(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    while current.kind() == "parenthesized_expression" {
        match named_children(current).into_iter().next() {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

fn is_capitalized(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

/// `Menu.Item` → `Menu`, `svg:rect` → `svg`.
fn leading_segment(name: &str) -> &str {
    name.split(['.', ':']).next().unwrap_or(name).trim()
}

/// Remove one pair of matching quote characters, if present.
pub(crate) fn strip_quotes(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && matches!(first, b'"' | b'\'' | b'`') {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// Contents of a JS string literal with escape sequences decoded.
/// A malformed escape leaves the contents undecoded.
pub(crate) fn string_value(raw: &str) -> String {
    let inner = strip_quotes(raw);
    if !inner.contains('\\') {
        return inner.to_string();
    }
    decode_escapes(inner).unwrap_or_else(|| inner.to_string())
}

fn decode_escapes(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(|d| d.is_ascii_digit()) => out.push('\0'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                out.push(hex_char(&hex, 2)?);
            }
            'u' if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String = chars.by_ref().take_while(|d| *d != '}').collect();
                out.push(hex_char(&hex, hex.len().max(1))?);
            }
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                out.push(hex_char(&hex, 4)?);
            }
            // Line continuation.
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '1'..='9' | '0' => return None,
            other => out.push(other),
        }
    }
    Some(out)
}

fn hex_char(digits: &str, len: usize) -> Option<char> {
    if digits.len() != len || !digits.chars().all(|d| d.is_ascii_hexdigit()) {
        return None;
    }
    char::from_u32(u32::from_str_radix(digits, 16).ok()?)
}

/// Numeric literal text → value. Handles `_` separators and the hex,
/// octal and binary prefixes.
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    let radix = |digits: &str, radix: u32| i64::from_str_radix(digits, radix).ok().map(|v| v as f64);
    if let Some(hex) = lower.strip_prefix("0x") {
        return radix(hex, 16);
    }
    if let Some(oct) = lower.strip_prefix("0o") {
        return radix(oct, 8);
    }
    if let Some(bin) = lower.strip_prefix("0b") {
        return radix(bin, 2);
    }
    lower.trim_end_matches('n').parse::<f64>().ok()
}
