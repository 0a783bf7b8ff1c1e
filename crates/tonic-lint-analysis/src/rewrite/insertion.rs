//! Once-per-scope and once-per-file insertions: accessor declarations and
//! the accessor import.

use tonic_lint_core::constants::{
    COLOR_MODE_BINDING, COLOR_MODE_HOOK, COLOR_STYLE_BINDING, COLOR_STYLE_HOOK,
};
use tonic_lint_core::types::collections::FxHashSet;

use crate::ast::{Document, FunctionBody, FunctionScope, ScopeId};

use super::patch::{ImportAnchor, PatchOperation, StatementAnchor};

/// `(binding, hook)` pairs the color-mode rewrite relies on.
pub const ACCESSORS: [(&str, &str); 2] = [
    (COLOR_MODE_BINDING, COLOR_MODE_HOOK),
    (COLOR_STYLE_BINDING, COLOR_STYLE_HOOK),
];

/// Per-document insertion state. Built fresh for every traversal.
///
/// The import moves `NoImport → ImportInserted` on its first claim; each
/// function scope moves `NoHook → HookInserted` on its first claim. Later
/// claims are no-ops.
#[derive(Debug, Default)]
pub struct TraversalContext {
    import_claimed: bool,
    hooks_claimed: FxHashSet<ScopeId>,
}

impl TraversalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` exactly once per document.
    pub fn claim_import(&mut self) -> bool {
        !std::mem::replace(&mut self.import_claimed, true)
    }

    /// `true` exactly once per scope.
    pub fn claim_hook(&mut self, scope: ScopeId) -> bool {
        self.hooks_claimed.insert(scope)
    }

    pub fn import_claimed(&self) -> bool {
        self.import_claimed
    }

    pub fn hook_claimed(&self, scope: ScopeId) -> bool {
        self.hooks_claimed.contains(&scope)
    }
}

/// Where the rewritten color reference gets its accessor from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessorHost<'d> {
    /// Some function from the element outward already binds the style
    /// accessor.
    InScope,
    /// The nearest component, which needs the declarations.
    Component(&'d FunctionScope),
    /// No component, or one with an expression body: nowhere to declare.
    Unavailable,
}

/// Decide where the accessor for an element in `scope` comes from.
pub fn accessor_host(doc: &Document, scope: Option<ScopeId>) -> AccessorHost<'_> {
    let mut current = scope;
    while let Some(id) = current {
        let Some(s) = doc.scope(id) else { break };
        if s.declares(COLOR_STYLE_BINDING) {
            return AccessorHost::InScope;
        }
        current = s.parent;
    }
    match doc.enclosing_component(scope) {
        Some(component) if matches!(component.body, FunctionBody::Block { .. }) => {
            AccessorHost::Component(component)
        }
        _ => AccessorHost::Unavailable,
    }
}

/// Declarations for the accessors `component` does not bind yet.
pub fn leading_statements(component: &FunctionScope) -> Option<PatchOperation> {
    let FunctionBody::Block {
        span,
        first_statement,
    } = component.body
    else {
        return None;
    };
    let statements: Vec<String> = ACCESSORS
        .iter()
        .filter(|(binding, _)| !component.declares(binding))
        .map(|(binding, hook)| format!("const [{binding}] = {hook}();"))
        .collect();
    if statements.is_empty() {
        return None;
    }
    let anchor = match first_statement {
        Some(first) => StatementAnchor::Before(first),
        None => StatementAnchor::EmptyBlock(span),
    };
    Some(PatchOperation::InsertLeadingStatement {
        scope: component.id,
        anchor,
        statements,
    })
}

/// Import of the accessor hooks not yet imported from `source`.
///
/// Extends an existing named import from `source` when there is one,
/// otherwise adds a declaration after the last import, or before the first
/// statement of a file without imports.
pub fn accessor_import(doc: &Document, source: &str) -> Option<PatchOperation> {
    let specifiers: Vec<String> = ACCESSORS
        .iter()
        .map(|(_, hook)| *hook)
        .filter(|hook| !doc.imports_name(source, hook))
        .map(str::to_string)
        .collect();
    if specifiers.is_empty() {
        return None;
    }
    let anchor = if let Some(end) = doc.named_import_from(source).and_then(|i| i.last_specifier_end) {
        ImportAnchor::AppendSpecifiers(end)
    } else if let Some(last) = doc.imports.last() {
        ImportAnchor::AfterImport(last.span)
    } else {
        ImportAnchor::BeforeFirstStatement(doc.first_statement?)
    };
    Some(PatchOperation::InsertImport {
        anchor,
        source: source.to_string(),
        specifiers,
    })
}
