//! Border shorthand decomposition: `"0 solid #5e5e5e"` becomes
//! `"0 solid"` plus a `<prop>Color` sibling carrying the color token.

use crate::ast::{Document, Expr, ExprKind, Span};
use crate::catalog::AliasCatalog;
use crate::normalize::{split_border_shorthand, BorderSplit};
use crate::walker::{Slot, SlotOccurrence};

use super::patch::{PatchOperation, SiblingOperand, SiblingSyntax, SiblingValue};
use super::quote;

/// Patches for one border value, reported once.
#[derive(Debug, Clone)]
pub struct BorderRewrite {
    /// The border value node.
    pub span: Span,
    /// Name of the inserted sibling, e.g. `borderTopColor`.
    pub sibling_key: String,
    /// Color tokens found, in source order.
    pub tokens: Vec<&'static str>,
    /// False when the sibling already exists; the match is still reported
    /// but nothing is rewritten.
    pub fixable: bool,
    pub operations: Vec<PatchOperation>,
}

/// Plan the decomposition of the value in `slot`, if any part of it splits.
///
/// Handles a plain string, a ternary (each branch on its own, failed
/// branches contribute `""` to the sibling) and a logical expression
/// (literal operands split or contribute `""`, other operands are kept
/// verbatim).
pub fn plan_border(
    catalog: &AliasCatalog,
    doc: &Document,
    slot: &SlotOccurrence<'_>,
) -> Option<BorderRewrite> {
    let value = slot.value.unparenthesized();
    let sibling_key = format!("{}Color", slot.prop_name);
    let (after, syntax) = match slot.slot {
        Slot::Attribute { attribute, .. } => (attribute, SiblingSyntax::JsxAttribute),
        Slot::Property { property, .. } => (property, SiblingSyntax::ObjectProperty),
    };

    let mut operations = Vec::new();
    let mut tokens = Vec::new();

    let sibling_value = match &value.kind {
        ExprKind::String { value: raw } => {
            let split = split_border_shorthand(catalog, raw)?;
            operations.push(replace_root(slot, value, &split));
            tokens.push(split.color_token);
            SiblingValue::Token(split.color_token.to_string())
        }
        ExprKind::Conditional {
            test,
            consequent,
            alternate,
        } => {
            let consequent_split = split_branch(catalog, consequent);
            let alternate_split = split_branch(catalog, alternate);
            if consequent_split.is_none() && alternate_split.is_none() {
                return None;
            }
            let mut branch_token = |branch: &Expr, split: Option<BorderSplit>| match split {
                Some(split) => {
                    operations.push(replace_nested(branch.unparenthesized(), &split));
                    tokens.push(split.color_token);
                    split.color_token.to_string()
                }
                None => String::new(),
            };
            let consequent_token = branch_token(consequent.as_ref(), consequent_split);
            let alternate_token = branch_token(alternate.as_ref(), alternate_split);
            SiblingValue::Conditional {
                test: doc.text(test.span).to_string(),
                consequent: consequent_token,
                alternate: alternate_token,
            }
        }
        ExprKind::Logical { op, left, right } => {
            let left_split = split_branch(catalog, left);
            let right_split = split_branch(catalog, right);
            if left_split.is_none() && right_split.is_none() {
                return None;
            }
            let mut operand = |expr: &Expr, split: Option<BorderSplit>| {
                let inner = expr.unparenthesized();
                match split {
                    Some(split) => {
                        operations.push(replace_nested(inner, &split));
                        tokens.push(split.color_token);
                        SiblingOperand::Token(split.color_token.to_string())
                    }
                    None if inner.is_literal() => SiblingOperand::Token(String::new()),
                    None => SiblingOperand::Verbatim(doc.text(expr.span).to_string()),
                }
            };
            let left = operand(left.as_ref(), left_split);
            let right = operand(right.as_ref(), right_split);
            SiblingValue::Logical { op: *op, left, right }
        }
        _ => return None,
    };

    if slot.has_sibling(&sibling_key) {
        return Some(BorderRewrite {
            span: value.span,
            sibling_key,
            tokens,
            fixable: false,
            operations: Vec::new(),
        });
    }

    operations.push(PatchOperation::InsertSibling {
        after,
        key: sibling_key.clone(),
        value: sibling_value,
        syntax,
    });

    Some(BorderRewrite {
        span: value.span,
        sibling_key,
        tokens,
        fixable: true,
        operations,
    })
}

fn split_branch(catalog: &AliasCatalog, branch: &Expr) -> Option<BorderSplit> {
    match &branch.unparenthesized().kind {
        ExprKind::String { value } => split_border_shorthand(catalog, value),
        _ => None,
    }
}

/// The value is the whole attribute/property value: a container root is
/// replaced braces and all.
fn replace_root(slot: &SlotOccurrence<'_>, value: &Expr, split: &BorderSplit) -> PatchOperation {
    let target = match slot.slot {
        Slot::Attribute {
            container: Some(container),
            ..
        } => container,
        _ => value.span,
    };
    PatchOperation::ReplaceLiteral {
        target,
        replacement: quote(&split.remainder),
    }
}

fn replace_nested(literal: &Expr, split: &BorderSplit) -> PatchOperation {
    PatchOperation::ReplaceLiteral {
        target: literal.span,
        replacement: quote(&split.remainder),
    }
}
