//! Tree walker: finds every literal reachable from a component's
//! attributes, carrying the governing property name down through
//! containers, parentheses, ternaries, logical operands, object literals,
//! spreads and breakpoint wrappers.
//!
//! Calls are never entered. The `style` attribute is never entered.

use crate::ast::{AttrValue, Document, Expr, ExprKind, JsxAttribute, JsxElement, ObjectMember, Span};
use crate::catalog::tables::RAW_STYLE_ATTRIBUTE;
use crate::catalog::AliasCatalog;

/// Which elements get walked.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Only elements named in the component catalog, instead of every
    /// capitalized element.
    pub restrict_to_catalog: bool,
}

/// Where a literal sits; decides the replacement syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralPosition {
    /// `name="..."`
    AttributeString,
    /// `name={literal}`: the container is the natural replacement target.
    ContainerRoot { container: Span },
    /// Object property value, ternary branch or logical operand.
    Nested,
}

/// A literal governed by a property name.
#[derive(Debug, Clone, Copy)]
pub struct LiteralOccurrence<'d> {
    pub element: &'d JsxElement,
    pub prop_name: &'d str,
    pub literal: &'d Expr,
    pub position: LiteralPosition,
    pub in_spread: bool,
    pub in_conditional: bool,
    pub in_logical: bool,
    pub via_breakpoint: bool,
}

/// The syntactic home of a property value.
#[derive(Debug, Clone, Copy)]
pub enum Slot<'d> {
    /// A JSX attribute. `container` is the `{...}` span, `None` for a
    /// string attribute.
    Attribute { attribute: Span, container: Option<Span> },
    /// `key: value` inside an object literal, with its sibling members.
    Property { property: Span, members: &'d [ObjectMember] },
}

/// A property value, seen before the walker descends into it.
#[derive(Debug, Clone, Copy)]
pub struct SlotOccurrence<'d> {
    pub element: &'d JsxElement,
    pub prop_name: &'d str,
    pub value: &'d Expr,
    pub slot: Slot<'d>,
    pub in_spread: bool,
    pub via_breakpoint: bool,
}

impl SlotOccurrence<'_> {
    /// Whether a sibling attribute/property named `key` already exists.
    pub fn has_sibling(&self, key: &str) -> bool {
        match self.slot {
            Slot::Attribute { .. } => self.element.attributes.iter().any(|a| {
                matches!(a, JsxAttribute::Named { name, .. } if name == key)
            }),
            Slot::Property { members, .. } => members.iter().any(|m| {
                matches!(m, ObjectMember::Property { key: Some(k), .. } if k == key)
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAction {
    Descend,
    /// The visitor handled the whole value.
    Skip,
}

/// Receives occurrences in document order.
pub trait OccurrenceVisitor<'d> {
    fn on_slot(&mut self, _slot: &SlotOccurrence<'d>) -> SlotAction {
        SlotAction::Descend
    }

    fn on_literal(&mut self, literal: &LiteralOccurrence<'d>);
}

#[derive(Debug, Clone, Copy)]
struct Cursor<'d> {
    prop: Option<&'d str>,
    position: LiteralPosition,
    in_spread: bool,
    in_conditional: bool,
    in_logical: bool,
    via_breakpoint: bool,
}

impl<'d> Cursor<'d> {
    fn attribute(prop: &'d str, position: LiteralPosition) -> Self {
        Self {
            prop: Some(prop),
            position,
            in_spread: false,
            in_conditional: false,
            in_logical: false,
            via_breakpoint: false,
        }
    }

    fn spread() -> Self {
        Self {
            prop: None,
            position: LiteralPosition::Nested,
            in_spread: true,
            in_conditional: false,
            in_logical: false,
            via_breakpoint: false,
        }
    }

    fn nested(self) -> Self {
        Self {
            position: LiteralPosition::Nested,
            ..self
        }
    }
}

pub struct TreeWalker<'c> {
    catalog: &'c AliasCatalog,
    options: WalkOptions,
}

impl<'c> TreeWalker<'c> {
    pub fn new(catalog: &'c AliasCatalog, options: WalkOptions) -> Self {
        Self { catalog, options }
    }

    /// Walk every checked element of `doc`.
    pub fn walk<'d, V: OccurrenceVisitor<'d>>(&self, doc: &'d Document, visitor: &mut V) {
        for element in &doc.elements {
            if self.should_check(element) {
                self.walk_element(element, visitor);
            }
        }
    }

    /// Capitalized elements, optionally restricted to the component catalog.
    pub fn should_check(&self, element: &JsxElement) -> bool {
        if !element.is_component() {
            return false;
        }
        if self.options.restrict_to_catalog {
            return element
                .name
                .as_deref()
                .is_some_and(|n| self.catalog.is_catalog_component(n));
        }
        true
    }

    pub fn walk_element<'d, V: OccurrenceVisitor<'d>>(&self, element: &'d JsxElement, visitor: &mut V) {
        for attr in &element.attributes {
            match attr {
                JsxAttribute::Named { name, span, value } => {
                    if name == RAW_STYLE_ATTRIBUTE {
                        continue;
                    }
                    let (expr, container, position) = match value {
                        Some(AttrValue::String(expr)) => (expr, None, LiteralPosition::AttributeString),
                        Some(AttrValue::Container {
                            span: container,
                            expr: Some(expr),
                        }) => (
                            expr,
                            Some(*container),
                            LiteralPosition::ContainerRoot {
                                container: *container,
                            },
                        ),
                        // Boolean attributes, `{}` and element values.
                        _ => continue,
                    };
                    let slot = SlotOccurrence {
                        element,
                        prop_name: name,
                        value: expr,
                        slot: Slot::Attribute {
                            attribute: *span,
                            container,
                        },
                        in_spread: false,
                        via_breakpoint: false,
                    };
                    if visitor.on_slot(&slot) == SlotAction::Descend {
                        self.visit_expr(element, Cursor::attribute(name, position), expr, visitor);
                    }
                }
                JsxAttribute::Spread { argument, .. } => {
                    self.visit_expr(element, Cursor::spread(), argument, visitor);
                }
            }
        }
    }

    fn visit_expr<'d, V: OccurrenceVisitor<'d>>(
        &self,
        element: &'d JsxElement,
        cursor: Cursor<'d>,
        expr: &'d Expr,
        visitor: &mut V,
    ) {
        match &expr.kind {
            ExprKind::String { .. } | ExprKind::Number { .. } => {
                if let Some(prop_name) = cursor.prop {
                    visitor.on_literal(&LiteralOccurrence {
                        element,
                        prop_name,
                        literal: expr,
                        position: cursor.position,
                        in_spread: cursor.in_spread,
                        in_conditional: cursor.in_conditional,
                        in_logical: cursor.in_logical,
                        via_breakpoint: cursor.via_breakpoint,
                    });
                }
            }
            ExprKind::Paren { inner } => self.visit_expr(element, cursor, inner, visitor),
            ExprKind::Conditional {
                consequent,
                alternate,
                ..
            } => {
                let branch = Cursor {
                    in_conditional: true,
                    ..cursor.nested()
                };
                self.visit_expr(element, branch, consequent, visitor);
                self.visit_expr(element, branch, alternate, visitor);
            }
            ExprKind::Logical { left, right, .. } => {
                let operand = Cursor {
                    in_logical: true,
                    ..cursor.nested()
                };
                self.visit_expr(element, operand, left, visitor);
                self.visit_expr(element, operand, right, visitor);
            }
            ExprKind::Object { members } => self.visit_members(element, cursor, members, visitor),
            ExprKind::Call | ExprKind::Other { .. } => {}
        }
    }

    fn visit_members<'d, V: OccurrenceVisitor<'d>>(
        &self,
        element: &'d JsxElement,
        cursor: Cursor<'d>,
        members: &'d [ObjectMember],
        visitor: &mut V,
    ) {
        for member in members {
            match member {
                ObjectMember::Property {
                    key: Some(key),
                    span,
                    value,
                } => {
                    // A spread object's keys act as attributes.
                    if cursor.prop.is_none() && key == RAW_STYLE_ATTRIBUTE {
                        continue;
                    }
                    let (prop, via_breakpoint) = if self.catalog.is_breakpoint(key) {
                        (cursor.prop, true)
                    } else {
                        (Some(key.as_str()), false)
                    };
                    let Some(prop_name) = prop else {
                        continue;
                    };
                    let inner = Cursor {
                        prop,
                        via_breakpoint,
                        ..cursor.nested()
                    };
                    let slot = SlotOccurrence {
                        element,
                        prop_name,
                        value,
                        slot: Slot::Property {
                            property: *span,
                            members,
                        },
                        in_spread: cursor.in_spread,
                        via_breakpoint,
                    };
                    if visitor.on_slot(&slot) == SlotAction::Descend {
                        self.visit_expr(element, inner, value, visitor);
                    }
                }
                ObjectMember::Spread { argument, .. } => {
                    let inner = Cursor {
                        prop: None,
                        in_spread: true,
                        via_breakpoint: false,
                        ..cursor.nested()
                    };
                    self.visit_expr(element, inner, argument, visitor);
                }
                // Computed keys, shorthand properties, methods.
                _ => {}
            }
        }
    }
}
