//! Value normalizer: raw literal → canonical table key → token.
//!
//! Every function fails closed. Anything ambiguous or malformed is a miss,
//! never a guess.

use crate::ast::{Expr, ExprKind};
use crate::catalog::{color_key, AliasCatalog, Category, Conversion, RawKey};

/// CSS keywords that are always allowed in color positions.
pub const SPECIAL_COLOR_KEYWORDS: [&str; 5] =
    ["unset", "inherit", "initial", "transparent", "currentcolor"];

/// A literal as it appears in source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Number(f64),
    Str(&'a str),
}

impl<'a> RawValue<'a> {
    /// `None` for anything that is not a string or numeric literal.
    pub fn from_expr(expr: &'a Expr) -> Option<Self> {
        match &expr.kind {
            ExprKind::String { value } => Some(RawValue::Str(value)),
            ExprKind::Number { value, .. } => Some(RawValue::Number(*value)),
            _ => None,
        }
    }

    /// Display form used in diagnostic messages.
    pub fn display(&self) -> String {
        match self {
            RawValue::Number(n) => format_number(*n),
            RawValue::Str(s) => format!("\"{s}\""),
        }
    }
}

/// Numbers pass through; `"<n>px"` → n; `"<n>rem"` → 16·n. The result must
/// be a finite integer.
pub fn to_pixels(value: RawValue<'_>) -> Option<i64> {
    match value {
        RawValue::Number(n) => as_integer(n),
        RawValue::Str(s) => {
            if let Some(px) = s.strip_suffix("px") {
                parse_strict(px).and_then(as_integer)
            } else if let Some(rem) = s.strip_suffix("rem") {
                parse_strict(rem).and_then(|n| as_integer(n * 16.0))
            } else {
                None
            }
        }
    }
}

/// Numbers pass through; numeric strings parse. Non-integers miss.
pub fn to_numeric(value: RawValue<'_>) -> Option<i64> {
    match value {
        RawValue::Number(n) => as_integer(n),
        RawValue::Str(s) => parse_strict(s).and_then(as_integer),
    }
}

/// Whether `value` is one of the always-allowed color keywords (or empty).
pub fn is_special_color(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || SPECIAL_COLOR_KEYWORDS
            .iter()
            .any(|k| trimmed.eq_ignore_ascii_case(k))
}

/// Folded color key, or `None` for non-strings and special keywords.
pub fn normalize_color(value: RawValue<'_>) -> Option<String> {
    match value {
        RawValue::Str(s) if !is_special_color(s) => Some(color_key(s)),
        _ => None,
    }
}

/// Resolve a literal to its token under `category`.
pub fn resolve(catalog: &AliasCatalog, category: Category, value: RawValue<'_>) -> Option<&'static str> {
    match category.conversion() {
        Conversion::Pixels => catalog.lookup(category, RawKey::Integer(to_pixels(value)?)),
        Conversion::Numeric => catalog.lookup(category, RawKey::Integer(to_numeric(value)?)),
        Conversion::Color => {
            let key = normalize_color(value)?;
            catalog.lookup(category, RawKey::Color(&key))
        }
    }
}

/// A `"<width> <style> <color>"` shorthand with a catalogued color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSplit {
    /// `"<width> <style>"`
    pub remainder: String,
    pub color_token: &'static str,
}

/// Split on single spaces; exactly three parts, the third a known color.
pub fn split_border_shorthand(catalog: &AliasCatalog, value: &str) -> Option<BorderSplit> {
    let parts: Vec<&str> = value.split(' ').collect();
    let [width, style, color] = parts.as_slice() else {
        return None;
    };
    let color_token = resolve(catalog, Category::Color, RawValue::Str(*color))?;
    Some(BorderSplit {
        remainder: format!("{width} {style}"),
        color_token,
    })
}

/// Decimal parse with no surrounding whitespace, no sign-only or empty input.
fn parse_strict(s: &str) -> Option<f64> {
    if s.is_empty() || s.trim() != s {
        return None;
    }
    let n: f64 = s.parse().ok()?;
    n.is_finite().then_some(n)
}

fn as_integer(n: f64) -> Option<i64> {
    if !n.is_finite() || n.fract() != 0.0 || n.abs() > i64::MAX as f64 {
        return None;
    }
    Some(n as i64)
}

fn format_number(n: f64) -> String {
    match as_integer(n) {
        Some(i) => i.to_string(),
        None => n.to_string(),
    }
}
