//! Rules engine: each rule walks a document and returns diagnostics with
//! optional fixes.

pub mod color_mode;
pub mod shorthands;
pub mod suppression;
pub mod types;

pub use color_mode::ColorModeRule;
pub use shorthands::ShorthandsRule;
pub use suppression::{SuppressionChecker, SuppressionDirective};
pub use types::*;

use crate::ast::Document;

/// A lint rule. `check` starts from fresh per-document state every call.
pub trait Rule: Send + Sync {
    fn id(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn check(&self, doc: &Document) -> Vec<Diagnostic>;
}
