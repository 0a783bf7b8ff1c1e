//! Typed document model lowered from tree-sitter output.

pub mod document;
pub mod types;

pub use document::Document;
pub use types::*;
