//! Rewrite engine: turns matches into structured patch operations.

pub mod border;
pub mod insertion;
pub mod patch;

pub use border::{plan_border, BorderRewrite};
pub use insertion::{accessor_host, accessor_import, leading_statements, AccessorHost, TraversalContext};
pub use patch::{
    quote, ImportAnchor, PatchOperation, SiblingOperand, SiblingSyntax, SiblingValue,
    StatementAnchor, TextEdit,
};

use crate::ast::Span;
use crate::walker::LiteralPosition;

/// Replace a literal with a quoted token. A literal that is the whole
/// content of an attribute's `{...}` takes the braces with it, so
/// `p={12}` becomes `p="3x"`.
pub fn replace_with_token(position: LiteralPosition, literal: Span, token: &str) -> PatchOperation {
    let target = match position {
        LiteralPosition::ContainerRoot { container } => container,
        LiteralPosition::AttributeString | LiteralPosition::Nested => literal,
    };
    PatchOperation::ReplaceLiteral {
        target,
        replacement: quote(token),
    }
}

/// Replace a literal with a read of `binding.path`. A plain string
/// attribute needs braces around it; every other position is already an
/// expression.
pub fn replace_with_member_path(
    position: LiteralPosition,
    literal: Span,
    binding: &str,
    path: &str,
) -> PatchOperation {
    let replacement = match position {
        LiteralPosition::AttributeString => format!("{{{binding}.{path}}}"),
        LiteralPosition::ContainerRoot { .. } | LiteralPosition::Nested => format!("{binding}.{path}"),
    };
    PatchOperation::ReplaceLiteral {
        target: literal,
        replacement,
    }
}
