//! Linter errors: aggregates subsystem errors via `From` conversions.

use super::error_code::{self, TonicLintErrorCode};
use super::{ConfigError, ParseError};

/// Errors surfaced by the linter entry points.
///
/// Value matching never fails; only setup (configuration), parsing and
/// file access can.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl TonicLintErrorCode for LintError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
