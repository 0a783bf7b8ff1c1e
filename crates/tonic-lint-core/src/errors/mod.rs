//! Error handling for tonic-lint.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod lint_error;
pub mod parse_error;

pub use config_error::ConfigError;
pub use error_code::TonicLintErrorCode;
pub use lint_error::LintError;
pub use parse_error::ParseError;
