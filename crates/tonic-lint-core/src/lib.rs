//! tonic-lint-core: shared foundation for the tonic-lint engine.
//!
//! Errors, layered configuration, tracing setup, constants and the
//! collection aliases used by the analysis crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::TonicLintConfig;
pub use errors::{ConfigError, LintError, ParseError, TonicLintErrorCode};
