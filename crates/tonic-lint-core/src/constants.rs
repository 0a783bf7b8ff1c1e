//! Shared constants for the tonic-lint engine.

/// tonic-lint version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Configuration ----

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "tonic-lint.toml";

/// User-level config directory name, under the home directory.
pub const USER_CONFIG_DIR: &str = ".tonic-lint";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "TONIC_LINT_LOG";

/// Tracing filter used when `TONIC_LINT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "tonic_lint=info";

// ---- Rule identifiers ----

pub const RULE_ENFORCE_SHORTHANDS: &str = "enforce-shorthands";
pub const RULE_ENFORCE_COLOR_MODE: &str = "enforce-color-mode";

/// Every rule id the engine knows about.
pub const KNOWN_RULES: [&str; 2] = [RULE_ENFORCE_SHORTHANDS, RULE_ENFORCE_COLOR_MODE];

/// Accepted rule levels, lowest to highest.
pub const RULE_LEVELS: [&str; 5] = ["off", "hint", "info", "warning", "error"];

// ---- Color mode accessors ----

/// Module the color-mode accessors are imported from by default.
pub const DEFAULT_IMPORT_SOURCE: &str = "@tonic-one/react";

/// Hook returning `[colorMode]`.
pub const COLOR_MODE_HOOK: &str = "useColorMode";

/// Hook returning `[colorStyle]`.
pub const COLOR_STYLE_HOOK: &str = "useColorStyle";

/// Local binding for the active color mode.
pub const COLOR_MODE_BINDING: &str = "colorMode";

/// Local binding for the color-style object; rewritten literals read off it.
pub const COLOR_STYLE_BINDING: &str = "colorStyle";

// ---- Fixing ----

/// Maximum number of lint/fix passes per document.
pub const MAX_FIX_PASSES: usize = 10;

// ---- Suppression ----

/// Inline directive suppressing diagnostics on the next (or same) line.
pub const SUPPRESSION_MARKER: &str = "tonic-lint-ignore";
