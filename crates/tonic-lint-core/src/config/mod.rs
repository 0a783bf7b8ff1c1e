//! Configuration system for tonic-lint.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod color_mode_config;
pub mod rules_config;
pub mod shorthands_config;
pub mod tonic_lint_config;

pub use color_mode_config::{ColorModeConfig, ColorStyleEntry, ColorStyleOverride};
pub use rules_config::RulesConfig;
pub use shorthands_config::ShorthandsConfig;
pub use tonic_lint_config::{ConfigOverrides, TonicLintConfig};
