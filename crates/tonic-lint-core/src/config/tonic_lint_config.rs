//! Top-level tonic-lint configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ColorModeConfig, RulesConfig, ShorthandsConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TONIC_LINT_*`)
/// 3. Project config (`tonic-lint.toml` in the project root)
/// 4. User config (`~/.tonic-lint/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TonicLintConfig {
    pub rules: RulesConfig,
    pub shorthands: ShorthandsConfig,
    pub color_mode: ColorModeConfig,
}

/// Override arguments a host can apply on top of every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `(rule id, level)` pairs.
    pub rule_levels: Vec<(String, String)>,
    pub import_source: Option<String>,
    pub only_allow_known_aliases: Option<bool>,
    pub restrict_to_catalog: Option<bool>,
}

impl TonicLintConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. A broken user file is fatal only when
        // it fails to parse; an unreadable one is skipped.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "skipping unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        ::tracing::debug!(root = %root.display(), "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate every section. Runs before any document is traversed.
    pub fn validate(config: &TonicLintConfig) -> Result<(), ConfigError> {
        config.rules.validate()?;
        config.color_mode.validate()?;
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    fn merge_toml_file(config: &mut TonicLintConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TonicLintConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut TonicLintConfig, other: &TonicLintConfig) {
        for (rule_id, level) in &other.rules.levels {
            base.rules.set(rule_id.clone(), level.clone());
        }
        if other.shorthands.restrict_to_catalog.is_some() {
            base.shorthands.restrict_to_catalog = other.shorthands.restrict_to_catalog;
        }
        base.color_mode.merge_from(&other.color_mode);
    }

    /// Pattern: `TONIC_LINT_IMPORT_SOURCE`, `TONIC_LINT_ONLY_ALLOW_KNOWN_ALIASES`,
    /// `TONIC_LINT_RESTRICT_TO_CATALOG`. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut TonicLintConfig) {
        if let Ok(val) = std::env::var("TONIC_LINT_IMPORT_SOURCE") {
            config.color_mode.import_source = Some(val);
        }
        if let Ok(val) = std::env::var("TONIC_LINT_ONLY_ALLOW_KNOWN_ALIASES") {
            if let Ok(v) = val.parse::<bool>() {
                config.color_mode.only_allow_known_aliases = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TONIC_LINT_RESTRICT_TO_CATALOG") {
            if let Ok(v) = val.parse::<bool>() {
                config.shorthands.restrict_to_catalog = Some(v);
            }
        }
    }

    fn apply_overrides(config: &mut TonicLintConfig, overrides: &ConfigOverrides) {
        for (rule_id, level) in &overrides.rule_levels {
            config.rules.set(rule_id.clone(), level.clone());
        }
        if let Some(ref v) = overrides.import_source {
            config.color_mode.import_source = Some(v.clone());
        }
        if let Some(v) = overrides.only_allow_known_aliases {
            config.color_mode.only_allow_known_aliases = Some(v);
        }
        if let Some(v) = overrides.restrict_to_catalog {
            config.shorthands.restrict_to_catalog = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
