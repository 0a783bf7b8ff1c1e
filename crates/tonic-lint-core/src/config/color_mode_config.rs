//! Options for the `enforce-color-mode` rule.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_IMPORT_SOURCE;
use crate::errors::ConfigError;

/// Options for the color-mode enforcement rule.
///
/// Accepts both the snake_case TOML keys and the camelCase keys of the
/// ESLint option object (`importSource`, `ignoredColors`,
/// `onlyAllowKnownAliases`, `colorStyle`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ColorModeConfig {
    /// Module the accessors are imported from. Default: `@tonic-one/react`.
    #[serde(alias = "importSource")]
    pub import_source: Option<String>,
    /// Tokens that are never reported.
    #[serde(alias = "ignoredColors")]
    pub ignored_colors: Vec<String>,
    /// Report color-shaped values with no known path. Default: false.
    #[serde(alias = "onlyAllowKnownAliases")]
    pub only_allow_known_aliases: Option<bool>,
    /// Overrides merged over the default light/dark color-style table.
    #[serde(alias = "colorStyle")]
    pub color_style: Option<ColorStyleOverride>,
}

/// Per-mode overrides of the color-style table.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ColorStyleOverride {
    pub light: BTreeMap<String, ColorStyleEntry>,
    pub dark: BTreeMap<String, ColorStyleEntry>,
}

/// A color-style override entry: either a token at this key, or a nested
/// group whose keys extend the dotted path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColorStyleEntry {
    Token(String),
    Group(BTreeMap<String, ColorStyleEntry>),
}

impl ColorModeConfig {
    /// Build from an ESLint-style JSON option object.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_value(value.clone()).map_err(|e| ConfigError::ParseError {
                path: "<options>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn effective_import_source(&self) -> &str {
        self.import_source.as_deref().unwrap_or(DEFAULT_IMPORT_SOURCE)
    }

    pub fn effective_only_allow_known_aliases(&self) -> bool {
        self.only_allow_known_aliases.unwrap_or(false)
    }

    /// Flattened `(dotted path, token)` overrides for the light mode.
    pub fn light_overrides(&self) -> Vec<(String, String)> {
        self.color_style
            .as_ref()
            .map(|s| flatten_entries(&s.light))
            .unwrap_or_default()
    }

    /// Flattened `(dotted path, token)` overrides for the dark mode.
    pub fn dark_overrides(&self) -> Vec<(String, String)> {
        self.color_style
            .as_ref()
            .map(|s| flatten_entries(&s.dark))
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(source) = &self.import_source {
            if source.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "color_mode.import_source".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if self.ignored_colors.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "color_mode.ignored_colors".to_string(),
                message: "entries must not be empty".to_string(),
            });
        }
        for (mode, entries) in [("light", self.light_overrides()), ("dark", self.dark_overrides())] {
            for (path, token) in entries {
                if !is_valid_path(&path) {
                    return Err(ConfigError::InvalidValue {
                        field: format!("color_mode.color_style.{mode}"),
                        message: format!("'{path}' is not a dotted identifier path"),
                    });
                }
                if token.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: format!("color_mode.color_style.{mode}.{path}"),
                        message: "token must not be empty".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge `other` over `self`; only values present in `other` win.
    pub fn merge_from(&mut self, other: &ColorModeConfig) {
        if other.import_source.is_some() {
            self.import_source = other.import_source.clone();
        }
        if !other.ignored_colors.is_empty() {
            self.ignored_colors = other.ignored_colors.clone();
        }
        if other.only_allow_known_aliases.is_some() {
            self.only_allow_known_aliases = other.only_allow_known_aliases;
        }
        if let Some(theirs) = &other.color_style {
            let ours = self.color_style.get_or_insert_with(ColorStyleOverride::default);
            for (key, entry) in &theirs.light {
                ours.light.insert(key.clone(), entry.clone());
            }
            for (key, entry) in &theirs.dark {
                ours.dark.insert(key.clone(), entry.clone());
            }
        }
    }
}

fn flatten_entries(entries: &BTreeMap<String, ColorStyleEntry>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into(entries, "", &mut out);
    out
}

fn flatten_into(
    entries: &BTreeMap<String, ColorStyleEntry>,
    prefix: &str,
    out: &mut Vec<(String, String)>,
) {
    for (key, entry) in entries {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match entry {
            ColorStyleEntry::Token(token) => out.push((path, token.clone())),
            ColorStyleEntry::Group(group) => flatten_into(group, &path, out),
        }
    }
}

/// Every segment must be usable after a `.` in a member expression.
fn is_valid_path(path: &str) -> bool {
    !path.is_empty()
        && path.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}
