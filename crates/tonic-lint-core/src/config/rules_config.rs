//! Per-rule enablement levels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{KNOWN_RULES, RULE_ENFORCE_SHORTHANDS, RULE_LEVELS};
use crate::errors::ConfigError;

/// Maps rule ids to levels (`off`, `hint`, `info`, `warning`, `error`).
///
/// Rules not listed fall back to their defaults: `enforce-shorthands` at
/// `warning`, everything else `off`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct RulesConfig {
    pub levels: BTreeMap<String, String>,
}

impl RulesConfig {
    /// Effective level for a rule id.
    pub fn level(&self, rule_id: &str) -> &str {
        match self.levels.get(rule_id) {
            Some(level) => level.as_str(),
            None if rule_id == RULE_ENFORCE_SHORTHANDS => "warning",
            None => "off",
        }
    }

    pub fn is_enabled(&self, rule_id: &str) -> bool {
        self.level(rule_id) != "off"
    }

    pub fn set(&mut self, rule_id: impl Into<String>, level: impl Into<String>) {
        self.levels.insert(rule_id.into(), level.into());
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (rule_id, level) in &self.levels {
            if !KNOWN_RULES.contains(&rule_id.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("rules.{rule_id}"),
                    message: format!("unknown rule; expected one of {}", KNOWN_RULES.join(", ")),
                });
            }
            if !RULE_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("rules.{rule_id}"),
                    message: format!(
                        "unknown level '{level}'; expected one of {}",
                        RULE_LEVELS.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }
}
