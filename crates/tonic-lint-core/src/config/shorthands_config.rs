//! Options for the `enforce-shorthands` rule.

use serde::{Deserialize, Serialize};

/// Options for the shorthand rewrite rule.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShorthandsConfig {
    /// Only check elements whose name is in the tonic-ui component catalog,
    /// instead of every capitalized element. Default: false.
    #[serde(alias = "restrictToCatalog")]
    pub restrict_to_catalog: Option<bool>,
}

impl ShorthandsConfig {
    pub fn effective_restrict_to_catalog(&self) -> bool {
        self.restrict_to_catalog.unwrap_or(false)
    }
}
