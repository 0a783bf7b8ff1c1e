//! Light/dark color-style table: token → dotted accessor path.

use serde::{Deserialize, Serialize};
use tonic_lint_core::config::ColorModeConfig;
use tonic_lint_core::types::collections::FxHashMap;

use super::color_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

const DEFAULT_LIGHT: &[(&str, &str)] = &[
    ("background.primary", "white:emphasis"),
    ("background.secondary", "gray:10"),
    ("background.tertiary", "gray:20"),
    ("background.inverted", "gray:70"),
    ("background.inverse", "gray:70"),
    ("background.highlighted", "rgba(0, 0, 0, 0.12)"),
    ("background.selected", "rgba(0, 0, 0, 0.08)"),
    ("color.emphasis", "black:emphasis"),
    ("color.primary", "black:primary"),
    ("color.secondary", "black:secondary"),
    ("color.tertiary", "black:tertiary"),
    ("color.disabled", "black:disabled"),
    ("color.success", "green:50"),
    ("color.info", "blue:60"),
    ("color.warning", "orange:50"),
    ("color.error", "red:60"),
    ("divider", "rgba(0, 0, 0, 0.12)"),
    ("text.selection", "blue:60"),
    ("text.highlight", "#fce79e"),
    ("shadow.thin", "0 2px 8px 0 rgba(0, 0, 0, 0.16), 0 1px 2px 0 rgba(0, 0, 0, 0.08)"),
    ("shadow.medium", "0 4px 16px 0 rgba(0, 0, 0, 0.16), 0 2px 4px 0 rgba(0, 0, 0, 0.08)"),
    ("shadow.thick", "0 8px 32px 0 rgba(0, 0, 0, 0.16), 0 4px 8px 0 rgba(0, 0, 0, 0.08)"),
];

const DEFAULT_DARK: &[(&str, &str)] = &[
    ("background.primary", "gray:100"),
    ("background.secondary", "gray:90"),
    ("background.tertiary", "gray:80"),
    ("background.inverted", "gray:10"),
    ("background.inverse", "gray:10"),
    ("background.highlighted", "rgba(255, 255, 255, 0.12)"),
    ("background.selected", "rgba(0, 0, 0, 0.08)"),
    ("color.emphasis", "white:emphasis"),
    ("color.primary", "white:primary"),
    ("color.secondary", "white:secondary"),
    ("color.tertiary", "white:tertiary"),
    ("color.disabled", "white:disabled"),
    ("color.success", "green:40"),
    ("color.info", "blue:40"),
    ("color.warning", "orange:50"),
    ("color.error", "red:50"),
    ("divider", "rgba(255, 255, 255, 0.12)"),
    ("text.selection", "blue:60"),
    ("text.highlight", "#fce79e"),
    ("shadow.thin", "0 2px 8px 0 rgba(0, 0, 0, 0.48), 0 1px 2px 0 rgba(0, 0, 0, 0.16)"),
    ("shadow.medium", "0 4px 16px 0 rgba(0, 0, 0, 0.48), 0 2px 4px 0 rgba(0, 0, 0, 0.16)"),
    ("shadow.thick", "0 8px 32px 0 rgba(0, 0, 0, 0.48), 0 4px 8px 0 rgba(0, 0, 0, 0.16)"),
];

/// Ordered `(path, token)` entries per mode plus the derived token → path
/// map. Light entries are indexed before dark ones; a token present in
/// both resolves to its dark path.
#[derive(Debug, Clone)]
pub struct ColorStyleCatalog {
    light: Vec<(String, String)>,
    dark: Vec<(String, String)>,
    by_token: FxHashMap<String, String>,
    by_color_key: FxHashMap<String, String>,
}

impl ColorStyleCatalog {
    pub fn new() -> Self {
        Self::with_overrides(&[], &[])
    }

    /// Defaults with per-mode overrides: an override replaces the token at
    /// an existing path or appends a new path.
    pub fn with_overrides(light: &[(String, String)], dark: &[(String, String)]) -> Self {
        let mut light_entries = to_owned_entries(DEFAULT_LIGHT);
        let mut dark_entries = to_owned_entries(DEFAULT_DARK);
        apply_overrides(&mut light_entries, light);
        apply_overrides(&mut dark_entries, dark);

        let mut by_token = FxHashMap::default();
        let mut by_color_key = FxHashMap::default();
        for (path, token) in light_entries.iter().chain(dark_entries.iter()) {
            by_token.insert(token.clone(), path.clone());
            by_color_key.insert(color_key(token), path.clone());
        }

        Self {
            light: light_entries,
            dark: dark_entries,
            by_token,
            by_color_key,
        }
    }

    pub fn from_config(config: &ColorModeConfig) -> Self {
        Self::with_overrides(&config.light_overrides(), &config.dark_overrides())
    }

    /// Path for an exact token string.
    pub fn path_for_token(&self, token: &str) -> Option<&str> {
        self.by_token.get(token).map(String::as_str)
    }

    /// Path for a raw value: exact token first, then its folded color form.
    pub fn path_for_value(&self, value: &str) -> Option<&str> {
        self.path_for_token(value)
            .or_else(|| self.by_color_key.get(&color_key(value)).map(String::as_str))
    }

    pub fn entries(&self, mode: ColorMode) -> &[(String, String)] {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    pub fn token_at(&self, mode: ColorMode, path: &str) -> Option<&str> {
        self.entries(mode)
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, t)| t.as_str())
    }
}

impl Default for ColorStyleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned_entries(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(p, t)| (p.to_string(), t.to_string()))
        .collect()
}

fn apply_overrides(entries: &mut Vec<(String, String)>, overrides: &[(String, String)]) {
    for (path, token) in overrides {
        match entries.iter_mut().find(|(p, _)| p == path) {
            Some(slot) => slot.1 = token.clone(),
            None => entries.push((path.clone(), token.clone())),
        }
    }
}
