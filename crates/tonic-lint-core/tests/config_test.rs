//! Tests for the tonic-lint configuration system.

use std::sync::Mutex;

use tonic_lint_core::config::{ColorModeConfig, ConfigOverrides, TonicLintConfig};
use tonic_lint_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear TONIC_LINT_ env vars and point HOME at an empty directory so a
/// developer's user config cannot leak in.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "TONIC_LINT_IMPORT_SOURCE",
        "TONIC_LINT_ONLY_ALLOW_KNOWN_ALIASES",
        "TONIC_LINT_RESTRICT_TO_CATALOG",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

/// T0-CFG-01: overrides > env > project > user > defaults
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".tonic-lint");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[rules]
enforce-color-mode = "info"

[color_mode]
import_source = "@user/react"
ignored_colors = ["gray:10"]
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("tonic-lint.toml"),
        r#"
[rules]
enforce-color-mode = "warning"

[color_mode]
import_source = "@project/react"
only_allow_known_aliases = false
"#,
    )
    .unwrap();

    std::env::set_var("TONIC_LINT_ONLY_ALLOW_KNOWN_ALIASES", "true");
    std::env::set_var("TONIC_LINT_IMPORT_SOURCE", "@env/react");

    let overrides = ConfigOverrides {
        import_source: Some("@override/react".to_string()),
        ..Default::default()
    };
    let config = TonicLintConfig::load(project.path(), Some(&overrides)).unwrap();

    // Project wins over user.
    assert_eq!(config.rules.level("enforce-color-mode"), "warning");
    // User value survives where no higher layer sets one.
    assert_eq!(config.color_mode.ignored_colors, vec!["gray:10".to_string()]);
    // Env wins over project.
    assert!(config.color_mode.effective_only_allow_known_aliases());
    // Overrides win over env.
    assert_eq!(config.color_mode.effective_import_source(), "@override/react");

    isolate_env(home.path());
}

/// T0-CFG-02: no files at all falls back to compiled defaults
#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    let config = TonicLintConfig::load(project.path(), None).unwrap();

    assert_eq!(config, TonicLintConfig::default());
    assert_eq!(config.rules.level("enforce-shorthands"), "warning");
    assert_eq!(config.rules.level("enforce-color-mode"), "off");
    assert!(!config.rules.is_enabled("enforce-color-mode"));
    assert_eq!(config.color_mode.effective_import_source(), "@tonic-one/react");
    assert!(!config.color_mode.effective_only_allow_known_aliases());
    assert!(!config.shorthands.effective_restrict_to_catalog());
}

/// T0-CFG-03: unparseable env values are ignored, not fatal
#[test]
fn test_invalid_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("TONIC_LINT_RESTRICT_TO_CATALOG", "sometimes");
    let project = tempdir();
    let config = TonicLintConfig::load(project.path(), None).unwrap();
    assert_eq!(config.shorthands.restrict_to_catalog, None);

    isolate_env(home.path());
}

/// T0-CFG-04: a malformed project file is a parse error naming the file
#[test]
fn test_malformed_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(project.path().join("tonic-lint.toml"), "[rules\nbroken").unwrap();
    let err = TonicLintConfig::load(project.path(), None).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("tonic-lint.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

/// T0-CFG-05: unknown rule ids and levels are rejected before any lint runs
#[test]
fn test_rule_validation() {
    let err = TonicLintConfig::from_toml("[rules]\nno-such-rule = \"error\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "rules.no-such-rule"));

    let err = TonicLintConfig::from_toml("[rules]\nenforce-shorthands = \"loud\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let ok = TonicLintConfig::from_toml("[rules]\nenforce-shorthands = \"off\"\n").unwrap();
    assert!(!ok.rules.is_enabled("enforce-shorthands"));
}

/// T0-CFG-06: rule option tables reject unknown keys
#[test]
fn test_unknown_option_keys_rejected() {
    let err = TonicLintConfig::from_toml("[color_mode]\nimportFrom = \"x\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));

    let err = TonicLintConfig::from_toml("[shorthands]\nstrict = true\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

/// T0-CFG-07: empty import source and empty ignored colors fail validation
#[test]
fn test_color_mode_validation() {
    let err = TonicLintConfig::from_toml("[color_mode]\nimport_source = \"  \"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "color_mode.import_source"));

    let err = TonicLintConfig::from_toml("[color_mode]\nignored_colors = [\"gray:10\", \"\"]\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "color_mode.ignored_colors"));
}

/// T0-CFG-08: color-style overrides flatten nested tables into dotted paths
#[test]
fn test_color_style_overrides_flatten() {
    let config = TonicLintConfig::from_toml(
        r#"
[color_mode.color_style.light]
"background.primary" = "gray:10"

[color_mode.color_style.dark.brand]
accent = "blue:60"
muted = "blue:40"
"#,
    )
    .unwrap();

    assert_eq!(
        config.color_mode.light_overrides(),
        vec![("background.primary".to_string(), "gray:10".to_string())]
    );
    assert_eq!(
        config.color_mode.dark_overrides(),
        vec![
            ("brand.accent".to_string(), "blue:60".to_string()),
            ("brand.muted".to_string(), "blue:40".to_string()),
        ]
    );
}

/// T0-CFG-09: malformed color-style paths are rejected
#[test]
fn test_color_style_bad_path() {
    let err = TonicLintConfig::from_toml(
        r#"
[color_mode.color_style.light]
"background..primary" = "gray:10"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let err = TonicLintConfig::from_toml(
        r#"
[color_mode.color_style.dark]
"1st.color" = "gray:10"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

/// T0-CFG-10: ESLint-style camelCase JSON options
#[test]
fn test_from_json_options() {
    let value = serde_json::json!({
        "importSource": "@acme/react",
        "ignoredColors": ["white:primary"],
        "onlyAllowKnownAliases": true,
        "colorStyle": { "light": { "background": { "primary": "gray:10" } } }
    });
    let config = ColorModeConfig::from_json(&value).unwrap();
    assert_eq!(config.effective_import_source(), "@acme/react");
    assert_eq!(config.ignored_colors, vec!["white:primary".to_string()]);
    assert!(config.effective_only_allow_known_aliases());
    assert_eq!(
        config.light_overrides(),
        vec![("background.primary".to_string(), "gray:10".to_string())]
    );

    let bad = serde_json::json!({ "importSource": 42 });
    assert!(ColorModeConfig::from_json(&bad).is_err());
}

/// T0-CFG-11: to_toml output loads back to the same config
#[test]
fn test_toml_round_trip() {
    let config = TonicLintConfig::from_toml(
        r#"
[rules]
enforce-color-mode = "error"

[shorthands]
restrict_to_catalog = true

[color_mode]
import_source = "@acme/react"
ignored_colors = ["gray:10"]
"#,
    )
    .unwrap();

    let serialized = config.to_toml().unwrap();
    let reloaded = TonicLintConfig::from_toml(&serialized).unwrap();
    assert_eq!(reloaded, config);
}

/// T0-CFG-12: merge_from keeps values the other side leaves unset
#[test]
fn test_merge_from_partial() {
    let mut base = ColorModeConfig {
        import_source: Some("@base/react".to_string()),
        ignored_colors: vec!["gray:10".to_string()],
        ..Default::default()
    };
    let other = ColorModeConfig {
        only_allow_known_aliases: Some(true),
        ..Default::default()
    };
    base.merge_from(&other);
    assert_eq!(base.effective_import_source(), "@base/react");
    assert_eq!(base.ignored_colors, vec!["gray:10".to_string()]);
    assert_eq!(base.only_allow_known_aliases, Some(true));
}
