//! Alias catalog and color-style catalog tests.
//! T1-CAT-01 through T1-CAT-09

use tonic_lint_analysis::catalog::{
    color_key, AliasCatalog, Category, ColorMode, ColorStyleCatalog, PropertyKind, RawKey,
};
use tonic_lint_core::config::ColorModeConfig;

/// T1-CAT-01: fixed scale points resolve to their tokens
#[test]
fn test_scale_points() {
    let catalog = AliasCatalog::global();
    let cases = [
        (Category::Spacing, 4, "1x"),
        (Category::Spacing, 96, "24x"),
        (Category::Spacing, 256, "64x"),
        (Category::LineHeight, 18, "xs"),
        (Category::LineHeight, 40, "4xl"),
        (Category::FontWeight, 100, "thin"),
        (Category::FontWeight, 900, "black"),
        (Category::FontSize, 12, "xs"),
        (Category::FontSize, 32, "4xl"),
        (Category::ZIndex, -1, "hide"),
        (Category::ZIndex, 1800, "tooltip"),
        (Category::BorderRadius, 3, "sm"),
        (Category::BorderRadius, 6, "md"),
        (Category::BorderRadius, 12, "lg"),
    ];
    for (category, raw, token) in cases {
        assert_eq!(
            catalog.lookup(category, RawKey::Integer(raw)),
            Some(token),
            "{category} {raw}"
        );
    }
}

/// T1-CAT-02: exact keys only, and keys of the wrong shape miss
#[test]
fn test_exact_lookup_only() {
    let catalog = AliasCatalog::global();
    assert_eq!(catalog.lookup(Category::Spacing, RawKey::Integer(5)), None);
    assert_eq!(catalog.lookup(Category::Color, RawKey::Integer(4)), None);
    assert_eq!(catalog.lookup(Category::Spacing, RawKey::Color("#5e5e5e")), None);
    assert_eq!(catalog.lookup(Category::Color, RawKey::Color("#5e5e5e")), Some("gray:60"));
}

/// T1-CAT-03: color keys are folded at construction time
#[test]
fn test_color_keys_folded() {
    let catalog = AliasCatalog::global();
    let key = color_key("rgba(255, 255, 255, 1.0)");
    assert_eq!(key, "rgba(255,255,255,1.0)");
    assert_eq!(catalog.lookup(Category::Color, RawKey::Color(&key)), Some("white:emphasis"));
    assert_eq!(color_key("#EeE1fe"), "#eee1fe");
}

/// T1-CAT-04: special keywords and the no-op z-index entry are not table keys
#[test]
fn test_no_identity_entries() {
    let catalog = AliasCatalog::global();
    assert_eq!(catalog.lookup(Category::Color, RawKey::Color("currentcolor")), None);
    assert!(catalog.color_entries().iter().all(|(_, token)| *token != "currentColor"));
    for category in Category::ALL {
        if let Some(table) = category.numeric_table() {
            let mut keys: Vec<i64> = table.iter().map(|(k, _)| *k).collect();
            let len = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), len, "duplicate keys in {category}");
        }
    }
}

/// T1-CAT-05: property classification, including `size` on `Text`
#[test]
fn test_classification() {
    let catalog = AliasCatalog::global();
    assert_eq!(catalog.classify("padding", None), Some(PropertyKind::Value(Category::Spacing)));
    assert_eq!(catalog.classify("w", None), Some(PropertyKind::Value(Category::Spacing)));
    assert_eq!(catalog.classify("font", None), Some(PropertyKind::Value(Category::FontSize)));
    assert_eq!(catalog.classify("zIndex", None), Some(PropertyKind::Value(Category::ZIndex)));
    assert_eq!(
        catalog.classify("borderStartStartRadius", None),
        Some(PropertyKind::Value(Category::BorderRadius))
    );
    assert_eq!(catalog.classify("bg", None), Some(PropertyKind::Value(Category::Color)));
    assert_eq!(catalog.classify("borderTop", None), Some(PropertyKind::BorderShorthand));
    assert_eq!(catalog.classify("size", Some("Text")), Some(PropertyKind::Value(Category::FontSize)));
    assert_eq!(catalog.classify("size", Some("Flex")), None);
    assert_eq!(catalog.classify("onClick", None), None);

    assert!(catalog.is_border_shorthand("borderLeft"));
    assert!(!catalog.is_border_shorthand("borderColor"));
    assert!(catalog.is_color_property("borderColor"));
    assert_eq!(catalog.category_of("border", None), None);
}

/// T1-CAT-06: breakpoints and the component catalog
#[test]
fn test_breakpoints_and_components() {
    let catalog = AliasCatalog::global();
    for key in ["sm", "md", "lg", "xl", "2xl"] {
        assert!(catalog.is_breakpoint(key));
    }
    assert!(!catalog.is_breakpoint("xs"));
    assert!(catalog.is_catalog_component("Box"));
    assert!(catalog.is_catalog_component("Text"));
    assert!(!catalog.is_catalog_component("CustomComponent"));
}

/// T1-CAT-07: later (dark) entries win in the token → path map
#[test]
fn test_color_style_defaults() {
    let styles = ColorStyleCatalog::new();
    assert_eq!(styles.path_for_token("gray:100"), Some("background.primary"));
    assert_eq!(styles.path_for_token("white:emphasis"), Some("color.emphasis"));
    assert_eq!(styles.path_for_token("gray:20"), Some("background.tertiary"));
    assert_eq!(styles.path_for_token("gray:60"), None);
    assert_eq!(styles.token_at(ColorMode::Light, "background.primary"), Some("white:emphasis"));
    assert_eq!(styles.token_at(ColorMode::Dark, "background.primary"), Some("gray:100"));
}

/// T1-CAT-08: raw values fold before the path lookup
#[test]
fn test_path_for_value_folds() {
    let styles = ColorStyleCatalog::new();
    assert_eq!(styles.path_for_value("#FCE79E"), Some("text.highlight"));
    assert_eq!(styles.path_for_value("rgba(255,255,255,0.12)"), Some("divider"));
    assert_eq!(styles.path_for_value("notacolor"), None);
}

/// T1-CAT-09: overrides replace an existing path or append a new one
#[test]
fn test_color_style_overrides() {
    let config = ColorModeConfig::from_json(&serde_json::json!({
        "colorStyle": {
            "dark": { "background": { "primary": "gray:95" } },
            "light": { "brand": { "accent": "blue:50" } }
        }
    }))
    .unwrap();
    let styles = ColorStyleCatalog::from_config(&config);

    assert_eq!(styles.token_at(ColorMode::Dark, "background.primary"), Some("gray:95"));
    assert_eq!(styles.path_for_token("gray:95"), Some("background.primary"));
    assert_eq!(styles.path_for_token("gray:100"), None);
    assert_eq!(styles.path_for_token("blue:50"), Some("brand.accent"));
    assert!(styles
        .entries(ColorMode::Light)
        .iter()
        .any(|(path, token)| path == "brand.accent" && token == "blue:50"));
}
