//! Value normalizer tests: unit conversion, color folding, border splitting.
//! T2-NRM-01 through T2-NRM-08, plus property tests.

use proptest::prelude::*;
use tonic_lint_analysis::catalog::{AliasCatalog, Category};
use tonic_lint_analysis::normalize::{
    is_special_color, normalize_color, resolve, split_border_shorthand, to_numeric, to_pixels,
    RawValue,
};

/// T2-NRM-01: px, rem and bare numbers
#[test]
fn test_to_pixels() {
    assert_eq!(to_pixels(RawValue::Number(12.0)), Some(12));
    assert_eq!(to_pixels(RawValue::Str("4px")), Some(4));
    assert_eq!(to_pixels(RawValue::Str("16rem")), Some(256));
    assert_eq!(to_pixels(RawValue::Str(".75rem")), Some(12));
    assert_eq!(to_pixels(RawValue::Str("1.25rem")), Some(20));
}

/// T2-NRM-02: anything ambiguous fails closed
#[test]
fn test_to_pixels_fails_closed() {
    for raw in ["4", "4x", "0 4px", "px", "rem", " 4px", "4 px", "4.5px", "1.1rem", "4em", "", "NaNpx", "infpx"] {
        assert_eq!(to_pixels(RawValue::Str(raw)), None, "{raw:?}");
    }
    assert_eq!(to_pixels(RawValue::Number(4.5)), None);
    assert_eq!(to_pixels(RawValue::Number(f64::INFINITY)), None);
}

/// T2-NRM-03: numeric coercion for weights and z-indices
#[test]
fn test_to_numeric() {
    assert_eq!(to_numeric(RawValue::Str("200")), Some(200));
    assert_eq!(to_numeric(RawValue::Number(1000.0)), Some(1000));
    assert_eq!(to_numeric(RawValue::Str("-1")), Some(-1));
    assert_eq!(to_numeric(RawValue::Str("bold")), None);
    assert_eq!(to_numeric(RawValue::Str("200px")), None);
    assert_eq!(to_numeric(RawValue::Str("")), None);
}

/// T2-NRM-04: color folding is case- and whitespace-insensitive
#[test]
fn test_color_folding() {
    let catalog = AliasCatalog::global();
    let stripped = "# eee1fe".replace(' ', "");
    for raw in ["#EeE1fe", "#eee1fe", stripped.as_str(), "# EEE1FE"] {
        assert_eq!(
            resolve(catalog, Category::Color, RawValue::Str(raw)),
            Some("purple:10"),
            "{raw:?}"
        );
    }
    assert_eq!(
        resolve(catalog, Category::Color, RawValue::Str("rgba(255,255,255,1.0)")),
        Some("white:emphasis")
    );
}

/// T2-NRM-05: special keywords and the empty string never match
#[test]
fn test_special_colors() {
    for raw in ["unset", "inherit", "initial", "transparent", "currentColor", "CURRENTCOLOR", ""] {
        assert!(is_special_color(raw), "{raw:?}");
        assert_eq!(normalize_color(RawValue::Str(raw)), None);
    }
    assert_eq!(normalize_color(RawValue::Number(5.0)), None);
    assert_eq!(normalize_color(RawValue::Str("Red")), Some("red".to_string()));
}

/// T2-NRM-06: scalar resolution per category
#[test]
fn test_resolve_scenarios() {
    let catalog = AliasCatalog::global();
    assert_eq!(resolve(catalog, Category::Spacing, RawValue::Str("4px")), Some("1x"));
    assert_eq!(resolve(catalog, Category::ZIndex, RawValue::Str("1700")), Some("toast"));
    assert_eq!(resolve(catalog, Category::ZIndex, RawValue::Number(1000.0)), Some("dropdown"));
    assert_eq!(resolve(catalog, Category::FontWeight, RawValue::Str("200")), Some("extralight"));
    assert_eq!(resolve(catalog, Category::LineHeight, RawValue::Str("1.25rem")), Some("sm"));
    assert_eq!(resolve(catalog, Category::BorderRadius, RawValue::Str(".1875rem")), Some("sm"));
    assert_eq!(resolve(catalog, Category::Spacing, RawValue::Str("24x")), None);
}

/// T2-NRM-07: border shorthand split
#[test]
fn test_split_border_shorthand() {
    let catalog = AliasCatalog::global();
    let split = split_border_shorthand(catalog, "0 solid #5e5e5e").unwrap();
    assert_eq!(split.remainder, "0 solid");
    assert_eq!(split.color_token, "gray:60");

    let split = split_border_shorthand(catalog, "1px dashed #005242").unwrap();
    assert_eq!(split.remainder, "1px dashed");
    assert_eq!(split.color_token, "teal:90");
}

/// T2-NRM-08: anything but three parts with a known color is left alone
#[test]
fn test_split_border_rejects() {
    let catalog = AliasCatalog::global();
    for raw in [
        "0",
        "0 solid",
        "0 solid #5e5e5e extra",
        "0  solid #5e5e5e",
        "0 solid #123456",
        "0 solid rgba(255, 255, 255, 1.0)",
        "none",
    ] {
        assert!(split_border_shorthand(catalog, raw).is_none(), "{raw:?}");
    }
}

/// Every numeric category that converts through pixels.
const PIXEL_CATEGORIES: [Category; 4] = [
    Category::Spacing,
    Category::LineHeight,
    Category::FontSize,
    Category::BorderRadius,
];

fn pixel_table_entry() -> impl Strategy<Value = (Category, i64, &'static str)> {
    let entries: Vec<(Category, i64, &'static str)> = PIXEL_CATEGORIES
        .iter()
        .flat_map(|c| {
            c.numeric_table()
                .unwrap_or(&[])
                .iter()
                .map(move |(raw, token)| (*c, *raw, *token))
        })
        .collect();
    proptest::sample::select(entries)
}

fn any_token() -> impl Strategy<Value = &'static str> {
    let catalog = AliasCatalog::global();
    let mut tokens: Vec<&'static str> = Category::ALL
        .iter()
        .flat_map(|c| c.numeric_table().unwrap_or(&[]).iter().map(|(_, t)| *t))
        .collect();
    tokens.extend(catalog.color_entries().iter().map(|(_, t)| *t));
    proptest::sample::select(tokens)
}

proptest! {
    /// v, "<v>px" and "<v/16>rem" resolve to the same token.
    #[test]
    fn pixel_forms_agree((category, raw, token) in pixel_table_entry()) {
        let catalog = AliasCatalog::global();
        let px = format!("{raw}px");
        let rem = format!("{}rem", raw as f64 / 16.0);
        prop_assert_eq!(resolve(catalog, category, RawValue::Number(raw as f64)), Some(token));
        prop_assert_eq!(resolve(catalog, category, RawValue::Str(&px)), Some(token));
        prop_assert_eq!(resolve(catalog, category, RawValue::Str(&rem)), Some(token));
    }

    /// A token is never itself a match in any category.
    #[test]
    fn tokens_are_fixed_points(token in any_token()) {
        let catalog = AliasCatalog::global();
        for category in Category::ALL {
            prop_assert_eq!(resolve(catalog, category, RawValue::Str(token)), None);
        }
    }

    /// Normalization never panics on arbitrary input.
    #[test]
    fn arbitrary_strings_never_panic(s in ".{0,40}") {
        let catalog = AliasCatalog::global();
        for category in Category::ALL {
            let _ = resolve(catalog, category, RawValue::Str(&s));
        }
        let _ = split_border_shorthand(catalog, &s);
    }
}
