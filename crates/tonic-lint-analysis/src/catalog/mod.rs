//! Alias catalog: raw value → token tables, property classification and
//! the color-style path table.

pub mod color_style;
pub mod tables;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tonic_lint_core::types::collections::{FxHashMap, FxHashSet};

pub use color_style::{ColorMode, ColorStyleCatalog};

/// Semantic kind of a style value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Spacing,
    LineHeight,
    FontWeight,
    FontSize,
    ZIndex,
    BorderRadius,
    Color,
}

/// How a raw literal is turned into a table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Number, `"<n>px"` or `"<n>rem"` → integer pixels.
    Pixels,
    /// Number or numeric string → integer.
    Numeric,
    /// Case- and whitespace-folded color string.
    Color,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Spacing,
        Category::LineHeight,
        Category::FontWeight,
        Category::FontSize,
        Category::ZIndex,
        Category::BorderRadius,
        Category::Color,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Spacing => "spacing",
            Category::LineHeight => "line-height",
            Category::FontWeight => "font-weight",
            Category::FontSize => "font-size",
            Category::ZIndex => "z-index",
            Category::BorderRadius => "border-radius",
            Category::Color => "color",
        }
    }

    /// Diagnostic message prefix.
    pub fn message(&self) -> &'static str {
        match self {
            Category::Spacing => "Spacing shorthand",
            Category::LineHeight => "Line-height shorthand",
            Category::FontWeight => "Font-weight shorthand",
            Category::FontSize => "Font-size shorthand",
            Category::ZIndex => "Z-index shorthand",
            Category::BorderRadius => "Border-radius shorthand",
            Category::Color => "Color shorthand",
        }
    }

    pub fn conversion(&self) -> Conversion {
        match self {
            Category::Spacing | Category::LineHeight | Category::FontSize | Category::BorderRadius => {
                Conversion::Pixels
            }
            Category::FontWeight | Category::ZIndex => Conversion::Numeric,
            Category::Color => Conversion::Color,
        }
    }

    /// The static table of a numeric category. `None` for colors.
    pub fn numeric_table(&self) -> Option<&'static [(i64, &'static str)]> {
        match self {
            Category::Spacing => Some(tables::SPACING_VALUES),
            Category::LineHeight => Some(tables::LINE_HEIGHT_VALUES),
            Category::FontWeight => Some(tables::FONT_WEIGHT_VALUES),
            Category::FontSize => Some(tables::FONT_SIZE_VALUES),
            Category::ZIndex => Some(tables::Z_INDEX_VALUES),
            Category::BorderRadius => Some(tables::RADII_VALUES),
            Category::Color => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKey<'a> {
    Integer(i64),
    /// Already folded with [`color_key`].
    Color(&'a str),
}

/// What a property name means to the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Value(Category),
    /// A `border*` shorthand whose color part can be split off.
    BorderShorthand,
}

/// Immutable lookup tables, built once.
#[derive(Debug)]
pub struct AliasCatalog {
    numeric: FxHashMap<(Category, i64), &'static str>,
    colors: FxHashMap<String, &'static str>,
    properties: FxHashMap<&'static str, PropertyKind>,
    breakpoints: FxHashSet<&'static str>,
    components: FxHashSet<&'static str>,
}

static GLOBAL: LazyLock<AliasCatalog> = LazyLock::new(AliasCatalog::new);

impl AliasCatalog {
    pub fn new() -> Self {
        let mut numeric = FxHashMap::default();
        for category in Category::ALL {
            for (raw, token) in category.numeric_table().unwrap_or(&[]) {
                numeric.insert((category, *raw), *token);
            }
        }

        let colors = tables::COLOR_ALIASES
            .iter()
            .map(|(raw, token)| (color_key(raw), *token))
            .collect();

        let mut properties = FxHashMap::default();
        let classified: [(&[&'static str], PropertyKind); 9] = [
            (tables::SIZING_PROPS, PropertyKind::Value(Category::Spacing)),
            (tables::SPACING_PROPS, PropertyKind::Value(Category::Spacing)),
            (tables::LINE_HEIGHT_PROPS, PropertyKind::Value(Category::LineHeight)),
            (tables::FONT_WEIGHT_PROPS, PropertyKind::Value(Category::FontWeight)),
            (tables::FONT_SIZE_PROPS, PropertyKind::Value(Category::FontSize)),
            (tables::Z_INDEX_PROPS, PropertyKind::Value(Category::ZIndex)),
            (tables::RADII_PROPS, PropertyKind::Value(Category::BorderRadius)),
            (tables::COLOR_PROPS, PropertyKind::Value(Category::Color)),
            (tables::BORDER_PROPS, PropertyKind::BorderShorthand),
        ];
        for (names, kind) in classified {
            for name in names {
                properties.insert(*name, kind);
            }
        }

        Self {
            numeric,
            colors,
            properties,
            breakpoints: tables::BREAKPOINTS.iter().copied().collect(),
            components: tables::COMPONENT_NAMES.iter().copied().collect(),
        }
    }

    /// The shared default catalog.
    pub fn global() -> &'static AliasCatalog {
        &GLOBAL
    }

    /// Exact-key lookup. A key of the wrong shape for `category` is a miss.
    pub fn lookup(&self, category: Category, key: RawKey<'_>) -> Option<&'static str> {
        match (category, key) {
            (Category::Color, RawKey::Color(k)) => self.colors.get(k).copied(),
            (Category::Color, RawKey::Integer(_)) | (_, RawKey::Color(_)) => None,
            (c, RawKey::Integer(n)) => self.numeric.get(&(c, n)).copied(),
        }
    }

    /// Classify `prop`. `element` is the leading name of the element the
    /// property sits on; `size` means font size on `Text` only.
    pub fn classify(&self, prop: &str, element: Option<&str>) -> Option<PropertyKind> {
        if prop == "size" && element == Some("Text") {
            return Some(PropertyKind::Value(Category::FontSize));
        }
        self.properties.get(prop).copied()
    }

    pub fn category_of(&self, prop: &str, element: Option<&str>) -> Option<Category> {
        match self.classify(prop, element)? {
            PropertyKind::Value(c) => Some(c),
            PropertyKind::BorderShorthand => None,
        }
    }

    pub fn is_border_shorthand(&self, prop: &str) -> bool {
        matches!(self.properties.get(prop), Some(PropertyKind::BorderShorthand))
    }

    pub fn is_color_property(&self, prop: &str) -> bool {
        matches!(self.properties.get(prop), Some(PropertyKind::Value(Category::Color)))
    }

    pub fn is_breakpoint(&self, key: &str) -> bool {
        self.breakpoints.contains(key)
    }

    pub fn is_catalog_component(&self, name: &str) -> bool {
        self.components.contains(name)
    }

    pub fn color_entries(&self) -> &'static [(&'static str, &'static str)] {
        tables::COLOR_ALIASES
    }
}

impl Default for AliasCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold a color string for lookup: lowercase, all whitespace removed.
pub fn color_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
