//! Catalog Tables
//!
//! Static vocabulary and palette data driving classification and color
//! suggestions. Built-in defaults are embedded below; a JSON file with the
//! same shape can replace them at startup.
//!
//! Tables are immutable once built and are shared between requests behind
//! an `Arc`.

use std::fmt;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::TablesError;

// ============================================================================
// Categories, Styles, Roles
// ============================================================================

/// Furniture category assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Seating,
    Tables,
    Storage,
    Lighting,
    Decor,
    /// No vocabulary item matched
    Other,
}

impl Category {
    /// Vocabulary categories in classification order.
    pub const FURNITURE: [Category; 5] = [
        Category::Seating,
        Category::Tables,
        Category::Storage,
        Category::Lighting,
        Category::Decor,
    ];

    /// Categories tracked for gap detection, in reporting order.
    pub const ESSENTIALS: [Category; 3] = [Category::Seating, Category::Tables, Category::Lighting];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Seating => "seating",
            Category::Tables => "tables",
            Category::Storage => "storage",
            Category::Lighting => "lighting",
            Category::Decor => "decor",
            Category::Other => "other",
        }
    }

    /// Category token used by catalog records, e.g. "furniture-seating".
    pub fn catalog_search_token(&self) -> String {
        format!("furniture-{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aesthetic label inferred from item names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Modern,
    Traditional,
    Minimalist,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Modern => "modern",
            Style::Traditional => "traditional",
            Style::Minimalist => "minimalist",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role a color plays within a style palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteRole {
    Primary,
    Neutral,
    Accent,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 3] = [PaletteRole::Primary, PaletteRole::Neutral, PaletteRole::Accent];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteRole::Primary => "primary",
            PaletteRole::Neutral => "neutral",
            PaletteRole::Accent => "accent",
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable form of a canonical item identifier ("coffee_table" -> "coffee table").
pub fn display_form(item: &str) -> String {
    item.replace('_', " ")
}

// ============================================================================
// EMBEDDED DEFAULT TABLES
// ============================================================================

static DEFAULT_VOCABULARY: &[(Category, &[&str])] = &[
    (Category::Seating, &["sofa", "chair", "armchair", "bench", "ottoman"]),
    (Category::Tables, &["coffee_table", "dining_table", "side_table", "desk"]),
    (Category::Storage, &["bookshelf", "cabinet", "dresser", "wardrobe"]),
    (Category::Lighting, &["floor_lamp", "table_lamp", "ceiling_light", "pendant_light"]),
    (Category::Decor, &["plant", "artwork", "mirror", "rug"]),
];

struct PaletteSpec {
    style: Style,
    primary: &'static [&'static str],
    neutral: &'static [&'static str],
    accent: &'static [&'static str],
}

static DEFAULT_PALETTES: &[PaletteSpec] = &[
    PaletteSpec {
        style: Style::Modern,
        primary: &["#2563EB", "#7C3AED", "#059669", "#DC2626"],
        neutral: &["#374151", "#6B7280", "#9CA3AF", "#D1D5DB"],
        accent: &["#F59E0B", "#EF4444", "#10B981", "#8B5CF6"],
    },
    PaletteSpec {
        style: Style::Traditional,
        primary: &["#92400E", "#7C2D12", "#065F46", "#1E40AF"],
        neutral: &["#78716C", "#A8A29E", "#D6D3D1", "#F5F5F4"],
        accent: &["#DC2626", "#059669", "#7C3AED", "#EA580C"],
    },
    PaletteSpec {
        style: Style::Minimalist,
        primary: &["#FFFFFF", "#F8FAFC", "#E2E8F0", "#CBD5E1"],
        neutral: &["#64748B", "#475569", "#334155", "#1E293B"],
        accent: &["#0F172A", "#EF4444", "#3B82F6", "#10B981"],
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ============================================================================
// Vocabulary
// ============================================================================

/// Category -> ordered canonical item identifiers.
///
/// Iteration always follows `Category::FURNITURE` order, whatever order the
/// source JSON used. Entries for `other` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryVocabulary {
    items: FxHashMap<Category, Vec<String>>,
}

impl CategoryVocabulary {
    pub fn new(items: FxHashMap<Category, Vec<String>>) -> Self {
        Self { items }
    }

    /// Items for a category in vocabulary order (empty if none).
    pub fn items(&self, category: Category) -> &[String] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories with their items, in classification order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::FURNITURE.iter().map(move |&c| (c, self.items(c)))
    }
}

impl Default for CategoryVocabulary {
    fn default() -> Self {
        let items = DEFAULT_VOCABULARY
            .iter()
            .map(|(category, items)| (*category, owned(items)))
            .collect();
        Self { items }
    }
}

// ============================================================================
// Palettes
// ============================================================================

/// Role -> ordered hex colors for one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    primary: Vec<String>,
    neutral: Vec<String>,
    accent: Vec<String>,
}

impl ColorPalette {
    pub fn new(primary: Vec<String>, neutral: Vec<String>, accent: Vec<String>) -> Self {
        Self { primary, neutral, accent }
    }

    pub fn colors(&self, role: PaletteRole) -> &[String] {
        match role {
            PaletteRole::Primary => &self.primary,
            PaletteRole::Neutral => &self.neutral,
            PaletteRole::Accent => &self.accent,
        }
    }
}

fn default_palettes() -> FxHashMap<Style, ColorPalette> {
    DEFAULT_PALETTES
        .iter()
        .map(|spec| {
            (
                spec.style,
                ColorPalette::new(owned(spec.primary), owned(spec.neutral), owned(spec.accent)),
            )
        })
        .collect()
}

// ============================================================================
// Catalog Tables
// ============================================================================

/// On-disk shape of a tables override file. Omitted sections keep defaults.
#[derive(Debug, Deserialize)]
struct TablesFile {
    #[serde(default)]
    vocabulary: CategoryVocabulary,
    #[serde(default = "default_palettes")]
    palettes: FxHashMap<Style, ColorPalette>,
}

/// Vocabulary and palettes, validated once and read-only afterwards.
///
/// Invariants: every role of every palette is non-empty, and a `modern`
/// palette exists.
#[derive(Debug, Clone)]
pub struct CatalogTables {
    vocabulary: CategoryVocabulary,
    palettes: FxHashMap<Style, ColorPalette>,
}

impl CatalogTables {
    pub fn new(
        vocabulary: CategoryVocabulary,
        palettes: FxHashMap<Style, ColorPalette>,
    ) -> Result<Self, TablesError> {
        if !palettes.contains_key(&Style::Modern) {
            return Err(TablesError::MissingFallbackPalette);
        }
        for (style, palette) in &palettes {
            for role in PaletteRole::ALL {
                if palette.colors(role).is_empty() {
                    return Err(TablesError::EmptyRole { style: *style, role });
                }
            }
        }
        // A blank identifier would be a substring of every item name
        for (category, items) in vocabulary.iter() {
            if items.iter().any(|item| item.trim().is_empty()) {
                return Err(TablesError::EmptyItem { category });
            }
        }
        Ok(Self { vocabulary, palettes })
    }

    pub fn from_json_str(json: &str) -> Result<Self, TablesError> {
        let file: TablesFile = serde_json::from_str(json)?;
        Self::new(file.vocabulary, file.palettes)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    /// Palette for a style, falling back to `modern` when the style has none.
    pub fn palette(&self, style: Style) -> &ColorPalette {
        self.palettes
            .get(&style)
            .unwrap_or_else(|| &self.palettes[&Style::Modern])
    }
}

impl Default for CatalogTables {
    fn default() -> Self {
        Self {
            vocabulary: CategoryVocabulary::default(),
            palettes: default_palettes(),
        }
    }
}
