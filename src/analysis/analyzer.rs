//! Room Analyzer
//!
//! Builds an [`Analysis`] from the items currently placed in a room:
//! per-category counts, missing essentials, and inferred style hints.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use smallvec::{smallvec, SmallVec};

use super::classify::classify_furniture;
use crate::catalog::tables::{Category, CategoryVocabulary, Style};

/// Item placed in the room by the client.
///
/// Only `name` is interpreted; all other fields pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    #[serde(default, deserialize_with = "name_or_empty")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlacedItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

fn name_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Structured view of a room's furniture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub total_items: usize,
    /// Count per category; every item is counted, `other` included.
    pub categories: FxHashMap<Category, usize>,
    /// Never empty. The first hint is the dominant style.
    pub style_hints: SmallVec<[Style; 3]>,
    /// Subset of seating, tables, lighting, in that order.
    pub missing_essentials: Vec<Category>,
    /// Reserved; always empty.
    pub color_analysis: Vec<Value>,
}

impl Analysis {
    /// Items counted in a category (zero when absent).
    pub fn count(&self, category: Category) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    pub fn dominant_style(&self) -> Style {
        self.style_hints.first().copied().unwrap_or(Style::Modern)
    }
}

/// Analyze the placed items against the category vocabulary.
pub fn analyze_room(vocabulary: &CategoryVocabulary, items: &[PlacedItem]) -> Analysis {
    let mut categories: FxHashMap<Category, usize> = FxHashMap::default();
    for item in items {
        let category = classify_furniture(vocabulary, &item.name);
        *categories.entry(category).or_insert(0) += 1;
    }

    let missing_essentials = identify_missing_essentials(&categories);

    let names: Vec<String> = items.iter().map(|item| item.name.to_lowercase()).collect();
    let style_hints = infer_style_hints(&names);

    Analysis {
        total_items: items.len(),
        categories,
        style_hints,
        missing_essentials,
        color_analysis: Vec::new(),
    }
}

fn identify_missing_essentials(categories: &FxHashMap<Category, usize>) -> Vec<Category> {
    Category::ESSENTIALS
        .into_iter()
        .filter(|c| categories.get(c).copied().unwrap_or(0) == 0)
        .collect()
}

/// Keyword heuristics over lower-cased names. Checks are independent and
/// ordered modern, traditional, minimalist; defaults to `[modern]`.
fn infer_style_hints(names: &[String]) -> SmallVec<[Style; 3]> {
    let mut hints = SmallVec::new();
    if mentions(names, &["modern"]) {
        hints.push(Style::Modern);
    }
    if mentions(names, &["traditional", "classic"]) {
        hints.push(Style::Traditional);
    }
    if mentions(names, &["minimal"]) {
        hints.push(Style::Minimalist);
    }

    if hints.is_empty() {
        smallvec![Style::Modern]
    } else {
        hints
    }
}

fn mentions(names: &[String], keywords: &[&str]) -> bool {
    names.iter().any(|name| keywords.iter().any(|k| name.contains(k)))
}
