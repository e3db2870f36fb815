//! Furniture classification by name.
//!
//! Substring matching against the category vocabulary in fixed order:
//! categories `seating, tables, storage, lighting, decor`, then items in
//! vocabulary order. The first item whose human-readable form contains the
//! name, or is contained by it, decides the category.

use crate::catalog::tables::{display_form, Category, CategoryVocabulary};

/// Classify a raw item name into a furniture category.
///
/// Matching is case-insensitive and bidirectional, so short names can match
/// longer items ("lamp" matches "floor lamp"). Blank names are `Other`.
pub fn classify_furniture(vocabulary: &CategoryVocabulary, item_name: &str) -> Category {
    let name = item_name.to_lowercase();
    if name.trim().is_empty() {
        return Category::Other;
    }

    for (category, items) in vocabulary.iter() {
        for item in items {
            let readable = display_form(item).to_lowercase();
            if name.contains(&readable) || readable.contains(&name) {
                return category;
            }
        }
    }

    Category::Other
}
