//! Layout rules evaluated against a room analysis.

use crate::analysis::Analysis;
use crate::catalog::Category;

pub const COFFEE_TABLE_TIP: &str = "Add a coffee table to complement your seating area.";
pub const LIGHTING_TIP: &str = "Add lighting to create ambiance and functionality.";
pub const MORE_FURNITURE_TIP: &str = "Consider adding more furniture to create a complete room.";

/// Rooms with fewer items than this get the "more furniture" tip.
pub const SPARSE_ROOM_THRESHOLD: usize = 3;

/// Generate layout tips. Rules fire independently, in fixed order:
/// 1. seating without tables
/// 2. no lighting
/// 3. fewer than three items
pub fn generate_layout_suggestions(analysis: &Analysis) -> Vec<String> {
    let mut suggestions = Vec::new();

    if analysis.count(Category::Seating) > 0 && analysis.count(Category::Tables) == 0 {
        suggestions.push(COFFEE_TABLE_TIP.to_string());
    }

    if analysis.count(Category::Lighting) == 0 {
        suggestions.push(LIGHTING_TIP.to_string());
    }

    if analysis.total_items < SPARSE_ROOM_THRESHOLD {
        suggestions.push(MORE_FURNITURE_TIP.to_string());
    }

    suggestions
}
