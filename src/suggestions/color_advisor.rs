//! Color Advisor
//!
//! Proposes a color for one furniture type, using the palette of the room's
//! dominant style.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::ColorAdvice;
use crate::analysis::Analysis;
use crate::catalog::{CatalogTables, PaletteRole};
use crate::error::{Result, SuggestionError};

/// Main seating pieces draw from primary and neutral colors.
pub const SEATING_TYPES: &[&str] = &["sofa", "chair", "armchair"];

/// Tables stay neutral.
pub const TABLE_TYPES: &[&str] = &["coffee_table", "dining_table", "desk"];

/// Number of distinct accent colors offered as complements.
pub const COMPLEMENTARY_COUNT: usize = 2;

/// Advise a color for `furniture_type`.
///
/// Fails with [`SuggestionError::InsufficientPaletteSize`] when the accent
/// role cannot supply two distinct complementary colors.
pub fn advise_color<R: Rng + ?Sized>(
    tables: &CatalogTables,
    analysis: &Analysis,
    furniture_type: &str,
    rng: &mut R,
) -> Result<ColorAdvice> {
    let style = analysis.dominant_style();
    let palette = tables.palette(style);

    let roles: &[PaletteRole] = if SEATING_TYPES.contains(&furniture_type) {
        &[PaletteRole::Primary, PaletteRole::Neutral]
    } else if TABLE_TYPES.contains(&furniture_type) {
        &[PaletteRole::Neutral]
    } else {
        &[PaletteRole::Accent, PaletteRole::Neutral]
    };
    let pool: Vec<&String> = roles.iter().flat_map(|&role| palette.colors(role)).collect();

    let primary_color = pool
        .choose(rng)
        .map(|c| c.to_string())
        .ok_or(SuggestionError::InsufficientPaletteSize {
            style,
            role: PaletteRole::Neutral,
            required: 1,
            available: 0,
        })?;

    let accents = palette.colors(PaletteRole::Accent);
    if accents.len() < COMPLEMENTARY_COUNT {
        return Err(SuggestionError::InsufficientPaletteSize {
            style,
            role: PaletteRole::Accent,
            required: COMPLEMENTARY_COUNT,
            available: accents.len(),
        });
    }
    let complementary_colors: Vec<String> =
        accents.choose_multiple(rng, COMPLEMENTARY_COUNT).cloned().collect();

    Ok(ColorAdvice {
        reasoning: format!(
            "This {} works well for {} in {} style",
            primary_color, furniture_type, style
        ),
        primary_color,
        complementary_colors,
        style,
        confidence: rng.gen_range(0.8..0.95),
    })
}
