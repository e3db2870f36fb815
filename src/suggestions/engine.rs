//! Suggestion Engine
//!
//! Main entry point for room suggestions. Orchestrates analysis, furniture
//! gap-fill (optionally enriched with catalog models), color suggestions,
//! layout tips, and style remarks into one [`SuggestionBundle`].
//!
//! Public API:
//! - RoomSuggester::analyze_current_furniture(items) -> Analysis
//! - RoomSuggester::generate_full_suggestions(items, catalog) -> SuggestionBundle
//! - RoomSuggester::suggest_colors(analysis, furniture_type) -> Result<ColorAdvice>

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use super::color_advisor::advise_color;
use super::layout::generate_layout_suggestions;
use super::types::{ColorAdvice, ColorRole, ColorSuggestion, FurnitureSuggestion, SuggestionBundle};
use crate::analysis::{analyze_room, Analysis, PlacedItem};
use crate::catalog::{
    CatalogLookup, CatalogMatch, CatalogQuery, CatalogTables, Category, ColorPalette, PaletteRole, Style,
};
use crate::error::{CatalogError, Result};

/// Rooms with more items than this get a secondary color.
pub const SECONDARY_COLOR_THRESHOLD: usize = 2;

/// Rooms with more items than this also get a highlight color.
pub const HIGHLIGHT_COLOR_THRESHOLD: usize = 4;

/// Stateless suggestion generator over shared, immutable tables.
#[derive(Debug, Clone, Default)]
pub struct RoomSuggester {
    tables: Arc<CatalogTables>,
}

impl RoomSuggester {
    pub fn new(tables: Arc<CatalogTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &CatalogTables {
        &self.tables
    }

    /// Analyze the furniture currently placed in the room.
    pub fn analyze_current_furniture(&self, items: &[PlacedItem]) -> Analysis {
        analyze_room(self.tables.vocabulary(), items)
    }

    /// Generate the full suggestion bundle using the thread-local RNG.
    pub fn generate_full_suggestions(
        &self,
        items: &[PlacedItem],
        catalog: Option<&dyn CatalogLookup>,
    ) -> SuggestionBundle {
        self.generate_full_suggestions_with_rng(items, catalog, &mut rand::thread_rng())
    }

    /// Generate the full suggestion bundle.
    ///
    /// Catalog failures are contained per category: they are logged and
    /// leave that category without suggested models.
    pub fn generate_full_suggestions_with_rng<R: Rng + ?Sized>(
        &self,
        items: &[PlacedItem],
        catalog: Option<&dyn CatalogLookup>,
        rng: &mut R,
    ) -> SuggestionBundle {
        let analysis = self.analyze_current_furniture(items);

        let mut furniture_suggestions = Vec::new();
        let mut suggested_models = Vec::new();

        for &category in &analysis.missing_essentials {
            let Some(item) = self.tables.vocabulary().items(category).choose(rng) else {
                continue;
            };

            furniture_suggestions.push(FurnitureSuggestion {
                category,
                item: item.clone(),
                reason: format!("Your room would benefit from {}", category),
            });

            match catalog {
                Some(catalog) => suggested_models.extend(fetch_models(catalog, category, item)),
                None => tracing::debug!("No catalog lookup provided, skipping models for {}", category),
            }
        }

        let style = analysis.dominant_style();
        let palette = self.tables.palette(style);
        let color_suggestions = generate_color_suggestions(palette, style, analysis.total_items, rng);

        let layout_suggestions = generate_layout_suggestions(&analysis);
        let style_recommendations = generate_style_recommendations(style);

        tracing::info!(
            "Suggestions summary: furniture={}, catalog_models={}, colors={}, layout={}",
            furniture_suggestions.len(),
            suggested_models.len(),
            color_suggestions.len(),
            layout_suggestions.len(),
        );

        SuggestionBundle {
            furniture_suggestions,
            color_suggestions,
            layout_suggestions,
            style_recommendations,
            analysis,
            suggested_models,
        }
    }

    /// Suggest a color for one furniture type using the thread-local RNG.
    pub fn suggest_colors(&self, analysis: &Analysis, furniture_type: &str) -> Result<ColorAdvice> {
        self.suggest_colors_with_rng(analysis, furniture_type, &mut rand::thread_rng())
    }

    pub fn suggest_colors_with_rng<R: Rng + ?Sized>(
        &self,
        analysis: &Analysis,
        furniture_type: &str,
        rng: &mut R,
    ) -> Result<ColorAdvice> {
        advise_color(&self.tables, analysis, furniture_type, rng)
    }
}

/// Query the catalog for one suggested item. Never fails: errors and
/// malformed records yield no models for the category.
fn fetch_models(catalog: &dyn CatalogLookup, category: Category, item: &str) -> Vec<CatalogMatch> {
    let query = CatalogQuery::for_suggestion(category, item);
    tracing::debug!(?query, "Searching catalog for {} models", category);

    let reason = format!("Recommended {} to complete your design", category);
    let result = catalog.find_models(&query).and_then(|documents| {
        documents
            .iter()
            .take(query.limit)
            .map(|doc| CatalogMatch::from_document(doc, reason.as_str()))
            .collect::<std::result::Result<Vec<_>, CatalogError>>()
    });

    match result {
        Ok(models) => {
            tracing::debug!("Found {} matching models for category: {}", models.len(), category);
            models
        }
        Err(e) => {
            tracing::warn!("Catalog lookup failed for {}: {}", category, e);
            Vec::new()
        }
    }
}

fn pick<R: Rng + ?Sized>(colors: &[String], rng: &mut R) -> String {
    colors.choose(rng).cloned().unwrap_or_default()
}

/// Three base colors, plus secondary and highlight colors for fuller rooms.
fn generate_color_suggestions<R: Rng + ?Sized>(
    palette: &ColorPalette,
    style: Style,
    total_items: usize,
    rng: &mut R,
) -> Vec<ColorSuggestion> {
    let mut suggestions = vec![
        ColorSuggestion {
            color: pick(palette.colors(PaletteRole::Primary), rng),
            role: ColorRole::Primary,
            description: format!("Primary {} color for main furniture pieces", style),
        },
        ColorSuggestion {
            color: pick(palette.colors(PaletteRole::Accent), rng),
            role: ColorRole::Accent,
            description: "Accent color for decorative elements".to_string(),
        },
        ColorSuggestion {
            color: pick(palette.colors(PaletteRole::Neutral), rng),
            role: ColorRole::Neutral,
            description: format!("Neutral {} color for walls and backgrounds", style),
        },
    ];

    if total_items > SECONDARY_COLOR_THRESHOLD {
        suggestions.push(ColorSuggestion {
            color: pick(palette.colors(PaletteRole::Primary), rng),
            role: ColorRole::Secondary,
            description: format!("Secondary color to complement your {} theme", style),
        });
    }

    if total_items > HIGHLIGHT_COLOR_THRESHOLD {
        suggestions.push(ColorSuggestion {
            color: pick(palette.colors(PaletteRole::Accent), rng),
            role: ColorRole::Highlight,
            description: "Highlight color for special decorative pieces".to_string(),
        });
    }

    suggestions
}

fn generate_style_recommendations(style: Style) -> Vec<String> {
    vec![
        format!("Based on your current setup, consider {} style elements", style),
        "Add some plants for a natural touch".to_string(),
        "Consider adding artwork to personalize the space".to_string(),
    ]
}
