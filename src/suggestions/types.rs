use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::catalog::{CatalogMatch, Category, Style};

/// Complete suggestion output for a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionBundle {
    pub furniture_suggestions: Vec<FurnitureSuggestion>,
    pub color_suggestions: Vec<ColorSuggestion>,
    pub layout_suggestions: Vec<String>,
    pub style_recommendations: Vec<String>,
    pub analysis: Analysis,
    /// Catalog models matching the furniture suggestions (may be empty)
    pub suggested_models: Vec<CatalogMatch>,
}

/// Gap-fill suggestion for a missing essential category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnitureSuggestion {
    pub category: Category,
    /// Canonical identifier, e.g. "coffee_table"
    pub item: String,
    pub reason: String,
}

/// Role of a suggested color within the room scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Accent,
    Neutral,
    Secondary,
    Highlight,
}

/// Single color suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSuggestion {
    /// Hex color, e.g. "#2563EB"
    pub color: String,
    #[serde(rename = "type")]
    pub role: ColorRole,
    pub description: String,
}

/// Color advice for one furniture type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorAdvice {
    pub primary_color: String,
    pub complementary_colors: Vec<String>,
    pub style: Style,
    pub reasoning: String,
    /// Presentation signal in [0.8, 0.95); not a calibrated probability
    pub confidence: f64,
}
