//! Room Suggester
//!
//! Heuristic interior-design suggestions for a virtual room: furniture gap
//! filling, color palettes, layout tips, and optional catalog model matches.
//!
//! Module layout:
//! - `catalog/`: vocabulary and palette tables, catalog lookup seam
//! - `analysis/`: furniture classification and room analysis
//! - `suggestions/`: suggestion engine, layout rules, color advisor
//! - `swatches/`: named color swatches for a single object
//!
//! Rule evaluation is deterministic; ties between equally valid options are
//! broken with an injectable random source.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod suggestions;
pub mod swatches;

// Re-export commonly used types
pub use analysis::{analyze_room, classify_furniture, Analysis, PlacedItem};
pub use catalog::{
    CatalogLookup, CatalogMatch, CatalogQuery, CatalogTables, Category, ColorPalette, InMemoryCatalog,
    PaletteRole, Style,
};
pub use config::SuggesterConfig;
pub use error::{CatalogError, SuggestionError, TablesError};
pub use suggestions::{
    generate_layout_suggestions, ColorAdvice, ColorRole, ColorSuggestion, FurnitureSuggestion, RoomSuggester,
    SuggestionBundle,
};
pub use swatches::{suggest_object_swatches, Swatch, SwatchSuggestion};
