//! Catalog data: the static vocabulary/palette tables and the lookup seam to
//! the external furniture catalog.

pub mod lookup;
pub mod tables;

pub use lookup::{CatalogLookup, CatalogMatch, CatalogQuery, InMemoryCatalog, MODEL_LOOKUP_LIMIT};
pub use tables::{
    display_form, CatalogTables, Category, CategoryVocabulary, ColorPalette, PaletteRole, Style,
};
