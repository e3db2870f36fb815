//! Error types for room analysis and suggestion generation.

use thiserror::Error;

use crate::catalog::tables::{Category, PaletteRole, Style};

/// Errors surfaced to callers of the suggestion entry points.
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// A palette role holds fewer colors than a sampling operation needs
    #[error("{style} palette has {available} {role} colors, need at least {required}")]
    InsufficientPaletteSize {
        style: Style,
        role: PaletteRole,
        required: usize,
        available: usize,
    },
}

/// Malformed catalog tables, detected when the tables are built or loaded.
#[derive(Debug, Error)]
pub enum TablesError {
    #[error("{style} palette has no {role} colors")]
    EmptyRole { style: Style, role: PaletteRole },

    #[error("{category} vocabulary has an empty item identifier")]
    EmptyItem { category: Category },

    #[error("palette table has no modern palette to fall back on")]
    MissingFallbackPalette,

    #[error("failed to parse tables: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read tables: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the external catalog collaborator.
///
/// The engine contains these per category; they never abort generation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog lookup failed: {0}")]
    Lookup(String),

    #[error("malformed catalog record: {reason}")]
    MalformedRecord { reason: String },

    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SuggestionError>;
