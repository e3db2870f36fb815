//! Catalog Lookup
//!
//! Seam to the external furniture catalog. The engine builds a
//! [`CatalogQuery`] for every suggested item, hands it to a [`CatalogLookup`]
//! implementation, and materializes the raw documents it returns into
//! [`CatalogMatch`] values.
//!
//! Document fields read: `_id` (or `id`), `name`, `subcategory`, `category`,
//! `tags`, `thumbnailUrl`, `fileUrl`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tables::{display_form, Category};
use crate::error::CatalogError;

/// Maximum catalog models requested per suggested category.
pub const MODEL_LOOKUP_LIMIT: usize = 3;

/// Structured filter passed to the catalog collaborator.
///
/// A document matches when any of these hold:
/// - `name` or `subcategory` contains `item_pattern` (case-insensitive)
/// - `category` contains `category_pattern` (case-insensitive)
/// - `tags` contains one of `tags` exactly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogQuery {
    pub item_pattern: String,
    pub category_pattern: String,
    pub tags: Vec<String>,
    pub limit: usize,
}

impl CatalogQuery {
    /// Query for models fitting a suggested item of a missing category.
    pub fn for_suggestion(category: Category, item: &str) -> Self {
        let item_pattern = display_form(item);
        Self {
            tags: vec![item_pattern.clone(), category.as_str().to_string()],
            item_pattern,
            category_pattern: category.catalog_search_token(),
            limit: MODEL_LOOKUP_LIMIT,
        }
    }

    /// Evaluate the filter against one raw catalog document.
    pub fn matches(&self, document: &Value) -> bool {
        field_contains(document, "name", &self.item_pattern)
            || field_contains(document, "category", &self.category_pattern)
            || field_contains(document, "subcategory", &self.item_pattern)
            || self.tags.iter().any(|tag| has_tag(document, tag))
    }
}

fn field_contains(document: &Value, field: &str, pattern: &str) -> bool {
    document
        .get(field)
        .and_then(Value::as_str)
        .map_or(false, |value| value.to_lowercase().contains(&pattern.to_lowercase()))
}

// `tags` may be an array or a single string
fn has_tag(document: &Value, tag: &str) -> bool {
    match document.get("tags") {
        Some(Value::Array(tags)) => tags.iter().any(|t| t.as_str() == Some(tag)),
        Some(Value::String(t)) => t == tag,
        _ => false,
    }
}

/// External catalog collaborator.
///
/// Implementations return at most `query.limit` raw documents. Returned
/// errors are contained by the suggestion engine and never abort
/// generation. Panics are not caught and propagate to the caller.
pub trait CatalogLookup: Send + Sync {
    fn find_models(&self, query: &CatalogQuery) -> Result<Vec<Value>, CatalogError>;
}

impl<F> CatalogLookup for F
where
    F: Fn(&CatalogQuery) -> Result<Vec<Value>, CatalogError> + Send + Sync,
{
    fn find_models(&self, query: &CatalogQuery) -> Result<Vec<Value>, CatalogError> {
        self(query)
    }
}

/// Catalog model recommended alongside a furniture suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMatch {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub thumbnail_url: String,
    pub file_url: String,
    pub reason: String,
}

impl CatalogMatch {
    /// Materialize a raw document. The identifier is required; descriptive
    /// fields default to empty strings.
    pub fn from_document(document: &Value, reason: impl Into<String>) -> Result<Self, CatalogError> {
        if !document.is_object() {
            return Err(CatalogError::MalformedRecord {
                reason: "record is not an object".to_string(),
            });
        }

        let id = document
            .get("_id")
            .or_else(|| document.get("id"))
            .and_then(record_id)
            .ok_or_else(|| CatalogError::MalformedRecord {
                reason: "missing or invalid identifier".to_string(),
            })?;

        let text = |field: &str| {
            document
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Ok(Self {
            id,
            name: text("name"),
            category: text("category"),
            thumbnail_url: text("thumbnailUrl"),
            file_url: text("fileUrl"),
            reason: reason.into(),
        })
    }
}

/// Accepts string ids, numeric ids, and extended-JSON `{"$oid": "..."}`.
fn record_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("$oid")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

// ============================================================================
// In-memory catalog
// ============================================================================

/// Catalog held in memory, evaluated with [`CatalogQuery::matches`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    documents: Vec<Value>,
}

impl InMemoryCatalog {
    pub fn new(documents: Vec<Value>) -> Self {
        Self { documents }
    }

    /// Load from a JSON array of documents.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let documents: Vec<Value> = serde_json::from_str(json)?;
        Ok(Self::new(documents))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn find_models(&self, query: &CatalogQuery) -> Result<Vec<Value>, CatalogError> {
        Ok(self
            .documents
            .iter()
            .filter(|doc| query.matches(doc))
            .take(query.limit)
            .cloned()
            .collect())
    }
}
