//! Runtime configuration from environment variables.
//!
//! - `ROOM_TABLES_PATH`: JSON file replacing the built-in vocabulary/palettes
//! - `ROOM_CATALOG_PATH`: JSON array of catalog documents

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::{CatalogTables, InMemoryCatalog};

pub const TABLES_PATH_VAR: &str = "ROOM_TABLES_PATH";
pub const CATALOG_PATH_VAR: &str = "ROOM_CATALOG_PATH";

#[derive(Debug, Clone, Default)]
pub struct SuggesterConfig {
    pub tables_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
}

impl SuggesterConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |var: &str| lookup(var).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            tables_path: path(TABLES_PATH_VAR),
            catalog_path: path(CATALOG_PATH_VAR),
        }
    }

    /// Built-in tables unless a tables file is configured.
    pub fn load_tables(&self) -> Result<Arc<CatalogTables>> {
        let tables = match &self.tables_path {
            Some(path) => CatalogTables::from_json_file(path)
                .with_context(|| format!("loading catalog tables from {}", path.display()))?,
            None => CatalogTables::default(),
        };
        Ok(Arc::new(tables))
    }

    /// In-memory catalog when a catalog file is configured.
    pub fn load_catalog(&self) -> Result<Option<InMemoryCatalog>> {
        self.catalog_path
            .as_ref()
            .map(|path| {
                InMemoryCatalog::from_json_file(path)
                    .with_context(|| format!("loading catalog from {}", path.display()))
            })
            .transpose()
    }
}
