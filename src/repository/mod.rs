//! Repository layer for catalog data access

pub mod catalog;

use crate::config::CatalogConfig;
use crate::error::AppResult;

/// Main repository struct holding the loaded catalog
#[derive(Clone)]
pub struct Repository {
    pub catalog: catalog::CatalogRepository,
}

impl Repository {
    /// Create a new repository around an already-built catalog
    pub fn new(catalog: catalog::CatalogRepository) -> Self {
        Self { catalog }
    }

    /// Load the catalog described by the configuration
    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        Ok(Self {
            catalog: catalog::CatalogRepository::from_config(config)?,
        })
    }
}
