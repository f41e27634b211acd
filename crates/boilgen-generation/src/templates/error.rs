//! Catalog error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a template catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog file at the resolved path
    #[error("No templates found at {}", .path.display())]
    NotFound {
        /// Path that was tried
        path: PathBuf,
    },

    /// Catalog file exists but is not valid JSON of the expected shape
    #[error("Invalid JSON in templates at {}: {source}", .path.display())]
    Malformed {
        /// Catalog path
        path: PathBuf,
        /// Parse error
        source: serde_json::Error,
    },

    /// Catalog file exists but could not be read
    #[error("Failed to read templates at {}: {source}", .path.display())]
    Io {
        /// Catalog path
        path: PathBuf,
        /// Original error
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Whether this error means the catalog is simply absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
