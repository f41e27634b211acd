//! Template catalog loading
//!
//! Reads a JSON catalog (`entity type -> template -> path -> lines`) from disk.
//! Parsing is all-or-nothing and the catalog is read fresh on every call, since
//! users edit it by hand between runs.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::models::Catalog;
use crate::templates::error::CatalogError;

/// Loads template catalogs
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog at `path`
    ///
    /// # Returns
    /// * `CatalogError::NotFound` if nothing exists at `path`
    /// * `CatalogError::Malformed` if the file is not a well-formed catalog
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        debug!(path = %path.display(), "Loading template catalog");

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CatalogError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let catalog: Catalog =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            path = %path.display(),
            entity_types = catalog.entity_types.len(),
            "Loaded template catalog"
        );

        Ok(catalog)
    }

    /// Parse a catalog from an in-memory document
    pub fn parse(content: &str) -> Result<Catalog, serde_json::Error> {
        serde_json::from_str(content)
    }
}
