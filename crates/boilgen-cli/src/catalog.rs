// Catalog loading with first-use seeding

use std::path::{Path, PathBuf};

use boilgen_config::PathResolver;
use boilgen_generation::{Catalog, CatalogLoader, DefaultCatalog};
use tracing::info;

use crate::error::{CliError, CliResult};

/// Warning shown after a missing catalog was seeded
pub const SEEDED_MESSAGE: &str =
    "No templates found. A default template file has been created in .boilgen.";

/// Result of looking up the catalog
#[derive(Debug)]
pub enum CatalogLookup {
    /// Catalog parsed successfully
    Loaded(Catalog),
    /// No catalog existed; the default one was written here
    Seeded(PathBuf),
}

/// Load the catalog at `path`
///
/// A missing catalog inside a `.boilgen` directory is replaced by the default
/// catalog; anywhere else it is an error.
pub fn load_or_seed(path: &Path) -> CliResult<CatalogLookup> {
    match CatalogLoader::load(path) {
        Ok(catalog) => Ok(CatalogLookup::Loaded(catalog)),
        Err(e) if e.is_not_found() && PathResolver::is_in_config_dir(path) => {
            DefaultCatalog::write_to(path)?;
            info!(path = %path.display(), "Seeded default catalog");
            Ok(CatalogLookup::Seeded(path.to_path_buf()))
        }
        Err(e) => Err(CliError::from(e)),
    }
}
