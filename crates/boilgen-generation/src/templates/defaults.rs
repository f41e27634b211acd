//! Embedded default catalog
//!
//! When no catalog exists at the conventional location, this starter catalog
//! is written there so users have something to edit.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{GenerationError, GenerationResult};
use crate::models::Catalog;
use crate::templates::loader::CatalogLoader;

/// Default catalog content: a single React component scaffold
pub const DEFAULT_CATALOG: &str = r#"{
  "Component": {
    "default": {
      "styles.module.scss": [
        ""
      ],
      "$TM_FILENAME_BASE.tsx": [
        "import React from 'react';",
        "",
        "import styles from './styles.module.scss'",
        "",
        "export const $TM_FILENAME_BASE = () => {",
        "  return <div>$TM_FILENAME_BASE</div>;",
        "};"
      ],
      "__tests__/buildName.spec.ts": [
        ""
      ],
      "types.ts": [
        ""
      ],
      "index.ts": [
        "export { $TM_FILENAME_BASE } from './$TM_FILENAME_BASE';"
      ]
    }
  }
}
"#;

/// Writes and exposes the embedded default catalog
pub struct DefaultCatalog;

impl DefaultCatalog {
    /// The default catalog as a parsed structure
    pub fn catalog() -> Catalog {
        CatalogLoader::parse(DEFAULT_CATALOG).unwrap_or_default()
    }

    /// Write the default catalog to `path`, creating parent directories
    ///
    /// An existing file at `path` is overwritten; callers only seed after the
    /// loader reported the catalog as missing.
    pub fn write_to(path: &Path) -> GenerationResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| GenerationError::io(parent, e))?;
            }
        }

        fs::write(path, DEFAULT_CATALOG).map_err(|e| GenerationError::io(path, e))?;

        info!(path = %path.display(), "Wrote default template catalog");
        Ok(())
    }

    /// Write the default catalog only if nothing exists at `path`
    ///
    /// # Returns
    /// `true` if the file was written
    pub fn write_if_missing(path: &Path) -> GenerationResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::write_to(path)?;
        Ok(true)
    }
}
