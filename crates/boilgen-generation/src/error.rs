//! Error types for boilerplate generation

use std::path::PathBuf;

use thiserror::Error;

use crate::templates::CatalogError;

/// Errors that can occur while generating an entity from a template
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Entity type missing from the catalog
    #[error("Entity type not found in catalog: {0}")]
    EntityTypeNotFound(String),

    /// Template missing from the entity type's group
    #[error("Template '{template}' not found for entity type '{entity_type}'")]
    TemplateNotFound {
        /// Entity type that was searched
        entity_type: String,
        /// Template name that was requested
        template: String,
    },

    /// Entity name is empty or not a single plain path component
    #[error("Invalid entity name: '{0}'")]
    InvalidEntityName(String),

    /// The target entity directory is already present
    #[error("Target already exists: {}", .0.display())]
    TargetAlreadyExists(PathBuf),

    /// A path template is unusable (reserved characters or escapes the target root)
    #[error("Invalid file path in template: {path_template} ({reason})")]
    InvalidPathTemplate {
        /// Raw path template from the catalog
        path_template: String,
        /// What was wrong with it
        reason: String,
    },

    /// Underlying filesystem failure
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Original error
        source: std::io::Error,
    },

    /// Rollback after a failed run could not complete
    #[error("Rollback failed for {}: {source} (after: {cause})", .path.display())]
    RollbackFailed {
        /// Directory that could not be removed
        path: PathBuf,
        /// Error raised while removing the directory
        source: std::io::Error,
        /// Failure that triggered the rollback
        cause: Box<GenerationError>,
    },
}

impl GenerationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerationError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;
