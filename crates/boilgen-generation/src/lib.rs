#![warn(missing_docs)]

//! Boilerplate generation engine for boilgen
//!
//! Loads a JSON template catalog, resolves snippet-style variables
//! (`$TM_FILENAME_BASE`, `$CURRENT_YEAR`, ...) and materializes the selected
//! template as a directory tree under a new entity directory.

pub mod error;
pub mod generation_manager;
pub mod models;
pub mod output_writer;
pub mod templates;

// Re-export public API
pub use error::{GenerationError, GenerationResult};
pub use generation_manager::{
    GenerationManager, GenerationManagerConfig, GenerationReport, GenerationRequest,
};
pub use models::{Catalog, FileSpec, GeneratedFile, SkippedFile, Template, TemplateGroup};
pub use output_writer::{normalize_relative_path, OutputWriter, OutputWriterConfig, WriteResult};
pub use templates::{
    placeholder_names, substitute, CatalogError, CatalogLoader, DefaultCatalog, PathValidator,
    TemplateEngine, Variable, VariableResolver, VariableSet, DEFAULT_CATALOG,
    RESERVED_PATH_CHARS,
};
