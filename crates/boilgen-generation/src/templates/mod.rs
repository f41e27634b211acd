//! Template catalog module
//!
//! Provides catalog loading, variable resolution, substitution and path validation.

pub mod defaults;
pub mod engine;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod validation;

// Re-export public API
pub use defaults::{DefaultCatalog, DEFAULT_CATALOG};
pub use engine::{placeholder_names, substitute, TemplateEngine};
pub use error::CatalogError;
pub use loader::CatalogLoader;
pub use resolver::{Variable, VariableResolver, VariableSet};
pub use validation::{PathValidator, RESERVED_PATH_CHARS};
