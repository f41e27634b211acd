// CLI error types and user-facing rendering

use std::path::PathBuf;

use boilgen_generation::{CatalogError, GenerationError};
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("No workspace folder open")]
    NoWorkspace { path: PathBuf },

    #[error("No templates found at {}", .path.display())]
    TemplatesNotFound { path: PathBuf },

    #[error("Invalid JSON in templates.")]
    InvalidTemplates { path: PathBuf, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::NoWorkspace { path } => {
                format!(
                    "No workspace folder open: {} is not a directory.\n\nPass an existing folder with --workspace.",
                    path.display()
                )
            }
            CliError::TemplatesNotFound { path } => {
                format!("No templates found at {}", path.display())
            }
            CliError::InvalidTemplates { path, detail } => {
                format!(
                    "Invalid JSON in templates.\n\n{}: {}",
                    path.display(),
                    detail
                )
            }
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nCheck .boilgen/config.toml and BOILGEN_* variables.",
                    msg
                )
            }
            CliError::Generation(e) => format!("Generation failed: {}", e),
            CliError::Serialization(e) => format!("Could not render output: {}", e),
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { path } => CliError::TemplatesNotFound { path },
            CatalogError::Malformed { path, source } => CliError::InvalidTemplates {
                path,
                detail: source.to_string(),
            },
            other => CliError::Generation(GenerationError::Catalog(other)),
        }
    }
}

impl From<boilgen_config::ConfigError> for CliError {
    fn from(err: boilgen_config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
