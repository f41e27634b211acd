//! Generation manager for orchestrating entity generation
//!
//! Resolves the requested template, guards against an existing target
//! directory, builds the variable set and hands the template to the
//! [`OutputWriter`]. Nothing is written if the target already exists.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::{GenerationError, GenerationResult},
    models::{Catalog, Template},
    output_writer::{OutputWriter, OutputWriterConfig, WriteResult},
    templates::{resolver::VariableResolver, validation::PathValidator},
};

/// Configuration for the generation manager
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationManagerConfig {
    /// Plan the run without touching the filesystem
    pub dry_run: bool,
    /// Remove the target directory again if a write fails midway
    pub rollback_on_failure: bool,
}

/// Everything needed to generate one entity
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Entity type key in the catalog (e.g. "Component")
    pub entity_type: String,
    /// Template name within the entity type
    pub template_name: String,
    /// Name of the entity; becomes the target directory name
    pub entity_name: String,
    /// Directory the entity directory is created in
    pub base_dir: PathBuf,
    /// Workspace root, for `$WORKSPACE_FOLDER` and `$RELATIVE_FILEPATH`
    pub workspace_root: PathBuf,
    /// Workspace display name, for `$WORKSPACE_NAME`
    pub workspace_name: String,
    /// Timestamp shared by every file of the run
    pub now: DateTime<FixedOffset>,
}

impl GenerationRequest {
    /// Directory the entity's files are written under
    pub fn target_root(&self) -> PathBuf {
        self.base_dir.join(&self.entity_name)
    }
}

/// Outcome of a successful generation
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Entity type that was generated
    pub entity_type: String,
    /// Template that was used
    pub template_name: String,
    /// Directory holding the generated files
    pub target_root: PathBuf,
    /// Files written and skipped
    pub write: WriteResult,
}

/// Orchestrates entity generation
pub struct GenerationManager {
    config: GenerationManagerConfig,
    writer: OutputWriter,
}

impl GenerationManager {
    /// Creates a new generation manager with default configuration
    pub fn new() -> Self {
        Self::with_config(GenerationManagerConfig::default())
    }

    /// Creates a new generation manager with custom configuration
    pub fn with_config(config: GenerationManagerConfig) -> Self {
        let writer = OutputWriter::with_config(OutputWriterConfig {
            dry_run: config.dry_run,
        });
        Self { config, writer }
    }

    /// Gets the current configuration
    pub fn config(&self) -> &GenerationManagerConfig {
        &self.config
    }

    /// Find the template named by `request` in `catalog`
    pub fn select_template<'a>(
        catalog: &'a Catalog,
        request: &GenerationRequest,
    ) -> GenerationResult<&'a Template> {
        let group = catalog
            .entity_type(&request.entity_type)
            .ok_or_else(|| GenerationError::EntityTypeNotFound(request.entity_type.clone()))?;

        group
            .template(&request.template_name)
            .ok_or_else(|| GenerationError::TemplateNotFound {
                entity_type: request.entity_type.clone(),
                template: request.template_name.clone(),
            })
    }

    /// Generate the entity described by `request`
    pub fn generate(
        &self,
        catalog: &Catalog,
        request: &GenerationRequest,
    ) -> GenerationResult<GenerationReport> {
        let template = Self::select_template(catalog, request)?;
        validate_entity_name(&request.entity_name)?;

        let target_root = request.target_root();
        if target_root.exists() {
            return Err(GenerationError::TargetAlreadyExists(target_root));
        }

        info!(
            entity_type = %request.entity_type,
            template = %request.template_name,
            target = %target_root.display(),
            dry_run = self.config.dry_run,
            "Generating entity"
        );

        if !self.config.dry_run {
            fs::create_dir_all(&target_root)
                .map_err(|e| GenerationError::io(&target_root, e))?;
        }

        let variables = VariableResolver::resolve(
            &target_root,
            &request.workspace_root,
            &request.workspace_name,
            &request.now,
        );

        let write = match self.writer.materialize(&target_root, template, &variables) {
            Ok(write) => write,
            Err(e) => {
                if self.config.rollback_on_failure && !self.config.dry_run {
                    return Err(rollback(&target_root, e));
                }
                return Err(e);
            }
        };

        Ok(GenerationReport {
            entity_type: request.entity_type.clone(),
            template_name: request.template_name.clone(),
            target_root,
            write,
        })
    }
}

impl Default for GenerationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// An entity name must be one plain path component
fn validate_entity_name(name: &str) -> GenerationResult<()> {
    let plain = !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(&['/', '\\'][..])
        && PathValidator::is_valid(name);

    if plain {
        Ok(())
    } else {
        Err(GenerationError::InvalidEntityName(name.to_string()))
    }
}

/// Remove `target_root` after `cause` aborted the run
///
/// Returns `cause` itself, or `RollbackFailed` carrying it if removal fails.
fn rollback(target_root: &Path, cause: GenerationError) -> GenerationError {
    warn!(
        target = %target_root.display(),
        error = %cause,
        "Rolling back partially generated entity"
    );
    match fs::remove_dir_all(target_root) {
        Ok(()) => cause,
        Err(source) => GenerationError::RollbackFailed {
            path: target_root.to_path_buf(),
            source,
            cause: Box::new(cause),
        },
    }
}
