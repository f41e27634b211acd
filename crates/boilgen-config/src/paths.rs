//! Well-known locations inside a workspace

use std::path::{Component, Path, PathBuf};

use crate::types::AppConfig;

/// Name of the per-workspace configuration directory
pub const CONFIG_DIR_NAME: &str = ".boilgen";

/// File name of the template catalog
pub const TEMPLATES_FILE_NAME: &str = "boilgen.templates.json";

/// File name of the project configuration
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves boilgen paths relative to a workspace
pub struct PathResolver;

impl PathResolver {
    /// `<workspace>/.boilgen`
    pub fn config_dir(workspace_root: &Path) -> PathBuf {
        workspace_root.join(CONFIG_DIR_NAME)
    }

    /// `<workspace>/.boilgen/config.toml`
    pub fn project_config_path(workspace_root: &Path) -> PathBuf {
        Self::config_dir(workspace_root).join(CONFIG_FILE_NAME)
    }

    /// `<workspace>/.boilgen/boilgen.templates.json`
    pub fn default_templates_path(workspace_root: &Path) -> PathBuf {
        Self::config_dir(workspace_root).join(TEMPLATES_FILE_NAME)
    }

    /// Catalog path: the override if set (relative to the workspace unless absolute),
    /// otherwise the default location
    pub fn resolve_templates_path(config: &AppConfig, workspace_root: &Path) -> PathBuf {
        match config.templates_path.as_deref() {
            Some(path) if Path::new(path).is_absolute() => PathBuf::from(path),
            Some(path) => workspace_root.join(path),
            None => Self::default_templates_path(workspace_root),
        }
    }

    /// Whether `path` lies in a `.boilgen` directory, where a missing catalog may be seeded
    pub fn is_in_config_dir(path: &Path) -> bool {
        path.components()
            .any(|c| matches!(c, Component::Normal(name) if name == CONFIG_DIR_NAME))
    }
}
