// Workspace discovery and settings

use std::path::{Path, PathBuf};

use boilgen_config::{AppConfig, ConfigManager, ConfigManagerTrait, PathResolver};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Workspace the command operates in, with its loaded settings
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Absolute workspace root
    pub root: PathBuf,
    /// Display name (last component of the root)
    pub name: String,
    /// Layered settings
    pub config: AppConfig,
}

impl Workspace {
    /// Open the workspace at `root` (or the current directory) and load its settings
    ///
    /// `templates_override` replaces any configured `templates_path`.
    pub fn open(root: Option<&Path>, templates_override: Option<&str>) -> CliResult<Self> {
        let root = match root {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir()?,
        };
        if !root.is_dir() {
            return Err(CliError::NoWorkspace { path: root });
        }
        let root = root.canonicalize()?;

        let mut config = ConfigManager::new(&root).load_config()?;
        if let Some(path) = templates_override {
            config.templates_path = Some(path.to_string());
        }

        let name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());

        debug!(root = %root.display(), name = %name, "Opened workspace");
        Ok(Self { root, name, config })
    }

    /// Where the template catalog is expected
    pub fn templates_path(&self) -> PathBuf {
        PathResolver::resolve_templates_path(&self.config, &self.root)
    }

    /// Directory new entities are created in: `dir` relative to the root, or the root itself
    pub fn base_dir(&self, dir: Option<&Path>) -> PathBuf {
        match dir {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => self.root.join(dir),
            None => self.root.clone(),
        }
    }
}
