//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    paths::PathResolver,
    types::{AppConfig, ConfigManager as ConfigManagerTrait},
};

/// Layers global settings, project settings and `BOILGEN_*` environment variables
pub struct ConfigManager {
    /// Configuration files, lowest precedence first
    config_paths: Vec<PathBuf>,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager reading the global and the project configuration
    pub fn new(workspace_root: &Path) -> Self {
        let mut config_paths = Vec::new();
        if let Some(global) = Self::global_config_path() {
            config_paths.push(global);
        }
        config_paths.push(PathResolver::project_config_path(workspace_root));

        Self {
            config_paths,
            env_prefix: "BOILGEN".to_string(),
        }
    }

    /// Create with a single custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_paths: vec![path],
            env_prefix: "BOILGEN".to_string(),
        }
    }

    /// Get global config path
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("boilgen").join("config.toml"))
    }

    fn save_path(&self) -> Result<&Path> {
        self.config_paths
            .last()
            .map(PathBuf::as_path)
            .ok_or_else(|| ConfigError::Validation("No configuration path set".to_string()))
    }
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&mut self) -> Result<AppConfig> {
        let mut builder = Config::builder();
        for path in &self.config_paths {
            debug!(path = %path.display(), "Adding configuration source");
            builder = builder.add_source(File::from(path.clone()).required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        self.validate_config(&app_config)?;
        Ok(app_config)
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        let path = self.save_path()?;
        let toml = toml::to_string(config)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(path) = &config.templates_path {
            if path.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "templates_path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
