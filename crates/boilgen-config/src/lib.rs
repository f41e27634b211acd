//! boilgen configuration management
//!
//! Loads settings from the global and per-workspace `config.toml` files and
//! `BOILGEN_*` environment variables, and resolves where the template catalog lives.

pub mod error;
pub mod manager;
pub mod paths;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use paths::{PathResolver, CONFIG_DIR_NAME, CONFIG_FILE_NAME, TEMPLATES_FILE_NAME};
pub use types::{AppConfig, ConfigManager as ConfigManagerTrait, GenerationConfig};
