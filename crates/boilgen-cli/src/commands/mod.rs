// Command handlers for boilgen CLI

pub mod generate;
pub mod init;
pub mod list;

use std::path::PathBuf;

pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use list::{ListCommand, ListFormat};

use crate::error::CliResult;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Workspace root; the current directory when unset
    pub workspace: Option<PathBuf>,
    /// Catalog path overriding the configured one
    pub templates: Option<String>,
    /// Report what would be written without writing
    pub dry_run: bool,
}

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}
