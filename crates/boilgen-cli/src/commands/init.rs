// Write the default template catalog into a workspace

use async_trait::async_trait;
use boilgen_generation::DefaultCatalog;

use super::{Command, GlobalOptions};
use crate::{
    error::CliResult,
    prompt::{Notifier, TerminalNotifier},
    workspace::Workspace,
};

/// Seed the default catalog at the resolved catalog path
pub struct InitCommand {
    pub options: GlobalOptions,
    pub force: bool,
}

impl InitCommand {
    pub fn new(options: GlobalOptions) -> Self {
        Self {
            options,
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn run(&self, notifier: &dyn Notifier) -> CliResult<()> {
        let workspace = Workspace::open(
            self.options.workspace.as_deref(),
            self.options.templates.as_deref(),
        )?;
        let path = workspace.templates_path();

        if path.exists() && !self.force {
            notifier.warning(&format!(
                "Template catalog already exists at {}. Use --force to overwrite it.",
                path.display()
            ));
            return Ok(());
        }

        if self.options.dry_run {
            notifier.info(&format!(
                "Would write the default template catalog to {}",
                path.display()
            ));
            return Ok(());
        }

        DefaultCatalog::write_to(&path)?;
        notifier.success(&format!(
            "Default template catalog written to {}",
            path.display()
        ));
        Ok(())
    }
}

#[async_trait]
impl Command for InitCommand {
    async fn execute(&self) -> CliResult<()> {
        self.run(&TerminalNotifier)
    }
}
