// Generate an entity from a catalog template

use std::path::PathBuf;

use async_trait::async_trait;
use boilgen_generation::{
    Catalog, GenerationError, GenerationManager, GenerationManagerConfig, GenerationReport,
    GenerationRequest,
};
use chrono::{DateTime, FixedOffset, Local};

use super::{Command, GlobalOptions};
use crate::{
    catalog::{self, CatalogLookup, SEEDED_MESSAGE},
    error::CliResult,
    prompt::{Notifier, Prompter, TerminalNotifier, TerminalPrompter},
    workspace::Workspace,
};

const ENTITY_TYPE_PLACEHOLDER: &str = "What do you want to generate? (e.g. Component, Page, Hook)";

/// Generate an entity; unset choices are asked for interactively
pub struct GenerateCommand {
    pub options: GlobalOptions,
    pub entity_type: Option<String>,
    pub template: Option<String>,
    pub name: Option<String>,
    pub dir: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn new(options: GlobalOptions) -> Self {
        Self {
            options,
            entity_type: None,
            template: None,
            name: None,
            dir: None,
        }
    }

    pub fn with_entity_type(mut self, entity_type: Option<String>) -> Self {
        self.entity_type = entity_type;
        self
    }

    pub fn with_template(mut self, template: Option<String>) -> Self {
        self.template = template;
        self
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.dir = dir;
        self
    }

    /// Run the command against the given prompter and notifier
    ///
    /// Cancelling any prompt ends the command quietly with `Ok(())`.
    pub fn run(
        &self,
        prompter: &mut dyn Prompter,
        notifier: &dyn Notifier,
        now: DateTime<FixedOffset>,
    ) -> CliResult<()> {
        let workspace = Workspace::open(
            self.options.workspace.as_deref(),
            self.options.templates.as_deref(),
        )?;

        let catalog = match catalog::load_or_seed(&workspace.templates_path())? {
            CatalogLookup::Loaded(catalog) => catalog,
            CatalogLookup::Seeded(_) => {
                notifier.warning(SEEDED_MESSAGE);
                return Ok(());
            }
        };

        let Some(request) = self.build_request(&catalog, &workspace, prompter, notifier, now)?
        else {
            return Ok(());
        };

        let manager = GenerationManager::with_config(GenerationManagerConfig {
            dry_run: self.options.dry_run,
            rollback_on_failure: workspace.config.generation.rollback_on_failure,
        });

        match manager.generate(&catalog, &request) {
            Ok(report) => {
                self.report(&report, &request, notifier);
                Ok(())
            }
            Err(GenerationError::TargetAlreadyExists(_)) => {
                notifier.warning(&format!(
                    "{} '{}' already exists.",
                    request.entity_type, request.entity_name
                ));
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve the entity type, template and name from flags or prompts
    fn build_request(
        &self,
        catalog: &Catalog,
        workspace: &Workspace,
        prompter: &mut dyn Prompter,
        notifier: &dyn Notifier,
        now: DateTime<FixedOffset>,
    ) -> CliResult<Option<GenerationRequest>> {
        let entity_type = match &self.entity_type {
            Some(entity_type) => entity_type.clone(),
            None => {
                if catalog.is_empty() {
                    notifier.warning("The template catalog has no entity types.");
                    return Ok(None);
                }
                match prompter.pick(ENTITY_TYPE_PLACEHOLDER, &catalog.entity_type_names())? {
                    Some(entity_type) => entity_type,
                    None => return Ok(None),
                }
            }
        };

        let group = catalog
            .entity_type(&entity_type)
            .ok_or_else(|| GenerationError::EntityTypeNotFound(entity_type.clone()))?;

        let template_name = match &self.template {
            Some(template) => template.clone(),
            None => {
                let placeholder = format!("Choose a {} template", entity_type);
                match prompter.pick(&placeholder, &group.template_names())? {
                    Some(template) => template,
                    None => return Ok(None),
                }
            }
        };

        let entity_name = match &self.name {
            Some(name) => Some(name.trim().to_string()).filter(|name| !name.is_empty()),
            None => prompter.input(
                &format!("Enter {} name", entity_type),
                &format!("My{}", entity_type),
            )?,
        };
        let Some(entity_name) = entity_name else {
            return Ok(None);
        };

        Ok(Some(GenerationRequest {
            entity_type,
            template_name,
            entity_name,
            base_dir: workspace.base_dir(self.dir.as_deref()),
            workspace_root: workspace.root.clone(),
            workspace_name: workspace.name.clone(),
            now,
        }))
    }

    fn report(&self, report: &GenerationReport, request: &GenerationRequest, notifier: &dyn Notifier) {
        for skipped in &report.write.skipped {
            notifier.error(&format!(
                "Invalid file path in template: {}",
                skipped.path_template
            ));
        }

        if report.write.dry_run {
            for file in &report.write.files {
                notifier.info(&format!("Would create {}", file.path.display()));
            }
            notifier.info(&format!(
                "Dry run: {} '{}' would be created using '{}' template.",
                request.entity_type, request.entity_name, request.template_name
            ));
        } else {
            notifier.success(&format!(
                "{} '{}' created using '{}' template.",
                request.entity_type, request.entity_name, request.template_name
            ));
        }
    }
}

#[async_trait]
impl Command for GenerateCommand {
    async fn execute(&self) -> CliResult<()> {
        let mut prompter = TerminalPrompter::stdio();
        let notifier = TerminalNotifier;
        self.run(&mut prompter, &notifier, Local::now().into())
    }
}
