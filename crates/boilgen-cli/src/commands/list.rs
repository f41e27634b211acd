// List the entity types and templates of the catalog

use std::io::{self, Write};

use async_trait::async_trait;
use boilgen_generation::{Catalog, CatalogLoader};
use clap::ValueEnum;
use serde::Serialize;

use super::{Command, GlobalOptions};
use crate::{error::CliResult, output::OutputStyle, workspace::Workspace};

/// Output format for `list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct EntityTypeSummary<'a> {
    entity_type: &'a str,
    templates: Vec<TemplateSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct TemplateSummary<'a> {
    name: &'a str,
    files: Vec<&'a str>,
}

fn summarize(catalog: &Catalog) -> Vec<EntityTypeSummary<'_>> {
    catalog
        .entity_types
        .iter()
        .map(|(entity_type, group)| EntityTypeSummary {
            entity_type,
            templates: group
                .templates
                .iter()
                .map(|(name, template)| TemplateSummary {
                    name,
                    files: template.file_specs().map(|spec| spec.path_template).collect(),
                })
                .collect(),
        })
        .collect()
}

/// Show what the catalog offers
pub struct ListCommand {
    pub options: GlobalOptions,
    pub format: ListFormat,
}

impl ListCommand {
    pub fn new(options: GlobalOptions) -> Self {
        Self {
            options,
            format: ListFormat::Table,
        }
    }

    pub fn with_format(mut self, format: ListFormat) -> Self {
        self.format = format;
        self
    }

    pub fn run(&self, out: &mut dyn Write, style: &OutputStyle) -> CliResult<()> {
        let workspace = Workspace::open(
            self.options.workspace.as_deref(),
            self.options.templates.as_deref(),
        )?;
        let catalog = CatalogLoader::load(&workspace.templates_path())?;
        render(&catalog, self.format, out, style)
    }
}

/// Write the catalog summary in the requested format
pub fn render(
    catalog: &Catalog,
    format: ListFormat,
    out: &mut dyn Write,
    style: &OutputStyle,
) -> CliResult<()> {
    let summary = summarize(catalog);
    match format {
        ListFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
        ListFormat::Table => {
            for entity in &summary {
                writeln!(out, "{}", style.header(entity.entity_type))?;
                for template in &entity.templates {
                    let noun = if template.files.len() == 1 { "file" } else { "files" };
                    writeln!(
                        out,
                        "{}",
                        style.list_item(&format!(
                            "{} ({} {})",
                            template.name,
                            template.files.len(),
                            noun
                        ))
                    )?;
                }
            }
        }
    }
    Ok(())
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self) -> CliResult<()> {
        let mut stdout = io::stdout();
        self.run(&mut stdout, &OutputStyle::default())
    }
}
