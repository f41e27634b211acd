// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::error::CliResult;

/// boilgen - scaffold entities from a JSON template catalog
#[derive(Parser, Debug)]
#[command(name = "boilgen")]
#[command(bin_name = "boilgen")]
#[command(about = "Scaffold entities from a JSON template catalog")]
#[command(
    long_about = "boilgen creates a new entity directory (component, page, hook, ...) from a template in .boilgen/boilgen.templates.json.\n\nQuick start:\n  • boilgen init       Write the default template catalog\n  • boilgen list       Show available entity types and templates\n  • boilgen generate   Create an entity, prompting for anything not given"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root (default: current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub workspace: Option<PathBuf>,

    /// Template catalog path, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub templates: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Preview changes without applying them
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate an entity from a template
    #[command(about = "Generate an entity from a catalog template")]
    Generate {
        /// Entity type to generate (e.g. Component)
        #[arg(short = 't', long, value_name = "TYPE")]
        entity_type: Option<String>,

        /// Template of the entity type
        #[arg(short = 'T', long, value_name = "TEMPLATE")]
        template: Option<String>,

        /// Name of the new entity
        #[arg(short, long, value_name = "NAME")]
        name: Option<String>,

        /// Directory to create the entity in, relative to the workspace
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Write the default template catalog
    #[command(about = "Write the default template catalog into the workspace")]
    Init {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },

    /// List entity types and templates
    #[command(about = "List the entity types and templates in the catalog")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        crate::logging::init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli).await
    }

    /// Execute a command
    pub async fn execute(cli: &Cli) -> CliResult<()> {
        let options = GlobalOptions {
            workspace: cli.workspace.clone(),
            templates: cli.templates.clone(),
            dry_run: cli.dry_run,
        };

        // Default to interactive generation if no command specified
        let command = cli.command.clone().unwrap_or(Commands::Generate {
            entity_type: None,
            template: None,
            name: None,
            dir: None,
        });

        match command {
            Commands::Generate {
                entity_type,
                template,
                name,
                dir,
            } => {
                let cmd = GenerateCommand::new(options)
                    .with_entity_type(entity_type)
                    .with_template(template)
                    .with_name(name)
                    .with_dir(dir);
                cmd.execute().await
            }
            Commands::Init { force } => {
                let cmd = InitCommand::new(options).with_force(force);
                cmd.execute().await
            }
            Commands::List { format } => {
                let cmd = ListCommand::new(options).with_format(format);
                cmd.execute().await
            }
        }
    }
}
