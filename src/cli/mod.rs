//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("tenant-manifest")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Render MinIO Tenant manifests from data source configuration")
            .arg(
                clap::Arg::new("config")
                    .short('c')
                    .long("config")
                    .help("Configuration file path")
                    .value_name("FILE")
                    .global(true),
            )
            .subcommand(commands::init::command())
            .subcommand(commands::render::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::schema::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("render", sub_matches)) => commands::render::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            Some(("schema", sub_matches)) => commands::schema::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{Context, Result};
    use clap::ArgMatches;
    use std::path::PathBuf;
    use tracing::debug;

    use crate::config::config::DEFAULT_CONFIG_FILES;
    use crate::datasource::{DataSource, TenantManifestDataSource};
    use crate::utils::{expand_inputs, parse_documents, read_input, InputDocument};
    use crate::{Config, PROVIDER_TYPE_NAME};

    /// Get configuration file path from arguments, the working directory or the user config dir
    pub fn get_config_path(matches: &ArgMatches) -> Option<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Some(PathBuf::from(config_path));
        }

        let default_paths = DEFAULT_CONFIG_FILES.into_iter().map(PathBuf::from);
        let user_path = Config::user_config_path();

        default_paths
            .chain(user_path)
            .find(|path| path.exists())
    }

    /// Load configuration from file, falling back to built-in defaults
    pub fn load_config(matches: &ArgMatches) -> Result<Config> {
        match get_config_path(matches) {
            Some(path) => {
                debug!("Loading configuration from {:?}", path);
                Config::from_file(&path)
                    .with_context(|| format!("Failed to load configuration from {:?}", path))
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Full type name of the Tenant manifest data source
    pub fn tenant_data_source_name() -> String {
        TenantManifestDataSource::new().type_name(PROVIDER_TYPE_NAME)
    }

    /// Positional `INPUT` values of a command
    pub fn get_inputs(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("inputs")
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    /// Read and parse every document of one input
    pub fn load_documents(input: &str) -> Result<Vec<InputDocument>> {
        let content = read_input(input)?;
        parse_documents(input, &content)
    }

    /// Expand the inputs of a command using the configured extensions
    pub fn resolve_inputs(matches: &ArgMatches, config: &Config) -> Result<Vec<String>> {
        expand_inputs(&get_inputs(matches), &config.render)
    }
}
