//! Validate command implementation

use crate::cli::utils;
use crate::Provider;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate data source configuration without rendering")
        .arg(
            clap::Arg::new("inputs")
                .help("Configuration files or directories, '-' reads standard input")
                .value_name("INPUT")
                .num_args(1..)
                .required(true),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration");

    let config = utils::load_config(matches)?;
    let provider = Provider::new();
    let data_source = utils::tenant_data_source_name();

    let mut checked = 0;
    let mut invalid = 0;
    for input in utils::resolve_inputs(matches, &config)? {
        for document in utils::load_documents(&input)? {
            checked += 1;
            let diagnostics = provider.validate_data_source_config(&data_source, &document.config)?;
            if diagnostics.has_error() {
                invalid += 1;
                println!("✗ {}", document.origin);
                println!("{diagnostics}");
            } else {
                println!("✓ {} is valid", document.origin);
                if !diagnostics.is_empty() {
                    println!("{diagnostics}");
                }
            }
        }
    }

    println!("Checked {checked} configuration(s), {invalid} invalid");

    if invalid > 0 {
        return Err(anyhow!("{} configuration(s) failed validation", invalid));
    }

    Ok(())
}
