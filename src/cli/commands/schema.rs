//! Schema command implementation

use crate::cli::utils;
use crate::Provider;
use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("schema").about("Print the data source schema as JSON")
}

pub async fn run(_matches: &ArgMatches) -> Result<()> {
    let schema = Provider::new().schema(&utils::tenant_data_source_name())?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
