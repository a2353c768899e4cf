//! Info command implementation

use crate::cli::utils;
use crate::Provider;
use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");
    let provider = Provider::new();

    println!("Tenant Manifest - MinIO Tenant manifest renderer");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Provider: {}", provider.type_name());
    println!("Data sources:");
    for name in provider.data_source_names() {
        println!("  - {name}");
    }

    if detailed {
        println!("\nDetailed Information:");
        for name in provider.data_source_names() {
            let schema = provider.schema(name)?;
            println!(
                "  {}: {} top-level attributes, {} in total",
                name,
                schema.attributes.len(),
                schema.attributes.count_recursive()
            );
        }
        match utils::get_config_path(matches) {
            Some(path) => println!("  Configuration file: {:?}", path),
            None => println!("  Configuration file: none (using defaults)"),
        }
    }

    Ok(())
}
