//! Render command implementation

use crate::cli::utils;
use crate::config::OutputFormat;
use crate::renderer::ManifestRenderer;
use crate::utils::{ensure_directory, InputDocument};
use crate::Provider;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("render")
        .about("Render Tenant manifests from data source configuration")
        .arg(
            clap::Arg::new("inputs")
                .help("Configuration files or directories, '-' reads standard input")
                .value_name("INPUT")
                .num_args(1..)
                .required(true),
        )
        .arg(
            clap::Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format")
                .value_parser(["manifest", "state"]),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file, defaults to stdout")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("fail-fast")
                .long("fail-fast")
                .help("Stop on first invalid configuration")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Starting manifest rendering");

    let mut config = utils::load_config(matches)?;

    // Command line flags override the configuration file
    if let Some(format) = matches.get_one::<String>("format") {
        config.output.format = format.parse::<OutputFormat>()?;
    }
    if let Some(output_path) = matches.get_one::<String>("output") {
        config.output.path = Some(PathBuf::from(output_path));
    }
    if matches.get_flag("fail-fast") {
        config.render.fail_fast = true;
    }

    let mut documents: Vec<InputDocument> = Vec::new();
    let mut input_errors = 0;
    for input in utils::resolve_inputs(matches, &config)? {
        match utils::load_documents(&input) {
            Ok(parsed) => documents.extend(parsed),
            Err(e) if !config.render.fail_fast => {
                eprintln!("{input}: {e:#}");
                input_errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let renderer = ManifestRenderer::new(Provider::new(), utils::tenant_data_source_name())
        .with_fail_fast(config.render.fail_fast);
    let report = renderer.render_all(&documents).await?;

    for failure in &report.failures {
        eprintln!("{}:\n{}", failure.origin, failure.diagnostics);
    }

    let output = report.to_output(config.output.format)?;
    match config.output.resolved_path() {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                ensure_directory(parent)?;
            }
            std::fs::write(&path, output)?;
            info!("Wrote {} document(s) to {:?}", report.rendered.len(), path);
        }
        None => print!("{output}"),
    }

    let failed = report.failures.len() + input_errors;
    if failed > 0 {
        return Err(anyhow!(
            "{} of {} input(s) failed to render",
            failed,
            report.total() + input_errors
        ));
    }

    Ok(())
}
