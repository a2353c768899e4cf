//! tenant-manifest CLI binary

use anyhow::Result;

use tenant_manifest::cli::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tenant_manifest=info".into()),
        )
        .init();

    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Run the CLI application
    CliApp::run(&matches).await
}
