//! GCE Explorer - Main entry point

use clap::Parser;
use log::{debug, info};

use gce_explorer::ui::{create_spinner, finish_spinner};
use gce_explorer::{
    assemble_report, write_report, Cli, CredentialResolver, GcpClient, OutputFormat,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting gce-explorer v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org={}, format={}, output={}, quiet={}",
        cli.org,
        cli.format,
        cli.output.display(),
        cli.quiet
    );

    // Fail on bad configuration before any API call
    cli.validate()?;

    // Resolve credentials with fallback logic
    let resolver = CredentialResolver::new(cli.key_file.clone());
    let token = resolver.resolve(cli.token.as_deref()).await?;

    let client = GcpClient::new(token);

    let spinner = create_spinner(
        &format!("Inventorying organization {}...", cli.org),
        cli.quiet,
    );

    let (rows, summary) = match assemble_report(&client, &cli.org).await {
        Ok(result) => result,
        Err(e) => {
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            return Err(e.into());
        }
    };

    finish_spinner(
        spinner,
        &format!(
            "Found {} instances across {} projects and {} folders",
            summary.instances, summary.projects, summary.folders
        ),
    );

    write_report(&rows, &cli.format, &cli.output)?;

    if cli.format == OutputFormat::Xlsx {
        info!("Wrote {} rows to {}", rows.len(), cli.output.display());
    }
    info!("Completed successfully");

    Ok(())
}
