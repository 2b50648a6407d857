mod cli;
mod run;

use anyhow::Result;
use clap::Parser;
use denv_config::Config;

fn main() -> Result<()> {
    // Initialize tracing; stdout carries the redacted stream
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let options = cli.redact_options(&config);

    tracing::debug!(
        mode = %options.mode,
        keep_length = options.keep_length,
        strip_secrets = options.strip_secrets,
        inputs = cli.files.len(),
        "starting redaction"
    );

    let stats = run::run(&cli.files, cli.output.as_deref(), options)?;

    tracing::debug!(
        lines = stats.lines,
        redacted = stats.redacted,
        dropped = stats.dropped,
        "done"
    );

    Ok(())
}
