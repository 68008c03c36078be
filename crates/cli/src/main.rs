//! bigcal CLI entry point.

use anyhow::Result;
use bigcal_cli::app;
use bigcal_cli::cli::Cli;
use bigcal_cli::Config;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "bigcal_cli=warn,bigcal_core=warn"
    } else {
        "bigcal_cli=info,bigcal_core=info"
    };

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_overrides(cli.data.clone(), cli.max_rows);
    tracing::debug!(?config, "Loaded configuration");

    let output = app::run(&cli, &config)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
