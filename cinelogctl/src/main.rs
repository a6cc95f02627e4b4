use anyhow::{Context, Result};
use clap::Parser;
use cinelogctl::{Cli, CtlConfig, commands};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Before parsing so `.env` can supply CINELOG_SERVER_URL
    if let Some(path) = CtlConfig::load_env_file()? {
        debug!("loaded environment from {}", path.display());
    }

    let cli = Cli::parse();
    let (mut config, source) = CtlConfig::load(cli.config.as_deref())
        .context("failed to load cinelogctl configuration")?;
    debug!(?source, "configuration resolved");

    if let Some(server) = cli.server {
        config.server_url = server;
    }
    config.validate()?;

    let output = commands::run(cli.command, &config).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
