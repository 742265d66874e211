use anyhow::Context;
use clap::Parser;

use slidedraft::backend::GenerationClient;
use slidedraft::cli::Cli;
use slidedraft::config::Config;
use slidedraft::logging::init_tracing;
use slidedraft::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    let base_url = config.resolve_base_url(cli.backend_url.as_deref());
    let client = GenerationClient::new(&base_url).context("failed to build HTTP client")?;
    tracing::info!(%base_url, "starting slidedraft");

    let tokio_runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime::run(&config, client, tokio_runtime.handle().clone())?;
    Ok(())
}
