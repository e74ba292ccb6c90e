use alias_shortener::config::{self, Config};
use alias_shortener::server;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config)?;

    tracing::info!(env = %config.env, "Starting alias-shortener");
    tracing::debug!("Debug logs are enabled");
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!(error = ?e, "Server failed");
        return Err(e);
    }

    Ok(())
}

/// Installs the global tracing subscriber in the configured format.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).context("Invalid RUST_LOG filter")?;
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}
