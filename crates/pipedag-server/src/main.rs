//! Pipedag server binary.

use anyhow::Context;
use pipedag_server::{ServerArgs, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Example: RUST_LOG=pipedag=debug,tower_http=debug pipedag-server
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("pipedag=info,pipedag_server=info,tower_http=info")
        }))
        .with_writer(std::io::stderr)
        .init();

    let args = ServerArgs::parse_args();
    let config = ServerConfig::load(&args).context("Invalid server configuration")?;

    tracing::info!("Starting pipedag-server");

    pipedag_server::serve(config).await?;

    Ok(())
}
